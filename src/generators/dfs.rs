use rand::{Rng, seq::SliceRandom};

use super::lattice::{Lattice, LatticeIndex};

/// Outcome of a randomized depth-first carve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carving {
    /// Nodes in the order they were first visited.
    pub order: Vec<LatticeIndex>,
    /// Edges knocked out of the wall lattice, as `(from, to)` in traversal order.
    pub passages: Vec<(LatticeIndex, LatticeIndex)>,
}

/// A node on the traversal stack with the neighbors it still has to try.
struct Frame {
    node: LatticeIndex,
    pending: std::vec::IntoIter<LatticeIndex>,
}

/// Randomized depth-first search over `travel`, starting from its start node.
///
/// Every edge the walk crosses is removed from `walls`, so once the walk is
/// done the edges left in `walls` are exactly the maze walls and the carved
/// passages form a spanning tree. The goal node is marked visited when it is
/// reached but never expanded, which leaves it as a leaf of the tree.
///
/// The walk uses an explicit stack, but visits nodes in the same order as the
/// recursive shuffle-then-recurse formulation for the same random stream.
pub fn carve<R: Rng + ?Sized>(travel: &Lattice, walls: &mut Lattice, rng: &mut R) -> Carving {
    let mut carving = Carving::default();
    if travel.is_empty() {
        return carving;
    }

    let mut visited = vec![false; travel.len()];
    let mut stack: Vec<Frame> = Vec::new();

    enter(travel, travel.start(), &mut visited, &mut stack, &mut carving, rng);

    while let Some(frame) = stack.last_mut() {
        let from = frame.node;
        let Some(next) = frame.pending.next() else {
            // Dead end, backtrack
            stack.pop();
            continue;
        };
        if visited[travel.ravel_index(next)] {
            continue;
        }

        if walls.remove_edge(from, next) {
            tracing::trace!("carved passage {:?} -> {:?}", from, next);
        }
        carving.passages.push((from, next));
        enter(travel, next, &mut visited, &mut stack, &mut carving, rng);
    }

    carving
}

/// Marks `node` visited and, unless it is the goal, pushes it with its
/// neighbors in random order.
fn enter<R: Rng + ?Sized>(
    travel: &Lattice,
    node: LatticeIndex,
    visited: &mut [bool],
    stack: &mut Vec<Frame>,
    carving: &mut Carving,
    rng: &mut R,
) {
    visited[travel.ravel_index(node)] = true;
    carving.order.push(node);

    if travel[node].is_goal {
        tracing::debug!("goal {:?} reached after {} nodes", node, carving.order.len());
        return;
    }

    let mut pending = travel[node].neighbors().iter().collect::<Vec<_>>();
    pending.shuffle(rng);
    stack.push(Frame {
        node,
        pending: pending.into_iter(),
    });
}
