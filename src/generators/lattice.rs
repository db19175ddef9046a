use crate::error::{MazeError, Result};

/// Position of a node in a [`Lattice`], by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatticeIndex {
    pub col: u16,
    pub row: u16,
}

impl LatticeIndex {
    pub const fn new(col: u16, row: u16) -> Self {
        LatticeIndex { col, row }
    }

    /// Grid-space coordinates of the node: always odd.
    pub fn coord(self) -> (u16, u16) {
        (1 + 2 * self.col, 1 + 2 * self.row)
    }
}

/// Up to four adjacent nodes, kept in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    slots: [Option<LatticeIndex>; 4],
    len: u8,
}

impl Neighbors {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: LatticeIndex) -> bool {
        self.iter().any(|n| n == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = LatticeIndex> + '_ {
        self.slots[..self.len()].iter().flatten().copied()
    }

    fn push(&mut self, index: LatticeIndex) {
        // A lattice node never has more than four neighbors.
        debug_assert!(self.len() < self.slots.len(), "neighbor list is full");
        self.slots[self.len()] = Some(index);
        self.len += 1;
    }

    /// Removes `index`, shifting later entries down to keep their order.
    fn remove(&mut self, index: LatticeIndex) -> bool {
        let Some(pos) = self.iter().position(|n| n == index) else {
            return false;
        };
        let len = self.len();
        self.slots.copy_within(pos + 1..len, pos);
        self.slots[len - 1] = None;
        self.len -= 1;
        true
    }
}

/// A single vertex of the lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeNode {
    pub index: LatticeIndex,
    pub x: u16,
    pub y: u16,
    pub is_start: bool,
    pub is_goal: bool,
    neighbors: Neighbors,
}

impl LatticeNode {
    fn new(index: LatticeIndex) -> Self {
        let (x, y) = index.coord();
        LatticeNode {
            index,
            x,
            y,
            is_start: false,
            is_goal: false,
            neighbors: Neighbors::default(),
        }
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }
}

/// A rectangular graph of nodes sitting on the odd cells of a maze grid.
///
/// Every node starts out linked to its left, right, upper and lower
/// neighbors. The travel lattice is only read; the wall lattice loses one
/// edge for every passage carved through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    nodes: Box<[LatticeNode]>,
    columns: u16,
    rows: u16,
}

impl Lattice {
    /// Builds a fully connected lattice covering grid coordinates `1..=width`
    /// by `1..=height`.
    ///
    /// Both spans must be odd and positive. The node at `(1, 1)` is the start,
    /// the node at `(width, height)` is the goal.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidLatticeSpan { width, height });
        }

        let columns = width / 2 + 1;
        let rows = height / 2 + 1;
        let mut lattice = Lattice {
            nodes: (0..rows)
                .flat_map(|row| (0..columns).map(move |col| LatticeIndex::new(col, row)))
                .map(LatticeNode::new)
                .collect(),
            columns,
            rows,
        };

        for row in 0..rows {
            for col in 0..columns {
                let here = LatticeIndex::new(col, row);
                // Connect to the node on the left
                if col > 0 {
                    lattice.add_edge(LatticeIndex::new(col - 1, row), here);
                }
                // Connect to the node above
                if row > 0 {
                    lattice.add_edge(LatticeIndex::new(col, row - 1), here);
                }
            }
        }

        let start = lattice.start();
        let goal = lattice.goal();
        lattice.node_mut(start).is_start = true;
        lattice.node_mut(goal).is_goal = true;

        Ok(lattice)
    }

    /// Number of node columns.
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of node rows.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Grid-space width covered by the lattice, i.e. the x coordinate of the last column.
    pub fn span_width(&self) -> u16 {
        (self.columns - 1) * 2 + 1
    }

    /// Grid-space height covered by the lattice, i.e. the y coordinate of the last row.
    pub fn span_height(&self) -> u16 {
        (self.rows - 1) * 2 + 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> LatticeIndex {
        LatticeIndex::new(0, 0)
    }

    pub fn goal(&self) -> LatticeIndex {
        LatticeIndex::new(self.columns - 1, self.rows - 1)
    }

    /// Flat position of `index` in row-major order.
    pub fn ravel_index(&self, index: LatticeIndex) -> usize {
        index.row as usize * self.columns as usize + index.col as usize
    }

    pub fn node(&self, index: LatticeIndex) -> &LatticeNode {
        &self.nodes[self.ravel_index(index)]
    }

    fn node_mut(&mut self, index: LatticeIndex) -> &mut LatticeNode {
        let idx = self.ravel_index(index);
        &mut self.nodes[idx]
    }

    /// Nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &LatticeNode> {
        self.nodes.iter()
    }

    /// Links `a` and `b` in both directions.
    fn add_edge(&mut self, a: LatticeIndex, b: LatticeIndex) {
        self.node_mut(a).neighbors.push(b);
        self.node_mut(b).neighbors.push(a);
    }

    /// Unlinks `a` and `b` in both directions.
    ///
    /// Returns `false` if there was no edge between them.
    pub fn remove_edge(&mut self, a: LatticeIndex, b: LatticeIndex) -> bool {
        if !self.node_mut(a).neighbors.remove(b) {
            return false;
        }
        let removed = self.node_mut(b).neighbors.remove(a);
        debug_assert!(removed, "neighbor relation must be symmetric");
        true
    }

    pub fn has_edge(&self, a: LatticeIndex, b: LatticeIndex) -> bool {
        self.node(a).neighbors.contains(b)
    }

    /// Number of undirected edges remaining.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }
}

impl std::ops::Index<LatticeIndex> for Lattice {
    type Output = LatticeNode;

    fn index(&self, index: LatticeIndex) -> &Self::Output {
        self.node(index)
    }
}
