use std::collections::{HashSet, VecDeque};

use mazegen::{Generator, GridCell, MazeError, OccupancyGrid, generate_maze, maze::get_path_neighbors};
use proptest::prelude::*;

/// Passage cells reachable from `from`.
fn reachable(maze: &OccupancyGrid, from: (u16, u16)) -> HashSet<(u16, u16)> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(cell) = queue.pop_front() {
        for n in get_path_neighbors(cell, maze) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

/// Number of 4-adjacent passage pairs.
fn passage_edges(maze: &OccupancyGrid) -> usize {
    let mut edges = 0;
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            if maze[(x, y)].is_wall() {
                continue;
            }
            if x + 1 < maze.width() && maze[(x + 1, y)].is_path() {
                edges += 1;
            }
            if y + 1 < maze.height() && maze[(x, y + 1)].is_path() {
                edges += 1;
            }
        }
    }
    edges
}

fn border_openings(maze: &OccupancyGrid) -> Vec<(u16, u16)> {
    let mut openings = (0..maze.height())
        .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
        .filter(|&c| maze.is_boundary(c) && maze[c].is_path())
        .collect::<Vec<_>>();
    openings.sort();
    openings
}

fn has_open_square(maze: &OccupancyGrid) -> bool {
    (0..maze.height() - 1).any(|y| {
        (0..maze.width() - 1).any(|x| {
            [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]
                .iter()
                .all(|&c| maze[c].is_path())
        })
    })
}

/// Every passage cell is connected to the entrance and the passages form a tree.
fn assert_perfect(maze: &OccupancyGrid) {
    let region = reachable(maze, maze.entrance());
    assert!(region.contains(&maze.exit()), "exit unreachable");
    assert_eq!(region.len(), maze.count_paths(), "stray passage cells");
    assert_eq!(passage_edges(maze), maze.count_paths() - 1, "passages contain a cycle");
}

#[test]
fn seven_by_seven_scenario() {
    for seed in 0..50 {
        let maze = generate_maze(7, 7, Generator::Dfs, Some(seed)).unwrap();
        assert_eq!((maze.width(), maze.height()), (7, 7));
        assert_eq!(maze[(0, 1)], GridCell::Path);
        assert_eq!(border_openings(&maze), vec![(0, 1), (6, 5)]);
        assert!(!has_open_square(&maze));
        assert_perfect(&maze);
    }
}

#[test]
fn odd_mazes_are_perfect() {
    for (w, h) in [(3, 3), (5, 3), (3, 9), (21, 11), (45, 45), (101, 33)] {
        let maze = generate_maze(w, h, Generator::Dfs, Some(u64::from(w) * 31 + u64::from(h))).unwrap();
        assert_eq!((maze.width(), maze.height()), (w, h));
        assert_eq!(border_openings(&maze), vec![(0, 1), (w - 1, h - 2)]);
        assert_perfect(&maze);
    }
}

#[test]
fn even_mazes_are_perfect() {
    for (w, h) in [(4, 4), (4, 3), (3, 4), (8, 7), (7, 8), (8, 8), (30, 20), (64, 64)] {
        let maze = generate_maze(w, h, Generator::Dfs, Some(u64::from(w) + u64::from(h))).unwrap();
        assert_eq!((maze.width(), maze.height()), (w, h));
        assert_eq!(border_openings(&maze), vec![(0, 1), (w - 1, h - 2)]);
        assert!(!has_open_square(&maze));
        assert_perfect(&maze);
    }
}

#[test]
fn same_seed_same_maze() {
    let a = generate_maze(45, 45, Generator::Dfs, Some(2024)).unwrap();
    let b = generate_maze(45, 45, Generator::Dfs, Some(2024)).unwrap();
    assert_eq!(a.to_rows(), b.to_rows());
}

#[test]
fn different_seeds_differ() {
    let a = generate_maze(45, 45, Generator::Dfs, Some(1)).unwrap();
    let b = generate_maze(45, 45, Generator::Dfs, Some(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn unknown_strategy_is_rejected() {
    let err = mazegen::generate_maze_named(7, 7, "bogus", None).unwrap_err();
    assert!(matches!(&err, MazeError::InvalidStrategy(name) if name == "bogus"));
    assert_eq!(err.to_string(), "Invalid strategy: bogus");
}

#[test]
fn unseeded_generation_works() {
    let maze = generate_maze(15, 15, Generator::Dfs, None).unwrap();
    assert_perfect(&maze);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_size_is_perfect(width in 3u16..60, height in 3u16..60, seed in any::<u64>()) {
        let maze = generate_maze(width, height, Generator::Dfs, Some(seed)).unwrap();
        prop_assert_eq!((maze.width(), maze.height()), (width, height));
        prop_assert_eq!(border_openings(&maze), vec![(0, 1), (width - 1, height - 2)]);
        prop_assert!(!has_open_square(&maze));

        let region = reachable(&maze, maze.entrance());
        prop_assert!(region.contains(&maze.exit()));
        prop_assert_eq!(region.len(), maze.count_paths());
        prop_assert_eq!(passage_edges(&maze), maze.count_paths() - 1);
    }
}
