//! Perfect maze generation.
//!
//! A maze is produced in three stages: two identical lattices are built over
//! the odd cells of the requested grid, a randomized depth-first walk over the
//! first one knocks edges out of the second, and whatever edges survive are
//! drawn as walls into an [`OccupancyGrid`] of the requested size.
//!
//! ```
//! use mazegen::{Generator, generate_maze};
//!
//! let maze = generate_maze(7, 7, Generator::Dfs, Some(42)).unwrap();
//! assert_eq!((maze.width(), maze.height()), (7, 7));
//! assert!(maze[(0, 1)].is_path());
//! ```

pub mod error;
pub mod export;
pub mod generators;
pub mod maze;

pub use error::{MazeError, Result};
pub use export::{generate_png, save_png, to_pixels};
pub use generators::{Generator, generate_maze, generate_maze_named, generate_maze_with_rng};
pub use maze::{GridCell, OccupancyGrid};
