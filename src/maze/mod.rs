pub mod cell;
mod grid;

use std::fmt;

pub use cell::GridCell;
use grid::Grid;

/// The finished maze: a `width x height` grid of passages and walls.
///
/// Coordinates are `(x, y)` with `x` running along a row and `y` down the
/// columns. The entrance is always `(0, 1)` on the left border and the exit
/// is always `(width - 1, height - 2)` on the right border.
///
/// Row views ([`row`](Self::row), [`rows`](Self::rows),
/// [`to_rows`](Self::to_rows)) are indexed `[y][x]`, so the entrance is
/// `to_rows()[1][0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    grid: Grid,
}

impl OccupancyGrid {
    /// Creates a grid of the given size with every cell passable.
    pub(crate) fn new(width: u16, height: u16) -> Self {
        OccupancyGrid {
            grid: Grid::new(width, height, GridCell::Path),
        }
    }

    /// Returns the width of the grid in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the grid in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// The opening on the left border, next to the start cell.
    pub fn entrance(&self) -> (u16, u16) {
        (0, 1)
    }

    /// The opening on the right border, next to the goal cell.
    pub fn exit(&self) -> (u16, u16) {
        (self.width() - 1, self.height() - 2)
    }

    pub fn is_boundary(&self, coord: (u16, u16)) -> bool {
        self.grid.is_boundary(coord.0, coord.1)
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        self.grid.is_in_bounds(coord.0, coord.1)
    }

    pub(crate) fn set(&mut self, coord: (u16, u16), cell: GridCell) {
        self.grid.set(coord, cell);
    }

    pub(crate) fn fill_row(&mut self, y: u16, cell: GridCell) {
        self.grid.fill_row(y, cell);
    }

    pub(crate) fn fill_column(&mut self, x: u16, cell: GridCell) {
        self.grid.fill_column(x, cell);
    }

    /// Walls off the outermost rows and columns.
    pub(crate) fn close_border(&mut self) {
        self.fill_row(0, GridCell::Wall);
        self.fill_row(self.height() - 1, GridCell::Wall);
        self.fill_column(0, GridCell::Wall);
        self.fill_column(self.width() - 1, GridCell::Wall);
    }

    /// Returns row `y`, left to right.
    pub fn row(&self, y: u16) -> &[GridCell] {
        self.grid.row(y)
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        (0..self.height()).map(move |y| self.row(y))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        self.grid.cells()
    }

    /// The grid as rows of `0` (passage) and `1` (wall), indexed `[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&c| c.value()).collect())
            .collect()
    }

    /// Number of passable cells.
    pub fn count_paths(&self) -> usize {
        self.cells().iter().filter(|c| c.is_path()).count()
    }

    /// Prints the grid to stdout.
    pub fn display(&self) {
        print!("{}", self);
    }
}

impl std::ops::Index<(u16, u16)> for OccupancyGrid {
    type Output = GridCell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Get passable neighbors of a grid cell.
/// A neighbor is a cell one step away in the cardinal directions (left, right, up, down).
pub fn get_path_neighbors(
    coord: (u16, u16),
    maze: &OccupancyGrid,
) -> impl Iterator<Item = (u16, u16)> + '_ {
    let (x, y) = coord;
    [
        // NOTE: wrapping to u16::MAX on underflow and saturating on overflow
        // both land outside the grid, so the bounds check filters them out.
        (x.wrapping_sub(1), y),
        (x.saturating_add(1), y),
        (x, y.wrapping_sub(1)),
        (x, y.saturating_add(1)),
    ]
    .into_iter()
    .filter(move |&c| maze.is_in_bounds(c) && maze[c].is_path())
}
