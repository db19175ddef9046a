use crossterm::style::{Color, Stylize};

use std::fmt;

/// Represents a cell in the occupancy grid, which can be either a passage or a wall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// A passable cell, stored as `0`.
    #[default]
    Path,
    /// An impassable cell, stored as `1`.
    Wall,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_path(self) -> bool {
        self == GridCell::Path
    }

    pub fn is_wall(self) -> bool {
        self == GridCell::Wall
    }

    /// Numeric occupancy value: `0` for a passage, `1` for a wall.
    pub fn value(self) -> u8 {
        match self {
            GridCell::Path => 0,
            GridCell::Wall => 1,
        }
    }

    /// Grayscale pixel value: passages are white, walls are black.
    pub fn luma(self) -> u8 {
        match self {
            GridCell::Path => u8::MAX,
            GridCell::Wall => 0,
        }
    }
}

impl From<GridCell> for u8 {
    fn from(cell: GridCell) -> Self {
        cell.value()
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            GridCell::Path => "  ".with(Color::Reset),
            GridCell::Wall => "⬜".with(Color::White),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            debug_assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
