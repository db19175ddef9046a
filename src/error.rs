use thiserror::Error;

/// Errors produced while generating or exporting a maze.
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    #[error("Maze dimensions {width}x{height} are too small, both sides must be at least 3")]
    DimensionsTooSmall { width: u16, height: u16 },

    #[error("Lattice span {width}x{height} is invalid, both sides must be odd and positive")]
    InvalidLatticeSpan { width: u16, height: u16 },

    #[error(
        "Lattice spans {actual_width}x{actual_height} but a {width}x{height} grid needs {expected_width}x{expected_height}"
    )]
    LatticeMismatch {
        width: u16,
        height: u16,
        expected_width: u16,
        expected_height: u16,
        actual_width: u16,
        actual_height: u16,
    },

    #[error("Image export failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, MazeError>;
