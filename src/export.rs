//! Raster export of finished mazes.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use image::{GrayImage, Luma};

use crate::{
    error::Result,
    generators::{Generator, generate_maze},
    maze::OccupancyGrid,
};

/// Grayscale pixels for `maze` in row-major order: passages white (255), walls black (0).
///
/// The grid itself is left untouched.
pub fn to_pixels(maze: &OccupancyGrid) -> Vec<u8> {
    maze.cells().iter().map(|c| c.luma()).collect()
}

/// Appends `.png` to `file_name`, keeping any dots already in it.
fn png_path(file_name: &Path) -> PathBuf {
    let mut path = OsString::from(file_name.as_os_str());
    path.push(".png");
    PathBuf::from(path)
}

/// Writes `maze` as an 8-bit grayscale PNG to `file_name` + `.png`.
///
/// Pixel `(x, y)` of the image is grid cell `(x, y)`. Returns the path written.
pub fn save_png(maze: &OccupancyGrid, file_name: impl AsRef<Path>) -> Result<PathBuf> {
    let path = png_path(file_name.as_ref());
    let image = GrayImage::from_fn(maze.width() as u32, maze.height() as u32, |x, y| {
        Luma([maze[(x as u16, y as u16)].luma()])
    });
    image.save(&path)?;
    tracing::info!(
        "saved {}x{} maze to {}",
        maze.width(),
        maze.height(),
        path.display()
    );
    Ok(path)
}

/// Generates a maze and saves it with [`save_png`] in one go.
pub fn generate_png(
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<u64>,
    file_name: impl AsRef<Path>,
) -> Result<PathBuf> {
    let maze = generate_maze(width, height, generator, seed)?;
    save_png(&maze, file_name)
}
