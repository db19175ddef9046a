mod dfs;
pub mod lattice;
pub mod raster;

use std::{fmt, str::FromStr, time::Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};

pub use dfs::{Carving, carve};
use lattice::Lattice;
pub use raster::rasterize;

use crate::{
    error::{MazeError, Result},
    maze::OccupancyGrid,
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Maze generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Generator {
    /// Randomized depth-first carving of a spanning tree.
    #[default]
    Dfs,
}

impl Generator {
    /// Every available strategy.
    pub const ALL: [Generator; 1] = [Generator::Dfs];

    /// Short identifier accepted by [`Generator::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Generator::Dfs => "dfs",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| MazeError::InvalidStrategy(s.to_string()))
    }
}

/// Generates a `width x height` maze with the given strategy.
///
/// With `seed` set the result is fully reproducible; otherwise the generator
/// draws from OS entropy.
pub fn generate_maze(
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<u64>,
) -> Result<OccupancyGrid> {
    let mut rng = get_rng(seed);
    generate_maze_with_rng(width, height, generator, &mut rng)
}

/// Like [`generate_maze`], but looks the strategy up by name.
pub fn generate_maze_named(
    width: u16,
    height: u16,
    strategy: &str,
    seed: Option<u64>,
) -> Result<OccupancyGrid> {
    let generator = strategy.parse::<Generator>()?;
    generate_maze(width, height, generator, seed)
}

/// Generates a maze drawing randomness from `rng`.
pub fn generate_maze_with_rng<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    generator: Generator,
    rng: &mut R,
) -> Result<OccupancyGrid> {
    raster::check_dimensions(width, height)?;

    let started = Instant::now();
    let maze = match generator {
        Generator::Dfs => randomized_dfs(width, height, rng)?,
    };
    tracing::debug!(
        "generated {}x{} maze with {} in {:?}",
        width,
        height,
        generator,
        started.elapsed()
    );
    Ok(maze)
}

fn randomized_dfs<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Result<OccupancyGrid> {
    let span_width = raster::lattice_span(width);
    let span_height = raster::lattice_span(height);

    let travel = Lattice::new(span_width, span_height)?;
    let mut walls = Lattice::new(span_width, span_height)?;
    let carving = carve(&travel, &mut walls, rng);
    tracing::debug!(
        "carved {} passages over {} lattice nodes",
        carving.passages.len(),
        travel.len()
    );

    rasterize(&walls, width, height)
}
