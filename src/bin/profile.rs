use std::time::{Duration, Instant};

use mazegen::{Generator, generate_maze};

/// Side length of the mazes generated per iteration.
const SIDE: u16 = 2047;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let mut total = Duration::ZERO;
    for i in 0..num_iters {
        let started = Instant::now();
        let maze = generate_maze(SIDE, SIDE, Generator::Dfs, Some(i as u64))?;
        let elapsed = started.elapsed();
        total += elapsed;
        tracing::info!(
            "iteration {}: {} passage cells in {:?}",
            i,
            maze.count_paths(),
            elapsed
        );
    }
    tracing::info!(
        "{} iterations, {:?} on average",
        num_iters,
        total / num_iters.max(1) as u32
    );
    Ok(())
}
