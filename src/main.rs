//! CLI for maze generation

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mazegen::{Generator, generate_maze, save_png};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Generate a perfect maze and save it as a PNG
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells, borders included
    #[arg(default_value_t = 45)]
    width: u16,

    /// Maze height in cells, borders included
    #[arg(default_value_t = 45)]
    height: u16,

    /// Generation strategy
    #[arg(short, long, default_value = "dfs")]
    strategy: Generator,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output file name, `.png` is appended
    #[arg(short, long, default_value = "maze")]
    output: PathBuf,

    /// Print the maze to the terminal as well
    #[arg(short, long)]
    print: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install the tracing subscriber. Filtering follows `RUST_LOG`, defaulting to `info`.
fn init_tracing(log_file: Option<&PathBuf>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_tracing(args.log_file.as_ref())?;

    tracing::info!(
        "Generating {}x{} maze with {}",
        args.width,
        args.height,
        args.strategy
    );
    let maze = generate_maze(args.width, args.height, args.strategy, args.seed)
        .context("Failed to generate maze")?;

    if args.print {
        maze.display();
    }

    let path = save_png(&maze, &args.output)
        .with_context(|| format!("Failed to save maze to {}", args.output.display()))?;
    println!("{}", path.display());
    Ok(())
}
