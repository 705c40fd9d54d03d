use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use podracer_app::{game_loop, tuning};
use podracer_nav::NavigationSolver;

/// Pod racing controller: reads observations on stdin, writes commands on stdout.
#[derive(Parser, Debug)]
#[command(name = "podracer", version)]
struct Args {
    /// Seed for route generation (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding solver tunables.
    #[arg(long)]
    tuning: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // stdout carries commands, so logs must go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = tuning::load_config(args.tuning.as_deref(), args.seed)?;
    info!(?config, "starting race");

    let mut solver = NavigationSolver::new(config);
    let ticks = game_loop::run(&mut solver, io::stdin().lock(), io::stdout().lock())?;

    info!(ticks, laps = solver.topology().laps(), "input closed");
    Ok(())
}
