//! Headless host: runs one simulation for a fixed number of frames and
//! prints the final grid as text.
//!
//! ```text
//! RUST_LOG=info life-headless --density 16 --seed 7 --generations 100
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_life::{Density, LifeRng, LifeRngState, SimEvent, SimulationConfig, SimulationController};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "life-headless", about = "Run Conway's Game of Life without a window")]
struct Args {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length (8, 16 or 32).
    #[arg(long)]
    density: Option<u32>,

    /// RNG seed for the initial layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 50)]
    generations: u64,

    /// RNG state (JSON) logged by an earlier run; replays that run's layout.
    #[arg(long)]
    rng_state: Option<String>,

    /// Do not print the final grid.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SimulationConfig::from_json(&json)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut sim = match &args.rng_state {
        Some(json) => {
            let state: LifeRngState =
                serde_json::from_str(json).context("failed to parse --rng-state")?;
            SimulationController::with_rng(config, LifeRng::from_state(&state))?
        }
        None => SimulationController::new(config)?,
    };
    if let Some(side) = args.density {
        sim.handle(SimEvent::SelectDensity(Density::new(side)?))?;
    }

    info!(rng_state = %serde_json::to_string(&sim.rng_state())?, "layout rng");
    sim.handle(SimEvent::ToggleRun)?;
    for _ in 0..args.generations {
        sim.handle(SimEvent::Tick)?;
    }

    let snapshot = sim.snapshot();
    for line in snapshot.status_lines() {
        info!("{line}");
    }
    info!(population = snapshot.population, "run finished");

    if !args.quiet {
        print!("{}", sim.grid());
    }

    sim.handle(SimEvent::ToggleRun)?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
