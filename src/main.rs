//! YatraNav demo: run a survey agent inside a walled arena and print the
//! resulting coverage map.
//!
//! Usage:
//!   cargo run -- --ticks 5000
//!   cargo run -- --config configs/survey.toml
//!
//! Enable logging to watch the behavior decisions:
//!   RUST_LOG=debug cargo run

use std::path::PathBuf;

use clap::Parser;
use log::info;

use yatra_nav::config::YatraConfig;
use yatra_nav::core::{Direction, WorldPosition};
use yatra_nav::explore::ExplorationController;
use yatra_nav::harness::{bordered_map, run_ticks, SimulatedAgent};
use yatra_nav::station::LocalStation;
use yatra_nav::Result;

/// Grid coverage survey demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run
    #[arg(long, default_value = "5000")]
    ticks: usize,

    /// Seconds of simulated time per tick
    #[arg(long, default_value = "0.1")]
    dt: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            YatraConfig::load(path)?
        }
        None => YatraConfig::default(),
    };

    let size = config.grid.size();
    let mut station = LocalStation::new(bordered_map(size));
    let start = WorldPosition::new(
        (size.width / 2) as f32 * config.grid.cell_size,
        0.0,
        (size.height / 2) as f32 * config.grid.cell_size,
    );
    let mut agent = SimulatedAgent::new(start, Direction::East);
    let mut controller =
        ExplorationController::new(config.behavior.clone(), config.grid.cell_size);

    info!(
        "Surveying a {}x{} arena from {:?}",
        size.width, size.height, start
    );
    let summary = run_ticks(&mut controller, &mut agent, &mut station, args.ticks, args.dt);

    let counts = station.map().counts();
    println!(
        "ran {} ticks ({}), covered {} of {} open cells, {} images",
        summary.ticks,
        controller.phase().name(),
        counts.covered,
        counts.covered + counts.empty,
        station.images().len()
    );
    for row in station.map().ascii_rows() {
        println!("{}", row);
    }

    Ok(())
}
