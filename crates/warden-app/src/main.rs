use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;

use warden_app::game_loop::LoopOptions;
use warden_app::init_logging;
use warden_app::report;
use warden_app::state::AppState;
use warden_core::constants::DEFAULT_SEED;
use warden_core::state::SceneSnapshot;
use warden_sim::scenario::{default_scenario, load_scenario};
use warden_sim::{SimConfig, SimulationEngine};

/// Runs patrolling, wandering and sentry agents against a player avatar
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file. The built-in courtyard is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Seed for wander sampling and agent seeds
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of physics ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Pace the loop at the physics rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print every snapshot as a JSON line on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = match &args.scenario {
        Some(path) => load_scenario(path).with_context(|| format!("loading scenario {}", path.display()))?,
        None => default_scenario(),
    };
    let engine = SimulationEngine::from_scenario(&scenario, SimConfig { seed: args.seed })
        .with_context(|| format!("building scenario `{}`", scenario.name))?;

    // Snapshots are rendered on the main thread so stdout stays ordered.
    let (snapshot_tx, snapshot_rx) = mpsc::channel::<SceneSnapshot>();
    let state = AppState::new();
    let options = LoopOptions {
        max_ticks: Some(args.ticks),
        realtime: args.realtime,
    };
    state.start(engine, options, move |snapshot: &SceneSnapshot| {
        // The receiver lives until the loop ends.
        let _ = snapshot_tx.send(snapshot.clone());
    })?;

    for snapshot in snapshot_rx {
        if args.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            for event in &snapshot.events {
                log::info!("{}", report::describe(&snapshot, event));
            }
        }
    }

    let summary = state.join()?;
    log::info!(
        "scenario `{}`: {} ticks, {} shots, {} state changes, {} ragdolls, {} player hits",
        scenario.name,
        summary.ticks,
        summary.shots_fired,
        summary.state_changes,
        summary.ragdolls,
        summary.player_hits
    );
    Ok(())
}
