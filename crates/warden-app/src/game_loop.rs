//! Game loop thread: runs the scene engine at the physics rate and publishes snapshots.
//!
//! Commands arrive via `mpsc` channel. Snapshots are handed to a callback and
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;

use warden_core::constants::PHYSICS_RATE;
use warden_core::events::AgentEvent;
use warden_core::state::SceneSnapshot;
use warden_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / PHYSICS_RATE as u64);

/// How the loop is paced and when it stops.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the physics rate. Otherwise run flat out.
    pub realtime: bool,
}

/// Totals gathered over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub shots_fired: u64,
    pub state_changes: u64,
    pub ragdolls: u64,
    pub player_hits: u32,
}

impl LoopSummary {
    /// Fold one snapshot into the totals.
    pub fn observe(&mut self, snapshot: &SceneSnapshot) {
        self.ticks += 1;
        for event in &snapshot.events {
            match event {
                AgentEvent::Fired { .. } => self.shots_fired += 1,
                AgentEvent::StateChanged { .. } => self.state_changes += 1,
                AgentEvent::Ragdolled { .. } => self.ragdolls += 1,
                AgentEvent::DestinationReached { .. } | AgentEvent::ProjectileImpact { .. } => {}
            }
        }
        if let Some(player) = &snapshot.player {
            self.player_hits = player.hits;
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the run's summary.
pub fn spawn_game_loop<F>(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
    options: LoopOptions,
    on_snapshot: F,
) -> anyhow::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)>
where
    F: FnMut(&SceneSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("warden-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot, options, on_snapshot))
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the tick limit, a Shutdown command or channel disconnect.
fn run_game_loop<F>(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
    options: LoopOptions,
    mut on_snapshot: F,
) -> LoopSummary
where
    F: FnMut(&SceneSnapshot),
{
    let mut summary = LoopSummary::default();
    let mut next_tick_time = Instant::now();
    let mut disconnected = false;

    log::info!("game loop started");
    loop {
        if options.max_ticks.is_some_and(|max| summary.ticks >= max) {
            break;
        }

        // 1. Drain all pending commands
        while !disconnected {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Host(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down after {} ticks", summary.ticks);
                    return summary;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                // A bounded run keeps going without a controller.
                Err(mpsc::TryRecvError::Disconnected) => {
                    if options.max_ticks.is_none() {
                        return summary;
                    }
                    disconnected = true;
                }
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        summary.observe(&snapshot);
        on_snapshot(&snapshot);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    log::info!("game loop finished after {} ticks", summary.ticks);
    summary
}
