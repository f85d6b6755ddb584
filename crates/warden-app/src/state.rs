//! Application state shared between the runner and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context};

use warden_core::commands::HostCommand;
use warden_core::state::SceneSnapshot;
use warden_sim::SimulationEngine;

use crate::game_loop::{self, LoopOptions, LoopSummary};

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A host command to forward to the scene engine.
    Host(HostCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state can be shared across threads
/// - `Mutex<Option<...>>` holds handles that only exist once the loop is started
/// - `Arc<Mutex<...>>` holds the latest snapshot, written by the game loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
    /// Join handle of the running loop.
    pub loop_handle: Mutex<Option<JoinHandle<LoopSummary>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the game loop on its own thread. Fails if one is already running.
    pub fn start<F>(&self, engine: SimulationEngine, options: LoopOptions, on_snapshot: F) -> anyhow::Result<()>
    where
        F: FnMut(&SceneSnapshot) + Send + 'static,
    {
        let mut handle_lock = self
            .loop_handle
            .lock()
            .map_err(|e| anyhow!("loop handle lock poisoned: {e}"))?;
        if handle_lock.is_some() {
            bail!("game loop already running");
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(engine, self.latest_snapshot.clone(), options, on_snapshot)?;

        let mut tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        *tx_lock = Some(cmd_tx);
        *handle_lock = Some(handle);
        Ok(())
    }

    /// Send a host command to the running loop.
    pub fn send_command(&self, command: HostCommand) -> anyhow::Result<()> {
        let tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Host(command))
                .context("game loop has stopped"),
            None => bail!("game loop not started"),
        }
    }

    /// Latest snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<SceneSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Wait for the loop to finish on its own (tick limit reached).
    pub fn join(&self) -> anyhow::Result<LoopSummary> {
        let handle = self
            .loop_handle
            .lock()
            .map_err(|e| anyhow!("loop handle lock poisoned: {e}"))?
            .take()
            .context("game loop not started")?;
        handle
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))
    }

    /// Ask the loop to stop, then wait for it.
    pub fn shutdown(&self) -> anyhow::Result<LoopSummary> {
        if let Ok(tx_lock) = self.command_tx.lock() {
            if let Some(tx) = tx_lock.as_ref() {
                // The loop may already have exited; joining below still works.
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
        self.join()
    }
}
