//! WARDEN headless runner.
//!
//! This crate wires the scene host to a background game loop thread and
//! exposes commands, snapshots and run summaries to the command line.

pub mod game_loop;
pub mod logging;
pub mod report;
pub mod state;

pub use logging::init as init_logging;
pub use warden_core as core;
