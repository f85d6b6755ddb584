//! Scene host for WARDEN.
//!
//! Owns the hecs ECS world, implements the AI capability traits over its
//! components, runs agents at physics and frame rate, and produces
//! SceneSnapshots for the embedding application.

pub mod adapters;
pub mod engine;
pub mod scenario;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use warden_core as core;
