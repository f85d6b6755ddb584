//! Fundamental identity and timing types.
//!
//! Spatial values use `glam` directly: Y is up, +Z is an unrotated body's
//! forward direction, and yaw is measured in degrees about +Y.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a scene entity.
///
/// The host derives it from its own entity handle when an entity is spawned,
/// so the AI core can compare identities without holding host references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current physics tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per physics tick at the default rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::PHYSICS_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
