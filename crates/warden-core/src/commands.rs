//! Commands sent from the embedding application to the scene host.
//!
//! Commands are queued and processed at the next physics tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// All possible host-side actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Teleport the player avatar.
    SetTargetPosition { position: Vec3 },
    /// Strip the named agent's body so it goes limp.
    RagdollAgent { name: String },
    /// Stop advancing ticks.
    Pause,
    /// Resume advancing ticks.
    Resume,
}
