//! Scene snapshot: the complete observable state published after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, DestinationSource, SimPhase};
use crate::events::AgentEvent;
use crate::types::{EntityId, SimTime};

/// Complete scene state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub agents: Vec<AgentSnapshot>,
    pub player: Option<PlayerSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub events: Vec<AgentEvent>,
}

/// One AI agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: EntityId,
    pub name: String,
    pub position: Vec3,
    /// Yaw in degrees, normalized to [0, 360).
    pub yaw_degrees: f32,
    pub velocity: Vec3,
    pub state: AgentState,
    pub destination: Option<Vec3>,
    pub destination_source: Option<DestinationSource>,
    /// Ticks until the agent may fire again.
    pub cooldown: u32,
    pub grounded: bool,
    pub walk_speed: f32,
}

/// The player avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: EntityId,
    pub position: Vec3,
    pub hits: u32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileSnapshot {
    pub id: EntityId,
    pub owner: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
}
