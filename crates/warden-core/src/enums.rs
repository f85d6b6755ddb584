//! Enumeration types used throughout the runtime.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// What kind of body an entity is. Perception uses it to skip projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyTag {
    Agent,
    Player,
    Projectile,
    Obstacle,
}

/// Behavior state of an AI agent.
///
/// The fire cooldown is tracked separately: it gates firing in every state
/// but never stops pursuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum AgentState {
    /// Following its own destination source (path, wander, or nothing).
    #[default]
    Patrol,
    /// Target seen; destination overridden with its last-seen ground position.
    Chasing { last_seen: Vec3 },
    /// Body is limp and no longer driven. Terminal.
    Ragdoll,
}

impl AgentState {
    pub fn is_alive(&self) -> bool {
        !matches!(self, AgentState::Ragdoll)
    }

    pub fn is_chasing(&self) -> bool {
        matches!(self, AgentState::Chasing { .. })
    }

    /// Short label for logs and snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            AgentState::Patrol => "patrol",
            AgentState::Chasing { .. } => "chasing",
            AgentState::Ragdoll => "ragdoll",
        }
    }
}

/// Where the navigator's current destination came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinationSource {
    /// Waypoint at this index of the fixed path.
    PathNode(usize),
    /// Randomly sampled wander point.
    Wander,
    /// Last-seen target position written by the engagement logic.
    ChaseOverride,
}

/// Rotational direction of a turn. Left is positive yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Sign applied to the yaw step.
    pub fn sign(&self) -> f32 {
        match self {
            TurnDirection::Left => 1.0,
            TurnDirection::Right => -1.0,
        }
    }
}

/// Top-level run state of the scene host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}
