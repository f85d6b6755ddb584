//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in the AI controller, not components.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// World-space placement of an entity. `position` is the body origin (feet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Dynamic body driven by the kinematic integrator.
/// Angular motion is never simulated: characters are turned explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigidBody {
    pub velocity: Vec3,
    pub mass: f32,
    pub collision_layer: u32,
}

/// Analytic collision shape, expressed relative to the owning transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    Sphere {
        radius: f32,
    },
    /// Upright capsule. `height` includes both hemispherical caps.
    Capsule {
        radius: f32,
        height: f32,
        center: Vec3,
    },
    /// Axis-aligned box (rotation is ignored for boxes).
    Cuboid {
        half_extents: Vec3,
        center: Vec3,
    },
}

/// Collision volume queried by traces and overlap tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub shape: ColliderShape,
    pub layer: u32,
}

/// Human-readable entity name (used for logs, snapshots and host commands).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Marks the entity the agents perceive as their target.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerAvatar {
    /// Number of projectiles that have struck the player.
    pub hits: u32,
}

/// Marks a body that has gone limp. Its `RigidBody` has been removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ragdoll;

/// A fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Entity that fired it. Never struck by its own projectile.
    pub owner: EntityId,
    /// Tick the projectile was spawned on.
    pub spawned_tick: u64,
}

/// Walk-clip playback state, driven by the agent's locomotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub walk_playing: bool,
    pub walk_speed: f32,
    /// Crossfade time requested when the clip was last started.
    pub fade_secs: f32,
}

/// Point the agent's head bone is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadLook {
    pub target: Option<Vec3>,
}
