//! Capabilities the AI core consumes from its host.
//!
//! The host resolves these once per entity (typed handles, no name lookups)
//! and lends them to the controller for the duration of a callback.

use glam::{Quat, Vec3};

use warden_core::enums::BodyTag;
use warden_core::types::EntityId;

use crate::geometry;

/// Read and turn the agent's transform.
pub trait FacingController {
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    /// Rotate about +Y by `degrees` (positive turns left).
    fn yaw(&mut self, degrees: f32);
    /// Point the head bone at a world position, if the rig has one.
    fn look_head_at(&mut self, _point: Vec3) {}

    fn forward(&self) -> Vec3 {
        geometry::forward(self.rotation())
    }
}

/// Drive the agent's rigid body.
pub trait PhysicsBody {
    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);
}

/// Play the walk clip. Locomotion decides when; the host decides how.
pub trait AnimationDriver {
    fn play_walk(&mut self, fade_secs: f32);
    fn stop_walk(&mut self);
    fn set_walk_speed(&mut self, speed: f32);
}

/// One collision along a trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    pub entity: EntityId,
    pub tag: BodyTag,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// World raycast service.
pub trait LineTrace {
    /// Cast a ray and return every hit within `max_distance`, nearest first.
    fn trace(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layer_mask: u32,
    ) -> Vec<TraceHit>;
}

/// A single contact between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Collision delivered to the controller of one of the bodies involved.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionNotification {
    /// The other body, or `None` for static world geometry such as the ground.
    pub other: Option<EntityId>,
    pub contacts: Vec<ContactPoint>,
}

/// The perceived target, looked up by the host each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub id: EntityId,
    pub position: Vec3,
}
