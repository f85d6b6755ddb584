//! Field-of-view gate and forward line-of-trace.
//!
//! Perception answers one question per frame: can the agent see its target
//! straight ahead? The FoV test is horizontal only. The trace runs along the
//! agent's forward vector, not toward the target, so a target inside the FoV
//! but off the forward line reports whatever the ray hits first.

use glam::Vec3;

use warden_core::constants::{EYE_HEIGHT, GROUND_HEIGHT, TRACE_LAYER_MASK, TRACE_RANGE};
use warden_core::enums::BodyTag;
use warden_core::types::EntityId;

use crate::collaborators::{LineTrace, TargetView, TraceHit};
use crate::geometry::planar_angle_degrees;

/// Result of the horizontal FoV test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FovCheck {
    /// Angle strictly below half the FoV.
    Inside(f32),
    Outside(f32),
    /// Forward or target direction has no horizontal component.
    Degenerate,
}

/// Horizontal angle between `forward` and the direction from `from` to `to`,
/// tested against half of `fov_degrees`.
pub fn fov_check(forward: Vec3, from: Vec3, to: Vec3, fov_degrees: f32) -> FovCheck {
    match planar_angle_degrees(forward, to - from) {
        Some(angle) if angle < fov_degrees * 0.5 => FovCheck::Inside(angle),
        Some(angle) => FovCheck::Outside(angle),
        None => FovCheck::Degenerate,
    }
}

/// Head position the forward trace starts from.
pub fn trace_origin(position: Vec3) -> Vec3 {
    position + Vec3::Y * EYE_HEIGHT
}

/// First hit that is neither the agent itself nor a projectile.
pub fn first_candidate(hits: &[TraceHit], self_id: EntityId) -> Option<&TraceHit> {
    hits.iter()
        .find(|hit| hit.entity != self_id && hit.tag != BodyTag::Projectile)
}

/// What the forward trace found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sighting {
    /// The target is the first candidate. Position is pinned to the ground.
    Target { position: Vec3 },
    /// Something else is in the way.
    Obstructed { entity: EntityId, point: Vec3 },
    /// Nothing but self or projectiles within range.
    Clear,
}

/// Outcome of one perception pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Perception {
    NoTarget,
    OutsideFov { angle: f32 },
    /// Zero forward or a target directly above/below; treated as not visible.
    DegenerateFacing,
    Traced(Sighting),
}

impl Perception {
    pub fn target_seen(&self) -> bool {
        matches!(self, Perception::Traced(Sighting::Target { .. }))
    }
}

/// Run the FoV gate and, if it passes, the forward trace.
pub fn perceive<T>(
    self_id: EntityId,
    position: Vec3,
    forward: Vec3,
    target: Option<&TargetView>,
    fov_degrees: f32,
    tracer: &T,
) -> Perception
where
    T: LineTrace + ?Sized,
{
    let Some(target) = target else {
        return Perception::NoTarget;
    };

    match fov_check(forward, position, target.position, fov_degrees) {
        FovCheck::Inside(_) => {}
        FovCheck::Outside(angle) => return Perception::OutsideFov { angle },
        FovCheck::Degenerate => {
            log::debug!("agent {self_id}: perception skipped, degenerate facing");
            return Perception::DegenerateFacing;
        }
    }

    let direction = forward.normalize_or_zero();
    let hits = tracer.trace(trace_origin(position), direction, TRACE_RANGE, TRACE_LAYER_MASK);

    let sighting = match first_candidate(&hits, self_id) {
        None => Sighting::Clear,
        Some(hit) if hit.entity == target.id => Sighting::Target {
            position: Vec3::new(target.position.x, GROUND_HEIGHT, target.position.z),
        },
        Some(hit) => Sighting::Obstructed {
            entity: hit.entity,
            point: hit.point,
        },
    };
    Perception::Traced(sighting)
}
