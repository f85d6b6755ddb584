//! Locomotion controller: turns the agent toward a point and drives it forward.
//!
//! Turning runs at a fixed angular rate in the shorter rotational direction,
//! with a dead zone around the desired yaw and the step clamped to the
//! remaining angle so the agent never overshoots.

use glam::{Quat, Vec3};

use warden_core::constants::{
    DEFAULT_FRAME_RATE, MOVE_FORCE, TURN_DEAD_ZONE_DEGREES, TURN_SPEED,
};
use warden_core::enums::TurnDirection;

use crate::collaborators::{FacingController, PhysicsBody};
use crate::geometry::{forward, normalize_degrees, yaw_degrees, yaw_of_direction};

/// A single turn step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnPlan {
    pub direction: TurnDirection,
    /// Signed yaw change in degrees (positive = left).
    pub delta_degrees: f32,
}

/// Why a turn was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingSkip {
    /// The facing point coincides with the agent.
    CoincidentTarget,
    /// The facing point is directly above or below the agent.
    VerticalTarget,
}

/// Result of one call to [`LocomotionController::turn_toward`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnOutcome {
    Turned(TurnPlan),
    /// Already inside the dead zone.
    Facing,
    Skipped(FacingSkip),
}

/// Desired-minus-current yaw, wrapped into `[0, 360)`.
pub fn yaw_difference(current_yaw: f32, desired_yaw: f32) -> f32 {
    normalize_degrees(desired_yaw - current_yaw)
}

/// Plan a turn of at most `max_step` degrees from `current_yaw` toward `desired_yaw`.
///
/// Returns `None` inside the dead zone. A difference of exactly 180° turns left.
pub fn plan_turn(current_yaw: f32, desired_yaw: f32, max_step: f32) -> Option<TurnPlan> {
    let diff = yaw_difference(current_yaw, desired_yaw);
    if diff < TURN_DEAD_ZONE_DEGREES || diff > 360.0 - TURN_DEAD_ZONE_DEGREES {
        return None;
    }

    let (direction, remaining) = if diff <= 180.0 {
        (TurnDirection::Left, diff)
    } else {
        (TurnDirection::Right, 360.0 - diff)
    };
    let step = max_step.max(0.0).min(remaining);

    Some(TurnPlan {
        direction,
        delta_degrees: direction.sign() * step,
    })
}

/// Converts facing and movement intent into turn and drive commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionController {
    /// Degrees per frame at the reference rate.
    pub turn_speed: f32,
    /// Forward speed while moving.
    pub move_force: f32,
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self {
            turn_speed: TURN_SPEED,
            move_force: MOVE_FORCE,
        }
    }
}

impl LocomotionController {
    pub fn new(turn_speed: f32, move_force: f32) -> Self {
        Self {
            turn_speed,
            move_force,
        }
    }

    /// Largest yaw step for a tick of `dt` seconds. A missing or zero frame
    /// rate falls back to [`DEFAULT_FRAME_RATE`].
    pub fn max_turn_step(&self, dt: f32, frame_rate: Option<u32>) -> f32 {
        let rate = frame_rate.filter(|r| *r > 0).unwrap_or(DEFAULT_FRAME_RATE);
        self.turn_speed * dt * rate as f32
    }

    /// Yaw the agent toward `point`, ignoring pitch.
    pub fn turn_toward<F>(
        &self,
        facing: &mut F,
        point: Vec3,
        dt: f32,
        frame_rate: Option<u32>,
    ) -> TurnOutcome
    where
        F: FacingController + ?Sized,
    {
        let look = point - facing.position();
        if look == Vec3::ZERO {
            log::debug!("turn skipped: facing point coincides with agent");
            return TurnOutcome::Skipped(FacingSkip::CoincidentTarget);
        }
        let Some(desired) = yaw_of_direction(look) else {
            log::debug!("turn skipped: facing point is vertical to agent ({look})");
            return TurnOutcome::Skipped(FacingSkip::VerticalTarget);
        };

        let current = yaw_degrees(facing.rotation());
        match plan_turn(current, desired, self.max_turn_step(dt, frame_rate)) {
            Some(plan) => {
                facing.yaw(plan.delta_degrees);
                TurnOutcome::Turned(plan)
            }
            None => TurnOutcome::Facing,
        }
    }

    /// Apply movement intent to the body.
    ///
    /// Moving sets the planar velocity to `forward * move_force`; not moving
    /// halts planar motion. Vertical velocity is left to gravity either way.
    /// Returns the new velocity.
    pub fn drive<B>(&self, body: &mut B, rotation: Quat, moving: bool) -> Vec3
    where
        B: PhysicsBody + ?Sized,
    {
        let vertical = body.linear_velocity().y;
        let planar = if moving {
            let heading = forward(rotation);
            Vec3::new(heading.x, 0.0, heading.z) * self.move_force
        } else {
            Vec3::ZERO
        };
        let velocity = planar + Vec3::Y * vertical;
        body.set_linear_velocity(velocity);
        velocity
    }
}
