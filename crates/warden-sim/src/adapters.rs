//! Host-side implementations of the AI capability traits.
//!
//! Each adapter borrows the components of one entity for the duration of a
//! controller callback.

use glam::{Quat, Vec3};

use warden_core::components::{AnimationState, HeadLook, RigidBody, Transform};

use warden_ai::collaborators::{AnimationDriver, FacingController, PhysicsBody};

/// Turns an entity by editing its transform.
pub struct TransformFacing<'a> {
    pub transform: &'a mut Transform,
    pub head: Option<&'a mut HeadLook>,
}

impl FacingController for TransformFacing<'_> {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn yaw(&mut self, degrees: f32) {
        let turned = Quat::from_rotation_y(degrees.to_radians()) * self.transform.rotation;
        self.transform.rotation = turned.normalize();
    }

    fn look_head_at(&mut self, point: Vec3) {
        if let Some(head) = self.head.as_deref_mut() {
            head.target = Some(point);
        }
    }
}

/// Velocity access to a kinematic body.
pub struct BodyHandle<'a>(pub &'a mut RigidBody);

impl PhysicsBody for BodyHandle<'_> {
    fn linear_velocity(&self) -> Vec3 {
        self.0.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.0.velocity = velocity;
    }
}

/// Records walk-clip requests on the animation component.
pub struct WalkAnimation<'a>(pub &'a mut AnimationState);

impl AnimationDriver for WalkAnimation<'_> {
    fn play_walk(&mut self, fade_secs: f32) {
        if !self.0.walk_playing {
            self.0.walk_playing = true;
            self.0.fade_secs = fade_secs;
        }
    }

    fn stop_walk(&mut self) {
        self.0.walk_playing = false;
    }

    fn set_walk_speed(&mut self, speed: f32) {
        self.0.walk_speed = speed;
    }
}
