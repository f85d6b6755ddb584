//! Locomotion system: the physics-rate half of every agent.
//!
//! Lends each controller its transform, body and animation through the
//! adapters and lets it navigate, turn and drive.

use hecs::World;

use warden_core::components::{AnimationState, HeadLook, RigidBody, Transform};
use warden_core::constants::DT;
use warden_core::events::AgentEvent;

use warden_ai::agent::AgentController;

use crate::adapters::{BodyHandle, TransformFacing, WalkAnimation};

/// Run one physics step for every agent. Agents whose body has been removed
/// go limp here.
pub fn run(world: &mut World, frame_rate: Option<u32>, events: &mut Vec<AgentEvent>) {
    for (_entity, (controller, transform, body, animation, head)) in world.query_mut::<(
        &mut AgentController,
        &mut Transform,
        Option<&mut RigidBody>,
        Option<&mut AnimationState>,
        Option<&mut HeadLook>,
    )>() {
        let mut facing = TransformFacing { transform, head };
        let mut body = body.map(BodyHandle);
        let mut animation = animation.map(WalkAnimation);

        let report = controller.on_physics_tick(
            DT,
            frame_rate,
            &mut facing,
            body.as_mut(),
            animation.as_mut(),
        );
        events.extend(report.events);
    }
}
