//! Perception system: the frame-rate half of every agent.
//!
//! Captures the scene's colliders once, then lets each agent look for the
//! player. Fire commands are returned for the engine to turn into projectiles.

use hecs::World;

use warden_core::components::{PlayerAvatar, Transform};
use warden_core::events::AgentEvent;
use warden_core::types::EntityId;

use warden_ai::agent::{AgentController, FireCommand};
use warden_ai::collaborators::TargetView;

use crate::scene::SceneQuery;
use crate::world_setup::entity_id;

/// Run perception and engagement for every agent. Returns the fire commands
/// issued this frame with the id of the agent that issued each.
pub fn run(world: &mut World, events: &mut Vec<AgentEvent>) -> Vec<(EntityId, FireCommand)> {
    let scene = SceneQuery::capture(world);
    let target = find_target(world);

    let mut fire_commands = Vec::new();
    for (_entity, (controller, transform)) in
        world.query_mut::<(&mut AgentController, &Transform)>()
    {
        let report = controller.on_frame(transform.position, transform.rotation, target, &scene);
        if let Some(fire) = report.fire {
            fire_commands.push((controller.id(), fire));
        }
        events.extend(report.events);
    }
    fire_commands
}

/// The player avatar, if one exists.
pub fn find_target(world: &World) -> Option<TargetView> {
    world
        .query::<(&PlayerAvatar, &Transform)>()
        .iter()
        .map(|(entity, (_player, transform))| TargetView {
            id: entity_id(entity),
            position: transform.position,
        })
        .min_by_key(|view| view.id)
}
