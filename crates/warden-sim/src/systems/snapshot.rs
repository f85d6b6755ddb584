//! Snapshot system: queries the ECS world and builds a complete SceneSnapshot.
//!
//! This system is read-only. It never modifies the world.

use glam::Vec3;
use hecs::World;

use warden_core::components::*;
use warden_core::enums::SimPhase;
use warden_core::events::AgentEvent;
use warden_core::state::*;
use warden_core::types::SimTime;

use warden_ai::agent::AgentController;
use warden_ai::geometry::yaw_degrees;

use crate::world_setup::entity_id;

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    events: Vec<AgentEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        phase,
        agents: build_agents(world),
        player: build_player(world),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Build AgentSnapshot list, ordered by entity id.
fn build_agents(world: &World) -> Vec<AgentSnapshot> {
    let mut agents: Vec<AgentSnapshot> = world
        .query::<(
            &AgentController,
            &Transform,
            &Name,
            Option<&RigidBody>,
            Option<&AnimationState>,
        )>()
        .iter()
        .map(|(_, (controller, transform, name, body, animation))| {
            let destination = controller.destination();
            AgentSnapshot {
                id: controller.id(),
                name: name.0.clone(),
                position: transform.position,
                yaw_degrees: yaw_degrees(transform.rotation),
                velocity: body.map_or(Vec3::ZERO, |b| b.velocity),
                state: controller.state(),
                destination: destination.map(|d| d.position),
                destination_source: destination.map(|d| d.source),
                cooldown: controller.cooldown().remaining(),
                grounded: controller.is_grounded(),
                walk_speed: animation
                    .filter(|a| a.walk_playing)
                    .map_or(0.0, |a| a.walk_speed),
            }
        })
        .collect();

    agents.sort_by_key(|a| a.id);
    agents
}

fn build_player(world: &World) -> Option<PlayerSnapshot> {
    world
        .query::<(&PlayerAvatar, &Transform)>()
        .iter()
        .map(|(entity, (player, transform))| PlayerSnapshot {
            id: entity_id(entity),
            position: transform.position,
            hits: player.hits,
        })
        .min_by_key(|p| p.id)
}

fn build_projectiles(world: &World) -> Vec<ProjectileSnapshot> {
    let mut projectiles: Vec<ProjectileSnapshot> = world
        .query::<(&Projectile, &Transform, &RigidBody)>()
        .iter()
        .map(|(entity, (projectile, transform, body))| ProjectileSnapshot {
            id: entity_id(entity),
            owner: projectile.owner,
            position: transform.position,
            velocity: body.velocity,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
