//! Projectile impact system.
//!
//! After integration, every projectile is tested for overlap against the
//! scene's colliders. The nearest body struck decides the outcome: agents
//! go limp, the player's hit counter goes up, obstacles just stop the shot.
//! The projectile is removed in every case.

use hecs::{Entity, World};

use warden_core::components::{PlayerAvatar, Projectile, Transform};
use warden_core::constants::PROJECTILE_RADIUS;
use warden_core::enums::BodyTag;
use warden_core::events::AgentEvent;
use warden_core::types::EntityId;

use crate::scene::SceneQuery;
use crate::world_setup::{entity_id, make_ragdoll};

pub fn run(world: &mut World, events: &mut Vec<AgentEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let scene = SceneQuery::capture(world);

    let mut impacts: Vec<(Entity, EntityId, BodyTag)> = Vec::new();
    for (entity, (transform, projectile)) in world.query::<(&Transform, &Projectile)>().iter() {
        let struck = scene
            .overlapping(transform.position, PROJECTILE_RADIUS)
            .into_iter()
            .map(|(collider, _)| collider)
            .find(|c| c.entity != projectile.owner && c.tag != BodyTag::Projectile);
        if let Some(collider) = struck {
            impacts.push((entity, collider.entity, collider.tag));
        }
    }

    for (projectile, struck, tag) in impacts {
        let Some(struck_entity) = Entity::from_bits(struck.0) else {
            continue;
        };
        match tag {
            BodyTag::Agent => {
                if make_ragdoll(world, struck_entity, events) {
                    log::info!("projectile {} dropped agent {struck}", entity_id(projectile));
                }
            }
            BodyTag::Player => {
                if let Ok(mut player) = world.get::<&mut PlayerAvatar>(struck_entity) {
                    player.hits += 1;
                    log::info!("player hit ({} total)", player.hits);
                }
            }
            BodyTag::Obstacle | BodyTag::Projectile => {}
        }
        events.push(AgentEvent::ProjectileImpact {
            projectile: entity_id(projectile),
            struck,
            tag,
        });
        despawn_buffer.push(projectile);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
