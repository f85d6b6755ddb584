//! Cleanup system: removes projectiles that expired or left the world.

use hecs::{Entity, World};

use warden_core::components::{Projectile, Transform};
use warden_core::constants::{PROJECTILE_LIFETIME_TICKS, WORLD_RADIUS};

/// Remove projectiles older than their lifetime or beyond the world boundary.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, current_tick: u64) {
    despawn_buffer.clear();

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;

    for (entity, (transform, projectile)) in world.query_mut::<(&Transform, &Projectile)>() {
        let expired =
            current_tick.saturating_sub(projectile.spawned_tick) >= PROJECTILE_LIFETIME_TICKS;
        if expired || transform.position.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
