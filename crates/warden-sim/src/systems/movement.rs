//! Kinematic integration system.
//!
//! Applies gravity to characters, integrates position from velocity and
//! clamps bodies to the ground plane. Projectiles fly straight.

use hecs::World;

use warden_core::components::{Projectile, RigidBody, Transform};
use warden_core::constants::{DT, GRAVITY, GROUND_HEIGHT};

/// Run kinematic integration for all entities with Transform + RigidBody.
pub fn run(world: &mut World) {
    for (_entity, (transform, body, projectile)) in
        world.query_mut::<(&mut Transform, &mut RigidBody, Option<&Projectile>)>()
    {
        if projectile.is_none() {
            body.velocity.y -= GRAVITY * DT;
        }

        transform.position += body.velocity * DT;

        if projectile.is_none() && transform.position.y < GROUND_HEIGHT {
            transform.position.y = GROUND_HEIGHT;
            body.velocity.y = body.velocity.y.max(0.0);
        }
    }
}
