//! Contact system: resolves character penetration into obstacles and
//! delivers collision notifications to agent controllers.
//!
//! Runs after integration. Bodies resting on the ground plane get a ground
//! contact every tick, which is what keeps agents grounded.

use glam::Vec3;
use hecs::World;

use warden_core::components::{Collider, ColliderShape, RigidBody, Transform};
use warden_core::constants::GROUND_HEIGHT;
use warden_core::enums::BodyTag;

use warden_ai::agent::AgentController;
use warden_ai::collaborators::{CollisionNotification, ContactPoint};

use crate::scene::{PlacedCollider, SceneQuery};

/// Tolerance for treating a body as resting on the ground plane.
const GROUND_CONTACT_TOLERANCE: f32 = 1e-3;

/// Upright capsule dimensions relative to the body origin.
#[derive(Debug, Clone, Copy)]
struct Capsule {
    radius: f32,
    height: f32,
    center: Vec3,
}

pub fn run(world: &mut World) {
    let scene = SceneQuery::capture(world);
    let obstacles: Vec<PlacedCollider> = scene
        .colliders()
        .iter()
        .filter(|c| c.tag == BodyTag::Obstacle)
        .copied()
        .collect();

    for (_entity, (transform, body, collider, controller)) in world.query_mut::<(
        &mut Transform,
        &mut RigidBody,
        &Collider,
        Option<&mut AgentController>,
    )>() {
        let ColliderShape::Capsule {
            radius,
            height,
            center,
        } = collider.shape
        else {
            continue;
        };
        let capsule = Capsule {
            radius,
            height,
            center,
        };

        let mut notifications = Vec::new();
        for obstacle in &obstacles {
            if let Some(contact) = push_out(transform, body, capsule, obstacle) {
                notifications.push(CollisionNotification {
                    other: Some(obstacle.entity),
                    contacts: vec![contact],
                });
            }
        }
        if transform.position.y <= GROUND_HEIGHT + GROUND_CONTACT_TOLERANCE {
            notifications.push(CollisionNotification {
                other: None,
                contacts: vec![ContactPoint {
                    position: Vec3::new(transform.position.x, GROUND_HEIGHT, transform.position.z),
                    normal: Vec3::Y,
                }],
            });
        }

        if let Some(controller) = controller {
            for notification in &notifications {
                controller.on_collision(notification, transform.position);
            }
        }
    }
}

/// Push an upright capsule out of a box horizontally, or onto its top when
/// the box is low enough to step on. Returns the contact if they touched.
fn push_out(
    transform: &mut Transform,
    body: &mut RigidBody,
    capsule: Capsule,
    obstacle: &PlacedCollider,
) -> Option<ContactPoint> {
    let ColliderShape::Cuboid {
        half_extents,
        center,
    } = obstacle.shape
    else {
        return None;
    };
    let min = obstacle.position + center - half_extents;
    let max = obstacle.position + center + half_extents;

    let feet = transform.position.y;
    let axis = transform.position + capsule.center;
    let head = axis.y + capsule.height * 0.5;
    if head <= min.y || feet >= max.y {
        return None;
    }

    let closest = Vec3::new(axis.x.clamp(min.x, max.x), axis.y, axis.z.clamp(min.z, max.z));
    let offset = Vec3::new(axis.x - closest.x, 0.0, axis.z - closest.z);
    let distance = offset.length();
    if distance >= capsule.radius {
        return None;
    }

    // Low boxes act as steps.
    if max.y - feet <= capsule.radius {
        transform.position.y = max.y;
        body.velocity.y = body.velocity.y.max(0.0);
        return Some(ContactPoint {
            position: Vec3::new(transform.position.x, max.y, transform.position.z),
            normal: Vec3::Y,
        });
    }

    let (surface, normal) = if distance > f32::EPSILON {
        (closest, offset / distance)
    } else {
        nearest_face(axis, min, max)
    };

    let target = surface + normal * capsule.radius;
    transform.position.x = target.x - capsule.center.x;
    transform.position.z = target.z - capsule.center.z;

    let into = body.velocity.dot(normal);
    if into < 0.0 {
        body.velocity -= normal * into;
    }

    Some(ContactPoint {
        position: surface,
        normal,
    })
}

/// Closest vertical face of a box to a point inside it, as (surface point, outward normal).
fn nearest_face(point: Vec3, min: Vec3, max: Vec3) -> (Vec3, Vec3) {
    let faces = [
        (point.x - min.x, Vec3::new(min.x, point.y, point.z), -Vec3::X),
        (max.x - point.x, Vec3::new(max.x, point.y, point.z), Vec3::X),
        (point.z - min.z, Vec3::new(point.x, point.y, min.z), -Vec3::Z),
        (max.z - point.z, Vec3::new(point.x, point.y, max.z), Vec3::Z),
    ];
    let mut best = faces[0];
    for face in &faces[1..] {
        if face.0 < best.0 {
            best = *face;
        }
    }
    (best.1, best.2)
}
