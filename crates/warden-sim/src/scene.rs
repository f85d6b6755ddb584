//! Collision queries over the ECS world.
//!
//! `SceneQuery` copies every collider out of the world once, so it can be
//! handed to agents as their `LineTrace` while the world is mutably borrowed.
//! Shapes are analytic: spheres, upright capsules and axis-aligned boxes.

use glam::Vec3;
use hecs::World;

use warden_core::components::{Collider, ColliderShape, Transform};
use warden_core::enums::BodyTag;
use warden_core::types::EntityId;

use warden_ai::collaborators::{LineTrace, TraceHit};

use crate::world_setup::entity_id;

const EPSILON: f32 = 1e-6;

/// A collider placed in world space.
#[derive(Debug, Clone, Copy)]
pub struct PlacedCollider {
    pub entity: EntityId,
    pub tag: BodyTag,
    pub layer: u32,
    pub position: Vec3,
    pub shape: ColliderShape,
}

impl PlacedCollider {
    /// Nearest non-negative ray parameter where `origin + t * dir` enters the
    /// shape, with the surface normal there. `dir` must be unit length.
    pub fn ray_hit(&self, origin: Vec3, dir: Vec3) -> Option<(f32, Vec3)> {
        match self.shape {
            ColliderShape::Sphere { radius } => ray_sphere(origin, dir, self.position, radius),
            ColliderShape::Capsule {
                radius,
                height,
                center,
            } => {
                let (a, b) = capsule_segment(self.position + center, radius, height);
                ray_capsule(origin, dir, a, b, radius)
            }
            ColliderShape::Cuboid {
                half_extents,
                center,
            } => ray_aabb(origin, dir, self.position + center, half_extents),
        }
    }

    /// Distance from `point` to the shape surface; zero or negative inside.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        match self.shape {
            ColliderShape::Sphere { radius } => point.distance(self.position) - radius,
            ColliderShape::Capsule {
                radius,
                height,
                center,
            } => {
                let (a, b) = capsule_segment(self.position + center, radius, height);
                point.distance(closest_on_segment(point, a, b)) - radius
            }
            ColliderShape::Cuboid {
                half_extents,
                center,
            } => {
                let local = point - (self.position + center);
                let outside = (local.abs() - half_extents).max(Vec3::ZERO);
                if outside == Vec3::ZERO {
                    -(half_extents - local.abs()).min_element()
                } else {
                    outside.length()
                }
            }
        }
    }
}

/// Read-only copy of the scene's colliders.
#[derive(Debug, Clone, Default)]
pub struct SceneQuery {
    colliders: Vec<PlacedCollider>,
}

impl SceneQuery {
    /// Snapshot every entity that has a transform, a collider and a body tag.
    pub fn capture(world: &World) -> Self {
        let mut colliders: Vec<PlacedCollider> = world
            .query::<(&Transform, &Collider, &BodyTag)>()
            .iter()
            .map(|(entity, (transform, collider, tag))| PlacedCollider {
                entity: entity_id(entity),
                tag: *tag,
                layer: collider.layer,
                position: transform.position,
                shape: collider.shape,
            })
            .collect();
        colliders.sort_by_key(|c| c.entity);
        Self { colliders }
    }

    pub fn colliders(&self) -> &[PlacedCollider] {
        &self.colliders
    }

    /// Colliders whose surface is within `radius` of `point`, nearest first.
    pub fn overlapping(&self, point: Vec3, radius: f32) -> Vec<(PlacedCollider, f32)> {
        let mut found: Vec<(PlacedCollider, f32)> = self
            .colliders
            .iter()
            .map(|c| (*c, c.distance_to(point)))
            .filter(|(_, d)| *d <= radius)
            .collect();
        found.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.entity.cmp(&b.0.entity)));
        found
    }
}

impl LineTrace for SceneQuery {
    fn trace(&self, origin: Vec3, direction: Vec3, max_distance: f32, layer_mask: u32) -> Vec<TraceHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return Vec::new();
        }

        let mut hits: Vec<TraceHit> = self
            .colliders
            .iter()
            .filter(|c| c.layer & layer_mask != 0)
            .filter_map(|c| {
                let (t, normal) = c.ray_hit(origin, dir)?;
                (t <= max_distance).then(|| TraceHit {
                    entity: c.entity,
                    tag: c.tag,
                    point: origin + dir * t,
                    normal,
                    distance: t,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.entity.cmp(&b.entity)));
        hits
    }
}

/// Axis segment of an upright capsule.
fn capsule_segment(center: Vec3, radius: f32, height: f32) -> (Vec3, Vec3) {
    let half = (height * 0.5 - radius).max(0.0);
    (center - Vec3::Y * half, center + Vec3::Y * half)
}

fn closest_on_segment(point: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= EPSILON {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<(f32, Vec3)> {
    let oc = origin - center;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some((0.0, -dir));
    }
    let b = oc.dot(dir);
    let disc = b * b - c;
    if b > 0.0 || disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    let normal = (origin + dir * t - center).normalize_or_zero();
    Some((t.max(0.0), normal))
}

fn ray_capsule(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, radius: f32) -> Option<(f32, Vec3)> {
    if origin.distance(closest_on_segment(origin, a, b)) <= radius {
        return Some((0.0, -dir));
    }

    let mut best: Option<(f32, Vec3)> = None;
    let mut consider = |candidate: Option<(f32, Vec3)>| {
        if let Some((t, n)) = candidate {
            if best.map_or(true, |(bt, _)| t < bt) {
                best = Some((t, n));
            }
        }
    };

    // Cylinder wall, solved in the horizontal plane.
    let o = origin - a;
    let qa = dir.x * dir.x + dir.z * dir.z;
    if qa > EPSILON {
        let qb = o.x * dir.x + o.z * dir.z;
        let qc = o.x * o.x + o.z * o.z - radius * radius;
        let disc = qb * qb - qa * qc;
        if disc >= 0.0 {
            let t = (-qb - disc.sqrt()) / qa;
            let y = origin.y + dir.y * t;
            if t >= 0.0 && y >= a.y && y <= b.y {
                let p = origin + dir * t;
                let n = Vec3::new(p.x - a.x, 0.0, p.z - a.z).normalize_or_zero();
                consider(Some((t, n)));
            }
        }
    }

    consider(ray_sphere(origin, dir, a, radius));
    consider(ray_sphere(origin, dir, b, radius));
    best
}

fn ray_aabb(origin: Vec3, dir: Vec3, center: Vec3, half: Vec3) -> Option<(f32, Vec3)> {
    let min = center - half;
    let max = center + half;
    if origin.cmpge(min).all() && origin.cmple(max).all() {
        return Some((0.0, -dir));
    }

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
        if d.abs() <= EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let (mut t0, mut t1) = ((lo - o) / d, (hi - o) / d);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            normal = Vec3::ZERO;
            normal[axis] = -d.signum();
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    (t_enter >= 0.0).then_some((t_enter, normal))
}
