//! Entity spawn factories for setting up the scene.
//!
//! Creates the player avatar, obstacles, agents and projectiles with
//! appropriate component bundles.

use glam::{Quat, Vec3};
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use warden_core::components::*;
use warden_core::config::{AgentConfig, NavigationConfig, ObstacleConfig, PlayerConfig, ScenarioConfig};
use warden_core::constants::*;
use warden_core::enums::BodyTag;
use warden_core::errors::ScenarioError;
use warden_core::events::AgentEvent;
use warden_core::types::EntityId;

use warden_ai::agent::{AgentController, AgentSettings};
use warden_ai::geometry::{forward, rotation_from_yaw};
use warden_ai::navigator::{NavigationMode, Navigator};

/// Stable id for a hecs entity.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Validate a scenario and spawn everything it describes.
///
/// Agents without an explicit seed draw one from `rng`, in declaration order.
pub fn setup_scenario(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scenario: &ScenarioConfig,
) -> Result<(), ScenarioError> {
    scenario.validate()?;

    spawn_player(world, &scenario.player);
    for obstacle in &scenario.obstacles {
        spawn_obstacle(world, obstacle);
    }
    for agent in &scenario.agents {
        let mode = match &agent.navigation {
            NavigationConfig::Wander => NavigationMode::Wander,
            NavigationConfig::Stationary => NavigationMode::Stationary,
            NavigationConfig::FixedPath { path } => {
                NavigationMode::FixedPath(scenario.resolve_path(&agent.name, path)?.to_vec())
            }
        };
        let seed = agent.seed.unwrap_or_else(|| rng.gen());
        spawn_agent(world, agent, mode, seed);
    }

    log::info!(
        "scenario `{}` ready: {} agents, {} obstacles",
        scenario.name,
        scenario.agents.len(),
        scenario.obstacles.len()
    );
    Ok(())
}

fn character_capsule(diameter: f32) -> Collider {
    Collider {
        shape: ColliderShape::Capsule {
            radius: diameter * 0.5,
            height: CAPSULE_HEIGHT,
            center: Vec3::new(0.0, CAPSULE_CENTER_HEIGHT, 0.0),
        },
        layer: CHARACTER_COLLISION_LAYER,
    }
}

fn character_body() -> RigidBody {
    RigidBody {
        velocity: Vec3::ZERO,
        mass: CHARACTER_MASS,
        collision_layer: CHARACTER_COLLISION_LAYER,
    }
}

/// Spawn the player avatar the agents perceive.
pub fn spawn_player(world: &mut World, config: &PlayerConfig) -> Entity {
    world.spawn((
        Name("player".to_string()),
        BodyTag::Player,
        PlayerAvatar::default(),
        Transform {
            position: config.position,
            rotation: rotation_from_yaw(config.yaw_degrees),
        },
        character_body(),
        character_capsule(PLAYER_CAPSULE_DIAMETER),
    ))
}

/// Spawn a static box.
pub fn spawn_obstacle(world: &mut World, config: &ObstacleConfig) -> Entity {
    world.spawn((
        Name(config.name.clone()),
        BodyTag::Obstacle,
        Transform {
            position: config.position,
            rotation: Quat::IDENTITY,
        },
        Collider {
            shape: ColliderShape::Cuboid {
                half_extents: config.half_extents,
                center: Vec3::ZERO,
            },
            layer: CHARACTER_COLLISION_LAYER,
        },
    ))
}

/// Spawn an AI agent with its controller attached.
pub fn spawn_agent(world: &mut World, config: &AgentConfig, mode: NavigationMode, seed: u64) -> Entity {
    let entity = world.reserve_entity();
    let navigator = Navigator::new(mode, config.position, seed);
    let controller = AgentController::new(entity_id(entity), AgentSettings::from(config), navigator);

    world.spawn_at(
        entity,
        (
            Name(config.name.clone()),
            BodyTag::Agent,
            Transform {
                position: config.position,
                rotation: rotation_from_yaw(config.yaw_degrees),
            },
            character_body(),
            character_capsule(AGENT_CAPSULE_DIAMETER),
            AnimationState::default(),
            HeadLook::default(),
            controller,
        ),
    );
    log::info!(
        "spawned agent `{}` {} at {}",
        config.name,
        entity_id(entity),
        config.position
    );
    entity
}

/// Spawn a projectile one unit ahead of `origin` along `rotation`'s forward.
pub fn spawn_projectile(
    world: &mut World,
    owner: EntityId,
    origin: Vec3,
    rotation: Quat,
    tick: u64,
) -> Entity {
    let heading = forward(rotation);
    world.spawn((
        BodyTag::Projectile,
        Projectile {
            owner,
            spawned_tick: tick,
        },
        Transform {
            position: origin + heading * PROJECTILE_SPAWN_OFFSET,
            rotation,
        },
        RigidBody {
            velocity: heading * PROJECTILE_SPEED,
            mass: PROJECTILE_MASS,
            collision_layer: CHARACTER_COLLISION_LAYER,
        },
        Collider {
            shape: ColliderShape::Sphere {
                radius: PROJECTILE_RADIUS,
            },
            layer: CHARACTER_COLLISION_LAYER,
        },
    ))
}

/// Strip an entity's rigid body so it goes limp. Returns false if it had none.
///
/// An agent's controller is switched to Ragdoll at once, so it issues no
/// fire command in the frame update that follows.
pub fn make_ragdoll(world: &mut World, entity: Entity, events: &mut Vec<AgentEvent>) -> bool {
    if world.remove_one::<RigidBody>(entity).is_err() {
        return false;
    }
    if let Ok(mut controller) = world.get::<&mut AgentController>(entity) {
        events.extend(controller.go_limp());
    }
    if let Ok(mut animation) = world.get::<&mut AnimationState>(entity) {
        animation.walk_playing = false;
        animation.walk_speed = 0.0;
    }
    world.insert_one(entity, Ragdoll).is_ok()
}
