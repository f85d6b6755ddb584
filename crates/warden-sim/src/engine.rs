//! Scene engine: the in-memory host the agents run inside.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs the physics-rate and frame-rate systems, and produces
//! `SceneSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warden_core::commands::HostCommand;
use warden_core::components::{Name, PlayerAvatar, RigidBody, Transform};
use warden_core::config::ScenarioConfig;
use warden_core::constants::{DEFAULT_SEED, DT};
use warden_core::enums::SimPhase;
use warden_core::errors::ScenarioError;
use warden_core::events::AgentEvent;
use warden_core::state::SceneSnapshot;
use warden_core::types::SimTime;

use warden_ai::agent::AgentController;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new scene.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// The scene engine. Owns the ECS world and all host state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<HostCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<AgentEvent>,
    /// Frame rate measured from the last frame update, fed to the turn controller.
    frame_rate: Option<u32>,
}

impl SimulationEngine {
    /// Create an empty scene with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            frame_rate: None,
        }
    }

    /// Create a scene populated from a scenario.
    pub fn from_scenario(scenario: &ScenarioConfig, config: SimConfig) -> Result<Self, ScenarioError> {
        let mut engine = Self::new(config);
        world_setup::setup_scenario(&mut engine.world, &mut engine.rng, scenario)?;
        Ok(engine)
    }

    /// Queue a host command for processing at the next physics tick.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// One physics tick followed by one frame update at the physics rate.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.physics_tick();
        self.frame_update(DT);
        self.snapshot()
    }

    /// Fixed-step physics callback: commands, locomotion, integration,
    /// contacts, projectile impacts and cleanup.
    pub fn physics_tick(&mut self) {
        self.process_commands();
        if self.phase != SimPhase::Running {
            return;
        }

        // 1. Agent navigation, turning and drive
        systems::locomotion::run(&mut self.world, self.frame_rate, &mut self.events);
        // 2. Gravity and integration
        systems::movement::run(&mut self.world);
        // 3. Obstacle and ground contacts
        systems::contacts::run(&mut self.world);
        // 4. Projectile hits
        systems::projectiles::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 5. Expired projectiles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.time.tick);

        self.time.advance();
    }

    /// Variable-rate frame callback: perception, engagement and firing.
    pub fn frame_update(&mut self, dt: f32) {
        if self.phase != SimPhase::Running {
            return;
        }
        self.frame_rate = (dt > 0.0).then(|| (1.0 / dt).round() as u32);

        let fire_commands = systems::perception::run(&mut self.world, &mut self.events);
        for (owner, fire) in fire_commands {
            world_setup::spawn_projectile(
                &mut self.world,
                owner,
                fire.origin,
                fire.rotation,
                self.time.tick,
            );
        }
    }

    /// Build a snapshot and drain the events collected since the last one.
    pub fn snapshot(&mut self) -> SceneSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current run phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world, for hosts that place
    /// entities of their own.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::SetTargetPosition { position } => {
                for (_entity, (_player, transform, body)) in self
                    .world
                    .query_mut::<(&PlayerAvatar, &mut Transform, Option<&mut RigidBody>)>()
                {
                    transform.position = position;
                    if let Some(body) = body {
                        body.velocity = glam::Vec3::ZERO;
                    }
                }
            }
            HostCommand::RagdollAgent { name } => {
                let found = self
                    .world
                    .query::<(&Name, &AgentController)>()
                    .iter()
                    .find(|(_, (n, _))| n.0 == name)
                    .map(|(entity, _)| entity);
                match found {
                    Some(entity) => {
                        if world_setup::make_ragdoll(&mut self.world, entity, &mut self.events) {
                            log::info!("agent `{name}` ragdolled by host");
                        }
                    }
                    None => log::warn!("ragdoll requested for unknown agent `{name}`"),
                }
            }
            HostCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            HostCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
        }
    }

    /// Walk-clip state of the named agent (for tests).
    #[cfg(test)]
    pub fn agent_animation(&self, name: &str) -> Option<warden_core::components::AnimationState> {
        self.world
            .query::<(&Name, &warden_core::components::AnimationState)>()
            .iter()
            .find(|(_, (n, _))| n.0 == name)
            .map(|(_, (_, animation))| *animation)
    }
}
