//! Per-agent controller: the callback surface the scene host drives.
//!
//! Two rates share this state. `on_frame` runs perception and engagement and
//! may override the destination. `on_physics_tick` advances the navigator,
//! turns toward the destination and drives the body. Both run on the host's
//! thread, so nothing here locks.

use glam::{Quat, Vec3};

use warden_core::config::AgentConfig;
use warden_core::constants::{
    ARRIVAL_RADIUS, DEFAULT_FOV_DEGREES, GROUND_CONTACT_DEPTH, GROUND_NORMAL_MIN_Y, MOVE_FORCE,
    TURN_SPEED, WALK_ANIMATION_FADE_SECS, WALK_ANIMATION_SPEED_FACTOR,
};
use warden_core::enums::AgentState;
use warden_core::events::AgentEvent;
use warden_core::types::EntityId;

use crate::collaborators::{
    AnimationDriver, CollisionNotification, FacingController, LineTrace, PhysicsBody, TargetView,
};
use crate::engagement::{evaluate, FireCooldown};
use crate::geometry::{forward, planar, planar_distance};
use crate::locomotion::{LocomotionController, TurnOutcome};
use crate::navigator::{Advance, Destination, Navigator};
use crate::perception::{perceive, trace_origin, Perception};

/// Tunables fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSettings {
    pub fov_degrees: f32,
    pub hostile: bool,
    pub turn_speed: f32,
    pub move_force: f32,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            hostile: true,
            turn_speed: TURN_SPEED,
            move_force: MOVE_FORCE,
        }
    }
}

impl From<&AgentConfig> for AgentSettings {
    fn from(config: &AgentConfig) -> Self {
        Self {
            fov_degrees: config.fov_degrees,
            hostile: config.hostile,
            turn_speed: config.turn_speed,
            move_force: config.move_force,
        }
    }
}

/// Request to spawn a projectile from the agent's muzzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireCommand {
    pub origin: Vec3,
    pub rotation: Quat,
}

/// What happened during one frame update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// `None` when perception did not run (dead or non-hostile).
    pub perception: Option<Perception>,
    pub fire: Option<FireCommand>,
    pub events: Vec<AgentEvent>,
}

/// What happened during one physics tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicsReport {
    pub advance: Option<Advance>,
    pub turn: Option<TurnOutcome>,
    /// Velocity written to the body, if one was driven.
    pub velocity: Option<Vec3>,
    pub events: Vec<AgentEvent>,
}

#[derive(Debug, Clone)]
pub struct AgentController {
    id: EntityId,
    settings: AgentSettings,
    state: AgentState,
    navigator: Navigator,
    locomotion: LocomotionController,
    cooldown: FireCooldown,
    grounded: bool,
}

impl AgentController {
    pub fn new(id: EntityId, settings: AgentSettings, navigator: Navigator) -> Self {
        Self {
            id,
            settings,
            state: AgentState::Patrol,
            navigator,
            locomotion: LocomotionController::new(settings.turn_speed, settings.move_force),
            cooldown: FireCooldown::default(),
            grounded: false,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn destination(&self) -> Option<Destination> {
        self.navigator.current_destination()
    }

    pub fn cooldown(&self) -> &FireCooldown {
        &self.cooldown
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Frame update: cooldown, perception and engagement.
    pub fn on_frame<T>(
        &mut self,
        position: Vec3,
        rotation: Quat,
        target: Option<TargetView>,
        tracer: &T,
    ) -> FrameReport
    where
        T: LineTrace + ?Sized,
    {
        let mut report = FrameReport::default();
        if !self.state.is_alive() {
            return report;
        }

        self.cooldown.tick();

        if !self.settings.hostile {
            return report;
        }

        let perception = perceive(
            self.id,
            position,
            forward(rotation),
            target.as_ref(),
            self.settings.fov_degrees,
            tracer,
        );
        let update = evaluate(self.state, &perception, &self.cooldown);

        if let AgentState::Chasing { last_seen } = update.new_state {
            self.navigator.override_destination(last_seen);
        }

        if update.state_changed {
            log::debug!(
                "agent {}: {} -> {}",
                self.id,
                self.state.label(),
                update.new_state.label()
            );
            report.events.push(AgentEvent::StateChanged {
                agent: self.id,
                from: self.state,
                to: update.new_state,
            });
        }
        self.state = update.new_state;

        if update.fire {
            self.cooldown.arm();
            let origin = trace_origin(position);
            log::debug!("agent {}: firing from {origin}", self.id);
            report.fire = Some(FireCommand { origin, rotation });
            report.events.push(AgentEvent::Fired {
                agent: self.id,
                origin,
            });
        }

        report.perception = Some(perception);
        report
    }

    /// Physics update: navigation, turning, drive and walk animation.
    ///
    /// A missing body means the host has ragdolled the agent.
    pub fn on_physics_tick<F, B, A>(
        &mut self,
        dt: f32,
        frame_rate: Option<u32>,
        facing: &mut F,
        body: Option<&mut B>,
        animation: Option<&mut A>,
    ) -> PhysicsReport
    where
        F: FacingController + ?Sized,
        B: PhysicsBody + ?Sized,
        A: AnimationDriver + ?Sized,
    {
        let mut report = PhysicsReport::default();
        if !self.state.is_alive() {
            return report;
        }

        let Some(body) = body else {
            report.events = self.go_limp();
            if let Some(animation) = animation {
                animation.stop_walk();
            }
            return report;
        };

        let position = facing.position();
        let advance = self.navigator.advance(position, self.state.is_chasing());
        if let Advance::Arrived { next } = advance {
            log::debug!("agent {}: destination reached", self.id);
            report.events.push(AgentEvent::DestinationReached {
                agent: self.id,
                next: next.map(|d| d.source),
            });
        }
        report.advance = Some(advance);

        let moving = match self.navigator.current_destination() {
            Some(destination) => {
                let point = Vec3::new(destination.position.x, position.y, destination.position.z);
                report.turn = Some(self.locomotion.turn_toward(facing, point, dt, frame_rate));
                facing.look_head_at(destination.position);
                planar_distance(position, destination.position) >= ARRIVAL_RADIUS
            }
            None => false,
        };

        let planar_speed = planar(body.linear_velocity()).length();
        report.velocity = Some(self.locomotion.drive(body, facing.rotation(), moving));

        if let Some(animation) = animation {
            if moving && self.grounded {
                animation.play_walk(WALK_ANIMATION_FADE_SECS);
            } else {
                animation.stop_walk();
            }
            animation.set_walk_speed(planar_speed * WALK_ANIMATION_SPEED_FACTOR);
        }

        // Contacts delivered after integration set this again.
        self.grounded = false;
        report
    }

    /// Collision callback. Marks the agent grounded on a floor-like contact.
    pub fn on_collision(&mut self, collision: &CollisionNotification, body_position: Vec3) {
        let floor = collision.contacts.iter().any(|contact| {
            contact.position.y > body_position.y - GROUND_CONTACT_DEPTH
                && contact.normal.y >= GROUND_NORMAL_MIN_Y
        });
        if floor {
            self.grounded = true;
        }
    }

    /// Force the agent into the terminal ragdoll state. Returns the events
    /// produced, empty if it was already limp.
    pub fn go_limp(&mut self) -> Vec<AgentEvent> {
        if !self.state.is_alive() {
            return Vec::new();
        }
        log::debug!("agent {}: {} -> ragdoll", self.id, self.state.label());
        let from = self.state;
        self.state = AgentState::Ragdoll;
        self.grounded = false;
        vec![
            AgentEvent::StateChanged {
                agent: self.id,
                from,
                to: AgentState::Ragdoll,
            },
            AgentEvent::Ragdolled { agent: self.id },
        ]
    }
}
