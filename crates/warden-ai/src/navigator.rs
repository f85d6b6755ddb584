//! Waypoint/wander navigator.
//!
//! Owns the agent's destination. The mode is fixed at construction; arrival
//! (planar distance under [`ARRIVAL_RADIUS`]) advances a path cursor or
//! samples a new wander point. While the agent is chasing, arrival handling
//! is suspended and the engagement logic writes the destination directly.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use warden_core::constants::{ARRIVAL_RADIUS, WANDER_RANGE};
use warden_core::enums::DestinationSource;

use crate::geometry::planar_distance;

/// Destination source, chosen once per agent.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationMode {
    /// Closed loop over these waypoints.
    FixedPath(Vec<Vec3>),
    /// Random points around the agent.
    Wander,
    /// No destination of its own.
    Stationary,
}

/// Where the agent is heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    pub position: Vec3,
    pub source: DestinationSource,
}

/// Result of [`Navigator::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Chasing; arrival checks are off.
    Suspended,
    /// Nothing to walk to.
    Idle,
    /// Still travelling.
    EnRoute { remaining: f32 },
    /// Reached the destination; `next` replaced it.
    Arrived { next: Option<Destination> },
}

#[derive(Debug, Clone)]
pub struct Navigator {
    mode: NavigationMode,
    cursor: usize,
    destination: Option<Destination>,
    rng: ChaCha8Rng,
}

impl Navigator {
    /// Create a navigator and resolve its first destination.
    ///
    /// An empty path degrades to [`NavigationMode::Stationary`].
    pub fn new(mode: NavigationMode, agent_position: Vec3, seed: u64) -> Self {
        let mode = match mode {
            NavigationMode::FixedPath(waypoints) if waypoints.is_empty() => {
                log::warn!("navigator given an empty path; agent will stay idle");
                NavigationMode::Stationary
            }
            other => other,
        };

        let mut navigator = Self {
            mode,
            cursor: 0,
            destination: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        navigator.destination = match &navigator.mode {
            NavigationMode::FixedPath(waypoints) => Some(Destination {
                position: waypoints[0],
                source: DestinationSource::PathNode(0),
            }),
            NavigationMode::Wander => Some(navigator.sample_wander(agent_position)),
            NavigationMode::Stationary => None,
        };
        navigator
    }

    pub fn mode(&self) -> &NavigationMode {
        &self.mode
    }

    /// Current waypoint index, for fixed paths.
    pub fn cursor(&self) -> Option<usize> {
        match self.mode {
            NavigationMode::FixedPath(_) => Some(self.cursor),
            _ => None,
        }
    }

    pub fn current_destination(&self) -> Option<Destination> {
        self.destination
    }

    /// Replace the destination with a chase target.
    pub fn override_destination(&mut self, position: Vec3) {
        self.destination = Some(Destination {
            position,
            source: DestinationSource::ChaseOverride,
        });
    }

    /// Check for arrival and pick the next destination if reached.
    pub fn advance(&mut self, agent_position: Vec3, chasing: bool) -> Advance {
        if chasing {
            return Advance::Suspended;
        }
        let Some(current) = self.destination else {
            return Advance::Idle;
        };

        let remaining = planar_distance(agent_position, current.position);
        if remaining >= ARRIVAL_RADIUS {
            return Advance::EnRoute { remaining };
        }

        let next = self.next_destination(current, agent_position);
        self.destination = next;
        Advance::Arrived { next }
    }

    fn next_destination(&mut self, arrived: Destination, agent_position: Vec3) -> Option<Destination> {
        match &self.mode {
            NavigationMode::FixedPath(waypoints) => {
                // After a chase, resume the node that was interrupted.
                if arrived.source != DestinationSource::ChaseOverride {
                    self.cursor = (self.cursor + 1) % waypoints.len();
                }
                Some(Destination {
                    position: waypoints[self.cursor],
                    source: DestinationSource::PathNode(self.cursor),
                })
            }
            NavigationMode::Wander => Some(self.sample_wander(agent_position)),
            NavigationMode::Stationary => None,
        }
    }

    /// Agent position plus a random horizontal offset in `[-WANDER_RANGE, WANDER_RANGE]`
    /// on each axis, each bound scaled by a uniform fraction. Height unchanged.
    fn sample_wander(&mut self, agent_position: Vec3) -> Destination {
        let dx = self.rng.gen_range(-WANDER_RANGE..=WANDER_RANGE) * self.rng.gen::<f32>();
        let dz = self.rng.gen_range(-WANDER_RANGE..=WANDER_RANGE) * self.rng.gen::<f32>();
        Destination {
            position: agent_position + Vec3::new(dx, 0.0, dz),
            source: DestinationSource::Wander,
        }
    }
}
