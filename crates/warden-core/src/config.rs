//! Scenario configuration: the scene data an embedding application hands
//! to the host at startup.
//!
//! All structs deserialize with defaults, so a scenario file only needs to
//! spell out what differs from the stock agent.

use std::collections::{BTreeMap, HashSet};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FOV_DEGREES, MOVE_FORCE, TURN_SPEED};
use crate::errors::ScenarioError;

/// Destination source selected for an agent. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NavigationConfig {
    /// Wander to random nearby points.
    Wander,
    /// Loop over the named path.
    FixedPath { path: String },
    /// Stand still until a target is seen.
    Stationary,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::Wander
    }
}

/// Per-agent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    pub position: Vec3,
    /// Initial yaw (degrees, 0 faces +Z).
    pub yaw_degrees: f32,
    pub fov_degrees: f32,
    pub hostile: bool,
    pub navigation: NavigationConfig,
    pub turn_speed: f32,
    pub move_force: f32,
    /// Seed for this agent's wander generator. Derived from the host seed when absent.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "agent".to_string(),
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            fov_degrees: DEFAULT_FOV_DEGREES,
            hostile: true,
            navigation: NavigationConfig::default(),
            turn_speed: TURN_SPEED,
            move_force: MOVE_FORCE,
            seed: None,
        }
    }
}

/// Player avatar placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub position: Vec3,
    pub yaw_degrees: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            yaw_degrees: 180.0,
        }
    }
}

/// Static box blocking traces and projectiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleConfig {
    #[serde(default)]
    pub name: String,
    /// Centre of the box.
    pub position: Vec3,
    pub half_extents: Vec3,
}

/// Complete scene description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: String,
    pub player: PlayerConfig,
    /// Named waypoint lists, referenced by agents in `FixedPath` mode.
    pub paths: BTreeMap<String, Vec<Vec3>>,
    pub obstacles: Vec<ObstacleConfig>,
    pub agents: Vec<AgentConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-references and value ranges.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut names = HashSet::new();
        for agent in &self.agents {
            if !names.insert(agent.name.as_str()) {
                return Err(ScenarioError::DuplicateAgent(agent.name.clone()));
            }
            if !agent.fov_degrees.is_finite()
                || agent.fov_degrees <= 0.0
                || agent.fov_degrees > 360.0
            {
                return Err(ScenarioError::InvalidFov {
                    agent: agent.name.clone(),
                    fov: agent.fov_degrees,
                });
            }
            if let NavigationConfig::FixedPath { path } = &agent.navigation {
                self.resolve_path(&agent.name, path)?;
            }
        }
        Ok(())
    }

    /// Look up the waypoints of a named path on behalf of `agent`.
    pub fn resolve_path(&self, agent: &str, path: &str) -> Result<&[Vec3], ScenarioError> {
        let waypoints = self
            .paths
            .get(path)
            .ok_or_else(|| ScenarioError::UnknownPath {
                agent: agent.to_string(),
                path: path.to_string(),
            })?;
        if waypoints.is_empty() {
            return Err(ScenarioError::EmptyPath {
                path: path.to_string(),
            });
        }
        Ok(waypoints)
    }
}
