//! Scenario loading and the built-in demo scene.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use glam::Vec3;

use warden_core::config::{AgentConfig, NavigationConfig, ObstacleConfig, PlayerConfig, ScenarioConfig};
use warden_core::errors::ScenarioError;

/// Read, parse and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ScenarioError> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = ScenarioConfig::from_json_str(&text)?;
    log::info!(
        "loaded scenario `{}` from {} ({} agents)",
        scenario.name,
        path.display(),
        scenario.agents.len()
    );
    Ok(scenario)
}

/// Courtyard with one patrolling guard, one wanderer and one sentry.
///
/// The player starts in front of the sentry with a wall between it and the
/// patrol loop.
pub fn default_scenario() -> ScenarioConfig {
    let mut paths = BTreeMap::new();
    paths.insert(
        "perimeter".to_string(),
        vec![
            Vec3::new(-8.0, 0.0, -8.0),
            Vec3::new(8.0, 0.0, -8.0),
            Vec3::new(8.0, 0.0, 8.0),
            Vec3::new(-8.0, 0.0, 8.0),
        ],
    );

    ScenarioConfig {
        name: "courtyard".to_string(),
        player: PlayerConfig {
            position: Vec3::new(0.0, 0.0, 10.0),
            yaw_degrees: 180.0,
        },
        paths,
        obstacles: vec![ObstacleConfig {
            name: "wall".to_string(),
            position: Vec3::new(6.0, 1.5, 2.0),
            half_extents: Vec3::new(0.5, 1.5, 3.0),
        }],
        agents: vec![
            AgentConfig {
                name: "guard".to_string(),
                position: Vec3::new(-8.0, 0.0, -8.0),
                navigation: NavigationConfig::FixedPath {
                    path: "perimeter".to_string(),
                },
                ..AgentConfig::default()
            },
            AgentConfig {
                name: "wanderer".to_string(),
                position: Vec3::new(-3.0, 0.0, 0.0),
                yaw_degrees: 90.0,
                navigation: NavigationConfig::Wander,
                ..AgentConfig::default()
            },
            AgentConfig {
                name: "sentry".to_string(),
                position: Vec3::ZERO,
                navigation: NavigationConfig::Stationary,
                ..AgentConfig::default()
            },
        ],
    }
}
