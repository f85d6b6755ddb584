//! Error types for fallible setup paths.
//!
//! Per-tick callbacks never fail: anomalies there degrade to "do nothing this
//! tick". Only scenario loading and validation return errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a scenario could not be loaded.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON")]
    Parse(#[from] serde_json::Error),

    #[error("agent `{agent}` references unknown path `{path}`")]
    UnknownPath { agent: String, path: String },

    #[error("path `{path}` has no waypoints")]
    EmptyPath { path: String },

    #[error("agent `{agent}` has invalid field of view {fov} (expected 0 < fov <= 360)")]
    InvalidFov { agent: String, fov: f32 },

    #[error("agent name `{0}` is used more than once")]
    DuplicateAgent(String),
}
