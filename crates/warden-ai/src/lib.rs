//! Agent AI for WARDEN.
//!
//! Implements the locomotion controller, waypoint/wander navigator and the
//! perception/engagement state machine, plus the per-agent controller that
//! ties them to a host through capability traits.

pub mod agent;
pub mod collaborators;
pub mod engagement;
pub mod geometry;
pub mod locomotion;
pub mod navigator;
pub mod perception;

pub use warden_core as core;

#[cfg(test)]
mod tests;
