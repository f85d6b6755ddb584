//! Core types and definitions for the WARDEN agent runtime.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, host commands, scenario configuration, state snapshots,
//! events, errors, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;
