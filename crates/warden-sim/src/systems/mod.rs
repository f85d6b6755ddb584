//! ECS systems that operate on the scene world.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. Agent state lives in the `AgentController` component.

pub mod cleanup;
pub mod contacts;
pub mod locomotion;
pub mod movement;
pub mod perception;
pub mod projectiles;
pub mod snapshot;
