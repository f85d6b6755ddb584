//! Events emitted by agents and the scene host, collected per tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, BodyTag, DestinationSource};
use crate::types::EntityId;

/// Something observable happened to an agent or projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgentEvent {
    /// Behavior state transition.
    StateChanged {
        agent: EntityId,
        from: AgentState,
        to: AgentState,
    },
    /// Agent issued a fire command.
    Fired { agent: EntityId, origin: Vec3 },
    /// Agent reached its destination and the navigator picked the next one.
    DestinationReached {
        agent: EntityId,
        next: Option<DestinationSource>,
    },
    /// Agent lost its body and went limp.
    Ragdolled { agent: EntityId },
    /// A projectile struck a body.
    ProjectileImpact {
        projectile: EntityId,
        struck: EntityId,
        tag: BodyTag,
    },
}
