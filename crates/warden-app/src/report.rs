//! Human-readable rendering of snapshot events.

use warden_core::events::AgentEvent;
use warden_core::state::SceneSnapshot;
use warden_core::types::EntityId;

/// Display name for an entity, falling back to its id.
fn name_of(snapshot: &SceneSnapshot, id: EntityId) -> String {
    if snapshot.player.as_ref().is_some_and(|p| p.id == id) {
        return "player".to_string();
    }
    snapshot
        .agents
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| format!("#{}", id.0))
}

/// One line describing an event, with agents named as in the snapshot.
pub fn describe(snapshot: &SceneSnapshot, event: &AgentEvent) -> String {
    let tick = snapshot.time.tick;
    match event {
        AgentEvent::StateChanged { agent, from, to } => {
            format!(
                "[{tick}] {} {} -> {}",
                name_of(snapshot, *agent),
                from.label(),
                to.label()
            )
        }
        AgentEvent::Fired { agent, origin } => format!(
            "[{tick}] {} fired from ({:.2}, {:.2}, {:.2})",
            name_of(snapshot, *agent),
            origin.x,
            origin.y,
            origin.z
        ),
        AgentEvent::DestinationReached { agent, next } => match next {
            Some(source) => format!("[{tick}] {} arrived, next {source:?}", name_of(snapshot, *agent)),
            None => format!("[{tick}] {} arrived, holding", name_of(snapshot, *agent)),
        },
        AgentEvent::Ragdolled { agent } => format!("[{tick}] {} went limp", name_of(snapshot, *agent)),
        AgentEvent::ProjectileImpact { projectile, struck, tag } => format!(
            "[{tick}] projectile #{} hit {} ({tag:?})",
            projectile.0,
            name_of(snapshot, *struck)
        ),
    }
}
