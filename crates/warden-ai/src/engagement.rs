//! Engagement state machine.
//!
//! Pure function of the current state, this frame's perception, and the
//! fire cooldown. No ECS dependency.

use warden_core::constants::FIRE_COOLDOWN_TICKS;
use warden_core::enums::AgentState;

use crate::perception::{Perception, Sighting};

/// Tick-counted gate on firing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireCooldown {
    remaining: u32,
}

impl FireCooldown {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Count down one frame. Stops at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Restart the countdown after a shot.
    pub fn arm(&mut self) {
        self.remaining = FIRE_COOLDOWN_TICKS;
    }
}

/// Output of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngagementUpdate {
    pub new_state: AgentState,
    /// Fire this frame. The caller arms the cooldown.
    pub fire: bool,
    /// The state variant changed (a new last-seen position alone does not count).
    pub state_changed: bool,
}

/// Decide the next state from one perception pass.
pub fn evaluate(state: AgentState, perception: &Perception, cooldown: &FireCooldown) -> EngagementUpdate {
    let no_change = EngagementUpdate {
        new_state: state,
        fire: false,
        state_changed: false,
    };

    if !state.is_alive() {
        return no_change;
    }

    let new_state = match perception {
        Perception::Traced(Sighting::Target { position }) => AgentState::Chasing {
            last_seen: *position,
        },
        Perception::Traced(Sighting::Obstructed { .. }) => AgentState::Patrol,
        Perception::Traced(Sighting::Clear)
        | Perception::NoTarget
        | Perception::OutsideFov { .. }
        | Perception::DegenerateFacing => return no_change,
    };

    EngagementUpdate {
        new_state,
        fire: perception.target_seen() && cooldown.is_ready(),
        state_changed: std::mem::discriminant(&state) != std::mem::discriminant(&new_state),
    }
}
