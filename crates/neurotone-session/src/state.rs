//! Interaction states and the target-band map.

use neurotone_signal::BrainwaveBand;
use serde::{Deserialize, Serialize};

/// Interaction state of a conversation session.
///
/// Closed set; every transition and lookup matches exhaustively. Sessions
/// start neutral and there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionState {
    Neutral,
    Engaged,
    Influenced,
    Resistant,
}

impl InteractionState {
    /// Brainwave band delivered while the session is in this state.
    pub fn target_band(self) -> BrainwaveBand {
        match self {
            InteractionState::Neutral => BrainwaveBand::Alpha,
            InteractionState::Engaged => BrainwaveBand::Beta,
            InteractionState::Influenced => BrainwaveBand::Theta,
            InteractionState::Resistant => BrainwaveBand::Alpha,
        }
    }
}
