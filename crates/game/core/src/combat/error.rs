//! Combat errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while building a combat forecast.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The targeting flow asked for a forecast against an empty tile.
    #[error("ghost opponent not allowed: no unit to forecast against for '{attacker}'")]
    GhostOpponent { attacker: String },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CombatError::GhostOpponent { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CombatError::GhostOpponent { .. } => "COMBAT_GHOST_OPPONENT",
        }
    }
}
