//! Error types surfaced by the rules engine.
//!
//! Failures come in two classes:
//!
//! - **Structural**: the caller referenced something that does not exist
//!   (unknown session, out-of-range card index). A bug or a stale reference
//!   on the caller's side.
//! - **Rule violation**: the move is well-formed but the rules forbid it
//!   right now (game over, second skip in a row, skip after playing).
//!
//! Running out of cards is not an error to the player; the deck reports it
//! as `DeckError::InsufficientCards` and the session turns it into a win.

use std::fmt;

use thiserror::Error;

use super::id::SessionId;
use crate::rules::GameStatus;
use crate::zones::DeckError;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("invalid card index {index} (room has {len} unplayed cards)")]
    InvalidIndex { index: usize, len: usize },

    #[error("game is not in progress (state: {0})")]
    GameNotInProgress(GameStatus),

    #[error("cannot skip two rooms in a row")]
    PreviousRoomSkipped,

    #[error("cannot skip a room after playing cards")]
    CardsAlreadyPlayed,

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Broad classification of a `GameError`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    Structural,
    RuleViolation,
}

impl GameError {
    /// Which class this error belongs to.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            GameError::SessionNotFound(_) | GameError::InvalidIndex { .. } => ErrorClass::Structural,
            GameError::Deck(DeckError::ForbiddenCard(_)) => ErrorClass::Structural,
            GameError::GameNotInProgress(_)
            | GameError::PreviousRoomSkipped
            | GameError::CardsAlreadyPlayed
            | GameError::Deck(DeckError::InsufficientCards { .. }) => ErrorClass::RuleViolation,
        }
    }

    /// True for expected outcomes of normal play.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        self.class() == ErrorClass::RuleViolation
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorClass::Structural => "structural",
            ErrorClass::RuleViolation => "rule violation",
        };
        write!(f, "{}", label)
    }
}
