//! Core engine types: ids, the player, actions, RNG, configuration, errors.
//!
//! Everything the session state machine is built from, apart from the cards
//! themselves (`cards`) and the places cards sit (`zones`).

pub mod action;
pub mod config;
pub mod error;
pub mod id;
pub mod player;
pub mod rng;

pub use action::{Action, Effect, PlayRecord};
pub use config::{GameConfig, DEFAULT_MAX_HEALTH};
pub use error::{ErrorClass, GameError, Result};
pub use id::SessionId;
pub use player::Player;
pub use rng::GameRng;
