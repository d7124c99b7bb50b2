//! # scoundrel
//!
//! Rules engine for Scoundrel, the single-player dungeon-crawl card game.
//!
//! The adventurer walks a 44-card dungeon one room at a time. Clubs and
//! spades are monsters, diamonds are weapons, hearts are potions. Each room
//! shows four cards; resolving three of them completes it and the fourth
//! carries into the next room. Survive until the dungeon cannot fill another
//! room to win.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing operations**: a rejected play or skip leaves the
//!    session exactly as it was.
//!
//! 2. **Deterministic when seeded**: every shuffle goes through `GameRng`, so
//!    a seed reproduces a dungeon.
//!
//! 3. **Transport-agnostic**: sessions produce serializable `GameSnapshot`s;
//!    HTTP, terminal, or test drivers sit on top.
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, and how a card maps to monster/weapon/potion
//! - `core`: Player, actions, RNG, configuration, ids, errors
//! - `zones`: The dungeon deck and the room on the table
//! - `rules`: Combat resolution and game status
//! - `session`: Game state machine, client snapshots, session registry

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardKind, Rank, Suit};

pub use crate::core::{
    Action, Effect, PlayRecord,
    GameConfig, DEFAULT_MAX_HEALTH,
    ErrorClass, GameError, Result,
    GameRng, Player, SessionId,
};

pub use crate::zones::{Deck, DeckError, Room, CARDS_PER_ROOM, DUNGEON_SIZE, ROOM_SIZE};

pub use crate::rules::{FightPreview, GameStatus, WeaponUse};

pub use crate::session::{GameSession, GameSnapshot, SessionRegistry};
