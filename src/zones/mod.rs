//! Where cards sit.
//!
//! ## Key Types
//!
//! - `Deck`: the dungeon draw pile and the skip flag
//! - `Room`: the up-to-4 cards on the table and what has been played

pub mod deck;
pub mod room;

pub use deck::{Deck, DeckError, DUNGEON_SIZE};
pub use room::{Room, CARDS_PER_ROOM, ROOM_SIZE};
