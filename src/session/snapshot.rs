//! Read-only projection of a session for clients.
//!
//! A `GameSnapshot` is plain data: producing one never changes the session,
//! and it serializes to the JSON shape the HTTP and web clients consume.
//! Suit, rank and card type go over the wire as integers (see `cards`).

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, Rank, Suit};
use crate::core::id::SessionId;
use crate::rules::GameStatus;

/// A card as shown to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub suit: Suit,
    pub rank: Rank,
    pub value: i32,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub display: String,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            value: card.value(),
            kind: card.kind(),
            display: card.to_string(),
        }
    }
}

/// A room card with its current table position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCardView {
    pub index: usize,
    #[serde(flatten)]
    pub card: CardView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: i32,
    pub max_health: i32,
    pub equipped_weapon: Option<CardView>,
    pub defeated_monsters: Vec<CardView>,
    pub used_potion: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub cards: Vec<RoomCardView>,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    pub remaining_cards: usize,
    pub previous_room_skipped: bool,
}

/// Full client-facing state of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: SessionId,
    pub state: GameStatus,
    pub player: PlayerView,
    pub room: RoomView,
    pub deck: DeckView,
    pub cards_played: usize,
}

impl GameSnapshot {
    /// Shorthand for `state.is_terminal()`.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}
