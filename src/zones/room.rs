//! The room: the cards currently on the table.
//!
//! A room is dealt with up to 4 cards. The player resolves them one at a
//! time; after the third the room is complete and the last card carries
//! over into the next room.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::GameError;

/// Cards dealt into a full room.
pub const ROOM_SIZE: usize = 4;

/// Cards played before a room is complete.
pub const CARDS_PER_ROOM: usize = 3;

/// Unplayed and played cards of the current room.
///
/// `Room::default()` is the empty table before the first deal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    cards: SmallVec<[Card; ROOM_SIZE]>,
    played: SmallVec<[Card; CARDS_PER_ROOM]>,
}

impl Room {
    /// Deal a room with the given cards, none played.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: SmallVec<[Card; ROOM_SIZE]> = cards.into_iter().collect();
        debug_assert!(
            (1..=ROOM_SIZE).contains(&cards.len()),
            "a room holds 1-4 cards, got {}",
            cards.len()
        );

        Self {
            cards,
            played: SmallVec::new(),
        }
    }

    /// Unplayed cards, in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards played this room, in play order.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Unplayed card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Remove the card at `index` and move it to the played pile.
    ///
    /// Later cards shift down one position. Nothing changes on error.
    pub fn play_card(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }

        let card = self.cards.remove(index);
        self.played.push(card);
        Ok(card)
    }

    /// The carry-over card, present when exactly one card is left.
    #[must_use]
    pub fn remaining_card(&self) -> Option<Card> {
        match self.cards.as_slice() {
            [card] => Some(*card),
            _ => None,
        }
    }

    /// True once three cards have been played.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.played.len() == CARDS_PER_ROOM
    }

    /// True while nothing has been played; only fresh rooms can be skipped.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.played.is_empty()
    }

    /// Unplayed cards followed by played cards.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().chain(self.played.iter()).copied()
    }
}
