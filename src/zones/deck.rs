//! The dungeon: an ordered draw pile of 44 cards.
//!
//! A standard 52-card deck with the red face cards and red aces removed
//! (8 cards), leaving 26 monsters, 9 weapons and 9 potions. Cards are drawn
//! from the front; skipped rooms go to the back.
//!
//! Backed by an `im::Vector`, so a cloned session shares the pile until one
//! side changes it, and draws from the front are cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a fresh dungeon.
pub const DUNGEON_SIZE: usize = 44;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left to deal. The session treats this as a win.
    #[error("not enough cards in deck: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    /// Red face cards and red aces never enter the dungeon.
    #[error("{0} is not a dungeon card")]
    ForbiddenCard(Card),
}

/// Draw pile plus the skip flag that travels with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    prev_room_skipped: bool,
}

impl Deck {
    /// The 44 dungeon cards in suit/rank order, unshuffled.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .filter(|card| !card.is_red_face_or_ace())
            .collect();

        Self {
            cards,
            prev_room_skipped: false,
        }
    }

    /// A fresh dungeon shuffled with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// A deck in exactly the given order, first card drawn first.
    ///
    /// Used for arranged dungeons (tests, replays). Fails on any card that
    /// is not allowed in the dungeon.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let cards: Vector<Card> = cards.into_iter().collect();
        if let Some(card) = cards.iter().find(|card| card.is_red_face_or_ace()) {
            return Err(DeckError::ForbiddenCard(*card));
        }

        Ok(Self {
            cards,
            prev_room_skipped: false,
        })
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut order: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut order);
        self.cards = order.into_iter().collect();
    }

    /// Remove and return the first `count` cards.
    ///
    /// Leaves the deck untouched when fewer than `count` remain.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let rest = self.cards.split_off(count);
        let drawn = std::mem::replace(&mut self.cards, rest);
        Ok(drawn.into_iter().collect())
    }

    /// Append cards to the bottom, keeping their order.
    pub fn add_to_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, next draw first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn prev_room_skipped(&self) -> bool {
        self.prev_room_skipped
    }

    pub fn set_prev_room_skipped(&mut self, skipped: bool) {
        self.prev_room_skipped = skipped;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
