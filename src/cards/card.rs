//! Playing cards and their dungeon roles.
//!
//! A card is an immutable (suit, rank) pair. Everything else about it is
//! derived: its numeric value is the rank (2-14) and its role in the dungeon
//! comes from the suit:
//!
//! | Suit            | Role    |
//! |-----------------|---------|
//! | Clubs, Spades   | Monster |
//! | Diamonds        | Weapon  |
//! | Hearts          | Potion  |
//!
//! ## Wire encoding
//!
//! Suits, ranks and kinds serialize as integers, the encoding web clients
//! compare against: suits Clubs=0, Diamonds=1, Hearts=2, Spades=3; ranks by
//! value (2-14); kinds Monster=0, Weapon=1, Potion=2.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An integer that does not name a suit, rank, or card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardCodeError {
    #[error("invalid suit code {0}")]
    Suit(u8),
    #[error("invalid rank code {0}")]
    Rank(u8),
    #[error("invalid card kind code {0}")]
    Kind(u8),
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// True for Hearts and Diamonds.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Suit glyph used in card display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Suit::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CardCodeError::Suit(code))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card rank, Two through Ace (ace high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 for Two up to 14 for Ace.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Jack, Queen, King, or Ace.
    #[must_use]
    pub const fn is_face_or_ace(self) -> bool {
        self.value() >= Rank::Jack.value()
    }

    /// Look up a rank by numeric value.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|rank| rank.value() == value)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Rank::from_value(i32::from(code)).ok_or(CardCodeError::Rank(code))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CardKind {
    /// Deals its value as damage, reduced by an eligible weapon.
    Monster = 0,
    /// Replaces the equipped weapon.
    Weapon = 1,
    /// Heals its value, once per room.
    Potion = 2,
}

impl From<CardKind> for u8 {
    fn from(kind: CardKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for CardKind {
    type Error = CardCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CardKind::Monster),
            1 => Ok(CardKind::Weapon),
            2 => Ok(CardKind::Potion),
            _ => Err(CardCodeError::Kind(code)),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardKind::Monster => "Monster",
            CardKind::Weapon => "Weapon",
            CardKind::Potion => "Potion",
        };
        f.write_str(label)
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Numeric value of the card (its rank).
    #[must_use]
    pub const fn value(self) -> i32 {
        self.rank.value()
    }

    /// Dungeon role of the card.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self.suit {
            Suit::Clubs | Suit::Spades => CardKind::Monster,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Hearts => CardKind::Potion,
        }
    }

    /// Red face cards and red aces are removed from the dungeon.
    #[must_use]
    pub const fn is_red_face_or_ace(self) -> bool {
        self.suit.is_red() && self.rank.is_face_or_ace()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.kind(), CardKind::Monster)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
