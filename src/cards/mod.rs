//! Card model.
//!
//! - `Card`: immutable suit/rank pair
//! - `CardKind`: Monster, Weapon, or Potion, derived from the suit

pub mod card;

pub use card::{Card, CardCodeError, CardKind, Rank, Suit};
