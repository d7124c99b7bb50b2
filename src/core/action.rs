//! Player actions and the record of what they did.
//!
//! An `Action` is what the player asks for. An `Effect` is how the rules
//! resolved one card. The session keeps a `PlayRecord` for every card it
//! resolves, in order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// A move the player can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the room card at `index`, using the weapon when it is eligible.
    Play { index: usize },
    /// Play the room card at `index`, fighting a monster barehanded.
    PlayBarehanded { index: usize },
    /// Push the whole fresh room to the bottom of the deck.
    SkipRoom,
}

impl Action {
    /// Room index this action targets, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Action::Play { index } | Action::PlayBarehanded { index } => Some(index),
            Action::SkipRoom => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play { index } => write!(f, "play {}", index),
            Action::PlayBarehanded { index } => write!(f, "play {} barehanded", index),
            Action::SkipRoom => write!(f, "skip room"),
        }
    }
}

/// How a played card resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// A monster was fought. `with_weapon` is true when the weapon absorbed
    /// part of the blow and the kill was recorded on it.
    Fought { damage: i32, with_weapon: bool },
    /// A weapon was equipped, replacing `replaced` if there was one.
    Equipped { replaced: Option<Card> },
    /// The room's first potion restored `amount` health (after the cap).
    Healed { amount: i32 },
    /// A second potion in the same room; no effect.
    PotionWasted,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Fought { damage, with_weapon: true } => {
                write!(f, "fought with weapon, took {} damage", damage)
            }
            Effect::Fought { damage, with_weapon: false } => {
                write!(f, "fought barehanded, took {} damage", damage)
            }
            Effect::Equipped { replaced: Some(old) } => write!(f, "equipped weapon, discarding {}", old),
            Effect::Equipped { replaced: None } => write!(f, "equipped weapon"),
            Effect::Healed { amount } => write!(f, "healed {}", amount),
            Effect::PotionWasted => write!(f, "potion had no effect"),
        }
    }
}

/// One resolved card in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Position in the session's history, starting at 0.
    pub sequence: u32,
    /// The action that played the card.
    pub action: Action,
    /// The card that was played.
    pub card: Card,
    /// What it did.
    pub effect: Effect,
}
