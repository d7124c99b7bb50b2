//! The adventurer: health, weapon, and the weapon's kill history.
//!
//! ## Weapon accordion
//!
//! A weapon keeps a record of the monsters it has slain. Once it has a kill,
//! it can only be used against monsters no stronger than its **most recent**
//! kill, so successive weapon kills must be non-increasing in value. Equipping
//! a new weapon discards the old one together with its history.
//!
//! ## Health
//!
//! Healing is capped at `max_health`. Damage is never capped: health can
//! drop below zero, and the session reads `health <= 0` as a loss.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player state for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    health: i32,
    max_health: i32,
    equipped_weapon: Option<Card>,
    defeated_monsters: Vec<Card>,
    used_potion_this_room: bool,
}

impl Player {
    /// Create a player at full health.
    #[must_use]
    pub fn new(max_health: i32) -> Self {
        Self {
            health: max_health,
            max_health,
            equipped_weapon: None,
            defeated_monsters: Vec::new(),
            used_potion_this_room: false,
        }
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// True while health is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract `amount` from health. No floor.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Add `amount` to health, capped at max health.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Currently equipped weapon, if any.
    #[must_use]
    pub fn equipped_weapon(&self) -> Option<Card> {
        self.equipped_weapon
    }

    /// Equip a weapon, forfeiting the previous weapon's kill history.
    pub fn equip_weapon(&mut self, weapon: Card) {
        self.equipped_weapon = Some(weapon);
        self.defeated_monsters.clear();
    }

    /// Monsters slain with the current weapon, oldest first.
    #[must_use]
    pub fn defeated_monsters(&self) -> &[Card] {
        &self.defeated_monsters
    }

    /// Record a weapon kill.
    pub fn add_defeated_monster(&mut self, monster: Card) {
        self.defeated_monsters.push(monster);
    }

    /// Accordion check against the most recent kill.
    ///
    /// Does not look at whether a weapon is equipped; callers check that
    /// separately.
    #[must_use]
    pub fn can_use_weapon_against(&self, monster: Card) -> bool {
        match self.defeated_monsters.last() {
            None => true,
            Some(last) => monster.value() <= last.value(),
        }
    }

    #[must_use]
    pub fn used_potion_this_room(&self) -> bool {
        self.used_potion_this_room
    }

    pub fn set_used_potion_this_room(&mut self, used: bool) {
        self.used_potion_this_room = used;
    }
}
