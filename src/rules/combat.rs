//! Card resolution rules.
//!
//! Pure functions over a `Player`: they decide what a card does and apply
//! it, but know nothing about rooms or the deck. The session calls them
//! after it has taken the card off the table.

use crate::cards::{Card, CardKind};
use crate::core::action::Effect;
use crate::core::player::Player;

/// Whether a monster may be fought with the equipped weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponUse {
    /// Use the weapon if the accordion rule allows it.
    IfEligible,
    /// Ignore the weapon entirely.
    Barehanded,
}

/// Damage a monster deals through a weapon. Never negative.
#[must_use]
pub fn weapon_damage(monster: Card, weapon: Card) -> i32 {
    (monster.value() - weapon.value()).max(0)
}

/// The weapon that would be used against `monster`, if any.
#[must_use]
pub fn eligible_weapon(player: &Player, monster: Card) -> Option<Card> {
    player
        .equipped_weapon()
        .filter(|_| player.can_use_weapon_against(monster))
}

/// What fighting a monster would cost, computed without touching the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FightPreview {
    pub monster: Card,
    /// Weapon that would absorb the blow, `None` if none is equipped or the
    /// accordion rule rules it out.
    pub weapon: Option<Card>,
    /// Damage through `weapon`, when there is one.
    pub weapon_damage: Option<i32>,
    pub barehanded_damage: i32,
}

/// Preview a fight against `monster`.
#[must_use]
pub fn preview_fight(player: &Player, monster: Card) -> FightPreview {
    let weapon = eligible_weapon(player, monster);
    FightPreview {
        monster,
        weapon,
        weapon_damage: weapon.map(|weapon| weapon_damage(monster, weapon)),
        barehanded_damage: monster.value(),
    }
}

/// Apply any card to the player.
pub fn resolve(player: &mut Player, card: Card, weapon_use: WeaponUse) -> Effect {
    match card.kind() {
        CardKind::Monster => fight(player, card, weapon_use),
        CardKind::Weapon => equip(player, card),
        CardKind::Potion => drink(player, card),
    }
}

/// Fight a monster.
///
/// With an eligible weapon the damage is reduced and the kill is recorded on
/// the weapon; otherwise the full value is taken and history is untouched.
pub fn fight(player: &mut Player, monster: Card, weapon_use: WeaponUse) -> Effect {
    let weapon = match weapon_use {
        WeaponUse::IfEligible => eligible_weapon(player, monster),
        WeaponUse::Barehanded => None,
    };

    match weapon {
        Some(weapon) => {
            let damage = weapon_damage(monster, weapon);
            player.apply_damage(damage);
            player.add_defeated_monster(monster);
            Effect::Fought { damage, with_weapon: true }
        }
        None => {
            let damage = monster.value();
            player.apply_damage(damage);
            Effect::Fought { damage, with_weapon: false }
        }
    }
}

/// Equip a weapon card.
pub fn equip(player: &mut Player, weapon: Card) -> Effect {
    let replaced = player.equipped_weapon();
    player.equip_weapon(weapon);
    Effect::Equipped { replaced }
}

/// Drink a potion. Only the first potion of a room heals.
pub fn drink(player: &mut Player, potion: Card) -> Effect {
    let effect = if player.used_potion_this_room() {
        Effect::PotionWasted
    } else {
        let before = player.health();
        player.heal(potion.value());
        Effect::Healed {
            amount: player.health() - before,
        }
    };
    player.set_used_potion_this_room(true);
    effect
}
