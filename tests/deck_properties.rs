//! Property tests for the dungeon deck and the session rules.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use scoundrel::cards::{Card, CardKind, Rank, Suit};
use scoundrel::core::{Action, Effect, GameConfig, GameRng, Player};
use scoundrel::rules::{self, GameStatus, WeaponUse};
use scoundrel::session::GameSession;
use scoundrel::zones::{Deck, DUNGEON_SIZE};

fn monster() -> impl Strategy<Value = Card> {
    (prop_oneof![Just(Suit::Clubs), Just(Suit::Spades)], 0..Rank::ALL.len())
        .prop_map(|(suit, rank)| Card::new(suit, Rank::ALL[rank]))
}

// =============================================================================
// Deck Properties
// =============================================================================

proptest! {
    /// Any shuffle is a permutation of the 44-card dungeon.
    #[test]
    fn test_shuffle_preserves_composition(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        let cards: Vec<Card> = deck.iter().copied().collect();

        prop_assert_eq!(cards.len(), DUNGEON_SIZE);
        let unique: FxHashSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(unique.len(), DUNGEON_SIZE);
        prop_assert!(cards.iter().all(|card| !card.is_red_face_or_ace()));

        let count = |kind| cards.iter().filter(|card| card.kind() == kind).count();
        prop_assert_eq!(count(CardKind::Monster), 26);
        prop_assert_eq!(count(CardKind::Weapon), 9);
        prop_assert_eq!(count(CardKind::Potion), 9);
    }

    /// Drawing then returning cards to the bottom keeps every card.
    #[test]
    fn test_draw_and_return(seed in any::<u64>(), count in 0..=DUNGEON_SIZE) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));
        let original: Vec<Card> = deck.iter().copied().collect();

        let drawn = deck.draw(count).unwrap();
        prop_assert_eq!(&drawn[..], &original[..count]);
        deck.add_to_bottom(drawn);

        let after: Vec<Card> = deck.iter().copied().collect();
        let mut expected = original[count..].to_vec();
        expected.extend_from_slice(&original[..count]);
        prop_assert_eq!(after, expected);
    }

    /// Asking for more cards than remain never changes the deck.
    #[test]
    fn test_overdraw_is_atomic(seed in any::<u64>(), extra in 1usize..10) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));
        let before = deck.clone();

        prop_assert!(deck.draw(DUNGEON_SIZE + extra).is_err());
        prop_assert_eq!(deck, before);
    }
}

// =============================================================================
// Rules Properties
// =============================================================================

proptest! {
    /// The weapon is usable exactly when the monster is no stronger than the last kill.
    #[test]
    fn test_weapon_eligibility(
        weapon_rank in 0..9usize,
        kills in prop::collection::vec(monster(), 0..6),
        target in monster(),
    ) {
        let mut player = Player::new(1000);
        player.equip_weapon(Card::new(Suit::Diamonds, Rank::ALL[weapon_rank]));
        for kill in &kills {
            player.add_defeated_monster(*kill);
        }

        let expected = kills.last().map_or(true, |last| target.value() <= last.value());
        prop_assert_eq!(player.can_use_weapon_against(target), expected);
    }

    /// Fight damage is never negative and never exceeds the monster's value.
    #[test]
    fn test_fight_damage_bounds(
        weapon_rank in 0..9usize,
        target in monster(),
        barehanded in any::<bool>(),
    ) {
        let mut player = Player::new(1000);
        player.equip_weapon(Card::new(Suit::Diamonds, Rank::ALL[weapon_rank]));
        let weapon_use = if barehanded { WeaponUse::Barehanded } else { WeaponUse::IfEligible };

        match rules::resolve(&mut player, target, weapon_use) {
            Effect::Fought { damage, with_weapon } => {
                prop_assert!(damage >= 0);
                prop_assert!(damage <= target.value());
                prop_assert_eq!(with_weapon, !barehanded);
                prop_assert_eq!(player.health(), 1000 - damage);
            }
            other => prop_assert!(false, "unexpected effect {:?}", other),
        }
    }
}

// =============================================================================
// Session Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random legal play always ends, health never exceeds max, and cards are conserved.
    #[test]
    fn test_random_play_terminates(seed in any::<u64>(), choices in prop::collection::vec(any::<u8>(), 64)) {
        let mut session = GameSession::new(&GameConfig::new().with_seed(seed));

        for choice in choices {
            if session.is_over() {
                break;
            }
            let actions = session.available_actions();
            prop_assert!(!actions.is_empty());
            let action = actions[usize::from(choice) % actions.len()];
            session.apply(action).unwrap();

            let player = session.player();
            prop_assert!(player.health() <= player.max_health());

            let played = session.room().played().len();
            let on_table = session.room().cards().len();
            let in_history = session.history().len();
            prop_assert!(on_table + played + session.deck().remaining() <= DUNGEON_SIZE);
            prop_assert!(in_history <= DUNGEON_SIZE);
            if action == Action::SkipRoom {
                prop_assert!(session.deck().prev_room_skipped() || session.status() == GameStatus::Won);
            }
        }
    }
}
