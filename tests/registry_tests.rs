//! Session registry integration tests.
//!
//! These drive the registry the way a request handler would: by id, with
//! snapshots coming back from every call.

use std::sync::Arc;

use scoundrel::cards::{Card, Rank, Suit};
use scoundrel::core::{ErrorClass, GameConfig, GameError, SessionId};
use scoundrel::rules::GameStatus;
use scoundrel::session::{GameSession, SessionRegistry};
use scoundrel::zones::Deck;

fn two_room_session(config: &GameConfig) -> GameSession {
    let deck = Deck::from_cards([
        Card::new(Suit::Diamonds, Rank::Four),
        Card::new(Suit::Clubs, Rank::Six),
        Card::new(Suit::Hearts, Rank::Five),
        Card::new(Suit::Spades, Rank::Three),
        Card::new(Suit::Clubs, Rank::Two),
        Card::new(Suit::Clubs, Rank::Three),
        Card::new(Suit::Spades, Rank::Two),
    ])
    .unwrap();
    GameSession::from_deck(config, deck)
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

/// A session plays through the registry from creation to eviction.
#[test]
fn test_full_session_lifecycle() {
    let registry = SessionRegistry::default();
    let id = registry.insert(two_room_session(registry.config()));

    let state = registry.play_card(id, 0).unwrap();
    assert_eq!(
        state.player.equipped_weapon.as_ref().map(|w| w.value),
        Some(4)
    );

    let state = registry.play_card_without_weapon(id, 0).unwrap();
    assert_eq!(state.player.health, 14);
    assert!(state.player.defeated_monsters.is_empty());

    // Potion completes the room: [3♠ carried, 2♣, 3♣, 2♠]
    let state = registry.play_card(id, 0).unwrap();
    assert_eq!(state.player.health, 19);
    assert_eq!(state.room.cards.len(), 4);
    assert_eq!(state.room.cards[0].card.display, "3♠");
    assert!(!state.player.used_potion);
    assert_eq!(state.deck.remaining_cards, 0);

    // The weapon now sees 3♠ then 3♣ then 2♣, each for no damage
    registry.play_card(id, 0).unwrap();
    registry.play_card(id, 1).unwrap();
    registry.play_card(id, 0).unwrap();
    let state = registry.get_state(id).unwrap();
    assert_eq!(state.state, GameStatus::Won);
    assert_eq!(state.cards_played, 6);
    assert_eq!(state.player.health, 19);

    assert_eq!(registry.cleanup_finished(), 1);
    assert_eq!(registry.get_state(id).unwrap_err(), GameError::SessionNotFound(id));
}

/// Skipping through the registry reports the flag in the snapshot.
#[test]
fn test_skip_through_registry() {
    let registry = SessionRegistry::new(GameConfig::new().with_seed(8));
    let id = registry.create_session();

    let before = registry.get_state(id).unwrap();
    let after = registry.skip_room(id).unwrap();
    assert!(after.deck.previous_room_skipped);
    assert_eq!(after.deck.remaining_cards, before.deck.remaining_cards);
    assert_ne!(after.room, before.room);

    let err = registry.skip_room(id).unwrap_err();
    assert_eq!(err, GameError::PreviousRoomSkipped);
    assert_eq!(err.class(), ErrorClass::RuleViolation);
    assert_eq!(registry.get_state(id).unwrap(), after);
}

/// Errors name the missing session and are structural.
#[test]
fn test_unknown_session_is_structural() {
    let registry = SessionRegistry::default();
    let missing = SessionId::new();

    let err = registry.play_card_without_weapon(missing, 0).unwrap_err();
    assert_eq!(err, GameError::SessionNotFound(missing));
    assert_eq!(err.class(), ErrorClass::Structural);
    assert!(err.to_string().contains(&missing.to_string()));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Parallel requests against one session are serialized.
#[test]
fn test_concurrent_plays_on_one_session() {
    let registry = Arc::new(SessionRegistry::new(
        GameConfig::new().with_seed(21).with_max_health(1000),
    ));
    let id = registry.create_session();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                for _ in 0..3 {
                    registry.play_card(id, 0).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = registry.get_state(id).unwrap();
    assert_eq!(state.cards_played, 12);
    assert_eq!(state.room.cards.len(), 4);
    assert_eq!(state.deck.remaining_cards, 44 - 4 - 12);
}

/// Cleanup only sees finished sessions, whatever else is happening.
#[test]
fn test_cleanup_while_creating() {
    let registry = SessionRegistry::default();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..10 {
                    registry.create_session();
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..10 {
                assert_eq!(registry.cleanup_finished(), 0);
            }
        });
    });

    assert_eq!(registry.len(), 40);
}

// =============================================================================
// Wire Format Tests
// =============================================================================

/// Snapshots serialize to the shape clients read.
#[test]
fn test_snapshot_json_shape() {
    let registry = SessionRegistry::new(GameConfig::new().with_seed(1));
    let id = registry.create_session();
    let snapshot = registry.get_state(id).unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["game_id"], id.to_string());
    assert_eq!(json["state"], "InProgress");
    assert_eq!(json["player"]["health"], 20);
    assert_eq!(json["player"]["max_health"], 20);
    assert!(json["player"]["equipped_weapon"].is_null());
    assert_eq!(json["player"]["used_potion"], false);
    assert_eq!(json["room"]["completed"], false);
    assert_eq!(json["deck"]["remaining_cards"], 40);
    assert_eq!(json["deck"]["previous_room_skipped"], false);
    assert_eq!(json["cards_played"], 0);

    let cards = json["room"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 4);
    for (index, card) in cards.iter().enumerate() {
        assert_eq!(card["index"], index);
        let value = card["value"].as_i64().unwrap();
        assert!((2..=14).contains(&value));
        assert_eq!(card["rank"].as_i64(), Some(value));
        assert!(card["suit"].as_u64().unwrap() <= 3);
        assert!(card["type"].as_u64().unwrap() <= 2);
    }

    // Card codes match the suit: clubs and spades are monsters (0)
    for card in cards {
        let suit = card["suit"].as_u64().unwrap();
        let kind = card["type"].as_u64().unwrap();
        assert_eq!(kind == 0, suit == 0 || suit == 3);
    }

    let back: scoundrel::GameSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}

/// Cards use the integer codes clients compare against.
#[test]
fn test_card_codes_in_snapshot() {
    let registry = SessionRegistry::default();
    let id = registry.insert(two_room_session(registry.config()));

    let json = serde_json::to_value(registry.get_state(id).unwrap()).unwrap();
    let cards = &json["room"]["cards"];

    // 4♦ 6♣ 5♥ 3♠
    assert_eq!(cards[0]["suit"], 1);
    assert_eq!(cards[0]["rank"], 4);
    assert_eq!(cards[0]["type"], 1);
    assert_eq!(cards[1]["suit"], 0);
    assert_eq!(cards[1]["type"], 0);
    assert_eq!(cards[2]["suit"], 2);
    assert_eq!(cards[2]["type"], 2);
    assert_eq!(cards[3]["suit"], 3);
    assert_eq!(cards[3]["rank"], 3);
    assert_eq!(cards[3]["display"], "3♠");

    let json = serde_json::to_value(registry.play_card(id, 0).unwrap()).unwrap();
    let weapon = &json["player"]["equipped_weapon"];
    assert_eq!(weapon["suit"], 1);
    assert_eq!(weapon["rank"], 4);
    assert_eq!(weapon["value"], 4);
}
