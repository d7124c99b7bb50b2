//! The game session state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! Initial ──deal──▶ InProgress ──deck exhausted──▶ Won
//!                        │
//!                        └──────health <= 0──────▶ Lost
//! ```
//!
//! `Initial` lasts only until the first room is dealt, inside the
//! constructor. `Won` and `Lost` are terminal: every operation after that
//! fails with `GameNotInProgress`.
//!
//! ## Turn sequence
//!
//! Each play takes one card off the table and resolves it. After the third
//! play the room is complete and a new one is dealt from the leftover card
//! plus three fresh cards. Death is checked last, so a fatal blow is a loss
//! even when the same play emptied the dungeon.
//!
//! Every operation either applies completely or fails before touching
//! anything.

use im::Vector;
use tracing::{debug, info};

use crate::cards::Card;
use crate::core::action::{Action, Effect, PlayRecord};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::id::SessionId;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::rules::{self, FightPreview, GameStatus, WeaponUse};
use crate::zones::{Deck, Room, ROOM_SIZE};

use super::snapshot::{CardView, DeckView, GameSnapshot, PlayerView, RoomCardView, RoomView};

/// One game of Scoundrel.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    player: Player,
    deck: Deck,
    room: Room,
    history: Vector<PlayRecord>,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with a freshly shuffled dungeon.
    ///
    /// Seeded from `config.seed` when set, from OS entropy otherwise.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Start a game whose dungeon is shuffled by `rng`.
    #[must_use]
    pub fn with_rng(config: &GameConfig, mut rng: GameRng) -> Self {
        debug!(seed = rng.seed(), "shuffling dungeon");
        Self::from_deck(config, Deck::shuffled(&mut rng))
    }

    /// Start a game on an arranged deck, dealt in the given order.
    ///
    /// A deck with fewer than four cards is won on the spot.
    #[must_use]
    pub fn from_deck(config: &GameConfig, deck: Deck) -> Self {
        let mut session = Self {
            id: SessionId::new(),
            player: Player::new(config.max_health),
            deck,
            room: Room::default(),
            history: Vector::new(),
            status: GameStatus::Initial,
        };
        session.deal_room();
        session
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Every card resolved so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    // === Operations ===

    /// Play the room card at `index`, using the weapon when it is eligible.
    pub fn play_card(&mut self, index: usize) -> Result<Effect> {
        self.play(index, WeaponUse::IfEligible)
    }

    /// Play the room card at `index`; monsters are fought barehanded.
    ///
    /// Barehanded kills are not recorded on the weapon.
    pub fn play_card_without_weapon(&mut self, index: usize) -> Result<Effect> {
        self.play(index, WeaponUse::Barehanded)
    }

    /// Send the current room to the bottom of the deck and deal a new one.
    ///
    /// Not allowed twice in a row, nor once a card has been played here.
    pub fn skip_room(&mut self) -> Result<()> {
        self.ensure_in_progress()?;
        if self.deck.prev_room_skipped() {
            return Err(GameError::PreviousRoomSkipped);
        }
        if !self.room.is_fresh() {
            return Err(GameError::CardsAlreadyPlayed);
        }

        let skipped = std::mem::take(&mut self.room);
        self.deck.add_to_bottom(skipped.all_cards());
        self.deck.set_prev_room_skipped(true);
        debug!(session = %self.id, "room skipped");

        self.deal_room();
        Ok(())
    }

    /// Apply an `Action`. Skips resolve no card and return `None`.
    pub fn apply(&mut self, action: Action) -> Result<Option<Effect>> {
        match action {
            Action::Play { index } => self.play_card(index).map(Some),
            Action::PlayBarehanded { index } => self.play_card_without_weapon(index).map(Some),
            Action::SkipRoom => self.skip_room().map(|()| None),
        }
    }

    // === Queries ===

    /// True when `skip_room` would succeed.
    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.status == GameStatus::InProgress && !self.deck.prev_room_skipped() && self.room.is_fresh()
    }

    /// Every legal action right now. Empty once the game is over.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }

        let armed = self.player.equipped_weapon().is_some();
        let mut actions = Vec::new();
        for (index, card) in self.room.cards().iter().enumerate() {
            actions.push(Action::Play { index });
            if armed && card.is_monster() {
                actions.push(Action::PlayBarehanded { index });
            }
        }
        if self.can_skip() {
            actions.push(Action::SkipRoom);
        }
        actions
    }

    /// Damage preview for the room card at `index`.
    ///
    /// `None` when the card is not a monster.
    pub fn preview(&self, index: usize) -> Result<Option<FightPreview>> {
        let card = self.room_card(index)?;
        Ok(card
            .is_monster()
            .then(|| rules::preview_fight(&self.player, card)))
    }

    /// Client-facing projection of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let player = &self.player;

        GameSnapshot {
            game_id: self.id,
            state: self.status,
            player: PlayerView {
                health: player.health(),
                max_health: player.max_health(),
                equipped_weapon: player.equipped_weapon().map(CardView::from),
                defeated_monsters: player.defeated_monsters().iter().copied().map(CardView::from).collect(),
                used_potion: player.used_potion_this_room(),
            },
            room: RoomView {
                cards: self
                    .room
                    .cards()
                    .iter()
                    .enumerate()
                    .map(|(index, &card)| RoomCardView {
                        index,
                        card: card.into(),
                    })
                    .collect(),
                completed: self.room.is_completed(),
            },
            deck: DeckView {
                remaining_cards: self.deck.remaining(),
                previous_room_skipped: self.deck.prev_room_skipped(),
            },
            cards_played: self.history.len(),
        }
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<()> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(GameError::GameNotInProgress(self.status))
        }
    }

    fn room_card(&self, index: usize) -> Result<Card> {
        self.room.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.room.cards().len(),
        })
    }

    fn play(&mut self, index: usize, weapon_use: WeaponUse) -> Result<Effect> {
        self.ensure_in_progress()?;
        let card = self.room.play_card(index)?;
        let action = match weapon_use {
            WeaponUse::IfEligible => Action::Play { index },
            WeaponUse::Barehanded => Action::PlayBarehanded { index },
        };

        let effect = rules::resolve(&mut self.player, card, weapon_use);
        debug!(
            session = %self.id,
            %card,
            %effect,
            health = self.player.health(),
            "card resolved"
        );

        self.history.push_back(PlayRecord {
            sequence: self.history.len() as u32,
            action,
            card,
            effect,
        });

        if self.room.is_completed() {
            self.deck.set_prev_room_skipped(false);
            self.deal_room();
        }

        if !self.player.is_alive() {
            self.status = GameStatus::Lost;
            info!(session = %self.id, health = self.player.health(), "adventurer died");
        }

        Ok(effect)
    }

    /// Deal the next room: the carried card (if any) plus enough fresh cards
    /// to fill the table. An exhausted dungeon wins the game and leaves the
    /// old room in place.
    fn deal_room(&mut self) {
        let carried = self.room.remaining_card();
        let needed = ROOM_SIZE - usize::from(carried.is_some());

        match self.deck.draw(needed) {
            Ok(drawn) => {
                self.room = Room::new(carried.into_iter().chain(drawn));
                self.player.set_used_potion_this_room(false);
                self.status = GameStatus::InProgress;
                debug!(
                    session = %self.id,
                    carried = carried.is_some(),
                    remaining = self.deck.remaining(),
                    "room dealt"
                );
            }
            Err(err) => {
                self.status = GameStatus::Won;
                info!(session = %self.id, reason = %err, "dungeon cleared");
            }
        }
    }
}
