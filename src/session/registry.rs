//! Registry of live game sessions.
//!
//! The registry is the only state shared between concurrent callers (one
//! per inbound request in a server). It is built once and handed out by
//! reference; there is no global instance.
//!
//! ## Locking
//!
//! - A reader/writer lock guards membership. Lookups share it; create,
//!   delete and the cleanup sweep take it exclusively.
//! - Each session sits behind its own mutex, held for the whole operation,
//!   so two requests never interleave inside one session while different
//!   sessions proceed in parallel.
//!
//! Operations never wait on anything but these locks, and nothing runs in
//! the background: finished sessions stay until `cleanup_finished` is
//! called.

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::id::SessionId;
use crate::core::rng::GameRng;

use super::game::GameSession;
use super::snapshot::GameSnapshot;

/// Concurrency-safe map from session id to session.
#[derive(Debug)]
pub struct SessionRegistry {
    config: GameConfig,
    /// Master RNG; each new session gets a fork.
    rng: Mutex<GameRng>,
    sessions: RwLock<FxHashMap<SessionId, Mutex<GameSession>>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    ///
    /// With `config.seed` set, the n-th created session always gets the same
    /// dungeon.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            rng: Mutex::new(rng),
            sessions: RwLock::new(FxHashMap::default()),
        }
    }

    /// Configuration new sessions are created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game and return its id.
    pub fn create_session(&self) -> SessionId {
        let rng = self.rng.lock().fork();
        self.insert(GameSession::with_rng(&self.config, rng))
    }

    /// Register an already-built session (e.g. one on an arranged deck).
    pub fn insert(&self, session: GameSession) -> SessionId {
        let id = session.id();
        let count = {
            let mut sessions = self.sessions.write();
            sessions.insert(id, Mutex::new(session));
            sessions.len()
        };
        info!(session = %id, active = count, "session created");
        id
    }

    /// Snapshot of a session.
    pub fn get_state(&self, id: SessionId) -> Result<GameSnapshot> {
        self.with_session(id, GameSession::snapshot)
    }

    /// Play a card, weapon allowed. Returns the updated snapshot.
    pub fn play_card(&self, id: SessionId, index: usize) -> Result<GameSnapshot> {
        self.with_session_mut(id, |session| {
            session.play_card(index)?;
            Ok(session.snapshot())
        })
    }

    /// Play a card barehanded. Returns the updated snapshot.
    pub fn play_card_without_weapon(&self, id: SessionId, index: usize) -> Result<GameSnapshot> {
        self.with_session_mut(id, |session| {
            session.play_card_without_weapon(index)?;
            Ok(session.snapshot())
        })
    }

    /// Skip the current room. Returns the updated snapshot.
    pub fn skip_room(&self, id: SessionId) -> Result<GameSnapshot> {
        self.with_session_mut(id, |session| {
            session.skip_room()?;
            Ok(session.snapshot())
        })
    }

    /// Run `f` against a session without changing it.
    pub fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&GameSession) -> T) -> Result<T> {
        let sessions = self.sessions.read();
        let slot = sessions.get(&id).ok_or(GameError::SessionNotFound(id))?;
        let session = slot.lock();
        Ok(f(&session))
    }

    fn with_session_mut<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T>,
    ) -> Result<T> {
        let sessions = self.sessions.read();
        let slot = sessions.get(&id).ok_or(GameError::SessionNotFound(id))?;
        let mut session = slot.lock();
        let result = f(&mut session);
        if let Err(err) = &result {
            debug!(session = %id, %err, class = %err.class(), "operation rejected");
        }
        result
    }

    /// Remove a session. Returns whether it existed.
    pub fn delete_session(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            info!(session = %id, "session deleted");
        }
        removed
    }

    /// Evict every won or lost session. Returns how many were removed.
    pub fn cleanup_finished(&self) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.get_mut().is_over());
        let evicted = before - sessions.len();
        info!(evicted, active = sessions.len(), "finished sessions cleaned up");
        evicted
    }

    /// Number of registered sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Ids of all registered sessions, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        self.sessions.read().keys().copied().collect()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
