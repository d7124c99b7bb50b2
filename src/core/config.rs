//! Game configuration.
//!
//! `GameConfig` carries the knobs a session is created with. The defaults
//! are the standard rules: 20 health and an entropy-seeded shuffle.

use serde::{Deserialize, Serialize};

/// Starting and maximum health under the standard rules.
pub const DEFAULT_MAX_HEALTH: i32 = 20;

/// Configuration shared by every session a registry creates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting health, and the cap for healing.
    pub max_health: i32,

    /// Master seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Standard rules, unseeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting/maximum health.
    #[must_use]
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        assert!(max_health > 0, "Max health must be positive");
        self.max_health = max_health;
        self
    }

    /// Use a fixed seed so dealt dungeons are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
