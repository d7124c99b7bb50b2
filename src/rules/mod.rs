//! Game rules.
//!
//! - `combat`: how a single card resolves against the player
//! - `status`: the session lifecycle (`GameStatus`)
//!
//! The session state machine in `session` sequences these rules across
//! rooms; nothing here touches the deck or the room.

pub mod combat;
pub mod status;

pub use combat::{eligible_weapon, preview_fight, resolve, weapon_damage, FightPreview, WeaponUse};
pub use status::GameStatus;
