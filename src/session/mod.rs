//! Game sessions and the registry that serves them.
//!
//! - `GameSession`: one game, the rules state machine
//! - `GameSnapshot`: serializable view of a session for clients
//! - `SessionRegistry`: concurrent id -> session map used by servers

pub mod game;
pub mod registry;
pub mod snapshot;

pub use game::GameSession;
pub use registry::SessionRegistry;
pub use snapshot::{CardView, DeckView, GameSnapshot, PlayerView, RoomCardView, RoomView};
