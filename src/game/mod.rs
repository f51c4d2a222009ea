//! The game: state, stage machine and every stage's setters and exit
//! procedure.
//!
//! ## Layout
//!
//! - `engine`: `Game`, `advance`, accessors
//! - `lobby`, `election`, `legislature`, `powers`: setters and exit
//!   procedures, one file per part of a round
//! - `flow`: tracker, chaos, enactment outcome and the next president
//! - `builder`: `TableBuilder` for games that start past the lobby

pub mod builder;
pub mod election;
pub mod engine;
mod flow;
pub mod legislature;
pub mod lobby;
pub mod powers;
mod state;

pub use builder::TableBuilder;
pub use engine::Game;
