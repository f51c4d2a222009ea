//! Events emitted by `Game::advance`.
//!
//! ## Key Types
//!
//! - `GameEvent`: the closed set of things that can happen
//! - `Transition`: events of one advance plus the stage the game moved to

pub mod event;
pub mod log;

pub use event::GameEvent;
pub use log::Transition;

pub(crate) use log::EventLog;
