//! Core engine types: players, roles, RNG, configuration, errors.
//!
//! Everything here is independent of the stage machine and is shared by
//! the deck, roster, rules and game modules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::RulesConfig;
pub use error::{ActionError, ConfigError, EngineResult, GameError, StateError};
pub use player::{Player, Role};
pub use rng::{GameRng, ShuffleSource};
