//! # hitler-engine
//!
//! Rules engine for a hidden-role social-deduction board game for 5-10
//! players. It keeps the authoritative table state, checks every player
//! action against the current stage, moves the game from stage to stage and
//! reports what happened as an ordered list of events.
//!
//! ## Design Principles
//!
//! 1. **Record, then advance**: setters validate and record intent. Only
//!    `Game::advance` changes the stage, by running the exit procedure of the
//!    current one.
//!
//! 2. **All or nothing**: a failed call changes nothing. Exit procedures run
//!    on a persistent-collection clone of the state that is committed on
//!    success.
//!
//! 3. **Frontend agnostic**: no transport, no text rendering of hidden
//!    information, no persistence. Events are plain serde values.
//!
//! ## Modules
//!
//! - `core`: players, roles, RNG, rules configuration, errors
//! - `deck`: policies, draw and discard piles
//! - `roster`: role deal and the presidential rotation
//! - `rules`: stages, executive power table, win conditions
//! - `events`: game events and transitions
//! - `game`: the stage machine and every stage's operations

pub mod core;
pub mod deck;
pub mod events;
pub mod game;
pub mod roster;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ConfigError, EngineResult, GameError, GameRng, Player, Role, RulesConfig,
    ShuffleSource, StateError,
};

pub use crate::deck::{Hand, Policy, PolicyDeck};

pub use crate::events::{GameEvent, Transition};

pub use crate::game::{Game, TableBuilder};

pub use crate::roster::{TurnOrder, MAX_PLAYERS, MIN_PLAYERS};

pub use crate::rules::{ExecutiveAction, Stage, Team};
