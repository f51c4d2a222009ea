//! Engine errors.
//!
//! Every failure is one of two kinds:
//!
//! - `InvalidAction`: the input breaks a rule (wrong target, duplicate join,
//!   term limit). Retry with different input.
//! - `IllegalState`: the call does not fit the current stage, or `advance`
//!   was called before its prerequisites were met. Retry later.
//!
//! Both are raised before anything is mutated.

use thiserror::Error;

use crate::deck::Policy;
use crate::rules::Stage;

/// Result type used by every fallible engine operation.
pub type EngineResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid action: {0}")]
    InvalidAction(#[from] ActionError),
    #[error("illegal state: {0}")]
    IllegalState(#[from] StateError),
}

impl GameError {
    #[must_use]
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, GameError::InvalidAction(_))
    }

    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, GameError::IllegalState(_))
    }
}

/// Caller input that breaks a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the table is full ({max} players)")]
    TableFull { max: usize },
    #[error("{0} has already joined")]
    AlreadyJoined(String),
    #[error("{0} is not in the lobby")]
    NotInLobby(String),
    #[error("{0} is not part of this game")]
    UnknownPlayer(String),
    #[error("{0} is not alive")]
    NotAlive(String),
    #[error("the president cannot nominate themselves")]
    NomineeIsPresident,
    #[error("{0} served in the last government and is term-limited")]
    TermLimited(String),
    #[error("there is no {0} policy in the hand")]
    NotInHand(Policy),
    #[error("a policy has already been discarded from this hand")]
    AlreadyDiscarded,
    #[error("a veto is waiting for the president's answer")]
    VetoPending,
    #[error("veto power is not available")]
    VetoUnavailable,
    #[error("the president cannot target themselves")]
    TargetIsPresident,
    #[error("{0} has no role")]
    RoleUnassigned(String),
    #[error("invalid table: {0}")]
    InvalidTable(String),
}

/// A call that does not fit the current stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("expected stage {expected}, but the game is in {actual}")]
    WrongStage { expected: Stage, actual: Stage },
    #[error("a game cannot start with {0} players")]
    UnsupportedPlayerCount(usize),
    #[error("no chancellor has been nominated")]
    NoNominee,
    #[error("{recorded} of {required} votes recorded")]
    VotesIncomplete { recorded: usize, required: usize },
    #[error("the president has not answered the veto")]
    NoVetoAnswer,
    #[error("no player has been investigated")]
    NoInvestigation,
    #[error("no player has been chosen to be killed")]
    NoKillTarget,
    #[error("no player has been chosen as next president")]
    NoSpecialElection,
    #[error("there is no sitting president")]
    NoPresident,
    #[error("nobody is seated at the table")]
    EmptyTable,
    #[error("the policy deck is empty")]
    DeckExhausted,
}

/// Inconsistent `RulesConfig` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("president hand of {0} leaves nothing to legislate")]
    HandTooSmall(usize),
    #[error("a win needs {needed} policies but the deck only has {available}")]
    UnreachableWin { needed: usize, available: usize },
    #[error("a deck of {deck} cannot deal a hand of {hand}")]
    DeckTooSmall { deck: usize, hand: usize },
    #[error("the election tracker limit must be at least 1")]
    ZeroTrackerLimit,
}
