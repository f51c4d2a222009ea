//! The game aggregate.
//!
//! ## GameState
//!
//! Everything the rules need to know about one table:
//! - Stage, seating and presidential rotation, the dead
//! - Policy piles and the two board tracks
//! - The sitting government and the last elected one
//! - Intent recorded by setters and consumed by the next exit procedure
//!
//! Uses `im` persistent collections so `Game::advance` can run an exit
//! procedure on a cheap clone and only commit it on success.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{ActionError, Player, RulesConfig, StateError};
use crate::deck::{Policy, PolicyDeck};
use crate::roster::TurnOrder;
use crate::rules::Stage;

/// Progress of the veto during one legislative session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Veto {
    /// Not asked for yet.
    #[default]
    Unused,
    /// The chancellor asked, the president has not answered.
    Requested,
    /// The president agreed. Consumed by the `ConfirmVeto` exit.
    Accepted,
    /// The president refused. The chancellor must enact.
    Denied,
}

/// The outgoing president and chancellor, rejected nominees included.
/// Neither may be nominated chancellor by the next president.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Government {
    pub(crate) president: Option<Player>,
    pub(crate) chancellor: Option<Player>,
}

impl Government {
    pub(crate) fn includes(&self, player: &Player) -> bool {
        self.president.as_ref() == Some(player) || self.chancellor.as_ref() == Some(player)
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct GameState {
    pub(crate) stage: Stage,

    /// Lobby roster before the game, alive players during it.
    pub(crate) turn_order: TurnOrder,
    pub(crate) dead: Vector<Player>,

    pub(crate) deck: PolicyDeck,
    pub(crate) liberal_enacted: usize,
    pub(crate) fascist_enacted: usize,
    pub(crate) failed_votes: usize,

    pub(crate) president: Option<Player>,
    /// Nominee during the election, then the elected chancellor.
    pub(crate) chancellor: Option<Player>,
    pub(crate) former: Government,

    pub(crate) votes: FxHashMap<Player, bool>,
    /// Whether the current hand holder has already discarded.
    pub(crate) discarded: bool,
    pub(crate) veto: Veto,
    pub(crate) pending_investigation: Option<Player>,
    pub(crate) investigated: Vector<Player>,
    pub(crate) kill_target: Option<Player>,
    pub(crate) special_election: Option<Player>,
}

impl GameState {
    pub(crate) fn ensure_stage(&self, expected: Stage) -> Result<(), StateError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(StateError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }

    pub(crate) fn alive_count(&self) -> usize {
        self.turn_order.len()
    }

    pub(crate) fn total_player_count(&self) -> usize {
        self.turn_order.len() + self.dead.len()
    }

    pub(crate) fn current_president(&self) -> Result<&Player, StateError> {
        self.president.as_ref().ok_or(StateError::NoPresident)
    }

    pub(crate) fn is_president(&self, player: &Player) -> bool {
        self.president.as_ref() == Some(player)
    }

    /// The seated, alive copy of `player`.
    pub(crate) fn alive(&self, player: &Player) -> Result<Player, ActionError> {
        self.turn_order
            .get(player)
            .cloned()
            .ok_or_else(|| self.not_alive(player))
    }

    /// The seated copy of `player`, alive or dead.
    pub(crate) fn seated(&self, player: &Player) -> Result<Player, ActionError> {
        self.turn_order
            .get(player)
            .or_else(|| self.dead.iter().find(|p| *p == player))
            .cloned()
            .ok_or_else(|| ActionError::UnknownPlayer(player.name().to_string()))
    }

    fn not_alive(&self, player: &Player) -> ActionError {
        if self.dead.contains(player) {
            ActionError::NotAlive(player.name().to_string())
        } else {
            ActionError::UnknownPlayer(player.name().to_string())
        }
    }

    /// Cards are never created or destroyed during a game.
    pub(crate) fn conserves_policies(&self, config: &RulesConfig) -> bool {
        if !self.stage.in_game() {
            return true;
        }
        self.deck.count(Policy::Liberal) + self.liberal_enacted == config.liberal_policies
            && self.deck.count(Policy::Fascist) + self.fascist_enacted == config.fascist_policies
    }
}
