//! Game events.
//!
//! Events describe what happened during one `advance`. They are immutable
//! values handed to the caller, who renders them; the engine keeps none.
//! Players inside events are the seated copies and so carry their role.
//! Frontends decide what to reveal.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::deck::Policy;
use crate::rules::ExecutiveAction;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The lobby closed and roles were dealt.
    GameStarted,

    /// A player learned their role.
    RoleAssigned { player: Player },

    /// The presidency changed hands. `former` is `None` for the first
    /// president of a game.
    PresidentChanged {
        former: Option<Player>,
        new: Player,
    },

    ChancellorNominated { president: Player, candidate: Player },

    ElectionSucceeded {
        yes: usize,
        no: usize,
        chancellor: Player,
    },

    ElectionFailed { yes: usize, no: usize },

    /// A government failed. `failed_votes` is the tracker after the step.
    ElectionTrackerAdvanced { failed_votes: usize },

    /// Too many failed governments: the top policy was enacted as is.
    ChaosEnacted { policy: Policy },

    /// The president passed two policies to the chancellor.
    PresidentLegislated { president: Player },

    PolicyEnacted { chancellor: Player, policy: Policy },

    ChancellorVetoed { president: Player, chancellor: Player },

    VetoAccepted { president: Player, chancellor: Player },

    VetoDenied { president: Player, chancellor: Player },

    ExecutiveActionGranted {
        president: Player,
        action: ExecutiveAction,
    },

    PresidentPeeked { president: Player },

    PresidentInvestigated {
        president: Player,
        investigated: Player,
    },

    PresidentKilled { president: Player, killed: Player },

    HitlerElectedChancellor { president: Player, chancellor: Player },

    LiberalsWin,

    FascistsWin,
}

impl GameEvent {
    /// Whether this event ends the game.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameEvent::LiberalsWin | GameEvent::FascistsWin)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted => write!(f, "the game starts"),
            GameEvent::RoleAssigned { player } => write!(f, "{player} receives a role"),
            GameEvent::PresidentChanged { former: Some(former), new } => {
                write!(f, "the presidency passes from {former} to {new}")
            }
            GameEvent::PresidentChanged { former: None, new } => {
                write!(f, "{new} is the first president")
            }
            GameEvent::ChancellorNominated { president, candidate } => {
                write!(f, "{president} nominates {candidate} for chancellor")
            }
            GameEvent::ElectionSucceeded { yes, no, chancellor } => {
                write!(f, "{chancellor} is elected chancellor ({yes} ja, {no} nein)")
            }
            GameEvent::ElectionFailed { yes, no } => {
                write!(f, "the election fails ({yes} ja, {no} nein)")
            }
            GameEvent::ElectionTrackerAdvanced { failed_votes } => {
                write!(f, "the election tracker moves to {failed_votes}")
            }
            GameEvent::ChaosEnacted { policy } => {
                write!(f, "chaos: a {policy} policy is enacted")
            }
            GameEvent::PresidentLegislated { president } => {
                write!(f, "{president} passes two policies on")
            }
            GameEvent::PolicyEnacted { chancellor, policy } => {
                write!(f, "{chancellor} enacts a {policy} policy")
            }
            GameEvent::ChancellorVetoed { chancellor, .. } => {
                write!(f, "{chancellor} asks for a veto")
            }
            GameEvent::VetoAccepted { president, .. } => {
                write!(f, "{president} accepts the veto")
            }
            GameEvent::VetoDenied { president, .. } => {
                write!(f, "{president} refuses the veto")
            }
            GameEvent::ExecutiveActionGranted { president, action } => {
                write!(f, "{president} is granted the {action} power")
            }
            GameEvent::PresidentPeeked { president } => {
                write!(f, "{president} peeks at the next policies")
            }
            GameEvent::PresidentInvestigated {
                president,
                investigated,
            } => write!(f, "{president} investigates {investigated}"),
            GameEvent::PresidentKilled { president, killed } => {
                write!(f, "{president} executes {killed}")
            }
            GameEvent::HitlerElectedChancellor { chancellor, .. } => {
                write!(f, "{chancellor}, Hitler, is elected chancellor")
            }
            GameEvent::LiberalsWin => write!(f, "the liberals win"),
            GameEvent::FascistsWin => write!(f, "the fascists win"),
        }
    }
}
