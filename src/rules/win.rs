//! Win conditions and what follows an enactment.

use serde::{Deserialize, Serialize};

use crate::core::{Player, RulesConfig};
use crate::deck::Policy;

use super::executive::ExecutiveAction;

/// The team that won a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Liberals,
    Fascists,
}

/// What happens after a policy lands on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The game is over.
    Win(Team),
    /// The president must use a power first.
    Executive(ExecutiveAction),
    /// The presidency passes on.
    NextPresident,
}

/// Evaluate the board after `policy` was enacted.
///
/// `liberal_enacted` and `fascist_enacted` already include `policy`.
/// `total_players` counts dead players too.
#[must_use]
pub fn after_enactment(
    config: &RulesConfig,
    policy: Policy,
    liberal_enacted: usize,
    fascist_enacted: usize,
    total_players: usize,
) -> Verdict {
    if liberal_enacted >= config.liberal_win {
        return Verdict::Win(Team::Liberals);
    }
    if fascist_enacted >= config.fascist_win {
        return Verdict::Win(Team::Fascists);
    }

    match policy {
        Policy::Fascist => match ExecutiveAction::for_board(total_players, fascist_enacted) {
            Some(action) => Verdict::Executive(action),
            None => Verdict::NextPresident,
        },
        Policy::Liberal => Verdict::NextPresident,
    }
}

/// Whether electing `chancellor` ends the game on the spot.
#[must_use]
pub fn hitler_elected(config: &RulesConfig, chancellor: &Player, fascist_enacted: usize) -> bool {
    chancellor.is_hitler() && fascist_enacted >= config.hitler_chancellor_threshold
}
