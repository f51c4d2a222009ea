//! Presidential powers granted by fascist policies.
//!
//! ## Board table
//!
//! The power depends on the table size (dead players included) and on how
//! many fascist policies are on the board after the enactment:
//!
//! | Players | 1 | 2 | 3 | 4 | 5 |
//! |---|---|---|---|---|---|
//! | 5-6 | | | peek | kill | kill |
//! | 7-8 | | investigate | special election | kill | kill |
//! | 9-10 | investigate | investigate | special election | kill | kill |

use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// A power the president must use before the presidency moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutiveAction {
    Peek,
    Investigate,
    Kill,
    SpecialElection,
}

impl ExecutiveAction {
    /// Look up the power for a board state.
    ///
    /// `total_players` counts dead players too. Returns `None` when the
    /// enactment grants nothing.
    #[must_use]
    pub const fn for_board(total_players: usize, fascist_enacted: usize) -> Option<Self> {
        use ExecutiveAction::{Investigate, Kill, Peek, SpecialElection};

        match (total_players, fascist_enacted) {
            (5 | 6, 3) => Some(Peek),
            (9 | 10, 1) | (7..=10, 2) => Some(Investigate),
            (7..=10, 3) => Some(SpecialElection),
            (5..=10, 4 | 5) => Some(Kill),
            _ => None,
        }
    }

    /// The stage in which the power is used.
    #[must_use]
    pub const fn stage(self) -> Stage {
        match self {
            ExecutiveAction::Peek => Stage::ActionPeek,
            ExecutiveAction::Investigate => Stage::ActionInvestigate,
            ExecutiveAction::Kill => Stage::ActionKill,
            ExecutiveAction::SpecialElection => Stage::ActionSpecialElection,
        }
    }
}

impl std::fmt::Display for ExecutiveAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExecutiveAction::Peek => "peek",
            ExecutiveAction::Investigate => "investigate",
            ExecutiveAction::Kill => "kill",
            ExecutiveAction::SpecialElection => "special_election",
        };
        f.write_str(name)
    }
}
