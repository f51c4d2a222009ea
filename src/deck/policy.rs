//! Policy cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A policy card. Enacting one advances its track on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    Liberal,
    Fascist,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Liberal => f.write_str("liberal"),
            Policy::Fascist => f.write_str("fascist"),
        }
    }
}

/// Cards held by the president or chancellor, ordered bottom to top.
///
/// SmallVec keeps the 2-3 card hands off the heap.
pub type Hand = SmallVec<[Policy; 3]>;
