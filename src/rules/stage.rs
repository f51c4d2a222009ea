//! Game stages.

use serde::{Deserialize, Serialize};

/// The stage the game is in. Each setter is only valid in one stage, and
/// `Game::advance` runs the exit procedure of the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Players join and leave. No game is running.
    #[default]
    Lobby,
    /// The president picks a chancellor candidate.
    NominateChancellor,
    /// Everyone alive votes on the proposed government.
    ChancellorElection,
    /// The president discards one of three policies.
    Legislate,
    /// The chancellor discards one of two policies, or asks for a veto.
    Enact,
    /// The president accepts or refuses the chancellor's veto.
    ConfirmVeto,
    /// The president looks at the top three policies.
    ActionPeek,
    /// The president looks at a player's role.
    ActionInvestigate,
    /// The president executes a player.
    ActionKill,
    /// The president picks the next president.
    ActionSpecialElection,
}

impl Stage {
    /// Whether a game is running.
    #[must_use]
    pub const fn in_game(self) -> bool {
        !matches!(self, Stage::Lobby)
    }

    /// The snake_case name, as used in serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Lobby => "lobby",
            Stage::NominateChancellor => "nominate_chancellor",
            Stage::ChancellorElection => "chancellor_election",
            Stage::Legislate => "legislate",
            Stage::Enact => "enact",
            Stage::ConfirmVeto => "confirm_veto",
            Stage::ActionPeek => "action_peek",
            Stage::ActionInvestigate => "action_investigate",
            Stage::ActionKill => "action_kill",
            Stage::ActionSpecialElection => "action_special_election",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
