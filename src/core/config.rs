//! Rules configuration.
//!
//! Every numeric threshold the engine checks lives in `RulesConfig`. The
//! defaults are the published board-game rules; a frontend running a house
//! variant overrides individual values with the `with_*` builders.
//!
//! Player-count tables (role split, executive actions) are fixed by the
//! rules and live next to the code that reads them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Thresholds and deck composition used by a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Liberal policies in a fresh deck.
    pub liberal_policies: usize,

    /// Fascist policies in a fresh deck.
    pub fascist_policies: usize,

    /// Cards drawn by the president. The chancellor receives one fewer.
    pub president_hand: usize,

    /// Enacted liberal policies needed for a liberal win.
    pub liberal_win: usize,

    /// Enacted fascist policies needed for a fascist win.
    pub fascist_win: usize,

    /// Enacted fascist policies that unlock the veto power.
    pub veto_unlock: usize,

    /// Enacted fascist policies after which electing Hitler chancellor wins.
    pub hitler_chancellor_threshold: usize,

    /// Consecutive failed governments that cause chaos.
    pub election_tracker_limit: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            liberal_policies: 6,
            fascist_policies: 11,
            president_hand: 3,
            liberal_win: 5,
            fascist_win: 6,
            veto_unlock: 5,
            hitler_chancellor_threshold: 3,
            election_tracker_limit: 3,
        }
    }
}

impl RulesConfig {
    /// Cards handed to the chancellor.
    #[must_use]
    pub fn chancellor_hand(&self) -> usize {
        self.president_hand.saturating_sub(1)
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.liberal_policies + self.fascist_policies
    }

    /// Whether the chancellor may request a veto with this many fascist
    /// policies on the board.
    #[must_use]
    pub fn veto_available(&self, fascist_enacted: usize) -> bool {
        fascist_enacted >= self.veto_unlock
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, liberal: usize, fascist: usize) -> Self {
        self.liberal_policies = liberal;
        self.fascist_policies = fascist;
        self
    }

    /// Set the win thresholds.
    #[must_use]
    pub fn with_win_thresholds(mut self, liberal: usize, fascist: usize) -> Self {
        self.liberal_win = liberal;
        self.fascist_win = fascist;
        self
    }

    #[must_use]
    pub fn with_veto_unlock(mut self, fascist_enacted: usize) -> Self {
        self.veto_unlock = fascist_enacted;
        self
    }

    #[must_use]
    pub fn with_election_tracker_limit(mut self, limit: usize) -> Self {
        self.election_tracker_limit = limit;
        self
    }

    /// Check that a game can actually be played with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.president_hand < 2 {
            return Err(ConfigError::HandTooSmall(self.president_hand));
        }
        if self.liberal_win == 0 || self.liberal_win > self.liberal_policies {
            return Err(ConfigError::UnreachableWin {
                needed: self.liberal_win,
                available: self.liberal_policies,
            });
        }
        if self.fascist_win == 0 || self.fascist_win > self.fascist_policies {
            return Err(ConfigError::UnreachableWin {
                needed: self.fascist_win,
                available: self.fascist_policies,
            });
        }
        if self.deck_size() < self.president_hand {
            return Err(ConfigError::DeckTooSmall {
                deck: self.deck_size(),
                hand: self.president_hand,
            });
        }
        if self.election_tracker_limit == 0 {
            return Err(ConfigError::ZeroTrackerLimit);
        }
        Ok(())
    }
}
