//! The stage machine.
//!
//! ## Driving a game
//!
//! Setters (`add_player`, `nominate_chancellor`, `record_vote`, ...) check
//! their input and record it without changing the stage. `advance` then runs
//! the exit procedure of the current stage, which consumes the recorded
//! input, updates the table and reports what happened.
//!
//! ```
//! use hitler_engine::{Game, Player, Stage};
//!
//! let mut game = Game::new(7);
//! for name in ["ada", "bob", "cy", "dee", "eve"] {
//!     game.add_player(Player::new(name)).unwrap();
//! }
//!
//! let transition = game.advance(Some(Stage::Lobby)).unwrap();
//! assert_eq!(transition.stage, Stage::NominateChancellor);
//! assert_eq!(game.stage(), Stage::NominateChancellor);
//! ```
//!
//! ## Atomicity
//!
//! An exit procedure runs on a clone of the state and is only committed if
//! it succeeds. A failed `advance` leaves the game exactly as it was.

use tracing::{debug, info};

use crate::core::{
    ActionError, ConfigError, EngineResult, GameRng, Player, RulesConfig, ShuffleSource,
};
use crate::deck::Hand;
use crate::events::Transition;
use crate::rules::Stage;

use super::state::{GameState, Veto};

/// One table of the game.
///
/// Generic over the randomness source so tests can plug in a deterministic
/// one. `GameRng` is used by default.
#[derive(Clone, Debug)]
pub struct Game<R: ShuffleSource = GameRng> {
    pub(crate) config: RulesConfig,
    pub(crate) state: GameState,
    pub(crate) rng: R,
}

impl Game<GameRng> {
    /// Create an empty lobby with the default rules and a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            config: RulesConfig::default(),
            state: GameState::default(),
            rng: GameRng::new(seed),
        }
    }
}

impl<R: ShuffleSource> Game<R> {
    /// Create an empty lobby with custom rules and randomness.
    pub fn with_config(config: RulesConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: GameState::default(),
            rng,
        })
    }

    pub(crate) fn from_parts(config: RulesConfig, state: GameState, rng: R) -> Self {
        Self { config, state, rng }
    }

    /// Run the exit procedure of the current stage.
    ///
    /// If `expected` is given and differs from the current stage, nothing
    /// happens and `IllegalState` is returned. A win moves the game back to
    /// an empty lobby once its events are collected.
    pub fn advance(&mut self, expected: Option<Stage>) -> EngineResult<Transition> {
        let current = self.state.stage;
        if let Some(expected) = expected {
            self.state.ensure_stage(expected)?;
        }

        let mut next = self.state.clone();
        let config = &self.config;
        let rng = &mut self.rng;

        let transition = match current {
            Stage::Lobby => next.exit_lobby(config, rng)?,
            Stage::NominateChancellor => next.exit_nominate_chancellor()?,
            Stage::ChancellorElection => next.exit_chancellor_election(config, rng)?,
            Stage::Legislate => next.exit_legislate()?,
            Stage::Enact => next.exit_enact(config, rng)?,
            Stage::ConfirmVeto => next.exit_confirm_veto(config, rng)?,
            Stage::ActionPeek => next.exit_action_peek()?,
            Stage::ActionInvestigate => next.exit_action_investigate()?,
            Stage::ActionKill => next.exit_action_kill()?,
            Stage::ActionSpecialElection => next.exit_action_special_election()?,
        };

        next.stage = transition.stage;
        debug!(from = %current, to = %transition.stage, events = transition.events.len(), "stage transition");

        if current.in_game() && transition.stage == Stage::Lobby {
            info!(
                liberal = next.liberal_enacted,
                fascist = next.fascist_enacted,
                "game over"
            );
            next = GameState::default();
        }

        debug_assert!(next.conserves_policies(&self.config));
        self.state = next;
        Ok(transition)
    }

    /// Abandon the game in progress and go back to an empty lobby.
    pub fn reset(&mut self) {
        if self.state.stage.in_game() {
            info!(stage = %self.state.stage, "game abandoned");
        }
        self.state = GameState::default();
    }

    // === Accessors ===

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Alive players in seating order. In the lobby, the registered players.
    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.state.turn_order.seats()
    }

    /// Killed players, in the order they died.
    pub fn dead_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.state.dead.iter()
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.state.alive_count()
    }

    #[must_use]
    pub fn dead_count(&self) -> usize {
        self.state.dead.len()
    }

    /// Alive and dead players together.
    #[must_use]
    pub fn total_player_count(&self) -> usize {
        self.state.total_player_count()
    }

    #[must_use]
    pub fn president(&self) -> Option<&Player> {
        self.state.president.as_ref()
    }

    /// The nominee during an election, then the elected chancellor until
    /// the presidency moves on.
    #[must_use]
    pub fn chancellor(&self) -> Option<&Player> {
        self.state.chancellor.as_ref()
    }

    #[must_use]
    pub fn liberal_policies(&self) -> usize {
        self.state.liberal_enacted
    }

    #[must_use]
    pub fn fascist_policies(&self) -> usize {
        self.state.fascist_enacted
    }

    /// The election tracker.
    #[must_use]
    pub fn failed_votes(&self) -> usize {
        self.state.failed_votes
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.state.deck.draw_len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.state.deck.discard_len()
    }

    /// Everyone investigated so far this game, oldest first.
    pub fn investigated_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.state.investigated.iter()
    }

    #[must_use]
    pub fn veto_requested(&self) -> bool {
        self.state.veto == Veto::Requested
    }

    /// The president's cards during `Legislate`.
    pub fn president_hand(&self) -> EngineResult<Hand> {
        self.state.ensure_stage(Stage::Legislate)?;
        Ok(self.state.hand(self.config.president_hand))
    }

    /// The chancellor's cards during `Enact`.
    pub fn chancellor_hand(&self) -> EngineResult<Hand> {
        self.state.ensure_stage(Stage::Enact)?;
        Ok(self.state.hand(self.config.chancellor_hand()))
    }
}

impl GameState {
    /// The top `size` cards, less one if a card was already discarded.
    pub(crate) fn hand(&self, size: usize) -> Hand {
        let held = if self.discarded { size.saturating_sub(1) } else { size };
        self.deck.top(held)
    }

    /// Make sure `player` is alive and not the sitting president.
    pub(crate) fn alive_target(&self, player: &Player) -> Result<Player, ActionError> {
        if self.is_president(player) {
            return Err(ActionError::TargetIsPresident);
        }
        self.alive(player)
    }
}
