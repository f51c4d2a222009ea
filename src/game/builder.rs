//! Seat a table that is already past the lobby.
//!
//! `TableBuilder` starts a game from a known position: who sits where with
//! which role, who is president, what is on the board and which cards are
//! on top of the deck. Frontends use it to resume or stage a game, and tests
//! use it to reach a position without playing up to it.
//!
//! ```
//! use hitler_engine::{Game, Player, Policy, Role, Stage, TableBuilder};
//!
//! let mut game = TableBuilder::new(vec![
//!     Player::new("ada").with_role(Role::Liberal),
//!     Player::new("bob").with_role(Role::Liberal),
//!     Player::new("cy").with_role(Role::Liberal),
//!     Player::new("dee").with_role(Role::Fascist),
//!     Player::new("eve").with_role(Role::Hitler),
//! ])
//! .president("ada")
//! .chancellor("bob")
//! .stack_deck(&[Policy::Fascist, Policy::Liberal, Policy::Liberal])
//! .stage(Stage::Legislate)
//! .build(42)
//! .unwrap();
//!
//! assert_eq!(
//!     game.president_hand().unwrap().as_slice(),
//!     &[Policy::Fascist, Policy::Liberal, Policy::Liberal]
//! );
//! ```

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{
    ActionError, EngineResult, GameRng, Player, Role, RulesConfig, ShuffleSource,
};
use crate::deck::{Policy, PolicyDeck};
use crate::roster::{self, TurnOrder};
use crate::rules::Stage;

use super::engine::Game;
use super::state::{GameState, Government};

/// Builder for a game in progress.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    players: Vec<Player>,
    dead: Vec<Player>,
    president: Option<String>,
    chancellor: Option<String>,
    term_limited: Option<(String, String)>,
    liberal_enacted: usize,
    fascist_enacted: usize,
    failed_votes: usize,
    top: Vec<Policy>,
    discard: Vec<Policy>,
    stage: Stage,
    config: RulesConfig,
}

impl TableBuilder {
    /// Start from the alive players in seating order. Every player needs a
    /// role.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            dead: Vec::new(),
            president: None,
            chancellor: None,
            term_limited: None,
            liberal_enacted: 0,
            fascist_enacted: 0,
            failed_votes: 0,
            top: Vec::new(),
            discard: Vec::new(),
            stage: Stage::NominateChancellor,
            config: RulesConfig::default(),
        }
    }

    #[must_use]
    pub fn president(mut self, name: &str) -> Self {
        self.president = Some(name.to_string());
        self
    }

    /// The elected chancellor. Required for `Legislate` and `Enact`.
    #[must_use]
    pub fn chancellor(mut self, name: &str) -> Self {
        self.chancellor = Some(name.to_string());
        self
    }

    /// The previous president and chancellor, barred from the current
    /// president's nomination.
    #[must_use]
    pub fn term_limited(mut self, president: &str, chancellor: &str) -> Self {
        self.term_limited = Some((president.to_string(), chancellor.to_string()));
        self
    }

    /// Players already killed. They still count towards the table size.
    #[must_use]
    pub fn dead(mut self, players: Vec<Player>) -> Self {
        self.dead = players;
        self
    }

    /// Policies already on the board.
    #[must_use]
    pub fn policies(mut self, liberal: usize, fascist: usize) -> Self {
        self.liberal_enacted = liberal;
        self.fascist_enacted = fascist;
        self
    }

    #[must_use]
    pub fn election_tracker(mut self, failed_votes: usize) -> Self {
        self.failed_votes = failed_votes;
        self
    }

    /// Cards placed on top of the draw pile, top last. The rest of the
    /// deck is shuffled underneath.
    #[must_use]
    pub fn stack_deck(mut self, top: &[Policy]) -> Self {
        self.top = top.to_vec();
        self
    }

    /// Cards already in the discard pile.
    #[must_use]
    pub fn discard(mut self, discarded: &[Policy]) -> Self {
        self.discard = discarded.to_vec();
        self
    }

    /// Starting stage: `NominateChancellor` (default), `Legislate` or
    /// `Enact`.
    #[must_use]
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build with a seeded `GameRng`.
    pub fn build(self, seed: u64) -> EngineResult<Game<GameRng>> {
        self.build_with(GameRng::new(seed))
    }

    /// Build with any randomness source.
    pub fn build_with<R: ShuffleSource>(self, mut rng: R) -> EngineResult<Game<R>> {
        self.config.validate().map_err(|err| invalid(err.to_string()))?;
        self.check_seating()?;
        self.check_board()?;

        let president = self.find_alive(self.president.as_deref(), "president")?;
        let chancellor = match self.chancellor.as_deref() {
            Some(name) => Some(self.find_alive(Some(name), "chancellor")?),
            None => None,
        };
        if chancellor.as_ref() == Some(&president) {
            return Err(invalid("president and chancellor are the same player").into());
        }

        match self.stage {
            Stage::NominateChancellor => {}
            Stage::Legislate | Stage::Enact if chancellor.is_none() => {
                return Err(invalid(format!("{} needs an elected chancellor", self.stage)).into());
            }
            Stage::Legislate | Stage::Enact => {}
            other => return Err(invalid(format!("a table cannot start in {other}")).into()),
        }
        let former = match &self.term_limited {
            Some((p, c)) => Government {
                president: Some(self.find_any(p)?),
                chancellor: Some(self.find_any(c)?),
            },
            None => Government::default(),
        };

        let deck = self.deck(&mut rng)?;
        let needed = match self.stage {
            Stage::Legislate => self.config.president_hand,
            Stage::Enact => self.config.chancellor_hand(),
            _ => 0,
        };
        if deck.draw_len() < needed {
            return Err(invalid(format!("{} needs {needed} cards to draw", self.stage)).into());
        }

        let state = GameState {
            stage: self.stage,
            turn_order: TurnOrder::anchored(self.players.iter().cloned(), &president),
            dead: self.dead.iter().cloned().collect::<Vector<_>>(),
            deck,
            liberal_enacted: self.liberal_enacted,
            fascist_enacted: self.fascist_enacted,
            failed_votes: self.failed_votes,
            president: Some(president),
            chancellor,
            former,
            ..GameState::default()
        };

        let game = Game::from_parts(self.config, state, rng);
        debug_assert!(game.state.conserves_policies(&game.config));
        Ok(game)
    }

    fn everyone(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().chain(self.dead.iter())
    }

    fn check_seating(&self) -> Result<(), ActionError> {
        let total = self.players.len() + self.dead.len();
        if !roster::is_supported(total) {
            return Err(invalid(format!("{total} players is not a supported table")));
        }

        let mut names = FxHashSet::default();
        for player in self.everyone() {
            if !names.insert(player.name()) {
                return Err(invalid(format!("{player} is seated twice")));
            }
            if player.role().is_none() {
                return Err(ActionError::RoleUnassigned(player.name().to_string()));
            }
        }

        let hitlers = self.everyone().filter(|p| p.role() == Some(Role::Hitler)).count();
        if hitlers != 1 {
            return Err(invalid(format!("expected one hitler, found {hitlers}")));
        }
        Ok(())
    }

    fn check_board(&self) -> Result<(), ActionError> {
        if self.liberal_enacted >= self.config.liberal_win
            || self.fascist_enacted >= self.config.fascist_win
        {
            return Err(invalid("the board already holds a win"));
        }
        if self.failed_votes >= self.config.election_tracker_limit {
            return Err(invalid("the election tracker is past its limit"));
        }
        Ok(())
    }

    fn find_alive(&self, name: Option<&str>, seat: &str) -> Result<Player, ActionError> {
        let name = name.ok_or_else(|| invalid(format!("no {seat} chosen")))?;
        self.players
            .iter()
            .find(|p| p.name() == name)
            .cloned()
            .ok_or_else(|| invalid(format!("{seat} {name} is not an alive player")))
    }

    fn find_any(&self, name: &str) -> Result<Player, ActionError> {
        self.everyone()
            .find(|p| p.name() == name)
            .cloned()
            .ok_or_else(|| ActionError::UnknownPlayer(name.to_string()))
    }

    /// What is left of the deck once the board, the discards and the
    /// stacked cards are accounted for, shuffled under the stacked cards.
    fn deck<R: ShuffleSource>(&self, rng: &mut R) -> Result<PolicyDeck, ActionError> {
        let used = |policy: Policy| {
            self.top
                .iter()
                .chain(self.discard.iter())
                .filter(|&&p| p == policy)
                .count()
        };
        let liberals = self
            .config
            .liberal_policies
            .checked_sub(self.liberal_enacted + used(Policy::Liberal))
            .ok_or_else(|| invalid("more liberal policies than the deck holds"))?;
        let fascists = self
            .config
            .fascist_policies
            .checked_sub(self.fascist_enacted + used(Policy::Fascist))
            .ok_or_else(|| invalid("more fascist policies than the deck holds"))?;

        let mut rest: Vec<Policy> = std::iter::repeat(Policy::Liberal)
            .take(liberals)
            .chain(std::iter::repeat(Policy::Fascist).take(fascists))
            .collect();
        rng.shuffle(&mut rest);

        Ok(PolicyDeck::from_piles(
            rest.into_iter().chain(self.top.iter().copied()),
            self.discard.iter().copied(),
        ))
    }
}

fn invalid(reason: impl Into<String>) -> ActionError {
    ActionError::InvalidTable(reason.into())
}
