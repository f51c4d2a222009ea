//! Nomination and the vote on the proposed government.

use tracing::{debug, trace};

use crate::core::{ActionError, EngineResult, Player, RulesConfig, ShuffleSource, StateError};
use crate::events::{EventLog, GameEvent, Transition};
use crate::rules::{self, Stage};

use super::engine::Game;
use super::state::GameState;

impl<R: ShuffleSource> Game<R> {
    /// The president proposes `candidate` as chancellor.
    ///
    /// The candidate must be alive and must be neither the president nor
    /// one of the outgoing president and chancellor.
    pub fn nominate_chancellor(&mut self, candidate: &Player) -> EngineResult<()> {
        self.state.ensure_stage(Stage::NominateChancellor)?;

        if self.state.is_president(candidate) {
            return Err(ActionError::NomineeIsPresident.into());
        }
        if self.state.former.includes(candidate) {
            return Err(ActionError::TermLimited(candidate.name().to_string()).into());
        }
        let candidate = self.state.alive(candidate)?;

        trace!(%candidate, "chancellor nominated");
        self.state.chancellor = Some(candidate);
        Ok(())
    }

    /// Record `player`'s vote, replacing any earlier one.
    pub fn record_vote(&mut self, player: &Player, yes: bool) -> EngineResult<()> {
        self.state.ensure_stage(Stage::ChancellorElection)?;

        trace!(%player, yes, "vote recorded");
        self.state.votes.insert(player.clone(), yes);
        Ok(())
    }

    /// Whether every alive player has voted.
    #[must_use]
    pub fn is_election_complete(&self) -> bool {
        self.state.votes.len() == self.state.alive_count()
    }
}

impl GameState {
    pub(crate) fn exit_nominate_chancellor(&mut self) -> EngineResult<Transition> {
        let candidate = self.chancellor.clone().ok_or(StateError::NoNominee)?;
        let president = self.current_president()?.clone();

        let mut log = EventLog::new();
        log.push(GameEvent::ChancellorNominated {
            president,
            candidate,
        });
        Ok(log.finish(Stage::ChancellorElection))
    }

    /// Count the votes. A tie fails.
    pub(crate) fn exit_chancellor_election<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
    ) -> EngineResult<Transition> {
        let required = self.alive_count();
        if self.votes.len() != required {
            return Err(StateError::VotesIncomplete {
                recorded: self.votes.len(),
                required,
            }
            .into());
        }

        let yes = self.votes.values().filter(|&&vote| vote).count();
        let no = required - yes;
        self.votes.clear();
        debug!(yes, no, "election tallied");

        let mut log = EventLog::new();

        if yes <= no {
            log.push(GameEvent::ElectionFailed { yes, no });
            let stage = self.advance_election_tracker(config, rng, &mut log)?;
            return Ok(log.finish(stage));
        }

        let chancellor = self.chancellor.clone().ok_or(StateError::NoNominee)?;
        let president = self.current_president()?.clone();

        self.failed_votes = 0;
        self.discarded = false;
        if self.deck.ensure_drawable(config.president_hand, rng) {
            debug!(draw = self.deck.draw_len(), "policy deck reshuffled");
        }
        log.push(GameEvent::ElectionSucceeded {
            yes,
            no,
            chancellor: chancellor.clone(),
        });

        if rules::hitler_elected(config, &chancellor, self.fascist_enacted) {
            log.push(GameEvent::HitlerElectedChancellor {
                president,
                chancellor,
            });
            log.push(GameEvent::FascistsWin);
            return Ok(log.finish(Stage::Lobby));
        }

        Ok(log.finish(Stage::Legislate))
    }
}
