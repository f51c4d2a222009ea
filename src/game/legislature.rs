//! The legislative session: discards, enactment and the veto.
//!
//! Hands are never dealt out of the deck. The president's hand is the top
//! three cards, and the chancellor's hand is whatever two cards remain on
//! top after the president's discard. The enacted policy is the card left on
//! top after the chancellor's discard.

use tracing::{debug, trace};

use crate::core::{ActionError, EngineResult, RulesConfig, ShuffleSource, StateError};
use crate::deck::Policy;
use crate::events::{EventLog, GameEvent, Transition};
use crate::rules::Stage;

use super::engine::Game;
use super::state::{GameState, Veto};

impl<R: ShuffleSource> Game<R> {
    /// The president throws away one policy of their hand.
    pub fn president_discards(&mut self, policy: Policy) -> EngineResult<()> {
        self.state.ensure_stage(Stage::Legislate)?;
        let hand = self.config.president_hand;
        self.state.discard(hand, policy)?;

        trace!(%policy, "president discarded");
        Ok(())
    }

    /// The chancellor throws away one policy, enacting the other on the
    /// next `advance`.
    pub fn chancellor_discards(&mut self, policy: Policy) -> EngineResult<()> {
        self.state.ensure_stage(Stage::Enact)?;
        if self.state.veto == Veto::Requested {
            return Err(ActionError::VetoPending.into());
        }
        let hand = self.config.chancellor_hand();
        self.state.discard(hand, policy)?;

        trace!(%policy, "chancellor discarded");
        Ok(())
    }

    /// The chancellor asks to discard the whole hand.
    ///
    /// Only available once enough fascist policies are enacted, only once
    /// per session, and only before the chancellor has discarded.
    pub fn chancellor_vetoes(&mut self) -> EngineResult<()> {
        self.state.ensure_stage(Stage::Enact)?;

        match self.state.veto {
            Veto::Requested => return Err(ActionError::VetoPending.into()),
            Veto::Accepted | Veto::Denied => return Err(ActionError::VetoUnavailable.into()),
            Veto::Unused => {}
        }
        if !self.config.veto_available(self.state.fascist_enacted) {
            return Err(ActionError::VetoUnavailable.into());
        }
        if self.state.discarded {
            return Err(ActionError::AlreadyDiscarded.into());
        }

        trace!("veto requested");
        self.state.veto = Veto::Requested;
        Ok(())
    }

    /// The president's answer to a veto request. Can be changed until the
    /// next `advance`.
    pub fn president_answers_to_veto(&mut self, accept: bool) -> EngineResult<()> {
        self.state.ensure_stage(Stage::ConfirmVeto)?;

        trace!(accept, "veto answered");
        self.state.veto = if accept { Veto::Accepted } else { Veto::Denied };
        Ok(())
    }
}

impl GameState {
    /// Discard `policy` from a hand of `hand_size` cards, once.
    fn discard(&mut self, hand_size: usize, policy: Policy) -> Result<(), ActionError> {
        if self.discarded {
            return Err(ActionError::AlreadyDiscarded);
        }
        self.deck.discard_from_top(hand_size, policy)?;
        self.discarded = true;
        Ok(())
    }

    pub(crate) fn exit_legislate(&mut self) -> EngineResult<Transition> {
        let president = self.current_president()?.clone();
        self.discarded = false;

        let mut log = EventLog::new();
        log.push(GameEvent::PresidentLegislated { president });
        Ok(log.finish(Stage::Enact))
    }

    pub(crate) fn exit_enact<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
    ) -> EngineResult<Transition> {
        let president = self.current_president()?.clone();
        let chancellor = self.chancellor.clone().ok_or(StateError::NoNominee)?;
        let mut log = EventLog::new();

        if self.veto == Veto::Requested {
            log.push(GameEvent::ChancellorVetoed {
                president,
                chancellor,
            });
            return Ok(log.finish(Stage::ConfirmVeto));
        }

        let policy = self.deck.pop_top().ok_or(StateError::DeckExhausted)?;
        self.discarded = false;
        debug!(%chancellor, %policy, "policy enacted");

        log.push(GameEvent::PolicyEnacted { chancellor, policy });
        let stage = self.enact(config, policy, rng, &mut log)?;
        Ok(log.finish(stage))
    }

    pub(crate) fn exit_confirm_veto<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
    ) -> EngineResult<Transition> {
        let president = self.current_president()?.clone();
        let chancellor = self.chancellor.clone().ok_or(StateError::NoNominee)?;
        let mut log = EventLog::new();

        match self.veto {
            Veto::Denied => {
                log.push(GameEvent::VetoDenied {
                    president,
                    chancellor,
                });
                Ok(log.finish(Stage::Enact))
            }
            Veto::Accepted => {
                let discarded = self.deck.discard_top(config.chancellor_hand());
                debug!(discarded, "veto accepted");

                log.push(GameEvent::VetoAccepted {
                    president,
                    chancellor,
                });
                let stage = self.advance_election_tracker(config, rng, &mut log)?;
                Ok(log.finish(stage))
            }
            Veto::Unused | Veto::Requested => Err(StateError::NoVetoAnswer.into()),
        }
    }
}
