//! Progression shared by several exit procedures: the election tracker,
//! chaos, the outcome of an enactment and the hand-over of the presidency.
//!
//! Every helper returns the stage the game moves to, and the calling exit
//! procedure passes it to `EventLog::finish`.

use tracing::debug;

use crate::core::{EngineResult, Player, RulesConfig, ShuffleSource, StateError};
use crate::deck::Policy;
use crate::events::{EventLog, GameEvent};
use crate::rules::{self, ExecutiveAction, Stage, Team, Verdict};

use super::state::{GameState, Government, Veto};

impl GameState {
    /// A government failed: move the tracker, and cause chaos at the limit.
    pub(crate) fn advance_election_tracker<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
        log: &mut EventLog,
    ) -> EngineResult<Stage> {
        self.failed_votes += 1;
        log.push(GameEvent::ElectionTrackerAdvanced {
            failed_votes: self.failed_votes,
        });

        if self.failed_votes >= config.election_tracker_limit {
            self.chaos(config, rng, log)
        } else {
            self.next_president(None, log)
        }
    }

    /// Enact the top policy without a government.
    fn chaos<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
        log: &mut EventLog,
    ) -> EngineResult<Stage> {
        self.failed_votes = 0;

        if self.deck.ensure_drawable(config.president_hand, rng) {
            debug!(draw = self.deck.draw_len(), "policy deck reshuffled");
        }
        let policy = self.deck.pop_top().ok_or(StateError::DeckExhausted)?;
        debug!(%policy, "chaos");

        log.push(GameEvent::ChaosEnacted { policy });
        self.enact(config, policy, rng, log)
    }

    /// Put `policy` on the board and decide what follows.
    pub(crate) fn enact<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        policy: Policy,
        rng: &mut R,
        log: &mut EventLog,
    ) -> EngineResult<Stage> {
        match policy {
            Policy::Liberal => self.liberal_enacted += 1,
            Policy::Fascist => self.fascist_enacted += 1,
        }

        let verdict = rules::after_enactment(
            config,
            policy,
            self.liberal_enacted,
            self.fascist_enacted,
            self.total_player_count(),
        );

        match verdict {
            Verdict::Win(Team::Liberals) => {
                log.push(GameEvent::LiberalsWin);
                Ok(Stage::Lobby)
            }
            Verdict::Win(Team::Fascists) => {
                log.push(GameEvent::FascistsWin);
                Ok(Stage::Lobby)
            }
            Verdict::Executive(action) => {
                if action == ExecutiveAction::Peek {
                    self.deck.ensure_drawable(config.president_hand, rng);
                }
                let president = self.current_president()?.clone();
                debug!(%president, %action, "executive action granted");
                log.push(GameEvent::ExecutiveActionGranted { president, action });
                Ok(action.stage())
            }
            Verdict::NextPresident => self.next_president(None, log),
        }
    }

    /// Hand the presidency on, to `specially_elected` or to the next seat.
    ///
    /// The outgoing president and chancellor become term-limited.
    pub(crate) fn next_president(
        &mut self,
        specially_elected: Option<Player>,
        log: &mut EventLog,
    ) -> EngineResult<Stage> {
        let new = match specially_elected {
            Some(player) => player,
            None => self
                .turn_order
                .advance()
                .cloned()
                .ok_or(StateError::EmptyTable)?,
        };
        let former = self.president.replace(new.clone());
        self.former = Government {
            president: former.clone(),
            chancellor: self.chancellor.take(),
        };

        self.votes.clear();
        self.discarded = false;
        self.veto = Veto::Unused;

        log.push(GameEvent::PresidentChanged { former, new });
        Ok(Stage::NominateChancellor)
    }
}
