//! Executive actions: peek, investigate, kill and special election.

use tracing::{debug, trace};

use crate::core::{ActionError, EngineResult, Player, Role, ShuffleSource, StateError};
use crate::deck::Hand;
use crate::events::{EventLog, GameEvent, Transition};
use crate::rules::Stage;

use super::engine::Game;
use super::state::GameState;

impl<R: ShuffleSource> Game<R> {
    /// The next three policies, top last. The deck is left untouched.
    pub fn president_peeks(&self) -> EngineResult<Hand> {
        self.state.ensure_stage(Stage::ActionPeek)?;
        Ok(self.state.deck.top(self.config.president_hand))
    }

    /// Reveal `target`'s role to the president.
    ///
    /// Dead players can be investigated too. Calling again replaces the
    /// target; the last one is recorded on `advance`.
    pub fn president_investigates(&mut self, target: &Player) -> EngineResult<Role> {
        self.state.ensure_stage(Stage::ActionInvestigate)?;
        if self.state.is_president(target) {
            return Err(ActionError::TargetIsPresident.into());
        }
        let target = self.state.seated(target)?;
        let role = target
            .role()
            .ok_or_else(|| ActionError::RoleUnassigned(target.name().to_string()))?;

        trace!(%target, "investigation");
        self.state.pending_investigation = Some(target);
        Ok(role)
    }

    /// Choose who the president executes.
    pub fn president_kills(&mut self, target: &Player) -> EngineResult<()> {
        self.state.ensure_stage(Stage::ActionKill)?;
        let target = self.state.alive_target(target)?;

        trace!(%target, "kill target chosen");
        self.state.kill_target = Some(target);
        Ok(())
    }

    /// Choose the next president.
    pub fn president_chooses_next_president(&mut self, target: &Player) -> EngineResult<()> {
        self.state.ensure_stage(Stage::ActionSpecialElection)?;
        let target = self.state.alive_target(target)?;

        trace!(%target, "special election");
        self.state.special_election = Some(target);
        Ok(())
    }
}

impl GameState {
    pub(crate) fn exit_action_peek(&mut self) -> EngineResult<Transition> {
        let president = self.current_president()?.clone();

        let mut log = EventLog::new();
        log.push(GameEvent::PresidentPeeked { president });
        let stage = self.next_president(None, &mut log)?;
        Ok(log.finish(stage))
    }

    pub(crate) fn exit_action_investigate(&mut self) -> EngineResult<Transition> {
        let investigated = self
            .pending_investigation
            .take()
            .ok_or(StateError::NoInvestigation)?;
        let president = self.current_president()?.clone();
        self.investigated.push_back(investigated.clone());

        let mut log = EventLog::new();
        log.push(GameEvent::PresidentInvestigated {
            president,
            investigated,
        });
        let stage = self.next_president(None, &mut log)?;
        Ok(log.finish(stage))
    }

    /// Remove the target from the table for good.
    ///
    /// The rotation is re-anchored on the president so it carries on from
    /// their seat.
    pub(crate) fn exit_action_kill(&mut self) -> EngineResult<Transition> {
        let target = self.kill_target.take().ok_or(StateError::NoKillTarget)?;
        let president = self.current_president()?.clone();

        let killed = self
            .turn_order
            .remove(&target, &president)
            .ok_or_else(|| ActionError::NotAlive(target.name().to_string()))?;
        debug!(%president, %killed, "player killed");
        self.dead.push_back(killed.clone());

        let mut log = EventLog::new();
        log.push(GameEvent::PresidentKilled { president, killed });
        let stage = self.next_president(None, &mut log)?;
        Ok(log.finish(stage))
    }

    /// Install the chosen president. The rotation cursor stays put, so the
    /// regular order resumes after the special presidency.
    pub(crate) fn exit_action_special_election(&mut self) -> EngineResult<Transition> {
        let next = self
            .special_election
            .take()
            .ok_or(StateError::NoSpecialElection)?;

        let mut log = EventLog::new();
        let stage = self.next_president(Some(next), &mut log)?;
        Ok(log.finish(stage))
    }
}
