//! Event accumulation for one exit procedure.

use serde::{Deserialize, Serialize};

use crate::rules::Stage;

use super::event::GameEvent;

/// The result of one `Game::advance`: what happened, and where the game is
/// now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub events: Vec<GameEvent>,
    pub stage: Stage,
}

impl Transition {
    /// Whether any of the events ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.events.iter().any(GameEvent::is_win)
    }
}

/// Ordered events of an exit procedure that has not finished yet.
///
/// `finish` consumes the log, so every exit path names exactly one next
/// stage.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        tracing::trace!(%event, "event");
        self.events.push(event);
    }

    pub(crate) fn finish(self, stage: Stage) -> Transition {
        Transition {
            events: self.events,
            stage,
        }
    }
}
