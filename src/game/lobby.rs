//! Lobby: joining, leaving and starting the game.

use tracing::{debug, info};

use crate::core::{ActionError, EngineResult, Player, RulesConfig, ShuffleSource, StateError};
use crate::deck::PolicyDeck;
use crate::events::{EventLog, GameEvent, Transition};
use crate::roster::{self, TurnOrder, MAX_PLAYERS};
use crate::rules::Stage;

use super::engine::Game;
use super::state::GameState;

impl<R: ShuffleSource> Game<R> {
    /// Register a player for the next game.
    ///
    /// Any role carried by `player` is dropped; roles are dealt at start.
    pub fn add_player(&mut self, mut player: Player) -> EngineResult<()> {
        self.state.ensure_stage(Stage::Lobby)?;

        if self.state.turn_order.len() >= MAX_PLAYERS {
            return Err(ActionError::TableFull { max: MAX_PLAYERS }.into());
        }
        if self.state.turn_order.contains(&player) {
            return Err(ActionError::AlreadyJoined(player.name().to_string()).into());
        }

        player.clear_role();
        debug!(%player, "player joined");
        self.state.turn_order.seat(player);
        Ok(())
    }

    /// Unregister a player.
    pub fn remove_player(&mut self, player: &Player) -> EngineResult<()> {
        self.state.ensure_stage(Stage::Lobby)?;

        let seats: Vec<Player> = self
            .state
            .turn_order
            .seats()
            .filter(|p| *p != player)
            .cloned()
            .collect();
        if seats.len() == self.state.turn_order.len() {
            return Err(ActionError::NotInLobby(player.name().to_string()).into());
        }

        debug!(%player, "player left");
        self.state.turn_order.reseat(seats);
        Ok(())
    }

    /// Whether the lobby holds a playable number of players.
    #[must_use]
    pub fn can_game_start(&self) -> bool {
        roster::is_supported(self.state.turn_order.len())
    }

    /// Whether `player` takes part in this game, alive or dead, or is
    /// registered in the lobby.
    #[must_use]
    pub fn is_registered_player(&self, player: &Player) -> bool {
        self.state.turn_order.contains(player) || self.state.dead.contains(player)
    }
}

impl GameState {
    /// Deal roles, seat the table, pick the first president and shuffle the
    /// deck.
    pub(crate) fn exit_lobby<R: ShuffleSource>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
    ) -> EngineResult<Transition> {
        let count = self.turn_order.len();
        let liberals = roster::liberal_count(count).ok_or(StateError::UnsupportedPlayerCount(count))?;

        let mut players: Vec<Player> = self.turn_order.seats().cloned().collect();
        roster::deal_roles(&mut players, liberals, rng);
        rng.shuffle(&mut players);

        let president = players
            .get(rng.pick_index(count))
            .cloned()
            .ok_or(StateError::EmptyTable)?;

        self.turn_order = TurnOrder::anchored(players, &president);
        self.deck = PolicyDeck::fresh(config, rng);
        info!(players = count, %president, "game started");

        let mut log = EventLog::new();
        log.push(GameEvent::GameStarted);
        for player in self.turn_order.seats() {
            log.push(GameEvent::RoleAssigned {
                player: player.clone(),
            });
        }
        log.push(GameEvent::PresidentChanged {
            former: None,
            new: president.clone(),
        });
        self.president = Some(president);

        Ok(log.finish(Stage::NominateChancellor))
    }
}
