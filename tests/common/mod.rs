//! Shared helpers for the integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use hitler_engine::{
    Game, GameRng, Player, Policy, Role, ShuffleSource, Stage, TableBuilder, Transition,
};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A randomness source that never reorders anything and always picks the
/// first seat, so stacked decks and seating stay exactly as built.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unshuffled;

impl ShuffleSource for Unshuffled {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

pub const NAMES: [&str; 10] = [
    "ada", "bob", "cy", "dee", "eve", "fay", "gus", "hal", "ivy", "jo",
];

/// Unregistered players for a lobby.
pub fn lobby_players(count: usize) -> Vec<Player> {
    NAMES.iter().take(count).map(|name| Player::new(*name)).collect()
}

/// A lobby holding `count` players.
pub fn lobby(count: usize, seed: u64) -> Game {
    init_logging();
    let mut game = Game::new(seed);
    for player in lobby_players(count) {
        game.add_player(player).unwrap();
    }
    game
}

/// A seated table of `count` players: the last one is Hitler, the next
/// `fascists` before them are fascists, everyone else is liberal.
pub fn seated(count: usize, fascists: usize) -> Vec<Player> {
    NAMES
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, name)| {
            let role = if i == count - 1 {
                Role::Hitler
            } else if i >= count - 1 - fascists {
                Role::Fascist
            } else {
                Role::Liberal
            };
            Player::new(*name).with_role(role)
        })
        .collect()
}

/// The standard five seat table: ada, bob, cy liberal, dee fascist, eve
/// Hitler. Ada is president.
pub fn five() -> TableBuilder {
    init_logging();
    TableBuilder::new(seated(5, 1)).president("ada")
}

pub fn seven() -> TableBuilder {
    init_logging();
    TableBuilder::new(seated(7, 2)).president("ada")
}

pub fn nine() -> TableBuilder {
    init_logging();
    TableBuilder::new(seated(9, 3)).president("ada")
}

pub fn build(builder: TableBuilder) -> Game<Unshuffled> {
    builder.build_with(Unshuffled).unwrap()
}

pub fn player(name: &str) -> Player {
    Player::new(name)
}

/// Every alive player votes; the first `yes` in seating order vote yes.
pub fn vote<R: ShuffleSource>(game: &mut Game<R>, yes: usize) {
    let voters: Vec<Player> = game.players().cloned().collect();
    for (i, voter) in voters.iter().enumerate() {
        game.record_vote(voter, i < yes).unwrap();
    }
}

/// Nominate `candidate` and run the election with `yes` votes in favour.
pub fn election<R: ShuffleSource>(game: &mut Game<R>, candidate: &str, yes: usize) -> Transition {
    game.nominate_chancellor(&player(candidate)).unwrap();
    game.advance(Some(Stage::NominateChancellor)).unwrap();
    vote(game, yes);
    game.advance(Some(Stage::ChancellorElection)).unwrap()
}

/// Elect `candidate` unanimously.
pub fn elect<R: ShuffleSource>(game: &mut Game<R>, candidate: &str) -> Transition {
    let yes = game.alive_count();
    election(game, candidate, yes)
}

/// Reject `candidate` unanimously.
pub fn reject<R: ShuffleSource>(game: &mut Game<R>, candidate: &str) -> Transition {
    election(game, candidate, 0)
}

/// Run a legislative session where the president and chancellor discard
/// the given policies.
pub fn legislate<R: ShuffleSource>(
    game: &mut Game<R>,
    president_discard: Policy,
    chancellor_discard: Policy,
) -> Transition {
    game.president_discards(president_discard).unwrap();
    game.advance(Some(Stage::Legislate)).unwrap();
    game.chancellor_discards(chancellor_discard).unwrap();
    game.advance(Some(Stage::Enact)).unwrap()
}

/// Outcome of a randomly played game.
#[derive(Debug)]
pub struct RandomRun {
    pub transitions: Vec<Transition>,
    /// True if a president had nobody left to nominate.
    pub stalled: bool,
}

/// Play random legal moves until the game ends, calling `check` after
/// every successful advance.
pub fn play_random(
    game: &mut Game,
    rng: &mut GameRng,
    max_steps: usize,
    mut check: impl FnMut(&Game, &Transition),
) -> RandomRun {
    let mut transitions = Vec::new();

    for _ in 0..max_steps {
        let stage = game.stage();
        match stage {
            Stage::Lobby => break,
            Stage::NominateChancellor => {
                let mut candidates: Vec<Player> = game.players().cloned().collect();
                rng.shuffle(&mut candidates);
                let nominated = candidates
                    .iter()
                    .any(|candidate| game.nominate_chancellor(candidate).is_ok());
                if !nominated {
                    return RandomRun {
                        transitions,
                        stalled: true,
                    };
                }
            }
            Stage::ChancellorElection => {
                let voters: Vec<Player> = game.players().cloned().collect();
                for voter in &voters {
                    let yes = rng.gen_bool(0.6);
                    game.record_vote(voter, yes).unwrap();
                }
            }
            Stage::Legislate => {
                let hand = game.president_hand().unwrap();
                let policy = hand[rng.gen_range_usize(0..hand.len())];
                game.president_discards(policy).unwrap();
            }
            Stage::Enact => {
                let vetoed = rng.gen_bool(0.3) && game.chancellor_vetoes().is_ok();
                if !vetoed {
                    let hand = game.chancellor_hand().unwrap();
                    let policy = hand[rng.gen_range_usize(0..hand.len())];
                    game.chancellor_discards(policy).unwrap();
                }
            }
            Stage::ConfirmVeto => {
                let accept = rng.gen_bool(0.5);
                game.president_answers_to_veto(accept).unwrap();
            }
            Stage::ActionPeek => {
                assert_eq!(game.president_peeks().unwrap().len(), 3);
            }
            Stage::ActionInvestigate => {
                let targets = others(game, true);
                let target = rng.choose(&targets).unwrap();
                game.president_investigates(target).unwrap();
            }
            Stage::ActionKill => {
                let targets = others(game, false);
                let target = rng.choose(&targets).unwrap();
                game.president_kills(target).unwrap();
            }
            Stage::ActionSpecialElection => {
                let targets = others(game, false);
                let target = rng.choose(&targets).unwrap();
                game.president_chooses_next_president(target).unwrap();
            }
        }

        let transition = game.advance(Some(stage)).unwrap();
        check(game, &transition);
        transitions.push(transition);
    }

    RandomRun {
        transitions,
        stalled: false,
    }
}

/// Everyone but the president, optionally including the dead.
fn others(game: &Game, with_dead: bool) -> Vec<Player> {
    let president = game.president().cloned();
    let dead: Vec<Player> = if with_dead {
        game.dead_players().cloned().collect()
    } else {
        Vec::new()
    };
    game.players()
        .cloned()
        .chain(dead)
        .filter(|p| Some(p) != president.as_ref())
        .collect()
}
