//! Executive actions: the power table, peek, investigate, kill and special
//! election.

mod common;

use common::{build, elect, five, legislate, nine, player, reject, seven, Unshuffled};
use hitler_engine::{
    ActionError, ExecutiveAction, Game, GameEvent, Policy, Role, Stage, StateError, TableBuilder,
};

use Policy::{Fascist, Liberal};

/// Put a table in `Enact` with `fascist_before` fascist policies on the
/// board and two fascist cards in the chancellor's hand, then enact one.
fn grant(builder: TableBuilder, fascist_before: usize, below: &[Policy]) -> (Game<Unshuffled>, Vec<GameEvent>) {
    let mut top = below.to_vec();
    top.extend([Fascist, Fascist]);
    let mut game = build(
        builder
            .chancellor("bob")
            .policies(0, fascist_before)
            .stack_deck(&top)
            .stage(Stage::Enact),
    );
    game.chancellor_discards(Fascist).unwrap();
    let events = game.advance(Some(Stage::Enact)).unwrap().events;
    (game, events)
}

fn granted_power(events: &[GameEvent]) -> Option<ExecutiveAction> {
    events.iter().find_map(|event| match event {
        GameEvent::ExecutiveActionGranted { action, .. } => Some(*action),
        _ => None,
    })
}

/// Test the power granted by each fascist policy on each table size.
#[test]
fn test_power_table() {
    use ExecutiveAction::{Investigate, Kill, Peek, SpecialElection};

    let expected = [
        (five(), [None, None, Some(Peek), Some(Kill), Some(Kill)]),
        (
            seven(),
            [None, Some(Investigate), Some(SpecialElection), Some(Kill), Some(Kill)],
        ),
        (
            nine(),
            [
                Some(Investigate),
                Some(Investigate),
                Some(SpecialElection),
                Some(Kill),
                Some(Kill),
            ],
        ),
    ];

    for (builder, row) in expected {
        for (before, power) in row.into_iter().enumerate() {
            let (game, events) = grant(builder.clone(), before, &[]);
            assert_eq!(granted_power(&events), power, "fascist policy {}", before + 1);
            let stage = power.map_or(Stage::NominateChancellor, ExecutiveAction::stage);
            assert_eq!(game.stage(), stage);
        }
    }
}

/// Test the event that grants a power.
#[test]
fn test_grant_event() {
    let (_, events) = grant(five(), 2, &[]);
    assert_eq!(
        events,
        vec![
            GameEvent::PolicyEnacted {
                chancellor: player("bob"),
                policy: Fascist
            },
            GameEvent::ExecutiveActionGranted {
                president: player("ada"),
                action: ExecutiveAction::Peek
            },
        ]
    );
}

/// Test that the peeked cards are the next president's hand.
#[test]
fn test_peek_shows_next_hand() {
    let (mut game, _) = grant(five(), 2, &[Fascist, Liberal, Liberal]);
    assert_eq!(game.stage(), Stage::ActionPeek);

    let peeked = game.president_peeks().unwrap();
    assert_eq!(peeked.as_slice(), &[Fascist, Liberal, Liberal]);
    let draw = game.draw_pile_len();

    let result = game.advance(Some(Stage::ActionPeek)).unwrap();
    assert_eq!(
        result.events,
        vec![
            GameEvent::PresidentPeeked {
                president: player("ada")
            },
            GameEvent::PresidentChanged {
                former: Some(player("ada")),
                new: player("bob")
            },
        ]
    );
    assert_eq!(game.draw_pile_len(), draw);

    elect(&mut game, "cy");
    assert_eq!(game.president_hand().unwrap(), peeked);
}

/// Test that a peek granted on a short draw pile reshuffles first, so the
/// peeked cards are still the next president's hand.
#[test]
fn test_peek_on_short_draw_pile() {
    let discarded: Vec<Policy> = std::iter::repeat(Fascist)
        .take(7)
        .chain(std::iter::repeat(Liberal).take(6))
        .collect();
    let (mut game, events) = grant(five().discard(&discarded), 2, &[]);

    assert_eq!(granted_power(&events), Some(ExecutiveAction::Peek));
    assert_eq!(game.draw_pile_len(), 14);
    assert_eq!(game.discard_pile_len(), 0);

    let peeked = game.president_peeks().unwrap();
    assert_eq!(peeked.as_slice(), &[Liberal, Liberal, Fascist]);
    assert_eq!(game.president_peeks().unwrap(), peeked);

    game.advance(Some(Stage::ActionPeek)).unwrap();
    elect(&mut game, "cy");
    assert_eq!(game.president_hand().unwrap(), peeked);
    assert_eq!(game.draw_pile_len(), 14);
}

/// Test that peeking is only possible while the power is active.
#[test]
fn test_peek_outside_power() {
    let game = build(five());
    assert!(game.president_peeks().unwrap_err().is_illegal_state());
}

/// Test investigating an alive player.
#[test]
fn test_investigate() {
    let (mut game, _) = grant(seven(), 1, &[]);
    assert_eq!(game.stage(), Stage::ActionInvestigate);

    assert_eq!(game.president_investigates(&player("gus")).unwrap(), Role::Hitler);
    assert_eq!(game.president_investigates(&player("cy")).unwrap(), Role::Liberal);
    assert_eq!(
        game.president_investigates(&player("ada")).unwrap_err(),
        ActionError::TargetIsPresident.into()
    );

    let result = game.advance(Some(Stage::ActionInvestigate)).unwrap();
    assert_eq!(
        result.events[0],
        GameEvent::PresidentInvestigated {
            president: player("ada"),
            investigated: player("cy")
        }
    );
    let investigated: Vec<&str> = game.investigated_players().map(|p| p.name()).collect();
    assert_eq!(investigated, vec!["cy"]);
}

/// Test that the dead can be investigated but strangers cannot.
#[test]
fn test_investigate_dead() {
    let mut players = common::seated(9, 3);
    let dead = players.remove(2);
    let builder = TableBuilder::new(players).dead(vec![dead]).president("ada");
    let (mut game, _) = grant(builder, 0, &[]);
    assert_eq!(game.stage(), Stage::ActionInvestigate);

    assert_eq!(game.president_investigates(&player("cy")).unwrap(), Role::Liberal);
    assert_eq!(
        game.president_investigates(&player("zed")).unwrap_err(),
        ActionError::UnknownPlayer("zed".into()).into()
    );
}

/// Test that the investigation must happen before the advance.
#[test]
fn test_investigate_required() {
    let (mut game, _) = grant(nine(), 0, &[]);
    assert_eq!(
        game.advance(None).unwrap_err(),
        StateError::NoInvestigation.into()
    );
    assert_eq!(game.stage(), Stage::ActionInvestigate);
}

/// Test that a killed player leaves the rotation for good.
#[test]
fn test_kill_removes_player() {
    let (mut game, _) = grant(five(), 3, &[]);
    assert_eq!(game.stage(), Stage::ActionKill);

    assert_eq!(
        game.president_kills(&player("ada")).unwrap_err(),
        ActionError::TargetIsPresident.into()
    );
    assert_eq!(game.advance(None).unwrap_err(), StateError::NoKillTarget.into());

    game.president_kills(&player("cy")).unwrap();
    let result = game.advance(Some(Stage::ActionKill)).unwrap();

    assert_eq!(
        result.events,
        vec![
            GameEvent::PresidentKilled {
                president: player("ada"),
                killed: player("cy")
            },
            GameEvent::PresidentChanged {
                former: Some(player("ada")),
                new: player("bob")
            },
        ]
    );
    assert_eq!(game.alive_count(), 4);
    assert_eq!(game.dead_count(), 1);
    assert_eq!(game.total_player_count(), 5);
    assert!(game.is_registered_player(&player("cy")));

    assert_eq!(
        game.nominate_chancellor(&player("cy")).unwrap_err(),
        ActionError::NotAlive("cy".into()).into()
    );

    reject(&mut game, "dee");
    assert_eq!(game.president(), Some(&player("dee")));
    reject(&mut game, "eve");
    assert_eq!(game.president(), Some(&player("eve")));
}

/// Test that the dead cannot be killed twice.
#[test]
fn test_kill_dead_player() {
    let mut players = common::seated(6, 1);
    let dead = players.remove(2);
    let builder = TableBuilder::new(players).dead(vec![dead]).president("ada");
    let (mut game, _) = grant(builder, 3, &[]);

    assert_eq!(
        game.president_kills(&player("cy")).unwrap_err(),
        ActionError::NotAlive("cy".into()).into()
    );
}

/// Test that killing Hitler does not end the game.
#[test]
fn test_killing_hitler_is_not_a_win() {
    let (mut game, _) = grant(five(), 3, &[]);
    game.president_kills(&player("eve")).unwrap();
    let result = game.advance(None).unwrap();

    assert!(!result.is_game_over());
    assert_eq!(result.stage, Stage::NominateChancellor);
    assert_eq!(game.alive_count(), 4);
}

/// Test that a dead player's seat no longer counts towards the election.
#[test]
fn test_dead_do_not_vote() {
    let (mut game, _) = grant(five(), 3, &[]);
    game.president_kills(&player("dee")).unwrap();
    game.advance(None).unwrap();

    game.nominate_chancellor(&player("cy")).unwrap();
    game.advance(None).unwrap();
    for name in ["ada", "bob", "cy", "eve"] {
        game.record_vote(&player(name), true).unwrap();
    }
    assert!(game.is_election_complete());
    assert_eq!(game.advance(None).unwrap().stage, Stage::Legislate);
}

/// Test that a special election skips the rotation once.
#[test]
fn test_special_election() {
    let (mut game, _) = grant(seven(), 2, &[]);
    assert_eq!(game.stage(), Stage::ActionSpecialElection);

    assert_eq!(
        game.president_chooses_next_president(&player("ada")).unwrap_err(),
        ActionError::TargetIsPresident.into()
    );
    assert_eq!(
        game.advance(None).unwrap_err(),
        StateError::NoSpecialElection.into()
    );

    game.president_chooses_next_president(&player("eve")).unwrap();
    let result = game.advance(Some(Stage::ActionSpecialElection)).unwrap();
    assert_eq!(
        result.events,
        vec![GameEvent::PresidentChanged {
            former: Some(player("ada")),
            new: player("eve")
        }]
    );
    assert_eq!(game.president(), Some(&player("eve")));

    reject(&mut game, "cy");
    assert_eq!(game.president(), Some(&player("bob")));
}

/// Test that setters of one power are refused during another.
#[test]
fn test_power_setters_are_stage_guarded() {
    let (mut game, _) = grant(seven(), 1, &[]);
    assert_eq!(game.stage(), Stage::ActionInvestigate);

    assert!(game.president_kills(&player("cy")).unwrap_err().is_illegal_state());
    assert!(game
        .president_chooses_next_president(&player("cy"))
        .unwrap_err()
        .is_illegal_state());
    assert!(game.president_peeks().unwrap_err().is_illegal_state());
}

/// Test that chaos can grant a power too.
#[test]
fn test_chaos_grants_power() {
    let mut game = build(five().policies(0, 2).election_tracker(2).stack_deck(&[Fascist]));
    let result = reject(&mut game, "bob");

    assert_eq!(
        &result.events[2..],
        &[
            GameEvent::ChaosEnacted { policy: Fascist },
            GameEvent::ExecutiveActionGranted {
                president: player("ada"),
                action: ExecutiveAction::Peek
            },
        ]
    );
    assert_eq!(game.stage(), Stage::ActionPeek);
}

/// Test a power after a full legislative session.
#[test]
fn test_power_after_session() {
    let mut game = build(five().policies(0, 3).stack_deck(&[Liberal, Fascist, Fascist]));
    elect(&mut game, "bob");
    let result = legislate(&mut game, Liberal, Fascist);

    assert_eq!(
        result.events[1],
        GameEvent::ExecutiveActionGranted {
            president: player("ada"),
            action: ExecutiveAction::Kill
        }
    );
}
