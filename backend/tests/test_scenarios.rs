//! End-to-end match scenarios
//!
//! Each scenario pins down one rule of the game: overlap penalties on a
//! single-cell board, the lone-player win, the ejection cooldown and
//! permanent elimination.

use last_player_core_rs::{
    Event, Match, MatchConfig, MatchStatus, PenaltyRecord, Player, Position, RefusalReason,
};

fn config(width: u32, height: u32, num_players: usize, safety_distance: f64) -> MatchConfig {
    MatchConfig {
        board_width: width,
        board_height: height,
        num_players,
        safety_distance,
        ..MatchConfig::default()
    }
}

#[test]
fn test_scenario_a_overlapping_players_on_single_cell() {
    let mut game = Match::new(config(1, 1, 2, 0.0)).unwrap();
    let origin = Position::new(0.0, 0.0);
    assert_eq!(game.place_randomly(0, false).unwrap(), origin);
    assert_eq!(game.place_randomly(1, false).unwrap(), origin);

    // First overlap turn: both warned, nobody ejected
    let first = game.advance_turn().unwrap();
    assert_eq!(first.violations, 2);
    assert_eq!(first.ejections, 0);
    for record in game.roster() {
        assert_eq!(record.player().position(), Some(origin));
        assert_eq!(record.penalty().minor_violations(), 1);
        assert_eq!(record.penalty().major_violations(), 0);
    }

    // Second overlap turn: the first mover is ejected, the second is then alone
    let second = game.advance_turn().unwrap();
    assert_eq!(second.ejections, 1);

    let first_player = game.record(0).unwrap();
    assert_eq!(first_player.player().position(), None);
    assert_eq!(first_player.penalty().major_violations(), 1);
    assert_eq!(first_player.penalty().ejected_at_turn(), Some(1));

    let second_player = game.record(1).unwrap();
    assert_eq!(second_player.player().position(), Some(origin));
    assert_eq!(second_player.penalty().minor_violations(), 1);
    assert_eq!(second_player.penalty().major_violations(), 0);

    assert_eq!(second.status, MatchStatus::InProgress { contenders: 2 });
}

#[test]
fn test_scenario_b_lone_player() {
    let mut game = Match::new(config(7, 3, 1, 2.0)).unwrap();
    let position = game.place_randomly(0, true).unwrap();

    assert_eq!(game.count_near(position), 1);
    assert_eq!(game.winner().map(|p| p.id()), Some("0"));
    assert_eq!(game.status(), MatchStatus::Won { index: 0 });

    let result = game.advance_turn().unwrap();
    assert_eq!(result.violations, 0);
    assert_eq!(result.status, MatchStatus::Won { index: 0 });
}

#[test]
fn test_scenario_c_cooldown_after_ejection_at_turn_5() {
    let mut game = Match::new(config(100, 100, 2, 3.0)).unwrap();
    *game.roster_mut()[0].player_mut() = Player::new("0", 1.0, 10.0);
    *game.roster_mut()[1].player_mut() = Player::new("1", 1.0, 10.0);
    game.roster_mut()[0]
        .player_mut()
        .commit(Some(Position::new(50.0, 50.0)));
    game.roster_mut()[1]
        .player_mut()
        .commit(Some(Position::new(10.0, 10.0)));

    // Far apart: five quiet turns
    for _ in 0..5 {
        let result = game.advance_turn().unwrap();
        assert_eq!(result.violations, 0);
    }
    assert_eq!(game.turn_number(), 5);

    // Arm player 0 with a warning and drop player 1 on top of it
    *game.roster_mut()[0].penalty_mut() = PenaltyRecord::from_parts(1, 0, None);
    let spot = game.record(0).unwrap().player().position().unwrap();
    game.roster_mut()[1].player_mut().commit(Some(spot));

    let result = game.advance_turn().unwrap();
    assert_eq!(result.ejections, 1);
    assert_eq!(game.record(0).unwrap().penalty().ejected_at_turn(), Some(5));
    assert_eq!(game.record(0).unwrap().player().position(), None);

    // Turns 6 through 14: always asks to come back, always refused
    while game.turn_number() < 15 {
        let turn = game.turn_number();
        let result = game.advance_turn().unwrap();
        assert_eq!(result.re_entries, 0, "re-entered at turn {}", turn);
        assert!(game.record(0).unwrap().player().position().is_none());
    }

    let refusals = game.event_log().events_of_type("ReEntryRefused");
    assert_eq!(refusals.len(), 9);
    assert_eq!(
        refusals[0],
        &Event::ReEntryRefused {
            turn: 6,
            player_id: "0".to_string(),
            reason: RefusalReason::CoolingDown { turns_remaining: 9 },
        }
    );

    // Turn 15: cooldown over
    let result = game.advance_turn().unwrap();
    assert_eq!(result.turn, 15);
    assert_eq!(result.re_entries, 1);
    assert!(game.record(0).unwrap().player().is_placed());

    let reentries = game.event_log().events_of_type("ReEntered");
    assert_eq!(reentries.len(), 1);
    assert_eq!(reentries[0].turn(), 15);
}

#[test]
fn test_scenario_d_twice_ejected_player_is_out() {
    let mut game = Match::new(config(30, 30, 3, 1.0)).unwrap();
    *game.roster_mut()[0].player_mut() = Player::new("0", 1.0, 10.0);
    *game.roster_mut()[0].penalty_mut() = PenaltyRecord::from_parts(0, 2, Some(0));
    game.roster_mut()[1]
        .player_mut()
        .commit(Some(Position::new(5.0, 5.0)));
    game.roster_mut()[2]
        .player_mut()
        .commit(Some(Position::new(25.0, 25.0)));

    // Two contenders remain, so there is no winner yet
    assert!(game.winner().is_none());
    assert_eq!(game.contenders(), 2);

    for _ in 0..40 {
        game.advance_turn().unwrap();
        assert!(game.record(0).unwrap().player().position().is_none());
        assert_ne!(game.winner().map(|p| p.id()), Some("0"));
    }

    // Once player 2 is also out, player 1 wins and player 0 still cannot
    *game.roster_mut()[2].penalty_mut() = PenaltyRecord::from_parts(0, 2, Some(40));
    assert_eq!(game.winner().map(|p| p.id()), Some("1"));
}

#[test]
fn test_off_board_contender_can_win() {
    let mut game = Match::new(config(10, 10, 2, 1.0)).unwrap();
    *game.roster_mut()[0].penalty_mut() = PenaltyRecord::from_parts(0, 1, Some(0));
    *game.roster_mut()[1].penalty_mut() = PenaltyRecord::from_parts(0, 2, Some(0));

    let winner = game.winner().unwrap();
    assert_eq!(winner.id(), "0");
    assert!(!winner.is_placed());
}
