//! Property tests for match invariants
//!
//! Random boards, rosters and seeds; every turn is checked against the
//! game rules using the state before and after the turn.

use last_player_core_rs::{Match, MatchConfig, MatchError, MatchSnapshot, REENTRY_COOLDOWN_TURNS};
use proptest::prelude::*;

fn setup(config: MatchConfig) -> Match {
    let mut game = Match::new(config).unwrap();
    for index in 0..game.num_players() {
        // Crowded boards may not fit everyone with spacing
        match game.place_randomly(index, true) {
            Ok(_) => {}
            Err(MatchError::PlacementExhausted { .. }) => {
                game.place_randomly(index, false).unwrap();
            }
            Err(err) => panic!("unexpected placement error: {}", err),
        }
    }
    game
}

fn match_config() -> impl Strategy<Value = MatchConfig> {
    (3_u32..30, 3_u32..30, 1_usize..8, 0.0_f64..4.0, any::<u64>()).prop_map(
        |(board_width, board_height, num_players, safety_distance, rng_seed)| MatchConfig {
            board_width,
            board_height,
            num_players,
            safety_distance,
            max_search_attempts: 1_000,
            rng_seed,
            ..MatchConfig::default()
        },
    )
}

fn check_turn(before: &MatchSnapshot, after: &MatchSnapshot, played_turn: usize) {
    assert_eq!(after.turn_number, before.turn_number + 1);

    for (old, new) in before.players.iter().zip(&after.players) {
        assert_eq!(old.id, new.id, "roster order changed");
        assert!(new.minor_violations <= 1);
        assert!(new.major_violations >= old.major_violations);
        assert!(new.major_violations <= old.major_violations + 1);

        if let Some(p) = new.position {
            assert!(p.x >= 0.0 && p.x <= f64::from(after.board_width - 1));
            assert!(p.y >= 0.0 && p.y <= f64::from(after.board_height - 1));
        }

        let ejected = old.position.is_some() && new.position.is_none();
        let escalated = new.major_violations > old.major_violations;
        assert_eq!(ejected, escalated, "player {} left without escalation", new.id);
        if escalated {
            assert_eq!(new.ejected_at_turn, Some(played_turn));
        }

        let returned = old.position.is_none() && new.position.is_some();
        if returned {
            assert!(new.contender, "eliminated player {} came back", new.id);
            if let Some(ejected_at) = new.ejected_at_turn {
                assert!(played_turn >= ejected_at + REENTRY_COOLDOWN_TURNS);
            }
        }
    }

    let contenders = after.players.iter().filter(|p| p.contender).count();
    assert_eq!(after.winner.is_some(), contenders == 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_turns_respect_game_rules(config in match_config(), turns in 1_usize..80) {
        let mut game = setup(config);

        for _ in 0..turns {
            let before = game.snapshot();
            let result = game.advance_turn().unwrap();
            let after = game.snapshot();

            prop_assert_eq!(result.turn, before.turn_number);
            prop_assert_eq!(result.status, after.status);
            check_turn(&before, &after, result.turn);
        }
    }

    #[test]
    fn prop_same_seed_same_match(config in match_config(), turns in 1_usize..40) {
        let mut game_a = setup(config.clone());
        let mut game_b = setup(config);

        for _ in 0..turns {
            game_a.advance_turn().unwrap();
            game_b.advance_turn().unwrap();
        }

        prop_assert_eq!(game_a.snapshot(), game_b.snapshot());
        prop_assert_eq!(game_a.event_log().events(), game_b.event_log().events());
    }
}
