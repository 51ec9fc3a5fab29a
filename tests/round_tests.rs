//! Round advance and match flow.

mod common;

use common::*;
use mahjong_master::core::{GameRng, House, RuleConfig};
use mahjong_master::engine::{MasterEngine, ReactionAnswers, RoundAdvance};
use mahjong_master::view::{checksum, decode, encode};
use mahjong_master::wall::Stacker;
use mahjong_master::MatchState;

fn dealer_tsumo_state(engine: &MasterEngine) -> MatchState {
    let mut state = deal(
        quiet()
            .hand(House::East, &tiles("m1 m2 m3 m4 m5 m6 m7 m8 m9 p2 p3 p4 s5 s5"))
            .indicators(&tiles("n")),
    );
    engine.declare_self_draw_win(&mut state, House::East).unwrap();
    state
}

/// A dealer win keeps the seating and adds a honba.
#[test]
fn test_dealer_win_repeats_kyoku() {
    let engine = MasterEngine::default();
    let state = dealer_tsumo_state(&engine);

    let RoundAdvance::NextKyoku(next) = engine.next_round(&state, &mut GameRng::new(9)).unwrap()
    else {
        panic!("the match continues");
    };
    assert_eq!(next.round_wind(), House::East);
    assert_eq!(next.kyoku(), 1);
    assert_eq!(next.honba(), 1);
    assert_eq!(next.users(), state.users());
    assert_eq!(next.points(House::East), 31_000);
    assert_eq!(next.points(House::South), 23_000);
    assert_eq!(next.turn(), Some(House::East));
    assert_conserved(&next);

    // The ended state itself is untouched.
    assert!(state.is_ended());
}

/// A non-dealer win passes the deal on and resets the honba.
#[test]
fn test_non_dealer_win_rotates_seats() {
    let engine = MasterEngine::default();
    let mut state = deal(
        Stacker::new()
            .hand(House::East, &tiles("m1 m2 m3 p1 p2 p3 s1 s2 s3 e s w n p9"))
            .hand(House::South, &tiles("m7 m9 p1 p9 s1 e e s s w w n n"))
            .hand(House::West, &tiles("m1 m2 m3 m4 m5 m6 p2 p3 p4 s7 s8 chun chun"))
            .hand(House::North, &tiles("p6 p7 p8 s2 s3 s4 hatsu hatsu hatsu s7 s8 haku haku"))
            .indicators(&tiles("p4"))
            .draws(&tiles("s9")),
    );
    engine.discard(&mut state, House::East, tile("p9"), false).unwrap();
    engine.discard(&mut state, House::South, tile("s9"), false).unwrap();
    engine
        .resolve_reactions(&mut state, &ReactionAnswers::ron([House::West]))
        .unwrap();

    let RoundAdvance::NextKyoku(next) = engine.next_round(&state, &mut GameRng::new(9)).unwrap()
    else {
        panic!("the match continues");
    };
    assert_eq!(next.kyoku(), 2);
    assert_eq!(next.honba(), 0);
    // User 2 sat south and deals now, keeping the points they had.
    assert_eq!(next.user_at(House::East), 2);
    assert_eq!(next.points(House::East), 24_000);
    assert_eq!(next.user_at(House::South), 3);
    assert_eq!(next.points(House::South), 26_000);
    assert_eq!(next.house_of_user(1), Some(House::North));
    assert_eq!(point_sum(&next), 100_000);
}

/// An east-only match of exhaustive draws lasts exactly four kyoku.
#[test]
fn test_east_only_match_of_draws() {
    let engine = MasterEngine::new(RuleConfig::default().with_last_round_wind(House::East));
    let mut rng = GameRng::new(2024);
    let mut state = engine.new_match(&mut rng);
    let mut kyoku_played = 0;

    let standings = loop {
        while !state.is_ended() {
            tsumogiri(&engine, &mut state);
        }
        kyoku_played += 1;
        match engine.next_round(&state, &mut rng).unwrap() {
            RoundAdvance::NextKyoku(next) => state = *next,
            RoundAdvance::GameOver(standings) => break standings,
        }
    };

    assert_eq!(kyoku_played, 4);
    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|s| s.points == 25_000));
    assert_eq!(
        standings.iter().map(|s| s.user).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

/// Play resumed from a snapshot matches play on the original.
#[test]
fn test_resume_from_snapshot() {
    let engine = MasterEngine::default();
    let mut state = engine.new_match(&mut GameRng::new(77));
    for _ in 0..10 {
        tsumogiri(&engine, &mut state);
    }

    let mut resumed: MatchState = decode(&encode(&state).unwrap()).unwrap();
    assert_eq!(resumed, state);
    for _ in 0..10 {
        tsumogiri(&engine, &mut state);
        tsumogiri(&engine, &mut resumed);
    }
    assert_eq!(checksum(&resumed), checksum(&state));
    assert_eq!(resumed, state);
}

/// A checkpointed RNG deals the same next kyoku.
#[test]
fn test_rng_checkpoint_between_kyoku() {
    let engine = MasterEngine::default();
    let state = dealer_tsumo_state(&engine);

    let mut rng = GameRng::new(3);
    let saved = rng.state();
    let first = engine.next_round(&state, &mut rng).unwrap();

    let mut restored = GameRng::from_state(&saved);
    let second = engine.next_round(&state, &mut restored).unwrap();
    assert_eq!(first, second);
}
