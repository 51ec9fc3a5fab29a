//! Shared helpers for integration tests.
//!
//! The quiet deal gives every seat a hand with no pairs and no two tiles
//! close enough to form a run, so as long as everyone discards what they
//! draw no discard can ever be claimed. Tests replace single hands to set
//! up the situation they need.

#![allow(dead_code)]

use mahjong_master::core::{parse_tiles, House, RuleConfig, Tile};
use mahjong_master::engine::{
    DiscardOutcome, MasterEngine, MatchState, ReactionAnswers, ReactionOutcome,
};
use mahjong_master::wall::Stacker;

pub const QUIET_EAST: &str = "m1 m4 m7 p1 p4 p7 s1 s4 s7 e s w n chun";
pub const QUIET_SOUTH: &str = "m2 m5 m8 p2 p5 p8 s2 s5 s8 e s w haku";
pub const QUIET_WEST: &str = "m3 m6 m9 p3 p6 p9 s3 s6 s9 e s n hatsu";
pub const QUIET_NORTH: &str = "m1 m5 m9 p1 p5 p9 s1 s5 s9 e w n chun";

pub fn tiles(s: &str) -> Vec<Tile> {
    parse_tiles(s).unwrap()
}

pub fn tile(s: &str) -> Tile {
    s.parse().unwrap()
}

/// Stacker preloaded with the quiet hands.
pub fn quiet() -> Stacker {
    Stacker::new()
        .hand(House::East, &tiles(QUIET_EAST))
        .hand(House::South, &tiles(QUIET_SOUTH))
        .hand(House::West, &tiles(QUIET_WEST))
        .hand(House::North, &tiles(QUIET_NORTH))
}

/// First kyoku dealt from an arranged wall under default rules.
pub fn deal(stacker: Stacker) -> MatchState {
    deal_with(stacker, &RuleConfig::default())
}

pub fn deal_with(stacker: Stacker, config: &RuleConfig) -> MatchState {
    MatchState::from_tiles(stacker.build().unwrap(), config).unwrap()
}

/// What one tsumogiri step led to.
#[derive(Debug)]
pub enum Step {
    Discarded(DiscardOutcome),
    Resolved(ReactionOutcome),
}

/// The turn seat discards its drawn tile; any window that opens is passed.
pub fn tsumogiri(engine: &MasterEngine, state: &mut MatchState) -> Step {
    let seat = state.turn().unwrap();
    let drawn = state.drawn().unwrap();
    match engine.discard(state, seat, drawn, false).unwrap() {
        DiscardOutcome::AwaitingReactions(_) => {
            Step::Resolved(engine.resolve_reactions(state, &ReactionAnswers::pass()).unwrap())
        }
        other => Step::Discarded(other),
    }
}

/// Every kind appears exactly four times across hands, melds, discards
/// and the wall.
pub fn assert_conserved(state: &MatchState) {
    let counts = state.tile_counts();
    assert_eq!(counts.total(), 136);
    for kind in Tile::all() {
        assert_eq!(counts[kind], 4, "{} is not conserved", kind);
    }
}

pub fn point_sum(state: &MatchState) -> i64 {
    state.all_points().values().sum()
}
