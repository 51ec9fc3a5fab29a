//! Round advance: from an ended kyoku to the next deal or the final result.
//!
//! Advancing never mutates the ended state. It returns either a fresh
//! `MatchState` for the caller to install in place of the old one, or the
//! final standings.
//!
//! ## Seating
//!
//! If the dealer won, the same users keep their seats and the honba
//! counter goes up. Otherwise every user moves one seat (south becomes
//! east, and so on), carrying their points, and the kyoku counter advances.
//! After the fourth kyoku the round wind advances; once the configured last
//! round wind is finished the match is over.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, House, HouseMap};
use crate::error::{EngineError, EngineResult};
use crate::wall::Wall;

use super::master::MasterEngine;
use super::state::{Carry, MatchState, Phase};

/// Kyoku per round wind.
pub const KYOKU_PER_WIND: u8 = 4;

/// One user's final result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Standing {
    /// User number (1-4).
    pub user: u8,
    pub points: i64,
}

/// What follows an ended kyoku.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundAdvance {
    /// The next kyoku, freshly dealt.
    NextKyoku(Box<MatchState>),
    /// The match is over; standings from first to last place.
    GameOver(Vec<Standing>),
}

impl MasterEngine {
    /// Compute what follows an ended kyoku.
    ///
    /// ## Errors
    ///
    /// `RoundInProgress` unless the state is in the ended phase.
    pub fn next_round(&self, state: &MatchState, rng: &mut GameRng) -> EngineResult<RoundAdvance> {
        let Phase::Ended(end) = &state.phase else {
            return Err(EngineError::RoundInProgress);
        };

        if self.config().end_on_negative && state.points.values().any(|&p| p < 0) {
            info!("match over: a seat is below zero");
            return Ok(RoundAdvance::GameOver(standings(state)));
        }

        let carry = if end.dealer_won() {
            Carry {
                users: state.users.clone(),
                points: state.points.clone(),
                round_wind: state.round_wind,
                kyoku: state.kyoku,
                honba: state.honba + 1,
            }
        } else {
            let (round_wind, kyoku) = if state.kyoku >= KYOKU_PER_WIND {
                if state.round_wind == self.config().last_round_wind {
                    info!("match over after {}{}", state.round_wind, state.kyoku);
                    return Ok(RoundAdvance::GameOver(standings(state)));
                }
                (state.round_wind.next(), 1)
            } else {
                (state.round_wind, state.kyoku + 1)
            };
            Carry {
                users: rotate(&state.users),
                points: rotate(&state.points),
                round_wind,
                kyoku,
                honba: if end.is_draw() { state.honba + 1 } else { 0 },
            }
        };

        let (wall, hands) = Wall::deal(rng);
        Ok(RoundAdvance::NextKyoku(Box::new(MatchState::from_deal(
            wall, hands, carry,
        ))))
    }
}

/// Move every entry one seat back: whoever sat south now sits east.
fn rotate<T: Clone>(map: &HouseMap<T>) -> HouseMap<T> {
    HouseMap::new(|house| map[house.next()].clone())
}

fn standings(state: &MatchState) -> Vec<Standing> {
    let mut standings: Vec<Standing> = House::ALL
        .into_iter()
        .map(|h| Standing {
            user: state.users[h],
            points: state.points[h],
        })
        .collect();
    standings.sort_by(|a, b| b.points.cmp(&a.points).then(a.user.cmp(&b.user)));
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleConfig;
    use crate::engine::RoundEnd;

    fn ended(state: &mut MatchState, end: RoundEnd) {
        state.phase = Phase::Ended(end);
    }

    #[test]
    fn test_requires_ended_round() {
        let engine = MasterEngine::default();
        let state = engine.new_match(&mut GameRng::new(1));
        assert_eq!(
            engine.next_round(&state, &mut GameRng::new(2)),
            Err(EngineError::RoundInProgress)
        );
    }

    #[test]
    fn test_draw_rotates_seats() {
        let engine = MasterEngine::default();
        let mut state = engine.new_match(&mut GameRng::new(1));
        state.points[House::South] = 30_000;
        ended(&mut state, RoundEnd::ExhaustiveDraw);

        let RoundAdvance::NextKyoku(next) = engine.next_round(&state, &mut GameRng::new(2)).unwrap() else {
            panic!("expected another kyoku");
        };
        assert_eq!(next.kyoku(), 2);
        assert_eq!(next.honba(), 1);
        assert_eq!(next.user_at(House::East), 2);
        assert_eq!(next.user_at(House::North), 1);
        assert_eq!(next.points(House::East), 30_000);
        assert_eq!(next.turn(), Some(House::East));
        assert!(next.discards(House::East).is_empty());
    }

    #[test]
    fn test_round_wind_advances_and_match_ends() {
        let engine = MasterEngine::new(RuleConfig::default().with_last_round_wind(House::South));
        let mut state = engine.new_match(&mut GameRng::new(1));
        state.kyoku = 4;
        ended(&mut state, RoundEnd::ExhaustiveDraw);

        let RoundAdvance::NextKyoku(next) = engine.next_round(&state, &mut GameRng::new(2)).unwrap() else {
            panic!("expected south round");
        };
        assert_eq!(next.round_wind(), House::South);
        assert_eq!(next.kyoku(), 1);

        let mut last = *next;
        last.kyoku = 4;
        ended(&mut last, RoundEnd::ExhaustiveDraw);
        let advance = engine.next_round(&last, &mut GameRng::new(3)).unwrap();
        assert!(matches!(advance, RoundAdvance::GameOver(ref s) if s.len() == 4));
    }

    #[test]
    fn test_negative_points_end_match() {
        let engine = MasterEngine::default();
        let mut state = engine.new_match(&mut GameRng::new(1));
        state.points[House::West] = -100;
        state.points[House::North] = 50_100;
        ended(&mut state, RoundEnd::ExhaustiveDraw);

        let RoundAdvance::GameOver(standings) = engine.next_round(&state, &mut GameRng::new(2)).unwrap() else {
            panic!("expected game over");
        };
        assert_eq!(standings[0], Standing { user: 4, points: 50_100 });
        assert_eq!(standings[3], Standing { user: 3, points: -100 });
    }

    #[test]
    fn test_rotate() {
        let map: HouseMap<u8> = HouseMap::new(|h| h.index() as u8);
        let rotated = rotate(&map);
        assert_eq!(rotated[House::East], 1);
        assert_eq!(rotated[House::North], 0);
    }
}
