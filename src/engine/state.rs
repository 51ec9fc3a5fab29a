//! The authoritative match state.
//!
//! ## MatchState
//!
//! One owned value per kyoku holding everything the engine decides on:
//! - seat ↔ user mapping, round wind, kyoku and honba counters
//! - per-seat concealed hand, discard pile, melds, riichi flag, points
//! - the wall (live and dead)
//! - the tile drawn this turn and the latest discard
//! - the phase: a turn, an open reaction window, or the round's end
//!
//! Fields are only written by `MasterEngine`; everything outside the crate
//! reads through accessors. Discard piles use `im::Vector` so cloning a
//! state for a snapshot or a projection stays cheap.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, House, HouseMap, Huro, RuleConfig, Tile};
use crate::error::EngineResult;
use crate::hand::TileCounts;
use crate::wall::Wall;

use super::outcome::RoundEnd;
use super::reaction::ReactionWindow;

/// Where the match is in the turn/interruption protocol.
///
/// Exactly one variant holds at a time, so "a turn is active" and "a
/// reaction window is open" can never coexist.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The seat must discard (or declare a quad or a self-drawn win).
    Turn(House),
    /// Waiting for the combined answer to a discard.
    AwaitingReactions(ReactionWindow),
    /// The round is over.
    Ended(RoundEnd),
}

/// Full state of one kyoku.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchState {
    /// User number (1-4) seated at each house.
    pub(crate) users: HouseMap<u8>,
    pub(crate) round_wind: House,
    /// Kyoku within the round wind, starting at 1.
    pub(crate) kyoku: u8,
    /// Consecutive dealer repeats and draws.
    pub(crate) honba: u32,
    pub(crate) wall: Wall,
    pub(crate) hands: HouseMap<Vec<Tile>>,
    pub(crate) discards: HouseMap<Vector<Tile>>,
    pub(crate) melds: HouseMap<SmallVec<[Huro; 4]>>,
    pub(crate) riichi: HouseMap<bool>,
    pub(crate) points: HouseMap<i64>,
    /// Tile drawn this turn; `None` after a pon or chi claim.
    pub(crate) drawn: Option<Tile>,
    pub(crate) last_discard: Option<(House, Tile)>,
    pub(crate) phase: Phase,
}

/// Counters and seating carried from one kyoku into the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Carry {
    pub users: HouseMap<u8>,
    pub points: HouseMap<i64>,
    pub round_wind: House,
    pub kyoku: u8,
    pub honba: u32,
}

impl Carry {
    fn fresh(config: &RuleConfig) -> Self {
        Self {
            users: HouseMap::new(|h| h.index() as u8 + 1),
            points: HouseMap::with_value(config.starting_points),
            round_wind: House::East,
            kyoku: 1,
            honba: 0,
        }
    }
}

impl MatchState {
    /// Shuffle and deal the first kyoku of a match.
    ///
    /// User 1 sits east. East holds 14 tiles and has the turn.
    #[must_use]
    pub fn new(rng: &mut GameRng, config: &RuleConfig) -> Self {
        let (wall, hands) = Wall::deal(rng);
        Self::from_deal(wall, hands, Carry::fresh(config))
    }

    /// Deal the first kyoku from a fixed 136-tile ordering.
    ///
    /// See `Wall::stacked` for the layout and `wall::Stacker` for building one.
    pub fn from_tiles(tiles: Vec<Tile>, config: &RuleConfig) -> EngineResult<Self> {
        let (wall, hands) = Wall::stacked(tiles)?;
        Ok(Self::from_deal(wall, hands, Carry::fresh(config)))
    }

    pub(crate) fn from_deal(wall: Wall, hands: HouseMap<Vec<Tile>>, carry: Carry) -> Self {
        let drawn = hands[House::East].last().copied();
        debug!(
            "deal {}{} honba {}: dealer user {}",
            carry.round_wind, carry.kyoku, carry.honba, carry.users[House::East]
        );
        Self {
            users: carry.users,
            round_wind: carry.round_wind,
            kyoku: carry.kyoku,
            honba: carry.honba,
            wall,
            hands,
            discards: HouseMap::default(),
            melds: HouseMap::default(),
            riichi: HouseMap::default(),
            points: carry.points,
            drawn,
            last_discard: None,
            phase: Phase::Turn(House::East),
        }
    }

    // === Seating and counters ===

    /// User number (1-4) at a seat.
    #[must_use]
    pub fn user_at(&self, house: House) -> u8 {
        self.users[house]
    }

    /// Seat of a user (1-4).
    #[must_use]
    pub fn house_of_user(&self, user: u8) -> Option<House> {
        self.users.iter().find(|&(_, &u)| u == user).map(|(h, _)| h)
    }

    #[must_use]
    pub fn users(&self) -> &HouseMap<u8> {
        &self.users
    }

    #[must_use]
    pub fn round_wind(&self) -> House {
        self.round_wind
    }

    #[must_use]
    pub fn kyoku(&self) -> u8 {
        self.kyoku
    }

    #[must_use]
    pub fn honba(&self) -> u32 {
        self.honba
    }

    // === Tiles ===

    /// Concealed tiles of a seat. The tile drawn this turn is last.
    #[must_use]
    pub fn hand(&self, house: House) -> &[Tile] {
        &self.hands[house]
    }

    #[must_use]
    pub fn hands(&self) -> &HouseMap<Vec<Tile>> {
        &self.hands
    }

    #[must_use]
    pub fn discards(&self, house: House) -> &Vector<Tile> {
        &self.discards[house]
    }

    #[must_use]
    pub fn melds(&self, house: House) -> &[Huro] {
        &self.melds[house]
    }

    #[must_use]
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    /// Active dora indicators.
    #[must_use]
    pub fn dora_indicators(&self) -> &[Tile] {
        self.wall.dora_indicators()
    }

    #[must_use]
    pub fn drawn(&self) -> Option<Tile> {
        self.drawn
    }

    #[must_use]
    pub fn last_discard(&self) -> Option<(House, Tile)> {
        self.last_discard
    }

    /// Every physical tile in the match, wherever it is.
    #[must_use]
    pub fn tile_counts(&self) -> TileCounts {
        let mut counts: TileCounts = self.wall.tiles().collect();
        for house in House::ALL {
            for &t in &self.hands[house] {
                counts.add(t);
            }
            for &t in &self.discards[house] {
                counts.add(t);
            }
            for meld in &self.melds[house] {
                for t in meld.tiles() {
                    counts.add(t);
                }
            }
        }
        counts
    }

    // === Seat state ===

    #[must_use]
    pub fn is_riichi(&self, house: House) -> bool {
        self.riichi[house]
    }

    #[must_use]
    pub fn points(&self, house: House) -> i64 {
        self.points[house]
    }

    #[must_use]
    pub fn all_points(&self) -> &HouseMap<i64> {
        &self.points
    }

    // === Phase ===

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Seat whose turn it is, if a turn is active.
    #[must_use]
    pub fn turn(&self) -> Option<House> {
        match self.phase {
            Phase::Turn(house) => Some(house),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_reaction(&self) -> Option<&ReactionWindow> {
        match &self.phase {
            Phase::AwaitingReactions(window) => Some(window),
            _ => None,
        }
    }

    #[must_use]
    pub fn round_end(&self) -> Option<&RoundEnd> {
        match &self.phase {
            Phase::Ended(end) => Some(end),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }
}

/// Remove one copy of `tile`, preferring the last position.
pub(crate) fn take_tile(hand: &mut Vec<Tile>, tile: Tile) -> bool {
    match hand.iter().rposition(|&t| t == tile) {
        Some(pos) => {
            hand.remove(pos);
            true
        }
        None => false,
    }
}

/// Remove `n` copies of `tile`. The caller has checked they are present.
pub(crate) fn take_tiles(hand: &mut Vec<Tile>, tile: Tile, n: usize) {
    for _ in 0..n {
        take_tile(hand, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::LIVE_WALL_SIZE;

    #[test]
    fn test_new_match() {
        let config = RuleConfig::default();
        let state = MatchState::new(&mut GameRng::new(42), &config);

        assert_eq!(state.turn(), Some(House::East));
        assert_eq!(state.hand(House::East).len(), 14);
        assert_eq!(state.hand(House::West).len(), 13);
        assert_eq!(state.drawn(), state.hand(House::East).last().copied());
        assert_eq!(state.wall().live_count(), LIVE_WALL_SIZE);
        assert_eq!(state.dora_indicators().len(), 1);
        assert_eq!(state.round_wind(), House::East);
        assert_eq!(state.kyoku(), 1);
        for house in House::ALL {
            assert_eq!(state.points(house), 25_000);
            assert!(!state.is_riichi(house));
        }
    }

    #[test]
    fn test_user_mapping() {
        let state = MatchState::new(&mut GameRng::new(1), &RuleConfig::default());
        assert_eq!(state.user_at(House::East), 1);
        assert_eq!(state.user_at(House::North), 4);
        assert_eq!(state.house_of_user(3), Some(House::West));
        assert_eq!(state.house_of_user(5), None);
    }

    #[test]
    fn test_tile_conservation_after_deal() {
        let state = MatchState::new(&mut GameRng::new(7), &RuleConfig::default());
        let counts = state.tile_counts();
        assert_eq!(counts.total(), 136);
        assert!(Tile::all().all(|t| counts[t] == 4));
    }

    #[test]
    fn test_same_seed_same_state() {
        let config = RuleConfig::default();
        let a = MatchState::new(&mut GameRng::new(5), &config);
        let b = MatchState::new(&mut GameRng::new(5), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_take_tile() {
        let mut hand = crate::core::parse_tiles("m1 m2 m1").unwrap();
        assert!(take_tile(&mut hand, "m1".parse().unwrap()));
        assert_eq!(hand, crate::core::parse_tiles("m1 m2").unwrap());
        assert!(!take_tile(&mut hand, Tile::HAKU));
    }
}
