//! Per-seat information-restricted views.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{House, HouseMap, Huro, Tile};
use crate::engine::{MatchState, Phase, RoundEnd};
use crate::wall::MAX_DORA_INDICATORS;

/// What one seat may see of a match.
///
/// Other seats' concealed tiles are `None` placeholders: the count is
/// observable, the contents are not. The live wall is only a count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerView {
    /// Seat the view was projected for.
    pub seat: House,
    pub users: HouseMap<u8>,
    pub round_wind: House,
    pub kyoku: u8,
    pub honba: u32,
    pub hands: HouseMap<Vec<Option<Tile>>>,
    pub discards: HouseMap<Vector<Tile>>,
    pub melds: HouseMap<SmallVec<[Huro; 4]>>,
    pub riichi: HouseMap<bool>,
    pub points: HouseMap<i64>,
    pub live_count: usize,
    pub dora_indicators: SmallVec<[Tile; MAX_DORA_INDICATORS]>,
    /// Tile drawn this turn, only when the turn is this seat's.
    pub drawn: Option<Tile>,
    pub last_discard: Option<(House, Tile)>,
    pub turn: Option<House>,
    /// A discard is waiting for reactions.
    pub awaiting_reactions: bool,
    pub round_end: Option<RoundEnd>,
}

impl PlayerView {
    /// Concealed tiles of the viewing seat.
    #[must_use]
    pub fn own_hand(&self) -> Vec<Tile> {
        self.hands[self.seat].iter().flatten().copied().collect()
    }

    /// Number of concealed tiles a seat holds.
    #[must_use]
    pub fn hand_size(&self, house: House) -> usize {
        self.hands[house].len()
    }

    /// Re-project this view for `seat`.
    ///
    /// Projecting for the same seat returns an equal view. Projecting for
    /// another seat hides every hand, since this view does not know the
    /// other seat's tiles.
    #[must_use]
    pub fn project(&self, seat: House) -> PlayerView {
        let mut view = self.clone();
        if seat != self.seat {
            for hand in view.hands.values_mut() {
                hand.iter_mut().for_each(|t| *t = None);
            }
            view.seat = seat;
            if self.turn != Some(seat) {
                view.drawn = None;
            }
        }
        view
    }
}

/// Project `state` for `seat`.
#[must_use]
pub fn project(state: &MatchState, seat: House) -> PlayerView {
    let hands = state.hands().map(|house, tiles| {
        if house == seat {
            tiles.iter().copied().map(Some).collect()
        } else {
            vec![None; tiles.len()]
        }
    });
    let turn = state.turn();

    PlayerView {
        seat,
        users: state.users().clone(),
        round_wind: state.round_wind(),
        kyoku: state.kyoku(),
        honba: state.honba(),
        hands,
        discards: HouseMap::new(|h| state.discards(h).clone()),
        melds: HouseMap::new(|h| SmallVec::from_slice(state.melds(h))),
        riichi: HouseMap::new(|h| state.is_riichi(h)),
        points: state.all_points().clone(),
        live_count: state.wall().live_count(),
        dora_indicators: SmallVec::from_slice(state.dora_indicators()),
        drawn: if turn == Some(seat) { state.drawn() } else { None },
        last_discard: state.last_discard(),
        turn,
        awaiting_reactions: matches!(state.phase(), Phase::AwaitingReactions(_)),
        round_end: state.round_end().cloned(),
    }
}
