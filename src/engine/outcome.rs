//! Structured results returned to the caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{House, HouseMap, Huro, Tile};
use crate::scoring::{Evaluation, WinTile};

use super::reaction::{CallKind, Eligibility};

/// A settled win.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinOutcome {
    pub winner: House,
    pub win: WinTile,
    pub evaluation: Evaluation,
    /// Point change per seat; sums to zero.
    pub deltas: HouseMap<i64>,
}

/// Result of `discard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardOutcome {
    /// At least one seat may react; the turn is suspended.
    AwaitingReactions(Eligibility),
    /// Nobody could react; `next` drew `drawn`.
    TurnAdvanced { next: House, drawn: Tile },
    /// Nobody could react and the live wall is empty.
    ExhaustiveDraw,
}

/// Result of a quad declaration on one's own turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadOutcome {
    pub meld: Huro,
    /// Replacement tile, visible only to the declaring seat.
    pub replacement: Tile,
}

/// Result of `resolve_reactions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionOutcome {
    /// One or more seats won on the discard, each paid by the discarder.
    Ron(SmallVec<[WinOutcome; 3]>),
    /// A meld was formed from the discard and the caller now holds the turn.
    Called {
        kind: CallKind,
        caller: House,
        meld: Huro,
        /// Replacement drawn after an open quad.
        replacement: Option<Tile>,
    },
    /// Nobody called; `next` drew `drawn`.
    TurnAdvanced { next: House, drawn: Tile },
    /// Nobody called and the live wall is empty.
    ExhaustiveDraw,
}

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEnd {
    Tsumo(WinOutcome),
    Ron {
        discarder: House,
        wins: SmallVec<[WinOutcome; 3]>,
    },
    /// Live wall exhausted without a win. No points change hands.
    ExhaustiveDraw,
}

impl RoundEnd {
    /// Every winning seat.
    #[must_use]
    pub fn winners(&self) -> SmallVec<[House; 3]> {
        match self {
            RoundEnd::Tsumo(win) => SmallVec::from_slice(&[win.winner]),
            RoundEnd::Ron { wins, .. } => wins.iter().map(|w| w.winner).collect(),
            RoundEnd::ExhaustiveDraw => SmallVec::new(),
        }
    }

    #[must_use]
    pub fn dealer_won(&self) -> bool {
        self.winners().iter().any(|h| h.is_dealer())
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundEnd::ExhaustiveDraw)
    }

    /// Net point change per seat over the whole round.
    #[must_use]
    pub fn net_deltas(&self) -> HouseMap<i64> {
        let mut net = HouseMap::with_value(0);
        let wins: &[WinOutcome] = match self {
            RoundEnd::Tsumo(win) => std::slice::from_ref(win),
            RoundEnd::Ron { wins, .. } => wins,
            RoundEnd::ExhaustiveDraw => &[],
        };
        for win in wins {
            for (house, delta) in win.deltas.iter() {
                net[house] += delta;
            }
        }
        net
    }
}
