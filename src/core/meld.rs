//! Exposed melds ("huro") and sequence-call slots.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::house::House;
use super::tile::Tile;

/// A meld formed by a call or a quad declaration.
///
/// Owned by the seat that formed it. Only `Pon` ever changes afterwards:
/// an upgrade replaces it in place with a `Minkan` keeping its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Huro {
    /// Sequence claimed from the previous seat. Tiles are in ascending order.
    Chi { tiles: [Tile; 3], from: House },
    /// Triplet claimed from a discard.
    Pon { tile: Tile, from: House },
    /// Open quad: claimed from a discard or upgraded from a pon.
    Minkan { tile: Tile, from: House },
    /// Concealed quad.
    Ankan { tile: Tile },
}

impl Huro {
    /// Every physical tile in the meld.
    #[must_use]
    pub fn tiles(&self) -> SmallVec<[Tile; 4]> {
        match *self {
            Huro::Chi { tiles, .. } => SmallVec::from_slice(&tiles),
            Huro::Pon { tile, .. } => smallvec![tile; 3],
            Huro::Minkan { tile, .. } | Huro::Ankan { tile } => smallvec![tile; 4],
        }
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        match self {
            Huro::Chi { .. } | Huro::Pon { .. } => 3,
            Huro::Minkan { .. } | Huro::Ankan { .. } => 4,
        }
    }

    /// Seat the claimed tile came from, `None` for concealed quads.
    #[must_use]
    pub fn origin(&self) -> Option<House> {
        match *self {
            Huro::Chi { from, .. } | Huro::Pon { from, .. } | Huro::Minkan { from, .. } => Some(from),
            Huro::Ankan { .. } => None,
        }
    }

    /// Open melds break a closed hand; concealed quads do not.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Huro::Ankan { .. })
    }

    #[must_use]
    pub fn is_quad(&self) -> bool {
        matches!(self, Huro::Minkan { .. } | Huro::Ankan { .. })
    }
}

/// Where the claimed tile sits inside a sequence call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChiSlot {
    /// Claimed tile is the lowest (`x__`).
    Low,
    /// Claimed tile is the middle (`_x_`).
    Middle,
    /// Claimed tile is the highest (`__x`).
    High,
}

impl ChiSlot {
    pub const ALL: [ChiSlot; 3] = [ChiSlot::Low, ChiSlot::Middle, ChiSlot::High];

    /// The two tiles that must come from the caller's hand, in ascending order.
    ///
    /// `None` when the run would leave the suit (or the tile is an honor).
    #[must_use]
    pub fn partners(self, claimed: Tile) -> Option<[Tile; 2]> {
        match self {
            ChiSlot::Low => {
                let a = claimed.next_in_sequence()?;
                let b = a.next_in_sequence()?;
                Some([a, b])
            }
            ChiSlot::Middle => {
                let a = claimed.prev_in_sequence()?;
                let b = claimed.next_in_sequence()?;
                Some([a, b])
            }
            ChiSlot::High => {
                let a = claimed.prev_in_sequence()?;
                let b = a.prev_in_sequence()?;
                Some([b, a])
            }
        }
    }

    /// The full run for this slot, ascending.
    #[must_use]
    pub fn run(self, claimed: Tile) -> Option<[Tile; 3]> {
        let [a, b] = self.partners(claimed)?;
        Some(match self {
            ChiSlot::Low => [claimed, a, b],
            ChiSlot::Middle => [a, claimed, b],
            ChiSlot::High => [a, b, claimed],
        })
    }
}
