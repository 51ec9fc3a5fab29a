//! Reaction windows and the combined answer that closes them.
//!
//! A discard that some other seat can react to opens exactly one
//! `ReactionWindow`. The caller gathers every seat's decision out of band
//! and submits them together as one `ReactionAnswers`; the engine then
//! applies the fixed priority ron > kan > pon > chi.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChiSlot, House, Tile};

/// Calls that claim a discard into a meld.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallKind {
    Kan,
    Pon,
    Chi,
}

/// Who may react to a discard, per call type.
///
/// Several seats may ron the same tile. Only one seat can ever hold enough
/// copies for a kan or pon, and only the discarder's successor may chi.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Eligibility {
    /// Seats that may win on the tile, in turn order after the discarder.
    pub ron: SmallVec<[House; 3]>,
    pub kan: Option<House>,
    pub pon: Option<House>,
    pub chi: Option<House>,
}

impl Eligibility {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ron.is_empty() && self.kan.is_none() && self.pon.is_none() && self.chi.is_none()
    }

    #[must_use]
    pub fn can_ron(&self, seat: House) -> bool {
        self.ron.contains(&seat)
    }

    /// Seat eligible for a claim of `kind`.
    #[must_use]
    pub fn caller(&self, kind: CallKind) -> Option<House> {
        match kind {
            CallKind::Kan => self.kan,
            CallKind::Pon => self.pon,
            CallKind::Chi => self.chi,
        }
    }

    /// Every seat with at least one option.
    pub fn seats(&self) -> impl Iterator<Item = House> + '_ {
        House::ALL.into_iter().filter(move |&h| {
            self.can_ron(h) || self.kan == Some(h) || self.pon == Some(h) || self.chi == Some(h)
        })
    }
}

/// The single pending-reaction record for one discard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionWindow {
    pub discarder: House,
    pub tile: Tile,
    /// Seat that draws next if nobody calls.
    pub next_turn: House,
    pub eligibility: Eligibility,
}

/// Combined decisions of every eligible seat.
///
/// The default value passes on everything.
///
/// ```
/// use mahjong_master::core::{ChiSlot, House};
/// use mahjong_master::engine::ReactionAnswers;
///
/// let answers = ReactionAnswers::pass().with_pon().with_chi(ChiSlot::Middle);
/// assert!(answers.pon);
/// assert!(!answers.is_pass());
/// assert!(ReactionAnswers::ron([House::West, House::North]).ron.len() == 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionAnswers {
    /// Seats claiming the discard as their winning tile.
    pub ron: Vec<House>,
    /// The kan-eligible seat claims an open quad.
    pub kan: bool,
    /// The pon-eligible seat claims a triplet.
    pub pon: bool,
    /// The chi-eligible seat claims a run, with the discard in this slot.
    pub chi: Option<ChiSlot>,
}

impl ReactionAnswers {
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ron(seats: impl IntoIterator<Item = House>) -> Self {
        Self {
            ron: seats.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kan(mut self) -> Self {
        self.kan = true;
        self
    }

    #[must_use]
    pub fn with_pon(mut self) -> Self {
        self.pon = true;
        self
    }

    #[must_use]
    pub fn with_chi(mut self, slot: ChiSlot) -> Self {
        self.chi = Some(slot);
        self
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.ron.is_empty() && !self.kan && !self.pon && self.chi.is_none()
    }
}
