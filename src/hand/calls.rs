//! Call eligibility against a concealed hand.
//!
//! These helpers only inspect tiles; whether a seat may call at all
//! (turn order, riichi, furiten) is decided by the engine.

use smallvec::SmallVec;

use crate::core::{ChiSlot, Tile};

use super::counts::TileCounts;

/// Copies of `tile` among `concealed`.
#[must_use]
pub fn count_matching(tile: Tile, concealed: &[Tile]) -> usize {
    concealed.iter().filter(|&&t| t == tile).count()
}

/// Run positions in which `tile` can be claimed into a sequence.
///
/// Each slot is returned at most once, in `Low`, `Middle`, `High` order.
#[must_use]
pub fn sequence_options(tile: Tile, concealed: &[Tile]) -> SmallVec<[ChiSlot; 3]> {
    let counts = TileCounts::from_tiles(concealed);
    ChiSlot::ALL
        .into_iter()
        .filter(|slot| {
            slot.partners(tile)
                .map_or(false, |[a, b]| counts.contains(a) && counts.contains(b))
        })
        .collect()
}

/// Whether two concealed tiles complete a run with `tile`.
#[must_use]
pub fn can_form_sequence_with(tile: Tile, concealed: &[Tile]) -> bool {
    !sequence_options(tile, concealed).is_empty()
}
