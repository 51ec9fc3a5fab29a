//! Hand analysis.
//!
//! Pure functions over tile bags: completeness, every decomposition,
//! readiness, call eligibility and dora counting. Nothing here touches
//! match state; the engine and the scorer call in with slices.
//!
//! ## Key Types
//!
//! - `TileCounts`: per-kind histogram used by every search
//! - `Mentsu`: a triplet or a run inside a decomposition
//! - `Decomposition`: one reading of a complete hand

mod calls;
mod counts;
mod decompose;
mod dora;

pub use calls::{can_form_sequence_with, count_matching, sequence_options};
pub use counts::TileCounts;
pub use decompose::{
    decompose_counts, decompositions, is_complete, is_complete_counts, is_ready, winning_tiles,
    Decomposition, Mentsu, FULL_HAND,
};
pub use dora::count_owned_dora;
