//! What leaves the engine: per-seat views, checksums and snapshots.
//!
//! ## Projection
//!
//! `project(state, seat)` builds the `PlayerView` a seat is allowed to see.
//! Other seats' concealed tiles become `None`, the live wall becomes a
//! count, and the drawn tile is only visible to the seat whose turn it is.
//!
//! ```
//! use mahjong_master::core::{GameRng, House};
//! use mahjong_master::engine::MasterEngine;
//! use mahjong_master::view::{checksum_for, project};
//!
//! let engine = MasterEngine::default();
//! let state = engine.new_match(&mut GameRng::new(1));
//!
//! let view = project(&state, House::West);
//! assert_eq!(view.own_hand().len(), 13);
//! assert!(view.hands[House::East].iter().all(Option::is_none));
//! assert_eq!(view.checksum(), checksum_for(&state, House::West));
//! ```
//!
//! ## Checksums
//!
//! `checksum` fingerprints the full state and `checksum_for` the view of
//! one seat, so a replica can detect that it has drifted.

mod checksum;
mod projector;
mod snapshot;

pub use checksum::{checksum, checksum_for};
pub use projector::{project, PlayerView};
pub use snapshot::{decode, encode};
