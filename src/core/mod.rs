//! Core vocabulary: tiles, seats, melds, RNG, configuration.
//!
//! Everything here is plain data plus small pure helpers. The state
//! machine, hand analysis and scoring all build on these types.

pub mod tile;
pub mod house;
pub mod meld;
pub mod rng;
pub mod config;

pub use tile::{full_set, parse_tiles, Suit, Tile, TileParseError, COPIES_PER_KIND, TILE_KINDS, TOTAL_TILES};
pub use house::{House, HouseMap, HouseParseError, SEAT_COUNT};
pub use meld::{ChiSlot, Huro};
pub use rng::{GameRng, GameRngState};
pub use config::RuleConfig;
