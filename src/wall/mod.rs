//! Wall and dead wall management.
//!
//! ## Key Types
//!
//! - `Wall`: live wall (drawable tiles) plus the fixed 14-tile dead wall
//! - `DeadWall`: replacement reserve and dora indicator slots
//! - `Stacker`: builds arranged 136-tile orderings for `Wall::stacked`
//!
//! ## Layout
//!
//! A deal consumes the ordering front to back: east's 14 tiles, then
//! 13 each for south, west and north, then 4 replacement tiles, then
//! 10 indicator slots. Everything after that is the live wall, drawn
//! from the front.

mod deck;
mod stacker;

pub use deck::{
    DeadWall, Wall, DEAD_WALL_SIZE, HAND_SIZE, INDICATOR_SLOTS, LIVE_WALL_SIZE,
    MAX_DORA_INDICATORS, REPLACEMENT_TILES,
};
pub use stacker::Stacker;
