//! Tile vocabulary.
//!
//! ## Layout
//!
//! Tiles are identified by one of 34 kinds, stored as a compact index:
//! - `0..9`: characters `m1`..`m9`
//! - `9..18`: circles `p1`..`p9`
//! - `18..27`: bamboo `s1`..`s9`
//! - `27..31`: winds `e`, `s`, `w`, `n`
//! - `31..34`: dragons `haku`, `hatsu`, `chun`
//!
//! Physical copies are not tracked: two tiles of the same kind are equal.
//!
//! ## Usage
//!
//! ```
//! use mahjong_master::core::Tile;
//!
//! let tile: Tile = "m9".parse().unwrap();
//! assert_eq!(tile.dora_successor(), "m1".parse().unwrap());
//! assert_eq!(Tile::CHUN.dora_successor(), Tile::HAKU);
//! assert_eq!(tile.to_string(), "m9");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct tile kinds.
pub const TILE_KINDS: usize = 34;

/// Physical copies of every kind in a match.
pub const COPIES_PER_KIND: usize = 4;

/// Total tiles in a match.
pub const TOTAL_TILES: usize = TILE_KINDS * COPIES_PER_KIND;

const NAMES: [&str; TILE_KINDS] = [
    "m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9", //
    "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", //
    "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", //
    "e", "s", "w", "n", "haku", "hatsu", "chun",
];

/// Tile suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Man,
    Pin,
    Sou,
    Honor,
}

/// A tile kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

impl Tile {
    pub const EAST: Tile = Tile(27);
    pub const SOUTH: Tile = Tile(28);
    pub const WEST: Tile = Tile(29);
    pub const NORTH: Tile = Tile(30);
    pub const HAKU: Tile = Tile(31);
    pub const HATSU: Tile = Tile(32);
    pub const CHUN: Tile = Tile(33);

    /// Create a tile from its kind index.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < TILE_KINDS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a suited tile from suit and rank (1-9).
    #[must_use]
    pub fn suited(suit: Suit, rank: u8) -> Option<Self> {
        if !(1..=9).contains(&rank) {
            return None;
        }
        let base = match suit {
            Suit::Man => 0,
            Suit::Pin => 9,
            Suit::Sou => 18,
            Suit::Honor => return None,
        };
        Some(Self(base + rank - 1))
    }

    /// Kind index (0..34).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 34 kinds in index order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..TILE_KINDS as u8).map(Tile)
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 {
            0..=8 => Suit::Man,
            9..=17 => Suit::Pin,
            18..=26 => Suit::Sou,
            _ => Suit::Honor,
        }
    }

    /// Rank 1-9 for suited tiles, `None` for honors.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        if self.0 < 27 {
            Some(self.0 % 9 + 1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_honor(self) -> bool {
        self.0 >= 27
    }

    #[must_use]
    pub const fn is_wind(self) -> bool {
        self.0 >= 27 && self.0 <= 30
    }

    #[must_use]
    pub const fn is_dragon(self) -> bool {
        self.0 >= 31
    }

    /// A 1 or 9 of a suit.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self.rank(), Some(1) | Some(9))
    }

    /// A suited tile ranked 2-8.
    #[must_use]
    pub const fn is_simple(self) -> bool {
        matches!(self.rank(), Some(2..=8))
    }

    #[must_use]
    pub const fn is_terminal_or_honor(self) -> bool {
        !self.is_simple()
    }

    /// Next tile in a run of the same suit (`m3` -> `m4`), `None` past 9 or for honors.
    #[must_use]
    pub const fn next_in_sequence(self) -> Option<Self> {
        match self.rank() {
            Some(r) if r < 9 => Some(Self(self.0 + 1)),
            _ => None,
        }
    }

    /// Previous tile in a run of the same suit (`m3` -> `m2`), `None` below 1 or for honors.
    #[must_use]
    pub const fn prev_in_sequence(self) -> Option<Self> {
        match self.rank() {
            Some(r) if r > 1 => Some(Self(self.0 - 1)),
            _ => None,
        }
    }

    /// The dora indicated when this tile is revealed as an indicator.
    ///
    /// Suits wrap 9 -> 1, winds cycle e -> s -> w -> n -> e, and dragons
    /// cycle haku -> hatsu -> chun -> haku.
    #[must_use]
    pub const fn dora_successor(self) -> Self {
        match self.0 {
            8 | 17 | 26 => Self(self.0 - 8),
            30 => Self(27),
            33 => Self(31),
            i => Self(i + 1),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NAMES[self.index()])
    }
}

/// Error parsing a tile name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TileParseError {
    #[error("unknown tile name '{0}'")]
    UnknownName(String),
    #[error("tile index {0} out of range")]
    OutOfRange(u8),
}

impl FromStr for Tile {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|&name| name == s)
            .map(|i| Tile(i as u8))
            .ok_or_else(|| TileParseError::UnknownName(s.to_string()))
    }
}

impl TryFrom<u8> for Tile {
    type Error = TileParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tile::new(value).ok_or(TileParseError::OutOfRange(value))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

/// Parse a whitespace-separated tile list such as `"m1 m2 m3 haku"`.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>, TileParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Every physical tile of a match, four copies per kind, in kind order.
#[must_use]
pub fn full_set() -> Vec<Tile> {
    Tile::all()
        .flat_map(|t| std::iter::repeat(t).take(COPIES_PER_KIND))
        .collect()
}
