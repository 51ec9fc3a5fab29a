//! Per-kind tile histogram.

use std::ops::Index;

use crate::core::{Tile, COPIES_PER_KIND, TILE_KINDS};

/// Count of each tile kind in a bag of tiles.
///
/// Hand analysis works on counts rather than tile lists: physical identity
/// is never tracked, so two bags with the same counts are the same hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCounts {
    counts: [u8; TILE_KINDS],
}

impl Default for TileCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl TileCounts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; TILE_KINDS],
        }
    }

    /// Every kind at four copies: the complete 136-tile set.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            counts: [COPIES_PER_KIND as u8; TILE_KINDS],
        }
    }

    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut counts = Self::new();
        for &tile in tiles {
            counts.add(tile);
        }
        counts
    }

    pub fn add(&mut self, tile: Tile) {
        self.counts[tile.index()] += 1;
    }

    /// Remove one copy. Returns false (and changes nothing) if none is held.
    pub fn remove(&mut self, tile: Tile) -> bool {
        let slot = &mut self.counts[tile.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Remove `n` copies, all or nothing.
    pub fn remove_n(&mut self, tile: Tile, n: u8) -> bool {
        let slot = &mut self.counts[tile.index()];
        if *slot < n {
            return false;
        }
        *slot -= n;
        true
    }

    #[must_use]
    pub fn get(&self, tile: Tile) -> u8 {
        self.counts[tile.index()]
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.get(tile) > 0
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Kinds held at least once, with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        Tile::all()
            .zip(self.counts.iter().copied())
            .filter(|&(_, c)| c > 0)
    }

    /// Expand back to a sorted tile list.
    #[must_use]
    pub fn to_tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.total());
        for (tile, count) in self.iter() {
            tiles.extend(std::iter::repeat(tile).take(usize::from(count)));
        }
        tiles
    }
}

impl Index<Tile> for TileCounts {
    type Output = u8;

    fn index(&self, tile: Tile) -> &u8 {
        &self.counts[tile.index()]
    }
}

impl<'a> FromIterator<&'a Tile> for TileCounts {
    fn from_iter<I: IntoIterator<Item = &'a Tile>>(iter: I) -> Self {
        Self::from_tiles(iter)
    }
}

impl FromIterator<Tile> for TileCounts {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut counts = Self::new();
        for tile in iter {
            counts.add(tile);
        }
        counts
    }
}
