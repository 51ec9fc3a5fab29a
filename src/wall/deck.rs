//! The live wall and the dead wall.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{full_set, GameRng, House, HouseMap, Tile, TOTAL_TILES};
use crate::error::{EngineError, EngineResult};
use crate::hand::TileCounts;

/// Tiles dealt to every seat; the dealer gets one extra.
pub const HAND_SIZE: usize = 13;

/// Fixed size of the dead wall.
pub const DEAD_WALL_SIZE: usize = 14;

/// Replacement draws kept in the dead wall for declared quads.
pub const REPLACEMENT_TILES: usize = 4;

/// Indicator slots in the dead wall (dora and ura-dora).
pub const INDICATOR_SLOTS: usize = DEAD_WALL_SIZE - REPLACEMENT_TILES;

/// Dora indicators that can be active: one at deal plus one per quad.
pub const MAX_DORA_INDICATORS: usize = 5;

/// Tiles left in the live wall right after the deal.
pub const LIVE_WALL_SIZE: usize = TOTAL_TILES - DEAD_WALL_SIZE - HAND_SIZE * 4 - 1;

/// Reserve set aside at deal time.
///
/// Its size never changes: every replacement draw is refilled from the
/// tail of the live wall.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeadWall {
    replacements: Vector<Tile>,
    indicators: Vec<Tile>,
    activated: usize,
}

impl DeadWall {
    /// Active dora indicators, in reveal order.
    #[must_use]
    pub fn indicators(&self) -> &[Tile] {
        &self.indicators[..self.activated]
    }

    #[must_use]
    pub fn activated(&self) -> usize {
        self.activated
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.replacements.len() + self.indicators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All physical tiles in the dead wall.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.replacements.iter().chain(self.indicators.iter()).copied()
    }
}

/// The match's tile pool after the deal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    live: Vector<Tile>,
    dead: DeadWall,
}

impl Wall {
    /// Shuffle a fresh 136-tile set and deal it.
    ///
    /// East receives 14 tiles, the other seats 13 each. One dora indicator
    /// is active after the deal.
    pub fn deal(rng: &mut GameRng) -> (Wall, HouseMap<Vec<Tile>>) {
        let mut tiles = full_set();
        rng.shuffle(&mut tiles);
        Self::layout(tiles)
    }

    /// Deal from a caller-fixed ordering.
    ///
    /// Layout: east 14, south 13, west 13, north 13, then 4 replacement
    /// tiles, 10 indicator slots, and finally the live wall in draw order.
    pub fn stacked(tiles: Vec<Tile>) -> EngineResult<(Wall, HouseMap<Vec<Tile>>)> {
        if tiles.len() != TOTAL_TILES {
            return Err(EngineError::InvalidWall {
                reason: format!("expected {} tiles, got {}", TOTAL_TILES, tiles.len()),
            });
        }
        let counts = TileCounts::from_tiles(&tiles);
        if let Some(tile) = Tile::all().find(|&t| counts[t] != 4) {
            return Err(EngineError::InvalidWall {
                reason: format!("{} appears {} times", tile, counts[tile]),
            });
        }
        Ok(Self::layout(tiles))
    }

    fn layout(tiles: Vec<Tile>) -> (Wall, HouseMap<Vec<Tile>>) {
        let mut rest = tiles.into_iter();
        let hands = HouseMap::new(|house| {
            let size = if house.is_dealer() { HAND_SIZE + 1 } else { HAND_SIZE };
            rest.by_ref().take(size).collect::<Vec<_>>()
        });
        let replacements: Vector<Tile> = rest.by_ref().take(REPLACEMENT_TILES).collect();
        let indicators: Vec<Tile> = rest.by_ref().take(INDICATOR_SLOTS).collect();
        let live: Vector<Tile> = rest.collect();

        let wall = Wall {
            live,
            dead: DeadWall {
                replacements,
                indicators,
                activated: 1,
            },
        };
        debug!("dealt wall: {} live tiles", wall.live.len());
        (wall, hands)
    }

    /// Draw the next tile from the live wall.
    pub fn draw(&mut self) -> EngineResult<Tile> {
        self.live.pop_front().ok_or(EngineError::NoTilesRemaining)
    }

    /// Whether a quad may be declared now (a replacement can be drawn).
    #[must_use]
    pub fn can_draw_replacement(&self) -> bool {
        self.dead.activated < MAX_DORA_INDICATORS
            && !self.live.is_empty()
            && !self.dead.replacements.is_empty()
    }

    /// Draw a replacement tile after a quad and reveal the next indicator.
    ///
    /// The last live tile moves into the reserve so the dead wall keeps
    /// its size.
    pub fn draw_replacement(&mut self) -> EngineResult<Tile> {
        if !self.can_draw_replacement() {
            return Err(EngineError::NoTilesRemaining);
        }
        let tile = self
            .dead
            .replacements
            .pop_front()
            .ok_or(EngineError::NoTilesRemaining)?;
        let refill = self.live.pop_back().ok_or(EngineError::NoTilesRemaining)?;
        self.dead.replacements.push_back(refill);
        self.dead.activated += 1;
        debug!("replacement draw, {} indicators active", self.dead.activated);
        Ok(tile)
    }

    /// Tiles left to draw.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.live.is_empty()
    }

    #[must_use]
    pub fn dead_wall(&self) -> &DeadWall {
        &self.dead
    }

    /// Active dora indicators.
    #[must_use]
    pub fn dora_indicators(&self) -> &[Tile] {
        self.dead.indicators()
    }

    /// Tile kinds that currently count as dora.
    #[must_use]
    pub fn doras(&self) -> SmallVec<[Tile; MAX_DORA_INDICATORS]> {
        self.dead
            .indicators()
            .iter()
            .map(|t| t.dora_successor())
            .collect()
    }

    /// Every physical tile still in the wall (live and dead).
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.live.iter().copied().chain(self.dead.tiles())
    }
}
