//! Arranged deals.
//!
//! `Stacker` produces a full 136-tile ordering for `Wall::stacked` from a
//! partial description: fixed hands, fixed indicator tiles, fixed first and
//! last live draws. Every unspecified position is filled from the remaining
//! tiles in kind order, so the result is deterministic.
//!
//! ```
//! use mahjong_master::core::{parse_tiles, House};
//! use mahjong_master::wall::{Stacker, Wall};
//!
//! let tiles = Stacker::new()
//!     .hand(House::East, &parse_tiles("m1 m2 m3").unwrap())
//!     .draws(&parse_tiles("chun").unwrap())
//!     .build()
//!     .unwrap();
//! let (mut wall, hands) = Wall::stacked(tiles).unwrap();
//! assert_eq!(hands[House::East].len(), 14);
//! assert_eq!(wall.draw().unwrap().to_string(), "chun");
//! ```

use crate::core::{House, HouseMap, Tile};
use crate::error::{EngineError, EngineResult};
use crate::hand::TileCounts;

use super::deck::{HAND_SIZE, INDICATOR_SLOTS, LIVE_WALL_SIZE, REPLACEMENT_TILES};

/// Builder for arranged walls.
#[derive(Clone, Debug, Default)]
pub struct Stacker {
    hands: HouseMap<Vec<Tile>>,
    replacements: Vec<Tile>,
    indicators: Vec<Tile>,
    first_draws: Vec<Tile>,
    last_draws: Vec<Tile>,
}

impl Stacker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the start of a seat's dealt hand. For East the 14th tile is the
    /// dealer's first draw.
    #[must_use]
    pub fn hand(mut self, house: House, tiles: &[Tile]) -> Self {
        self.hands[house] = tiles.to_vec();
        self
    }

    /// Fix the first replacement draws.
    #[must_use]
    pub fn replacements(mut self, tiles: &[Tile]) -> Self {
        self.replacements = tiles.to_vec();
        self
    }

    /// Fix the first indicator slots (the first one is revealed at deal).
    #[must_use]
    pub fn indicators(mut self, tiles: &[Tile]) -> Self {
        self.indicators = tiles.to_vec();
        self
    }

    /// Fix the first live-wall draws, in draw order.
    #[must_use]
    pub fn draws(mut self, tiles: &[Tile]) -> Self {
        self.first_draws = tiles.to_vec();
        self
    }

    /// Fix the last live-wall draws, in draw order.
    #[must_use]
    pub fn last_draws(mut self, tiles: &[Tile]) -> Self {
        self.last_draws = tiles.to_vec();
        self
    }

    /// Produce the 136-tile ordering.
    pub fn build(&self) -> EngineResult<Vec<Tile>> {
        let mut pool = TileCounts::full();
        let fixed = self
            .hands
            .values()
            .flatten()
            .chain(&self.replacements)
            .chain(&self.indicators)
            .chain(&self.first_draws)
            .chain(&self.last_draws);
        for &tile in fixed {
            if !pool.remove(tile) {
                return Err(EngineError::InvalidWall {
                    reason: format!("more than four copies of {}", tile),
                });
            }
        }

        for (house, hand) in self.hands.iter() {
            let size = if house.is_dealer() { HAND_SIZE + 1 } else { HAND_SIZE };
            check_len(hand.len(), size, "hand")?;
        }
        check_len(self.replacements.len(), REPLACEMENT_TILES, "replacements")?;
        check_len(self.indicators.len(), INDICATOR_SLOTS, "indicators")?;
        check_len(self.first_draws.len() + self.last_draws.len(), LIVE_WALL_SIZE, "live wall")?;

        let mut filler = pool.to_tiles().into_iter();
        let mut fill = |fixed: &[Tile], size: usize| -> Vec<Tile> {
            let mut out = fixed.to_vec();
            out.extend(filler.by_ref().take(size - fixed.len()));
            out
        };

        let mut tiles = Vec::with_capacity(crate::core::TOTAL_TILES);
        for house in House::ALL {
            let size = if house.is_dealer() { HAND_SIZE + 1 } else { HAND_SIZE };
            tiles.extend(fill(&self.hands[house], size));
        }
        tiles.extend(fill(&self.replacements, REPLACEMENT_TILES));
        tiles.extend(fill(&self.indicators, INDICATOR_SLOTS));
        let middle = LIVE_WALL_SIZE - self.first_draws.len() - self.last_draws.len();
        tiles.extend(&self.first_draws);
        tiles.extend(fill(&[], middle));
        tiles.extend(&self.last_draws);
        Ok(tiles)
    }
}

fn check_len(len: usize, max: usize, what: &str) -> EngineResult<()> {
    if len > max {
        return Err(EngineError::InvalidWall {
            reason: format!("{} holds {} tiles, at most {}", what, len, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_tiles;
    use crate::wall::Wall;

    #[test]
    fn test_build_places_fixed_tiles() {
        let east = parse_tiles("m1 m2 m3 m4 m5 m6 m7 m8 m9 p1 p1 p1 s5 s5").unwrap();
        let tiles = Stacker::new()
            .hand(House::East, &east)
            .indicators(&parse_tiles("n").unwrap())
            .draws(&parse_tiles("haku hatsu").unwrap())
            .last_draws(&parse_tiles("chun").unwrap())
            .build()
            .unwrap();

        let (mut wall, hands) = Wall::stacked(tiles).unwrap();
        assert_eq!(hands[House::East], east);
        assert_eq!(wall.dora_indicators(), &[Tile::NORTH]);
        assert_eq!(wall.draw().unwrap(), Tile::HAKU);
        assert_eq!(wall.draw().unwrap(), Tile::HATSU);

        let mut last = None;
        while let Ok(t) = wall.draw() {
            last = Some(t);
        }
        assert_eq!(last, Some(Tile::CHUN));
    }

    #[test]
    fn test_rejects_fifth_copy() {
        let result = Stacker::new()
            .hand(House::South, &parse_tiles("haku haku haku").unwrap())
            .draws(&parse_tiles("haku haku").unwrap())
            .build();
        assert!(matches!(result, Err(EngineError::InvalidWall { .. })));
    }

    #[test]
    fn test_rejects_oversized_hand() {
        let tiles = parse_tiles("m1 m2 m3 m4 m5 m6 m7 m8 m9 p1 p2 p3 p4 p5").unwrap();
        let result = Stacker::new().hand(House::West, &tiles).build();
        assert!(matches!(result, Err(EngineError::InvalidWall { .. })));
    }
}
