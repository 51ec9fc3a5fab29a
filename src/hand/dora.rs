//! Dora counting.

use crate::core::{Huro, Tile};

/// Count owned tiles matching the active dora kinds.
///
/// Every dora entry counts separately, so a kind indicated twice scores
/// twice per copy. Quads count four copies.
#[must_use]
pub fn count_owned_dora(hand: &[Tile], melds: &[Huro], doras: &[Tile]) -> u32 {
    let owned = hand
        .iter()
        .copied()
        .chain(melds.iter().flat_map(|m| m.tiles()));
    owned
        .map(|tile| doras.iter().filter(|&&d| d == tile).count() as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_tiles, House};

    #[test]
    fn test_counts_hand_and_melds() {
        let hand = parse_tiles("m1 m1 p5 s9").unwrap();
        let melds = [
            Huro::Ankan { tile: Tile::HAKU },
            Huro::Pon { tile: Tile::EAST, from: House::South },
        ];
        let doras = parse_tiles("m1 haku").unwrap();
        assert_eq!(count_owned_dora(&hand, &melds, &doras), 6);
    }

    #[test]
    fn test_repeated_indicator_counts_twice() {
        let hand = parse_tiles("p5 p5").unwrap();
        let doras = parse_tiles("p5 p5").unwrap();
        assert_eq!(count_owned_dora(&hand, &[], &doras), 4);
        assert_eq!(count_owned_dora(&hand, &[], &[]), 0);
    }
}
