//! Hand decomposition and completeness.
//!
//! Only the concealed part of a hand is decomposed: declared melds are
//! already fixed sets and never take part in the search. A concealed part
//! of `3k + 2` tiles is complete when it splits into one pair plus `k`
//! sets. With no melds (14 tiles) two irregular shapes also count: seven
//! distinct pairs, and the thirteen orphans.
//!
//! ```
//! use mahjong_master::core::parse_tiles;
//! use mahjong_master::hand::{decompositions, is_complete, winning_tiles};
//!
//! let hand = parse_tiles("m1 m1 m1 m2 m2 m2 m3 m3 m3 p5 p6 p7 s9 s9").unwrap();
//! assert!(is_complete(&hand));
//! assert_eq!(decompositions(&hand).len(), 2);
//!
//! let waiting = parse_tiles("p2 p3 s4 s4 s4 haku haku m1 m2 m3 m7 m8 m9").unwrap();
//! let waits: Vec<String> = winning_tiles(&waiting).iter().map(|t| t.to_string()).collect();
//! assert_eq!(waits, vec!["p1", "p4"]);
//! ```

use smallvec::SmallVec;

use crate::core::Tile;

use super::counts::TileCounts;

/// Concealed size of a hand with no melds, including the winning tile.
pub const FULL_HAND: usize = 14;

/// One three-tile set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mentsu {
    /// Three of a kind.
    Triplet(Tile),
    /// Three consecutive tiles of one suit, named by the lowest.
    Sequence(Tile),
}

impl Mentsu {
    #[must_use]
    pub fn tiles(self) -> [Tile; 3] {
        match self {
            Mentsu::Triplet(t) => [t, t, t],
            Mentsu::Sequence(low) => {
                // Sequences are only ever built from a low tile with two successors.
                let mid = low.next_in_sequence().unwrap_or(low);
                let high = mid.next_in_sequence().unwrap_or(mid);
                [low, mid, high]
            }
        }
    }

    #[must_use]
    pub fn contains(self, tile: Tile) -> bool {
        self.tiles().contains(&tile)
    }

    #[must_use]
    pub fn is_triplet(self) -> bool {
        matches!(self, Mentsu::Triplet(_))
    }

    /// Lowest tile of the set.
    #[must_use]
    pub fn base(self) -> Tile {
        match self {
            Mentsu::Triplet(t) | Mentsu::Sequence(t) => t,
        }
    }
}

/// One way to read a complete concealed hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decomposition {
    /// A pair plus sets (the common shape).
    Standard {
        pair: Tile,
        sets: SmallVec<[Mentsu; 4]>,
    },
    /// Seven distinct pairs, ascending.
    SevenPairs { pairs: [Tile; 7] },
    /// One of each terminal and honor plus a duplicate.
    ThirteenOrphans { pair: Tile },
}

impl Decomposition {
    /// The pair, for shapes that have exactly one.
    #[must_use]
    pub fn pair(&self) -> Option<Tile> {
        match self {
            Decomposition::Standard { pair, .. } | Decomposition::ThirteenOrphans { pair } => {
                Some(*pair)
            }
            Decomposition::SevenPairs { .. } => None,
        }
    }

    #[must_use]
    pub fn sets(&self) -> &[Mentsu] {
        match self {
            Decomposition::Standard { sets, .. } => sets,
            _ => &[],
        }
    }
}

/// Every decomposition of a concealed `3k + 2` tile bag.
///
/// Returns an empty list for incomplete hands or wrong tile counts.
#[must_use]
pub fn decompositions(tiles: &[Tile]) -> Vec<Decomposition> {
    decompose_counts(&TileCounts::from_tiles(tiles))
}

/// `decompositions` over a histogram.
#[must_use]
pub fn decompose_counts(counts: &TileCounts) -> Vec<Decomposition> {
    let total = counts.total();
    let mut out = Vec::new();
    if total % 3 != 2 {
        return out;
    }

    if total == FULL_HAND {
        if let Some(pair) = thirteen_orphans(counts) {
            out.push(Decomposition::ThirteenOrphans { pair });
            return out;
        }
    }

    for pair in Tile::all().filter(|&t| counts[t] >= 2) {
        let mut rest = *counts;
        rest.remove_n(pair, 2);
        let mut found = Vec::new();
        collect_sets(&mut rest, 0, &mut SmallVec::new(), &mut found);
        out.extend(
            found
                .into_iter()
                .map(|sets| Decomposition::Standard { pair, sets }),
        );
    }

    if total == FULL_HAND {
        if let Some(pairs) = seven_pairs(counts) {
            out.push(Decomposition::SevenPairs { pairs });
        }
    }
    out
}

/// Whether a concealed `3k + 2` tile bag is a finished hand.
#[must_use]
pub fn is_complete(tiles: &[Tile]) -> bool {
    is_complete_counts(&TileCounts::from_tiles(tiles))
}

/// `is_complete` over a histogram, without building decompositions.
#[must_use]
pub fn is_complete_counts(counts: &TileCounts) -> bool {
    let total = counts.total();
    if total % 3 != 2 {
        return false;
    }
    if total == FULL_HAND && (thirteen_orphans(counts).is_some() || seven_pairs(counts).is_some()) {
        return true;
    }
    Tile::all().filter(|&t| counts[t] >= 2).any(|pair| {
        let mut rest = *counts;
        rest.remove_n(pair, 2);
        only_sets(&mut rest, 0)
    })
}

/// Tile kinds that would complete a concealed `3k + 1` tile bag.
///
/// A kind the hand already holds four of cannot be drawn and is skipped.
#[must_use]
pub fn winning_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut counts = TileCounts::from_tiles(tiles);
    if counts.total() % 3 != 1 {
        return Vec::new();
    }
    let mut waits = Vec::new();
    for tile in Tile::all() {
        if counts[tile] >= 4 {
            continue;
        }
        counts.add(tile);
        if is_complete_counts(&counts) {
            waits.push(tile);
        }
        counts.remove(tile);
    }
    waits
}

/// Whether a concealed `3k + 1` tile bag is one tile from complete.
#[must_use]
pub fn is_ready(tiles: &[Tile]) -> bool {
    !winning_tiles(tiles).is_empty()
}

fn collect_sets(
    counts: &mut TileCounts,
    from: usize,
    current: &mut SmallVec<[Mentsu; 4]>,
    out: &mut Vec<SmallVec<[Mentsu; 4]>>,
) {
    let Some(tile) = Tile::all().skip(from).find(|&t| counts[t] > 0) else {
        out.push(current.clone());
        return;
    };

    if counts.remove_n(tile, 3) {
        current.push(Mentsu::Triplet(tile));
        collect_sets(counts, tile.index(), current, out);
        current.pop();
        for _ in 0..3 {
            counts.add(tile);
        }
    }

    if let Some([mid, high]) = run_above(tile) {
        if counts.contains(mid) && counts.contains(high) {
            counts.remove(tile);
            counts.remove(mid);
            counts.remove(high);
            current.push(Mentsu::Sequence(tile));
            collect_sets(counts, tile.index(), current, out);
            current.pop();
            counts.add(tile);
            counts.add(mid);
            counts.add(high);
        }
    }
}

// Greedy lowest-first check: the lowest remaining tile must start a triplet
// or a run, so no branching is lost by taking it first.
fn only_sets(counts: &mut TileCounts, from: usize) -> bool {
    let Some(tile) = Tile::all().skip(from).find(|&t| counts[t] > 0) else {
        return true;
    };

    if counts.remove_n(tile, 3) {
        let ok = only_sets(counts, tile.index());
        for _ in 0..3 {
            counts.add(tile);
        }
        if ok {
            return true;
        }
    }

    if let Some([mid, high]) = run_above(tile) {
        if counts.contains(mid) && counts.contains(high) {
            counts.remove(tile);
            counts.remove(mid);
            counts.remove(high);
            let ok = only_sets(counts, tile.index());
            counts.add(tile);
            counts.add(mid);
            counts.add(high);
            return ok;
        }
    }
    false
}

fn run_above(tile: Tile) -> Option<[Tile; 2]> {
    let mid = tile.next_in_sequence()?;
    let high = mid.next_in_sequence()?;
    Some([mid, high])
}

fn thirteen_orphans(counts: &TileCounts) -> Option<Tile> {
    let mut pair = None;
    for tile in Tile::all() {
        let c = counts[tile];
        if !tile.is_terminal_or_honor() {
            if c != 0 {
                return None;
            }
            continue;
        }
        match c {
            1 => {}
            2 if pair.is_none() => pair = Some(tile),
            _ => return None,
        }
    }
    pair
}

fn seven_pairs(counts: &TileCounts) -> Option<[Tile; 7]> {
    let mut pairs = [Tile::EAST; 7];
    let mut n = 0;
    for (tile, c) in counts.iter() {
        if c != 2 || n == 7 {
            return None;
        }
        pairs[n] = tile;
        n += 1;
    }
    (n == 7).then_some(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_tiles;

    fn tiles(s: &str) -> Vec<Tile> {
        parse_tiles(s).unwrap()
    }

    #[test]
    fn test_standard_hand() {
        let hand = tiles("m1 m2 m3 p4 p5 p6 s7 s8 s9 e e e haku haku");
        let decomps = decompositions(&hand);
        assert_eq!(decomps.len(), 1);
        assert_eq!(decomps[0].pair(), Some(Tile::HAKU));
        assert_eq!(decomps[0].sets().len(), 4);
        assert!(is_complete(&hand));
    }

    #[test]
    fn test_incomplete_hand() {
        let hand = tiles("m1 m2 m4 p4 p5 p6 s7 s8 s9 e e e haku haku");
        assert!(decompositions(&hand).is_empty());
        assert!(!is_complete(&hand));
    }

    #[test]
    fn test_wrong_size_is_never_complete() {
        let hand = tiles("m1 m2 m3 p4 p5 p6 s7 s8 s9 e e e haku");
        assert!(!is_complete(&hand));
        assert!(decompositions(&hand).is_empty());
    }

    #[test]
    fn test_multiple_decompositions() {
        // 111222333 reads as three triplets or three identical runs.
        let hand = tiles("m1 m1 m1 m2 m2 m2 m3 m3 m3 p5 p6 p7 s9 s9");
        let decomps = decompositions(&hand);
        assert_eq!(decomps.len(), 2);
        assert!(decomps
            .iter()
            .any(|d| d.sets().iter().all(|m| m.is_triplet())));
        assert!(decomps
            .iter()
            .any(|d| d.sets().iter().filter(|m| !m.is_triplet()).count() == 4));
    }

    #[test]
    fn test_seven_pairs() {
        let hand = tiles("m1 m1 m5 m5 p2 p2 p8 p8 s3 s3 e e chun chun");
        let decomps = decompositions(&hand);
        assert!(decomps
            .iter()
            .any(|d| matches!(d, Decomposition::SevenPairs { .. })));
        assert!(is_complete(&hand));
    }

    #[test]
    fn test_four_of_a_kind_is_not_two_pairs() {
        let hand = tiles("m1 m1 m1 m1 p2 p2 p8 p8 s3 s3 e e chun chun");
        assert!(!is_complete(&hand));
    }

    #[test]
    fn test_seven_pairs_that_also_read_standard() {
        let hand = tiles("m1 m1 m2 m2 m3 m3 p4 p4 p5 p5 p6 p6 s9 s9");
        let decomps = decompositions(&hand);
        assert!(decomps
            .iter()
            .any(|d| matches!(d, Decomposition::SevenPairs { .. })));
        assert!(decomps
            .iter()
            .any(|d| matches!(d, Decomposition::Standard { .. })));
    }

    #[test]
    fn test_thirteen_orphans() {
        let hand = tiles("m1 m9 p1 p9 s1 s9 e s w n haku hatsu chun chun");
        let decomps = decompositions(&hand);
        assert_eq!(decomps, vec![Decomposition::ThirteenOrphans { pair: Tile::CHUN }]);

        let waiting = tiles("m1 m9 p1 p9 s1 s9 e s w n haku hatsu chun");
        assert_eq!(winning_tiles(&waiting).len(), 13);
    }

    #[test]
    fn test_melded_hand_sizes() {
        // After two calls, five concealed tiles remain.
        assert!(is_complete(&tiles("p3 p4 p5 s2 s2")));
        assert_eq!(winning_tiles(&tiles("p3 p4 s2 s2")), tiles("p2 p5"));
        assert!(is_complete(&tiles("haku haku")));
        assert_eq!(winning_tiles(&tiles("haku")), tiles("haku"));
    }

    #[test]
    fn test_winning_tiles_excludes_exhausted_kind() {
        // m1 m1 m1 m1 m2 m3 ... waits on m4 but never a fifth m1.
        let hand = tiles("m1 m1 m1 m1 m2 m3 p5 p6 p7 s1 s2 s3 e");
        let waits = winning_tiles(&hand);
        assert!(!waits.contains(&"m1".parse().unwrap()));
        assert!(waits.contains(&Tile::EAST));
    }

    #[test]
    fn test_ready() {
        assert!(is_ready(&tiles("m1 m2 m3 m4 m5 m6 m7 m8 m9 p2 p3 p4 s5")));
        assert!(!is_ready(&tiles("m1 m3 m5 m7 m9 p2 p4 p6 p8 s1 s3 e haku")));
    }

    #[test]
    fn test_mentsu_tiles() {
        let seq = Mentsu::Sequence("p7".parse().unwrap());
        assert_eq!(seq.tiles(), ["p7", "p8", "p9"].map(|s| s.parse::<Tile>().unwrap()));
        assert!(seq.contains("p8".parse().unwrap()));
        assert_eq!(Mentsu::Triplet(Tile::HAKU).tiles(), [Tile::HAKU; 3]);
    }
}
