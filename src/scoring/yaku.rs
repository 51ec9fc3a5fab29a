//! Winning-hand rules and hand evaluation.
//!
//! The rule table is a closed `const` list of predicates. Each predicate
//! sees one `Reading` of the winning hand: a decomposition of the
//! concealed tiles, the declared melds, and which group the winning tile
//! completed. `evaluate` tries every reading and keeps the best one.
//!
//! ## Yakuman
//!
//! When any yakuman applies, only yakuman are counted and dora is ignored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::{House, Huro, Suit, Tile};
use crate::hand::{count_owned_dora, decompose_counts, Decomposition, Mentsu, TileCounts};

/// Fan at which a rule counts as a yakuman.
pub const YAKUMAN_FAN: u32 = 13;

/// How the winning tile was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinTile {
    /// Drawn by the winner.
    Tsumo(Tile),
    /// Claimed from another seat's discard.
    Ron(Tile),
}

impl WinTile {
    #[must_use]
    pub fn tile(self) -> Tile {
        match self {
            WinTile::Tsumo(t) | WinTile::Ron(t) => t,
        }
    }

    #[must_use]
    pub fn is_tsumo(self) -> bool {
        matches!(self, WinTile::Tsumo(_))
    }
}

/// Everything the rule table may look at.
#[derive(Clone, Copy, Debug)]
pub struct WinContext<'a> {
    pub seat: House,
    pub round_wind: House,
    /// Concealed tiles, not including the winning tile.
    pub hand: &'a [Tile],
    pub melds: &'a [Huro],
    pub win: WinTile,
    pub riichi: bool,
}

impl WinContext<'_> {
    /// No melds other than concealed quads.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.melds.iter().all(|m| !m.is_open())
    }
}

/// Every rule in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YakuKind {
    Riichi,
    MenzenTsumo,
    Tanyao,
    Pinfu,
    Iipeikou,
    Haku,
    Hatsu,
    Chun,
    SeatWind,
    RoundWind,
    Chiitoitsu,
    Toitoi,
    Sanankou,
    Sanshoku,
    Ittsu,
    Shousangen,
    Honroutou,
    Honitsu,
    Chinitsu,
    Kokushi,
    Suuankou,
    Daisangen,
    Tsuuiisou,
}

impl YakuKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            YakuKind::Riichi => "riichi",
            YakuKind::MenzenTsumo => "menzen-tsumo",
            YakuKind::Tanyao => "tanyao",
            YakuKind::Pinfu => "pinfu",
            YakuKind::Iipeikou => "iipeikou",
            YakuKind::Haku => "haku",
            YakuKind::Hatsu => "hatsu",
            YakuKind::Chun => "chun",
            YakuKind::SeatWind => "seat-wind",
            YakuKind::RoundWind => "round-wind",
            YakuKind::Chiitoitsu => "chiitoitsu",
            YakuKind::Toitoi => "toitoi",
            YakuKind::Sanankou => "sanankou",
            YakuKind::Sanshoku => "sanshoku",
            YakuKind::Ittsu => "ittsu",
            YakuKind::Shousangen => "shousangen",
            YakuKind::Honroutou => "honroutou",
            YakuKind::Honitsu => "honitsu",
            YakuKind::Chinitsu => "chinitsu",
            YakuKind::Kokushi => "kokushi",
            YakuKind::Suuankou => "suuankou",
            YakuKind::Daisangen => "daisangen",
            YakuKind::Tsuuiisou => "tsuuiisou",
        }
    }
}

impl fmt::Display for YakuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One table entry.
pub struct Yaku {
    pub kind: YakuKind,
    pub func: fn(&Reading<'_>) -> bool,
    /// Fan with a closed hand.
    pub fan_closed: u32,
    /// Fan with an open hand; 0 means the rule needs a closed hand.
    pub fan_open: u32,
}

impl fmt::Debug for Yaku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.kind, self.fan_closed, self.fan_open)
    }
}

macro_rules! yaku {
    ($kind:ident, $f:expr, $closed:expr, $open:expr) => {
        Yaku {
            kind: YakuKind::$kind,
            func: $f,
            fan_closed: $closed,
            fan_open: $open,
        }
    };
}

/// The rule table, in reporting order.
pub const YAKU_LIST: &[Yaku] = &[
    yaku!(Riichi, is_riichi, 1, 0),
    yaku!(MenzenTsumo, is_menzen_tsumo, 1, 0),
    yaku!(Tanyao, is_tanyao, 1, 1),
    yaku!(Pinfu, is_pinfu, 1, 0),
    yaku!(Iipeikou, is_iipeikou, 1, 0),
    yaku!(Haku, is_haku, 1, 1),
    yaku!(Hatsu, is_hatsu, 1, 1),
    yaku!(Chun, is_chun, 1, 1),
    yaku!(SeatWind, is_seat_wind, 1, 1),
    yaku!(RoundWind, is_round_wind, 1, 1),
    yaku!(Chiitoitsu, is_chiitoitsu, 2, 0),
    yaku!(Toitoi, is_toitoi, 2, 2),
    yaku!(Sanankou, is_sanankou, 2, 2),
    yaku!(Sanshoku, is_sanshoku, 2, 1),
    yaku!(Ittsu, is_ittsu, 2, 1),
    yaku!(Shousangen, is_shousangen, 2, 2),
    yaku!(Honroutou, is_honroutou, 2, 2),
    yaku!(Honitsu, is_honitsu, 3, 2),
    yaku!(Chinitsu, is_chinitsu, 6, 5),
    yaku!(Kokushi, is_kokushi, 13, 0),
    yaku!(Suuankou, is_suuankou, 13, 0),
    yaku!(Daisangen, is_daisangen, 13, 13),
    yaku!(Tsuuiisou, is_tsuuiisou, 13, 13),
];

/// A rule that applied, with the fan it was worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YakuHit {
    pub kind: YakuKind,
    pub fan: u32,
}

/// Result of scoring a winning hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    pub yaku: SmallVec<[YakuHit; 8]>,
    /// Owned dora (0 for yakuman).
    pub dora: u32,
    /// Rule fan plus dora.
    pub fan: u32,
}

impl Evaluation {
    #[must_use]
    pub fn is_yakuman(&self) -> bool {
        self.yaku.iter().any(|y| y.fan >= YAKUMAN_FAN)
    }

    #[must_use]
    pub fn has(&self, kind: YakuKind) -> bool {
        self.yaku.iter().any(|y| y.kind == kind)
    }
}

/// A set in a reading, with whether it counts as concealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Group {
    pub mentsu: Mentsu,
    /// Formed entirely from self-drawn tiles (concealed quads included).
    pub concealed: bool,
}

/// Where the winning tile sits in a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinSlot {
    /// Completed the pair, or an irregular shape.
    Pair,
    /// Completed the group at this index.
    Group(usize),
}

/// One interpretation of a winning hand, as seen by the rule table.
pub struct Reading<'a> {
    pub ctx: &'a WinContext<'a>,
    pub shape: &'a Decomposition,
    /// Concealed sets first, then declared melds.
    pub groups: SmallVec<[Group; 4]>,
    pub win_slot: WinSlot,
    /// All fourteen (or more, with quads) owned tiles.
    pub tiles: &'a TileCounts,
}

impl Reading<'_> {
    fn closed(&self) -> bool {
        self.ctx.is_closed()
    }

    fn triplets(&self) -> impl Iterator<Item = Tile> + '_ {
        self.groups
            .iter()
            .filter(|g| g.mentsu.is_triplet())
            .map(|g| g.mentsu.base())
    }

    fn sequences(&self) -> impl Iterator<Item = Tile> + '_ {
        self.groups
            .iter()
            .filter(|g| !g.mentsu.is_triplet())
            .map(|g| g.mentsu.base())
    }

    fn has_triplet(&self, tile: Tile) -> bool {
        self.triplets().any(|t| t == tile)
    }

    fn concealed_triplets(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.concealed && g.mentsu.is_triplet())
            .count()
    }

    fn is_standard(&self) -> bool {
        matches!(self.shape, Decomposition::Standard { .. })
    }

    fn all_tiles(&self, pred: impl Fn(Tile) -> bool) -> bool {
        self.tiles.iter().all(|(t, _)| pred(t))
    }

    fn is_value_tile(&self, tile: Tile) -> bool {
        tile.is_dragon()
            || tile == self.ctx.seat.wind_tile()
            || tile == self.ctx.round_wind.wind_tile()
    }

    fn suits(&self) -> SmallVec<[Suit; 4]> {
        let mut suits: SmallVec<[Suit; 4]> = SmallVec::new();
        for (tile, _) in self.tiles.iter() {
            if !suits.contains(&tile.suit()) {
                suits.push(tile.suit());
            }
        }
        suits
    }
}

fn is_riichi(r: &Reading<'_>) -> bool {
    r.ctx.riichi
}

fn is_menzen_tsumo(r: &Reading<'_>) -> bool {
    r.closed() && r.ctx.win.is_tsumo()
}

fn is_tanyao(r: &Reading<'_>) -> bool {
    r.all_tiles(Tile::is_simple)
}

fn is_pinfu(r: &Reading<'_>) -> bool {
    if !r.ctx.melds.is_empty() || !r.is_standard() || r.triplets().next().is_some() {
        return false;
    }
    if r.shape.pair().map_or(true, |p| r.is_value_tile(p)) {
        return false;
    }
    // Two-sided wait: the winning tile is an end of its run, and the run
    // could also have been completed from the other side.
    let WinSlot::Group(i) = r.win_slot else {
        return false;
    };
    let low = r.groups[i].mentsu.base();
    let win = r.ctx.win.tile();
    let [_, _, high] = r.groups[i].mentsu.tiles();
    (win == low && low.rank() != Some(7)) || (win == high && low.rank() != Some(1))
}

fn is_iipeikou(r: &Reading<'_>) -> bool {
    if !r.closed() {
        return false;
    }
    let runs: SmallVec<[Tile; 4]> = r.sequences().collect();
    runs.iter()
        .enumerate()
        .any(|(i, a)| runs[i + 1..].contains(a))
}

fn is_haku(r: &Reading<'_>) -> bool {
    r.has_triplet(Tile::HAKU)
}

fn is_hatsu(r: &Reading<'_>) -> bool {
    r.has_triplet(Tile::HATSU)
}

fn is_chun(r: &Reading<'_>) -> bool {
    r.has_triplet(Tile::CHUN)
}

fn is_seat_wind(r: &Reading<'_>) -> bool {
    r.has_triplet(r.ctx.seat.wind_tile())
}

fn is_round_wind(r: &Reading<'_>) -> bool {
    r.has_triplet(r.ctx.round_wind.wind_tile())
}

fn is_chiitoitsu(r: &Reading<'_>) -> bool {
    matches!(r.shape, Decomposition::SevenPairs { .. })
}

fn is_toitoi(r: &Reading<'_>) -> bool {
    r.is_standard() && r.sequences().next().is_none()
}

fn is_sanankou(r: &Reading<'_>) -> bool {
    r.concealed_triplets() == 3
}

fn is_sanshoku(r: &Reading<'_>) -> bool {
    let runs: SmallVec<[Tile; 4]> = r.sequences().collect();
    runs.iter().any(|low| {
        let rank = low.rank();
        [Suit::Man, Suit::Pin, Suit::Sou]
            .iter()
            .all(|&suit| runs.iter().any(|t| t.suit() == suit && t.rank() == rank))
    })
}

fn is_ittsu(r: &Reading<'_>) -> bool {
    let runs: SmallVec<[Tile; 4]> = r.sequences().collect();
    [Suit::Man, Suit::Pin, Suit::Sou].iter().any(|&suit| {
        [1, 4, 7]
            .iter()
            .all(|&rank| runs.iter().any(|t| t.suit() == suit && t.rank() == Some(rank)))
    })
}

fn is_shousangen(r: &Reading<'_>) -> bool {
    let dragon_sets = r.triplets().filter(|t| t.is_dragon()).count();
    dragon_sets == 2 && r.shape.pair().map_or(false, Tile::is_dragon)
}

fn is_honroutou(r: &Reading<'_>) -> bool {
    r.all_tiles(Tile::is_terminal_or_honor)
        && r.tiles.iter().any(|(t, _)| t.is_terminal())
        && r.tiles.iter().any(|(t, _)| t.is_honor())
}

fn is_honitsu(r: &Reading<'_>) -> bool {
    let suits = r.suits();
    suits.len() == 2 && suits.contains(&Suit::Honor)
}

fn is_chinitsu(r: &Reading<'_>) -> bool {
    let suits = r.suits();
    suits.len() == 1 && suits[0] != Suit::Honor
}

fn is_kokushi(r: &Reading<'_>) -> bool {
    matches!(r.shape, Decomposition::ThirteenOrphans { .. })
}

fn is_suuankou(r: &Reading<'_>) -> bool {
    r.concealed_triplets() == 4
}

fn is_daisangen(r: &Reading<'_>) -> bool {
    r.triplets().filter(|t| t.is_dragon()).count() == 3
}

fn is_tsuuiisou(r: &Reading<'_>) -> bool {
    r.all_tiles(Tile::is_honor)
}

fn meld_group(meld: &Huro) -> Group {
    match *meld {
        Huro::Chi { tiles, .. } => Group {
            mentsu: Mentsu::Sequence(tiles[0]),
            concealed: false,
        },
        Huro::Pon { tile, .. } | Huro::Minkan { tile, .. } => Group {
            mentsu: Mentsu::Triplet(tile),
            concealed: false,
        },
        Huro::Ankan { tile } => Group {
            mentsu: Mentsu::Triplet(tile),
            concealed: true,
        },
    }
}

fn score_reading(reading: &Reading<'_>) -> SmallVec<[YakuHit; 8]> {
    let closed = reading.closed();
    let hits: SmallVec<[YakuHit; 8]> = YAKU_LIST
        .iter()
        .filter_map(|y| {
            let fan = if closed { y.fan_closed } else { y.fan_open };
            (fan > 0 && (y.func)(reading)).then_some(YakuHit { kind: y.kind, fan })
        })
        .collect();

    if hits.iter().any(|h| h.fan >= YAKUMAN_FAN) {
        hits.into_iter().filter(|h| h.fan >= YAKUMAN_FAN).collect()
    } else {
        hits
    }
}

/// Score a winning hand against the active dora kinds.
///
/// Returns `None` when the concealed tiles plus the winning tile do not
/// form a complete hand. Otherwise the best-scoring reading is returned.
#[must_use]
pub fn evaluate(ctx: &WinContext<'_>, doras: &[Tile]) -> Option<Evaluation> {
    let win = ctx.win.tile();
    let mut concealed = TileCounts::from_tiles(ctx.hand);
    concealed.add(win);

    let shapes = decompose_counts(&concealed);
    if shapes.is_empty() {
        return None;
    }

    let mut owned = concealed;
    for meld in ctx.melds {
        for tile in meld.tiles() {
            owned.add(tile);
        }
    }
    let melds: SmallVec<[Group; 4]> = ctx.melds.iter().map(meld_group).collect();

    let mut best: Option<SmallVec<[YakuHit; 8]>> = None;
    let mut best_fan = 0;
    for shape in &shapes {
        for (win_slot, groups) in readings(shape, ctx, &melds) {
            let reading = Reading {
                ctx,
                shape,
                groups,
                win_slot,
                tiles: &owned,
            };
            let hits = score_reading(&reading);
            let fan: u32 = hits.iter().map(|h| h.fan).sum();
            if best.is_none() || fan > best_fan {
                best_fan = fan;
                best = Some(hits);
            }
        }
    }

    let yaku = best?;
    let mut evaluation = Evaluation {
        yaku,
        dora: 0,
        fan: best_fan,
    };
    if !evaluation.is_yakuman() {
        let mut hand = ctx.hand.to_vec();
        hand.push(win);
        evaluation.dora = count_owned_dora(&hand, ctx.melds, doras);
        evaluation.fan += evaluation.dora;
    }
    Some(evaluation)
}

// Every placement of the winning tile inside one decomposition. A ron
// completes its group with a claimed tile, so that group is not concealed.
fn readings(
    shape: &Decomposition,
    ctx: &WinContext<'_>,
    melds: &[Group],
) -> Vec<(WinSlot, SmallVec<[Group; 4]>)> {
    let win = ctx.win.tile();
    let base: SmallVec<[Group; 4]> = shape
        .sets()
        .iter()
        .map(|&mentsu| Group {
            mentsu,
            concealed: true,
        })
        .chain(melds.iter().copied())
        .collect();

    // Seven pairs and thirteen orphans always read as a single group.
    let mut out = Vec::new();
    let whole_hand = !matches!(shape, Decomposition::Standard { .. });
    if whole_hand || shape.pair() == Some(win) {
        out.push((WinSlot::Pair, base.clone()));
    }
    for (i, set) in shape.sets().iter().enumerate() {
        let duplicate = shape.sets()[..i].contains(set);
        if !set.contains(win) || duplicate {
            continue;
        }
        let mut groups = base.clone();
        if !ctx.win.is_tsumo() {
            groups[i].concealed = false;
        }
        out.push((WinSlot::Group(i), groups));
    }
    out
}
