//! Fan to points, and settlement transfers.

use crate::core::{House, HouseMap};

/// Round up to the next multiple of 100.
#[must_use]
pub fn ceil_100(points: i64) -> i64 {
    (points + 99).div_euclid(100) * 100
}

/// Total value of a win worth `fan`.
///
/// | fan    | points |
/// |--------|--------|
/// | 0-1    | 1000   |
/// | 2      | 2000   |
/// | 3      | 3900   |
/// | 4      | 7700   |
/// | 5      | 8000   |
/// | 6-7    | 12000  |
/// | 8-10   | 16000  |
/// | 11-12  | 24000  |
/// | 13+    | 32000  |
///
/// The dealer receives half again, rounded up to 100.
#[must_use]
pub fn fan_to_points(fan: u32, is_dealer: bool) -> i64 {
    let base = match fan {
        0 | 1 => 1_000,
        2 => 2_000,
        3 => 3_900,
        4 => 7_700,
        5 => 8_000,
        6 | 7 => 12_000,
        8..=10 => 16_000,
        11 | 12 => 24_000,
        _ => 32_000,
    };
    if is_dealer {
        ceil_100(base * 3 / 2)
    } else {
        base
    }
}

/// Point changes for a self-drawn win.
///
/// A dealer winner collects a third of the total from each seat. A
/// non-dealer winner collects a quarter from each non-dealer and half from
/// the dealer. Shares are rounded up to 100 and the winner receives
/// exactly what the others pay.
#[must_use]
pub fn tsumo_deltas(winner: House, fan: u32) -> HouseMap<i64> {
    let total = fan_to_points(fan, winner.is_dealer());
    let parts = if winner.is_dealer() { 3 } else { 4 };
    let share = ceil_100((total + parts - 1) / parts);

    let mut deltas = HouseMap::with_value(0);
    let mut collected = 0;
    for payer in winner.others() {
        let pay = if payer.is_dealer() { share * 2 } else { share };
        deltas[payer] = -pay;
        collected += pay;
    }
    deltas[winner] = collected;
    deltas
}

/// Points a discarder pays to one ron winner.
#[must_use]
pub fn ron_points(winner: House, fan: u32) -> i64 {
    fan_to_points(fan, winner.is_dealer())
}

/// Point changes for one ron claimant against the discarder.
#[must_use]
pub fn ron_deltas(winner: House, discarder: House, fan: u32) -> HouseMap<i64> {
    let points = ron_points(winner, fan);
    let mut deltas = HouseMap::with_value(0);
    deltas[winner] = points;
    deltas[discarder] = -points;
    deltas
}
