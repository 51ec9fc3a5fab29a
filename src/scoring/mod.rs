//! Scoring: the rule table, fan to points, and settlement transfers.
//!
//! ## Example
//!
//! ```
//! use mahjong_master::core::{parse_tiles, House};
//! use mahjong_master::scoring::{evaluate, tsumo_deltas, WinContext, WinTile};
//!
//! let hand = parse_tiles("m1 m2 m3 m4 m5 m6 m7 m8 m9 p2 p3 p4 s5").unwrap();
//! let ctx = WinContext {
//!     seat: House::East,
//!     round_wind: House::East,
//!     hand: &hand,
//!     melds: &[],
//!     win: WinTile::Tsumo("s5".parse().unwrap()),
//!     riichi: false,
//! };
//! let evaluation = evaluate(&ctx, &[]).unwrap();
//! assert_eq!(evaluation.fan, 3);
//!
//! let deltas = tsumo_deltas(House::East, evaluation.fan);
//! assert_eq!(deltas[House::South], -2_000);
//! assert_eq!(deltas.values().sum::<i64>(), 0);
//! ```

mod points;
mod yaku;

pub use points::{ceil_100, fan_to_points, ron_deltas, ron_points, tsumo_deltas};
pub use yaku::{
    evaluate, Evaluation, Group, Reading, WinContext, WinSlot, WinTile, Yaku, YakuHit, YakuKind,
    YAKUMAN_FAN, YAKU_LIST,
};
