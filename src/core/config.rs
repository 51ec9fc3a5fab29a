//! Rule configuration.
//!
//! The engine never hardcodes table stakes or game length; callers pick
//! them via `RuleConfig` (all fields have sensible defaults).
//!
//! ```
//! use mahjong_master::core::{House, RuleConfig};
//!
//! let config = RuleConfig::default()
//!     .with_starting_points(30_000)
//!     .with_last_round_wind(House::East);
//! assert_eq!(config.starting_points, 30_000);
//! assert_eq!(config.riichi_cost, 1_000);
//! ```

use serde::{Deserialize, Serialize};

use super::house::House;

/// Table rules for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Points every seat starts the match with.
    pub starting_points: i64,

    /// Points a seat must hold to declare riichi.
    pub riichi_cost: i64,

    /// Last round wind played (East = east-only, South = half game).
    pub last_round_wind: House,

    /// End the match as soon as a seat drops below zero.
    pub end_on_negative: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            starting_points: 25_000,
            riichi_cost: 1_000,
            last_round_wind: House::South,
            end_on_negative: true,
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn with_starting_points(mut self, points: i64) -> Self {
        self.starting_points = points;
        self
    }

    #[must_use]
    pub fn with_riichi_cost(mut self, cost: i64) -> Self {
        self.riichi_cost = cost;
        self
    }

    #[must_use]
    pub fn with_last_round_wind(mut self, wind: House) -> Self {
        self.last_round_wind = wind;
        self
    }

    #[must_use]
    pub fn with_end_on_negative(mut self, enabled: bool) -> Self {
        self.end_on_negative = enabled;
        self
    }
}
