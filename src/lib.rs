//! # mahjong-master
//!
//! Authoritative rules engine for four-player Japanese mahjong.
//!
//! The engine owns the hidden information of a match (the wall and every
//! concealed hand), validates each player input against the rules, and
//! decides what happens next: the next turn, an interruption window after a
//! discard, a win, or an exhaustive draw. Transport, persistence and client
//! rendering live outside this crate.
//!
//! ## Design Principles
//!
//! 1. **One phase at a time**: a match is in exactly one of turn, awaiting
//!    reactions, or ended. Inputs that do not fit the phase are rejected.
//!
//! 2. **Reject before mutating**: every validation runs before the state
//!    is touched, so a failed call leaves the match exactly as it was.
//!
//! 3. **Deterministic**: shuffles come from a seeded `GameRng`. Same seed
//!    and same inputs give the same match.
//!
//! ## Architecture
//!
//! - **Owned state**: `MatchState` is a plain value. `MasterEngine` methods
//!   take it by `&mut` and return typed outcomes.
//!
//! - **Persistent data structures**: discard piles use `im-rs` so snapshots
//!   and per-seat projections clone cheaply.
//!
//! ## Modules
//!
//! - `core`: tiles, seats, melds, RNG, rule configuration
//! - `wall`: shuffled and arranged walls, the dead wall and dora indicators
//! - `hand`: tile counts, complete-hand decomposition, call options, dora
//! - `scoring`: yaku evaluation and point transfers
//! - `engine`: match state, turn/reaction protocol, round advance
//! - `view`: per-seat projection, checksums, binary snapshots
//!
//! ## Example
//!
//! ```
//! use mahjong_master::{DiscardOutcome, GameRng, House, MasterEngine, ReactionAnswers};
//!
//! let engine = MasterEngine::default();
//! let mut state = engine.new_match(&mut GameRng::new(42));
//!
//! let tile = state.drawn().unwrap();
//! match engine.discard(&mut state, House::East, tile, false).unwrap() {
//!     DiscardOutcome::AwaitingReactions(_) => {
//!         engine.resolve_reactions(&mut state, &ReactionAnswers::pass()).unwrap();
//!     }
//!     DiscardOutcome::TurnAdvanced { next, .. } => assert_eq!(next, House::South),
//!     DiscardOutcome::ExhaustiveDraw => unreachable!(),
//! }
//! assert_eq!(state.turn(), Some(House::South));
//! ```

pub mod core;
pub mod error;
pub mod wall;
pub mod hand;
pub mod scoring;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ChiSlot, GameRng, GameRngState, House, HouseMap, Huro, RuleConfig, Suit, Tile,
};

pub use crate::error::{EngineError, EngineResult};

pub use crate::wall::{Stacker, Wall};

pub use crate::hand::{Decomposition, Mentsu, TileCounts};

pub use crate::scoring::{Evaluation, WinContext, WinTile, YakuKind};

pub use crate::engine::{
    CallKind, DiscardOutcome, Eligibility, MasterEngine, MatchState, Phase, QuadOutcome,
    ReactionAnswers, ReactionOutcome, ReactionWindow, RoundAdvance, RoundEnd, Standing,
    WinOutcome,
};

pub use crate::view::{checksum, checksum_for, project, PlayerView};
