//! The match state machine.
//!
//! ## Key Types
//!
//! - `MatchState`: the single authoritative aggregate for one kyoku
//! - `Phase`: turn / awaiting reactions / ended, exactly one at a time
//! - `MasterEngine`: validated transitions on a `MatchState`
//! - `ReactionWindow`, `Eligibility`, `ReactionAnswers`: call arbitration
//! - `DiscardOutcome`, `QuadOutcome`, `WinOutcome`, `ReactionOutcome`:
//!   structured results for the caller
//! - `RoundAdvance`: the next deal or the final standings
//!
//! ## States
//!
//! ```text
//!   Turn(seat) --discard, nobody can react--> Turn(next)
//!   Turn(seat) --discard, someone can react--> AwaitingReactions
//!   AwaitingReactions --resolve: ron--> Ended
//!   AwaitingReactions --resolve: kan/pon/chi--> Turn(caller)
//!   AwaitingReactions --resolve: pass--> Turn(next) | Ended (wall empty)
//!   Turn(seat) --self-draw win--> Ended
//! ```

mod master;
mod outcome;
mod reaction;
mod round;
mod state;

pub use master::MasterEngine;
pub use outcome::{DiscardOutcome, QuadOutcome, ReactionOutcome, RoundEnd, WinOutcome};
pub use reaction::{CallKind, Eligibility, ReactionAnswers, ReactionWindow};
pub use round::{RoundAdvance, Standing, KYOKU_PER_WIND};
pub use state::{MatchState, Phase};
