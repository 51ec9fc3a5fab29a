//! Engine error taxonomy.
//!
//! Every error is a local validation failure of one submitted operation.
//! The engine validates before it mutates, so on `Err` the match state is
//! exactly what it was before the call.

use thiserror::Error;

use crate::core::{House, Tile};

/// Why an operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("it is not {seat}'s turn")]
    NotYourTurn { seat: House },

    #[error("{tile} is not in {seat}'s hand")]
    TileNotInHand { seat: House, tile: Tile },

    #[error("{seat}'s hand would not be ready after the discard")]
    NotReady { seat: House },

    #[error("{seat} holds {points} points, riichi needs {required}")]
    InsufficientPoints { seat: House, points: i64, required: i64 },

    #[error("{seat} has already declared riichi")]
    AlreadyRiichi { seat: House },

    #[error("{seat} is in riichi and may only discard the drawn tile, not {tile}")]
    RiichiLocked { seat: House, tile: Tile },

    #[error("no tiles remaining to draw")]
    NoTilesRemaining,

    #[error("invalid call claim: {reason}")]
    InvalidCallClaim { reason: &'static str },

    #[error("no reaction is pending")]
    NoPendingReaction,

    #[error("{seat}'s hand is not complete")]
    HandNotComplete { seat: House },

    #[error("the round has already ended")]
    RoundEnded,

    #[error("the round is still in progress")]
    RoundInProgress,

    #[error("invalid wall: {reason}")]
    InvalidWall { reason: String },

    #[error("snapshot codec error: {message}")]
    Codec { message: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Codec {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::TileNotInHand {
            seat: House::West,
            tile: Tile::HAKU,
        };
        assert_eq!(err.to_string(), "haku is not in w's hand");

        let err = EngineError::InsufficientPoints {
            seat: House::East,
            points: 500,
            required: 1_000,
        };
        assert_eq!(err.to_string(), "e holds 500 points, riichi needs 1000");
    }
}
