//! Binary snapshots of states and views.
//!
//! Snapshots use bincode. A decoded state is an exact copy, so resuming
//! from it and replaying the same inputs reaches the same results.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::EngineResult;

/// Encode a `MatchState`, `PlayerView` or any outcome to bytes.
pub fn encode<T: Serialize>(value: &T) -> EngineResult<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

/// Decode bytes produced by [`encode`].
///
/// ## Errors
///
/// `Codec` when the bytes are truncated or not of type `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> EngineResult<T> {
    Ok(bincode::deserialize(bytes)?)
}
