//! State fingerprints for desync detection.
//!
//! Checksums hash a canonical copy: concealed hands and melds are sorted
//! first, so two states that differ only in the order of unordered bags
//! fingerprint the same.
//!
//! The digest is platform independent. Every integer is fed to SHA-256 as
//! little-endian bytes and `usize` values (lengths, counts) are widened to
//! `u64`, so a 32-bit client replica computes the same value as a 64-bit
//! engine for the same view.

use sha2::{Digest, Sha256};
use std::hash::{Hash, Hasher};

use crate::core::House;
use crate::engine::MatchState;

use super::projector::{project, PlayerView};

/// Fingerprint of the full authoritative state.
#[must_use]
pub fn checksum(state: &MatchState) -> u64 {
    let mut canonical = state.clone();
    for hand in canonical.hands.values_mut() {
        hand.sort_unstable();
    }
    for melds in canonical.melds.values_mut() {
        melds.sort_unstable();
    }
    fingerprint(&canonical)
}

/// Fingerprint of the view a seat should currently hold.
///
/// A client replica computes `PlayerView::checksum` on its own copy and
/// compares with this value.
#[must_use]
pub fn checksum_for(state: &MatchState, seat: House) -> u64 {
    project(state, seat).checksum()
}

impl PlayerView {
    /// Fingerprint of this view, stable across hand ordering.
    #[must_use]
    pub fn checksum(&self) -> u64 {
        let mut canonical = self.clone();
        for hand in canonical.hands.values_mut() {
            hand.sort_unstable();
        }
        for melds in canonical.melds.values_mut() {
            melds.sort_unstable();
        }
        fingerprint(&canonical)
    }
}

fn fingerprint<T: Hash>(value: &T) -> u64 {
    let mut hasher = StableHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// `Hasher` over SHA-256 with a fixed byte encoding for every integer.
#[derive(Default)]
struct StableHasher {
    digest: Sha256,
}

impl Hasher for StableHasher {
    fn finish(&self) -> u64 {
        let out = self.digest.clone().finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&out[..8]);
        u64::from_le_bytes(word)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.digest.update(bytes);
    }

    fn write_u8(&mut self, i: u8) {
        self.digest.update([i]);
    }

    fn write_u16(&mut self, i: u16) {
        self.digest.update(i.to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.digest.update(i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.digest.update(i.to_le_bytes());
    }

    fn write_u128(&mut self, i: u128) {
        self.digest.update(i.to_le_bytes());
    }

    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    fn write_i8(&mut self, i: i8) {
        self.write_u8(i as u8);
    }

    fn write_i16(&mut self, i: i16) {
        self.write_u16(i as u16);
    }

    fn write_i32(&mut self, i: i32) {
        self.write_u32(i as u32);
    }

    fn write_i64(&mut self, i: i64) {
        self.write_u64(i as u64);
    }

    fn write_i128(&mut self, i: i128) {
        self.write_u128(i as u128);
    }

    fn write_isize(&mut self, i: isize) {
        self.write_i64(i as i64);
    }
}
