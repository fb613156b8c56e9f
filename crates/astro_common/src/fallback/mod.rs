//! Fallback generators.
//!
//! Used whenever the dispatcher or normalizer fails. Every generator here is
//! infallible and produces a record satisfying the same invariants as a
//! normalized one. Panchang and calendar output is a pure function of the
//! date; the rest draws from an injected RNG.

pub mod calendar;
pub mod chart;
pub mod panchang;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use crate::records::{MantraCategory, MantraRecord, RemedyCategory, RemedyRecord};
use crate::tables;

/// First eight bytes of the SHA-256 digest of `key`, big-endian.
pub fn stable_hash(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Index into a table of `len` entries chosen by `key`.
pub fn stable_index(key: &str, len: usize) -> usize {
    (stable_hash(key) % len as u64) as usize
}

pub fn stable_choice<'a, T>(items: &'a [T], key: &str) -> &'a T {
    &items[stable_index(key, items.len())]
}

/// Builds the RNG for one fallback.
///
/// A fixed seed makes every pseudo-random fallback reproducible; without one
/// each call draws from OS entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RngSource {
    seed: Option<u64>,
}

impl RngSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn mantras(category: Option<MantraCategory>) -> Vec<MantraRecord> {
    tables::mantra::list(category)
}

pub fn remedies(category: Option<RemedyCategory>) -> Vec<RemedyRecord> {
    tables::remedy::list(category)
}
