//! Record shuffling with an explicit random source.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffle records in place (Fisher–Yates) using the given random source.
pub fn shuffle_records<T, R: Rng + ?Sized>(records: &mut [T], rng: &mut R) {
    records.shuffle(rng);
}

/// Deterministic random source for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the current wall-clock time.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
