//! Seeded sentiment draws.
//!
//! The generator is always passed in explicitly. `seeded_rng` builds the
//! `StdRng` used by `prepare_seeded`, so the same seed and the same row count
//! reproduce the same label sequence on every run.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::Sentiment;

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: u64 = 0;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw one label, each of the three categories equally likely.
pub fn draw_sentiment<R: Rng + ?Sized>(rng: &mut R) -> Sentiment {
    let idx = Uniform::from(0..Sentiment::ALL.len()).sample(rng);
    Sentiment::ALL[idx]
}

/// Draw `n` labels in order, one per row.
pub fn draw_sentiments<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Sentiment> {
    (0..n).map(|_| draw_sentiment(rng)).collect()
}
