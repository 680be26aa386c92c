//! Bounded random sequence generation.
//!
//! Values are drawn from `10..=409`, matching the bar-height range the
//! surrounding application renders; lengths are bounded to the size slider's
//! `[10, 100]` domain. The seeded variant exists for reproducible demos and
//! tests; any non-deterministic choice in this crate goes through an
//! explicitly seedable RNG rather than ambient entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{EngineError, EngineResult};
use crate::sequence::Sequence;

/// Smallest supported sequence length.
pub const MIN_LEN: usize = 10;
/// Largest supported sequence length.
pub const MAX_LEN: usize = 100;
/// Smallest generated bar value.
pub const MIN_VALUE: u32 = 10;
/// Largest generated bar value.
pub const MAX_VALUE: u32 = 409;

/// Generate a fresh neutral sequence from OS entropy.
///
/// # Errors
///
/// `InvalidSequenceLength` when `len` is outside `[10, 100]`.
pub fn generate_sequence(len: usize) -> EngineResult<Sequence> {
    generate_with(len, &mut rand::rng())
}

/// Generate a reproducible neutral sequence from a fixed seed.
///
/// # Errors
///
/// `InvalidSequenceLength` when `len` is outside `[10, 100]`.
pub fn generate_sequence_seeded(len: usize, seed: u64) -> EngineResult<Sequence> {
    generate_with(len, &mut StdRng::seed_from_u64(seed))
}

fn generate_with<R: Rng>(len: usize, rng: &mut R) -> EngineResult<Sequence> {
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(EngineError::InvalidSequenceLength {
            requested: len,
            min: MIN_LEN,
            max: MAX_LEN,
        });
    }
    let values: Vec<u32> = (0..len)
        .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
        .collect();
    Ok(Sequence::from_values(&values))
}
