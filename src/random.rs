//! Seedable random sources.
//!
//! Solvers never touch a global generator; callers create one here (or bring
//! their own [`rand::Rng`]) and pass it into each call.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator type used throughout the crate's tests and benchmarks.
pub type KnapsackRng = ChaCha8Rng;

/// Creates a reproducible generator from a seed.
///
/// ChaCha8 keeps the stream identical across platforms and `rand` releases,
/// so a seed always replays the same run.
pub fn create_rng(seed: u64) -> KnapsackRng {
    ChaCha8Rng::seed_from_u64(seed)
}
