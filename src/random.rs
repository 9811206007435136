//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the run's random source from a fixed seed.
///
/// Every selection and variation decision of a run draws from the one
/// generator returned here, so equal seeds replay equal runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
