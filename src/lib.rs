//! Evolutionary generation of game rule-sets.
//!
//! Searches a space of candidate rule-sets for one that is both playable
//! (feasible under a validity test) and high-scoring under a fitness
//! function, within a hard wall-clock budget.
//!
//! - **[`ga`]**: Feasible/infeasible two-population genetic search, the
//!   generation step, and the time-budgeted run controller.
//! - **[`level`]**: Level layouts and sprite extraction.
//! - **[`clock`]**: Injected time sources ([`clock::SystemClock`],
//!   [`clock::ManualClock`]).
//!
//! # Architecture
//!
//! The crate knows nothing about how a rule-set is encoded or simulated.
//! Concrete representations implement [`ga::Chromosome`] and
//! [`ga::SeedStrategy`]; the engine is written against those traits only.

pub mod clock;
mod error;
pub mod ga;
pub mod level;
pub mod random;

pub use error::{Error, Result};
