//! Constrained genetic search over rule-sets.
//!
//! The population is kept split into a **feasible** part (playable
//! rule-sets, ranked by fitness) and an **infeasible** part (ranked by how
//! close they come to satisfying the validity constraints). Each generation
//! breeds from either part with equal probability, so the search climbs
//! towards playability and towards quality at the same time.
//!
//! # Core Traits
//!
//! - [`Chromosome`]: An opaque rule-set with its cached evaluation state
//! - [`SeedStrategy`]: Produces initial rule-sets from scratch
//!
//! # Key Types
//!
//! - [`RuleGenConfig`]: Population size, operator rates, elitism, timing
//! - [`RuleGenerator`]: Seeds, evolves and picks the final rule-set
//! - [`RuleGenResult`]: Winner plus per-generation [`StatsRecorder`]
//!
//! # Submodules
//!
//! - [`selection`]: Constraint- and fitness-weighted roulette wheels
//! - [`transition`]: One generation step with elitist survival
//!
//! # References
//!
//! - Kimbrough et al. (2008), "On a feasible–infeasible two-population
//!   (FI-2Pop) genetic algorithm for constrained optimization"
//! - Khalifa et al. (2017), "General Video Game Rule Generation"

mod budget;
mod config;
mod runner;
pub mod selection;
mod stats;
pub mod transition;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use budget::GenerationBudget;
pub use config::RuleGenConfig;
pub use runner::{RuleGenResult, RuleGenerator};
pub use selection::SelectionMode;
pub use stats::{GenerationStats, StatsRecorder};
pub use types::{Chromosome, SeedStrategy};
