//! Core trait definitions for the rule generator.
//!
//! The two central traits, [`Chromosome`] and [`SeedStrategy`], define
//! the contract between the generic search engine and a concrete rule-set
//! representation. The engine never looks inside a rule-set; it only asks
//! chromosomes to copy, vary, evaluate, and rank themselves.

use crate::level::LevelDescription;
use rand::Rng;
use std::cmp::Ordering;
use std::time::Duration;

/// A candidate rule-set together with its cached evaluation state.
///
/// A chromosome is **feasible** when its constraint fitness is at least
/// `1.0`. Infeasible chromosomes are ranked by constraint fitness alone;
/// feasible ones by [`combined_fitness`](Chromosome::combined_fitness).
/// Higher is better for both.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct InteractionSet {
///     rules: Vec<Vec<String>>,
///     fitness: Vec<f64>,
///     constraint: f64,
/// }
///
/// impl Chromosome for InteractionSet {
///     type Ruleset = Vec<Vec<String>>;
///     fn from_ruleset(rules: Self::Ruleset, _: &LevelDescription, _: &[String]) -> Self {
///         Self { rules, fitness: vec![0.0], constraint: 0.0 }
///     }
///     // ...
/// }
/// ```
pub trait Chromosome: Clone {
    /// The decoded rule-set this chromosome encodes.
    type Ruleset: Clone;

    /// Wraps a seed strategy's output into an unevaluated chromosome.
    ///
    /// `useful_sprites` is the de-duplicated sprite list of `level`.
    fn from_ruleset(
        ruleset: Self::Ruleset,
        level: &LevelDescription,
        useful_sprites: &[String],
    ) -> Self;

    /// Perturbs this chromosome in place.
    fn mutate<R: Rng>(&mut self, rng: &mut R);

    /// Recombines `self` with `other`, producing exactly two offspring.
    ///
    /// Neither parent is modified.
    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self);

    /// Recomputes fitness and constraint fitness.
    ///
    /// This is the expensive step. `allowance` bounds the time the
    /// chromosome may spend simulating; exceeding it is the chromosome's
    /// own concern and must still leave valid scores behind.
    fn calculate_fitness(&mut self, allowance: Duration);

    /// Fitness components, most significant first.
    fn fitness(&self) -> &[f64];

    /// Scalar fitness used for ranking and selection weight when feasible.
    fn combined_fitness(&self) -> f64;

    /// Degree of constraint satisfaction (`>= 1.0` means feasible).
    fn constraint_fitness(&self) -> f64;

    /// Returns the decoded rule-set.
    fn ruleset(&self) -> Self::Ruleset;

    /// Whether this chromosome is playable under the validity test.
    fn feasibility_test(&self) -> bool {
        self.constraint_fitness() >= 1.0
    }

    /// The value recorded as this chromosome's fitness in statistics.
    fn primary_fitness(&self) -> f64 {
        self.fitness()
            .first()
            .copied()
            .unwrap_or_else(|| self.combined_fitness())
    }

    /// Total order by quality; `Greater` means `self` is better.
    ///
    /// Feasible beats infeasible. Two feasible chromosomes compare by
    /// combined fitness, two infeasible ones by constraint fitness.
    fn quality_cmp(&self, other: &Self) -> Ordering {
        match (self.feasibility_test(), other.feasibility_test()) {
            (true, true) => self.combined_fitness().total_cmp(&other.combined_fitness()),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .constraint_fitness()
                .total_cmp(&other.constraint_fitness()),
        }
    }
}

/// Produces an initial rule-set from scratch.
///
/// The controller calls this once per population slot while seeding.
pub trait SeedStrategy {
    /// The rule-set shape this strategy emits.
    type Ruleset;

    /// Generates one rule-set for `level` within `budget`.
    fn generate<R: Rng>(
        &self,
        level: &LevelDescription,
        budget: Duration,
        rng: &mut R,
    ) -> Self::Ruleset;
}

/// Sorts `population` best first.
pub(crate) fn sort_by_quality<C: Chromosome>(population: &mut [C]) {
    population.sort_by(|a, b| b.quality_cmp(a));
}

/// Splits `population` into `(feasible, infeasible)`.
pub(crate) fn partition<C: Chromosome>(population: Vec<C>) -> (Vec<C>, Vec<C>) {
    population.into_iter().partition(|c| c.feasibility_test())
}
