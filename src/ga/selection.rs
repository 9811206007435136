//! Fitness-proportionate parent selection.
//!
//! A sub-population is either entirely feasible or entirely infeasible, so
//! its first chromosome decides how the roulette wheel is weighted:
//!
//! - **Constraint mode** (first chromosome infeasible): weight is the
//!   constraint fitness, pulling the search towards playable rule-sets.
//! - **Fitness mode** (first chromosome feasible): weight is the combined
//!   fitness.
//!
//! Every weight except the first is padded by `epsilon`, so a chromosome
//! scoring zero keeps a small chance of being picked.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Deb (2000), "An efficient constraint handling method for genetic
//!   algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Which score a roulette wheel is weighted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Weight by constraint fitness (infeasible sub-population).
    Constraint,
    /// Weight by combined fitness (feasible sub-population).
    Fitness,
}

impl SelectionMode {
    /// The mode implied by a sub-population's first chromosome.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn detect<C: Chromosome>(population: &[C]) -> Self {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        if population[0].feasibility_test() {
            SelectionMode::Fitness
        } else {
            SelectionMode::Constraint
        }
    }

    fn weight<C: Chromosome>(self, chromosome: &C) -> f64 {
        match self {
            SelectionMode::Constraint => chromosome.constraint_fitness(),
            SelectionMode::Fitness => chromosome.combined_fitness(),
        }
    }
}

/// Normalized cumulative roulette weights for `population`.
///
/// Position 0 holds the unpadded weight of the first chromosome; every later
/// position adds its chromosome's weight plus `epsilon`. The array is then
/// divided by its last entry, so it ends at `1.0`.
pub fn cumulative_weights<C: Chromosome>(
    population: &[C],
    mode: SelectionMode,
    epsilon: f64,
) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(population.len());
    let mut running = 0.0;
    for (i, chromosome) in population.iter().enumerate() {
        running += mode.weight(chromosome);
        if i > 0 {
            running += epsilon;
        }
        cumulative.push(running);
    }

    if let Some(&total) = cumulative.last() {
        for c in cumulative.iter_mut() {
            *c /= total;
        }
    }
    cumulative
}

/// Picks a parent index from `population` by roulette wheel.
///
/// Draws `r` uniformly from `[0, 1)` and returns the first position whose
/// normalized cumulative weight exceeds it. If none does (a degenerate
/// wheel, e.g. a single chromosome scoring zero), returns 0.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select<C: Chromosome, R: Rng>(population: &[C], epsilon: f64, rng: &mut R) -> usize {
    let mode = SelectionMode::detect(population);
    let wheel = cumulative_weights(population, mode, epsilon);

    let r: f64 = rng.random_range(0.0..1.0);
    wheel.iter().position(|&w| r < w).unwrap_or(0)
}
