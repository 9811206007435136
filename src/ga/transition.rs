//! One generation step: feasible + infeasible in, full population out.
//!
//! Breeding alternates between the two sub-populations at random, so
//! infeasible chromosomes keep climbing towards playability while feasible
//! ones compete on fitness. Offspring are evaluated, ranked and cut down,
//! then the best parents of the preferred sub-population are carried over
//! untouched.

use super::config::RuleGenConfig;
use super::selection::select;
use super::stats::StatsRecorder;
use super::types::{sort_by_quality, Chromosome};
use crate::error::{Error, Result};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

/// Breeds the next population from the current partition.
///
/// Statistics for the *current* generation are appended to `stats` before
/// any offspring are produced. The returned population has exactly
/// `config.population_size` members: the best `N - E` offspring followed
/// by up to `E` elites.
///
/// Elites come from `feasible` when it is non-empty, otherwise from
/// `infeasible`. When that sub-population holds fewer than `E` chromosomes
/// all of them survive and the surplus slots go to offspring.
///
/// # Errors
/// Returns [`Error::DegeneratePopulation`] if both sub-populations are empty.
pub fn next_generation<C: Chromosome, R: Rng>(
    feasible: Vec<C>,
    infeasible: Vec<C>,
    config: &RuleGenConfig,
    stats: &mut StatsRecorder,
    rng: &mut R,
) -> Result<Vec<C>> {
    if feasible.is_empty() && infeasible.is_empty() {
        return Err(Error::DegeneratePopulation);
    }

    let best_fitness = feasible
        .iter()
        .map(Chromosome::primary_fitness)
        .reduce(f64::max)
        .unwrap_or(0.0);
    let snapshot = stats.record(best_fitness, feasible.len(), infeasible.len());
    info!(
        generation = snapshot.generation,
        feasible = snapshot.feasible_count,
        infeasible = snapshot.infeasible_count,
        best_fitness = snapshot.best_fitness,
        "breeding generation"
    );

    let pop_size = config.population_size;
    let mut offspring: Vec<C> = Vec::with_capacity(pop_size + 1);

    while offspring.len() < pop_size {
        let source = choose_source(&feasible, &infeasible, rng);

        let parent1 = &source[select(source, config.epsilon, rng)];
        let parent2 = &source[select(source, config.epsilon, rng)];

        let (child1, child2) = breed_pair(parent1, parent2, config, rng);
        offspring.push(child1);
        offspring.push(child2);
    }

    evaluate_all(&mut offspring, config.evaluation_time);
    sort_by_quality(&mut offspring);

    let mut elites = if feasible.is_empty() {
        infeasible
    } else {
        feasible
    };
    sort_by_quality(&mut elites);
    elites.truncate(config.elite_count());

    offspring.truncate(pop_size - elites.len());
    offspring.extend(elites);
    Ok(offspring)
}

/// Produces two children: crossover with probability `crossover_rate`,
/// plain copies otherwise. Each child then rolls for mutation on its own.
fn breed_pair<C: Chromosome, R: Rng>(
    parent1: &C,
    parent2: &C,
    config: &RuleGenConfig,
    rng: &mut R,
) -> (C, C) {
    let (mut child1, mut child2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
        parent1.crossover(parent2, rng)
    } else {
        (parent1.clone(), parent2.clone())
    };

    if rng.random_range(0.0..1.0) < config.mutation_rate {
        child1.mutate(rng);
    }
    if rng.random_range(0.0..1.0) < config.mutation_rate {
        child2.mutate(rng);
    }
    (child1, child2)
}

/// Picks the sub-population to breed from: a fair coin, unless one side is
/// empty.
fn choose_source<'a, C, R: Rng>(feasible: &'a [C], infeasible: &'a [C], rng: &mut R) -> &'a [C] {
    let heads = rng.random_range(0.0..1.0) < 0.5;
    if feasible.is_empty() || (heads && !infeasible.is_empty()) {
        infeasible
    } else {
        feasible
    }
}

/// Re-evaluates every chromosome with the given allowance.
pub(crate) fn evaluate_all<C: Chromosome>(population: &mut [C], allowance: Duration) {
    for (i, chromosome) in population.iter_mut().enumerate() {
        chromosome.calculate_fitness(allowance);
        log_evaluation(i, chromosome);
    }
}

pub(crate) fn log_evaluation<C: Chromosome>(index: usize, chromosome: &C) {
    if chromosome.feasibility_test() {
        debug!(chromosome = index + 1, fitness = ?chromosome.fitness(), "evaluated");
    } else {
        debug!(
            chromosome = index + 1,
            constraint_fitness = chromosome.constraint_fitness(),
            "evaluated"
        );
    }
}
