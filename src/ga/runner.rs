//! Rule generation run execution.
//!
//! [`RuleGenerator`] orchestrates a complete run:
//! seeding → partition → (transition → partition)* → final refresh → pick.

use super::budget::GenerationBudget;
use super::config::RuleGenConfig;
use super::stats::StatsRecorder;
use super::transition::{evaluate_all, log_evaluation, next_generation};
use super::types::{partition, Chromosome, SeedStrategy};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::level::LevelDescription;
use crate::random::create_rng;
use rand::Rng;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{info, instrument};

/// Result of a rule generation run.
#[derive(Debug, Clone)]
pub struct RuleGenResult<C: Chromosome> {
    /// The winning chromosome.
    pub best: C,

    /// Its decoded rule-set (same as `best.ruleset()`).
    pub ruleset: C::Ruleset,

    /// Whether the winner passed the feasibility test.
    pub feasible: bool,

    /// Number of generation transitions executed.
    pub generations: usize,

    /// One record per executed transition.
    pub stats: StatsRecorder,

    /// Mean wall-clock cost of a transition (the worst-case estimate if
    /// none ran).
    pub average_generation_time: Duration,
}

/// Evolves rule-sets for a level under a hard time budget.
///
/// # Usage
///
/// ```ignore
/// let generator = RuleGenerator::<MyRules, _>::new(config, ConstructiveSeed::new())?;
/// let rules = generator.generate_rules(&level, Duration::from_secs(60))?;
/// ```
pub struct RuleGenerator<C, S, K = SystemClock> {
    config: RuleGenConfig,
    strategy: S,
    clock: K,
    _chromosome: PhantomData<fn() -> C>,
}

impl<C, S> RuleGenerator<C, S, SystemClock>
where
    C: Chromosome,
    S: SeedStrategy<Ruleset = C::Ruleset>,
{
    /// Creates a generator timed by the system clock.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if `config` fails validation.
    pub fn new(config: RuleGenConfig, strategy: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            strategy,
            clock: SystemClock::new(),
            _chromosome: PhantomData,
        })
    }
}

impl<C, S, K> RuleGenerator<C, S, K>
where
    C: Chromosome,
    S: SeedStrategy<Ruleset = C::Ruleset>,
    K: Clock,
{
    /// Replaces the time source.
    pub fn with_clock<K2: Clock>(self, clock: K2) -> RuleGenerator<C, S, K2> {
        RuleGenerator {
            config: self.config,
            strategy: self.strategy,
            clock,
            _chromosome: PhantomData,
        }
    }

    pub fn config(&self) -> &RuleGenConfig {
        &self.config
    }

    /// Runs the search and returns only the winning rule-set.
    pub fn generate_rules(&self, level: &LevelDescription, budget: Duration) -> Result<C::Ruleset> {
        self.run(level, budget).map(|result| result.ruleset)
    }

    /// Runs the search and returns the winner with its statistics.
    ///
    /// `budget` counts from the moment this is called and covers seeding,
    /// every generation, and the final refresh.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = self.config.population_size,
            budget_ms = millis(budget),
        )
    )]
    pub fn run(&self, level: &LevelDescription, budget: Duration) -> Result<RuleGenResult<C>> {
        let start = self.clock.elapsed();
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Seed and partition
        let sprites = level.useful_sprites();
        let seeded = self.seed_population(level, &sprites, budget, start, &mut rng);
        let (mut feasible, mut infeasible) = partition(seeded);

        // 2. Evolve while another generation safely fits
        let mut schedule = GenerationBudget::new(&self.config);
        let mut stats = StatsRecorder::new();
        let mut generations = 0usize;
        info!(
            remaining_ms = millis(self.remaining(budget, start)),
            average_ms = millis(schedule.average()),
            worst_case_ms = millis(schedule.worst_case()),
            "seeded population"
        );

        while schedule.should_continue(self.remaining(budget, start))
            && self.config.max_generations.map_or(true, |cap| generations < cap)
        {
            let generation_start = self.clock.elapsed();

            let population =
                next_generation(feasible, infeasible, &self.config, &mut stats, &mut rng)?;
            (feasible, infeasible) = partition(population);

            generations += 1;
            schedule.record(self.clock.elapsed().saturating_sub(generation_start));
        }

        // 3. Refresh survivors and pick the winner
        let mut survivors = feasible;
        survivors.append(&mut infeasible);
        evaluate_all(&mut survivors, self.config.evaluation_time);
        let (feasible, infeasible) = partition(survivors);

        let pool = if feasible.is_empty() {
            infeasible
        } else {
            feasible
        };
        let best = pool
            .into_iter()
            .max_by(|a, b| a.quality_cmp(b))
            .ok_or(Error::DegeneratePopulation)?;
        let is_feasible = best.feasibility_test();

        if is_feasible {
            info!(fitness = ?best.fitness(), generations, "best chromosome");
        } else {
            info!(
                constraint_fitness = best.constraint_fitness(),
                generations,
                "no feasible chromosome, returning best infeasible"
            );
        }
        info!(
            best_fitness = ?stats.best_fitness_series(),
            feasible = ?stats.feasible_counts(),
            infeasible = ?stats.infeasible_counts(),
            "generation statistics"
        );

        Ok(RuleGenResult {
            ruleset: best.ruleset(),
            feasible: is_feasible,
            best,
            generations,
            stats,
            average_generation_time: schedule.average(),
        })
    }

    /// Builds and evaluates one chromosome per population slot.
    fn seed_population<R: Rng>(
        &self,
        level: &LevelDescription,
        sprites: &[String],
        budget: Duration,
        start: Duration,
        rng: &mut R,
    ) -> Vec<C> {
        (0..self.config.population_size)
            .map(|i| {
                let ruleset = self
                    .strategy
                    .generate(level, self.remaining(budget, start), rng);
                let mut chromosome = C::from_ruleset(ruleset, level, sprites);
                chromosome.calculate_fitness(self.config.evaluation_time);
                log_evaluation(i, &chromosome);
                chromosome
            })
            .collect()
    }

    fn remaining(&self, budget: Duration, start: Duration) -> Duration {
        budget.saturating_sub(self.clock.elapsed().saturating_sub(start))
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// Tests
// ============================================================================
