//! Rule generator configuration.
//!
//! [`RuleGenConfig`] holds every parameter of a run. It is validated once
//! when the generator is built and read-only afterwards.

use crate::error::{Error, Result};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the constrained rule generator.
///
/// # Defaults
///
/// ```
/// use u_rulegen::ga::RuleGenConfig;
///
/// let config = RuleGenConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_count(), 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use std::time::Duration;
/// use u_rulegen::ga::RuleGenConfig;
///
/// let config = RuleGenConfig::default()
///     .with_population_size(40)
///     .with_crossover_rate(0.6)
///     .with_evaluation_time(Duration::from_millis(20))
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleGenConfig {
    /// Number of chromosomes alive at every generation boundary.
    pub population_size: usize,

    /// Probability of mutating a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of recombining a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Fraction of the population carried over unchanged (0.0–1.0).
    pub elite_ratio: f64,

    /// Padding added to every roulette weight but the first.
    ///
    /// Keeps chromosomes with zero fitness selectable.
    pub epsilon: f64,

    /// Time each chromosome may spend on one fitness evaluation.
    pub evaluation_time: Duration,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional cap on the number of evolved generations.
    ///
    /// `None` (the default) lets the time budget alone end the run.
    pub max_generations: Option<usize>,
}

impl Default for RuleGenConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.1,
            elite_ratio: 0.1,
            epsilon: 1e-6,
            evaluation_time: Duration::from_millis(50),
            seed: None,
            max_generations: None,
        }
    }
}

impl RuleGenConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the roulette padding.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the per-chromosome evaluation allowance.
    pub fn with_evaluation_time(mut self, allowance: Duration) -> Self {
        self.evaluation_time = allowance;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of evolved generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Number of elites carried into each generation: `floor(N * ratio)`.
    ///
    /// The product is nudged up by a tiny tolerance before flooring so that
    /// ratios like `0.29` are not rounded down by binary representation error.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio + 1e-9).floor() as usize
    }

    /// Time needed to evaluate a whole population at the full allowance.
    pub fn worst_case_generation_time(&self) -> Duration {
        let n = u32::try_from(self.population_size).unwrap_or(u32::MAX);
        self.evaluation_time.saturating_mul(n)
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidConfig`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err(invalid("elite_ratio must be within [0, 1]"));
        }
        if self.elite_count() >= self.population_size {
            return Err(invalid("elite_ratio too high: elites fill entire population"));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(invalid("epsilon must be a positive finite number"));
        }
        if self.evaluation_time.is_zero() {
            return Err(invalid("evaluation_time must be positive"));
        }
        if self.max_generations == Some(0) {
            return Err(invalid("max_generations must be positive or None"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}
