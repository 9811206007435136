//! Time-budget bookkeeping for the evolutionary loop.

use super::config::RuleGenConfig;
use std::time::Duration;

/// Decides whether another generation fits in the remaining time.
///
/// A generation is only started while the remaining budget exceeds both
/// twice the average generation time and the worst case (every chromosome
/// using its full evaluation allowance). Until a generation has been
/// measured the average is taken to be the worst case.
#[derive(Debug, Clone)]
pub struct GenerationBudget {
    worst_case: Duration,
    total: Duration,
    generations: u32,
}

impl GenerationBudget {
    pub fn new(config: &RuleGenConfig) -> Self {
        Self {
            worst_case: config.worst_case_generation_time(),
            total: Duration::ZERO,
            generations: 0,
        }
    }

    pub fn worst_case(&self) -> Duration {
        self.worst_case
    }

    /// Running average generation time.
    pub fn average(&self) -> Duration {
        if self.generations == 0 {
            self.worst_case
        } else {
            self.total / self.generations
        }
    }

    pub fn generations(&self) -> u32 {
        self.generations
    }

    /// Folds one measured generation into the average.
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.generations += 1;
    }

    /// Whether a new generation may start with `remaining` time left.
    pub fn should_continue(&self, remaining: Duration) -> bool {
        remaining > self.average().saturating_mul(2) && remaining > self.worst_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(n: usize, allowance_ms: u64) -> GenerationBudget {
        GenerationBudget::new(
            &RuleGenConfig::default()
                .with_population_size(n)
                .with_evaluation_time(Duration::from_millis(allowance_ms)),
        )
    }

    #[test]
    fn test_stops_below_worst_case() {
        let b = budget(4, 10);
        assert_eq!(b.worst_case(), Duration::from_millis(40));
        assert!(!b.should_continue(Duration::from_millis(35)));
    }

    #[test]
    fn test_initial_average_is_worst_case() {
        let b = budget(4, 10);
        assert_eq!(b.average(), Duration::from_millis(40));
        // needs more than 2 x 40ms before anything has been measured
        assert!(!b.should_continue(Duration::from_millis(80)));
        assert!(b.should_continue(Duration::from_millis(81)));
    }

    #[test]
    fn test_cheap_generations_relax_to_worst_case() {
        let mut b = budget(4, 10);
        b.record(Duration::from_millis(5));
        b.record(Duration::from_millis(15));
        assert_eq!(b.average(), Duration::from_millis(10));
        assert_eq!(b.generations(), 2);
        assert!(b.should_continue(Duration::from_millis(41)));
        assert!(!b.should_continue(Duration::from_millis(40)));
    }

    #[test]
    fn test_slow_generations_dominate() {
        let mut b = budget(4, 10);
        b.record(Duration::from_millis(100));
        assert!(!b.should_continue(Duration::from_millis(200)));
        assert!(b.should_continue(Duration::from_millis(201)));
    }
}
