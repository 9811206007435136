//! Per-generation statistics.
//!
//! Purely observational: nothing recorded here feeds back into selection or
//! termination.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of one generation, taken before its offspring are bred.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index (0 is the seeded population).
    pub generation: usize,
    /// Highest primary fitness among feasible chromosomes, or 0.
    pub best_fitness: f64,
    pub feasible_count: usize,
    pub infeasible_count: usize,
}

/// Append-only series of [`GenerationStats`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsRecorder {
    records: Vec<GenerationStats>,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record for the next generation and returns it.
    pub fn record(
        &mut self,
        best_fitness: f64,
        feasible_count: usize,
        infeasible_count: usize,
    ) -> GenerationStats {
        let stats = GenerationStats {
            generation: self.records.len(),
            best_fitness,
            feasible_count,
            infeasible_count,
        };
        self.records.push(stats);
        stats
    }

    pub fn records(&self) -> &[GenerationStats] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.records.last()
    }

    pub fn best_fitness_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_fitness).collect()
    }

    pub fn feasible_counts(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.feasible_count).collect()
    }

    pub fn infeasible_counts(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.infeasible_count).collect()
    }
}
