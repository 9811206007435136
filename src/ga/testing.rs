//! Test doubles shared by the `ga` unit tests.

use super::types::{Chromosome, SeedStrategy};
use crate::clock::ManualClock;
use crate::level::LevelDescription;
use rand::Rng;
use std::time::Duration;

/// Encoded form of a [`Candidate`].
///
/// `tick` lets a test advance a manual clock every time a candidate is
/// evaluated, standing in for the cost of simulating a game.
#[derive(Debug, Clone)]
pub struct Genome {
    pub genes: Vec<f64>,
    pub tick: Option<(ManualClock, Duration)>,
}

/// A toy rule-set: feasible once the mean gene reaches 0.5, and fitter the
/// larger its genes are.
///
/// Candidates built with [`Candidate::feasible`] or [`Candidate::infeasible`]
/// carry no genes and keep their fixed scores through evaluation.
///
/// Every candidate counts the mutations applied to it and remembers whether
/// it came out of a crossover; clones inherit both.
#[derive(Debug, Clone)]
pub struct Candidate {
    genes: Vec<f64>,
    fitness: Vec<f64>,
    combined: f64,
    constraint: f64,
    threshold: f64,
    mutations: u32,
    crossed: bool,
    tick: Option<(ManualClock, Duration)>,
}

impl Candidate {
    pub fn feasible(combined: f64) -> Self {
        Self {
            genes: Vec::new(),
            fitness: vec![combined],
            combined,
            constraint: 1.0,
            threshold: 1.0,
            mutations: 0,
            crossed: false,
            tick: None,
        }
    }

    pub fn infeasible(constraint: f64) -> Self {
        Self {
            genes: Vec::new(),
            fitness: vec![0.0],
            combined: 0.0,
            constraint,
            threshold: 1.0,
            mutations: 0,
            crossed: false,
            tick: None,
        }
    }

    pub fn from_genes(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: Vec::new(),
            combined: 0.0,
            constraint: 0.0,
            threshold: 1.0,
            mutations: 0,
            crossed: false,
            tick: None,
        }
    }

    /// The score this candidate is ranked by.
    pub fn score(&self) -> f64 {
        if self.feasibility_test() {
            self.combined
        } else {
            self.constraint
        }
    }

    /// Moves the feasibility cut-off away from the default `1.0`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn mutations(&self) -> u32 {
        self.mutations
    }

    pub fn crossed(&self) -> bool {
        self.crossed
    }

    pub fn set_genes(&mut self, genes: Vec<f64>) {
        self.genes = genes;
    }

    pub fn clear_fitness_vector(&mut self) {
        self.fitness.clear();
    }
}

impl Chromosome for Candidate {
    type Ruleset = Genome;

    fn from_ruleset(ruleset: Genome, _level: &LevelDescription, _sprites: &[String]) -> Self {
        let mut c = Self::from_genes(ruleset.genes);
        c.tick = ruleset.tick;
        c
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        self.mutations += 1;
        if self.genes.is_empty() {
            return;
        }
        let i = rng.random_range(0..self.genes.len());
        self.genes[i] = rng.random_range(0.0..1.0);
    }

    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let mut a = self.clone();
        let mut b = other.clone();
        a.crossed = true;
        b.crossed = true;
        let n = self.genes.len().min(other.genes.len());
        if n < 2 {
            return (a, b);
        }
        let point = rng.random_range(1..n);
        a.genes[point..n].copy_from_slice(&other.genes[point..n]);
        b.genes[point..n].copy_from_slice(&self.genes[point..n]);
        (a, b)
    }

    fn calculate_fitness(&mut self, _allowance: Duration) {
        if let Some((clock, step)) = &self.tick {
            clock.advance(*step);
        }
        if self.genes.is_empty() {
            return;
        }
        let sum: f64 = self.genes.iter().sum();
        let mean = sum / self.genes.len() as f64;
        self.constraint = mean * 2.0;
        if self.feasibility_test() {
            self.fitness = vec![sum];
            self.combined = sum;
        } else {
            self.fitness = vec![0.0];
            self.combined = 0.0;
        }
    }

    fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    fn combined_fitness(&self) -> f64 {
        self.combined
    }

    fn constraint_fitness(&self) -> f64 {
        self.constraint
    }

    fn feasibility_test(&self) -> bool {
        self.constraint >= self.threshold
    }

    fn ruleset(&self) -> Genome {
        Genome {
            genes: self.genes.clone(),
            tick: self.tick.clone(),
        }
    }
}

/// Seeds genomes with genes drawn uniformly from `low..high`.
pub struct UniformSeed {
    pub len: usize,
    pub low: f64,
    pub high: f64,
    pub tick: Option<(ManualClock, Duration)>,
}

impl UniformSeed {
    pub fn new(len: usize, low: f64, high: f64) -> Self {
        Self {
            len,
            low,
            high,
            tick: None,
        }
    }

    pub fn with_tick(mut self, clock: ManualClock, step: Duration) -> Self {
        self.tick = Some((clock, step));
        self
    }
}

impl SeedStrategy for UniformSeed {
    type Ruleset = Genome;

    fn generate<R: Rng>(&self, _level: &LevelDescription, _budget: Duration, rng: &mut R) -> Genome {
        Genome {
            genes: (0..self.len)
                .map(|_| rng.random_range(self.low..self.high))
                .collect(),
            tick: self.tick.clone(),
        }
    }
}

/// Builds an evaluated population from explicit gene vectors.
pub fn evaluated(genes: &[Vec<f64>]) -> Vec<Candidate> {
    genes
        .iter()
        .map(|g| {
            let mut c = Candidate::from_genes(g.clone());
            c.calculate_fitness(Duration::ZERO);
            c
        })
        .collect()
}
