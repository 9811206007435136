//! Crate-wide error type.

/// Errors that abort a rule generation run.
///
/// Problems inside a single chromosome's evaluation never surface here;
/// they show up only as the fitness and constraint values the chromosome
/// reports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("DegeneratePopulation: feasible and infeasible populations are both empty")]
    DegeneratePopulation,
}

pub type Result<T> = std::result::Result<T, Error>;
