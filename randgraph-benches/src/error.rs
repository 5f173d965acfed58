//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` instead of `.expect()`.

use randgraph_core::ValidationError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A fixture vertex set was rejected by the generators.
    #[error("fixture vertex set is invalid: {0}")]
    Validation(#[from] ValidationError),
    /// A fixture was requested with fewer vertices than a generator accepts.
    #[error("fixture needs at least {min} vertices (got {requested})")]
    TooFewVertices {
        /// Vertices requested by the benchmark.
        requested: usize,
        /// Smallest accepted vertex count.
        min: usize,
    },
}
