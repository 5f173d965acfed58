//! Benchmark support crate for randgraph.
//!
//! Provides vertex fixtures and parameter types used by the Criterion
//! benchmarks for both generators.

pub mod error;
pub mod fixtures;
pub mod params;
