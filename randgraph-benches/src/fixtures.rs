//! Vertex fixtures for generation benchmarks.
//!
//! Labels are shuffled with a seeded generator so benchmark inputs are
//! reproducible but not presented in a trivially sorted order.

use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
use randgraph_core::{MIN_VERTICES, Vertex, VertexSet, vertices};

use crate::error::BenchSetupError;

/// Builds a validated set of `count` distinct labels, shuffled by `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::TooFewVertices`] when `count` is below
/// [`MIN_VERTICES`].
///
/// # Examples
/// ```
/// use randgraph_benches::fixtures::vertex_set;
///
/// let set = vertex_set(16, 42).expect("16 vertices are enough");
/// assert_eq!(set.len(), 16);
/// ```
pub fn vertex_set(count: usize, seed: u64) -> Result<VertexSet, BenchSetupError> {
    if count < MIN_VERTICES {
        return Err(BenchSetupError::TooFewVertices {
            requested: count,
            min: MIN_VERTICES,
        });
    }
    let mut labels = labelled(count);
    labels.shuffle(&mut SmallRng::seed_from_u64(seed));
    VertexSet::try_from(labels).map_err(BenchSetupError::from)
}

fn labelled(count: usize) -> Vec<Vertex> {
    vertices((0..count).map(|index| format!("v{index:05}")))
}
