//! Benchmark parameter types.

use std::fmt;

use randgraph_core::GraphKind;

/// Parameters for a single generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateBenchParams {
    /// Graph flavour under test.
    pub kind: GraphKind,
    /// Number of vertices in the input set.
    pub vertex_count: usize,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.kind, self.vertex_count)
    }
}
