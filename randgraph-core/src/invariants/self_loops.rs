//! No-self-loop invariant: no vertex lists itself as a neighbour.

use super::{EvaluationMode, GraphInvariantViolation, helpers::for_each_edge};
use crate::graph::Graph;

pub(super) fn check_self_loops(
    graph: &Graph,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    for_each_edge(graph, |origin, target| {
        if origin == target {
            mode.record(GraphInvariantViolation::SelfLoop {
                vertex: origin.clone(),
            })
        } else {
            Ok(())
        }
    })
}
