//! Closed-key invariant: every referenced destination has its own entry.
use super::{EvaluationMode, GraphInvariantViolation, helpers::for_each_edge};
use crate::graph::Graph;

pub(super) fn check_closed_keys(
    graph: &Graph,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    for_each_edge(graph, |origin, target| {
        if graph.contains_vertex(target) {
            Ok(())
        } else {
            mode.record(GraphInvariantViolation::MissingVertex {
                origin: origin.clone(),
                target: target.clone(),
            })
        }
    })
}
