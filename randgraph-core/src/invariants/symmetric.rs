//! Symmetric edge invariant for undirected graphs.
//!
//! Ensures every directed edge has a matching reverse edge, which is how an
//! undirected graph is represented in the adjacency mapping.
use tracing::{Level, debug, trace};

use super::{EvaluationMode, GraphInvariantViolation, helpers::for_each_edge};
use crate::graph::Graph;

pub(super) fn check_symmetric(
    graph: &Graph,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    if tracing::enabled!(Level::TRACE) {
        trace!(edges = graph.edge_count(), "checking symmetric edges");
    }
    for_each_edge(graph, |origin, target| {
        if graph.contains_edge(target, origin) {
            Ok(())
        } else {
            debug!(%origin, %target, "missing backlink");
            mode.record(GraphInvariantViolation::MissingBacklink {
                origin: origin.clone(),
                target: target.clone(),
            })
        }
    })
}
