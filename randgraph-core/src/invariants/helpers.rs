//! Edge traversal shared by the invariant checks.

use crate::{graph::Graph, vertex::Vertex};

use super::GraphInvariantViolation;

pub(super) fn for_each_edge<'g>(
    graph: &'g Graph,
    mut visitor: impl FnMut(&'g Vertex, &'g Vertex) -> Result<(), GraphInvariantViolation>,
) -> Result<(), GraphInvariantViolation> {
    for (source, neighbours) in graph.iter() {
        for target in neighbours {
            visitor(source, target)?;
        }
    }
    Ok(())
}
