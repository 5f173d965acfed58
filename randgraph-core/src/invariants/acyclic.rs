//! Acyclicity invariant for directed graphs.
//!
//! Runs a breadth-first search from every vertex over its outgoing edges and
//! reports each vertex that reaches itself. Destinations without an entry are
//! treated as sinks; [`super::GraphInvariant::ClosedKeys`] reports them.
use std::collections::{HashSet, VecDeque};

use super::{EvaluationMode, GraphInvariantViolation};
use crate::{graph::Graph, vertex::Vertex};

pub(super) fn check_acyclic(
    graph: &Graph,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    let mut context = BfsContext::default();
    for vertex in graph.vertices() {
        if context.reaches_itself(graph, vertex) {
            mode.record(GraphInvariantViolation::Cycle {
                vertex: vertex.clone(),
            })?;
        }
    }
    Ok(())
}

#[derive(Default)]
struct BfsContext<'g> {
    visited: HashSet<&'g Vertex>,
    queue: VecDeque<&'g Vertex>,
}

impl<'g> BfsContext<'g> {
    fn reaches_itself(&mut self, graph: &'g Graph, origin: &'g Vertex) -> bool {
        self.visited.clear();
        self.queue.clear();
        self.enqueue_neighbours(graph, origin);
        while let Some(vertex) = self.queue.pop_front() {
            if vertex == origin {
                return true;
            }
            self.enqueue_neighbours(graph, vertex);
        }
        false
    }

    fn enqueue_neighbours(&mut self, graph: &'g Graph, vertex: &'g Vertex) {
        for neighbour in graph.neighbours(vertex).unwrap_or_default() {
            if self.visited.insert(neighbour) {
                self.queue.push_back(neighbour);
            }
        }
    }
}
