//! Structural invariant checks for generated graphs.
//!
//! The checkers are surfaced via [`Graph::invariants`] so tests and callers
//! can assert the guarantees of each generator without reimplementing the
//! traversal logic.

mod acyclic;
mod closed_keys;
mod helpers;
mod self_loops;
mod symmetric;

use thiserror::Error;

use crate::{graph::Graph, vertex::Vertex};

use self::{
    acyclic::check_acyclic, closed_keys::check_closed_keys, self_loops::check_self_loops,
    symmetric::check_symmetric,
};

/// Enumerates the structural invariants a generated graph may uphold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphInvariant {
    /// Every destination referenced by an edge has its own entry.
    ClosedKeys,
    /// No vertex has an edge to itself.
    NoSelfLoops,
    /// Every edge is mirrored by its reverse edge.
    Symmetric,
    /// No vertex can reach itself through one or more edges.
    Acyclic,
}

impl GraphInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::ClosedKeys,
            Self::NoSelfLoops,
            Self::Symmetric,
            Self::Acyclic,
        ]
    }
}

/// Reports an invariant violation surfaced by [`GraphInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphInvariantViolation {
    /// An edge points at a vertex that has no entry in the graph.
    #[error("edge {origin}->{target} points at a vertex with no entry")]
    MissingVertex {
        /// Vertex owning the edge.
        origin: Vertex,
        /// Destination lacking an entry.
        target: Vertex,
    },
    /// A vertex lists itself as a neighbour.
    #[error("vertex {vertex} has an edge to itself")]
    SelfLoop {
        /// Vertex carrying the self-loop.
        vertex: Vertex,
    },
    /// An edge lacks its reverse counterpart.
    #[error("edge {origin}->{target} is missing the reverse edge")]
    MissingBacklink {
        /// Source of the one-way edge.
        origin: Vertex,
        /// Destination lacking the reverse edge.
        target: Vertex,
    },
    /// A vertex lies on a directed cycle.
    #[error("vertex {vertex} can reach itself")]
    Cycle {
        /// Vertex that reaches itself.
        vertex: Vertex,
    },
}

/// Helper returned by [`Graph::invariants`] to run structural checks.
///
/// # Examples
/// ```
/// use randgraph_core::{Graph, GraphInvariant, GraphInvariantViolation, Vertex};
///
/// let graph: Graph = [("a", vec!["b"]), ("b", vec![])].into_iter().collect();
/// assert!(graph.invariants().check(GraphInvariant::Acyclic).is_ok());
/// assert_eq!(
///     graph.invariants().check(GraphInvariant::Symmetric),
///     Err(GraphInvariantViolation::MissingBacklink {
///         origin: Vertex::from("a"),
///         target: Vertex::from("b"),
///     }),
/// );
/// ```
#[derive(Debug)]
pub struct GraphInvariantChecker<'graph> {
    graph: &'graph Graph,
}

impl<'graph> GraphInvariantChecker<'graph> {
    pub(crate) const fn new(graph: &'graph Graph) -> Self {
        Self { graph }
    }

    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), GraphInvariantViolation> {
        self.check_many(GraphInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
    ) -> Result<(), GraphInvariantViolation> {
        self.run_with_mode(invariants, EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check(&self, invariant: GraphInvariant) -> Result<(), GraphInvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<GraphInvariantViolation> {
        self.collect_many(GraphInvariant::all())
    }

    /// Executes the selected invariants and returns every violation discovered.
    #[must_use]
    pub fn collect_many(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
    ) -> Vec<GraphInvariantViolation> {
        let mut violations = Vec::new();
        // Collect mode records instead of failing, so the result is always Ok.
        let _ = self.run_with_mode(invariants, EvaluationMode::Collect(&mut violations));
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
        mut mode: EvaluationMode<'_>,
    ) -> Result<(), GraphInvariantViolation> {
        for invariant in invariants {
            dispatch(self.graph, invariant, &mut mode)?;
        }
        Ok(())
    }
}

fn dispatch(
    graph: &Graph,
    invariant: GraphInvariant,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), GraphInvariantViolation> {
    match invariant {
        GraphInvariant::ClosedKeys => check_closed_keys(graph, mode),
        GraphInvariant::NoSelfLoops => check_self_loops(graph, mode),
        GraphInvariant::Symmetric => check_symmetric(graph, mode),
        GraphInvariant::Acyclic => check_acyclic(graph, mode),
    }
}

pub(super) enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<GraphInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(&mut self, violation: GraphInvariantViolation) -> Result<(), GraphInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
