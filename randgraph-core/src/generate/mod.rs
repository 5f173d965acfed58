//! Random graph generation entry points.
//!
//! Both flavours validate their input first and propagate the
//! [`ValidationError`](crate::ValidationError) unchanged. Generation itself
//! cannot fail once the vertex set is valid. Neither flavour guarantees a
//! connected result: the random draws may leave the graph partitioned.

mod acyclic;
mod adjacency;
mod undirected;

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    Result,
    graph::Graph,
    invariants::GraphInvariant,
    rng::{RandomSource, with_shared_source},
    vertex::{Vertex, VertexSet},
};

/// Topological flavour of a generated graph.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GraphKind {
    /// Every edge is mirrored in both directions; cycles are permitted.
    #[default]
    UndirectedCyclic,
    /// Edges are one-directional and no directed cycle exists.
    DirectedAcyclic,
}

impl GraphKind {
    /// Returns both flavours.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::UndirectedCyclic, Self::DirectedAcyclic]
    }

    /// Returns a stable, human-readable name for the flavour.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UndirectedCyclic => "undirected-cyclic",
            Self::DirectedAcyclic => "directed-acyclic",
        }
    }

    /// Lists the invariants every graph of this flavour upholds.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GraphInvariant, GraphKind};
    ///
    /// assert!(GraphKind::DirectedAcyclic.invariants().contains(&GraphInvariant::Acyclic));
    /// assert!(!GraphKind::UndirectedCyclic.invariants().contains(&GraphInvariant::Acyclic));
    /// ```
    #[must_use]
    pub const fn invariants(self) -> &'static [GraphInvariant] {
        match self {
            Self::UndirectedCyclic => &[
                GraphInvariant::ClosedKeys,
                GraphInvariant::NoSelfLoops,
                GraphInvariant::Symmetric,
            ],
            Self::DirectedAcyclic => &[
                GraphInvariant::ClosedKeys,
                GraphInvariant::NoSelfLoops,
                GraphInvariant::Acyclic,
            ],
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates a graph of the requested `kind` over `vertices`, drawing every
/// random decision from `source`.
///
/// # Errors
/// Returns the [`ValidationError`](crate::ValidationError) produced by
/// [`validate`](crate::validate()) when `vertices` is too short or repeats a
/// vertex.
#[instrument(
    level = "debug",
    skip(vertices, source),
    fields(kind = %kind, vertices = vertices.len())
)]
pub fn generate<S: RandomSource + ?Sized>(
    kind: GraphKind,
    vertices: &[Vertex],
    source: &mut S,
) -> Result<Graph> {
    let set = VertexSet::try_from_slice(vertices).inspect_err(|err| {
        debug!(code = %err.code(), error = %err, "rejected vertex set");
    })?;
    Ok(generate_from_set(kind, &set, source))
}

pub(crate) fn generate_from_set<S: RandomSource + ?Sized>(
    kind: GraphKind,
    set: &VertexSet,
    source: &mut S,
) -> Graph {
    let graph = match kind {
        GraphKind::UndirectedCyclic => undirected::build(set, source),
        GraphKind::DirectedAcyclic => acyclic::build(set, source),
    };
    debug!(
        kind = %kind,
        vertices = graph.len(),
        edges = graph.edge_count(),
        "generated graph"
    );
    graph
}

/// Generates an undirected-cyclic graph: every edge `a -> b` is accompanied
/// by `b -> a`.
///
/// # Errors
/// Returns the [`ValidationError`](crate::ValidationError) for invalid input.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::{undirected_cyclic, vertices};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = undirected_cyclic(&vertices(["a", "b"]), &mut rng).expect("valid input");
/// assert!(graph.contains_edge("a", "b"));
/// assert!(graph.contains_edge("b", "a"));
/// ```
pub fn undirected_cyclic<S: RandomSource + ?Sized>(
    vertices: &[Vertex],
    source: &mut S,
) -> Result<Graph> {
    generate(GraphKind::UndirectedCyclic, vertices, source)
}

/// Generates a directed graph guaranteed to contain no cycle.
///
/// # Errors
/// Returns the [`ValidationError`](crate::ValidationError) for invalid input.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::{directed_acyclic, vertices};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = directed_acyclic(&vertices(["a", "b"]), &mut rng).expect("valid input");
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.contains_edge("a", "b") != graph.contains_edge("b", "a"));
/// ```
pub fn directed_acyclic<S: RandomSource + ?Sized>(
    vertices: &[Vertex],
    source: &mut S,
) -> Result<Graph> {
    generate(GraphKind::DirectedAcyclic, vertices, source)
}

/// Like [`undirected_cyclic`], drawing from the process-wide shared source.
///
/// # Errors
/// Returns the [`ValidationError`](crate::ValidationError) for invalid input.
pub fn generate_undirected_cyclic(vertices: &[Vertex]) -> Result<Graph> {
    with_shared_source(|rng| undirected_cyclic(vertices, rng))
}

/// Like [`directed_acyclic`], drawing from the process-wide shared source.
///
/// # Errors
/// Returns the [`ValidationError`](crate::ValidationError) for invalid input.
pub fn generate_directed_acyclic(vertices: &[Vertex]) -> Result<Graph> {
    with_shared_source(|rng| directed_acyclic(vertices, rng))
}

/// Random visiting order over positions `0..len`.
fn source_order<S: RandomSource + ?Sized>(len: usize, source: &mut S) -> Vec<usize> {
    source.permutation(len)
}

/// Fresh shuffle of every position, applied on top of `order`.
fn shuffled<S: RandomSource + ?Sized>(order: &[usize], source: &mut S) -> Vec<usize> {
    source
        .permutation(order.len())
        .into_iter()
        .map(|index| order[index])
        .collect()
}
