//! Randgraph core library.
//!
//! Generates random graphs over a caller-supplied set of vertex labels. Two
//! flavours are available: undirected graphs that may contain cycles, and
//! directed acyclic graphs. Both return an adjacency mapping from each vertex
//! to its outgoing neighbours.
//!
//! ```
//! use randgraph_core::{GraphKind, RandomGraphBuilder, vertices};
//!
//! let generator = RandomGraphBuilder::new()
//!     .with_kind(GraphKind::DirectedAcyclic)
//!     .with_rng_seed(3)
//!     .build();
//! let graph = generator.generate(&vertices(["a", "b", "c"])).expect("valid input");
//! graph
//!     .invariants()
//!     .check_many(GraphKind::DirectedAcyclic.invariants().iter().copied())
//!     .expect("DAG invariants hold");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod generate;
mod graph;
mod invariants;
mod rng;
#[cfg(test)]
mod test_utils;
mod validate;
mod vertex;

pub use crate::{
    builder::{RandomGraph, RandomGraphBuilder},
    error::{Result, ValidationError, ValidationErrorCode},
    generate::{
        GraphKind, directed_acyclic, generate, generate_directed_acyclic,
        generate_undirected_cyclic, undirected_cyclic,
    },
    graph::Graph,
    invariants::{GraphInvariant, GraphInvariantChecker, GraphInvariantViolation},
    rng::{DEFAULT_SEED, RandomSource, reseed, reseed_with, with_shared_source},
    validate::{MIN_VERTICES, validate, validate_optional},
    vertex::{Vertex, VertexSet, vertices},
};
