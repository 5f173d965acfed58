//! Tests for the invariant checker dispatch and evaluation modes.

use rstest::rstest;

use super::{GraphInvariant, GraphInvariantViolation};
use crate::{graph::Graph, vertex::Vertex};

fn edge(origin: &str, target: &str) -> (Vertex, Vertex) {
    (Vertex::from(origin), Vertex::from(target))
}

fn triangle() -> Graph {
    [
        ("a", vec!["b", "c"]),
        ("b", vec!["a", "c"]),
        ("c", vec!["a", "b"]),
    ]
    .into_iter()
    .collect()
}

fn chain() -> Graph {
    [("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])]
        .into_iter()
        .collect()
}

#[test]
fn triangle_is_symmetric_but_cyclic() {
    let graph = triangle();
    let checker = graph.invariants();
    checker
        .check_many([
            GraphInvariant::ClosedKeys,
            GraphInvariant::NoSelfLoops,
            GraphInvariant::Symmetric,
        ])
        .expect("triangle is a valid undirected graph");
    assert!(matches!(
        checker.check(GraphInvariant::Acyclic),
        Err(GraphInvariantViolation::Cycle { .. })
    ));
}

#[test]
fn chain_is_acyclic_but_asymmetric() {
    let graph = chain();
    let checker = graph.invariants();
    checker
        .check_many([
            GraphInvariant::ClosedKeys,
            GraphInvariant::NoSelfLoops,
            GraphInvariant::Acyclic,
        ])
        .expect("chain is a valid DAG");
    let (origin, target) = edge("a", "b");
    assert_eq!(
        checker.check(GraphInvariant::Symmetric),
        Err(GraphInvariantViolation::MissingBacklink { origin, target })
    );
}

#[rstest]
#[case::missing_vertex(
    Graph::from_iter([("a", vec!["b"])]),
    GraphInvariant::ClosedKeys,
    GraphInvariantViolation::MissingVertex {
        origin: Vertex::from("a"),
        target: Vertex::from("b"),
    },
)]
#[case::self_loop(
    Graph::from_iter([("a", vec!["a"])]),
    GraphInvariant::NoSelfLoops,
    GraphInvariantViolation::SelfLoop { vertex: Vertex::from("a") },
)]
#[case::two_cycle(
    Graph::from_iter([("a", vec!["b"]), ("b", vec!["a"])]),
    GraphInvariant::Acyclic,
    GraphInvariantViolation::Cycle { vertex: Vertex::from("a") },
)]
fn fail_fast_reports_first_violation(
    #[case] graph: Graph,
    #[case] invariant: GraphInvariant,
    #[case] expected: GraphInvariantViolation,
) {
    assert_eq!(graph.invariants().check(invariant), Err(expected));
}

#[test]
fn collect_all_gathers_every_violation() {
    let graph: Graph = [("a", vec!["b", "a"]), ("b", vec!["z"])]
        .into_iter()
        .collect();
    let violations = graph.invariants().collect_all();

    assert!(violations.contains(&GraphInvariantViolation::MissingVertex {
        origin: Vertex::from("b"),
        target: Vertex::from("z"),
    }));
    assert!(violations.contains(&GraphInvariantViolation::SelfLoop {
        vertex: Vertex::from("a"),
    }));
    assert!(violations.contains(&GraphInvariantViolation::MissingBacklink {
        origin: Vertex::from("a"),
        target: Vertex::from("b"),
    }));
    assert!(violations.contains(&GraphInvariantViolation::Cycle {
        vertex: Vertex::from("a"),
    }));
}

#[test]
fn empty_graph_upholds_everything() {
    let graph = Graph::default();
    graph.invariants().check_all().expect("empty graph is valid");
    assert!(graph.invariants().collect_all().is_empty());
}

#[test]
fn violations_render_readable_messages() {
    let violation = GraphInvariantViolation::MissingBacklink {
        origin: Vertex::from("a"),
        target: Vertex::from("b"),
    };
    assert_eq!(violation.to_string(), "edge a->b is missing the reverse edge");
}
