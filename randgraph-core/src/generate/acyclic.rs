//! Directed-acyclic generation.
//!
//! Every source vertex, visited in random order, tries every other vertex in
//! a fresh random order. An edge `src -> dst` is committed only when `dst`
//! cannot already reach `src` through committed edges, so no edge ever closes
//! a cycle.
use std::collections::VecDeque;

use tracing::trace;

use super::{adjacency::Adjacency, shuffled, source_order};
use crate::{graph::Graph, rng::RandomSource, vertex::VertexSet};

pub(super) fn build<S: RandomSource + ?Sized>(set: &VertexSet, source: &mut S) -> Graph {
    let len = set.len();
    let order = source_order(len, source);
    let mut adjacency = Adjacency::new(len);
    let mut search = ReachabilitySearch::new(len);

    for &src in &order {
        let candidates = shuffled(&order, source);
        adjacency.ensure(src);
        for dst in candidates {
            if dst == src {
                continue;
            }
            if search.can_add(&adjacency, src, dst) {
                adjacency.insert(src, dst);
            } else {
                trace!(src, dst, "rejected cycle-forming edge");
            }
        }
    }

    adjacency.into_graph(set)
}

/// Breadth-first reachability over committed edges, reusing its buffers
/// between queries.
struct ReachabilitySearch {
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl ReachabilitySearch {
    fn new(capacity: usize) -> Self {
        Self {
            visited: vec![false; capacity],
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns `true` when `src -> dst` can be committed without closing a
    /// cycle, i.e. `dst` cannot reach `src`.
    fn can_add(&mut self, adjacency: &Adjacency, src: usize, dst: usize) -> bool {
        if src == dst {
            return false;
        }
        self.reset();
        self.visit(dst);
        while let Some(head) = self.queue.pop_front() {
            if head == src {
                return false;
            }
            for next in adjacency.neighbours(head) {
                if !self.visited[next] {
                    self.visit(next);
                }
            }
        }
        true
    }

    fn reset(&mut self) {
        self.visited.fill(false);
        self.queue.clear();
    }

    fn visit(&mut self, vertex: usize) {
        self.visited[vertex] = true;
        self.queue.push_back(vertex);
    }
}
