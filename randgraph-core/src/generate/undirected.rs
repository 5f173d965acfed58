//! Undirected-cyclic generation.
//!
//! Every source vertex, visited in random order, is joined to a random
//! non-empty prefix of a fresh shuffle of the other vertices. Each edge is
//! written in both directions, so the result is symmetric; cycles are
//! permitted and typical.

use tracing::trace;

use super::{adjacency::Adjacency, shuffled, source_order};
use crate::{graph::Graph, rng::RandomSource, vertex::VertexSet};

pub(super) fn build<S: RandomSource + ?Sized>(set: &VertexSet, source: &mut S) -> Graph {
    let len = set.len();
    let order = source_order(len, source);
    let mut adjacency = Adjacency::new(len);

    for &src in &order {
        let candidates = shuffled(&order, source);
        let pick = draw_pick(len, source);
        adjacency.ensure(src);

        let mut picked = 0;
        for dst in candidates {
            if dst != src {
                adjacency.insert(src, dst);
                adjacency.insert(dst, src);
                picked += 1;
            }
            if picked == pick {
                break;
            }
        }
    }

    adjacency.into_graph(set)
}

/// Draws how many neighbours a source receives, uniform on `[1, len)`.
///
/// Zero draws are rejected and redrawn rather than shifted; the number of
/// calls made against `source` is part of the seeded output contract.
fn draw_pick<S: RandomSource + ?Sized>(len: usize, source: &mut S) -> usize {
    loop {
        let pick = source.uniform_int(len);
        if pick != 0 {
            return pick;
        }
        trace!(len, "rejected zero neighbour count");
    }
}
