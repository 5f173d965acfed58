//! Position-indexed edge bookkeeping shared by both generators.
//!
//! Vertices are addressed by their position in the validated [`VertexSet`],
//! and each entry keeps its neighbours in a sorted set so materialisation is
//! deterministic.

use std::collections::BTreeSet;

use crate::{graph::Graph, vertex::VertexSet};

#[derive(Debug)]
pub(super) struct Adjacency {
    entries: Vec<Option<BTreeSet<usize>>>,
}

impl Adjacency {
    pub(super) fn new(len: usize) -> Self {
        Self {
            entries: vec![None; len],
        }
    }

    /// Gives `vertex` an entry, even if it never gains an edge.
    pub(super) fn ensure(&mut self, vertex: usize) -> &mut BTreeSet<usize> {
        self.entries[vertex].get_or_insert_with(BTreeSet::new)
    }

    /// Records `source -> target`, creating the source entry as needed.
    pub(super) fn insert(&mut self, source: usize, target: usize) -> bool {
        self.ensure(source).insert(target)
    }

    pub(super) fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries[vertex].iter().flatten().copied()
    }

    pub(super) fn edge_count(&self) -> usize {
        self.entries.iter().flatten().map(BTreeSet::len).sum()
    }

    /// Converts positions back into vertices, keeping input order for keys
    /// and neighbours alike.
    pub(super) fn into_graph(self, set: &VertexSet) -> Graph {
        let entries = self
            .entries
            .into_iter()
            .zip(set.iter())
            .filter_map(|(neighbours, vertex)| {
                let neighbours = neighbours?
                    .into_iter()
                    .filter_map(|position| set.get(position).cloned())
                    .collect();
                Some((vertex.clone(), neighbours))
            })
            .collect();
        Graph::from_entries(entries)
    }
}
