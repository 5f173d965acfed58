//! The adjacency mapping returned by the generators.

use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{invariants::GraphInvariantChecker, vertex::Vertex};

/// Mapping from each vertex to the destinations of its outgoing edges.
///
/// A generated graph is immutable. Neighbour order is not part of the
/// contract, although seeded generation reproduces it exactly; equality
/// compares neighbour sets.
///
/// # Examples
/// ```
/// use randgraph_core::{Graph, Vertex};
///
/// let graph: Graph = [("a", vec!["b"]), ("b", vec![])].into_iter().collect();
/// assert_eq!(graph.len(), 2);
/// assert!(graph.contains_edge("a", "b"));
/// assert!(!graph.contains_edge("b", "a"));
/// assert_eq!(graph.neighbours("a"), Some(&[Vertex::from("b")][..]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    entries: Vec<(Vertex, Vec<Vertex>)>,
    positions: HashMap<Vertex, usize>,
}

impl Graph {
    pub(crate) fn from_entries(entries: Vec<(Vertex, Vec<Vertex>)>) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, (vertex, _))| (vertex.clone(), position))
            .collect();
        Self { entries, positions }
    }

    /// Returns the number of vertices with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no vertex has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of directed edges.
    ///
    /// An undirected edge counts twice, once per direction.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, neighbours)| neighbours.len()).sum()
    }

    /// Iterates over the vertices with an entry.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.entries.iter().map(|(vertex, _)| vertex)
    }

    /// Iterates over each vertex alongside its outgoing neighbours.
    pub fn iter(&self) -> impl Iterator<Item = (&Vertex, &[Vertex])> + '_ {
        self.entries
            .iter()
            .map(|(vertex, neighbours)| (vertex, neighbours.as_slice()))
    }

    /// Returns the outgoing neighbours of `vertex`, or `None` when it has no
    /// entry.
    #[must_use]
    pub fn neighbours<Q>(&self, vertex: &Q) -> Option<&[Vertex]>
    where
        Vertex: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.positions.get(vertex)?;
        self.entries
            .get(position)
            .map(|(_, neighbours)| neighbours.as_slice())
    }

    /// Returns `true` when `vertex` has an entry.
    #[must_use]
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        Vertex: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(vertex)
    }

    /// Returns `true` when the edge `source -> target` is present.
    #[must_use]
    pub fn contains_edge<Q>(&self, source: &Q, target: &Q) -> bool
    where
        Vertex: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbours(source)
            .is_some_and(|neighbours| {
                neighbours
                    .iter()
                    .any(|neighbour| <Vertex as Borrow<Q>>::borrow(neighbour) == target)
            })
    }

    /// Returns a checker for the structural invariants of this graph.
    #[must_use]
    pub fn invariants(&self) -> GraphInvariantChecker<'_> {
        GraphInvariantChecker::new(self)
    }

    /// Converts the graph into a plain adjacency map.
    #[must_use]
    pub fn into_adjacency(self) -> HashMap<Vertex, Vec<Vertex>> {
        self.entries.into_iter().collect()
    }

    fn neighbour_set(&self, vertex: &Vertex) -> Option<HashSet<&Vertex>> {
        self.neighbours(vertex)
            .map(|neighbours| neighbours.iter().collect())
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(vertex, _)| {
                let ours = self.neighbour_set(vertex);
                ours.is_some() && ours == other.neighbour_set(vertex)
            })
    }
}

impl Eq for Graph {}

impl<'a> IntoIterator for &'a Graph {
    type Item = (&'a Vertex, &'a [Vertex]);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Builds a graph from `(vertex, neighbours)` pairs.
///
/// Repeated keys merge their neighbour lists; repeated neighbours are kept
/// once, in first-seen order.
impl<K, I> FromIterator<(K, I)> for Graph
where
    K: Into<Vertex>,
    I: IntoIterator,
    I::Item: Into<Vertex>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut entries: Vec<(Vertex, Vec<Vertex>)> = Vec::new();
        let mut positions: HashMap<Vertex, usize> = HashMap::new();
        for (key, neighbours) in iter {
            let vertex = key.into();
            let position = *positions.entry(vertex.clone()).or_insert_with(|| {
                entries.push((vertex, Vec::new()));
                entries.len() - 1
            });
            if let Some((_, list)) = entries.get_mut(position) {
                for neighbour in neighbours {
                    let neighbour = neighbour.into();
                    if !list.contains(&neighbour) {
                        list.push(neighbour);
                    }
                }
            }
        }
        Self { entries, positions }
    }
}
