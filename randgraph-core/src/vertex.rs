//! Vertex labels and validated vertex sets.

use std::{borrow::Borrow, fmt, slice, sync::Arc};

use crate::{Result, validate::validate};

/// Opaque, string-like vertex label.
///
/// Cloning is cheap: the label is shared behind an [`Arc`].
///
/// # Examples
/// ```
/// use randgraph_core::Vertex;
///
/// let vertex = Vertex::from("a");
/// assert_eq!(vertex.as_str(), "a");
/// assert_eq!(vertex.to_string(), "a");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Vertex(Arc<str>);

impl Vertex {
    /// Creates a vertex from any label convertible into a shared string.
    #[must_use]
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self(Arc::from(label))
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self(Arc::from(label))
    }
}

impl From<Arc<str>> for Vertex {
    fn from(label: Arc<str>) -> Self {
        Self(label)
    }
}

/// Builds a vertex list from string labels.
///
/// # Examples
/// ```
/// use randgraph_core::vertices;
///
/// let vs = vertices(["a", "b", "c"]);
/// assert_eq!(vs.len(), 3);
/// assert_eq!(vs[1].as_str(), "b");
/// ```
#[must_use]
pub fn vertices<I>(labels: I) -> Vec<Vertex>
where
    I: IntoIterator,
    I::Item: Into<Vertex>,
{
    labels.into_iter().map(Into::into).collect()
}

/// Ordered, validated collection of distinct vertices.
///
/// A `VertexSet` always holds at least two pairwise distinct vertices. It is
/// read-only; generators work on permutations of its positions.
///
/// # Examples
/// ```
/// use randgraph_core::{ValidationError, VertexSet, vertices};
///
/// let set = VertexSet::try_from_slice(&vertices(["a", "b"])).expect("set is valid");
/// assert_eq!(set.len(), 2);
///
/// let err = VertexSet::try_from_slice(&vertices(["a"])).expect_err("too small");
/// assert_eq!(err, ValidationError::InvalidInput { len: 1 });
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VertexSet {
    vertices: Arc<[Vertex]>,
}

impl VertexSet {
    /// Validates `vertices` and copies them into a new set.
    ///
    /// # Errors
    /// Returns [`crate::ValidationError::InvalidInput`] when fewer than two
    /// vertices are supplied and [`crate::ValidationError::DuplicateVertex`]
    /// when a vertex repeats.
    pub fn try_from_slice(vertices: &[Vertex]) -> Result<Self> {
        validate(vertices)?;
        Ok(Self {
            vertices: Arc::from(vertices),
        })
    }

    /// Returns the number of vertices in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the set holds no vertices, which validation rules
    /// out for every constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Vertex> {
        self.vertices.get(position)
    }

    /// Returns the vertices in input order.
    #[must_use]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates over the vertices in input order.
    pub fn iter(&self) -> slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }
}

impl TryFrom<Vec<Vertex>> for VertexSet {
    type Error = crate::ValidationError;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        validate(&vertices)?;
        Ok(Self {
            vertices: Arc::from(vertices),
        })
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a Vertex;
    type IntoIter = slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
