//! Vertex collection validation shared by both generators.

use std::collections::HashSet;

use crate::{Result, error::ValidationError, vertex::Vertex};

/// Smallest vertex collection a generator accepts.
pub const MIN_VERTICES: usize = 2;

/// Checks that `vertices` can seed a random graph.
///
/// # Errors
/// Returns [`ValidationError::InvalidInput`] when fewer than
/// [`MIN_VERTICES`] vertices are supplied, and
/// [`ValidationError::DuplicateVertex`] naming the first vertex seen twice.
///
/// # Examples
/// ```
/// use randgraph_core::{ValidationError, Vertex, validate, vertices};
///
/// assert!(validate(&vertices(["a", "b", "c"])).is_ok());
/// assert_eq!(
///     validate(&vertices(["a"])),
///     Err(ValidationError::InvalidInput { len: 1 }),
/// );
/// assert_eq!(
///     validate(&vertices(["a", "b", "c", "b"])),
///     Err(ValidationError::DuplicateVertex { vertex: Vertex::from("b") }),
/// );
/// ```
pub fn validate(vertices: &[Vertex]) -> Result<()> {
    if vertices.len() < MIN_VERTICES {
        return Err(ValidationError::InvalidInput {
            len: vertices.len(),
        });
    }
    let mut seen = HashSet::with_capacity(vertices.len());
    for vertex in vertices {
        if !seen.insert(vertex) {
            return Err(ValidationError::DuplicateVertex {
                vertex: vertex.clone(),
            });
        }
    }
    Ok(())
}

/// Validates a possibly absent collection; `None` is rejected like an empty
/// one.
///
/// # Errors
/// Returns [`ValidationError::InvalidInput`] with `len: 0` for `None`,
/// otherwise behaves like [`validate`].
///
/// # Examples
/// ```
/// use randgraph_core::{ValidationError, validate_optional};
///
/// assert_eq!(
///     validate_optional(None),
///     Err(ValidationError::InvalidInput { len: 0 }),
/// );
/// ```
pub fn validate_optional(vertices: Option<&[Vertex]>) -> Result<()> {
    vertices.map_or(Err(ValidationError::InvalidInput { len: 0 }), validate)
}
