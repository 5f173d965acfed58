//! Error types for the randgraph core library.
//!
//! Defines the validation error exposed by every generation entry point and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::vertex::Vertex;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a candidate vertex collection cannot seed a graph.
///
/// Both generators validate their input first and return this error
/// unchanged; no partial graph is ever produced alongside it.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// The collection was absent or held fewer than two vertices.
    #[error("vertex set must contain at least 2 vertices (got {len})")]
    InvalidInput {
        /// Number of vertices supplied by the caller.
        len: usize,
    },
    /// The collection contained the same vertex more than once.
    #[error("repeated vertex {vertex}")]
    DuplicateVertex {
        /// First vertex found to repeat, scanning in input order.
        vertex: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`ValidationError`] variants.
    enum ValidationErrorCode for ValidationError {
        /// The collection was absent or held fewer than two vertices.
        InvalidInput => InvalidInput { .. } => "VALIDATION_INVALID_INPUT",
        /// The collection contained the same vertex more than once.
        DuplicateVertex => DuplicateVertex { .. } => "VALIDATION_DUPLICATE_VERTEX",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ValidationError>;
