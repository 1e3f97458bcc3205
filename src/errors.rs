//! Error types for the TIN library.

use std::fmt;

/// Kind of element addressed by a post-construction query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// A vertex (point) of the TIN
    Vertex,
    /// An undirected edge of the TIN
    Edge,
    /// A triangle of the TIN
    Triangle,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Edge => write!(f, "edge"),
            Self::Triangle => write!(f, "triangle"),
        }
    }
}

/// Main error type for TIN operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TinError {
    /// A triangle of the input references a vertex that does not exist
    #[error(
        "Invalid index: triangle {triangle} references vertex {vertex}, but the mesh has {vertex_count} vertices"
    )]
    InvalidIndex {
        /// Position of the offending triangle in the input
        triangle: usize,
        /// The out-of-bounds vertex index
        vertex: usize,
        /// Number of vertices in the input
        vertex_count: usize,
    },

    /// A triangle of the input repeats a vertex index
    #[error("Degenerate triangle {triangle}: vertex indices {vertices:?} are not pairwise distinct")]
    DegenerateTriangle {
        /// Position of the offending triangle in the input
        triangle: usize,
        /// The vertex indices as given
        vertices: [usize; 3],
    },

    /// A query addressed an element outside the TIN
    #[error("Index out of range: {element} {index} (the TIN has {len})")]
    IndexOutOfRange {
        /// Kind of element queried
        element: Element,
        /// The requested index
        index: usize,
        /// Number of elements of that kind
        len: usize,
    },

    /// Invalid configuration or generation parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for TIN operations.
pub type TinResult<T> = Result<T, TinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = TinError::InvalidIndex {
            triangle: 0,
            vertex: 5,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid index: triangle 0 references vertex 5, but the mesh has 4 vertices"
        );
    }

    #[test]
    fn test_degenerate_triangle_message() {
        let err = TinError::DegenerateTriangle {
            triangle: 3,
            vertices: [0, 1, 1],
        };
        assert_eq!(
            err.to_string(),
            "Degenerate triangle 3: vertex indices [0, 1, 1] are not pairwise distinct"
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = TinError::IndexOutOfRange {
            element: Element::Edge,
            index: 9,
            len: 5,
        };
        assert_eq!(err.to_string(), "Index out of range: edge 9 (the TIN has 5)");
    }
}
