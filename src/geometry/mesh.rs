//! Plain mesh data structures shared by the indexer and its consumers.
//!
//! These types carry no topology of their own: a [`TriangleSoup`] is the
//! unindexed input, while [`Vertex`] and [`Edge`] are the building blocks
//! stored inside an indexed TIN.

use super::traits::CoordinateScalar;
use crate::errors::{TinError, TinResult};
use serde::{Deserialize, Serialize};

/// A vertex of the mesh: a position in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex<T: CoordinateScalar> {
    /// Coordinates of the vertex as `[x, y, z]`
    pub coordinates: [T; 3],
}

impl<T: CoordinateScalar> Vertex<T> {
    /// Create a vertex from its three coordinates
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self {
            coordinates: [x, y, z],
        }
    }

    /// Easting (x coordinate)
    #[must_use]
    pub const fn x(&self) -> T {
        self.coordinates[0]
    }

    /// Northing (y coordinate)
    #[must_use]
    pub const fn y(&self) -> T {
        self.coordinates[1]
    }

    /// Elevation (z coordinate)
    #[must_use]
    pub const fn z(&self) -> T {
        self.coordinates[2]
    }
}

impl<T: CoordinateScalar> From<[T; 3]> for Vertex<T> {
    fn from(coordinates: [T; 3]) -> Self {
        Self { coordinates }
    }
}

/// An undirected edge between two vertices.
///
/// The pair is kept with the smaller vertex index first, so `(a, b)` and
/// `(b, a)` produce equal (and equally hashed) edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Edge {
    vertex_indices: (usize, usize),
}

impl Edge {
    /// Create the undirected edge between vertices `a` and `b`.
    ///
    /// Callers are expected to pass distinct indices; the indexer rejects
    /// degenerate triangles before any edge is formed.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        let vertex_indices = if a <= b { (a, b) } else { (b, a) };
        Self { vertex_indices }
    }

    /// The two vertex indices, smaller first
    #[must_use]
    pub const fn vertex_indices(&self) -> (usize, usize) {
        self.vertex_indices
    }

    /// Whether `vertex` is one of the endpoints
    #[must_use]
    pub const fn contains(&self, vertex: usize) -> bool {
        self.vertex_indices.0 == vertex || self.vertex_indices.1 == vertex
    }

    /// The endpoint opposite `vertex`.
    ///
    /// If `vertex` is not an endpoint, the smaller index is returned.
    #[must_use]
    pub const fn opposite(&self, vertex: usize) -> usize {
        if self.vertex_indices.0 == vertex {
            self.vertex_indices.1
        } else {
            self.vertex_indices.0
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        edge.vertex_indices
    }
}

/// Unindexed input mesh: vertices plus triangles given as vertex-index triples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleSoup<T: CoordinateScalar> {
    /// Vertex positions, addressed by their position in this sequence
    pub vertices: Vec<Vertex<T>>,
    /// Triangles as `[a, b, c]` indices into `vertices`
    pub triangles: Vec<[usize; 3]>,
}

impl<T: CoordinateScalar> TriangleSoup<T> {
    /// Create a soup from its vertex and triangle sequences
    #[must_use]
    pub const fn new(vertices: Vec<Vertex<T>>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Get the number of vertices
    #[must_use]
    pub const fn number_of_points(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    #[must_use]
    pub const fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Check every triangle against the vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::InvalidIndex`] for the first triangle that
    /// references a missing vertex, or [`TinError::DegenerateTriangle`] for
    /// the first triangle whose indices are not pairwise distinct.
    pub fn validate(&self) -> TinResult<()> {
        let vertex_count = self.vertices.len();

        for (triangle, &vertices) in self.triangles.iter().enumerate() {
            if let Some(&vertex) = vertices.iter().find(|&&v| v >= vertex_count) {
                return Err(TinError::InvalidIndex {
                    triangle,
                    vertex,
                    vertex_count,
                });
            }

            let [a, b, c] = vertices;
            if a == b || b == c || c == a {
                return Err(TinError::DegenerateTriangle { triangle, vertices });
            }
        }

        Ok(())
    }
}

/// Axis-aligned bounding box of a set of vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T: CoordinateScalar> {
    /// Smallest x, y and z over all vertices
    pub min: [T; 3],
    /// Largest x, y and z over all vertices
    pub max: [T; 3],
}

impl<T: CoordinateScalar> Envelope<T> {
    /// Compute the envelope of `vertices`, or `None` if there are none
    #[must_use]
    pub fn from_vertices(vertices: &[Vertex<T>]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;

        let envelope = rest.iter().fold(
            Self {
                min: first.coordinates,
                max: first.coordinates,
            },
            |mut envelope, vertex| {
                for axis in 0..3 {
                    envelope.min[axis] = envelope.min[axis].min(vertex.coordinates[axis]);
                    envelope.max[axis] = envelope.max[axis].max(vertex.coordinates[axis]);
                }
                envelope
            },
        );

        Some(envelope)
    }

    /// Size of the box along each axis
    #[must_use]
    pub fn extent(&self) -> [T; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Whether `vertex` lies inside or on the box
    #[must_use]
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        (0..3).all(|axis| {
            self.min[axis] <= vertex.coordinates[axis] && vertex.coordinates[axis] <= self.max[axis]
        })
    }
}
