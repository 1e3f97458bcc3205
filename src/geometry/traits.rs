//! Core traits for TIN construction and queries.
//!
//! This module defines the seams between the indexer, the interchangeable
//! edge lookup strategies, and read-only consumers of an indexed TIN.

use super::mesh::{Edge, Vertex};
use crate::errors::TinResult;

/// Core numeric trait for coordinates in geometric calculations
pub trait CoordinateScalar:
    Clone + Copy + PartialEq + PartialOrd + std::fmt::Debug + 'static + num_traits::Float
{
}

impl<T> CoordinateScalar for T where
    T: Clone + Copy + PartialEq + PartialOrd + std::fmt::Debug + 'static + num_traits::Float
{
}

/// Edge-existence lookup used while assigning edge indices.
///
/// The indexer owns the growing edge sequence and hands it to the lookup on
/// every query, so a strategy may either keep its own table (dense) or scan
/// the sequence itself (linear). Both must treat `(a, b)` and `(b, a)` as the
/// same edge, which [`Edge`] already guarantees through its canonical form.
pub trait EdgeLookup {
    /// Strategy identifier for logging
    fn strategy_name(&self) -> &'static str;

    /// Find the index already assigned to `edge`, if any.
    ///
    /// `edges` holds every edge assigned so far in this build, including
    /// edges assigned earlier within the triangle currently being resolved.
    fn find(&self, edges: &[Edge], edge: Edge) -> Option<usize>;

    /// Record that `edge` was just assigned `index`
    fn record(&mut self, edge: Edge, index: usize);
}

/// Read-only queries over an indexed TIN
pub trait TinQuery {
    /// Coordinate type of the vertices
    type Coordinate: CoordinateScalar;

    /// Get the number of vertices in the TIN
    fn number_of_points(&self) -> usize;

    /// Get the number of distinct undirected edges in the TIN
    fn number_of_edges(&self) -> usize;

    /// Get the number of triangles in the TIN
    fn number_of_triangles(&self) -> usize;

    /// Get the position of a vertex
    ///
    /// # Errors
    /// Returns error if the vertex index is out of range
    fn vertex(&self, index: usize) -> TinResult<&Vertex<Self::Coordinate>>;

    /// Get the two vertex indices of an edge, smaller first
    ///
    /// # Errors
    /// Returns error if the edge index is out of range
    fn edge_vertex_indices(&self, index: usize) -> TinResult<(usize, usize)>;

    /// Get the three edge indices of a triangle in traversal order
    ///
    /// # Errors
    /// Returns error if the triangle index is out of range
    fn triangle_edge_indices(&self, index: usize) -> TinResult<[usize; 3]>;

    /// Reconstruct the three vertex indices of a triangle from its edges
    ///
    /// # Errors
    /// Returns error if the triangle index is out of range
    fn triangle_vertex_indices(&self, index: usize) -> TinResult<[usize; 3]>;

    /// Calculate the Euler characteristic (V - E + F)
    #[allow(clippy::cast_possible_wrap)]
    fn euler_characteristic(&self) -> i64 {
        let v = self.number_of_points() as i64;
        let e = self.number_of_edges() as i64;
        let f = self.number_of_triangles() as i64;
        v - e + f
    }
}
