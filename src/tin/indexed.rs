//! Indexed TIN - the immutable result of topology indexing.
//!
//! Vertices, edges and triangles live in frozen sequences owned by the TIN.
//! Counts are the sequence lengths, so they cannot drift from the data.
//!
//! # Triangle orientation
//!
//! Edges are undirected, so a triangle's vertex triple is recovered from the
//! traversal order of its edges `e0 = (a, b)`, `e1 = (b, c)`, `e2 = (c, a)`:
//! `a` is the endpoint `e0` shares with `e2`, `b` is the other endpoint of
//! `e0`, and `c` is the endpoint of `e1` that is not `b`. This yields the
//! input triple in its original order.

use crate::errors::{Element, TinError, TinResult};
use crate::geometry::mesh::{Edge, Envelope, Vertex};
use crate::geometry::traits::{CoordinateScalar, TinQuery};
use crate::tin::indexer::Strategy;
use serde::Serialize;

/// Topologically indexed triangulated irregular network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedTin<T: CoordinateScalar> {
    vertices: Box<[Vertex<T>]>,
    edges: Box<[Edge]>,
    triangles: Box<[[usize; 3]]>,
    strategy: Strategy,
}

fn checked<E>(items: &[E], element: Element, index: usize) -> TinResult<&E> {
    items.get(index).ok_or(TinError::IndexOutOfRange {
        element,
        index,
        len: items.len(),
    })
}

impl<T: CoordinateScalar> IndexedTin<T> {
    /// Assemble a TIN from sequences produced by the indexer
    pub(crate) const fn from_parts(
        vertices: Box<[Vertex<T>]>,
        edges: Box<[Edge]>,
        triangles: Box<[[usize; 3]]>,
        strategy: Strategy,
    ) -> Self {
        Self {
            vertices,
            edges,
            triangles,
            strategy,
        }
    }

    /// All vertices, in input order
    #[must_use]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// All edges, in edge-index order
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All triangles as edge-index triples, in input order
    #[must_use]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// The strategy that assigned the edge indices
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Positions of a triangle's three vertices, in traversal order
    ///
    /// # Errors
    /// Returns error if the triangle index is out of range
    pub fn triangle(&self, index: usize) -> TinResult<[Vertex<T>; 3]> {
        let [a, b, c] = self.triangle_vertex_indices(index)?;
        Ok([self.vertices[a], self.vertices[b], self.vertices[c]])
    }

    /// Bounding box of all vertices, or `None` for a TIN without vertices
    #[must_use]
    pub fn envelope(&self) -> Option<Envelope<T>> {
        Envelope::from_vertices(&self.vertices)
    }
}

impl<T: CoordinateScalar> TinQuery for IndexedTin<T> {
    type Coordinate = T;

    fn number_of_points(&self) -> usize {
        self.vertices.len()
    }

    fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    fn vertex(&self, index: usize) -> TinResult<&Vertex<T>> {
        checked(&self.vertices, Element::Vertex, index)
    }

    fn edge_vertex_indices(&self, index: usize) -> TinResult<(usize, usize)> {
        checked(&self.edges, Element::Edge, index).map(Edge::vertex_indices)
    }

    fn triangle_edge_indices(&self, index: usize) -> TinResult<[usize; 3]> {
        checked(&self.triangles, Element::Triangle, index).copied()
    }

    fn triangle_vertex_indices(&self, index: usize) -> TinResult<[usize; 3]> {
        let [e0, e1, e2] = self
            .triangle_edge_indices(index)?
            .map(|edge| self.edges[edge]);

        let (p, q) = e0.vertex_indices();
        let a = if e2.contains(p) { p } else { q };
        let b = e0.opposite(a);
        let c = e1.opposite(b);

        Ok([a, b, c])
    }
}
