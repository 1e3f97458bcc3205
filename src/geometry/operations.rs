//! Topology operations derived from the TIN query surface.
//!
//! These work on anything implementing [`TinQuery`] and only walk the
//! triangle-to-edge references, never the vertex coordinates.

use super::traits::TinQuery;

/// Common topology operations for indexed TINs
pub trait TinOps: TinQuery {
    /// Number of triangles referencing each edge, indexed by edge index.
    ///
    /// Implementers must answer `triangle_edge_indices` for every triangle
    /// below `number_of_triangles` with edge indices below
    /// `number_of_edges`. Debug builds assert this; release builds skip
    /// entries that break it.
    fn edge_triangle_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.number_of_edges()];
        for triangle in 0..self.number_of_triangles() {
            let edges = self.triangle_edge_indices(triangle);
            debug_assert!(edges.is_ok(), "triangle {triangle} has no edge indices");

            for edge in edges.into_iter().flatten() {
                let count = counts.get_mut(edge);
                debug_assert!(
                    count.is_some(),
                    "triangle {triangle} references missing edge {edge}"
                );
                if let Some(count) = count {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Indices of edges used by exactly one triangle, ascending
    fn boundary_edges(&self) -> Vec<usize> {
        self.edge_triangle_counts()
            .into_iter()
            .enumerate()
            .filter_map(|(edge, count)| (count == 1).then_some(edge))
            .collect()
    }

    /// Whether the surface has triangles and no boundary edges
    fn is_closed(&self) -> bool {
        self.number_of_triangles() > 0 && self.boundary_edges().is_empty()
    }
}

// Blanket implementation for all types that implement TinQuery
impl<T: TinQuery> TinOps for T {}
