//! Dense edge lookup - a symmetric vertex-pair table.
//!
//! Small meshes get a full `N x N` matrix of edge slots, indexed by the
//! canonical `(lo, hi)` pair. Larger meshes switch to a hash map keyed by the
//! same pair, which keeps memory proportional to the number of edges instead
//! of the square of the vertex count.

use crate::geometry::mesh::Edge;
use crate::geometry::traits::EdgeLookup;
use std::collections::HashMap;

/// Largest vertex count for which the matrix table is used
pub const DENSE_MATRIX_LIMIT: usize = 256;

#[derive(Debug, Clone)]
enum PairTable {
    /// Row-major `size x size` cells; only cells with `lo < hi` are used
    Matrix {
        size: usize,
        cells: Vec<Option<usize>>,
    },
    Sparse(HashMap<Edge, usize>),
}

/// Constant-time edge lookup backed by a pair table
#[derive(Debug, Clone)]
pub struct DenseLookup {
    table: PairTable,
}

impl DenseLookup {
    /// Create a lookup sized for a mesh with the given vertex and triangle counts
    #[must_use]
    pub fn new(vertex_count: usize, triangle_count: usize) -> Self {
        let table = if vertex_count <= DENSE_MATRIX_LIMIT {
            PairTable::Matrix {
                size: vertex_count,
                cells: vec![None; vertex_count * vertex_count],
            }
        } else {
            // A manifold surface has roughly 1.5 edges per triangle
            PairTable::Sparse(HashMap::with_capacity(triangle_count.saturating_mul(3) / 2))
        };

        Self { table }
    }

    /// Whether the lookup uses the full matrix rather than the hash map
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self.table, PairTable::Matrix { .. })
    }
}

impl EdgeLookup for DenseLookup {
    fn strategy_name(&self) -> &'static str {
        "dense"
    }

    fn find(&self, _edges: &[Edge], edge: Edge) -> Option<usize> {
        let (lo, hi) = edge.vertex_indices();
        match &self.table {
            PairTable::Matrix { size, cells } => cells.get(lo * size + hi).copied().flatten(),
            PairTable::Sparse(map) => map.get(&edge).copied(),
        }
    }

    fn record(&mut self, edge: Edge, index: usize) {
        let (lo, hi) = edge.vertex_indices();
        match &mut self.table {
            PairTable::Matrix { size, cells } => {
                if let Some(cell) = cells.get_mut(lo * *size + hi) {
                    *cell = Some(index);
                }
            }
            PairTable::Sparse(map) => {
                map.insert(edge, index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_mesh_uses_matrix() {
        let lookup = DenseLookup::new(4, 2);
        assert!(lookup.is_matrix());
        assert_eq!(lookup.strategy_name(), "dense");
    }

    #[test]
    fn test_large_mesh_uses_hash_map() {
        let lookup = DenseLookup::new(DENSE_MATRIX_LIMIT + 1, 10);
        assert!(!lookup.is_matrix());
    }

    #[test]
    fn test_matrix_lookup_is_direction_free() {
        let mut lookup = DenseLookup::new(4, 2);
        assert_eq!(lookup.find(&[], Edge::new(1, 2)), None);

        lookup.record(Edge::new(2, 1), 0);

        assert_eq!(lookup.find(&[], Edge::new(1, 2)), Some(0));
        assert_eq!(lookup.find(&[], Edge::new(2, 1)), Some(0));
        assert_eq!(lookup.find(&[], Edge::new(0, 2)), None);
    }

    #[test]
    fn test_sparse_lookup_is_direction_free() {
        let mut lookup = DenseLookup::new(1000, 4);
        lookup.record(Edge::new(999, 3), 7);

        assert_eq!(lookup.find(&[], Edge::new(3, 999)), Some(7));
        assert_eq!(lookup.find(&[], Edge::new(999, 3)), Some(7));
        assert_eq!(lookup.find(&[], Edge::new(3, 998)), None);
    }

    #[test]
    fn test_lookup_ignores_edge_sequence() {
        // The table alone decides; the sequence argument exists for scanning strategies
        let lookup = DenseLookup::new(3, 1);
        assert_eq!(lookup.find(&[Edge::new(0, 1)], Edge::new(0, 1)), None);
    }
}
