//! Linear-scan edge lookup.
//!
//! Keeps no table at all: every query walks the edges assigned so far. This
//! costs `O(E)` per query and is meant for tiny meshes and as a reference
//! to check the dense strategy against.

use crate::geometry::mesh::Edge;
use crate::geometry::traits::EdgeLookup;

/// Table-free edge lookup scanning the edge sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearLookup;

impl LinearLookup {
    /// Create a new linear-scan lookup
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EdgeLookup for LinearLookup {
    fn strategy_name(&self) -> &'static str {
        "linear"
    }

    fn find(&self, edges: &[Edge], edge: Edge) -> Option<usize> {
        edges.iter().position(|&candidate| candidate == edge)
    }

    fn record(&mut self, _edge: Edge, _index: usize) {
        // The edge sequence itself is the only record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_either_direction() {
        let lookup = LinearLookup::new();
        let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)];

        assert_eq!(lookup.find(&edges, Edge::new(1, 0)), Some(0));
        assert_eq!(lookup.find(&edges, Edge::new(2, 1)), Some(1));
        assert_eq!(lookup.find(&edges, Edge::new(0, 2)), Some(2));
        assert_eq!(lookup.find(&edges, Edge::new(0, 3)), None);
    }

    #[test]
    fn test_scan_sees_edges_added_within_the_same_triangle() {
        // Simulates resolving a triangle whose second segment repeats its first:
        // the first segment was pushed a moment ago and must be found again.
        let mut lookup = LinearLookup::new();
        let mut edges = vec![Edge::new(4, 5)];

        let first = Edge::new(6, 7);
        assert_eq!(lookup.find(&edges, first), None);
        edges.push(first);
        lookup.record(first, 1);

        assert_eq!(lookup.find(&edges, Edge::new(7, 6)), Some(1));
    }
}
