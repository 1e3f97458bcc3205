#![allow(clippy::multiple_crate_versions)]
#![warn(missing_docs)]

//! Topology indexing for triangulated irregular networks (TINs).
//!
//! This library turns a triangle soup (vertex positions plus vertex-index
//! triples) into an indexed TIN in which every undirected edge has a unique
//! index and every triangle references its three edges.
//!
//! # Key Features
//!
//! - Edge deduplication in first-encountered order
//! - Interchangeable edge lookup strategies: a dense pair table and a
//!   linear scan reference
//! - All-or-nothing construction with descriptive errors
//! - Read-only queries for vertices, edges and triangles
//! - Topology helpers such as boundary edges and the Euler characteristic
//!
//! # Example
//!
//! ```rust
//! use tin_topology::{Strategy, TinQuery, TopologyIndexer, TriangleSoup, Vertex};
//!
//! let soup = TriangleSoup::new(
//!     vec![
//!         Vertex::new(0.0, 0.0, 0.0),
//!         Vertex::new(1.0, 0.0, 0.0),
//!         Vertex::new(0.0, 1.0, 0.0),
//!         Vertex::new(1.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2], [1, 3, 2]],
//! );
//!
//! let tin = TopologyIndexer::new(Strategy::Dense).index(&soup)?;
//! assert_eq!(tin.number_of_edges(), 5);
//! assert_eq!(tin.triangle_vertex_indices(1)?, [1, 3, 2]);
//! # Ok::<(), tin_topology::TinError>(())
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};

// Module declarations (avoiding mod.rs files)
/// Error types for the TIN library.
pub mod errors;

/// Configuration for indexing runs.
pub mod config;

/// Synthetic triangle soup generation.
pub mod util;

/// Geometry layer: input data, traits and lookup strategies.
pub mod geometry {
    /// Vertices, edges, triangle soups and envelopes.
    pub mod mesh;
    /// Topology operations built on the query surface.
    pub mod operations;
    /// Core traits shared by strategies and indexed TINs.
    pub mod traits;

    /// Edge lookup strategies used during indexing.
    pub mod strategies {
        /// Pair table lookup.
        pub mod dense;
        /// Linear scan lookup.
        pub mod linear;
    }
}

/// Topology indexing and the indexed TIN.
pub mod tin {
    /// Immutable indexed TIN.
    pub mod indexed;
    /// Edge assignment over a triangle soup.
    pub mod indexer;
}

// Re-exports for convenience
pub use config::TinConfig;
pub use errors::{Element, TinError, TinResult};
pub use geometry::mesh::{Edge, Envelope, TriangleSoup, Vertex};
pub use geometry::operations::TinOps;
pub use geometry::traits::{CoordinateScalar, TinQuery};
pub use tin::indexed::IndexedTin;
pub use tin::indexer::{Strategy, TopologyIndexer};

/// Summary of a configured indexing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexingReport {
    /// Strategy that assigned the edge indices
    pub strategy: Strategy,
    /// Number of vertices
    pub vertices: usize,
    /// Number of unique edges
    pub edges: usize,
    /// Number of triangles
    pub triangles: usize,
    /// Number of edges used by exactly one triangle
    pub boundary_edges: usize,
    /// `V - E + F`
    pub euler_characteristic: i64,
    /// Whether the edge set was cross-checked against the linear strategy
    pub verified: bool,
    /// Time spent indexing
    pub elapsed_time: Duration,
}

impl IndexingReport {
    fn from_tin<T: CoordinateScalar>(
        tin: &IndexedTin<T>,
        verified: bool,
        elapsed_time: Duration,
    ) -> Self {
        Self {
            strategy: tin.strategy(),
            vertices: tin.number_of_points(),
            edges: tin.number_of_edges(),
            triangles: tin.number_of_triangles(),
            boundary_edges: tin.boundary_edges().len(),
            euler_characteristic: tin.euler_characteristic(),
            verified,
            elapsed_time,
        }
    }
}

/// Checks that two TINs over the same soup agree on their edge sets and
/// on the vertex triple of every triangle.
fn verify_against_reference<T: CoordinateScalar>(
    tin: &IndexedTin<T>,
    reference: &IndexedTin<T>,
) -> TinResult<()> {
    let edges: HashSet<Edge> = tin.edges().iter().copied().collect();
    let expected: HashSet<Edge> = reference.edges().iter().copied().collect();
    if edges != expected || tin.number_of_edges() != reference.number_of_edges() {
        return Err(TinError::InvalidParameters(format!(
            "{} strategy produced {} edges, linear reference produced {}",
            tin.strategy(),
            tin.number_of_edges(),
            reference.number_of_edges()
        )));
    }

    for triangle in 0..tin.number_of_triangles() {
        let found = tin.triangle_vertex_indices(triangle)?;
        let wanted = reference.triangle_vertex_indices(triangle)?;
        if found != wanted {
            return Err(TinError::InvalidParameters(format!(
                "Triangle {triangle} resolved to {found:?}, linear reference gave {wanted:?}"
            )));
        }
    }

    Ok(())
}

/// Runs a configured indexing pass over a synthetic grid.
///
/// The configuration is validated, a grid soup is generated, and the soup is
/// indexed with the configured strategy. With `verify` set the result is
/// cross-checked against the linear reference strategy.
///
/// # Errors
///
/// Returns [`TinError::InvalidParameters`] if the configuration is invalid or
/// verification finds a mismatch, and any error raised while indexing.
pub fn run(config: &TinConfig) -> TinResult<IndexingReport> {
    config.validate()?;

    log::info!("Grid: {} rows x {} columns", config.rows, config.cols);
    log::info!("Requested strategy: {}", config.strategy);

    let soup = util::generate_grid_soup(&config.to_grid_spec())?;

    let start = Instant::now();
    let tin = TopologyIndexer::new(config.strategy).index(&soup)?;
    let elapsed_time = start.elapsed();

    if config.verify {
        let reference = TopologyIndexer::new(Strategy::Linear).index(&soup)?;
        verify_against_reference(&tin, &reference)?;
        log::info!("Edge set matches the linear reference");
    }

    let report = IndexingReport::from_tin(&tin, config.verify, elapsed_time);

    log::info!(
        "Indexed {} vertices, {} edges, {} triangles with the {} strategy in {:?}",
        report.vertices,
        report.edges,
        report.triangles,
        report.strategy,
        report.elapsed_time
    );
    log::info!(
        "Boundary edges: {}, Euler characteristic: {}",
        report.boundary_edges,
        report.euler_characteristic
    );

    Ok(report)
}
