//! Basic example of using the TIN topology library
//!
//! This example shows how to:
//! - Build a triangle soup by hand and index it
//! - Query edges and triangles of the indexed TIN
//! - Index a generated grid and inspect its boundary

use log::{LevelFilter, info};
use tin_topology::util::{GridSpec, generate_grid_soup};
use tin_topology::{Strategy, TinOps, TinQuery, TopologyIndexer, TriangleSoup, Vertex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    info!("Starting basic TIN example");

    // A unit square split along its diagonal
    let soup = TriangleSoup::new(
        vec![
            Vertex::new(0.0, 0.0, 1.0),
            Vertex::new(1.0, 0.0, 2.0),
            Vertex::new(0.0, 1.0, 1.5),
            Vertex::new(1.0, 1.0, 3.0),
        ],
        vec![[0, 1, 2], [1, 3, 2]],
    );

    let tin = TopologyIndexer::new(Strategy::Dense).index(&soup)?;
    info!(
        "Square: {} vertices, {} edges, {} triangles",
        tin.number_of_points(),
        tin.number_of_edges(),
        tin.number_of_triangles()
    );

    for edge in 0..tin.number_of_edges() {
        let (a, b) = tin.edge_vertex_indices(edge)?;
        info!("  edge {edge}: {a} - {b}");
    }

    for triangle in 0..tin.number_of_triangles() {
        info!(
            "  triangle {triangle}: edges {:?}, vertices {:?}",
            tin.triangle_edge_indices(triangle)?,
            tin.triangle_vertex_indices(triangle)?
        );
    }

    // A generated elevation grid
    let params = GridSpec {
        max_height: 250.0,
        seed: Some(17),
        ..GridSpec::new(32, 48)
    };
    let grid = generate_grid_soup(&params)?;
    let grid_tin = TopologyIndexer::new(Strategy::Auto).index(&grid)?;

    info!(
        "Grid: {} edges ({} on the boundary), Euler characteristic {}",
        grid_tin.number_of_edges(),
        grid_tin.boundary_edges().len(),
        grid_tin.euler_characteristic()
    );
    if let Some(envelope) = grid_tin.envelope() {
        info!("Grid envelope: {:?} to {:?}", envelope.min, envelope.max);
    }

    info!("Basic TIN example completed");
    Ok(())
}
