//! Topology indexer - turns a triangle soup into an indexed TIN.
//!
//! Triangles are processed in input order. Each of a triangle's three
//! segments `(a, b)`, `(b, c)`, `(c, a)` is resolved to an edge index through
//! an [`EdgeLookup`]: a pair seen before reuses its index, a new pair gets the
//! next sequential one. The whole input is validated before the first edge is
//! assigned, so a failed build never exposes a partial TIN.

use crate::errors::TinResult;
use crate::geometry::mesh::{Edge, TriangleSoup};
use crate::geometry::strategies::dense::DenseLookup;
use crate::geometry::strategies::linear::LinearLookup;
use crate::geometry::traits::{CoordinateScalar, EdgeLookup};
use crate::tin::indexed::IndexedTin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triangle count up to which [`Strategy::Auto`] picks the linear scan
pub const AUTO_LINEAR_MAX_TRIANGLES: usize = 16;

/// Triangle count above which a linear build logs a warning
pub const LINEAR_WARN_TRIANGLES: usize = 1_000;

/// Edge lookup strategy used during indexing.
///
/// Both concrete strategies produce the same set of edges; only the order in
/// which edge indices are handed out may differ between them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Constant-time pair table
    #[default]
    Dense,
    /// Scan of previously assigned edges
    Linear,
    /// Linear for tiny inputs, dense otherwise
    Auto,
}

impl Strategy {
    /// Resolve [`Strategy::Auto`] for an input with `triangle_count` triangles.
    ///
    /// Concrete strategies resolve to themselves.
    #[must_use]
    pub const fn resolve(self, triangle_count: usize) -> Self {
        match self {
            Self::Auto if triangle_count <= AUTO_LINEAR_MAX_TRIANGLES => Self::Linear,
            Self::Auto => Self::Dense,
            concrete => concrete,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Linear => write!(f, "linear"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// One-shot builder of [`IndexedTin`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopologyIndexer {
    strategy: Strategy,
}

impl TopologyIndexer {
    /// Create an indexer using `strategy`
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The configured (possibly unresolved) strategy
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Build an indexed TIN from `soup`.
    ///
    /// The soup is only read; its vertices are copied into the TIN.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::InvalidIndex`](crate::errors::TinError::InvalidIndex)
    /// if a triangle references a missing vertex and
    /// [`TinError::DegenerateTriangle`](crate::errors::TinError::DegenerateTriangle)
    /// if a triangle repeats a vertex. Nothing is built in either case.
    pub fn index<T: CoordinateScalar>(&self, soup: &TriangleSoup<T>) -> TinResult<IndexedTin<T>> {
        soup.validate()?;

        let vertex_count = soup.number_of_points();
        let triangle_count = soup.number_of_triangles();
        let strategy = self.strategy.resolve(triangle_count);

        let (edges, triangles) = match strategy {
            Strategy::Linear => {
                if triangle_count > LINEAR_WARN_TRIANGLES {
                    log::warn!(
                        "Linear edge scan on {triangle_count} triangles; expect quadratic running time"
                    );
                }
                assign_edges(&soup.triangles, LinearLookup::new())
            }
            Strategy::Dense | Strategy::Auto => {
                let lookup = DenseLookup::new(vertex_count, triangle_count);
                log::debug!(
                    "Dense edge lookup using a {} table",
                    if lookup.is_matrix() { "matrix" } else { "hash" }
                );
                assign_edges(&soup.triangles, lookup)
            }
        };

        log::debug!(
            "Indexed {vertex_count} vertices and {triangle_count} triangles into {} edges ({strategy})",
            edges.len()
        );

        Ok(IndexedTin::from_parts(
            soup.vertices.clone().into_boxed_slice(),
            edges,
            triangles,
            strategy,
        ))
    }
}

/// Resolve every triangle's segments to edge indices.
///
/// Expects validated input. The edge buffer grows while scanning and is
/// frozen once the final edge count is known.
fn assign_edges<L: EdgeLookup>(
    triangles: &[[usize; 3]],
    mut lookup: L,
) -> (Box<[Edge]>, Box<[[usize; 3]]>) {
    let mut edges: Vec<Edge> = Vec::with_capacity(triangles.len().saturating_mul(3) / 2);
    let mut indexed: Vec<[usize; 3]> = Vec::with_capacity(triangles.len());

    for &[a, b, c] in triangles {
        let mut triangle_edges = [0; 3];
        for (slot, (p, q)) in triangle_edges.iter_mut().zip([(a, b), (b, c), (c, a)]) {
            let edge = Edge::new(p, q);
            *slot = match lookup.find(&edges, edge) {
                Some(index) => index,
                None => {
                    let index = edges.len();
                    edges.push(edge);
                    lookup.record(edge, index);
                    index
                }
            };
        }
        indexed.push(triangle_edges);
    }

    log::trace!("Edge assignment via {} lookup complete", lookup.strategy_name());

    (edges.into_boxed_slice(), indexed.into_boxed_slice())
}
