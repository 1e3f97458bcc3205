//! Synthetic triangle soups for demos, benchmarks and tests.

use crate::errors::{TinError, TinResult};
use crate::geometry::mesh::{TriangleSoup, Vertex};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Largest triangle count a generated grid may have
pub const MAX_GRID_TRIANGLES: usize = 10_000_000;

/// Parameters of a regular elevation grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    /// Number of grid rows (at least 2)
    pub rows: usize,
    /// Number of grid columns (at least 2)
    pub cols: usize,
    /// Distance between neighbouring grid posts
    pub spacing: f64,
    /// Heights are drawn uniformly from `[0, max_height)`
    pub max_height: f64,
    /// Seed for reproducible heights; `None` draws a fresh seed
    pub seed: Option<u64>,
}

impl GridSpec {
    /// A unit-spaced grid with heights below 10 and a fixed seed
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            spacing: 1.0,
            max_height: 10.0,
            seed: Some(0),
        }
    }

    /// Number of triangles the grid produces (two per cell), or `None` if it
    /// overflows `usize`
    #[must_use]
    pub const fn triangle_count(&self) -> Option<usize> {
        match self
            .rows
            .saturating_sub(1)
            .checked_mul(self.cols.saturating_sub(1))
        {
            Some(cells) => cells.checked_mul(2),
            None => None,
        }
    }

    /// Check the grid parameters and return the triangle count.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::InvalidParameters`] if the grid has fewer than two
    /// rows or columns, more than [`MAX_GRID_TRIANGLES`] triangles, a
    /// spacing that is not positive, or a height bound that is negative or
    /// not finite.
    pub fn validate(&self) -> TinResult<usize> {
        if self.rows < 2 || self.cols < 2 {
            return Err(TinError::InvalidParameters(format!(
                "Grid must have at least 2 rows and 2 columns, got {}x{}",
                self.rows, self.cols
            )));
        }

        let triangles = self
            .triangle_count()
            .filter(|&count| count <= MAX_GRID_TRIANGLES)
            .ok_or_else(|| {
                TinError::InvalidParameters(format!(
                    "Grid of {}x{} exceeds the limit of {MAX_GRID_TRIANGLES} triangles",
                    self.rows, self.cols
                ))
            })?;

        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(TinError::InvalidParameters(format!(
                "Spacing must be positive, got {}",
                self.spacing
            )));
        }

        if !(self.max_height.is_finite() && self.max_height >= 0.0) {
            return Err(TinError::InvalidParameters(format!(
                "Maximum height must be non-negative, got {}",
                self.max_height
            )));
        }

        Ok(triangles)
    }
}

/// Generates a triangle soup over a regular grid with random heights.
///
/// Posts are laid out row by row; each cell is split along the diagonal from
/// its lower-right to its upper-left post into two counter-clockwise
/// triangles. The soup carries no edge information.
///
/// # Errors
///
/// Returns [`TinError::InvalidParameters`] if [`GridSpec::validate`] rejects
/// the parameters.
#[allow(clippy::cast_precision_loss)]
pub fn generate_grid_soup(grid: &GridSpec) -> TinResult<TriangleSoup<f64>> {
    let triangle_count = grid.validate()?;

    let mut rng = StdRng::seed_from_u64(grid.seed.unwrap_or_else(rand::random));

    let mut vertices = Vec::with_capacity(grid.rows * grid.cols);
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let height = rng.random::<f64>() * grid.max_height;
            vertices.push(Vertex::new(
                col as f64 * grid.spacing,
                row as f64 * grid.spacing,
                height,
            ));
        }
    }

    let mut triangles = Vec::with_capacity(triangle_count);
    for row in 0..grid.rows - 1 {
        for col in 0..grid.cols - 1 {
            let lower_left = row * grid.cols + col;
            let lower_right = lower_left + 1;
            let upper_left = lower_left + grid.cols;
            let upper_right = upper_left + 1;

            triangles.push([lower_left, lower_right, upper_left]);
            triangles.push([lower_right, upper_right, upper_left]);
        }
    }

    log::debug!(
        "Generated {}x{} grid soup: {} vertices, {} triangles",
        grid.rows,
        grid.cols,
        vertices.len(),
        triangles.len()
    );

    Ok(TriangleSoup::new(vertices, triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_counts() {
        let grid = GridSpec::new(3, 4);
        let soup = generate_grid_soup(&grid).expect("Failed to generate grid");

        assert_eq!(soup.number_of_points(), 12);
        assert_eq!(soup.number_of_triangles(), 12);
        assert_eq!(grid.triangle_count(), Some(12));
        assert!(soup.validate().is_ok());
    }

    #[test]
    fn test_grid_heights_in_range() {
        let grid = GridSpec {
            max_height: 2.5,
            ..GridSpec::new(5, 5)
        };
        let soup = generate_grid_soup(&grid).expect("Failed to generate grid");

        assert!(soup.vertices.iter().all(|v| (0.0..2.5).contains(&v.z())));
    }

    #[test]
    fn test_flat_grid() {
        let grid = GridSpec {
            max_height: 0.0,
            ..GridSpec::new(2, 2)
        };
        let soup = generate_grid_soup(&grid).expect("Failed to generate grid");

        assert!(soup.vertices.iter().all(|v| v.z().abs() < f64::EPSILON));
        assert_eq!(soup.triangles, vec![[0, 1, 2], [1, 3, 2]]);
    }

    #[test]
    fn test_seeded_grids_are_reproducible() {
        let grid = GridSpec {
            seed: Some(42),
            ..GridSpec::new(4, 6)
        };
        let first = generate_grid_soup(&grid).expect("Failed to generate grid");
        let second = generate_grid_soup(&grid).expect("Failed to generate grid");

        assert_eq!(first, second);
    }

    #[test]
    fn test_grid_spacing() {
        let grid = GridSpec {
            spacing: 2.0,
            ..GridSpec::new(2, 3)
        };
        let soup = generate_grid_soup(&grid).expect("Failed to generate grid");

        assert_relative_eq!(soup.vertices[2].x(), 4.0);
        assert_relative_eq!(soup.vertices[3].y(), 2.0);
    }

    #[test]
    fn test_invalid_grid_parameters() {
        assert!(generate_grid_soup(&GridSpec::new(1, 5)).is_err());
        assert!(generate_grid_soup(&GridSpec::new(5, 0)).is_err());

        let zero_spacing = GridSpec {
            spacing: 0.0,
            ..GridSpec::new(3, 3)
        };
        assert!(matches!(
            generate_grid_soup(&zero_spacing),
            Err(TinError::InvalidParameters(_))
        ));

        let negative_height = GridSpec {
            max_height: -1.0,
            ..GridSpec::new(3, 3)
        };
        assert!(generate_grid_soup(&negative_height).is_err());

        let infinite_height = GridSpec {
            max_height: f64::INFINITY,
            ..GridSpec::new(3, 3)
        };
        assert!(generate_grid_soup(&infinite_height).is_err());
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let overflowing = GridSpec::new(usize::MAX, usize::MAX);
        assert_eq!(overflowing.triangle_count(), None);
        assert!(matches!(
            generate_grid_soup(&overflowing),
            Err(TinError::InvalidParameters(_))
        ));

        // Fits in usize but is far past the triangle limit
        let huge = GridSpec::new(100_000, 100_000);
        assert!(huge.triangle_count().is_some());
        assert!(matches!(
            huge.validate(),
            Err(TinError::InvalidParameters(_))
        ));

        // 2 * 2236 * 2236 = 9 999 392 triangles, just under the limit
        assert_eq!(GridSpec::new(2237, 2237).validate(), Ok(9_999_392));
    }
}
