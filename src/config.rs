//! Configuration management for TIN indexing runs.
//!
//! This module provides structured configuration for the `tin` binary and
//! for programmatic runs, including:
//! - Synthetic grid parameters (size, spacing, height range, seed)
//! - Edge lookup strategy selection
//! - Cross-checking against the linear reference strategy

use crate::errors::{TinError, TinResult};
use crate::tin::indexer::Strategy;
use crate::util::{GridSpec, MAX_GRID_TRIANGLES};
use clap::Parser;

/// Largest triangle count a linear-scan build (or `--verify`) is allowed on
pub const LINEAR_MAX_TRIANGLES: usize = 20_000;

/// Main configuration structure for TIN indexing runs.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct TinConfig {
    /// Number of rows in the generated elevation grid
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(2..))]
    pub rows: u32,

    /// Number of columns in the generated elevation grid
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(2..))]
    pub cols: u32,

    /// Distance between neighbouring grid posts
    #[arg(long, default_value = "1.0")]
    pub spacing: f64,

    /// Upper bound for the random post heights
    #[arg(long, default_value = "10.0")]
    pub max_height: f64,

    /// Seed for reproducible heights
    #[arg(long)]
    pub seed: Option<u64>,

    /// Edge lookup strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Dense)]
    pub strategy: Strategy,

    /// Cross-check the edge set against the linear reference strategy
    #[arg(long, default_value = "false")]
    pub verify: bool,
}

impl TinConfig {
    /// Builds a new instance of `TinConfig` from command line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Creates a new `TinConfig` for a `rows x cols` grid with default settings.
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            spacing: 1.0,
            max_height: 10.0,
            seed: None,
            strategy: Strategy::Dense,
            verify: false,
        }
    }

    /// Number of triangles the configured grid produces, or `None` if the
    /// count overflows `usize`.
    #[must_use]
    pub fn triangle_count(&self) -> Option<usize> {
        self.to_grid_spec().triangle_count()
    }

    /// Creates the grid generator parameters from this configuration.
    #[must_use]
    pub fn to_grid_spec(&self) -> GridSpec {
        GridSpec {
            rows: self.rows as usize,
            cols: self.cols as usize,
            spacing: self.spacing,
            max_height: self.max_height,
            seed: self.seed,
        }
    }

    /// Validates the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::InvalidParameters`] if any grid parameter is
    /// invalid, the grid exceeds [`MAX_GRID_TRIANGLES`], or a linear scan
    /// would run on more than [`LINEAR_MAX_TRIANGLES`] triangles.
    pub fn validate(&self) -> TinResult<()> {
        let triangles = self.to_grid_spec().validate()?;

        let uses_linear = self.verify || self.strategy.resolve(triangles) == Strategy::Linear;
        if uses_linear && triangles > LINEAR_MAX_TRIANGLES {
            return Err(TinError::InvalidParameters(format!(
                "Linear edge scan is limited to {LINEAR_MAX_TRIANGLES} triangles, grid has {triangles}"
            )));
        }

        Ok(())
    }
}

/// Configuration preset for quick testing.
#[derive(Debug, Clone)]
pub struct TestConfig;

impl TestConfig {
    /// Creates a small, fast configuration suitable for unit tests.
    #[must_use]
    pub const fn small() -> TinConfig {
        TinConfig {
            rows: 4,
            cols: 4,
            spacing: 1.0,
            max_height: 10.0,
            seed: Some(1),
            strategy: Strategy::Dense,
            verify: true,
        }
    }

    /// Creates a medium-sized configuration for integration tests.
    #[must_use]
    pub const fn medium() -> TinConfig {
        TinConfig {
            rows: 32,
            cols: 32,
            spacing: 1.0,
            max_height: 10.0,
            seed: Some(2),
            strategy: Strategy::Dense,
            verify: true,
        }
    }

    /// Creates a large configuration for performance testing.
    #[must_use]
    pub const fn large() -> TinConfig {
        TinConfig {
            rows: 256,
            cols: 256,
            spacing: 1.0,
            max_height: 10.0,
            seed: Some(3),
            strategy: Strategy::Dense,
            verify: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_config_new() {
        let config = TinConfig::new(8, 5);
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 5);
        assert_eq!(config.strategy, Strategy::Dense);
        assert!(!config.verify);
        assert_eq!(config.triangle_count(), Some(56));
    }

    #[test]
    fn test_config_to_grid_spec() {
        let config = TinConfig {
            seed: Some(7),
            spacing: 2.5,
            ..TinConfig::new(3, 4)
        };

        let grid = config.to_grid_spec();
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cols, 4);
        assert_eq!(grid.seed, Some(7));
        assert_relative_eq!(grid.spacing, 2.5);
        assert_relative_eq!(grid.max_height, 10.0);
    }

    #[test]
    fn test_config_validation() {
        let valid_config = TinConfig::new(16, 16);
        assert!(valid_config.validate().is_ok());

        let invalid_rows = TinConfig {
            rows: 1,
            ..TinConfig::new(16, 16)
        };
        assert!(invalid_rows.validate().is_err());

        let invalid_spacing = TinConfig {
            spacing: 0.0,
            ..TinConfig::new(16, 16)
        };
        assert!(matches!(
            invalid_spacing.validate(),
            Err(TinError::InvalidParameters(message)) if message.starts_with("Spacing must be positive")
        ));

        let invalid_height = TinConfig {
            max_height: f64::NAN,
            ..TinConfig::new(16, 16)
        };
        assert!(invalid_height.validate().is_err());
    }

    #[test]
    fn test_linear_strategy_size_limit() {
        // 200 x 200 grid: 2 * 199 * 199 = 79 202 triangles
        let linear = TinConfig {
            strategy: Strategy::Linear,
            ..TinConfig::new(200, 200)
        };
        assert!(linear.validate().is_err());

        let verified = TinConfig {
            verify: true,
            ..TinConfig::new(200, 200)
        };
        assert!(verified.validate().is_err());

        let dense = TinConfig::new(200, 200);
        assert!(dense.validate().is_ok());

        // Auto resolves to dense on anything but tiny grids
        let auto = TinConfig {
            strategy: Strategy::Auto,
            ..TinConfig::new(200, 200)
        };
        assert!(auto.validate().is_ok());
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let overflowing = TinConfig::new(u32::MAX, u32::MAX);
        assert!(matches!(
            overflowing.validate(),
            Err(TinError::InvalidParameters(_))
        ));

        let huge = TinConfig::new(100_000, 100_000);
        assert!(huge.triangle_count().is_some_and(|count| count > MAX_GRID_TRIANGLES));
        assert!(matches!(huge.validate(), Err(TinError::InvalidParameters(_))));
    }

    #[test]
    fn test_preset_configs() {
        let small = TestConfig::small();
        assert!(small.validate().is_ok());
        assert_eq!(small.triangle_count(), Some(18));

        let medium = TestConfig::medium();
        assert!(medium.validate().is_ok());
        assert_eq!(medium.triangle_count(), Some(1922));

        let large = TestConfig::large();
        assert!(large.validate().is_ok());
        assert_eq!(large.triangle_count(), Some(130_050));
    }

    #[test]
    fn test_parse_from_arguments() {
        let config = TinConfig::try_parse_from([
            "tin", "--rows", "3", "--cols", "5", "--strategy", "linear", "--seed", "9", "--verify",
        ])
        .expect("arguments should parse");

        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 5);
        assert_eq!(config.strategy, Strategy::Linear);
        assert_eq!(config.seed, Some(9));
        assert!(config.verify);
    }

    #[test]
    fn test_parse_rejects_small_grid() {
        let result = TinConfig::try_parse_from(["tin", "--rows", "1", "--cols", "5"]);
        assert!(result.is_err());
    }
}
