//! TIN topology indexing binary.
//!
//! Generates a synthetic elevation grid, indexes its edges with the chosen
//! strategy and logs a summary.

use tin_topology::{TinConfig, run};

fn main() {
    // Initialize logging
    env_logger::init();

    let config = TinConfig::from_args();
    match run(&config) {
        Ok(report) => {
            log::info!(
                "TIN indexing completed successfully: {} edges",
                report.edges
            );
        }
        Err(e) => {
            log::error!("TIN indexing failed: {e}");
            std::process::exit(1);
        }
    }
}
