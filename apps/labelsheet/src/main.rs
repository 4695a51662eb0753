//! labelsheet binary.
//!
//! ## Usage
//! ```bash
//! # Defaults: ./inventaris.sqlite → ./inventaris_barcodes.pdf
//! labelsheet
//!
//! # Other database, more logging
//! LABELSHEET_DB=/data/inventory.sqlite RUST_LOG=debug labelsheet
//! ```
//!
//! A missing database, an empty table, missing fonts and a failed PDF write
//! all exit 0 after logging. Bad configuration or an unreadable database
//! exit non-zero.

use tracing::info;
use tracing_subscriber::EnvFilter;

use labelsheet::{pipeline, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting labelsheet v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(None)?;
    let summary = pipeline::run(&config).await?;
    summary.report();

    Ok(())
}
