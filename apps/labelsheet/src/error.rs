//! Error types for the labelsheet pipeline.
//!
//! Only conditions that should stop the run end up here. A missing database,
//! an empty dataset, a serial that cannot be encoded, and a failed PDF write
//! are reported through [`RunSummary`](crate::pipeline::RunSummary) instead.

use std::path::PathBuf;

use labelsheet_db::DbError;
use labelsheet_render::RenderError;

use crate::config::ConfigError;

/// Pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Render setup error: {0}")]
    Render(#[from] RenderError),

    #[error("Cannot create scratch directory {}: {source}", path.display())]
    ScratchDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
