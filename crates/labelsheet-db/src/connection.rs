//! # Connection Handling
//!
//! One short-lived, read-only SQLite connection per load.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Connection                               │
//! │                                                                         │
//! │  DbConfig::new(path)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  open_read_only(&config).await  ← never creates the file                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryRepository::fetch_qualifying()                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  conn.close().await  ← before any barcode work starts                   │
//! │                                                                         │
//! │  On a query error the connection is dropped, which also releases it.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Default table holding the inventory rows.
pub const DEFAULT_TABLE: &str = "laptops";

// =============================================================================
// Configuration
// =============================================================================

/// Where the inventory lives.
///
/// ## Example
/// ```rust
/// use labelsheet_db::DbConfig;
///
/// let config = DbConfig::new("inventaris.sqlite").table("devices");
/// assert_eq!(config.table, "devices");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Table with `serial` and `device_name` columns.
    /// Default: `laptops`
    pub table: String,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Sets the source table.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Returns true if the database file is present.
    pub fn exists(&self) -> bool {
        self.database_path.is_file()
    }

    pub fn path(&self) -> &Path {
        &self.database_path
    }
}

// =============================================================================
// Connection
// =============================================================================

/// Opens a read-only connection to an existing database file.
pub async fn open_read_only(config: &DbConfig) -> DbResult<SqliteConnection> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .read_only(true)
        .create_if_missing(false);

    debug!(path = %config.database_path.display(), "Opening read-only connection");

    SqliteConnection::connect_with(&options)
        .await
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))
}
