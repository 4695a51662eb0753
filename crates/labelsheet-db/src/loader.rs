//! # Inventory Loader
//!
//! Entry point of the pipeline's first stage.
//!
//! ## Flow
//! ```text
//!   DbConfig
//!      │
//!      ├── file missing ──────────────────────► LoadOutcome::Missing
//!      │
//!      ▼
//!   open_read_only ─► fetch_qualifying ─► close ─► LoadOutcome::Loaded(records)
//! ```

use sqlx::Connection;
use tracing::{info, warn};

use crate::connection::{open_read_only, DbConfig};
use crate::error::DbResult;
use crate::repository::inventory::InventoryRepository;
use labelsheet_core::InventoryRecord;

/// Result of reading the inventory source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The database file does not exist. Treated as an empty dataset.
    Missing,

    /// Records with a non-empty serial, in query order.
    Loaded(Vec<InventoryRecord>),
}

impl LoadOutcome {
    pub fn records(&self) -> &[InventoryRecord] {
        match self {
            LoadOutcome::Missing => &[],
            LoadOutcome::Loaded(records) => records,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LoadOutcome::Missing)
    }
}

/// Loads all qualifying inventory records.
///
/// ## Returns
/// * `Ok(LoadOutcome::Missing)` - database file not found
/// * `Ok(LoadOutcome::Loaded(_))` - query ran (possibly zero rows)
/// * `Err(DbError)` - file exists but could not be opened or queried
///
/// ## Example
/// ```rust,ignore
/// let outcome = load_inventory(&DbConfig::new("inventaris.sqlite")).await?;
/// println!("Records found: {}", outcome.records().len());
/// ```
pub async fn load_inventory(config: &DbConfig) -> DbResult<LoadOutcome> {
    if !config.exists() {
        warn!(path = %config.path().display(), "Database not found");
        return Ok(LoadOutcome::Missing);
    }

    let mut conn = open_read_only(config).await?;

    let records = InventoryRepository::new(&mut conn, &config.table)?
        .fetch_qualifying()
        .await?;

    conn.close().await?;

    info!(
        path = %config.path().display(),
        table = %config.table,
        count = records.len(),
        "Inventory loaded"
    );

    Ok(LoadOutcome::Loaded(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbError;
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::{Connection, SqliteConnection};
    use std::path::Path;

    async fn write_fixture(path: &Path, rows: &[(Option<&str>, Option<&str>)]) {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();

        sqlx::query("CREATE TABLE laptops (serial TEXT, device_name TEXT)")
            .execute(&mut conn)
            .await
            .unwrap();

        for (serial, name) in rows {
            sqlx::query("INSERT INTO laptops (serial, device_name) VALUES (?1, ?2)")
                .bind(*serial)
                .bind(*name)
                .execute(&mut conn)
                .await
                .unwrap();
        }

        conn.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_missing_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let config = DbConfig::new(dir.path().join("inventaris.sqlite"));

        let outcome = load_inventory(&config).await.unwrap();

        assert!(outcome.is_missing());
        assert!(outcome.records().is_empty());
        assert!(!config.exists());
    }

    #[tokio::test]
    async fn test_loads_rows_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventaris.sqlite");
        write_fixture(
            &path,
            &[
                (Some("ZZZ"), Some("Last alphabetically")),
                (Some("AAA"), None),
                (None, Some("No serial")),
                (Some("MMM"), Some("")),
            ],
        )
        .await;

        let outcome = load_inventory(&DbConfig::new(&path)).await.unwrap();
        let serials: Vec<_> = outcome.records().iter().map(|r| r.serial.as_str()).collect();

        assert_eq!(serials, vec!["ZZZ", "AAA", "MMM"]);
        assert_eq!(outcome.records()[2].label(), "Unknown device");
    }

    #[tokio::test]
    async fn test_empty_table_is_loaded_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventaris.sqlite");
        write_fixture(&path, &[(Some(""), Some("Only empty serial"))]).await;

        let outcome = load_inventory(&DbConfig::new(&path)).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded(Vec::new()));
    }

    #[tokio::test]
    async fn test_wrong_table_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventaris.sqlite");
        write_fixture(&path, &[(Some("ABC123"), None)]).await;

        let result = load_inventory(&DbConfig::new(&path).table("servers")).await;

        assert!(matches!(result, Err(DbError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_non_sqlite_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventaris.sqlite");
        std::fs::write(&path, b"definitely not a database, just some bytes to read").unwrap();

        let result = load_inventory(&DbConfig::new(&path)).await;

        assert!(result.is_err());
    }
}
