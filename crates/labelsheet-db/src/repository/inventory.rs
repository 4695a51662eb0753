//! # Inventory Repository
//!
//! The single query the pipeline needs.
//!
//! ## Query
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  laptops                                                                │
//! │  serial     │ device_name                                               │
//! │  ───────────┼─────────────                                              │
//! │  ABC123     │ Laptop A      ← returned                                  │
//! │  NULL       │ Laptop B      ← skipped (no serial)                       │
//! │  ''         │ Laptop C      ← skipped (empty serial)                    │
//! │  XYZ789     │ NULL          ← returned, label falls back later          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both columns are cast to TEXT so integer serials decode the same way as
//! text ones. No ORDER BY: rows come back in the table's natural order.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use labelsheet_core::validation::validate_table_name;
use labelsheet_core::InventoryRecord;

/// Row shape returned by the inventory query.
#[derive(Debug, sqlx::FromRow)]
struct InventoryRow {
    serial: String,
    device_name: Option<String>,
}

impl From<InventoryRow> for InventoryRecord {
    fn from(row: InventoryRow) -> Self {
        InventoryRecord::new(row.serial, row.device_name)
    }
}

/// Read access to the inventory table over a borrowed connection.
#[derive(Debug)]
pub struct InventoryRepository<'c> {
    conn: &'c mut SqliteConnection,
    table: &'c str,
}

impl<'c> InventoryRepository<'c> {
    /// Creates a repository for `table`.
    ///
    /// ## Errors
    /// `DbError::InvalidTable` if `table` is not a plain identifier.
    pub fn new(conn: &'c mut SqliteConnection, table: &'c str) -> DbResult<Self> {
        validate_table_name(table)?;
        Ok(InventoryRepository { conn, table })
    }

    /// Returns every record with a non-empty serial, in query order.
    pub async fn fetch_qualifying(&mut self) -> DbResult<Vec<InventoryRecord>> {
        let sql = format!(
            "SELECT CAST(serial AS TEXT) AS serial, CAST(device_name AS TEXT) AS device_name \
             FROM {} WHERE serial IS NOT NULL AND serial != ''",
            self.table
        );

        debug!(table = %self.table, "Fetching inventory records");

        let rows = sqlx::query_as::<_, InventoryRow>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        debug!(count = rows.len(), "Inventory query returned rows");
        Ok(rows.into_iter().map(InventoryRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbError;
    use sqlx::Connection;

    async fn memory_db() -> SqliteConnection {
        let mut conn = SqliteConnection::connect("sqlite::memory:").await.unwrap();
        sqlx::query("CREATE TABLE laptops (id INTEGER PRIMARY KEY, serial, device_name TEXT)")
            .execute(&mut conn)
            .await
            .unwrap();
        conn
    }

    async fn insert(conn: &mut SqliteConnection, serial: Option<&str>, name: Option<&str>) {
        sqlx::query("INSERT INTO laptops (serial, device_name) VALUES (?1, ?2)")
            .bind(serial)
            .bind(name)
            .execute(conn)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_filters_missing_and_empty_serials() {
        let mut conn = memory_db().await;
        insert(&mut conn, Some("ABC123"), Some("Laptop A")).await;
        insert(&mut conn, None, Some("Laptop B")).await;
        insert(&mut conn, Some(""), Some("Laptop C")).await;
        insert(&mut conn, Some("XYZ789"), None).await;

        let records = InventoryRepository::new(&mut conn, "laptops")
            .unwrap()
            .fetch_qualifying()
            .await
            .unwrap();

        assert_eq!(
            records,
            vec![
                InventoryRecord::new("ABC123", Some("Laptop A".to_string())),
                InventoryRecord::new("XYZ789", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_integer_serials_decode_as_text() {
        let mut conn = memory_db().await;
        sqlx::query("INSERT INTO laptops (serial, device_name) VALUES (4711, 'Dock')")
            .execute(&mut conn)
            .await
            .unwrap();

        let records = InventoryRepository::new(&mut conn, "laptops")
            .unwrap()
            .fetch_qualifying()
            .await
            .unwrap();

        assert_eq!(records[0].serial, "4711");
    }

    #[tokio::test]
    async fn test_missing_table_is_query_error() {
        let mut conn = memory_db().await;

        let result = InventoryRepository::new(&mut conn, "devices")
            .unwrap()
            .fetch_qualifying()
            .await;

        match result {
            Err(DbError::QueryFailed(msg)) => assert!(msg.contains("no such table")),
            other => panic!("expected QueryFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_unsafe_table_name() {
        let mut conn = memory_db().await;
        let result = InventoryRepository::new(&mut conn, "laptops; DELETE FROM laptops");
        assert!(matches!(result, Err(DbError::InvalidTable(_))));
    }
}
