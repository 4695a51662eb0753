//! # Sample Inventory Generator
//!
//! Creates a small inventory database for trying the pipeline end to end.
//!
//! ## Usage
//! ```bash
//! # Write ./inventaris.sqlite (default)
//! cargo run -p labelsheet-db --bin seed
//!
//! # Specify database path and table
//! cargo run -p labelsheet-db --bin seed -- --db ./data/inventory.sqlite --table laptops
//! ```
//!
//! ## Generated Rows
//! - Devices with names and plain serials
//! - Devices without a name (label falls back to the placeholder)
//! - A serial with punctuation (sanitized file name)
//! - A row with an empty serial and one without a serial (both filtered out)
//! - A serial outside the Code-128 character set (skipped by the pipeline)

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::env;

use labelsheet_core::validation::validate_table_name;
use labelsheet_db::DEFAULT_TABLE;

/// (serial, device_name) pairs written by the seed tool.
const SAMPLE_ROWS: &[(Option<&str>, Option<&str>)] = &[
    (Some("5CD1234XYZ"), Some("HP EliteBook 840 G8")),
    (Some("PF2ABCDE"), Some("Lenovo ThinkPad T14")),
    (Some("C02XK1ZZJG5H"), Some("MacBook Pro 13\"")),
    (Some("DL-7420/0042"), Some("Dell Latitude 7420")),
    (Some("SN00017"), None),
    (Some("SN00018"), Some("")),
    (Some(""), Some("Returned to vendor")),
    (None, Some("Awaiting serial")),
    (Some("ÄÖÜ-001"), Some("Label printer")),
    (Some("9X8Y7Z"), Some("Surface Laptop 5")),
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = "inventaris.sqlite".to_string();
    let mut table = DEFAULT_TABLE.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--table" | "-t" => {
                if i + 1 < args.len() {
                    table = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("labelsheet Sample Inventory Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>      Database file path (default: ./inventaris.sqlite)");
                println!("  -t, --table <NAME>   Table name (default: {DEFAULT_TABLE})");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    validate_table_name(&table)?;

    println!("labelsheet Sample Inventory Generator");
    println!("=====================================");
    println!("Database: {}", db_path);
    println!("Table:    {}", table);
    println!();

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            serial TEXT,
            device_name TEXT
        )"
    ))
    .execute(&mut conn)
    .await?;

    let existing: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&mut conn)
        .await?;
    if existing > 0 {
        println!("⚠ Table already has {} rows", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        conn.close().await?;
        return Ok(());
    }

    let insert = format!("INSERT INTO {table} (serial, device_name) VALUES (?1, ?2)");
    for (serial, name) in SAMPLE_ROWS {
        sqlx::query(&insert)
            .bind(*serial)
            .bind(*name)
            .execute(&mut conn)
            .await?;
    }

    conn.close().await?;

    println!("✓ Inserted {} rows", SAMPLE_ROWS.len());
    Ok(())
}
