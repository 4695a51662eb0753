//! # labelsheet-db: Inventory Source for labelsheet
//!
//! Reads the device inventory from a local SQLite file using sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       labelsheet Data Flow                              │
//! │                                                                         │
//! │  pipeline::run                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  labelsheet-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   loader.rs   │───►│ connection.rs │    │ repository/  │   │   │
//! │  │   │ load_inventory│    │ read-only conn│◄───│ inventory.rs │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 SQLite file (inventaris.sqlite)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`loader`] - `load_inventory`, the stage entry point
//! - [`connection`] - `DbConfig` and read-only connection setup
//! - [`repository`] - the inventory query
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelsheet_db::{load_inventory, DbConfig, LoadOutcome};
//!
//! match load_inventory(&DbConfig::new("inventaris.sqlite")).await? {
//!     LoadOutcome::Missing => println!("no database"),
//!     LoadOutcome::Loaded(records) => println!("{} records", records.len()),
//! }
//! ```

pub mod connection;
pub mod error;
pub mod loader;
pub mod repository;

pub use connection::{DbConfig, DEFAULT_TABLE};
pub use error::{DbError, DbResult};
pub use loader::{load_inventory, LoadOutcome};
pub use repository::inventory::InventoryRepository;
