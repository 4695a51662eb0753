//! # labelsheet-core: Pure Domain Logic for labelsheet
//!
//! Everything the barcode sheet pipeline decides without touching a file,
//! a database or a font lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      labelsheet Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/labelsheet (pipeline)                     │   │
//! │  │         load ──► render barcodes ──► assemble ──► write         │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼────────────┐   ┌─────────────▼──────────────────┐   │
//! │  │      labelsheet-db        │   │       labelsheet-render        │   │
//! │  │   SQLite inventory read   │   │   Code-128 PNG + genpdf PDF    │   │
//! │  └──────────────┬────────────┘   └─────────────┬──────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────────────────▼──────────────────┐   │
//! │  │            ★ labelsheet-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  naming   │  │   grid    │  │  layout   │  │   │
//! │  │   │  Record   │  │ asset_stem│  │ 2 columns │  │  options  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO RENDERING • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inventory records and label cells
//! - [`naming`] - Filesystem-safe asset names derived from serials
//! - [`grid`] - Two-column document grid
//! - [`layout`] - Barcode and page layout options
//! - [`validation`] - Checks on configurable values
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use labelsheet_core::{DocumentGrid, InventoryRecord};
//!
//! let records = vec![
//!     InventoryRecord::new("ABC123", Some("Laptop A".to_string())),
//!     InventoryRecord::new("XYZ789", None),
//!     InventoryRecord::new("QQQ000", None),
//! ];
//!
//! let grid = DocumentGrid::from_cells(records.iter().map(|r| r.label()));
//! assert_eq!(grid.len(), 2);
//! assert_eq!(grid.rows()[1][1], None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod grid;
pub mod layout;
pub mod naming;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use grid::DocumentGrid;
pub use layout::{BarcodeOptions, PageLayout, Rgb};
pub use naming::{asset_file_name, asset_stem};
pub use types::{InventoryRecord, LabelCell};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label printed under a barcode when the record carries no device name.
pub const UNKNOWN_DEVICE_LABEL: &str = "Unknown device";

/// Number of cells per grid row.
pub const GRID_COLUMNS: usize = 2;

/// Extension of every generated barcode image.
pub const ASSET_EXTENSION: &str = "png";

/// Millimetres per typographic point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;
