//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────┐          ┌─────────────────────────┐
//! │    InventoryRecord      │  render  │       LabelCell         │
//! │  ─────────────────────  │ ───────► │  ─────────────────────  │
//! │  serial (payload)       │          │  asset (PNG path)       │
//! │  device_name (Option)   │          │  label (display text)   │
//! └─────────────────────────┘          └─────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::UNKNOWN_DEVICE_LABEL;

// =============================================================================
// Inventory Record
// =============================================================================

/// One row of the inventory source.
///
/// The serial is both the barcode payload and the key for the generated
/// image file. Records are read-only to this program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Unique device identifier, never empty for records the loader returns.
    pub serial: String,

    /// Display name printed under the barcode.
    pub device_name: Option<String>,
}

impl InventoryRecord {
    pub fn new(serial: impl Into<String>, device_name: Option<String>) -> Self {
        InventoryRecord {
            serial: serial.into(),
            device_name,
        }
    }

    /// Returns the text printed under the barcode.
    ///
    /// Falls back to [`UNKNOWN_DEVICE_LABEL`] when the name is missing or the
    /// empty string.
    pub fn label(&self) -> &str {
        match self.device_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_DEVICE_LABEL,
        }
    }
}

// =============================================================================
// Label Cell
// =============================================================================

/// A filled grid cell: a generated barcode image and the label below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCell {
    /// Path of the barcode image in the scratch directory.
    pub asset: PathBuf,

    /// Text rendered under the image.
    pub label: String,
}

impl LabelCell {
    pub fn new(asset: impl Into<PathBuf>, record: &InventoryRecord) -> Self {
        LabelCell {
            asset: asset.into(),
            label: record.label().to_string(),
        }
    }
}
