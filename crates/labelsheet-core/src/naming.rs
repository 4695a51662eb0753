//! # Asset Naming
//!
//! Turns a serial into the file name of its barcode image.
//!
//! ```text
//!   "SN-12/34 A"  ──►  "SN_12_34_A"  ──►  "SN_12_34_A.png"
//!        serial          asset_stem       asset_file_name
//! ```
//!
//! Distinct serials may collapse onto the same stem (`A-1` and `A/1`); the
//! later image then overwrites the earlier one in the scratch directory.

use crate::ASSET_EXTENSION;

/// Replaces every non-alphanumeric character with `_`.
///
/// Alphanumeric is Unicode-aware, so `é` or `٣` survive unchanged.
///
/// ## Example
/// ```rust
/// use labelsheet_core::asset_stem;
///
/// assert_eq!(asset_stem("SN-12/34 A"), "SN_12_34_A");
/// assert_eq!(asset_stem("ABC123"), "ABC123");
/// ```
pub fn asset_stem(serial: &str) -> String {
    serial
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// File name (stem plus extension) of the barcode image for `serial`.
pub fn asset_file_name(serial: &str) -> String {
    format!("{}.{}", asset_stem(serial), ASSET_EXTENSION)
}
