//! # Validation Module
//!
//! Checks on configurable values, run once before the pipeline starts.
//!
//! ## Usage
//! ```rust
//! use labelsheet_core::validation::validate_table_name;
//!
//! assert!(validate_table_name("laptops").is_ok());
//! assert!(validate_table_name("laptops; DROP TABLE x").is_err());
//! ```

use crate::error::ValidationError;
use crate::layout::{BarcodeOptions, PageLayout};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the source table name.
///
/// The name is interpolated into the query, so it must be a plain SQL
/// identifier: ASCII letters, digits and underscores, not starting with a
/// digit.
pub fn validate_table_name(table: &str) -> ValidationResult<()> {
    let Some(first) = table.chars().next() else {
        return Err(ValidationError::required("database.table"));
    };

    if first.is_ascii_digit() {
        return Err(ValidationError::invalid_format(
            "database.table",
            "must not start with a digit",
        ));
    }

    if !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::invalid_format(
            "database.table",
            "must contain only ASCII letters, digits, and underscores",
        ));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn positive(field: &str, value: f64) -> ValidationResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::MustBePositive {
            field: field.to_string(),
            value,
        })
    }
}

fn non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        })
    }
}

/// Validates barcode rendering options.
pub fn validate_barcode_options(options: &BarcodeOptions) -> ValidationResult<()> {
    positive("barcode.dpi", options.dpi)?;
    positive("barcode.module_height_mm", options.module_height_mm)?;
    positive("barcode.module_width_mm", options.module_width_mm)?;
    non_negative("barcode.quiet_zone_mm", options.quiet_zone_mm)?;
    non_negative("barcode.margin_mm", options.margin_mm)?;

    if options.write_text {
        positive("barcode.font_size_pt", options.font_size_pt)?;
        non_negative("barcode.text_distance_mm", options.text_distance_mm)?;
    }

    Ok(())
}

/// Validates page layout options.
pub fn validate_page_layout(layout: &PageLayout) -> ValidationResult<()> {
    positive("layout.page_width_mm", layout.page_width_mm)?;
    positive("layout.page_height_mm", layout.page_height_mm)?;
    non_negative("layout.margin_mm", layout.margin_mm)?;
    positive("layout.printable_width_mm", layout.printable_width_mm())?;
    positive("layout.column_width_mm", layout.column_width_mm)?;
    positive("layout.image_width_mm", layout.image_width_mm)?;
    positive("layout.image_height_mm", layout.image_height_mm)?;
    non_negative("layout.cell_padding_x_pt", layout.cell_padding_x_pt)?;
    non_negative("layout.cell_padding_y_pt", layout.cell_padding_y_pt)?;
    positive("layout.label_font_size", f64::from(layout.label_font_size))?;
    Ok(())
}
