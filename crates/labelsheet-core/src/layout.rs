//! # Layout Options
//!
//! Dimensions for the barcode images and the printed page.
//!
//! All lengths are millimetres unless the field name says `_pt`
//! (typographic points, 1/72 inch). Both structs deserialize from the
//! `[barcode]` and `[layout]` sections of the config file; omitted fields
//! keep their defaults.
//!
//! ## Page Geometry (defaults)
//! ```text
//! ┌──────────────────────── A4: 210 mm ────────────────────────┐
//! │ 10 mm margin                                                │
//! │   ┌ 5 ┬──────── 90 mm ────────┬──────── 90 mm ────────┬ 5 ┐ │
//! │   │   │  ┌─────────────────┐  │  ┌─────────────────┐  │   │ │
//! │   │   │  │ barcode 50x25mm │  │  │ barcode 50x25mm │  │   │ │
//! │   │   │  └─────────────────┘  │  └─────────────────┘  │   │ │
//! │   │   │    **Laptop A**       │   **Unknown device**  │   │ │
//! │   └───┴───────────────────────┴───────────────────────┴───┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::MM_PER_PT;

// =============================================================================
// Color
// =============================================================================

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREY: Rgb = Rgb(128, 128, 128);
}

// =============================================================================
// Barcode Options
// =============================================================================

/// Rendering parameters for one Code-128 image.
///
/// ## Image Geometry
/// ```text
///   margin_mm
///   ┌─────────────────────────────────────────────┐
///   │ quiet │ ▌▐▌ ▌▌▐ ▐▌▌▐ ▌ ▐▌▐▌  (module_height) │ quiet │
///   │       │       text_distance_mm              │       │
///   │       │         ABC123   (font_size_pt)     │       │
///   └─────────────────────────────────────────────┘
///   margin_mm
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeOptions {
    /// Print the serial under the bars.
    pub write_text: bool,

    /// Size of the human-readable text.
    pub font_size_pt: f64,

    /// Bar height.
    pub module_height_mm: f64,

    /// Blank space left and right of the symbol.
    pub quiet_zone_mm: f64,

    /// Width of the narrowest bar.
    pub module_width_mm: f64,

    /// Gap between the bottom of the bars and the top of the text.
    pub text_distance_mm: f64,

    /// Blank band above the bars and below the text.
    pub margin_mm: f64,

    /// Raster resolution.
    pub dpi: f64,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        BarcodeOptions {
            write_text: true,
            font_size_pt: 8.0,
            module_height_mm: 10.0,
            quiet_zone_mm: 1.0,
            module_width_mm: 0.2,
            text_distance_mm: 1.0,
            margin_mm: 1.0,
            dpi: 300.0,
        }
    }
}

impl BarcodeOptions {
    /// Pixels per millimetre at the configured resolution.
    pub fn px_per_mm(&self) -> f64 {
        self.dpi / 25.4
    }

    /// Converts a length in millimetres to whole pixels.
    pub fn mm_to_px(&self, mm: f64) -> u32 {
        (mm * self.px_per_mm()).round().max(0.0) as u32
    }

    /// Text height in pixels.
    pub fn font_px(&self) -> f32 {
        (self.font_size_pt * MM_PER_PT * self.px_per_mm()) as f32
    }

    /// Image width in millimetres for a symbol of `modules` modules.
    pub fn width_mm(&self, modules: usize) -> f64 {
        2.0 * self.quiet_zone_mm + modules as f64 * self.module_width_mm
    }

    /// Image height in millimetres.
    pub fn height_mm(&self) -> f64 {
        let text = if self.write_text {
            self.text_distance_mm + self.font_size_pt * MM_PER_PT
        } else {
            0.0
        };
        2.0 * self.margin_mm + self.module_height_mm + text
    }
}

// =============================================================================
// Page Layout
// =============================================================================

/// Page and table geometry of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,

    /// Uniform margin on all four sides.
    pub margin_mm: f64,

    /// Width of each of the two columns. A literal, not derived from the page.
    pub column_width_mm: f64,

    /// Box every barcode image is stretched into (aspect ratio not kept).
    pub image_width_mm: f64,
    pub image_height_mm: f64,

    /// Cell padding.
    pub cell_padding_x_pt: f64,
    pub cell_padding_y_pt: f64,

    /// Color of the frame drawn around every cell.
    pub grid_color: Rgb,

    /// Device name under each image.
    pub label_font_size: u8,
    pub label_space_before_pt: f64,
    pub label_space_after_pt: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            column_width_mm: 90.0,
            image_width_mm: 50.0,
            image_height_mm: 25.0,
            cell_padding_x_pt: 5.0,
            cell_padding_y_pt: 10.0,
            grid_color: Rgb::GREY,
            label_font_size: 12,
            label_space_before_pt: 2.0,
            label_space_after_pt: 10.0,
        }
    }
}

impl PageLayout {
    /// Width between the left and right margins.
    pub fn printable_width_mm(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Width of the two-column table.
    pub fn table_width_mm(&self) -> f64 {
        2.0 * self.column_width_mm
    }

    /// Space left on each side when the table is centred.
    ///
    /// Zero when the columns are wider than the printable area.
    pub fn table_inset_mm(&self) -> f64 {
        ((self.printable_width_mm() - self.table_width_mm()) / 2.0).max(0.0)
    }

    pub fn cell_padding_x_mm(&self) -> f64 {
        self.cell_padding_x_pt * MM_PER_PT
    }

    pub fn cell_padding_y_mm(&self) -> f64 {
        self.cell_padding_y_pt * MM_PER_PT
    }
}
