//! # labelsheet-render: Barcode Images and PDF Output
//!
//! ## Module Organization
//!
//! - [`barcode`] - Code-128 encoding and PNG rasterization
//! - [`document`] - Two-column PDF assembly with genpdf
//! - [`fonts`] - Locating and loading the TrueType family both use
//! - [`error`] - Render error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelsheet_core::{BarcodeOptions, DocumentGrid, LabelCell, PageLayout};
//! use labelsheet_render::{BarcodeRenderer, DocumentAssembler, FontConfig};
//!
//! let fonts = FontConfig::default().with_system_fallback();
//! let renderer = BarcodeRenderer::new(BarcodeOptions::default(), Some(fonts.load_barcode_font()?))?;
//!
//! let cells = records.iter().map(|r| {
//!     renderer.render(&r.serial, scratch).map(|path| LabelCell::new(path, r))
//! }).collect::<Result<Vec<_>, _>>()?;
//!
//! DocumentAssembler::new(PageLayout::default(), fonts.load_family()?)
//!     .write(&DocumentGrid::from_cells(cells), "inventaris_barcodes.pdf".as_ref())?;
//! ```

pub mod barcode;
pub mod document;
pub mod error;
pub mod fonts;

pub use barcode::{encode, BarcodeRenderer};
pub use document::{DocumentAssembler, DEFAULT_TITLE};
pub use error::{RenderError, RenderResult};
pub use fonts::{FontConfig, DEFAULT_FONT_DIR, DEFAULT_FONT_FAMILY};
