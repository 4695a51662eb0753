//! # Render Error Types
//!
//! Failures while producing barcode images or the PDF.
//!
//! ```text
//!   BarcodeRenderer::new    ──► FontMissing
//!   BarcodeRenderer::render ──► Encode | Image               (per record)
//!   FontConfig::load_*      ──► FontLoad
//!   DocumentAssembler       ──► Asset | Layout | EmptyDocument | Write
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The serial cannot be expressed as a Code-128 symbol.
    ///
    /// ## When This Occurs
    /// - Serial contains characters outside printable ASCII
    /// - Serial is empty
    #[error("Cannot encode serial '{serial}' as Code-128: {reason}")]
    Encode { serial: String, reason: String },

    /// Text under the bars was requested but no font was supplied.
    #[error("Barcode text requested but no font is loaded")]
    FontMissing,

    /// A font file is absent or not a usable TrueType font.
    #[error("Failed to load font from {}: {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },

    /// PNG encoding or decoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A generated barcode image could not be placed in the document.
    #[error("Failed to load barcode image {}: {reason}", path.display())]
    Asset { path: PathBuf, reason: String },

    /// The table could not be laid out.
    #[error("Layout failed: {0}")]
    Layout(String),

    /// There are no cells to place.
    #[error("Document has no cells")]
    EmptyDocument,

    /// Writing the PDF failed. A partial file may remain at `path`.
    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl RenderError {
    pub fn encode(serial: impl Into<String>, reason: impl Into<String>) -> Self {
        RenderError::Encode {
            serial: serial.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::encode("ÄÖÜ", "character 'Ä' is not in Code-128 set B");
        assert_eq!(
            err.to_string(),
            "Cannot encode serial 'ÄÖÜ' as Code-128: character 'Ä' is not in Code-128 set B"
        );

        let err = RenderError::Write {
            path: PathBuf::from("out.pdf"),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write out.pdf: disk full");
    }
}
