//! # Fonts
//!
//! genpdf embeds TrueType fonts and has no built-in family we can rely on,
//! so a family must exist on disk:
//!
//! ```text
//!   <dir>/<family>-Regular.ttf      ← also used for the text under the bars
//!   <dir>/<family>-Bold.ttf         ← device labels
//!   <dir>/<family>-Italic.ttf
//!   <dir>/<family>-BoldItalic.ttf
//! ```
//!
//! When the configured directory lacks the family, a few common system
//! locations of Liberation Sans are tried.

use ab_glyph::FontVec;
use genpdf::fonts::{FontData, FontFamily};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};

/// Default font directory, relative to the working directory.
pub const DEFAULT_FONT_DIR: &str = "fonts";

/// Default family name.
pub const DEFAULT_FONT_FAMILY: &str = "LiberationSans";

/// System directories searched by [`FontConfig::with_system_fallback`].
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

const STYLES: [&str; 4] = ["Regular", "Bold", "Italic", "BoldItalic"];

/// Location of a TrueType font family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    pub dir: PathBuf,
    pub family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig::new(DEFAULT_FONT_DIR, DEFAULT_FONT_FAMILY)
    }
}

impl FontConfig {
    pub fn new(dir: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        FontConfig {
            dir: dir.into(),
            family: family.into(),
        }
    }

    fn style_path(&self, style: &str) -> PathBuf {
        self.dir.join(format!("{}-{}.ttf", self.family, style))
    }

    /// Path of the regular face.
    pub fn regular_path(&self) -> PathBuf {
        self.style_path("Regular")
    }

    /// Returns true if all four faces exist.
    pub fn is_available(&self) -> bool {
        STYLES.iter().all(|style| self.style_path(style).is_file())
    }

    /// Returns `self` if available, otherwise the first system directory
    /// holding the same family, otherwise `self` unchanged.
    pub fn with_system_fallback(self) -> Self {
        if self.is_available() {
            return self;
        }

        for dir in SYSTEM_FONT_DIRS {
            let candidate = FontConfig::new(*dir, self.family.clone());
            if candidate.is_available() {
                info!(
                    configured = %self.dir.display(),
                    using = %candidate.dir.display(),
                    family = %self.family,
                    "Configured font directory lacks family, using system fonts"
                );
                return candidate;
            }
        }

        debug!(dir = %self.dir.display(), "No system fallback found for font family");
        self
    }

    /// Loads the family for genpdf.
    pub fn load_family(&self) -> RenderResult<FontFamily<FontData>> {
        genpdf::fonts::from_files(&self.dir, &self.family, None).map_err(|e| {
            RenderError::FontLoad {
                path: self.dir.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// Loads the regular face for drawing barcode text.
    pub fn load_barcode_font(&self) -> RenderResult<FontVec> {
        load_font_file(&self.regular_path())
    }
}

fn load_font_file(path: &Path) -> RenderResult<FontVec> {
    let bytes = std::fs::read(path).map_err(|e| RenderError::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    FontVec::try_from_vec(bytes).map_err(|e| RenderError::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// DejaVu Sans, checked in under `tests/fonts`.
#[cfg(test)]
pub(crate) fn test_fonts() -> FontConfig {
    FontConfig::new(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fonts"),
        "DejaVuSans",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_paths() {
        let fonts = FontConfig::new("/opt/fonts", "Roboto");
        assert_eq!(fonts.regular_path(), PathBuf::from("/opt/fonts/Roboto-Regular.ttf"));
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let fonts = FontConfig::new(dir.path(), "Nope");
        assert!(!fonts.is_available());
        // No system directory holds a family called "Nope".
        assert_eq!(fonts.clone().with_system_fallback(), fonts);
    }

    #[test]
    fn test_partial_family_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Test-Regular.ttf"), b"x").unwrap();
        assert!(!FontConfig::new(dir.path(), "Test").is_available());
    }

    #[test]
    fn test_invalid_font_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Test-Regular.ttf"), b"not a font").unwrap();

        let result = FontConfig::new(dir.path(), "Test").load_barcode_font();
        assert!(matches!(result, Err(RenderError::FontLoad { .. })));
    }

    #[test]
    fn test_loads_checked_in_family() {
        let fonts = test_fonts();
        assert!(fonts.is_available());
        assert_eq!(fonts.clone().with_system_fallback(), fonts);
        assert!(fonts.load_family().is_ok());
        assert!(fonts.load_barcode_font().is_ok());
    }
}
