//! # Configuration
//!
//! Every path and dimension the pipeline uses, passed explicitly to each
//! stage.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     LABELSHEET_DB=./data/inventory.sqlite                               │
//! │     LABELSHEET_OUTPUT=labels.pdf                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     $LABELSHEET_CONFIG, else ./labelsheet.toml                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     inventaris.sqlite → inventaris_barcodes.pdf                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [database]
//! path = "inventaris.sqlite"
//! table = "laptops"
//!
//! [output]
//! document = "inventaris_barcodes.pdf"
//! scratch_dir = "temp_barcodes"
//! title = "Inventory barcodes"
//!
//! [fonts]
//! dir = "fonts"
//! family = "LiberationSans"
//!
//! [barcode]
//! font_size_pt = 8.0
//! module_height_mm = 10.0
//! quiet_zone_mm = 1.0
//!
//! [layout]
//! column_width_mm = 90.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use labelsheet_core::validation::{
    validate_barcode_options, validate_page_layout, validate_table_name,
};
use labelsheet_core::{BarcodeOptions, PageLayout, ValidationError};
use labelsheet_db::{DbConfig, DEFAULT_TABLE};
use labelsheet_render::{FontConfig, DEFAULT_FONT_DIR, DEFAULT_FONT_FAMILY, DEFAULT_TITLE};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "labelsheet.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "LABELSHEET_CONFIG";

// =============================================================================
// Sections
// =============================================================================

/// Inventory source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub table: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: PathBuf::from("inventaris.sqlite"),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

/// Output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// The PDF to write.
    pub document: PathBuf,

    /// Where barcode images go. Created if absent, never cleaned up.
    pub scratch_dir: PathBuf,

    /// PDF title metadata.
    pub title: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            document: PathBuf::from("inventaris_barcodes.pdf"),
            scratch_dir: PathBuf::from("temp_barcodes"),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// TrueType family location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub dir: PathBuf,
    pub family: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        FontSettings {
            dir: PathBuf::from(DEFAULT_FONT_DIR),
            family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub fonts: FontSettings,

    #[serde(default)]
    pub barcode: BarcodeOptions,

    #[serde(default)]
    pub layout: PageLayout,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$LABELSHEET_CONFIG`, `./labelsheet.toml`)
    /// 3. Environment variables
    ///
    /// A config file that does not exist is not an error.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() {
            info!(path = %path.display(), "Loading config from file");
            let contents = std::fs::read_to_string(&path)?;
            config = toml::from_str(&contents)?;
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(path) = get("LABELSHEET_DB") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Some(table) = get("LABELSHEET_TABLE") {
            self.database.table = table;
        }

        if let Some(document) = get("LABELSHEET_OUTPUT") {
            debug!(path = %document, "Overriding output path from environment");
            self.output.document = PathBuf::from(document);
        }

        if let Some(dir) = get("LABELSHEET_SCRATCH_DIR") {
            self.output.scratch_dir = PathBuf::from(dir);
        }

        if let Some(dir) = get("LABELSHEET_FONT_DIR") {
            self.fonts.dir = PathBuf::from(dir);
        }

        if let Some(family) = get("LABELSHEET_FONT_FAMILY") {
            self.fonts.family = family;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_table_name(&self.database.table)?;
        validate_barcode_options(&self.barcode)?;
        validate_page_layout(&self.layout)?;

        if self.output.document.as_os_str().is_empty() {
            return Err(ValidationError::required("output.document").into());
        }
        if self.fonts.family.is_empty() {
            return Err(ValidationError::required("fonts.family").into());
        }

        Ok(())
    }

    // =========================================================================
    // Stage Parameters
    // =========================================================================

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database.path).table(&self.database.table)
    }

    pub fn font_config(&self) -> FontConfig {
        FontConfig::new(&self.fonts.dir, &self.fonts.family)
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}
