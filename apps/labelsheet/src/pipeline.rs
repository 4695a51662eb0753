//! # Pipeline
//!
//! Runs the three stages in order.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  load_inventory ──► Missing ──────────────────────► SourceMissing       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  records empty? ──► yes ──────────────────────────► NoRecords           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create scratch dir                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each record: render barcode                                        │
//! │       ├── Ok  → LabelCell                                               │
//! │       └── Err → SkippedRecord (logged, run continues)                   │
//! │       │         also taken when the file name is already in use         │
//! │       ▼                                                                 │
//! │  no cells? ──► yes ───────────────────────────────► NothingRendered     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load font family, DocumentAssembler::write                             │
//! │       ├── Ok  ────────────────────────────────────► Written(path)       │
//! │       └── Err ────────────────────────────────────► WriteFailed(err)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The database connection is closed before the first barcode is drawn.
//! Fonts only matter for the PDF: a missing barcode font drops the text
//! under the bars, a missing document family ends as `WriteFailed`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use labelsheet_core::{asset_file_name, asset_stem, DocumentGrid, InventoryRecord, LabelCell};
use labelsheet_db::{load_inventory, LoadOutcome};
use labelsheet_render::{BarcodeRenderer, DocumentAssembler, FontConfig, RenderError, RenderResult};

use crate::config::AppConfig;
use crate::error::AppError;

// =============================================================================
// Summary
// =============================================================================

/// A record that produced no barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub serial: String,
    pub reason: String,
}

/// How the run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The database file does not exist. Nothing was written.
    SourceMissing,

    /// The query returned no qualifying rows. Nothing was written.
    NoRecords,

    /// Every record was skipped. No PDF was written.
    NothingRendered,

    /// The PDF was written to this path.
    Written(PathBuf),

    /// Loading the document fonts, building or writing the PDF failed; a
    /// partial file may remain.
    WriteFailed(RenderError),
}

/// What a run did.
#[derive(Debug)]
pub struct RunSummary {
    /// Qualifying rows returned by the loader.
    pub records_found: usize,

    /// Rendered cells in the layout handed to the document, record order.
    pub grid: DocumentGrid<LabelCell>,

    /// Records whose barcode could not be rendered.
    pub skipped: Vec<SkippedRecord>,

    pub outcome: RunOutcome,
}

impl RunSummary {
    fn without_records(outcome: RunOutcome) -> Self {
        RunSummary {
            records_found: 0,
            grid: DocumentGrid::default(),
            skipped: Vec::new(),
            outcome,
        }
    }

    /// Barcode images written, in record order.
    pub fn barcodes(&self) -> impl Iterator<Item = &Path> {
        self.grid.cells().map(|cell| cell.asset.as_path())
    }

    /// Returns the PDF path if one was written.
    pub fn document(&self) -> Option<&Path> {
        match &self.outcome {
            RunOutcome::Written(path) => Some(path),
            _ => None,
        }
    }

    /// Logs the final status line.
    pub fn report(&self) {
        if !self.skipped.is_empty() {
            warn!(count = self.skipped.len(), "Some records were skipped");
        }

        match &self.outcome {
            RunOutcome::SourceMissing => info!("No input, nothing written"),
            RunOutcome::NoRecords => info!("No data to process"),
            RunOutcome::NothingRendered => warn!("No barcode could be rendered, no PDF written"),
            RunOutcome::Written(path) => {
                let shown = std::path::absolute(path).unwrap_or_else(|_| path.clone());
                info!(
                    path = %shown.display(),
                    barcodes = self.grid.cell_count(),
                    "Success! PDF written"
                );
            }
            RunOutcome::WriteFailed(err) => error!(error = %err, "Failed to create PDF"),
        }
    }
}

// =============================================================================
// Stages
// =============================================================================

/// Runs the whole pipeline with `config`.
///
/// ## Errors
/// Only for conditions that stop the run: an unreadable database or an
/// uncreatable scratch directory. The outcomes listed in [`RunOutcome`] are
/// all `Ok`.
pub async fn run(config: &AppConfig) -> Result<RunSummary, AppError> {
    let records = match load_inventory(&config.db_config()).await? {
        LoadOutcome::Missing => return Ok(RunSummary::without_records(RunOutcome::SourceMissing)),
        LoadOutcome::Loaded(records) => records,
    };

    info!(count = records.len(), "Records found");

    if records.is_empty() {
        return Ok(RunSummary::without_records(RunOutcome::NoRecords));
    }

    info!(path = %config.output.document.display(), "Generating PDF");

    let scratch = &config.output.scratch_dir;
    std::fs::create_dir_all(scratch).map_err(|source| AppError::ScratchDir {
        path: scratch.clone(),
        source,
    })?;

    let fonts = config.font_config().with_system_fallback();
    let renderer = barcode_renderer(config, &fonts)?;

    let (cells, skipped) = render_barcodes(&renderer, &records, scratch);
    let grid = DocumentGrid::from_cells(cells);

    let outcome = if grid.is_empty() {
        RunOutcome::NothingRendered
    } else {
        match write_document(config, &fonts, &grid) {
            Ok(path) => RunOutcome::Written(path),
            Err(err) => RunOutcome::WriteFailed(err),
        }
    };

    Ok(RunSummary {
        records_found: records.len(),
        grid,
        skipped,
        outcome,
    })
}

/// Builds the barcode renderer, without text if the font cannot be loaded.
fn barcode_renderer(config: &AppConfig, fonts: &FontConfig) -> Result<BarcodeRenderer, AppError> {
    let mut options = config.barcode.clone();

    let font = if options.write_text {
        match fonts.load_barcode_font() {
            Ok(font) => Some(font),
            Err(err) => {
                warn!(error = %err, "Barcode font unavailable, drawing bars without text");
                options.write_text = false;
                None
            }
        }
    } else {
        None
    };

    Ok(BarcodeRenderer::new(options, font)?)
}

fn write_document(
    config: &AppConfig,
    fonts: &FontConfig,
    grid: &DocumentGrid<LabelCell>,
) -> RenderResult<PathBuf> {
    DocumentAssembler::new(config.layout.clone(), fonts.load_family()?)
        .with_title(config.output.title.clone())
        .write(grid, &config.output.document)
}

/// Renders one barcode per record, in order.
///
/// A record whose barcode fails is logged with its serial and returned in
/// the skipped list; the remaining records still render. So is a record
/// whose file name was already written by an earlier record in this run,
/// which keeps every image tied to exactly one label.
pub fn render_barcodes(
    renderer: &BarcodeRenderer,
    records: &[InventoryRecord],
    out_dir: &Path,
) -> (Vec<LabelCell>, Vec<SkippedRecord>) {
    let mut cells = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    let mut written: HashMap<String, &str> = HashMap::new();

    for record in records {
        let stem = asset_stem(&record.serial);

        let result = match written.get(&stem) {
            Some(&first) => Err(format!(
                "{} already holds the barcode for serial '{first}'",
                asset_file_name(&record.serial)
            )),
            None => renderer
                .render(&record.serial, out_dir)
                .map_err(|err| err.to_string()),
        };

        match result {
            Ok(path) => {
                written.insert(stem, &record.serial);
                cells.push(LabelCell::new(path, record));
            }
            Err(reason) => {
                warn!(serial = %record.serial, reason = %reason, "Skipping record");
                skipped.push(SkippedRecord {
                    serial: record.serial.clone(),
                    reason,
                });
            }
        }
    }

    (cells, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelsheet_core::BarcodeOptions;
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::{Connection, SqliteConnection};

    const TEST_FONT_DIR: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../crates/labelsheet-render/tests/fonts"
    );

    fn config_in(dir: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.database.path = dir.join("inventaris.sqlite");
        config.output.document = dir.join("inventaris_barcodes.pdf");
        config.output.scratch_dir = dir.join("temp_barcodes");
        config.fonts.dir = PathBuf::from(TEST_FONT_DIR);
        config.fonts.family = "DejaVuSans".to_string();
        config
    }

    async fn seed(path: &Path, rows: &[(&str, Option<&str>)]) {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        sqlx::query("CREATE TABLE laptops (serial TEXT, device_name TEXT)")
            .execute(&mut conn)
            .await
            .unwrap();
        for (serial, name) in rows {
            sqlx::query("INSERT INTO laptops (serial, device_name) VALUES (?1, ?2)")
                .bind(*serial)
                .bind(*name)
                .execute(&mut conn)
                .await
                .unwrap();
        }
        conn.close().await.unwrap();
    }

    fn labels(grid: &DocumentGrid<LabelCell>) -> Vec<[Option<&str>; 2]> {
        grid.rows()
            .iter()
            .map(|row| [0, 1].map(|i| row[i].as_ref().map(|cell| cell.label.as_str())))
            .collect()
    }

    fn bars_only() -> BarcodeRenderer {
        let options = BarcodeOptions {
            write_text: false,
            ..BarcodeOptions::default()
        };
        BarcodeRenderer::new(options, None).unwrap()
    }

    #[tokio::test]
    async fn test_missing_database_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let summary = run(&config).await.unwrap();

        assert!(matches!(summary.outcome, RunOutcome::SourceMissing));
        assert!(!config.output.document.exists());
        assert!(!config.output.scratch_dir.exists());
        assert!(!config.database.path.exists());
    }

    #[tokio::test]
    async fn test_no_qualifying_rows_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        seed(&config.database.path, &[("", Some("No serial"))]).await;

        let summary = run(&config).await.unwrap();

        assert!(matches!(summary.outcome, RunOutcome::NoRecords));
        assert_eq!(summary.records_found, 0);
        assert!(!config.output.document.exists());
    }

    #[test]
    fn test_render_barcodes_skips_unencodable_serials() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            InventoryRecord::new("ABC123", Some("Laptop A".to_string())),
            InventoryRecord::new("ÄÖÜ-001", Some("Printer".to_string())),
            InventoryRecord::new("XYZ789", None),
        ];

        let (cells, skipped) = render_barcodes(&bars_only(), &records, dir.path());

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].asset, dir.path().join("ABC123.png"));
        assert_eq!(cells[1].label, "Unknown device");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].serial, "ÄÖÜ-001");
        assert!(!dir.path().join("___-001.png").exists());
    }

    #[test]
    fn test_render_barcodes_skips_colliding_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            InventoryRecord::new("A-1", Some("First".to_string())),
            InventoryRecord::new("A/1", Some("Second".to_string())),
            InventoryRecord::new("B-2", Some("Third".to_string())),
            InventoryRecord::new("A-1", Some("Fourth".to_string())),
        ];

        let (cells, skipped) = render_barcodes(&bars_only(), &records, dir.path());

        let placed: Vec<_> = cells.iter().map(|c| (c.asset.clone(), c.label.as_str())).collect();
        assert_eq!(
            placed,
            vec![
                (dir.path().join("A_1.png"), "First"),
                (dir.path().join("B_2.png"), "Third"),
            ]
        );

        let skipped_serials: Vec<_> = skipped.iter().map(|s| s.serial.as_str()).collect();
        assert_eq!(skipped_serials, vec!["A/1", "A-1"]);
        assert!(skipped[0].reason.contains("A_1.png"));
        assert!(skipped[0].reason.contains("'A-1'"));

        // The first record's image was not overwritten by the second.
        let expected = {
            let other = tempfile::tempdir().unwrap();
            std::fs::read(bars_only().render("A-1", other.path()).unwrap()).unwrap()
        };
        assert_eq!(std::fs::read(dir.path().join("A_1.png")).unwrap(), expected);
    }

    #[test]
    fn test_failed_record_does_not_claim_its_file_name() {
        let dir = tempfile::tempdir().unwrap();
        // The en dash sanitizes to "A_1" but is not Code-128, so nothing is
        // written for it and "A-1" still gets "A_1.png".
        let records = vec![
            InventoryRecord::new("A\u{2013}1", None),
            InventoryRecord::new("A-1", None),
        ];

        let (cells, skipped) = render_barcodes(&bars_only(), &records, dir.path());

        assert_eq!(skipped.len(), 1);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].asset, dir.path().join("A_1.png"));
    }

    #[tokio::test]
    async fn test_two_records_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        seed(
            &config.database.path,
            &[("ABC123", Some("Laptop A")), ("XYZ789", None)],
        )
        .await;

        let summary = run(&config).await.unwrap();

        assert_eq!(summary.records_found, 2);
        assert_eq!(
            summary.barcodes().collect::<Vec<_>>(),
            vec![
                config.output.scratch_dir.join("ABC123.png"),
                config.output.scratch_dir.join("XYZ789.png"),
            ]
        );
        assert!(summary.barcodes().all(|path| path.is_file()));
        assert_eq!(
            labels(&summary.grid),
            vec![[Some("Laptop A"), Some("Unknown device")]]
        );
        assert!(summary.skipped.is_empty());
        assert_eq!(summary.document(), Some(config.output.document.as_path()));

        let bytes = std::fs::read(&config.output.document).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_three_records_pad_second_row() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        seed(
            &config.database.path,
            &[
                ("SN1", Some("Laptop")),
                ("SN2", Some("Dock")),
                ("SN3", Some("Monitor")),
            ],
        )
        .await;

        let summary = run(&config).await.unwrap();

        assert_eq!(
            labels(&summary.grid),
            vec![[Some("Laptop"), Some("Dock")], [Some("Monitor"), None]]
        );
        assert!(matches!(summary.outcome, RunOutcome::Written(_)));
        assert!(config.output.document.is_file());
    }

    #[tokio::test]
    async fn test_bad_serial_is_skipped_and_rest_written() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        seed(
            &config.database.path,
            &[
                ("SN-1/A", Some("Laptop")),
                ("ÄÖÜ", Some("Printer")),
                ("SN2", Some("")),
            ],
        )
        .await;

        let summary = run(&config).await.unwrap();

        assert_eq!(summary.records_found, 3);
        assert!(config.output.scratch_dir.join("SN_1_A.png").exists());
        assert!(config.output.scratch_dir.join("SN2.png").exists());
        assert_eq!(
            labels(&summary.grid),
            vec![[Some("Laptop"), Some("Unknown device")]]
        );
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].serial, "ÄÖÜ");
        assert!(matches!(summary.outcome, RunOutcome::Written(_)));
    }

    #[tokio::test]
    async fn test_write_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.output.document = dir.path().join("missing_dir").join("out.pdf");
        seed(&config.database.path, &[("ABC123", None)]).await;

        let summary = run(&config).await.unwrap();

        assert!(matches!(
            summary.outcome,
            RunOutcome::WriteFailed(RenderError::Write { .. })
        ));
        assert_eq!(summary.grid.cell_count(), 1);
        assert!(summary.document().is_none());
    }

    #[tokio::test]
    async fn test_missing_fonts_still_render_barcodes() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.fonts.dir = dir.path().join("no_fonts");
        config.fonts.family = "NoSuchFamily".to_string();
        seed(&config.database.path, &[("ABC123", Some("Laptop A"))]).await;

        let summary = run(&config).await.unwrap();

        let barcode = config.output.scratch_dir.join("ABC123.png");
        assert!(barcode.is_file());
        assert_eq!(summary.barcodes().collect::<Vec<_>>(), vec![barcode.as_path()]);

        // Without the font the image is only as tall as the bars and margins.
        let bars = BarcodeOptions {
            write_text: false,
            ..config.barcode.clone()
        };
        let (_, height) = image::image_dimensions(&barcode).unwrap();
        assert_eq!(height, bars.mm_to_px(bars.height_mm()));

        assert!(matches!(
            summary.outcome,
            RunOutcome::WriteFailed(RenderError::FontLoad { .. })
        ));
        assert!(!config.output.document.exists());
    }
}
