//! # Document Assembler
//!
//! Lays out a [`DocumentGrid`] of label cells as a two-column PDF table.
//!
//! ## Element Tree
//! ```text
//! Document (A4, SimplePageDecorator with 10 mm margins)
//! └── PaddedElement (centres the table horizontally)
//!     └── TableLayout [90 mm | 90 mm], grey frame around every cell
//!         ├── row: [cell, cell]
//!         │        cell = PaddedElement (5 pt L/R, 10 pt T/B)
//!         │               └── LinearLayout::vertical
//!         │                   ├── Image (stretched to 50 x 25 mm, centred)
//!         │                   └── Paragraph (bold 12 pt, centred)
//!         └── row: [cell, Break]  ← odd count, empty right cell
//! ```
//!
//! genpdf has no vertical alignment inside table cells; every filled cell
//! has the same content box, so rows line up as long as labels fit on one
//! line.
//!
//! genpdf 0.2 only lets a line's color be set, so the grid is stroked at
//! the PDF default width.

use genpdf::elements::{Break, CellDecorator, Image, LinearLayout, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::render::Area;
use genpdf::style::{Color, Style};
use genpdf::{
    Alignment, Document, Element, Margins, Position, Scale, SimplePageDecorator, Size,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};
use labelsheet_core::{DocumentGrid, LabelCell, PageLayout};

/// Resolution the barcode images are placed at before scaling.
const PLACEMENT_DPI: f64 = 300.0;

/// Column weights are given to genpdf in tenths of a millimetre.
const WEIGHT_PER_MM: f64 = 10.0;

/// Default PDF title.
pub const DEFAULT_TITLE: &str = "Inventory barcodes";

/// Builds and writes the output PDF.
pub struct DocumentAssembler {
    layout: PageLayout,
    fonts: FontFamily<FontData>,
    title: String,
}

impl DocumentAssembler {
    pub fn new(layout: PageLayout, fonts: FontFamily<FontData>) -> Self {
        DocumentAssembler {
            layout,
            fonts,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Sets the PDF title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Builds the genpdf document for `grid` without writing it.
    ///
    /// Every barcode image is read here, so a missing or corrupt asset fails
    /// before the output file is touched.
    pub fn build(&self, grid: &DocumentGrid<LabelCell>) -> RenderResult<Document> {
        if grid.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let layout = &self.layout;
        let mut doc = Document::new(self.fonts.clone());
        doc.set_title(self.title.clone());
        doc.set_paper_size(Size::new(layout.page_width_mm, layout.page_height_mm));

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::all(layout.margin_mm));
        doc.set_page_decorator(decorator);

        let weight = (layout.column_width_mm * WEIGHT_PER_MM).round().max(1.0) as usize;
        let mut table = TableLayout::new(vec![weight, weight]);
        table.set_cell_decorator(GridCellDecorator::new(grid_color(layout)));

        for row in grid.rows() {
            let mut table_row = table.row();
            for slot in row {
                match slot {
                    Some(cell) => table_row.push_element(self.cell_element(cell)?),
                    None => table_row.push_element(Break::new(1)),
                }
            }
            table_row
                .push()
                .map_err(|e| RenderError::Layout(e.to_string()))?;
        }

        let inset = layout.table_inset_mm();
        doc.push(table.padded(Margins::trbl(0.0, inset, 0.0, inset)));

        debug!(
            rows = grid.len(),
            cells = grid.cell_count(),
            "Document built"
        );
        Ok(doc)
    }

    /// Builds the document and renders it to `path` in one call.
    ///
    /// ## Errors
    /// `RenderError::Write` if rendering or writing fails; whatever part of
    /// the file was written stays on disk.
    pub fn write(&self, grid: &DocumentGrid<LabelCell>, path: &Path) -> RenderResult<PathBuf> {
        let doc = self.build(grid)?;

        info!(path = %path.display(), "Writing PDF");

        doc.render_to_file(path).map_err(|e| RenderError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(path.to_path_buf())
    }

    /// Image plus label, padded.
    fn cell_element(&self, cell: &LabelCell) -> RenderResult<impl Element> {
        let layout = &self.layout;

        let image = Image::from_path(&cell.asset)
            .map_err(|e| RenderError::Asset {
                path: cell.asset.clone(),
                reason: e.to_string(),
            })?
            .with_alignment(Alignment::Center)
            .with_dpi(PLACEMENT_DPI)
            .with_scale(self.image_scale(&cell.asset)?);

        let label = Paragraph::new(cell.label.as_str())
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(layout.label_font_size))
            .padded(Margins::trbl(
                layout.label_space_before_pt * labelsheet_core::MM_PER_PT,
                0.0,
                layout.label_space_after_pt * labelsheet_core::MM_PER_PT,
                0.0,
            ));

        let pad_x = layout.cell_padding_x_mm();
        let pad_y = layout.cell_padding_y_mm();

        Ok(LinearLayout::vertical()
            .element(image)
            .element(label)
            .padded(Margins::trbl(pad_y, pad_x, pad_y, pad_x)))
    }

    /// Scale that stretches the image at `path` to the configured box.
    fn image_scale(&self, path: &Path) -> RenderResult<Scale> {
        let (width_px, height_px) =
            image::image_dimensions(path).map_err(|e| RenderError::Asset {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let (scale_x, scale_y) = stretch_factors(
            (width_px, height_px),
            (self.layout.image_width_mm, self.layout.image_height_mm),
        );
        Ok(Scale::new(scale_x, scale_y))
    }
}

/// Draws a closed frame in one color around every cell.
///
/// Neighbouring cells share an edge, so inner lines are stroked twice on
/// the same coordinates.
#[derive(Debug, Clone, Copy)]
struct GridCellDecorator {
    style: Style,
}

impl GridCellDecorator {
    fn new(color: Color) -> Self {
        GridCellDecorator {
            style: Style::new().with_color(color),
        }
    }
}

impl CellDecorator for GridCellDecorator {
    fn decorate_cell(
        &mut self,
        _column: usize,
        _row: usize,
        _has_more: bool,
        area: Area<'_>,
        _style: Style,
    ) {
        for [from, to] in cell_edges(area.size()) {
            area.draw_line(vec![from, to], self.style);
        }
    }
}

/// Top, right, bottom and left edge of a cell, relative to its top-left
/// corner.
fn cell_edges(size: Size) -> [[Position; 2]; 4] {
    let top_left = Position::default();
    let top_right = Position::new(size.width, 0);
    let bottom_right = Position::new(size.width, size.height);
    let bottom_left = Position::new(0, size.height);

    [
        [top_left, top_right],
        [top_right, bottom_right],
        [bottom_left, bottom_right],
        [top_left, bottom_left],
    ]
}

/// Factors that map an image of `px` pixels at [`PLACEMENT_DPI`] onto a box
/// of `target_mm`, ignoring aspect ratio.
fn stretch_factors(px: (u32, u32), target_mm: (f64, f64)) -> (f64, f64) {
    let natural = |p: u32| f64::from(p.max(1)) * 25.4 / PLACEMENT_DPI;
    (target_mm.0 / natural(px.0), target_mm.1 / natural(px.1))
}

fn grid_color(layout: &PageLayout) -> Color {
    let c = layout.grid_color;
    Color::Rgb(c.0, c.1, c.2)
}
