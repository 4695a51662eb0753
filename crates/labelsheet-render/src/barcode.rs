//! # Barcode Generator
//!
//! Encodes a serial as Code-128 and writes it as a PNG with the serial
//! printed under the bars.
//!
//! ## Pipeline
//! ```text
//!   "SN-12/34"
//!       │ check_charset      printable ASCII only (Code-128 set B)
//!       ▼
//!   barcoders::Code128       "Ɓ" + serial  →  [1,1,0,1,0,0,1,...]
//!       │
//!       ▼
//!   rasterize                runs of 1s → black rects, serial centred below
//!       │
//!       ▼
//!   <out_dir>/SN_12_34.png
//! ```

use ab_glyph::{FontVec, PxScale};
use barcoders::sym::code128::Code128;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use labelsheet_core::{asset_file_name, BarcodeOptions};

/// barcoders' marker selecting Code-128 character set B.
const CHARSET_B: char = 'Ɓ';

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Renders Code-128 barcode images.
pub struct BarcodeRenderer {
    options: BarcodeOptions,
    font: Option<FontVec>,
}

impl std::fmt::Debug for BarcodeRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarcodeRenderer")
            .field("options", &self.options)
            .field("font", &self.font.is_some())
            .finish()
    }
}

impl BarcodeRenderer {
    /// Creates a renderer.
    ///
    /// ## Errors
    /// `RenderError::FontMissing` if `options.write_text` is set and no font
    /// is given.
    pub fn new(options: BarcodeOptions, font: Option<FontVec>) -> RenderResult<Self> {
        if options.write_text && font.is_none() {
            return Err(RenderError::FontMissing);
        }
        Ok(BarcodeRenderer { options, font })
    }

    pub fn options(&self) -> &BarcodeOptions {
        &self.options
    }

    /// Writes the barcode for `serial` into `out_dir` and returns its path.
    ///
    /// The file name is the sanitized serial plus `.png`. Nothing is written
    /// when encoding fails.
    pub fn render(&self, serial: &str, out_dir: &Path) -> RenderResult<PathBuf> {
        let modules = encode(serial)?;
        let image = self.rasterize(serial, &modules);

        let path = out_dir.join(asset_file_name(serial));
        image.save_with_format(&path, ImageFormat::Png)?;

        debug!(
            serial = %serial,
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Barcode written"
        );
        Ok(path)
    }

    /// Draws the bars (and text, if enabled) for an encoded symbol.
    pub fn rasterize(&self, serial: &str, modules: &[u8]) -> RgbImage {
        let o = &self.options;
        let width = o.mm_to_px(o.width_mm(modules.len())).max(1);
        let height = o.mm_to_px(o.height_mm()).max(1);
        let mut image = RgbImage::from_pixel(width, height, WHITE);

        let bar_top = o.mm_to_px(o.margin_mm);
        let bar_height = o.mm_to_px(o.module_height_mm).max(1);
        let module_x = |i: usize| o.mm_to_px(o.quiet_zone_mm + i as f64 * o.module_width_mm);

        for (start, len) in bar_runs(modules) {
            let x0 = module_x(start);
            let x1 = module_x(start + len).max(x0 + 1);
            draw_filled_rect_mut(
                &mut image,
                Rect::at(x0 as i32, bar_top as i32).of_size(x1 - x0, bar_height),
                BLACK,
            );
        }

        if let (true, Some(font)) = (o.write_text, self.font.as_ref()) {
            let scale = PxScale::from(o.font_px());
            let (text_width, _) = text_size(scale, font, serial);
            let x = width.saturating_sub(text_width) / 2;
            let y = o.mm_to_px(o.margin_mm + o.module_height_mm + o.text_distance_mm);
            draw_text_mut(&mut image, BLACK, x as i32, y as i32, scale, font, serial);
        }

        image
    }
}

/// Encodes `serial` into Code-128 modules (1 = bar, 0 = space).
///
/// Uses character set B, which covers printable ASCII. Anything else is
/// rejected here rather than handed to barcoders, whose set-switch markers
/// are themselves non-ASCII characters.
pub fn encode(serial: &str) -> RenderResult<Vec<u8>> {
    check_charset(serial)?;

    let symbol = Code128::new(format!("{CHARSET_B}{serial}"))
        .map_err(|e| RenderError::encode(serial, e.to_string()))?;

    Ok(symbol.encode())
}

fn check_charset(serial: &str) -> RenderResult<()> {
    if serial.is_empty() {
        return Err(RenderError::encode(serial, "serial is empty"));
    }

    match serial.chars().find(|c| !(' '..='~').contains(c)) {
        Some(c) => Err(RenderError::encode(
            serial,
            format!("character {c:?} is not in Code-128 set B"),
        )),
        None => Ok(()),
    }
}

/// Contiguous runs of bar modules as (start, length).
fn bar_runs(modules: &[u8]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, &m) in modules.iter().enumerate() {
        match (m == 1, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i - s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, modules.len() - s));
    }

    runs
}
