//! Sheet export
//!
//! Turning a [`LayoutResult`] into files needs two collaborators: something
//! that renders a source page to a bitmap and something that writes a
//! finished sheet. Both are traits so the driver here stays independent of
//! the rasterizer and PDF writer in use.
//!
//! Sheets are exported one at a time, and the pages of a sheet are rendered
//! one at a time. A page that fails to render leaves its cell blank; every
//! other page keeps the cell the layout assigned to it.

use crate::constants::{CUSTOM_ORDER_FILE_PREFIX, PAIR_FILE_PREFIX, STANDARD_FILE_PREFIX};
use crate::layout::{LayoutMode, LayoutResult, PageRef, Rect, SheetGeometry};
use crate::options::ContactSheetOptions;
use crate::types::*;

/// An RGBA image of a rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba_data: Vec<u8>,
}

/// A rendered page and where it goes on the sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub page: PageRef,
    pub bounds: Rect,
    pub image: Bitmap,
}

/// Renders source pages to bitmaps
pub trait PageRenderer {
    /// Render `page` at `scale` times its size in points
    fn render_page(&mut self, page: PageRef, scale: f32) -> Result<Bitmap>;
}

/// Writes one finished output sheet
pub trait SheetWriter {
    /// `size` is in the units of the sheet geometry (points, or pixels in pair mode)
    fn write_sheet(&mut self, file_name: &str, size: (f32, f32), tiles: Vec<Tile>) -> Result<()>;
}

/// Summary of an export run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportReport {
    pub sheets_written: usize,
    pub pages_rendered: usize,
    pub pages_skipped: usize,
}

/// File name prefix for a layout mode
pub fn mode_prefix(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Standard => STANDARD_FILE_PREFIX,
        LayoutMode::CustomOrder => CUSTOM_ORDER_FILE_PREFIX,
        LayoutMode::Pair => PAIR_FILE_PREFIX,
    }
}

/// Name of the exported file for a sheet: `<prefix>-sheet-<n>-<original>`
///
/// `sheet_number` is 1-based.
pub fn sheet_file_name(mode: LayoutMode, sheet_number: usize, original_name: &str) -> String {
    format!("{}-sheet-{}-{}", mode_prefix(mode), sheet_number, original_name)
}

/// Geometry of the output sheet for a layout.
///
/// Mode and grid come from `layout`; `options` only supplies the paper,
/// spacing and pair sheet size.
pub fn sheet_geometry(layout: &LayoutResult, options: &ContactSheetOptions) -> SheetGeometry {
    match layout.mode {
        LayoutMode::Standard | LayoutMode::CustomOrder => {
            let (width, height) = options.paper_size.dimensions_pt(options.orientation);
            SheetGeometry::new(width, height, layout.rows, layout.columns, options.spacing)
        }
        LayoutMode::Pair => {
            let (width, height) = options.pair_sheet_px;
            SheetGeometry::pair(width as f32, height as f32)
        }
    }
}

/// Render and write every sheet of `layout`.
///
/// Returns [`ContactSheetError::NoPages`] for an empty layout. Writer errors
/// abort the export; render errors only skip the affected page.
pub fn export_layout(
    layout: &LayoutResult,
    options: &ContactSheetOptions,
    original_name: &str,
    renderer: &mut dyn PageRenderer,
    writer: &mut dyn SheetWriter,
) -> Result<ExportReport> {
    if layout.is_empty() {
        return Err(ContactSheetError::NoPages);
    }

    let geometry = sheet_geometry(layout, options);
    let scale = options.render_scale();
    let mut report = ExportReport::default();

    for sheet in &layout.sheets {
        let mut tiles = Vec::with_capacity(sheet.len());

        for placement in &sheet.placements {
            let image = match renderer.render_page(placement.page, scale) {
                Ok(image) => image,
                Err(e) => {
                    log::warn!(
                        "skipping page {} on sheet {}: {}",
                        placement.page.page_number,
                        sheet.index + 1,
                        e
                    );
                    report.pages_skipped += 1;
                    continue;
                }
            };

            let cell = geometry.cell_bounds(placement.position);
            let bounds = match layout.mode {
                LayoutMode::Pair => cell,
                LayoutMode::Standard | LayoutMode::CustomOrder => {
                    cell.fit_aspect(image.width as f32, image.height as f32)
                }
            };

            tiles.push(Tile {
                page: placement.page,
                bounds,
                image,
            });
            report.pages_rendered += 1;
        }

        let file_name = sheet_file_name(layout.mode, sheet.index + 1, original_name);
        writer.write_sheet(&file_name, (geometry.width, geometry.height), tiles)?;
        report.sheets_written += 1;
        log::debug!("wrote {}", file_name);
    }

    log::info!(
        "exported {} sheet(s): {} page(s) rendered, {} skipped",
        report.sheets_written,
        report.pages_rendered,
        report.pages_skipped
    );
    Ok(report)
}
