//! Region rendering: rasterize a page and cut question crops out of it.

use std::path::{Path, PathBuf};

use examsplit_core::{BBox, Side};
use image::{DynamicImage, GenericImageView};
use pdfium_render::prelude::*;

use crate::error::{ExtractError, Result};

/// Rasterize one page at the given zoom factor.
///
/// The page is rendered once per page, not once per question; crops are
/// taken from the shared raster.
pub fn render_page(page: &PdfPage<'_>, zoom: f32) -> Result<DynamicImage> {
    let config = PdfRenderConfig::new().scale_page_by_factor(zoom);
    let bitmap = page
        .render_with_config(&config)
        .map_err(|e| ExtractError::Pdfium(e.to_string()))?;
    Ok(bitmap.as_image())
}

/// Map a region's page-space rectangle onto the raster and crop it.
///
/// The raster's own dimensions define the point-to-pixel scale, so the
/// crop stays correct whatever zoom produced the image. The pixel
/// rectangle is clamped to the raster; a region degenerating to zero area
/// after clamping yields a 1x1 crop rather than a panic.
pub fn crop_region(
    raster: &DynamicImage,
    region: &BBox,
    page_width: f64,
    page_height: f64,
) -> DynamicImage {
    let scale_x = raster.width() as f64 / page_width;
    let scale_y = raster.height() as f64 / page_height;

    let x0 = ((region.x0 * scale_x).floor().max(0.0) as u32).min(raster.width() - 1);
    let y0 = ((region.top * scale_y).floor().max(0.0) as u32).min(raster.height() - 1);
    let x1 = ((region.x1 * scale_x).ceil() as u32).clamp(x0 + 1, raster.width());
    let y1 = ((region.bottom * scale_y).ceil() as u32).clamp(y0 + 1, raster.height());

    DynamicImage::ImageRgba8(image::imageops::crop_imm(raster, x0, y0, x1 - x0, y1 - y0).to_image())
}

/// Output filename for one question crop: question number, the physical
/// page it came from, and which column.
pub fn question_filename(number: u32, original_page: usize, side: Side) -> String {
    format!("soru_{number}_sayfa_{original_page}_{}.png", side.as_str())
}

/// Write a crop to `dir`, creating the directory if needed, and return
/// the written path.
pub fn save_crop(
    crop: &DynamicImage,
    dir: &Path,
    number: u32,
    original_page: usize,
    side: Side,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(question_filename(number, original_page, side));
    crop.save(&path)?;
    Ok(path)
}
