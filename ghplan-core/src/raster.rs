//! Text rasterization: glyph layout and coverage drawing.

use crate::error::{PlanError, PlanResult};
use ab_glyph::{point, Font, Glyph, PxScale, ScaleFont};
use image::GrayImage;

/// Pixel height used when laying out glyphs. The bitmap is cropped and
/// downsampled to 7 rows afterwards, so this only needs to be large enough
/// to keep thin strokes from aliasing away.
const RASTER_PX: f32 = 48.0;

/// Render `text` into a grayscale coverage bitmap, cropped to the inked
/// bounding box. Deterministic for identical (text, font) inputs.
pub fn rasterize<F: Font>(text: &str, font: &F) -> PlanResult<GrayImage> {
    let scale = PxScale::from(RASTER_PX);
    let scaled = font.as_scaled(scale);

    let ascent = scaled.ascent();
    let line_height = (scaled.ascent() - scaled.descent()).ceil().max(1.0);

    // Lay out a single line with kerning and horizontal advances.
    let mut glyphs: Vec<Glyph> = Vec::new();
    let mut caret = 0.0f32;
    let mut prev = None;
    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        let id = scaled.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, ascent)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    let width = caret.ceil().max(1.0) as u32;
    let mut bitmap = GrayImage::new(width, line_height as u32);

    for glyph in glyphs {
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px >= 0
                    && py >= 0
                    && (px as u32) < bitmap.width()
                    && (py as u32) < bitmap.height()
                {
                    let pixel = bitmap.get_pixel_mut(px as u32, py as u32);
                    // Overlapping glyphs keep the darker coverage.
                    pixel.0[0] = pixel.0[0].max((coverage * 255.0) as u8);
                }
            });
        }
    }

    crop_to_ink(&bitmap).ok_or(PlanError::EmptyRaster)
}

/// Crop away fully blank rows and columns around the inked region.
/// Returns `None` when the bitmap has no ink at all.
fn crop_to_ink(bitmap: &GrayImage) -> Option<GrayImage> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;

    for (x, y, pixel) in bitmap.enumerate_pixels() {
        if pixel.0[0] > 0 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if min_x == u32::MAX {
        return None;
    }

    let cropped = image::imageops::crop_imm(
        bitmap,
        min_x,
        min_y,
        max_x - min_x + 1,
        max_y - min_y + 1,
    );
    Some(cropped.to_image())
}
