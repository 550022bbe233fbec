// SPDX-License-Identifier: MPL-2.0
//! Text watermark rendering with `ab_glyph`.

use crate::application::port::TextWatermark;
use crate::domain::geometry::Rect;
use ab_glyph::{point, Font, FontArc, FontRef, FontVec, Glyph, PxScale, ScaleFont};
use std::path::Path;
use tiny_skia::{Pixmap, PremultipliedColorU8};

/// DejaVu Sans, drawn when no font file is configured.
static BUNDLED_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

/// The font compiled into the crate.
pub(super) fn bundled_font() -> Option<FontArc> {
    match FontRef::try_from_slice(BUNDLED_FONT) {
        Ok(font) => Some(FontArc::new(font)),
        Err(e) => {
            log::error!("Bundled watermark font is unreadable: {e}");
            None
        }
    }
}

/// Loads the configured font file.
///
/// Returns `None` when the file is missing or not a font; the surface then
/// keeps drawing with the bundled font.
pub fn load_font(configured: Option<&Path>) -> Option<FontVec> {
    let path = configured?;
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Cannot read font {}: {e}; using the bundled font", path.display());
            return None;
        }
    };
    match FontVec::try_from_vec(bytes) {
        Ok(font) => {
            log::debug!("Using watermark font {}", path.display());
            Some(font)
        }
        Err(e) => {
            log::warn!("Ignoring font {}: {e}; using the bundled font", path.display());
            None
        }
    }
}

/// Draws `watermark` centered on its anchor, mapped into the output region.
pub(super) fn draw_text(
    pixmap: &mut Pixmap,
    font: &FontArc,
    watermark: &TextWatermark,
    region: Rect,
    scale: f32,
) {
    let px = watermark.font_size.value() * scale;
    if px <= 0.0 {
        return;
    }
    let scaled = font.as_scaled(PxScale::from(px));

    let mut glyphs: Vec<Glyph> = Vec::new();
    let mut caret = 0.0;
    let mut previous = None;
    for ch in watermark.text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(px, point(caret, 0.0)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    let height = scaled.ascent() - scaled.descent();
    let center_x = (watermark.center.x - region.left) * scale;
    let center_y = (watermark.center.y - region.top) * scale;
    let left = center_x - caret / 2.0;
    let baseline = center_y - height / 2.0 + scaled.ascent();

    let color = watermark.color;
    let alpha = f32::from(color.a) / 255.0 * watermark.opacity.value();
    #[allow(clippy::cast_possible_wrap)]
    let (width, rows) = (pixmap.width() as i32, pixmap.height() as i32);
    let pixels = pixmap.pixels_mut();

    for mut glyph in glyphs {
        glyph.position = point(glyph.position.x + left, baseline);
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let (x, y) = (bounds.min.x as i32 + gx as i32, bounds.min.y as i32 + gy as i32);
            if x < 0 || y < 0 || x >= width || y >= rows {
                return;
            }
            #[allow(clippy::cast_sign_loss)]
            let index = (y * width + x) as usize;
            pixels[index] = blend(pixels[index], color.r, color.g, color.b, coverage * alpha);
        });
    }
}

/// Source-over of a straight color with coverage `alpha` onto a premultiplied pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(dst: PremultipliedColorU8, r: u8, g: u8, b: u8, alpha: f32) -> PremultipliedColorU8 {
    let alpha = alpha.clamp(0.0, 1.0);
    let keep = 1.0 - alpha;
    let mix = |src: u8, dst: u8| f32::from(src) * alpha + f32::from(dst) * keep;

    let a = (255.0 * alpha + f32::from(dst.alpha()) * keep).round().clamp(0.0, 255.0) as u8;
    let channel = |value: f32| (value.round().clamp(0.0, 255.0) as u8).min(a);
    PremultipliedColorU8::from_rgba(
        channel(mix(r, dst.red())),
        channel(mix(g, dst.green())),
        channel(mix(b, dst.blue())),
        a,
    )
    .unwrap_or(dst)
}
