// SPDX-License-Identifier: MPL-2.0
//! `tiny-skia` implementation of the work surface.
//!
//! The scene is one optional main image plus a role-keyed overlay map.
//! Paint order is frame, main image, border, watermark and, in previews
//! only, the crop guide.

mod text;

pub use text::load_font;

use crate::application::port::{
    BorderOverlay, FrameOverlay, ImageWatermark, Overlay, Role, Surface, SurfaceError, Watermark,
};
use crate::domain::editing::{BorderStyle, Color, RotationAngle};
use crate::domain::geometry::{Rect, Size};
use crate::media::filter::FilterStack;
use crate::media::image::LoadedBitmap;
use crate::media::image_transform::{rotate, rotated_size};
use crate::media::placement::Placement;
use ab_glyph::{FontArc, FontVec};
use image_rs::RgbaImage;
use std::collections::BTreeMap;
use tiny_skia::{
    BlendMode, ColorU8, FillRule, FilterQuality, Paint, Path, PathBuilder, Pixmap, PixmapPaint,
    Stroke, StrokeDash, Transform,
};

/// Composite scales closer to 1 than this are drawn as exact pixel copies.
const UNIT_SCALE_EPSILON: f32 = 1e-4;

/// Crop guide stroke.
const GUIDE_STROKE: Color = Color::rgba(0, 0, 0, 204);
const GUIDE_FILL: Color = Color::rgba(255, 255, 255, 51);
const GUIDE_DASH: [f32; 2] = [5.0, 5.0];

/// Placed main image and its derived pixels.
struct MainImage {
    source: LoadedBitmap,
    placement: Placement,
    rotation: RotationAngle,
    filters: FilterStack,
    /// Source with filters and rotation applied, premultiplied.
    rendered: Option<Pixmap>,
}

impl MainImage {
    fn new(source: LoadedBitmap, placement: Placement) -> Self {
        let mut main = Self {
            source,
            placement,
            rotation: RotationAngle::ZERO,
            filters: FilterStack::new(),
            rendered: None,
        };
        main.render();
        main
    }

    /// Rebuilds the displayed pixels from the pristine source.
    fn render(&mut self) {
        let filtered = self.filters.apply(&self.source.pixels);
        self.rendered = to_pixmap(&rotate(&filtered, self.rotation));
    }

    /// Placement shrunk so the rotated image still fits on the surface.
    ///
    /// Derived from the load-time placement each time, so a full turn of
    /// rotations restores the original scale.
    fn effective_placement(&self, surface: Size) -> Placement {
        let rotated = rotated_size(self.source.size(), self.rotation);
        let placed = self.placement.bounds(rotated);
        let shrink = (surface.width / placed.width)
            .min(surface.height / placed.height)
            .min(1.0);
        Placement {
            scale: self.placement.scale * shrink,
            center: self.placement.center,
        }
    }

    fn bounds(&self, surface: Size) -> Rect {
        self.effective_placement(surface)
            .bounds(rotated_size(self.source.size(), self.rotation))
    }
}

/// Work surface rendered with `tiny-skia`.
pub struct SkiaSurface {
    size: Size,
    background: Color,
    main: Option<MainImage>,
    overlays: BTreeMap<Role, Overlay>,
    font: Option<FontArc>,
}

impl SkiaSurface {
    /// Creates an empty surface that draws text with the bundled font.
    #[must_use]
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            size,
            background,
            main: None,
            overlays: BTreeMap::new(),
            font: text::bundled_font(),
        }
    }

    /// Draws text watermarks with `font` instead of the bundled font.
    #[must_use]
    pub fn with_font(mut self, font: Option<FontVec>) -> Self {
        if let Some(font) = font {
            self.font = Some(FontArc::from(font));
        }
        self
    }

    #[must_use]
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Renders the whole surface as displayed: background, content and guides.
    ///
    /// Display is allowed for tainted content; only read-back for export is not.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Allocation`] if the raster buffer cannot be created.
    pub fn render_preview(&self) -> Result<RgbaImage, SurfaceError> {
        let mut pixmap = new_pixmap(self.size.width, self.size.height)?;
        pixmap.fill(skia_color(self.background, 1.0));
        self.paint(&mut pixmap, Rect::from_size(self.size), 1.0, true);
        from_pixmap(&pixmap)
    }

    fn paint(&self, pixmap: &mut Pixmap, region: Rect, scale: f32, guides: bool) {
        let transform = Transform::from_translate(-region.left, -region.top).post_scale(scale, scale);

        if let Some(Overlay::Frame(frame)) = self.overlays.get(&Role::Frame) {
            draw_frame(pixmap, frame, transform);
        }
        if let Some(main) = &self.main {
            draw_main(pixmap, main, self.size, region, scale);
        }
        for overlay in self.overlays.values() {
            match overlay {
                Overlay::Frame(_) => {}
                Overlay::Border(border) => draw_border(pixmap, border, transform),
                Overlay::Watermark(Watermark::Text(watermark)) => {
                    if let Some(font) = &self.font {
                        text::draw_text(pixmap, font, watermark, region, scale);
                    }
                }
                Overlay::Watermark(Watermark::Image(watermark)) => {
                    draw_image_watermark(pixmap, watermark, transform);
                }
                Overlay::CropRect(guide) => {
                    if guides {
                        draw_guide(pixmap, guide.rect, transform);
                    }
                }
            }
        }
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn load_image(&mut self, bitmap: LoadedBitmap, placement: Placement) {
        self.overlays.clear();
        self.main = Some(MainImage::new(bitmap, placement));
    }

    fn clear(&mut self) {
        self.overlays.clear();
        self.main = None;
    }

    fn has_image(&self) -> bool {
        self.main.is_some()
    }

    fn main_bounds(&self) -> Option<Rect> {
        self.main.as_ref().map(|main| main.bounds(self.size))
    }

    fn rotation(&self) -> RotationAngle {
        self.main
            .as_ref()
            .map_or(RotationAngle::ZERO, |main| main.rotation)
    }

    fn set_rotation(&mut self, angle: RotationAngle) -> bool {
        let Some(main) = &mut self.main else {
            return false;
        };
        if main.rotation != angle {
            main.rotation = angle;
            main.render();
        }
        true
    }

    fn apply_filter_stack(&mut self, stack: FilterStack) -> bool {
        let Some(main) = &mut self.main else {
            return false;
        };
        if main.filters != stack {
            main.filters = stack;
            main.render();
        }
        true
    }

    fn filter_stack(&self) -> Option<&FilterStack> {
        self.main.as_ref().map(|main| &main.filters)
    }

    fn add_overlay(&mut self, overlay: Overlay) -> Option<Overlay> {
        self.overlays.insert(overlay.role(), overlay)
    }

    fn remove_overlay(&mut self, role: Role) -> Option<Overlay> {
        self.overlays.remove(&role)
    }

    fn overlay(&self, role: Role) -> Option<&Overlay> {
        self.overlays.get(&role)
    }

    fn overlays(&self) -> Vec<&Overlay> {
        self.overlays.values().collect()
    }

    fn export_scale(&self) -> Option<f32> {
        self.main
            .as_ref()
            .map(|main| main.effective_placement(self.size).native_scale())
    }

    fn rasterize(&self, region: Rect, scale: f32) -> Result<RgbaImage, SurfaceError> {
        let main = self.main.as_ref().ok_or(SurfaceError::NoImage)?;
        if !main.source.origin_clean || self.overlays.values().any(|o| !o.is_origin_clean()) {
            return Err(SurfaceError::Tainted);
        }
        if region.is_empty() || !(scale > 0.0) {
            return Err(SurfaceError::EmptyRegion);
        }

        let mut pixmap = new_pixmap(region.width * scale, region.height * scale)?;
        pixmap.fill(skia_color(self.background, 1.0));
        self.paint(&mut pixmap, region, scale, false);
        from_pixmap(&pixmap)
    }
}

// =============================================================================
// Drawing
// =============================================================================

fn draw_main(pixmap: &mut Pixmap, main: &MainImage, surface: Size, region: Rect, scale: f32) {
    let Some(rendered) = &main.rendered else {
        return;
    };
    let placement = main.effective_placement(surface);
    let bounds = placement.bounds(rotated_size(main.source.size(), main.rotation));
    let composite = placement.scale * scale;
    let tx = (bounds.left - region.left) * scale;
    let ty = (bounds.top - region.top) * scale;

    let (transform, quality) = if (composite - 1.0).abs() < UNIT_SCALE_EPSILON {
        (Transform::from_translate(tx.round(), ty.round()), FilterQuality::Nearest)
    } else {
        (
            Transform::from_row(composite, 0.0, 0.0, composite, tx, ty),
            FilterQuality::Bicubic,
        )
    };
    let paint = PixmapPaint {
        opacity: 1.0,
        blend_mode: BlendMode::SourceOver,
        quality,
    };
    pixmap.draw_pixmap(0, 0, rendered.as_ref(), &paint, transform, None);
}

fn draw_frame(pixmap: &mut Pixmap, frame: &FrameOverlay, transform: Transform) {
    if let Some(shadow) = frame.shadow {
        let mut moved = frame.rect;
        moved.left += shadow.offset.x;
        moved.top += shadow.offset.y;
        fill_rect(pixmap, moved, shadow.color, transform);
    }
    fill_rect(pixmap, frame.rect, frame.fill, transform);
    if let Some(path) = rect_path(frame.rect, 0.0) {
        let stroke = Stroke {
            width: frame.stroke_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &solid_paint(frame.stroke, 1.0), &stroke, transform, None);
    }
}

fn draw_border(pixmap: &mut Pixmap, border: &BorderOverlay, transform: Transform) {
    let paint = solid_paint(border.color, 1.0);
    if border.style == BorderStyle::Double {
        let line = border.width / 3.0;
        let stroke = Stroke {
            width: line,
            ..Stroke::default()
        };
        for rect in [border.rect.expand(line, line), border.rect.expand(-line, -line)] {
            if let Some(path) = rect_path(rect, 0.0) {
                pixmap.stroke_path(&path, &paint, &stroke, transform, None);
            }
        }
        return;
    }

    let Some(path) = rect_path(border.rect, border.corner_radius) else {
        return;
    };
    let stroke = Stroke {
        width: border.width,
        dash: border
            .dash
            .and_then(|[on, off]| StrokeDash::new(vec![on, off], 0.0)),
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

fn draw_image_watermark(pixmap: &mut Pixmap, watermark: &ImageWatermark, transform: Transform) {
    let Some(source) = to_pixmap(&watermark.bitmap) else {
        return;
    };
    if watermark.rect.is_empty() {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let (sx, sy) = (
        watermark.rect.width / source.width() as f32,
        watermark.rect.height / source.height() as f32,
    );
    let placed = transform.pre_concat(Transform::from_row(
        sx,
        0.0,
        0.0,
        sy,
        watermark.rect.left,
        watermark.rect.top,
    ));
    let paint = PixmapPaint {
        opacity: watermark.opacity.value(),
        blend_mode: BlendMode::SourceOver,
        quality: FilterQuality::Bilinear,
    };
    pixmap.draw_pixmap(0, 0, source.as_ref(), &paint, placed, None);
}

fn draw_guide(pixmap: &mut Pixmap, rect: Rect, transform: Transform) {
    fill_rect(pixmap, rect, GUIDE_FILL, transform);
    if let Some(path) = rect_path(rect, 0.0) {
        let stroke = Stroke {
            width: 1.0,
            dash: StrokeDash::new(GUIDE_DASH.to_vec(), 0.0),
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &solid_paint(GUIDE_STROKE, 1.0), &stroke, transform, None);
    }
}

fn fill_rect(pixmap: &mut Pixmap, rect: Rect, color: Color, transform: Transform) {
    if let Some(path) = rect_path(rect, 0.0) {
        pixmap.fill_path(&path, &solid_paint(color, 1.0), FillRule::Winding, transform, None);
    }
}

/// Rectangle path, with quadratic corners when `radius` is positive.
fn rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    if r <= 0.0 {
        let skia = tiny_skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height)?;
        return Some(PathBuilder::from_rect(skia));
    }

    let (left, top, right, bottom) = (rect.left, rect.top, rect.right(), rect.bottom());
    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.quad_to(right, top, right, top + r);
    pb.line_to(right, bottom - r);
    pb.quad_to(right, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.quad_to(left, bottom, left, bottom - r);
    pb.line_to(left, top + r);
    pb.quad_to(left, top, left + r, top);
    pb.close();
    pb.finish()
}

fn solid_paint(color: Color, opacity: f32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color, opacity));
    paint.anti_alias = true;
    paint
}

fn skia_color(color: Color, opacity: f32) -> tiny_skia::Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let alpha = (f32::from(color.a) * opacity.clamp(0.0, 1.0)).round() as u8;
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, alpha)
}

// =============================================================================
// Pixel conversion
// =============================================================================

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn new_pixmap(width: f32, height: f32) -> Result<Pixmap, SurfaceError> {
    let (width, height) = (width.round(), height.round());
    if width < 1.0 || height < 1.0 {
        return Err(SurfaceError::EmptyRegion);
    }
    Pixmap::new(width as u32, height as u32).ok_or(SurfaceError::Allocation)
}

/// Converts straight RGBA8 pixels to a premultiplied pixmap.
fn to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Converts a premultiplied pixmap back to straight RGBA8.
fn from_pixmap(pixmap: &Pixmap) -> Result<RgbaImage, SurfaceError> {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(SurfaceError::Allocation)
}
