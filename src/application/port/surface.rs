// SPDX-License-Identifier: MPL-2.0
//! Work-surface port definition.
//!
//! The editor composes one main image plus at most one overlay per [`Role`]
//! on a fixed-size surface. The concrete rendering library stays behind the
//! [`Surface`] trait.

use crate::domain::editing::{BorderStyle, Color, FontSize, FrameStyle, Opacity, RotationAngle};
use crate::domain::geometry::{Point, Rect, Size};
use crate::media::filter::FilterStack;
use crate::media::image::LoadedBitmap;
use crate::media::placement::Placement;
use image_rs::RgbaImage;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// SurfaceError
// =============================================================================

/// Errors raised while rasterizing the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// No main image is loaded.
    NoImage,
    /// A drawn bitmap came from a source that denies pixel read-back.
    Tainted,
    /// The requested region has no area.
    EmptyRegion,
    /// The raster buffer could not be allocated.
    Allocation,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoImage => write!(f, "No image loaded"),
            SurfaceError::Tainted => {
                write!(f, "Surface is tainted by a cross-origin image and cannot be read")
            }
            SurfaceError::EmptyRegion => write!(f, "Region has no area"),
            SurfaceError::Allocation => write!(f, "Failed to allocate raster buffer"),
        }
    }
}

impl std::error::Error for SurfaceError {}

// =============================================================================
// Scene objects
// =============================================================================

/// Role of a scene object. Each role holds at most one object.
///
/// The ordering is the paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Frame,
    Main,
    Border,
    Watermark,
    CropRect,
}

impl Role {
    /// Guides are interaction affordances and never appear in rasterized output.
    #[must_use]
    pub fn is_guide(self) -> bool {
        self == Role::CropRect
    }
}

/// Drop shadow painted under a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset: Point,
}

/// Frame painted behind the main image.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOverlay {
    pub style: FrameStyle,
    pub rect: Rect,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub shadow: Option<Shadow>,
}

/// Stroked rectangle around the main image.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderOverlay {
    pub style: BorderStyle,
    /// Stroke centerline rectangle.
    pub rect: Rect,
    pub width: f32,
    pub color: Color,
    /// Dash intervals (on, off); `None` for a continuous stroke.
    pub dash: Option<[f32; 2]>,
    pub corner_radius: f32,
}

impl BorderOverlay {
    /// Outer extent of the stroke.
    #[must_use]
    pub fn outer_bounds(&self) -> Rect {
        self.rect.expand(self.width / 2.0, self.width / 2.0)
    }
}

/// Text watermark centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextWatermark {
    pub text: String,
    pub font_size: FontSize,
    pub color: Color,
    pub opacity: Opacity,
    pub center: Point,
}

impl TextWatermark {
    /// Average advance of a glyph relative to the font size.
    const ADVANCE_RATIO: f32 = 0.6;
    /// Line height relative to the font size.
    const LINE_RATIO: f32 = 1.2;

    /// Extent estimated from average glyph metrics.
    #[must_use]
    pub fn estimated_bounds(&self) -> Rect {
        let size = self.font_size.value();
        #[allow(clippy::cast_precision_loss)]
        let chars = self.text.chars().count() as f32;
        Rect::centered_at(
            self.center,
            Size::new(chars * size * Self::ADVANCE_RATIO, size * Self::LINE_RATIO),
        )
    }
}

/// Bitmap watermark drawn into a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageWatermark {
    pub bitmap: Arc<RgbaImage>,
    pub rect: Rect,
    pub opacity: Opacity,
    /// False when the watermark source denies pixel read-back.
    pub origin_clean: bool,
}

/// The single watermark object.
#[derive(Debug, Clone, PartialEq)]
pub enum Watermark {
    Text(TextWatermark),
    Image(ImageWatermark),
}

/// Pending crop rectangle shown while crop mode is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGuide {
    pub rect: Rect,
}

/// A non-photographic scene object.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Frame(FrameOverlay),
    Border(BorderOverlay),
    Watermark(Watermark),
    CropRect(CropGuide),
}

impl Overlay {
    /// The role slot this overlay occupies.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Overlay::Frame(_) => Role::Frame,
            Overlay::Border(_) => Role::Border,
            Overlay::Watermark(_) => Role::Watermark,
            Overlay::CropRect(_) => Role::CropRect,
        }
    }

    /// Painted extent in surface coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Overlay::Frame(frame) => {
                let base = frame.rect.expand(frame.stroke_width / 2.0, frame.stroke_width / 2.0);
                match frame.shadow {
                    Some(shadow) => {
                        let mut moved = base;
                        moved.left += shadow.offset.x;
                        moved.top += shadow.offset.y;
                        base.union(&moved)
                    }
                    None => base,
                }
            }
            Overlay::Border(border) => border.outer_bounds(),
            Overlay::Watermark(Watermark::Text(text)) => text.estimated_bounds(),
            Overlay::Watermark(Watermark::Image(image)) => image.rect,
            Overlay::CropRect(guide) => guide.rect,
        }
    }

    /// False when drawing this overlay taints the surface.
    #[must_use]
    pub fn is_origin_clean(&self) -> bool {
        match self {
            Overlay::Watermark(Watermark::Image(image)) => image.origin_clean,
            _ => true,
        }
    }
}

// =============================================================================
// Surface Trait
// =============================================================================

/// Port for the mutable 2D scene the editor composes into.
///
/// The surface exclusively belongs to one editor instance. Every mutation
/// replaces whole objects; there is no incremental patching.
pub trait Surface {
    /// Logical size of the work surface.
    fn size(&self) -> Size;

    /// Installs a new main image, dropping the previous one and every overlay.
    fn load_image(&mut self, bitmap: LoadedBitmap, placement: Placement);

    /// Removes the main image and every overlay.
    fn clear(&mut self);

    /// Returns true when a main image is installed.
    fn has_image(&self) -> bool;

    /// Bounding box of the placed (and rotated) main image.
    fn main_bounds(&self) -> Option<Rect>;

    /// Current rotation of the main image.
    fn rotation(&self) -> RotationAngle;

    /// Rotates the main image around its own center, shrinking it when the
    /// rotated image would leave the surface. Returns false without an image.
    fn set_rotation(&mut self, angle: RotationAngle) -> bool;

    /// Replaces the main image's filter stack wholesale. Returns false without an image.
    fn apply_filter_stack(&mut self, stack: FilterStack) -> bool;

    /// The main image's current filter stack.
    fn filter_stack(&self) -> Option<&FilterStack>;

    /// Inserts an overlay into its role slot, returning the object it replaced.
    fn add_overlay(&mut self, overlay: Overlay) -> Option<Overlay>;

    /// Removes the overlay in `role`.
    fn remove_overlay(&mut self, role: Role) -> Option<Overlay>;

    /// The overlay currently in `role`.
    fn overlay(&self, role: Role) -> Option<&Overlay>;

    /// All overlays in paint order.
    fn overlays(&self) -> Vec<&Overlay>;

    /// Output pixels per surface unit that reproduce the main image at its
    /// native resolution.
    fn export_scale(&self) -> Option<f32>;

    /// Rasterizes `region` (surface coordinates) at `scale` output pixels per unit.
    ///
    /// Guides are never drawn.
    ///
    /// # Errors
    ///
    /// - [`SurfaceError::NoImage`] when no main image is loaded
    /// - [`SurfaceError::Tainted`] when a drawn bitmap denies read-back
    /// - [`SurfaceError::EmptyRegion`] when the region has no area
    fn rasterize(&self, region: Rect, scale: f32) -> Result<RgbaImage, SurfaceError>;

    /// Returns true when the slot for `role` is occupied.
    fn has(&self, role: Role) -> bool {
        match role {
            Role::Main => self.has_image(),
            other => self.overlay(other).is_some(),
        }
    }

    /// Number of overlays on the surface.
    fn overlay_count(&self) -> usize {
        self.overlays().len()
    }

    /// Union of the main image and every non-guide overlay, clipped to the surface.
    fn content_bounds(&self) -> Option<Rect> {
        let main = self.main_bounds()?;
        let union = self
            .overlays()
            .into_iter()
            .filter(|overlay| !overlay.role().is_guide())
            .fold(main, |acc, overlay| acc.union(&overlay.bounds()));
        Rect::from_size(self.size()).intersect(&union)
    }
}
