// SPDX-License-Identifier: MPL-2.0
//! Fit-and-center placement of the main image on the work surface.

use crate::domain::geometry::{Point, Rect, Size};

pub use crate::config::DEFAULT_FIT_RATIO;

/// Uniform scale plus the center point of the placed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Surface units per source pixel.
    pub scale: f32,
    /// Center of the image on the surface.
    pub center: Point,
}

impl Placement {
    /// Scales `image` so it fits within `ratio` of the surface's limiting
    /// dimension and centers it on both axes.
    #[must_use]
    pub fn fit(image: Size, surface: Size, ratio: f32) -> Self {
        let center = Point::new(surface.width / 2.0, surface.height / 2.0);
        if image.is_empty() || surface.is_empty() {
            return Self { scale: 1.0, center };
        }
        let scale = (ratio * surface.width / image.width).min(ratio * surface.height / image.height);
        Self { scale, center }
    }

    /// Rectangle covered by an image of `size` (already rotated, if needed).
    #[must_use]
    pub fn bounds(&self, size: Size) -> Rect {
        Rect::centered_at(
            self.center,
            Size::new(size.width * self.scale, size.height * self.scale),
        )
    }

    /// Output pixels per surface unit that reproduce the source resolution.
    #[must_use]
    pub fn native_scale(&self) -> f32 {
        if self.scale > 0.0 {
            1.0 / self.scale
        } else {
            1.0
        }
    }
}
