// SPDX-License-Identifier: MPL-2.0
//! Pixel filters and the ordered filter stack applied to the main image.
//!
//! Every primitive works on straight (non-premultiplied) RGBA8 pixels and
//! leaves alpha untouched, except [`FilterOp::ColorMatrix`] which has an
//! explicit alpha row.
//!
//! A [`FilterStack`] is never patched in place by the editor: it is rebuilt
//! from the edit state and applied to a pristine copy of the source image.

use crate::domain::editing::{AdjustmentKind, StylisticFilter};
use image_rs::imageops::colorops;
use image_rs::{Rgba, RgbaImage};

// =============================================================================
// Primitive operations
// =============================================================================

/// Luminosity weights used by [`FilterOp::Grayscale`].
const LUMINOSITY: [f32; 3] = [0.21, 0.72, 0.07];

/// Classic sepia tone matrix (rows are output R, G, B).
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// A single pixel transform.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    /// Additive brightness in [-1, 1] (fraction of full scale).
    Brightness(f32),
    /// Contrast in [-1, 1].
    Contrast(f32),
    /// Saturation in [-1, 1]; negative values pull toward gray.
    Saturation(f32),
    /// Luminosity grayscale.
    Grayscale,
    /// Classic sepia tone.
    Sepia,
    /// 4x5 row-major color matrix; the fifth column is an offset in [0, 1].
    ColorMatrix([f32; 20]),
    /// Per-channel gamma (R, G, B).
    Gamma([f32; 3]),
}

impl FilterOp {
    /// Returns true when the operation leaves every pixel unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        match self {
            FilterOp::Brightness(v) | FilterOp::Contrast(v) | FilterOp::Saturation(v) => {
                *v == 0.0
            }
            FilterOp::Gamma(g) => g.iter().all(|&c| c == 1.0),
            FilterOp::Grayscale | FilterOp::Sepia | FilterOp::ColorMatrix(_) => false,
        }
    }

    /// Applies the operation to every pixel of `image` in place.
    pub fn apply_in_place(&self, image: &mut RgbaImage) {
        if self.is_identity() {
            return;
        }
        match self {
            FilterOp::Brightness(value) => {
                #[allow(clippy::cast_possible_truncation)]
                let delta = (value.clamp(-1.0, 1.0) * 255.0).round() as i32;
                colorops::brighten_in_place(image, delta);
            }
            FilterOp::Contrast(value) => {
                let factor = contrast_factor(*value);
                map_rgb(image, |c| factor * (c - 128.0) + 128.0);
            }
            FilterOp::Saturation(value) => {
                let adjust = -value;
                for pixel in image.pixels_mut() {
                    let [r, g, b, a] = to_f32(*pixel);
                    let max = r.max(g).max(b);
                    let pull = |c: f32| if c == max { c } else { c + (max - c) * adjust };
                    *pixel = from_f32([pull(r), pull(g), pull(b), a]);
                }
            }
            FilterOp::Grayscale => {
                for pixel in image.pixels_mut() {
                    let [r, g, b, a] = to_f32(*pixel);
                    let y = r * LUMINOSITY[0] + g * LUMINOSITY[1] + b * LUMINOSITY[2];
                    *pixel = from_f32([y, y, y, a]);
                }
            }
            FilterOp::Sepia => {
                for pixel in image.pixels_mut() {
                    let [r, g, b, a] = to_f32(*pixel);
                    let row = |m: [f32; 3]| r * m[0] + g * m[1] + b * m[2];
                    *pixel = from_f32([row(SEPIA[0]), row(SEPIA[1]), row(SEPIA[2]), a]);
                }
            }
            FilterOp::ColorMatrix(m) => {
                for pixel in image.pixels_mut() {
                    let [r, g, b, a] = to_f32(*pixel);
                    let row = |i: usize| {
                        r * m[i] + g * m[i + 1] + b * m[i + 2] + a * m[i + 3] + m[i + 4] * 255.0
                    };
                    *pixel = from_f32([row(0), row(5), row(10), row(15)]);
                }
            }
            FilterOp::Gamma(gamma) => {
                let inverse = gamma.map(|g| if g > 0.0 { 1.0 / g } else { 1.0 });
                for pixel in image.pixels_mut() {
                    let [r, g, b, a] = to_f32(*pixel);
                    let curve = |c: f32, inv: f32| 255.0 * (c / 255.0).powf(inv);
                    *pixel = from_f32([
                        curve(r, inverse[0]),
                        curve(g, inverse[1]),
                        curve(b, inverse[2]),
                        a,
                    ]);
                }
            }
        }
    }
}

/// The 259-based contrast curve factor for `value` in [-1, 1].
///
/// Kept by hand: `imageops::contrast` uses a squared percentage, which
/// tops out at 4x where this curve reaches about 130x at +1.
fn contrast_factor(value: f32) -> f32 {
    let c = value.clamp(-1.0, 1.0) * 255.0;
    259.0 * (c + 255.0) / (255.0 * (259.0 - c))
}

fn to_f32(pixel: Rgba<u8>) -> [f32; 4] {
    pixel.0.map(f32::from)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn from_f32(channels: [f32; 4]) -> Rgba<u8> {
    Rgba(channels.map(|c| c.round().clamp(0.0, 255.0) as u8))
}

fn map_rgb(image: &mut RgbaImage, f: impl Fn(f32) -> f32) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = to_f32(*pixel);
        *pixel = from_f32([f(r), f(g), f(b), a]);
    }
}

// =============================================================================
// Filter stack
// =============================================================================

/// Which edit-state layer produced a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSlot {
    Adjustment(AdjustmentKind),
    Stylistic(StylisticFilter),
}

/// One filter in the stack, tagged with its origin layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterLayer {
    pub slot: FilterSlot,
    pub op: FilterOp,
}

/// Ordered list of filters applied to the main image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStack {
    layers: Vec<FilterLayer>,
}

impl FilterStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer at the end of the stack.
    pub fn push(&mut self, slot: FilterSlot, op: FilterOp) {
        self.layers.push(FilterLayer { slot, op });
    }

    #[must_use]
    pub fn layers(&self) -> &[FilterLayer] {
        &self.layers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers produced by `slot`.
    #[must_use]
    pub fn count_slot(&self, slot: FilterSlot) -> usize {
        self.layers.iter().filter(|layer| layer.slot == slot).count()
    }

    /// The operation of the adjustment layer for `kind`, if present.
    #[must_use]
    pub fn adjustment(&self, kind: AdjustmentKind) -> Option<&FilterOp> {
        self.layers
            .iter()
            .find(|layer| layer.slot == FilterSlot::Adjustment(kind))
            .map(|layer| &layer.op)
    }

    /// The stylistic filter contributing layers, if any.
    #[must_use]
    pub fn stylistic(&self) -> Option<StylisticFilter> {
        self.layers.iter().find_map(|layer| match layer.slot {
            FilterSlot::Stylistic(kind) => Some(kind),
            FilterSlot::Adjustment(_) => None,
        })
    }

    /// Applies every layer in order to a copy of `source`.
    #[must_use]
    pub fn apply(&self, source: &RgbaImage) -> RgbaImage {
        let mut output = source.clone();
        for layer in &self.layers {
            layer.op.apply_in_place(&mut output);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(r: u8, g: u8, b: u8) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, Rgba([r, g, b, 200]))
    }

    fn first(image: &RgbaImage) -> [u8; 4] {
        image.get_pixel(0, 0).0
    }

    #[test]
    fn brightness_is_additive_and_preserves_alpha() {
        let mut image = solid(100, 100, 100);
        FilterOp::Brightness(0.2).apply_in_place(&mut image);
        assert_eq!(first(&image), [151, 151, 151, 200]);

        let mut dark = solid(10, 10, 10);
        FilterOp::Brightness(-0.5).apply_in_place(&mut dark);
        assert_eq!(first(&dark), [0, 0, 0, 200]);
    }

    #[test]
    fn brightness_matches_imageops_brighten() {
        let source = RgbaImage::from_fn(16, 4, |x, y| Rgba([(x * 16) as u8, 250, (y * 60) as u8, 90]));
        let mut image = source.clone();
        FilterOp::Brightness(0.2).apply_in_place(&mut image);
        assert_eq!(image, image_rs::imageops::brighten(&source, 51));
        assert_eq!(image.get_pixel(0, 0).0[1], 255);
    }

    #[test]
    fn contrast_spreads_values_around_midpoint() {
        let mut image = solid(100, 128, 160);
        FilterOp::Contrast(0.5).apply_in_place(&mut image);
        let [r, g, b, _] = first(&image);
        assert!(r < 100);
        assert_eq!(g, 128);
        assert!(b > 160);
    }

    #[test]
    fn negative_saturation_pulls_toward_max_channel() {
        let mut image = solid(200, 100, 50);
        FilterOp::Saturation(-1.0).apply_in_place(&mut image);
        assert_eq!(first(&image), [200, 200, 200, 200]);
    }

    #[test]
    fn positive_saturation_pushes_away_from_max_channel() {
        let mut image = solid(200, 100, 50);
        FilterOp::Saturation(0.5).apply_in_place(&mut image);
        let [r, g, b, _] = first(&image);
        assert_eq!(r, 200);
        assert!(g < 100);
        assert!(b < 50);
    }

    #[test]
    fn grayscale_equalizes_channels() {
        let mut image = solid(255, 0, 0);
        FilterOp::Grayscale.apply_in_place(&mut image);
        assert_eq!(first(&image), [54, 54, 54, 200]);
    }

    #[test]
    fn sepia_uses_classic_coefficients() {
        let mut image = solid(100, 100, 100);
        FilterOp::Sepia.apply_in_place(&mut image);
        assert_eq!(first(&image), [135, 120, 94, 200]);
    }

    #[test]
    fn identity_color_matrix_keeps_pixels() {
        let identity = [
            1.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ];
        let mut image = solid(12, 34, 56);
        FilterOp::ColorMatrix(identity).apply_in_place(&mut image);
        assert_eq!(first(&image), [12, 34, 56, 200]);
    }

    #[test]
    fn gamma_above_one_brightens_midtones() {
        let mut image = solid(64, 128, 192);
        FilterOp::Gamma([2.0, 1.0, 1.0]).apply_in_place(&mut image);
        let [r, g, b, _] = first(&image);
        assert!(r > 64);
        assert_eq!((g, b), (128, 192));
    }

    #[test]
    fn empty_stack_returns_pixel_identical_copy() {
        let source = solid(1, 2, 3);
        assert_eq!(FilterStack::new().apply(&source), source);
    }

    #[test]
    fn stack_applies_layers_in_order() {
        let source = solid(100, 100, 100);
        let mut bright_then_gray = FilterStack::new();
        bright_then_gray.push(
            FilterSlot::Adjustment(AdjustmentKind::Brightness),
            FilterOp::Brightness(0.1),
        );
        bright_then_gray.push(
            FilterSlot::Stylistic(StylisticFilter::BlackAndWhite),
            FilterOp::Grayscale,
        );

        let output = bright_then_gray.apply(&source);
        assert_eq!(first(&output), [126, 126, 126, 200]);
        assert_eq!(first(&source), [100, 100, 100, 200]);
        assert_eq!(bright_then_gray.stylistic(), Some(StylisticFilter::BlackAndWhite));
        assert_eq!(
            bright_then_gray.adjustment(AdjustmentKind::Brightness),
            Some(&FilterOp::Brightness(0.1))
        );
        assert_eq!(bright_then_gray.adjustment(AdjustmentKind::Contrast), None);
    }
}
