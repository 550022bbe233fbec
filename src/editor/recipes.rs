// SPDX-License-Identifier: MPL-2.0
//! Fixed visual recipes for stylistic filters, frames and borders.
//!
//! The coefficients are presentation constants: the same choice always
//! produces the same result, nothing more is promised about them.

use crate::application::port::Shadow;
use crate::domain::editing::{BorderStyle, Color, FrameStyle, StylisticFilter};
use crate::domain::geometry::{Insets, Point};
use crate::media::filter::FilterOp;

// =============================================================================
// Stylistic filters
// =============================================================================

const CYBERPUNK_MATRIX: [f32; 20] = [
    1.2, 0.0, 0.2, 0.0, 0.05, //
    0.0, 0.8, 0.1, 0.0, 0.0, //
    0.2, 0.0, 1.3, 0.0, 0.1, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

const WARM_MATRIX: [f32; 20] = [
    1.1, 0.0, 0.0, 0.0, 0.05, //
    0.0, 1.0, 0.0, 0.0, 0.02, //
    0.0, 0.0, 0.9, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

const COOL_MATRIX: [f32; 20] = [
    0.9, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.02, //
    0.0, 0.0, 1.1, 0.0, 0.05, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

const BLACK_AND_WHITE: &[FilterOp] = &[FilterOp::Grayscale];
const SEPIA: &[FilterOp] = &[FilterOp::Sepia];
const CYBERPUNK: &[FilterOp] = &[
    FilterOp::Contrast(0.3),
    FilterOp::ColorMatrix(CYBERPUNK_MATRIX),
];
const VIVID: &[FilterOp] = &[FilterOp::Saturation(0.5), FilterOp::Contrast(0.2)];
const WARM: &[FilterOp] = &[FilterOp::ColorMatrix(WARM_MATRIX)];
const COOL: &[FilterOp] = &[FilterOp::ColorMatrix(COOL_MATRIX)];
const HDR: &[FilterOp] = &[
    FilterOp::Gamma([1.1, 1.1, 1.1]),
    FilterOp::Contrast(0.25),
    FilterOp::Brightness(0.05),
];

/// Primitive operations making up `filter`, in application order.
#[must_use]
pub fn stylistic_ops(filter: StylisticFilter) -> &'static [FilterOp] {
    match filter {
        StylisticFilter::None => &[],
        StylisticFilter::BlackAndWhite => BLACK_AND_WHITE,
        StylisticFilter::Sepia => SEPIA,
        StylisticFilter::Cyberpunk => CYBERPUNK,
        StylisticFilter::Vivid => VIVID,
        StylisticFilter::Warm => WARM,
        StylisticFilter::Cool => COOL,
        StylisticFilter::Hdr => HDR,
    }
}

// =============================================================================
// Frames
// =============================================================================

/// How a frame style dresses the image bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRecipe {
    /// Distance from the image bounds to the frame edge on each side.
    pub margin: Insets,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub shadow: Option<Shadow>,
}

const FRAME_SHADOW: Shadow = Shadow {
    color: Color::rgba(0, 0, 0, 77),
    offset: Point::new(5.0, 5.0),
};

const CLASSIC: FrameRecipe = FrameRecipe {
    margin: Insets::uniform(20.0),
    fill: Color::rgb(0x8B, 0x45, 0x13),
    stroke: Color::rgb(0x5C, 0x2E, 0x0B),
    stroke_width: 4.0,
    shadow: None,
};

const MODERN: FrameRecipe = FrameRecipe {
    margin: Insets::uniform(10.0),
    fill: Color::WHITE,
    stroke: Color::rgb(0x33, 0x33, 0x33),
    stroke_width: 2.0,
    shadow: Some(FRAME_SHADOW),
};

const VINTAGE: FrameRecipe = FrameRecipe {
    margin: Insets::uniform(25.0),
    fill: Color::rgb(0xD2, 0xB4, 0x8C),
    stroke: Color::rgb(0x8B, 0x73, 0x55),
    stroke_width: 6.0,
    shadow: None,
};

/// Deeper bottom margin for the caption strip.
const POLAROID: FrameRecipe = FrameRecipe {
    margin: Insets::new(15.0, 15.0, 15.0, 60.0),
    fill: Color::WHITE,
    stroke: Color::rgb(0xDD, 0xDD, 0xDD),
    stroke_width: 1.0,
    shadow: Some(FRAME_SHADOW),
};

const ORNATE: FrameRecipe = FrameRecipe {
    margin: Insets::uniform(30.0),
    fill: Color::rgb(0xDA, 0xA5, 0x20),
    stroke: Color::rgb(0x8B, 0x69, 0x14),
    stroke_width: 8.0,
    shadow: Some(FRAME_SHADOW),
};

#[must_use]
pub fn frame_recipe(style: FrameStyle) -> Option<FrameRecipe> {
    match style {
        FrameStyle::None => None,
        FrameStyle::Classic => Some(CLASSIC),
        FrameStyle::Modern => Some(MODERN),
        FrameStyle::Vintage => Some(VINTAGE),
        FrameStyle::Polaroid => Some(POLAROID),
        FrameStyle::Ornate => Some(ORNATE),
    }
}

// =============================================================================
// Borders
// =============================================================================

/// Corner radius of the rounded border style.
pub const ROUNDED_CORNER_RADIUS: f32 = 15.0;

/// Dash intervals for `style` at stroke `width`; `None` for a continuous line.
#[must_use]
pub fn border_dash(style: BorderStyle, width: f32) -> Option<[f32; 2]> {
    match style {
        BorderStyle::Dashed => Some([width * 4.0, width * 2.0]),
        BorderStyle::Dotted => Some([width, width]),
        BorderStyle::None | BorderStyle::Solid | BorderStyle::Double | BorderStyle::Rounded => None,
    }
}

#[must_use]
pub fn border_corner_radius(style: BorderStyle) -> f32 {
    if style == BorderStyle::Rounded {
        ROUNDED_CORNER_RADIUS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_but_none_has_operations() {
        for filter in StylisticFilter::ALL {
            assert_eq!(stylistic_ops(*filter).is_empty(), filter.is_none(), "{filter}");
        }
    }

    #[test]
    fn every_frame_but_none_has_a_recipe() {
        for style in FrameStyle::ALL {
            assert_eq!(frame_recipe(*style).is_none(), style.is_none(), "{style}");
        }
        let recipes: Vec<_> = FrameStyle::ALL.iter().filter_map(|s| frame_recipe(*s)).collect();
        for (i, a) in recipes.iter().enumerate() {
            for b in &recipes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn dashed_dashes_are_longer_than_dotted() {
        let dashed = border_dash(BorderStyle::Dashed, 10.0).expect("dashed");
        let dotted = border_dash(BorderStyle::Dotted, 10.0).expect("dotted");
        assert!(dashed[0] > dotted[0]);
        assert!(border_dash(BorderStyle::Solid, 10.0).is_none());
        assert_eq!(border_corner_radius(BorderStyle::Rounded), ROUNDED_CORNER_RADIUS);
        assert_eq!(border_corner_radius(BorderStyle::Double), 0.0);
    }
}
