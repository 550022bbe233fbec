// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for photo editing:
//! - [`AdjustmentPercent`]: Brightness/contrast/saturation level
//! - [`BorderWidth`], [`FontSize`], [`Opacity`]: Overlay styling values
//! - [`RotationAngle`]: Quarter-turn rotation of the main image
//! - [`StylisticFilter`], [`FrameStyle`], [`BorderStyle`]: Enumerated panel choices
//! - [`Color`]: Hex-addressable RGBA color

pub mod color;
pub mod newtypes;
pub mod styles;

pub use color::{Color, InvalidColor};
pub use newtypes::{
    adjustment_bounds, border_width_bounds, font_size_bounds, AdjustmentPercent, BorderWidth,
    FontSize, Opacity, RotationAngle,
};
pub use styles::{AdjustmentKind, BorderStyle, FrameStyle, StylisticFilter, UnknownStyle};
