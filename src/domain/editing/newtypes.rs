// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Adjustment Bounds
// =============================================================================

/// Adjustment bounds (-100 to +100).
pub mod adjustment_bounds {
    /// Minimum adjustment value.
    pub const MIN: i32 = -100;
    /// Maximum adjustment value.
    pub const MAX: i32 = 100;
    /// Default (neutral) adjustment value.
    pub const DEFAULT: i32 = 0;
}

// =============================================================================
// AdjustmentPercent
// =============================================================================

/// Signed brightness/contrast/saturation level, guaranteed to be within -100..=+100.
///
/// A value of 0 means "no adjustment filter present in the stack".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjustmentPercent(i32);

impl AdjustmentPercent {
    /// Creates a new adjustment value, clamping to the valid range.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(adjustment_bounds::MIN, adjustment_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns the value as a unit fraction (-1.0 to +1.0).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        // Range is bounded to +-100, exact in f32
        #[allow(clippy::cast_precision_loss)]
        let value = self.0 as f32;
        value / 100.0
    }

    /// Returns whether this represents no adjustment (value is 0).
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == adjustment_bounds::DEFAULT
    }

    /// Returns whether the adjustment is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= adjustment_bounds::MIN
    }

    /// Returns whether the adjustment is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= adjustment_bounds::MAX
    }
}

// =============================================================================
// Border Width
// =============================================================================

/// Border stroke width bounds (work-surface units).
pub mod border_width_bounds {
    /// Minimum stroke width.
    pub const MIN: f32 = 1.0;
    /// Maximum stroke width.
    pub const MAX: f32 = 100.0;
    /// Default stroke width.
    pub const DEFAULT: f32 = 10.0;
}

/// Border stroke width, clamped to 1..=100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderWidth(f32);

impl BorderWidth {
    /// Creates a new border width, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(width: f32) -> Self {
        if !width.is_finite() {
            return Self::default();
        }
        Self(width.clamp(border_width_bounds::MIN, border_width_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Half the stroke width: how far the stroke extends past the image bounds.
    #[must_use]
    pub fn half(self) -> f32 {
        self.0 / 2.0
    }
}

impl Default for BorderWidth {
    fn default() -> Self {
        Self(border_width_bounds::DEFAULT)
    }
}

// =============================================================================
// Font Size
// =============================================================================

/// Watermark font size bounds (work-surface units).
pub mod font_size_bounds {
    pub const MIN: f32 = 6.0;
    pub const MAX: f32 = 200.0;
    pub const DEFAULT: f32 = 20.0;
}

/// Watermark text size, clamped to 6..=200.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize(f32);

impl FontSize {
    #[must_use]
    pub fn new(size: f32) -> Self {
        if !size.is_finite() {
            return Self::default();
        }
        Self(size.clamp(font_size_bounds::MIN, font_size_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_size_bounds::DEFAULT)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Default watermark opacity.
pub const DEFAULT_OPACITY: f32 = 0.5;

/// Opacity in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the opacity as an 8-bit alpha value.
    #[must_use]
    pub fn as_alpha(self) -> u8 {
        // Clamped to 0..=1 at construction, so the product fits in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let alpha = (self.0 * 255.0).round() as u8;
        alpha
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(DEFAULT_OPACITY)
    }
}

// =============================================================================
// RotationAngle
// =============================================================================

/// Rotation angle of the main image in 90° increments.
///
/// Always one of: 0°, 90°, 180°, or 270°. Repeated rotations accumulate
/// modulo 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, normalizing to valid 90° increments.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Rotates 90° clockwise.
    #[must_use]
    pub fn rotate_right(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    /// Rotates 90° counter-clockwise.
    #[must_use]
    pub fn rotate_left(self) -> Self {
        Self((self.0 + 270) % 360)
    }

    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }

    /// Returns true if width and height swap when rendering (90° and 270°).
    #[must_use]
    pub fn is_quarter_turn(self) -> bool {
        self.0 == 90 || self.0 == 270
    }
}

// =============================================================================
// Tests
// =============================================================================
