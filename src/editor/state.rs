// SPDX-License-Identifier: MPL-2.0
//! Non-destructive edit parameters of the open photo.

use crate::domain::editing::{
    AdjustmentKind, AdjustmentPercent, BorderStyle, BorderWidth, Color, FontSize, FrameStyle,
    Opacity, RotationAngle, StylisticFilter,
};
use crate::domain::geometry::Rect;
use crate::domain::locator::Locator;

/// The watermark the operator asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum WatermarkSpec {
    Text {
        text: String,
        font_size: FontSize,
        color: Color,
        opacity: Opacity,
    },
    Image {
        locator: Locator,
        opacity: Opacity,
    },
}

/// Everything describing how the original bitmap is currently shown.
///
/// Reset to defaults whenever another photo is loaded. Edits are not
/// remembered per photo.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub brightness: AdjustmentPercent,
    pub contrast: AdjustmentPercent,
    pub saturation: AdjustmentPercent,
    pub filter: StylisticFilter,
    pub frame: FrameStyle,
    pub border: BorderStyle,
    pub border_width: BorderWidth,
    pub border_color: Color,
    pub watermark: Option<WatermarkSpec>,
    /// Pending crop rectangle in surface coordinates; `Some` while cropping.
    pub crop_region: Option<Rect>,
    pub rotation: RotationAngle,
    /// Set by any change away from the defaults, cleared only by a reset.
    pub edited: bool,
}

impl Default for EditState {
    fn default() -> Self {
        Self::with_border_defaults(BorderWidth::default(), Color::BLACK)
    }
}

impl EditState {
    /// Fresh state whose border parameters start from configured values.
    #[must_use]
    pub fn with_border_defaults(border_width: BorderWidth, border_color: Color) -> Self {
        Self {
            brightness: AdjustmentPercent::default(),
            contrast: AdjustmentPercent::default(),
            saturation: AdjustmentPercent::default(),
            filter: StylisticFilter::None,
            frame: FrameStyle::None,
            border: BorderStyle::None,
            border_width,
            border_color,
            watermark: None,
            crop_region: None,
            rotation: RotationAngle::ZERO,
            edited: false,
        }
    }

    #[must_use]
    pub fn adjustment(&self, kind: AdjustmentKind) -> AdjustmentPercent {
        match kind {
            AdjustmentKind::Brightness => self.brightness,
            AdjustmentKind::Contrast => self.contrast,
            AdjustmentKind::Saturation => self.saturation,
        }
    }

    pub(super) fn set_adjustment(&mut self, kind: AdjustmentKind, value: AdjustmentPercent) {
        match kind {
            AdjustmentKind::Brightness => self.brightness = value,
            AdjustmentKind::Contrast => self.contrast = value,
            AdjustmentKind::Saturation => self.saturation = value,
        }
    }

    #[must_use]
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    #[must_use]
    pub fn is_cropping(&self) -> bool {
        self.crop_region.is_some()
    }
}
