// SPDX-License-Identifier: MPL-2.0
//! The single watermark object.

use super::{Editor, EditorSettings, WatermarkSpec};
use crate::application::port::{
    EditorHost, ImageFetcher, ImageWatermark, Overlay, Role, Surface, TextWatermark, Watermark,
};
use crate::diagnostics::UserAction;
use crate::domain::editing::{Color, FontSize, Opacity};
use crate::domain::geometry::{Point, Rect, Size};
use crate::domain::locator::Locator;
use crate::error::Result;
use crate::media::image::{load_image, LoadedBitmap};

/// Notice key shown when a watermark image cannot be loaded.
const WATERMARK_FAILED: &str = "notice-watermark-failed";

/// Rectangle of a bitmap watermark: `scale` times its natural size, with its
/// bottom-right corner `margin` away from the surface's.
#[must_use]
pub fn image_watermark_rect(natural: Size, scale: f32, margin: f32, surface: Size) -> Rect {
    let size = Size::new(natural.width * scale, natural.height * scale);
    Rect::new(
        surface.width - margin - size.width,
        surface.height - margin - size.height,
        size.width,
        size.height,
    )
}

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Replaces the watermark with `text` centered on the surface.
    ///
    /// Blank text or a missing image makes this a no-op.
    pub fn add_text_watermark(
        &mut self,
        text: &str,
        font_size: FontSize,
        color: Color,
        opacity: Opacity,
    ) -> bool {
        if text.trim().is_empty() || !self.has_image() {
            return false;
        }
        self.record(UserAction::AddTextWatermark);

        let size = self.surface.size();
        let overlay = TextWatermark {
            text: text.to_string(),
            font_size,
            color,
            opacity,
            center: Point::new(size.width / 2.0, size.height / 2.0),
        };
        self.surface
            .add_overlay(Overlay::Watermark(Watermark::Text(overlay)));
        self.state.watermark = Some(WatermarkSpec::Text {
            text: text.to_string(),
            font_size,
            color,
            opacity,
        });
        self.state.edited = true;
        true
    }

    /// Text watermark using the configured size, color and opacity.
    pub fn add_default_text_watermark(&mut self, text: &str) -> bool {
        let EditorSettings {
            watermark_font_size,
            watermark_color,
            watermark_opacity,
            ..
        } = self.settings;
        self.add_text_watermark(text, watermark_font_size, watermark_color, watermark_opacity)
    }

    /// Replaces the watermark with the bitmap behind `locator`, scaled down
    /// and anchored near the bottom-right corner.
    ///
    /// Returns `Ok(false)` without an image. A bitmap from a source that
    /// denies read-back is still shown, but later saves will fail.
    ///
    /// # Errors
    ///
    /// Returns the load error when the bitmap cannot be fetched or decoded;
    /// the previous watermark is kept.
    pub async fn add_image_watermark(&mut self, locator: &Locator, opacity: Opacity) -> Result<bool> {
        if !self.has_image() {
            return Ok(false);
        }
        self.record(UserAction::AddImageWatermark);

        let bitmap = match load_image(&self.fetcher, locator).await {
            Ok(bitmap) => bitmap,
            Err(error) => {
                let notice = self.error_notice(WATERMARK_FAILED);
                self.report_failure(notice, error.clone());
                return Err(error);
            }
        };
        self.place_image_watermark(bitmap, opacity);
        self.state.watermark = Some(WatermarkSpec::Image {
            locator: locator.clone(),
            opacity,
        });
        self.state.edited = true;
        Ok(true)
    }

    fn place_image_watermark(&mut self, bitmap: LoadedBitmap, opacity: Opacity) {
        let rect = image_watermark_rect(
            bitmap.size(),
            self.settings.watermark_image_scale,
            self.settings.watermark_corner_margin,
            self.surface.size(),
        );
        let overlay = ImageWatermark {
            origin_clean: bitmap.origin_clean,
            bitmap: bitmap.pixels,
            rect,
            opacity,
        };
        self.surface
            .add_overlay(Overlay::Watermark(Watermark::Image(overlay)));
    }

    /// Removes the watermark, if any.
    pub fn remove_watermark(&mut self) -> bool {
        if self.state.watermark.is_none() {
            return false;
        }
        self.record(UserAction::RemoveWatermark);
        self.surface.remove_overlay(Role::Watermark);
        self.state.watermark = None;
        true
    }
}
