// SPDX-License-Identifier: MPL-2.0
//! Crop mode.
//!
//! While cropping, the pending region lives in [`EditState::crop_region`]
//! and is shown as a guide overlay that never reaches exported pixels.
//! Applying the crop replaces the main image with the rasterized region.
//!
//! [`EditState::crop_region`]: super::EditState::crop_region

use super::{Editor, EditorTool};
use crate::application::port::{
    CropGuide, EditorHost, ImageFetcher, Overlay, Role, Surface, SurfaceError,
};
use crate::diagnostics::UserAction;
use crate::domain::geometry::Rect;
use crate::domain::locator::Locator;
use crate::error::{Error, Result};
use crate::media::data_url::encode_png_data_url;
use crate::media::image::LoadedBitmap;

/// Share of the image each side of the initial crop guide spans.
pub const INITIAL_CROP_FRACTION: f32 = 0.5;

/// Notice key shown when the crop region cannot be read back.
const CROP_FAILED: &str = "notice-crop-failed";

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Enters crop mode with a guide over the central half of the image.
    ///
    /// Returns false without an image or when already cropping.
    pub fn enable_cropping(&mut self) -> bool {
        if !self.has_image() || self.state.is_cropping() {
            return false;
        }
        let Some(image) = self.surface.main_bounds() else {
            return false;
        };
        self.record(UserAction::EnableCrop);
        self.show_crop_guide(image.centered_fraction(INITIAL_CROP_FRACTION));
        self.active_tool = Some(EditorTool::Crop);
        true
    }

    /// Moves the pending crop region, clipped to the surface.
    ///
    /// Returns false outside crop mode or when nothing of `region` is left
    /// after clipping.
    pub fn set_crop_region(&mut self, region: Rect) -> bool {
        if !self.state.is_cropping() {
            return false;
        }
        let Some(clipped) = Rect::from_size(self.surface.size()).intersect(&region) else {
            return false;
        };
        if clipped.is_empty() {
            return false;
        }
        self.show_crop_guide(clipped);
        true
    }

    /// Replaces the image with the pending crop region and leaves crop mode.
    ///
    /// Returns `Ok(false)` outside crop mode.
    ///
    /// # Errors
    ///
    /// Returns the read-back error when the surface cannot be rasterized.
    /// The editor stays in crop mode with the guide in place.
    pub fn apply_crop(&mut self) -> Result<bool> {
        let Some(region) = self.state.crop_region else {
            return Ok(false);
        };
        self.record(UserAction::ApplyCrop);
        if let Err(error) = self.commit_crop(region) {
            let notice = self.error_notice(CROP_FAILED);
            self.report_failure(notice, error.clone());
            return Err(error);
        }
        Ok(true)
    }

    /// Leaves crop mode without touching the image.
    pub fn cancel_crop(&mut self) -> bool {
        if !self.state.is_cropping() {
            return false;
        }
        self.record(UserAction::CancelCrop);
        self.hide_crop_guide();
        true
    }

    /// Rasterizes `region` at native resolution and loads it as the new image.
    ///
    /// The cropped pixels become the photo's working image; every other edit
    /// is baked in and the state starts over, still marked as edited.
    pub(super) fn commit_crop(&mut self, region: Rect) -> Result<()> {
        let scale = self
            .surface
            .export_scale()
            .ok_or(Error::Render(SurfaceError::NoImage))?;
        let pixels = self.surface.rasterize(region, scale)?;
        let url = encode_png_data_url(&pixels)?;
        log::debug!(
            "Cropped to {}x{} px from region {region:?}",
            pixels.width(),
            pixels.height()
        );

        let bitmap = LoadedBitmap::from_pixels(pixels, Locator::Data(url));
        let placement = self.placement_for(&bitmap);
        self.surface.load_image(bitmap, placement);

        self.state = self.fresh_state();
        self.state.edited = true;
        self.active_tool = None;
        Ok(())
    }

    fn show_crop_guide(&mut self, rect: Rect) {
        self.surface
            .add_overlay(Overlay::CropRect(CropGuide { rect }));
        self.state.crop_region = Some(rect);
    }

    pub(super) fn hide_crop_guide(&mut self) {
        self.surface.remove_overlay(Role::CropRect);
        self.state.crop_region = None;
        if self.active_tool == Some(EditorTool::Crop) {
            self.active_tool = None;
        }
    }
}
