// SPDX-License-Identifier: MPL-2.0
//! Save, rotation and reset.

use super::Editor;
use crate::application::port::{EditorHost, ImageFetcher, Surface, SurfaceError};
use crate::diagnostics::UserAction;
use crate::domain::editing::RotationAngle;
use crate::error::{Error, Result};
use crate::media::data_url::encode_png_data_url;
use crate::notifications::Notification;

/// Notice key shown after the host received a saved photo.
const SAVED: &str = "notice-saved";

/// Notice key shown when the composed photo cannot be exported.
const SAVE_FAILED: &str = "notice-save-failed";

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Exports the composed photo and hands it to the host as a PNG data URL.
    ///
    /// A pending crop is applied first. The export covers the image and
    /// every decoration at the image's native resolution; the crop guide
    /// is never part of it. Returns `Ok(false)` when nothing is displayed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] when the surface cannot be read back (for
    /// example after drawing a cross-origin bitmap). The edit state is left
    /// untouched and the host is not called.
    pub fn save(&mut self) -> Result<bool> {
        let Some(index) = self.selected_index().filter(|_| self.has_image()) else {
            return Ok(false);
        };
        self.record(UserAction::Save);

        let url = match self.export_composition() {
            Ok(url) => url,
            Err(error) => {
                let notice = self.error_notice(SAVE_FAILED);
                self.report_failure(notice, error.clone());
                return Err(error);
            }
        };

        let session = &mut self.session;
        self.host.on_save(&session.id, index, &url);
        if let Some(photo) = session.photos.get_mut(index) {
            photo.edited = true;
            log::info!("Saved photo {} of session {}", photo.id, session.id);
        }
        self.notifications.clear_key(SAVE_FAILED);
        self.notifications
            .push(Notification::success(SAVED).with_arg("index", (index + 1).to_string()));
        Ok(true)
    }

    fn export_composition(&mut self) -> Result<String> {
        if let Some(region) = self.state.crop_region {
            self.commit_crop(region).map_err(into_save_error)?;
        }
        let region = self
            .surface
            .content_bounds()
            .ok_or(Error::Save(SurfaceError::NoImage.to_string()))?;
        let scale = self
            .surface
            .export_scale()
            .ok_or(Error::Save(SurfaceError::NoImage.to_string()))?;
        let pixels = self
            .surface
            .rasterize(region, scale)
            .map_err(|e| Error::Save(e.to_string()))?;
        encode_png_data_url(&pixels)
    }

    /// Rotates the image a quarter turn counterclockwise.
    pub fn rotate_left(&mut self) -> bool {
        let angle = self.state.rotation.rotate_left();
        self.rotate_to(angle, UserAction::RotateLeft)
    }

    /// Rotates the image a quarter turn clockwise.
    pub fn rotate_right(&mut self) -> bool {
        let angle = self.state.rotation.rotate_right();
        self.rotate_to(angle, UserAction::RotateRight)
    }

    /// A pending crop region stays where it is on the surface.
    fn rotate_to(&mut self, angle: RotationAngle, action: UserAction) -> bool {
        if !self.has_image() || !self.surface.set_rotation(angle) {
            return false;
        }
        self.record(action);
        self.state.rotation = angle;
        self.state.edited = true;
        self.refresh_decor();
        true
    }

    /// Restores the photo as loaded and clears every edit.
    pub fn reset_all(&mut self) -> bool {
        let Some(original) = self.original.clone().filter(|_| self.has_image()) else {
            return false;
        };
        self.record(UserAction::ResetAll);
        let placement = self.placement_for(&original);
        self.surface.load_image(original, placement);
        self.state = self.fresh_state();
        self.active_tool = None;
        true
    }
}

fn into_save_error(error: Error) -> Error {
    match error {
        Error::Save(_) => error,
        other => Error::Save(other.to_string()),
    }
}
