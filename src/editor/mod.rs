// SPDX-License-Identifier: MPL-2.0
//! Headless photo editor for one studio session.
//!
//! The editor owns the session's photo list, one work surface and the
//! [`EditState`] of the photo on display. Every mutator rebuilds the
//! derived scene objects from the whole current state and replaces them by
//! role; nothing is patched incrementally.
//!
//! Operations whose preconditions are unmet (no image loaded, empty
//! watermark text, crop requested twice) do nothing and return `false`.
//! Failures are turned into visible notices and recorded as diagnostics.

mod adjust;
mod commit;
mod crop;
mod decor;
pub mod recipes;
mod session;
mod state;
mod tools;
mod watermark;

#[cfg(test)]
mod tests;

pub use adjust::compose_filter_stack;
pub use crop::INITIAL_CROP_FRACTION;
pub use decor::{border_overlay, frame_overlay};
pub use session::{load_ticket, LoadDisposition, LoadOutcome, LoadTicket};
pub use state::{EditState, WatermarkSpec};
pub use tools::EditorTool;
pub use watermark::image_watermark_rect;

use crate::application::port::{EditorHost, ImageFetcher, Surface};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::domain::editing::{BorderWidth, Color, FontSize, Opacity};
use crate::domain::session::{PhotoKey, Session};
use crate::error::Error;
use crate::media::image::LoadedBitmap;
use crate::media::placement::Placement;
use crate::notifications::{Manager, Notification};

/// Configured defaults the editor applies to new edits.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub fit_ratio: f32,
    pub border_width: BorderWidth,
    pub border_color: Color,
    pub watermark_font_size: FontSize,
    pub watermark_color: Color,
    pub watermark_opacity: Opacity,
    /// Image watermark size relative to the watermark's natural size.
    pub watermark_image_scale: f32,
    /// Gap between an image watermark and the bottom-right surface corner.
    pub watermark_corner_margin: f32,
}

impl From<&Config> for EditorSettings {
    fn from(config: &Config) -> Self {
        Self {
            fit_ratio: config.surface.fit_ratio(),
            border_width: BorderWidth::new(config.border.width),
            border_color: config.border.color,
            watermark_font_size: FontSize::new(config.watermark.font_size),
            watermark_color: config.watermark.color,
            watermark_opacity: Opacity::new(config.watermark.opacity),
            watermark_image_scale: config.watermark.image_scale(),
            watermark_corner_margin: config.watermark.corner_margin(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Photo editor over a [`Surface`], fetching through `F` and reporting to `H`.
pub struct Editor<S, F, H> {
    session: Session,
    surface: S,
    fetcher: F,
    host: H,
    settings: EditorSettings,
    state: EditState,
    /// Photo whose pixels are on the surface.
    displayed: Option<PhotoKey>,
    /// Bitmap as loaded, restored by `reset_all`.
    original: Option<LoadedBitmap>,
    /// Bumped by every selection; stale load results are discarded.
    generation: u64,
    pending: Option<LoadTicket>,
    active_tool: Option<EditorTool>,
    last_error: Option<Error>,
    notifications: Manager,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S, F, H> std::fmt::Debug for Editor<S, F, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("session", &self.session.id)
            .field("displayed", &self.displayed)
            .field("state", &self.state)
            .field("active_tool", &self.active_tool)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Opens `session` for editing. No photo is loaded until one is selected.
    pub fn new(session: Session, surface: S, fetcher: F, host: H, settings: EditorSettings) -> Self {
        let state = EditState::with_border_defaults(settings.border_width, settings.border_color);
        Self {
            session,
            surface,
            fetcher,
            host,
            settings,
            state,
            displayed: None,
            original: None,
            generation: 0,
            pending: None,
            active_tool: None,
            last_error: None,
            notifications: Manager::new(),
            diagnostics: None,
        }
    }

    /// Records operator actions and surfaced failures through `handle`.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.notifications.set_diagnostics(handle.clone());
        self.diagnostics = Some(handle);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    /// Mutable access for dismissing notices and ticking timers.
    pub fn notifications_mut(&mut self) -> &mut Manager {
        &mut self.notifications
    }

    /// The most recent failure, cleared by the next successful load.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Returns true while a selection's load has not been finished.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Current session index of the displayed photo.
    pub fn selected_index(&self) -> Option<usize> {
        self.displayed
            .and_then(|key| self.session.position_of(key))
    }

    /// Returns true when a photo is loaded and can be edited.
    pub fn has_image(&self) -> bool {
        self.displayed.is_some() && self.surface.has_image()
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn fresh_state(&self) -> EditState {
        EditState::with_border_defaults(self.settings.border_width, self.settings.border_color)
    }

    fn placement_for(&self, bitmap: &LoadedBitmap) -> Placement {
        Placement::fit(bitmap.size(), self.surface.size(), self.settings.fit_ratio)
    }

    fn record(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    /// Error notice about the displayed photo.
    fn error_notice(&self, notice_key: &str) -> Notification {
        let notice = Notification::error(notice_key);
        match self.selected_index().and_then(|index| self.session.photo(index)) {
            Some(photo) => notice.with_arg("photo", photo.id.as_str()),
            None => notice,
        }
    }

    /// Logs `error`, shows `notice` with the error as its reason and keeps
    /// the error as [`Editor::last_error`].
    fn report_failure(&mut self, notice: Notification, error: Error) {
        log::error!("{error}");
        self.notifications
            .push(notice.with_arg("reason", error.to_string()));
        self.last_error = Some(error);
    }

    /// Drops the displayed photo and everything drawn for it.
    fn clear_display(&mut self) {
        self.surface.clear();
        self.displayed = None;
        self.original = None;
        self.state = self.fresh_state();
        self.active_tool = None;
    }
}
