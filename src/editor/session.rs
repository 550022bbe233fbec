// SPDX-License-Identifier: MPL-2.0
//! Photo selection, deletion and closing.
//!
//! Loading is split in three so a slow fetch never borrows the editor:
//! [`Editor::begin_select`] issues a [`LoadTicket`], [`load_ticket`] does the
//! asynchronous work, and [`Editor::finish_load`] commits the result only if
//! the ticket is still the current selection.

use super::Editor;
use crate::application::port::{EditorHost, ImageFetcher, Surface};
use crate::diagnostics::UserAction;
use crate::domain::locator::Locator;
use crate::domain::session::{PhotoId, PhotoKey};
use crate::error::Result;
use crate::media::image::{load_image, LoadedBitmap};
use crate::notifications::Notification;

/// Notice key shown when a photo cannot be loaded.
const LOAD_FAILED: &str = "notice-load-failed";

/// Notice key shown when a source denies read-back; saving it will fail.
const REENCODE_DENIED: &str = "notice-reencode-denied";

/// One requested photo load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    generation: u64,
    key: PhotoKey,
    photo: PhotoId,
    locator: Locator,
}

impl LoadTicket {
    #[must_use]
    pub fn photo(&self) -> &PhotoId {
        &self.photo
    }

    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }
}

/// A finished load, not yet applied.
#[derive(Debug)]
pub struct LoadOutcome {
    ticket: LoadTicket,
    result: Result<LoadedBitmap>,
}

impl LoadOutcome {
    #[must_use]
    pub fn ticket(&self) -> &LoadTicket {
        &self.ticket
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// What [`Editor::finish_load`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDisposition {
    /// The photo is now on the surface with a fresh edit state.
    Applied,
    /// The selection moved on (or the photo was deleted); nothing changed.
    Discarded,
    /// The load failed; the previous surface is kept and a notice is shown.
    Failed,
}

/// Fetches and decodes the photo of `ticket`.
pub async fn load_ticket<F>(fetcher: &F, ticket: LoadTicket) -> LoadOutcome
where
    F: ImageFetcher + ?Sized,
{
    let result = load_image(fetcher, &ticket.locator).await;
    LoadOutcome { ticket, result }
}

impl<S, F, H> Editor<S, F, H>
where
    S: Surface,
    F: ImageFetcher,
    H: EditorHost,
{
    /// Starts selecting the photo at `index`, superseding any load in flight.
    ///
    /// Returns `None` when the index is out of range.
    pub fn begin_select(&mut self, index: usize) -> Option<LoadTicket> {
        let photo = self.session.photo(index)?;
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            key: photo.key(),
            photo: photo.id.clone(),
            locator: photo.locator.clone(),
        };
        log::debug!(
            "Selecting photo {} ({})",
            ticket.photo,
            ticket.locator.describe()
        );
        self.record(UserAction::SelectPhoto { index });
        self.pending = Some(ticket.clone());
        Some(ticket)
    }

    /// Applies a finished load if it is still the current selection.
    pub fn finish_load(&mut self, outcome: LoadOutcome) -> LoadDisposition {
        let LoadOutcome { ticket, result } = outcome;
        if self.pending.as_ref() != Some(&ticket) {
            log::debug!(
                "Discarding stale load of photo {} (generation {}, current {})",
                ticket.photo,
                ticket.generation,
                self.generation
            );
            return LoadDisposition::Discarded;
        }
        self.pending = None;

        if self.session.position_of(ticket.key).is_none() {
            return LoadDisposition::Discarded;
        }

        match result {
            Ok(bitmap) => {
                self.apply_loaded(&ticket, bitmap);
                LoadDisposition::Applied
            }
            Err(error) => {
                let notice = Notification::error(LOAD_FAILED).with_arg("photo", ticket.photo.as_str());
                self.report_failure(notice, error);
                LoadDisposition::Failed
            }
        }
    }

    /// Selects the photo at `index` and waits for its load.
    ///
    /// Returns `None` when the index is out of range.
    pub async fn select_photo(&mut self, index: usize) -> Option<LoadDisposition> {
        let ticket = self.begin_select(index)?;
        let outcome = load_ticket(&self.fetcher, ticket).await;
        Some(self.finish_load(outcome))
    }

    fn apply_loaded(&mut self, ticket: &LoadTicket, bitmap: LoadedBitmap) {
        if !bitmap.origin_clean {
            self.notifications.push(
                Notification::warning(REENCODE_DENIED).with_arg("photo", ticket.photo.as_str()),
            );
        }
        let placement = self.placement_for(&bitmap);
        self.surface.load_image(bitmap.clone(), placement);
        self.original = Some(bitmap);
        self.displayed = Some(ticket.key);
        self.state = self.fresh_state();
        self.active_tool = None;
        self.last_error = None;
        self.notifications.clear_key(LOAD_FAILED);
    }

    /// Removes the photo at `index` from the session, then tells the host.
    ///
    /// Removal is optimistic: the host's own persistence of the deletion is
    /// not awaited. Deleting the displayed photo clears the surface;
    /// deleting a photo whose load is in flight cancels that load.
    pub fn delete_photo(&mut self, index: usize) -> bool {
        let Some(removed) = self.session.remove_photo(index) else {
            return false;
        };
        self.record(UserAction::DeletePhoto { index });

        if self
            .pending
            .as_ref()
            .is_some_and(|ticket| ticket.key == removed.key())
        {
            self.pending = None;
        }
        if self.displayed == Some(removed.key()) {
            self.clear_display();
        }

        self.host.on_delete_image(&self.session.id, index);
        true
    }

    /// Closes the editor, discarding any load in flight, and hands back the host.
    pub fn close(mut self) -> H {
        self.record(UserAction::CloseEditor);
        self.pending = None;
        self.surface.clear();
        self.host.on_close();
        self.host
    }
}
