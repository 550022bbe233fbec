// SPDX-License-Identifier: MPL-2.0
//! Host port: the callbacks of the view embedding the editor.

use crate::domain::session::SessionId;

/// Collaborator receiving the editor's outward data.
///
/// `on_save` is the only data crossing the boundary; once invoked the editor
/// treats the save as durable and never retries on the host's behalf.
pub trait EditorHost {
    /// Receives a committed photo as a PNG data URL.
    fn on_save(&mut self, session: &SessionId, photo_index: usize, encoded_png: &str);

    /// Told after the editor removed a photo from its local list.
    fn on_delete_image(&mut self, _session: &SessionId, _photo_index: usize) {}

    /// Told when the editor is closed.
    fn on_close(&mut self) {}
}

/// A host that discards every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl EditorHost for NullHost {
    fn on_save(&mut self, _session: &SessionId, _photo_index: usize, _encoded_png: &str) {}
}
