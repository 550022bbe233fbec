// SPDX-License-Identifier: MPL-2.0
//! Studio session: an ordered list of photos opened together in the editor.

use super::locator::Locator;
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a session in the external system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a photo in the external system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of one photo record, unique within its session.
///
/// External ids may repeat, so the editor follows records by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoKey(u64);

/// A photo reference within a session.
///
/// The `edited` flag travels with the record, so removing a photo never
/// requires renumbering a side table of indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    pub locator: Locator,
    pub edited: bool,
    key: PhotoKey,
}

impl Photo {
    pub fn new(id: impl Into<String>, locator: impl Into<Locator>) -> Self {
        Self {
            id: PhotoId::new(id),
            locator: locator.into(),
            edited: false,
            key: PhotoKey(0),
        }
    }

    /// Record key, assigned by [`Session::new`].
    #[must_use]
    pub fn key(&self) -> PhotoKey {
        self.key
    }
}

/// Session opened for editing.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    /// Customer label shown by the host.
    pub customer: String,
    pub photos: Vec<Photo>,
}

impl Session {
    /// Opens a session over `photos`, giving each record its own key.
    pub fn new(id: impl Into<String>, customer: impl Into<String>, mut photos: Vec<Photo>) -> Self {
        for (index, photo) in photos.iter_mut().enumerate() {
            photo.key = PhotoKey(index as u64);
        }
        Self {
            id: SessionId::new(id),
            customer: customer.into(),
            photos,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn photo(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Current index of the record with `key`, if it is still in the session.
    #[must_use]
    pub fn position_of(&self, key: PhotoKey) -> Option<usize> {
        self.photos.iter().position(|photo| photo.key == key)
    }

    /// Removes and returns the photo at `index`.
    pub fn remove_photo(&mut self, index: usize) -> Option<Photo> {
        if index < self.photos.len() {
            Some(self.photos.remove(index))
        } else {
            None
        }
    }

    /// Indices of photos edited in this editor instance.
    #[must_use]
    pub fn edited_indices(&self) -> BTreeSet<usize> {
        self.photos
            .iter()
            .enumerate()
            .filter_map(|(index, photo)| photo.edited.then_some(index))
            .collect()
    }
}
