// SPDX-License-Identifier: MPL-2.0
//! In-memory image fetcher for hosts that already hold the encoded bytes.

use crate::application::port::{FetchedImage, ImageFetcher, MediaError};
use crate::domain::locator::Locator;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone)]
struct Entry {
    bytes: Arc<Vec<u8>>,
    readable: bool,
}

/// Map-backed fetcher keyed by the locator's string form.
///
/// Entries can be added at any time through a shared reference, so the
/// host can keep a clone while the editor owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers bytes that may be read back.
    pub fn insert(&self, locator: impl Into<Locator>, bytes: Vec<u8>) {
        self.insert_entry(locator.into(), bytes, true);
    }

    /// Registers bytes served from a foreign origin that denies read-back.
    pub fn insert_unreadable(&self, locator: impl Into<Locator>, bytes: Vec<u8>) {
        self.insert_entry(locator.into(), bytes, false);
    }

    /// Removes an entry; later fetches report [`MediaError::NotFound`].
    pub fn remove(&self, locator: &Locator) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&locator.to_string())
            .is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_entry(&self, locator: Locator, bytes: Vec<u8>, readable: bool) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                locator.to_string(),
                Entry {
                    bytes: Arc::new(bytes),
                    readable,
                },
            );
    }
}

impl ImageFetcher for MemoryFetcher {
    fn fetch<'a>(&'a self, locator: &'a Locator) -> BoxFuture<'a, Result<FetchedImage, MediaError>> {
        let entry = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locator.to_string())
            .cloned();
        let result = entry.ok_or(MediaError::NotFound).map(|entry| FetchedImage {
            bytes: entry.bytes.as_ref().clone(),
            readable: entry.readable,
        });
        future::ready(result).boxed()
    }
}
