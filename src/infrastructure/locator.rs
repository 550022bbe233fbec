// SPDX-License-Identifier: MPL-2.0
//! Fetcher dispatching on the locator kind.

use super::{FsFetcher, HttpFetcher};
use crate::application::port::{FetchedImage, ImageFetcher, MediaError};
use crate::domain::locator::Locator;
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

/// Routes remote locators to HTTP and file locators to the filesystem.
///
/// Data locators never reach a fetcher; they are rejected here.
#[derive(Debug, Clone)]
pub struct LocatorFetcher {
    http: HttpFetcher,
    fs: FsFetcher,
}

impl LocatorFetcher {
    #[must_use]
    pub fn new(http: HttpFetcher) -> Self {
        Self { http, fs: FsFetcher }
    }
}

impl ImageFetcher for LocatorFetcher {
    fn fetch<'a>(&'a self, locator: &'a Locator) -> BoxFuture<'a, Result<FetchedImage, MediaError>> {
        match locator {
            Locator::Remote(_) => self.http.fetch(locator),
            Locator::File(_) => self.fs.fetch(locator),
            Locator::Data(_) => {
                future::ready(Err(MediaError::UnsupportedLocator(locator.describe()))).boxed()
            }
        }
    }
}
