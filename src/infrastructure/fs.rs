// SPDX-License-Identifier: MPL-2.0
//! Filesystem image fetcher.

use crate::application::port::{FetchedImage, ImageFetcher, MediaError};
use crate::domain::locator::Locator;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::io::ErrorKind;

/// Reads file locators from the local filesystem.
///
/// Local files are always readable back.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFetcher;

impl ImageFetcher for FsFetcher {
    fn fetch<'a>(&'a self, locator: &'a Locator) -> BoxFuture<'a, Result<FetchedImage, MediaError>> {
        async move {
            let Locator::File(path) = locator else {
                return Err(MediaError::UnsupportedLocator(locator.describe()));
            };
            match tokio::fs::read(path).await {
                Ok(bytes) => Ok(FetchedImage::readable(bytes)),
                Err(e) if e.kind() == ErrorKind::NotFound => Err(MediaError::NotFound),
                Err(e) => Err(MediaError::IoError(e.to_string())),
            }
        }
        .boxed()
    }
}
