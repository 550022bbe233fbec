// SPDX-License-Identifier: MPL-2.0
//! Image fetching port definition.
//!
//! The image pipeline hands non-embedded locators to an [`ImageFetcher`] and
//! receives the encoded bytes plus whether the pixels may be read back.

use crate::domain::locator::Locator;
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// MediaError
// =============================================================================

/// Errors that can occur while fetching an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Nothing exists at the locator.
    NotFound,

    /// The bytes could not be read (I/O error).
    IoError(String),

    /// The remote request failed or returned a non-success status.
    Network(String),

    /// The fetcher cannot handle this kind of locator.
    UnsupportedLocator(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound => write!(f, "Image not found"),
            MediaError::IoError(msg) => write!(f, "I/O error: {msg}"),
            MediaError::Network(msg) => write!(f, "Network error: {msg}"),
            MediaError::UnsupportedLocator(msg) => write!(f, "Unsupported locator: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

// =============================================================================
// FetchedImage
// =============================================================================

/// Encoded image bytes returned by a fetcher.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Encoded bytes (PNG, JPEG, ...).
    pub bytes: Vec<u8>,
    /// Whether the source allows reading the decoded pixels back out.
    ///
    /// `false` models a cross-origin response without a matching
    /// `Access-Control-Allow-Origin`: the image may be displayed but the
    /// surface becomes tainted.
    pub readable: bool,
}

impl FetchedImage {
    /// Bytes from a source that allows pixel read-back.
    #[must_use]
    pub fn readable(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            readable: true,
        }
    }

    /// Bytes from a source that denies pixel read-back.
    #[must_use]
    pub fn opaque(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            readable: false,
        }
    }
}

// =============================================================================
// ImageFetcher Trait
// =============================================================================

/// Port for retrieving encoded image bytes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the returned future may be
/// driven on any runtime thread.
pub trait ImageFetcher: Send + Sync {
    /// Fetches the bytes behind a non-embedded locator.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if:
    /// - The locator kind is not supported by this fetcher
    /// - Nothing exists at the locator
    /// - The transport fails
    fn fetch<'a>(&'a self, locator: &'a Locator) -> BoxFuture<'a, Result<FetchedImage, MediaError>>;
}

impl<T: ImageFetcher + ?Sized> ImageFetcher for Arc<T> {
    fn fetch<'a>(&'a self, locator: &'a Locator) -> BoxFuture<'a, Result<FetchedImage, MediaError>> {
        (**self).fetch(locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_error_display() {
        assert_eq!(format!("{}", MediaError::NotFound), "Image not found");
        assert!(format!("{}", MediaError::Network("503".into())).contains("503"));
        assert!(format!("{}", MediaError::UnsupportedLocator("ftp".into())).contains("ftp"));
    }

    #[test]
    fn fetched_image_constructors_set_readability() {
        assert!(FetchedImage::readable(vec![1]).readable);
        assert!(!FetchedImage::opaque(vec![1]).readable);
    }
}
