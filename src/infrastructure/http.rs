// SPDX-License-Identifier: MPL-2.0
//! HTTP(S) image fetcher.
//!
//! Models the browser's cross-origin read-back rule: when an `Origin` is
//! configured, the response is readable only if `Access-Control-Allow-Origin`
//! is `*` or names that origin.

use crate::application::port::{FetchedImage, ImageFetcher, MediaError};
use crate::domain::locator::Locator;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::header::{HeaderMap, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use reqwest::StatusCode;
use std::time::Duration;

/// Fetches remote locators with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    origin: Option<String>,
}

impl HttpFetcher {
    /// Creates a fetcher with a request timeout and an optional page origin.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Network`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, origin: Option<String>) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MediaError::Network(e.to_string()))?;
        Ok(Self { client, origin })
    }

    /// The origin sent with each request, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    async fn get(&self, url: &str) -> Result<FetchedImage, MediaError> {
        let mut request = self.client.get(url);
        if let Some(origin) = &self.origin {
            request = request.header(ORIGIN, origin);
        }
        let response = request
            .send()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MediaError::NotFound);
        }
        if !status.is_success() {
            return Err(MediaError::Network(format!("{url} returned {status}")));
        }

        let readable = readable_by(self.origin.as_deref(), response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;
        Ok(FetchedImage {
            bytes: bytes.to_vec(),
            readable,
        })
    }
}

/// Read-back permission for a response seen from `origin`.
///
/// Without a configured origin the request is same-origin and always readable.
fn readable_by(origin: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(origin) = origin else {
        return true;
    };
    headers
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .is_some_and(|allowed| allowed == "*" || allowed.eq_ignore_ascii_case(origin))
}

impl ImageFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, locator: &'a Locator) -> BoxFuture<'a, Result<FetchedImage, MediaError>> {
        async move {
            match locator {
                Locator::Remote(url) => self.get(url).await,
                other => Err(MediaError::UnsupportedLocator(other.describe())),
            }
        }
        .boxed()
    }
}
