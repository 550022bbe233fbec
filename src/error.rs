// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{MediaError, SurfaceError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The source image could not be fetched or decoded.
    Load(String),
    /// Re-encoding through the raster buffer was refused (cross-origin denial).
    Reencode(String),
    /// Rasterizing or encoding the composed surface failed at commit time.
    Save(String),
    Render(SurfaceError),
    Media(MediaError),
}

impl Error {
    /// Returns the notice message key for this error.
    ///
    /// Hosts resolve the key to a localized string when they display the notice.
    pub fn notice_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notice-io-error",
            Error::Config(_) => "notice-config-error",
            Error::Load(_) | Error::Media(_) => "notice-load-failed",
            Error::Reencode(_) => "notice-reencode-denied",
            Error::Save(_) => "notice-save-failed",
            Error::Render(SurfaceError::Tainted) => "notice-surface-tainted",
            Error::Render(_) => "notice-render-failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Load(e) => write!(f, "Load Error: {}", e),
            Error::Reencode(e) => write!(f, "Re-encode Error: {}", e),
            Error::Save(e) => write!(f, "Save Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Load(err.to_string())
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Render(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
