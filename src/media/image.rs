// SPDX-License-Identifier: MPL-2.0
//! Source image loading and normalization.
//!
//! Every non-embedded source is decoded once and re-encoded into a PNG data
//! locator, so later read-back at commit time never depends on the original
//! transport. Sources that deny read-back keep their original locator and
//! are flagged as tainting the surface.

use crate::application::port::ImageFetcher;
use crate::domain::geometry::Size;
use crate::domain::locator::Locator;
use crate::error::{Error, Result};
use crate::media::data_url::{decode_data_url, encode_png_data_url};
use image_rs::RgbaImage;
use std::sync::Arc;

/// A decoded source image ready to be placed on the work surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBitmap {
    /// Pristine decoded pixels. Filters are always applied to a copy.
    pub pixels: Arc<RgbaImage>,
    /// Where the pixels came from; a data locator after normalization.
    pub locator: Locator,
    /// False when drawing these pixels taints the surface.
    pub origin_clean: bool,
}

impl LoadedBitmap {
    /// Wraps pixels produced locally (crop results, tests).
    #[must_use]
    pub fn from_pixels(pixels: RgbaImage, locator: Locator) -> Self {
        Self {
            pixels: Arc::new(pixels),
            locator,
            origin_clean: true,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Natural size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::from_pixels(self.width(), self.height())
    }
}

/// Decodes encoded image bytes (PNG, JPEG, GIF, WebP, TIFF, BMP) to RGBA8.
///
/// # Errors
///
/// Returns [`Error::Load`] if the format is unknown or the data is corrupt,
/// or if the image has no pixels.
pub fn decode_bitmap(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image_rs::load_from_memory(bytes)
        .map_err(|e| Error::Load(format!("decode failed: {e}")))?
        .to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::Load("image has no pixels".to_string()));
    }
    Ok(image)
}

/// Loads `locator` into a [`LoadedBitmap`].
///
/// Data locators are decoded directly. Anything else goes through
/// `fetcher`, is decoded, then re-encoded as a PNG data locator. When the
/// fetch reports the pixels as unreadable the re-encode is refused: the
/// failure is logged as a warning, the original locator is kept and the
/// bitmap is flagged as tainting.
///
/// Nothing is mutated on failure; the caller keeps whatever it displayed.
///
/// # Errors
///
/// Returns [`Error::Media`] if the fetch fails and [`Error::Load`] if the
/// bytes cannot be decoded.
pub async fn load_image<F>(fetcher: &F, locator: &Locator) -> Result<LoadedBitmap>
where
    F: ImageFetcher + ?Sized,
{
    if let Locator::Data(url) = locator {
        let pixels = decode_bitmap(&decode_data_url(url)?)?;
        return Ok(LoadedBitmap::from_pixels(pixels, locator.clone()));
    }

    let fetched = fetcher.fetch(locator).await?;
    let pixels = decode_bitmap(&fetched.bytes)?;

    match reencode(&pixels, locator, fetched.readable) {
        Ok(url) => Ok(LoadedBitmap::from_pixels(pixels, Locator::Data(url))),
        Err(e) => {
            log::warn!("{e}; keeping original locator {}", locator.describe());
            Ok(LoadedBitmap {
                pixels: Arc::new(pixels),
                locator: locator.clone(),
                origin_clean: false,
            })
        }
    }
}

/// Re-encodes decoded pixels through an off-surface buffer into a data URL.
fn reencode(pixels: &RgbaImage, locator: &Locator, readable: bool) -> Result<String> {
    if !readable {
        return Err(Error::Reencode(format!(
            "{} denies pixel read-back",
            locator.describe()
        )));
    }
    encode_png_data_url(pixels).map_err(|e| Error::Reencode(e.to_string()))
}
