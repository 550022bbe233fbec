// SPDX-License-Identifier: MPL-2.0
//! Data URL encoding and decoding.
//!
//! Committed photos leave the editor as `data:image/png;base64,...` strings,
//! and re-encoded sources are kept in the same form.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image_rs::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Prefix of every PNG data URL the editor emits.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encodes `image` as PNG bytes.
///
/// # Errors
///
/// Returns [`Error::Save`] if the PNG encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| Error::Save(format!("PNG encoding failed: {e}")))?;
    Ok(buffer.into_inner())
}

/// Encodes `image` as a base64 PNG data URL.
///
/// # Errors
///
/// Returns [`Error::Save`] if the PNG encoder fails.
pub fn encode_png_data_url(image: &RgbaImage) -> Result<String> {
    let bytes = encode_png(image)?;
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + bytes.len() * 4 / 3 + 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(&bytes, &mut url);
    Ok(url)
}

/// Extracts the payload bytes of a `data:` URL.
///
/// Both base64 and plain payloads are accepted.
///
/// # Errors
///
/// Returns [`Error::Load`] if the string is not a data URL or the base64
/// payload is malformed.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| Error::Load("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Load("data URL has no payload separator".to_string()))?;

    if header.ends_with(";base64") {
        STANDARD
            .decode(payload.trim())
            .map_err(|e| Error::Load(format!("invalid base64 payload: {e}")))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    #[test]
    fn encoded_url_carries_png_prefix_and_decodes_back() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let url = encode_png_data_url(&image).expect("encode");
        assert!(url.starts_with(PNG_DATA_URL_PREFIX));

        let bytes = decode_data_url(&url).expect("decode");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image_rs::load_from_memory(&bytes).expect("png").to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn plain_payload_is_returned_verbatim() {
        let bytes = decode_data_url("data:text/plain,hello").expect("decode");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_non_data_urls() {
        assert!(matches!(
            decode_data_url("https://example.com/a.png"),
            Err(Error::Load(_))
        ));
        assert!(matches!(decode_data_url("data:image/png;base64"), Err(Error::Load(_))));
        assert!(matches!(
            decode_data_url("data:image/png;base64,@@@"),
            Err(Error::Load(_))
        ));
    }
}
