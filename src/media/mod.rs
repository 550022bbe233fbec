// SPDX-License-Identifier: MPL-2.0
//! Image pipeline: decoding, re-encoding, pixel filters and placement.
//!
//! Flow into the editor is one way: locator -> fetched bytes -> decoded
//! [`LoadedBitmap`](image::LoadedBitmap) -> [`Placement`](placement::Placement)
//! on the work surface. Flow out is the PNG data URL produced at commit time.

pub mod data_url;
pub mod filter;
pub mod image;
pub mod image_transform;
pub mod placement;

pub use data_url::{decode_data_url, encode_png_data_url, PNG_DATA_URL_PREFIX};
pub use filter::{FilterLayer, FilterOp, FilterSlot, FilterStack};
pub use image::{decode_bitmap, load_image, LoadedBitmap};
pub use placement::Placement;
