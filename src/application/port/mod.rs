// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`fetch`]: Fetching encoded image bytes for a locator
//! - [`surface`]: The mutable 2D scene the editor composes into
//! - [`host`]: Callbacks into the view that embeds the editor
//!
//! # Design Notes
//!
//! - The surface port hides the rendering library's object model; scene
//!   objects are addressed by [`Role`], never by string tags
//! - Fetchers are `Send + Sync` and return boxed futures so loads can run
//!   without borrowing the editor

pub mod fetch;
pub mod host;
pub mod surface;

pub use fetch::{FetchedImage, ImageFetcher, MediaError};
pub use host::{EditorHost, NullHost};
pub use surface::{
    BorderOverlay, CropGuide, FrameOverlay, ImageWatermark, Overlay, Role, Shadow, Surface,
    SurfaceError, TextWatermark, Watermark,
};
