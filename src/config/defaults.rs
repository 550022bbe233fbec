// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Surface**: Work-surface size, fit ratio and background
//! - **Border**: Default stroke width and color
//! - **Watermark**: Text and image watermark defaults
//! - **Fetch**: Remote image fetching
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Default work-surface width (surface units).
pub const DEFAULT_SURFACE_WIDTH: u32 = 800;

/// Default work-surface height (surface units).
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

/// Smallest accepted surface dimension.
pub const MIN_SURFACE_DIMENSION: u32 = 16;

/// Largest accepted surface dimension.
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Share of the limiting surface dimension a loaded image may occupy.
pub const DEFAULT_FIT_RATIO: f32 = 0.8;

/// Minimum fit ratio.
pub const MIN_FIT_RATIO: f32 = 0.1;

/// Maximum fit ratio.
pub const MAX_FIT_RATIO: f32 = 1.0;

/// Surface background color.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// ==========================================================================
// Border Defaults
// ==========================================================================

/// Border stroke width used when the border panel opens.
pub const DEFAULT_BORDER_WIDTH: f32 = 10.0;

/// Border stroke color used when the border panel opens.
pub const DEFAULT_BORDER_COLOR: &str = "#000000";

// ==========================================================================
// Watermark Defaults
// ==========================================================================

/// Text watermark font size.
pub const DEFAULT_WATERMARK_FONT_SIZE: f32 = 20.0;

/// Text watermark color.
pub const DEFAULT_WATERMARK_COLOR: &str = "#000000";

/// Watermark opacity (0.0 to 1.0).
pub const DEFAULT_WATERMARK_OPACITY: f32 = 0.5;

/// Image watermark size relative to its natural size.
pub const DEFAULT_WATERMARK_IMAGE_SCALE: f32 = 0.2;

/// Minimum image watermark scale.
pub const MIN_WATERMARK_IMAGE_SCALE: f32 = 0.01;

/// Maximum image watermark scale.
pub const MAX_WATERMARK_IMAGE_SCALE: f32 = 1.0;

/// Distance between an image watermark and the surface corner.
pub const DEFAULT_WATERMARK_CORNER_MARGIN: f32 = 20.0;

// ==========================================================================
// Fetch Defaults
// ==========================================================================

/// Remote fetch timeout (in seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Minimum fetch timeout (in seconds).
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Maximum fetch timeout (in seconds).
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostic event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Surface validation
    assert!(MIN_SURFACE_DIMENSION > 0);
    assert!(DEFAULT_SURFACE_WIDTH >= MIN_SURFACE_DIMENSION);
    assert!(DEFAULT_SURFACE_WIDTH <= MAX_SURFACE_DIMENSION);
    assert!(DEFAULT_SURFACE_HEIGHT >= MIN_SURFACE_DIMENSION);
    assert!(DEFAULT_SURFACE_HEIGHT <= MAX_SURFACE_DIMENSION);
    assert!(MIN_FIT_RATIO > 0.0);
    assert!(DEFAULT_FIT_RATIO >= MIN_FIT_RATIO);
    assert!(DEFAULT_FIT_RATIO <= MAX_FIT_RATIO);

    // Border validation
    assert!(DEFAULT_BORDER_WIDTH >= 1.0);
    assert!(DEFAULT_BORDER_WIDTH <= 100.0);

    // Watermark validation
    assert!(DEFAULT_WATERMARK_FONT_SIZE >= 6.0);
    assert!(DEFAULT_WATERMARK_OPACITY >= 0.0);
    assert!(DEFAULT_WATERMARK_OPACITY <= 1.0);
    assert!(DEFAULT_WATERMARK_IMAGE_SCALE >= MIN_WATERMARK_IMAGE_SCALE);
    assert!(DEFAULT_WATERMARK_IMAGE_SCALE <= MAX_WATERMARK_IMAGE_SCALE);
    assert!(DEFAULT_WATERMARK_CORNER_MARGIN >= 0.0);

    // Fetch validation
    assert!(DEFAULT_FETCH_TIMEOUT_SECS >= MIN_FETCH_TIMEOUT_SECS);
    assert!(DEFAULT_FETCH_TIMEOUT_SECS <= MAX_FETCH_TIMEOUT_SECS);

    // Diagnostics validation
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
