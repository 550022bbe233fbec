// SPDX-License-Identifier: MPL-2.0
//! `studio_lens` is a headless photo editor for studio sessions.
//!
//! It loads a session's photos onto a fixed-size work surface, layers
//! adjustments, stylistic filters, frames, borders and watermarks over them,
//! crops and rotates, and commits the composed result as a PNG data URL to
//! the embedding host.

#![doc(html_root_url = "https://docs.rs/studio_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod editor;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod notifications;

#[cfg(test)]
mod test_utils;
