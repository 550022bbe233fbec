// SPDX-License-Identifier: MPL-2.0
//! Editor configuration persisted as `settings.toml`.
//!
//! The file is organized into sections:
//! - `[surface]`: Work-surface size, fit ratio and background
//! - `[border]`: Border defaults applied when a border style is chosen
//! - `[watermark]`: Text and image watermark defaults
//! - `[fetch]`: Remote fetching (page origin, timeout)
//!
//! # Directory Resolution
//!
//! 1. Explicit override passed to the `_with_override()` functions
//! 2. `STUDIO_LENS_CONFIG_DIR` environment variable (if set and non-empty)
//! 3. Platform config directory with `StudioLens` appended
//!
//! # Examples
//!
//! ```no_run
//! use studio_lens::config;
//!
//! let (mut config, _warning) = config::load();
//! config.border.width = 12.0;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::editing::Color;
use crate::domain::geometry::Size;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StudioLens";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "STUDIO_LENS_CONFIG_DIR";

/// Notice key returned when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notice-config-load-error";

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub fit_ratio: f32,
    pub background: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            fit_ratio: DEFAULT_FIT_RATIO,
            background: Color::WHITE,
        }
    }
}

impl SurfaceConfig {
    /// Surface size with each dimension clamped to the accepted range.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::from_pixels(
            self.width.clamp(MIN_SURFACE_DIMENSION, MAX_SURFACE_DIMENSION),
            self.height.clamp(MIN_SURFACE_DIMENSION, MAX_SURFACE_DIMENSION),
        )
    }

    /// Fit ratio clamped to the accepted range.
    #[must_use]
    pub fn fit_ratio(&self) -> f32 {
        if self.fit_ratio.is_finite() {
            self.fit_ratio.clamp(MIN_FIT_RATIO, MAX_FIT_RATIO)
        } else {
            DEFAULT_FIT_RATIO
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub width: f32,
    pub color: Color,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BORDER_WIDTH,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    pub font_size: f32,
    pub color: Color,
    pub opacity: f32,
    /// Image watermark size relative to its natural size.
    pub image_scale: f32,
    /// Gap between an image watermark and the bottom-right surface corner.
    pub corner_margin: f32,
    /// Font file for text watermarks; system fonts are tried when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_WATERMARK_FONT_SIZE,
            color: Color::BLACK,
            opacity: DEFAULT_WATERMARK_OPACITY,
            image_scale: DEFAULT_WATERMARK_IMAGE_SCALE,
            corner_margin: DEFAULT_WATERMARK_CORNER_MARGIN,
            font_path: None,
        }
    }
}

impl WatermarkConfig {
    #[must_use]
    pub fn image_scale(&self) -> f32 {
        if self.image_scale.is_finite() {
            self.image_scale
                .clamp(MIN_WATERMARK_IMAGE_SCALE, MAX_WATERMARK_IMAGE_SCALE)
        } else {
            DEFAULT_WATERMARK_IMAGE_SCALE
        }
    }

    #[must_use]
    pub fn corner_margin(&self) -> f32 {
        if self.corner_margin.is_finite() {
            self.corner_margin.max(0.0)
        } else {
            DEFAULT_WATERMARK_CORNER_MARGIN
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Page origin sent with remote requests. Unset means same-origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            origin: None,
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .clamp(MIN_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS),
        )
    }
}

/// Complete editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub border: BorderConfig,
    pub watermark: WatermarkConfig,
    pub fetch: FetchConfig,
}

// =============================================================================
// Paths
// =============================================================================

/// Returns the config directory, honoring the override and environment.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults plus
/// [`CONFIG_LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(e) => {
                    log::warn!("Ignoring {}: {e}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(Error::from)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific file, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
