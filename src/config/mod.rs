// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[rotation]` - Frame count, auto-rotate, drag threshold, tick period
//! - `[zoom]` - Zoom steps for the windowed and fullscreen views
//! - `[frames]` - Frame URL template and cache size
//! - `[fullscreen]` - Whether the fullscreen control is offered
//!
//! Every section is optional; missing keys take their defaults from
//! [`defaults`]. Out-of-range numbers are clamped by the validated newtypes
//! returned from the accessor methods.
//!
//! # Examples
//!
//! ```no_run
//! use iced_turntable::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} frames", config.rotation.frame_count);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::frame::FrameCount;
use crate::domain::ui::{AutoRotatePeriod, DragStepThreshold, FrameCacheCapacity, ZoomStep};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Rotation behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    /// Number of frames of an object.
    pub frame_count: u32,
    /// Start auto-rotating when a viewer is mounted.
    pub auto_rotate: bool,
    /// Pixels of horizontal drag per frame step.
    pub drag_threshold_px: f32,
    /// Milliseconds between auto-rotate steps.
    pub auto_rotate_period_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            auto_rotate: false,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            auto_rotate_period_ms: DEFAULT_AUTO_ROTATE_PERIOD_MS,
        }
    }
}

impl RotationConfig {
    #[must_use]
    pub fn frame_count(&self) -> FrameCount {
        FrameCount::new(self.frame_count)
    }

    #[must_use]
    pub fn drag_threshold(&self) -> DragStepThreshold {
        DragStepThreshold::new(self.drag_threshold_px)
    }

    #[must_use]
    pub fn auto_rotate_period(&self) -> AutoRotatePeriod {
        AutoRotatePeriod::new(self.auto_rotate_period_ms)
    }
}

/// Zoom steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    /// Zoom step while windowed.
    pub step: f32,
    /// Zoom step while fullscreen.
    pub gallery_step: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
            gallery_step: DEFAULT_GALLERY_ZOOM_STEP,
        }
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn step(&self) -> ZoomStep {
        ZoomStep::new(self.step)
    }

    #[must_use]
    pub fn gallery_step(&self) -> ZoomStep {
        ZoomStep::new(self.gallery_step)
    }
}

/// Frame image locations and caching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FramesConfig {
    /// Template resolved per frame (`{object}`, `{index}`, `{index:0W}`).
    pub url_template: String,
    /// Decoded frames kept in memory.
    pub cache_capacity: usize,
}

impl Default for FramesConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            cache_capacity: DEFAULT_FRAME_CACHE_CAPACITY,
        }
    }
}

impl FramesConfig {
    #[must_use]
    pub fn cache_capacity(&self) -> FrameCacheCapacity {
        FrameCacheCapacity::new(self.cache_capacity)
    }
}

/// Fullscreen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Offer the fullscreen control.
    pub allow: bool,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self { allow: true }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub rotation: RotationConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub frames: FramesConfig,

    #[serde(default)]
    pub fullscreen: FullscreenConfig,
}

// =============================================================================
// Load/Save Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning_key). A malformed file
/// yields the defaults and the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    eprintln!("[WARN] Ignoring {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("[rotation]\nframe_count = 24\n")
            .expect("partial config should parse");
        assert_eq!(config.rotation.frame_count, 24);
        assert_eq!(config.rotation.auto_rotate_period_ms, DEFAULT_AUTO_ROTATE_PERIOD_MS);
        assert_eq!(config.zoom, ZoomConfig::default());
        assert!(config.fullscreen.allow);
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let config: Config = toml::from_str(
            "[rotation]\nframe_count = 0\ndrag_threshold_px = 0.0\nauto_rotate_period_ms = 1\n\
             [frames]\ncache_capacity = 1\n",
        )
        .expect("config should parse");
        assert_eq!(config.rotation.frame_count().get(), 1);
        assert_eq!(config.rotation.drag_threshold().value(), 1.0);
        assert_eq!(config.rotation.auto_rotate_period().millis(), 16);
        assert_eq!(config.frames.cache_capacity().value(), 8);
    }

    #[test]
    fn nan_values_use_defaults() {
        let config: Config =
            toml::from_str("[rotation]\ndrag_threshold_px = nan\n[zoom]\nstep = nan\n")
                .expect("nan is valid toml");
        assert_eq!(config.rotation.drag_threshold(), DragStepThreshold::default());
        assert_eq!(config.zoom.step(), ZoomStep::default());
    }

    #[test]
    fn save_then_load_from_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            rotation: RotationConfig {
                auto_rotate: true,
                ..RotationConfig::default()
            },
            ..Config::default()
        };

        save_to_path(&config, &config_path).expect("save should succeed");
        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[rotation\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
