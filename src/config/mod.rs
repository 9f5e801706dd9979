// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving
//! site behavior tuning to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gallery]` - Responsive tiers and swipe threshold
//! - `[animation]` - Halftone grid, waves, palette and resize debounce
//! - `[avatar]` - Default avatar size
//! - `[scroll]` - Logo fade threshold
//! - `[diagnostics]` - Event buffer capacity
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use confsite::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.gallery.swipe_threshold = Some(80.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Lightbox gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Declared width identifying the medium responsive tier.
    #[serde(
        default = "default_medium_tier_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub medium_tier_width: Option<u32>,

    /// Declared width identifying the large responsive tier.
    #[serde(
        default = "default_large_tier_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub large_tier_width: Option<u32>,

    /// Viewport width from which the large tier is preferred.
    #[serde(
        default = "default_large_viewport_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub large_viewport_breakpoint: Option<u32>,

    /// Minimum horizontal touch displacement for a swipe.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            medium_tier_width: default_medium_tier_width(),
            large_tier_width: default_large_tier_width(),
            large_viewport_breakpoint: default_large_viewport_breakpoint(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

/// Halftone animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Dot columns.
    #[serde(default = "default_grid_cols", skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<u32>,

    /// Dot rows.
    #[serde(default = "default_grid_rows", skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<u32>,

    /// Dot radius in pixels.
    #[serde(default = "default_dot_size", skip_serializing_if = "Option::is_none")]
    pub dot_size: Option<f32>,

    /// Radial wave spatial frequency.
    #[serde(
        default = "default_wave_frequency",
        skip_serializing_if = "Option::is_none"
    )]
    pub wave_frequency: Option<f64>,

    /// Radial wave amplitude.
    #[serde(
        default = "default_wave_amplitude",
        skip_serializing_if = "Option::is_none"
    )]
    pub wave_amplitude: Option<f64>,

    /// Time advance per frame.
    #[serde(
        default = "default_animation_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_speed: Option<f64>,

    /// Resize quiet period in milliseconds.
    #[serde(
        default = "default_resize_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_debounce_ms: Option<u64>,

    /// Background fill colour (`#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Dot colours (`#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            grid_cols: default_grid_cols(),
            grid_rows: default_grid_rows(),
            dot_size: default_dot_size(),
            wave_frequency: default_wave_frequency(),
            wave_amplitude: default_wave_amplitude(),
            animation_speed: default_animation_speed(),
            resize_debounce_ms: default_resize_debounce_ms(),
            background_color: None,
            palette: None,
        }
    }
}

/// Pixel avatar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvatarConfig {
    /// Rendered size in pixels when the caller does not specify one.
    #[serde(default = "default_avatar_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: default_avatar_size(),
        }
    }
}

/// Scroll-driven logo fading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Offset under which the logo always stays visible.
    #[serde(
        default = "default_logo_fade_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_fade_threshold: Option<f32>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            logo_fade_threshold: default_logo_fade_threshold(),
        }
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(
        default = "default_diagnostics_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_diagnostics_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Site behavior configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub avatar: AvatarConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_medium_tier_width() -> Option<u32> {
    Some(DEFAULT_MEDIUM_TIER_WIDTH)
}

fn default_large_tier_width() -> Option<u32> {
    Some(DEFAULT_LARGE_TIER_WIDTH)
}

fn default_large_viewport_breakpoint() -> Option<u32> {
    Some(DEFAULT_LARGE_VIEWPORT_BREAKPOINT)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_grid_cols() -> Option<u32> {
    Some(DEFAULT_GRID_COLS)
}

fn default_grid_rows() -> Option<u32> {
    Some(DEFAULT_GRID_ROWS)
}

fn default_dot_size() -> Option<f32> {
    Some(DEFAULT_DOT_SIZE)
}

fn default_wave_frequency() -> Option<f64> {
    Some(DEFAULT_WAVE_FREQUENCY)
}

fn default_wave_amplitude() -> Option<f64> {
    Some(DEFAULT_WAVE_AMPLITUDE)
}

fn default_animation_speed() -> Option<f64> {
    Some(DEFAULT_ANIMATION_SPEED)
}

fn default_resize_debounce_ms() -> Option<u64> {
    Some(DEFAULT_RESIZE_DEBOUNCE_MS)
}

fn default_avatar_size() -> Option<u32> {
    Some(DEFAULT_AVATAR_SIZE)
}

fn default_logo_fade_threshold() -> Option<f32> {
    Some(DEFAULT_LOGO_FADE_THRESHOLD)
}

fn default_diagnostics_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
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
    let content = toml::to_string_pretty(config)?;
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
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.gallery.swipe_threshold = Some(75.0);
        config.animation.palette = Some(vec!["#ffffff".to_string()]);
        config.avatar.size = Some(128);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\nswipe_threshold = 30.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.gallery.swipe_threshold, Some(30.0));
        assert_eq!(
            loaded.gallery.medium_tier_width,
            Some(DEFAULT_MEDIUM_TIER_WIDTH)
        );
        assert_eq!(loaded.animation, AnimationConfig::default());
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save failed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
