// SPDX-License-Identifier: MPL-2.0
//! This module handles banner configuration, including loading and saving
//! timing and drag tuning to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Default display duration and animation lengths
//! - `[drag]` - Fling threshold and rubber-band damping
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a base directory to `load_with_override()`
//! 3. Set `ICED_SHOUT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_shout::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the slide animations down
//! config.timing.present_animation_secs = Some(0.5);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{AnimationDuration, DisplayDuration, RubberBandDamping};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedShout";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHOUT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Display and animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Display duration used by announcements built without an explicit one.
    #[serde(default = "default_display_secs", skip_serializing_if = "Option::is_none")]
    pub display_secs: Option<f64>,

    /// Slide-in and slide-out duration.
    #[serde(
        default = "default_present_animation_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub present_animation_secs: Option<f64>,

    /// Settle duration when a drag is released.
    #[serde(
        default = "default_drag_settle_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_settle_secs: Option<f64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
            present_animation_secs: default_present_animation_secs(),
            drag_settle_secs: default_drag_settle_secs(),
        }
    }
}

/// Drag gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DragConfig {
    /// Upward distance past which releasing dismisses the banner.
    #[serde(
        default = "default_fling_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub fling_threshold: Option<f32>,

    /// Divisor applied when pulling past full expansion.
    #[serde(
        default = "default_rubber_band_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub rubber_band_damping: Option<f32>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            fling_threshold: default_fling_threshold(),
            rubber_band_damping: default_rubber_band_damping(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub drag: DragConfig,
}

impl Config {
    /// Resolves the optional settings into validated tuning values.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        Tuning {
            display: self
                .timing
                .display_secs
                .map(DisplayDuration::new)
                .unwrap_or_default(),
            present_animation: self
                .timing
                .present_animation_secs
                .map(AnimationDuration::new)
                .unwrap_or_default(),
            drag_settle: AnimationDuration::new(
                self.timing
                    .drag_settle_secs
                    .unwrap_or(DEFAULT_DRAG_SETTLE_SECS),
            ),
            fling_threshold: self
                .drag
                .fling_threshold
                .filter(|value| value.is_finite())
                .map_or(DEFAULT_FLING_THRESHOLD, |value| value.max(0.0)),
            rubber_band: self
                .drag
                .rubber_band_damping
                .map(RubberBandDamping::new)
                .unwrap_or_default(),
        }
    }
}

/// Validated timing and drag values consumed by the banner controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub display: DisplayDuration,
    pub present_animation: AnimationDuration,
    pub drag_settle: AnimationDuration,
    pub fling_threshold: f32,
    pub rubber_band: RubberBandDamping,
}

impl Default for Tuning {
    fn default() -> Self {
        Config::default().tuning()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_display_secs() -> Option<f64> {
    Some(DEFAULT_DISPLAY_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_present_animation_secs() -> Option<f64> {
    Some(DEFAULT_PRESENT_ANIMATION_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_drag_settle_secs() -> Option<f64> {
    Some(DEFAULT_DRAG_SETTLE_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_fling_threshold() -> Option<f32> {
    Some(DEFAULT_FLING_THRESHOLD)
}

#[allow(clippy::unnecessary_wraps)]
fn default_rubber_band_damping() -> Option<f32> {
    Some(DEFAULT_RUBBER_BAND_DAMPING)
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Returns the config file path, honoring an explicit base directory first,
/// then `ICED_SHOUT_CONFIG_DIR`, then the platform config directory.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })?;
    Some(dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
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
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
