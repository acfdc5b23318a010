// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Which listing file to display
//! - `[photos]` - Photo cache and fetch limits
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_RENTALS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_rentals::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Listing source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// Listing file to display. Relative paths resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Photo loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotosConfig {
    /// Number of decoded photos kept in memory.
    #[serde(
        default = "default_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,

    /// Largest accepted photo payload in bytes.
    #[serde(default = "default_max_bytes", skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<usize>,

    /// Timeout of a single fetch, in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            max_bytes: default_max_bytes(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PhotosConfig {
    /// Cache capacity clamped to the supported range.
    #[must_use]
    pub fn effective_cache_capacity(&self) -> usize {
        self.cache_capacity
            .unwrap_or(DEFAULT_PHOTO_CACHE_CAPACITY)
            .clamp(MIN_PHOTO_CACHE_CAPACITY, MAX_PHOTO_CACHE_CAPACITY)
    }

    /// Payload limit clamped to the supported range.
    #[must_use]
    pub fn effective_max_bytes(&self) -> usize {
        self.max_bytes
            .unwrap_or(DEFAULT_PHOTO_MAX_BYTES)
            .clamp(MIN_PHOTO_MAX_BYTES, MAX_PHOTO_MAX_BYTES)
    }

    /// Fetch timeout clamped to the supported range.
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(DEFAULT_PHOTO_TIMEOUT_SECS)
                .clamp(MIN_PHOTO_TIMEOUT_SECS, MAX_PHOTO_TIMEOUT_SECS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub photos: PhotosConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_PHOTO_CACHE_CAPACITY)
}

fn default_max_bytes() -> Option<usize> {
    Some(DEFAULT_PHOTO_MAX_BYTES)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_PHOTO_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>()
        .map_err(|_| D::Error::custom(format!("invalid theme_mode: {}", raw)))
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

/// Resolves the listing file to display.
///
/// A configured relative path is taken relative to the config directory. Without
/// a configured path, `apartment.toml` in the config directory is used when it exists.
#[must_use]
pub fn resolve_catalog_path(config: &Config, base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let config_dir = paths::get_app_config_dir_with_override(base_dir);

    match &config.catalog.path {
        Some(path) if path.is_absolute() => Some(path.clone()),
        Some(path) => config_dir.map(|dir| dir.join(path)),
        None => config_dir
            .map(|dir| dir.join(DEFAULT_CATALOG_FILE))
            .filter(|path| path.exists()),
    }
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
                    log::warn!("Ignoring {}: {}", path.display(), err);
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
    Ok(toml::from_str(&content)?)
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
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            catalog: CatalogConfig {
                path: Some(PathBuf::from("listings/loft.toml")),
            },
            photos: PhotosConfig {
                cache_capacity: Some(8),
                max_bytes: Some(1024 * 1024),
                timeout_secs: Some(5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_returns_default_and_warning_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.photos, PhotosConfig::default());
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn photo_limits_are_clamped() {
        let photos = PhotosConfig {
            cache_capacity: Some(0),
            max_bytes: Some(usize::MAX),
            timeout_secs: Some(0),
        };
        assert_eq!(photos.effective_cache_capacity(), MIN_PHOTO_CACHE_CAPACITY);
        assert_eq!(photos.effective_max_bytes(), MAX_PHOTO_MAX_BYTES);
        assert_eq!(
            photos.effective_timeout(),
            Duration::from_secs(MIN_PHOTO_TIMEOUT_SECS)
        );
    }

    #[test]
    fn relative_catalog_path_resolves_against_config_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            catalog: CatalogConfig {
                path: Some(PathBuf::from("loft.toml")),
            },
            ..Config::default()
        };

        let resolved = resolve_catalog_path(&config, Some(temp_dir.path().to_path_buf()));
        assert_eq!(resolved, Some(temp_dir.path().join("loft.toml")));
    }

    #[test]
    fn default_catalog_file_is_used_only_when_present() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let config = Config::default();

        assert!(resolve_catalog_path(&config, base.clone()).is_none());

        fs::write(temp_dir.path().join(DEFAULT_CATALOG_FILE), "").expect("write");
        assert_eq!(
            resolve_catalog_path(&config, base),
            Some(temp_dir.path().join(DEFAULT_CATALOG_FILE))
        );
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
