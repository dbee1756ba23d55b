//! Application configuration for KeypadKit
//!
//! Tool-level preferences that are not part of any design, stored as TOML
//! in the platform configuration directory:
//!
//! - Export settings (output directory, overwrite policy, JSON layout)
//! - Render settings (font family)
//! - Display settings (measurement system for summaries)

use crate::error::{SettingsError, SettingsResult};
use keypadkit_core::MeasurementSystem;
use keypadkit_designer::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "keypadkit";
const CONFIG_FILE: &str = "config.toml";

/// Export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory for generated files when no explicit path is given
    pub output_directory: PathBuf,
    /// Replace existing files without asking
    pub overwrite_existing: bool,
    /// Indent saved configuration documents
    pub pretty_json: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            overwrite_existing: false,
            pretty_json: true,
        }
    }
}

/// Render preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// CSS font-family list for button labels
    pub font_family: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            font_family: RenderOptions::default().font_family,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplaySettings {
    pub measurement_system: MeasurementSystem,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub export: ExportSettings,
    pub render: RenderSettings,
    pub display: DisplaySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/keypadkit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
            })
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to a TOML file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.render.font_family.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "render.font_family".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.export.output_directory.as_os_str().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "export.output_directory".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render options derived from the render settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            font_family: self.render.font_family.clone(),
        }
    }

    /// Resolve a file name inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.export.output_directory.join(file_name)
    }
}
