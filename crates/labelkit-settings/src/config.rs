//! Configuration for the label designer
//!
//! Supports JSON and TOML files, chosen by file extension. Sections:
//! - Designer behaviour (grid snapping, keyboard nudge steps)
//! - Canvas size for newly created layouts
//! - Storage location of saved layouts

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "labelkit";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Designer behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Round dragged and resized geometry to the 10-unit grid
    pub snap_to_grid: bool,
    /// Arrow-key nudge distance
    pub nudge_step: i32,
    /// Arrow-key nudge distance with the large-step modifier held
    pub nudge_step_large: i32,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            nudge_step: 1,
            nudge_step_large: 10,
        }
    }
}

/// Canvas size used for new layouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
        }
    }
}

/// Where layouts are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one JSON file per layout. `None` uses the platform
    /// data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layouts_dir: Option<PathBuf>,
}

impl StorageSettings {
    /// The configured directory, or `<data dir>/labelkit/layouts`.
    pub fn resolved_layouts_dir(&self) -> SettingsResult<PathBuf> {
        if let Some(dir) = &self.layouts_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME).join("layouts"))
            .ok_or_else(|| SettingsError::ConfigDirectory("no platform data directory".to_string()))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub designer: DesignerSettings,
    pub canvas: CanvasSettings,
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/labelkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width <= 0 {
            return Err(out_of_range("canvas.width", self.canvas.width));
        }
        if self.canvas.height <= 0 {
            return Err(out_of_range("canvas.height", self.canvas.height));
        }
        if self.designer.nudge_step <= 0 {
            return Err(SettingsError::invalid("designer.nudge_step", "must be positive"));
        }
        if self.designer.nudge_step_large <= 0 {
            return Err(SettingsError::invalid(
                "designer.nudge_step_large",
                "must be positive",
            ));
        }
        Ok(())
    }
}

fn out_of_range(key: &str, value: i32) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}
