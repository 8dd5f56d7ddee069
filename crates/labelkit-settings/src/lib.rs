//! LabelKit Settings Crate
//!
//! Designer configuration: grid snapping, nudge steps, canvas size and the
//! layout storage directory, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, DesignerSettings, StorageSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
