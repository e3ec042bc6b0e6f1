//! TOML settings loading.

use std::path::Path;

use tracing::{info, warn};
use webpanel_common::ConfigError;

use super::paths::default_settings_path;
use super::SimulatorSettings;
use crate::validation;

/// Load settings from a specific TOML file.
///
/// Missing fields take their defaults. Out-of-range values are rejected.
pub fn load_from_path(path: &Path) -> Result<SimulatorSettings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let settings: SimulatorSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate_settings(&settings)?;

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from `path`, or from the platform default location.
///
/// An explicit path must exist. A missing default file yields defaults.
pub fn load_settings(path: Option<&Path>) -> Result<SimulatorSettings, ConfigError> {
    if let Some(path) = path {
        return load_from_path(path);
    }

    let path = match default_settings_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("{e}; using default settings");
            return Ok(SimulatorSettings::default());
        }
    };

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings at {}, using defaults", path.display());
            Ok(SimulatorSettings::default())
        }
        other => other,
    }
}
