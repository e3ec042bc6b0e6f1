use std::path::PathBuf;

use webpanel_common::ConfigError;

/// Platform-specific default settings path, e.g. `~/.config/webpanel/config.toml`.
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("webpanel").join("config.toml"))
}
