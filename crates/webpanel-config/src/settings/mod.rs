//! Settings for the command-line simulator.

mod loader;
mod paths;
mod types;

pub use loader::{load_from_path, load_settings};
pub use paths::default_settings_path;
pub use types::{BrowserSettings, ExtensionSettings, LoggingSettings, SimulatorSettings};

#[cfg(test)]
mod tests {
    use super::*;
    use webpanel_common::ConfigError;

    #[test]
    fn defaults() {
        let settings = SimulatorSettings::default();
        assert_eq!(settings.browser.windows, 2);
        assert_eq!(settings.browser.tabs_per_window, 1);
        assert_eq!(settings.logging.level, "webpanel=info");
        assert!(settings.extension.manifest.is_none());
    }

    #[test]
    fn load_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[browser]
windows = 3

[extension]
id = "notes@example.org"
"#,
        )
        .unwrap();

        let settings = load_from_path(&path).unwrap();
        assert_eq!(settings.browser.windows, 3);
        assert_eq!(settings.extension.id, "notes@example.org");
        // Defaults preserved
        assert_eq!(settings.browser.tabs_per_window, 1);
        assert_eq!(settings.extension.base_url, "moz-extension://panel-example/");
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browser]\nwindows = 0\n").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_settings(Some(std::path::Path::new(
            "/tmp/nonexistent_webpanel_config.toml",
        )))
        .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        if let Ok(path) = default_settings_path() {
            assert!(path.ends_with("webpanel/config.toml"));
        }
    }
}
