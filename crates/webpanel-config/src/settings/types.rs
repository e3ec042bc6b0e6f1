//! Simulator settings schema.

use serde::{Deserialize, Serialize};

/// Top-level settings for the `webpanel` simulator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    pub extension: ExtensionSettings,
    pub browser: BrowserSettings,
    pub logging: LoggingSettings,
}

/// The extension being simulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionSettings {
    pub id: String,
    /// Path to `manifest.json`. When unset, an empty `panel` section is assumed.
    pub manifest: Option<String>,
    /// Install root that relative panel URLs resolve against.
    pub base_url: String,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            id: "panel@example.com".to_string(),
            manifest: None,
            base_url: "moz-extension://panel-example/".to_string(),
        }
    }
}

/// Shape of the simulated browser session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub windows: u32,
    pub tabs_per_window: u32,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            windows: 2,
            tabs_per_window: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `--log-level` is not given.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "webpanel=info".to_string(),
        }
    }
}
