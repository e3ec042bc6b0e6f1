//! Manifest types for the `panel` key.

use serde::{Deserialize, Serialize};
use webpanel_common::{ConfigError, Slot};

use crate::validation;

/// The subset of `manifest.json` this crate cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionManifest {
    pub name: String,
    pub version: Option<String>,
    pub panel: Option<PanelManifest>,
}

/// Options declared under the manifest's `panel` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelManifest {
    pub default_title: Option<String>,
    pub default_location: Option<String>,
    pub default_panel: Option<String>,
}

/// Validated panel defaults, ready to seed a panel controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredPanel {
    pub title: String,
    pub location: Slot,
    pub panel: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl PanelManifest {
    /// Validate the options and fill in the fallbacks.
    ///
    /// The title falls back to the extension name, the location to
    /// `after_browser`, and the panel URL to the empty string.
    pub fn declare(&self, extension_name: &str) -> Result<DeclaredPanel, ConfigError> {
        validation::validate_panel_manifest(self)?;

        let location = match non_empty(&self.default_location) {
            Some(name) => name.parse().map_err(ConfigError::ValidationError)?,
            None => Slot::default(),
        };

        Ok(DeclaredPanel {
            title: non_empty(&self.default_title)
                .unwrap_or(extension_name)
                .to_string(),
            location,
            panel: non_empty(&self.default_panel).unwrap_or("").to_string(),
        })
    }
}
