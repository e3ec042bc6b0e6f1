//! Validation for manifest panel options and simulator settings.
//!
//! Each validator collects every problem before failing, so a single
//! `ConfigError` reports all of them.

mod helpers;

#[cfg(test)]
mod tests;

use webpanel_common::{ConfigError, Slot};

use crate::manifest::PanelManifest;
use crate::settings::SimulatorSettings;
use helpers::{validate_range, validate_url};

/// Placeholder base used to check that a relative panel path can be resolved.
const RESOLVE_BASE: &str = "moz-extension://validation/";

pub fn validate_panel_manifest(options: &PanelManifest) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Some(location) = options.default_location.as_deref().filter(|s| !s.is_empty()) {
        if let Err(e) = location.parse::<Slot>() {
            errors.push(format!("panel.default_location: {e}"));
        }
    }

    if let Some(panel) = options.default_panel.as_deref().filter(|s| !s.is_empty()) {
        let resolved = url::Url::parse(RESOLVE_BASE).and_then(|base| base.join(panel));
        if let Err(e) = resolved {
            errors.push(format!("panel.default_panel = '{panel}' cannot be resolved: {e}"));
        }
    }

    finish(errors)
}

pub fn validate_settings(settings: &SimulatorSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "browser.windows", settings.browser.windows, 1, 32);
    validate_range(
        &mut errors,
        "browser.tabs_per_window",
        settings.browser.tabs_per_window,
        1,
        64,
    );
    validate_url(&mut errors, "extension.base_url", &settings.extension.base_url);
    if settings.extension.id.trim().is_empty() {
        errors.push("extension.id must not be empty".to_string());
    }

    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
