use std::path::Path;

use tracing::info;
use webpanel_common::ConfigError;

use super::ExtensionManifest;

/// Parse a manifest from its JSON text.
pub fn parse_manifest(json: &str) -> Result<ExtensionManifest, ConfigError> {
    serde_json::from_str(json)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse manifest: {e}")))
}

/// Read and parse a `manifest.json` from disk.
pub fn load_manifest(path: &Path) -> Result<ExtensionManifest, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let manifest = parse_manifest(&content)?;
    info!(
        name = %manifest.name,
        has_panel = manifest.panel.is_some(),
        "loaded manifest from {}",
        path.display()
    );
    Ok(manifest)
}
