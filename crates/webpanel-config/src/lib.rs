//! Panel configuration.
//!
//! Two inputs are handled here: the `panel` section of an extension
//! manifest (JSON), which becomes the declared panel defaults, and the
//! simulator settings file (TOML). Both use serde defaults so partial
//! documents load.

pub mod manifest;
pub mod settings;
pub mod validation;

pub use manifest::{load_manifest, parse_manifest, DeclaredPanel, ExtensionManifest, PanelManifest};
pub use settings::{load_settings, SimulatorSettings};
