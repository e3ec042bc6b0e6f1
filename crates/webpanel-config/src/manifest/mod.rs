//! Extension manifest loading and panel declaration.

mod loader;
mod types;

pub use loader::{load_manifest, parse_manifest};
pub use types::{DeclaredPanel, ExtensionManifest, PanelManifest};
