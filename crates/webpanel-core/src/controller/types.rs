use url::Url;
use webpanel_common::{ConfigError, ExtensionId};

/// What the controller needs to know about the extension that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    pub id: ExtensionId,
    /// Display name, used when the panel has no title.
    pub name: String,
    /// Root against which relative panel paths resolve.
    pub base_url: Url,
}

impl ExtensionInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConfigError::ValidationError(format!("extension base url '{base_url}': {e}"))
        })?;
        Ok(Self {
            id: ExtensionId::new(id),
            name: name.into(),
            base_url,
        })
    }
}
