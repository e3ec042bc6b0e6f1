//! `panels.setPanel` / `panels.getPanel` as seen from an extension context.

use std::future::{ready, Ready};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;
use webpanel_chrome::BrowserHost;
use webpanel_common::{ExtensionId, PanelError, PanelProperty, PropertyValue, Slot, TabId};

use crate::registry::PanelRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetPanelDetails {
    pub tab_id: Option<TabId>,
    pub panel: Option<String>,
    pub location: Option<Slot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetPanelDetails {
    pub tab_id: Option<TabId>,
}

/// API bound to one calling extension context.
#[derive(Debug, Clone)]
pub struct PanelsApi {
    extension: ExtensionId,
    context_url: Url,
}

impl PanelsApi {
    /// `context_url` is the URL of the calling document; relative panel
    /// paths resolve against it.
    pub fn new(extension: ExtensionId, context_url: Url) -> Self {
        Self {
            extension,
            context_url,
        }
    }

    pub fn extension(&self) -> &ExtensionId {
        &self.extension
    }

    /// Set the panel document and, optionally, its location.
    ///
    /// A missing `panel` clears the override (or restores the declared
    /// default without a tab).
    pub fn set_panel<H: BrowserHost + ?Sized>(
        &self,
        registry: &mut PanelRegistry,
        host: &mut H,
        details: SetPanelDetails,
    ) -> Result<(), PanelError> {
        let controller = registry
            .get_mut(&self.extension)
            .ok_or_else(|| PanelError::NotRegistered(self.extension.clone()))?;

        let panel = details.panel.map(|p| self.resolve(&p));
        debug!(extension = %self.extension, tab = ?details.tab_id, ?panel, "setPanel");
        controller.set(
            host,
            details.tab_id,
            PanelProperty::Panel,
            panel.map(PropertyValue::from),
        )?;
        if let Some(location) = details.location {
            controller.set(
                host,
                details.tab_id,
                PanelProperty::Location,
                Some(location.into()),
            )?;
        }
        Ok(())
    }

    /// The panel URL in effect for the tab (or the default), resolved
    /// against the extension base URL.
    pub fn get_panel(
        &self,
        registry: &mut PanelRegistry,
        details: GetPanelDetails,
    ) -> Ready<Result<String, PanelError>> {
        let Some(controller) = registry.get_mut(&self.extension) else {
            return ready(Err(PanelError::NotRegistered(self.extension.clone())));
        };
        let panel = controller.effective(details.tab_id).panel;
        ready(Ok(controller.resolve_panel(&panel)))
    }

    fn resolve(&self, panel: &str) -> String {
        if panel.is_empty() {
            return String::new();
        }
        match self.context_url.join(panel) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(
                    extension = %self.extension,
                    panel,
                    error = %e,
                    "panel path does not resolve against the calling context, using it as-is"
                );
                panel.to_string()
            }
        }
    }
}
