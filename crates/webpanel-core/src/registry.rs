use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};
use webpanel_chrome::{BrowserHost, TabSelected};
use webpanel_common::{ConfigError, EventBus, ExtensionId, PanelEvent, ShutdownReason, TabId};
use webpanel_config::PanelManifest;

use crate::controller::{ExtensionInfo, PanelController};
use crate::sync::SyncReport;

/// Process-wide map from extension to its panel controller.
///
/// Consumes the extension lifecycle ("panel declared", "extension shutdown")
/// and fans host tab events out to the controllers.
pub struct PanelRegistry {
    panels: HashMap<ExtensionId, PanelController>,
    events: Arc<EventBus>,
}

impl PanelRegistry {
    pub fn new(events: Arc<EventBus>) -> Self {
        Self {
            panels: HashMap::new(),
            events,
        }
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// An extension declared a panel in its manifest.
    ///
    /// Invalid options register nothing. Redeclaring shuts the previous
    /// controller down before replacing it.
    pub fn on_panel_declared<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        extension: ExtensionInfo,
        manifest: &PanelManifest,
    ) -> Result<SyncReport, ConfigError> {
        let mut controller =
            PanelController::from_manifest(extension, manifest, Arc::clone(&self.events))?;
        let id = controller.id().clone();

        if let Some(mut previous) = self.panels.remove(&id) {
            debug!(extension = %id, "panel redeclared, replacing controller");
            previous.shutdown(host);
        }

        let report = controller.build(host);
        self.panels.insert(id.clone(), controller);
        info!(extension = %id, "panel registered");
        self.events.publish(PanelEvent::PanelRegistered(id));
        Ok(report)
    }

    /// An extension is going away. Surfaces are left in place when the whole
    /// application is shutting down.
    ///
    /// Returns `false` if no panel was registered.
    pub fn on_extension_shutdown<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        id: &ExtensionId,
        reason: ShutdownReason,
    ) -> bool {
        let Some(mut controller) = self.panels.remove(id) else {
            return false;
        };
        if reason.is_app_shutdown() {
            debug!(extension = %id, "application shutdown, keeping surfaces");
        } else {
            controller.shutdown(host);
        }
        info!(extension = %id, ?reason, "panel unregistered");
        self.events.publish(PanelEvent::PanelUnregistered(id.clone()));
        true
    }

    /// Route a tab-select event to every controller it was delivered to.
    ///
    /// Returns the number of controllers that refreshed.
    pub fn on_tab_selected<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &TabSelected,
    ) -> usize {
        self.panels
            .values_mut()
            .filter_map(|controller| controller.on_tab_selected(host, event))
            .count()
    }

    pub fn on_tab_closed(&mut self, tab: TabId) {
        for controller in self.panels.values_mut() {
            controller.on_tab_closed(tab);
        }
    }

    pub fn get(&self, id: &ExtensionId) -> Option<&PanelController> {
        self.panels.get(id)
    }

    pub fn get_mut(&mut self, id: &ExtensionId) -> Option<&mut PanelController> {
        self.panels.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<ExtensionId> {
        let mut ids: Vec<_> = self.panels.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new(Arc::new(EventBus::default()))
    }
}
