use std::sync::Arc;

use tracing::{debug, info, warn};
use webpanel_chrome::{BrowserHost, TabSelected};
use webpanel_common::{
    ConfigError, EventBus, ExtensionId, PanelError, PanelProperty, PropertyValue, SubscriptionId,
    TabId, WindowId,
};
use webpanel_config::{DeclaredPanel, PanelManifest};

use super::types::ExtensionInfo;
use crate::store::{DefaultsRecord, EffectiveProperties, OverrideStore};
use crate::surface::SurfaceFactory;
use crate::sync::{SyncReport, WindowSynchronizer};

/// Owns one extension's panel: its property store, its surfaces in every
/// window and its tab-select subscription.
#[derive(Debug)]
pub struct PanelController {
    extension: ExtensionInfo,
    store: OverrideStore,
    factory: SurfaceFactory,
    sync: WindowSynchronizer,
    subscription: Option<SubscriptionId>,
}

impl PanelController {
    pub fn new(extension: ExtensionInfo, declared: DeclaredPanel, events: Arc<EventBus>) -> Self {
        let factory = SurfaceFactory::new(extension.id.surface_id(), extension.name.clone());
        let sync = WindowSynchronizer::new(
            extension.id.clone(),
            extension.base_url.clone(),
            events,
        );
        Self {
            store: OverrideStore::new(declared),
            factory,
            sync,
            subscription: None,
            extension,
        }
    }

    /// Validate manifest options and construct a controller from them.
    pub fn from_manifest(
        extension: ExtensionInfo,
        manifest: &PanelManifest,
        events: Arc<EventBus>,
    ) -> Result<Self, ConfigError> {
        let declared = manifest.declare(&extension.name)?;
        Ok(Self::new(extension, declared, events))
    }

    pub fn extension(&self) -> &ExtensionInfo {
        &self.extension
    }

    pub fn id(&self) -> &ExtensionId {
        &self.extension.id
    }

    pub fn surface_id(&self) -> &str {
        self.factory.surface_id()
    }

    pub fn content_host_id(&self) -> &str {
        self.factory.content_host_id()
    }

    pub fn defaults(&self) -> &DefaultsRecord {
        self.store.defaults()
    }

    pub fn store(&self) -> &OverrideStore {
        &self.store
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Resolve a panel path against the extension base URL.
    pub fn resolve_panel(&self, panel: &str) -> String {
        self.sync.resolve(panel)
    }

    /// Subscribe to tab selection and materialize the panel in every window.
    pub fn build<H: BrowserHost + ?Sized>(&mut self, host: &mut H) -> SyncReport {
        if self.subscription.is_none() {
            self.subscription = Some(host.subscribe_tab_select());
        }
        let report = self.sync.refresh_all(host, &mut self.store, &self.factory);
        info!(
            extension = %self.extension.id,
            updated = report.updated.len(),
            failed = report.failed.len(),
            "panel built"
        );
        report
    }

    /// Unsubscribe, remove every surface and discard all tab state.
    ///
    /// Calling it twice, or before `build`, does nothing harmful.
    pub fn shutdown<H: BrowserHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(subscription) = self.subscription.take() {
            if !host.unsubscribe_tab_select(subscription) {
                warn!(extension = %self.extension.id, "tab-select subscription was already gone");
            }
        }
        let removed = self.sync.remove_all(host, &self.factory);
        self.store.clear();
        debug!(extension = %self.extension.id, windows = removed.len(), "panel shut down");
    }

    /// Write a property by wire name. `None` clears the override (or restores
    /// the declared default when `tab` is `None`).
    pub fn set_property<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        tab: Option<TabId>,
        name: &str,
        value: Option<PropertyValue>,
    ) -> Result<SyncReport, PanelError> {
        let property: PanelProperty = name.parse()?;
        self.set(host, tab, property, value)
    }

    pub fn set<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        tab: Option<TabId>,
        property: PanelProperty,
        value: Option<PropertyValue>,
    ) -> Result<SyncReport, PanelError> {
        self.store.set(tab, property, value)?;
        Ok(self.update_on_change(host, tab))
    }

    /// Read a property by wire name for `tab`, or the default when `None`.
    pub fn get_property(
        &mut self,
        tab: Option<TabId>,
        name: &str,
    ) -> Result<PropertyValue, PanelError> {
        let property: PanelProperty = name.parse()?;
        Ok(self.get(tab, property))
    }

    pub fn get(&mut self, tab: Option<TabId>, property: PanelProperty) -> PropertyValue {
        self.effective(tab).get(property)
    }

    /// Every property in effect for `tab`, or the defaults when `None`.
    pub fn effective(&mut self, tab: Option<TabId>) -> EffectiveProperties {
        self.store.get(tab)
    }

    /// Refresh whatever a write for `tab` can have changed.
    ///
    /// A default write refreshes every window; a tab write refreshes that
    /// tab's window only while the tab is selected. A panel that is not
    /// built (or already shut down) touches no window.
    pub fn update_on_change<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        tab: Option<TabId>,
    ) -> SyncReport {
        if !self.is_subscribed() {
            return SyncReport::default();
        }
        match tab {
            None => self.sync.refresh_all(host, &mut self.store, &self.factory),
            Some(tab) => {
                let window = host.tab_window(tab).filter(|_| host.is_tab_selected(tab));
                match window {
                    Some(window) => self.refresh_window(host, window),
                    None => {
                        debug!(%tab, "write for unselected tab, no refresh");
                        SyncReport::default()
                    }
                }
            }
        }
    }

    /// Tab-select callback. Ignored unless the event was delivered to this
    /// controller's live subscription.
    pub fn on_tab_selected<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &TabSelected,
    ) -> Option<SyncReport> {
        let subscription = self.subscription?;
        if !event.is_delivered_to(subscription) {
            return None;
        }
        Some(self.refresh_window(host, event.window))
    }

    /// Drop the state of a closed tab.
    pub fn on_tab_closed(&mut self, tab: TabId) -> bool {
        self.store.forget_tab(tab)
    }

    fn refresh_window<H: BrowserHost + ?Sized>(
        &mut self,
        host: &mut H,
        window: WindowId,
    ) -> SyncReport {
        let mut report = SyncReport::default();
        match self
            .sync
            .refresh_one(host, &mut self.store, &self.factory, window)
        {
            Ok(_) => report.updated.push(window),
            Err(e) => {
                warn!(extension = %self.extension.id, %window, error = %e, "panel refresh failed");
                report.failed.push((window, e));
            }
        }
        report
    }
}
