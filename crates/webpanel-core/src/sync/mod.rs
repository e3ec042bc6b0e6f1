//! Keeps every window's surface in line with the effective properties of
//! the window's selected tab.

mod report;

pub use report::SyncReport;

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;
use webpanel_chrome::{placement, BrowserHost};
use webpanel_common::{EventBus, ExtensionId, PanelEvent, PlacementError, WindowId};

use crate::store::OverrideStore;
use crate::surface::{SurfaceFactory, SurfaceInstance};

/// Applies store state to chrome documents and announces the result.
#[derive(Debug, Clone)]
pub struct WindowSynchronizer {
    extension: ExtensionId,
    base_url: Url,
    events: Arc<EventBus>,
}

impl WindowSynchronizer {
    pub fn new(extension: ExtensionId, base_url: Url, events: Arc<EventBus>) -> Self {
        Self {
            extension,
            base_url,
            events,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a panel path against the extension base URL.
    ///
    /// An unparseable path is used verbatim.
    pub fn resolve(&self, panel: &str) -> String {
        match self.base_url.join(panel) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(panel, error = %e, "panel path does not resolve, using it as-is");
                panel.to_string()
            }
        }
    }

    /// Bring one window's surface up to date.
    pub fn refresh_one<H: BrowserHost + ?Sized>(
        &self,
        host: &mut H,
        store: &mut OverrideStore,
        factory: &SurfaceFactory,
        window: WindowId,
    ) -> Result<SurfaceInstance, PlacementError> {
        let tab = host.selected_tab(window);
        let props = store.get(tab);
        let url = self.resolve(&props.panel);

        let doc = host
            .document_mut(window)
            .ok_or(PlacementError::MissingWindow(window))?;
        let (surface, created) = factory.ensure(doc, window, &props)?;

        doc.set_attribute(surface.container, "label", factory.label_for(&props.title));
        doc.set_attribute(
            surface.container,
            "collapsed",
            props.renders_collapsed().to_string(),
        );
        if created || doc.attribute(surface.content_host, "src") != Some(url.as_str()) {
            doc.set_attribute(surface.content_host, "src", url.as_str());
            debug!(%window, src = %url, "panel content navigated");
        }

        if let Err(e) = placement::place(doc, window, props.location, surface.container) {
            // A surface stuck at its old slot would show stale state.
            factory.remove(doc);
            return Err(e);
        }

        self.events.publish(PanelEvent::SurfaceUpdated {
            extension: self.extension.clone(),
            window,
            content_host: surface.content_host,
            url,
        });
        Ok(surface)
    }

    /// Refresh every open window in enumeration order.
    ///
    /// A failing window is logged and skipped.
    pub fn refresh_all<H: BrowserHost + ?Sized>(
        &self,
        host: &mut H,
        store: &mut OverrideStore,
        factory: &SurfaceFactory,
    ) -> SyncReport {
        let mut report = SyncReport::default();
        for window in host.browser_windows() {
            match self.refresh_one(host, store, factory, window) {
                Ok(_) => report.updated.push(window),
                Err(e) => {
                    warn!(extension = %self.extension, %window, error = %e, "panel refresh failed");
                    report.failed.push((window, e));
                }
            }
        }
        report
    }

    /// Detach the surface from every open window.
    ///
    /// Returns the windows a surface was removed from.
    pub fn remove_all<H: BrowserHost + ?Sized>(
        &self,
        host: &mut H,
        factory: &SurfaceFactory,
    ) -> Vec<WindowId> {
        let mut removed = Vec::new();
        for window in host.browser_windows() {
            let Some(doc) = host.document_mut(window) else {
                continue;
            };
            if factory.remove(doc) {
                self.events.publish(PanelEvent::SurfaceRemoved {
                    extension: self.extension.clone(),
                    window,
                });
                removed.push(window);
            }
        }
        removed
    }
}
