//! End-to-end panel behaviour across two simulated windows.

use std::sync::Arc;

use webpanel_chrome::{layout, placement, BrowserHost, SimulatedBrowser};
use webpanel_common::{EventBus, ExtensionId, PanelEvent, ShutdownReason, Slot, TabId, WindowId};
use webpanel_config::PanelManifest;
use webpanel_core::{ExtensionInfo, PanelRegistry};

struct World {
    host: SimulatedBrowser,
    registry: PanelRegistry,
    id: ExtensionId,
    w1: WindowId,
    w2: WindowId,
    a: TabId,
    b: TabId,
}

fn world() -> World {
    let mut host = SimulatedBrowser::new();
    let (w1, a) = host.open_window();
    let (w2, b) = host.open_window();
    let mut registry = PanelRegistry::new(Arc::new(EventBus::default()));
    let manifest = PanelManifest {
        default_title: Some("T0".into()),
        default_location: Some("after_browser".into()),
        default_panel: Some(String::new()),
    };
    let info = ExtensionInfo::new("panel@example.com", "Example", "moz-extension://abc/").unwrap();
    registry
        .on_panel_declared(&mut host, info, &manifest)
        .unwrap();
    World {
        host,
        registry,
        id: ExtensionId::new("panel@example.com"),
        w1,
        w2,
        a,
        b,
    }
}

impl World {
    fn surface(&self, w: WindowId) -> Option<(String, Slot)> {
        let doc = self.host.document(w)?;
        let node = doc.get_element_by_id(&self.id.surface_id())?;
        let label = doc.attribute(node, "label")?.to_string();
        Some((label, placement::locate(doc, node)?))
    }

    fn set(&mut self, tab: Option<TabId>, name: &str, value: &str) {
        self.registry
            .get_mut(&self.id)
            .unwrap()
            .set_property(&mut self.host, tab, name, Some(value.into()))
            .unwrap();
    }
}

#[test]
fn build_materializes_in_every_window() {
    let w = world();
    assert_eq!(w.surface(w.w1), Some(("T0".to_string(), Slot::AfterBrowser)));
    assert_eq!(w.surface(w.w2), Some(("T0".to_string(), Slot::AfterBrowser)));

    let doc = w.host.document(w.w1).unwrap();
    let inner = doc
        .get_element_by_id(&format!("inner-{}", w.id.surface_id()))
        .unwrap();
    assert_eq!(doc.attribute(inner, "src"), Some("moz-extension://abc/"));
    assert_eq!(doc.count_by_id(placement::SPLITTER_END), 1);
}

#[test]
fn tab_override_changes_only_its_window() {
    let mut w = world();
    let a = w.a;
    w.set(Some(a), "title", "Custom");

    assert_eq!(w.surface(w.w1), Some(("Custom".to_string(), Slot::AfterBrowser)));
    assert_eq!(w.surface(w.w2), Some(("T0".to_string(), Slot::AfterBrowser)));
}

#[test]
fn default_location_moves_every_window() {
    let mut w = world();
    w.set(None, "location", "below_browser");

    for win in [w.w1, w.w2] {
        assert_eq!(w.surface(win), Some(("T0".to_string(), Slot::BelowBrowser)));
        let doc = w.host.document(win).unwrap();
        assert_eq!(doc.count_by_id(placement::SPLITTER_BELOW), 1);
        assert_eq!(doc.count_by_id(&w.id.surface_id()), 1);
    }
}

#[test]
fn repeated_moves_never_duplicate() {
    let mut w = world();
    for slot in ["above_browser", "before_browser", "below_browser", "after_browser"] {
        w.set(None, "location", slot);
    }
    w.set(None, "location", "above_browser");

    let doc = w.host.document(w.w1).unwrap();
    assert_eq!(doc.count_by_id(&w.id.surface_id()), 1);
    for splitter in [
        placement::SPLITTER_END,
        placement::SPLITTER_ABOVE,
        placement::SPLITTER_BELOW,
    ] {
        assert_eq!(doc.count_by_id(splitter), 1);
    }
    assert_eq!(w.surface(w.w1), Some(("T0".to_string(), Slot::AboveBrowser)));
}

#[test]
fn tab_switch_shows_the_selected_tabs_state() {
    let mut w = world();
    let c = w.host.open_tab(w.w1).unwrap();
    w.set(Some(c), "title", "Background");
    assert_eq!(w.surface(w.w1).unwrap().0, "T0");

    let event = w.host.select_tab(c).unwrap();
    assert_eq!(w.registry.on_tab_selected(&mut w.host, &event), 1);
    assert_eq!(w.surface(w.w1).unwrap().0, "Background");

    let a = w.a;
    let event = w.host.select_tab(a).unwrap();
    w.registry.on_tab_selected(&mut w.host, &event);
    assert_eq!(w.surface(w.w1).unwrap().0, "T0");
}

#[test]
fn shutdown_leaves_nothing_behind() {
    let mut w = world();
    let extra = w.host.open_tab(w.w2).unwrap();
    let id = w.id.clone();
    assert!(w
        .registry
        .on_extension_shutdown(&mut w.host, &id, ShutdownReason::AddonUninstall));

    assert!(w.surface(w.w1).is_none());
    assert!(w.surface(w.w2).is_none());
    assert_eq!(w.host.active_subscriptions(), 0);

    let event = w.host.select_tab(extra).unwrap();
    assert!(event.listeners.is_empty());
    assert_eq!(w.registry.on_tab_selected(&mut w.host, &event), 0);
    assert!(w.surface(w.w2).is_none());
}

#[test]
fn application_shutdown_keeps_surfaces() {
    let mut w = world();
    let id = w.id.clone();
    w.registry
        .on_extension_shutdown(&mut w.host, &id, ShutdownReason::AppShutdown);

    assert!(w.registry.is_empty());
    assert!(w.surface(w.w1).is_some());
    assert!(w.surface(w.w2).is_some());
}

#[test]
fn broken_window_does_not_block_others() {
    let mut host = SimulatedBrowser::new();
    let (good, _) = host.open_window();
    let (bad, _) = host.open_window_with(layout::bare_window());
    let mut registry = PanelRegistry::default();
    let info = ExtensionInfo::new("x", "X", "moz-extension://x/").unwrap();

    let report = registry
        .on_panel_declared(&mut host, info, &PanelManifest::default())
        .unwrap();
    assert_eq!(report.updated, vec![good]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, bad);
}

#[test]
fn closed_tab_state_is_dropped() {
    let mut w = world();
    let b = w.b;
    w.set(Some(b), "title", "B");
    assert_eq!(w.surface(w.w2).unwrap().0, "B");

    let next = w.host.open_tab(w.w2).unwrap();
    let closed = w.host.close_tab(b).unwrap();
    w.registry.on_tab_closed(b);
    let controller = w.registry.get(&w.id).unwrap();
    assert!(controller.store().overrides_for(b).is_none());

    // The neighbour took over the selection; the panel follows it.
    let event = closed.selected.unwrap();
    assert_eq!(event.tab, next);
    assert_eq!(w.registry.on_tab_selected(&mut w.host, &event), 1);
    assert_eq!(w.surface(w.w2).unwrap().0, "T0");
}

#[test]
fn failed_move_hides_the_surface() {
    let mut w = world();
    let doc = w.host.document_mut(w.w1).unwrap();
    let splitter = doc.get_element_by_id(layout::SIDEBAR_SPLITTER).unwrap();
    doc.remove(splitter);

    let report = w
        .registry
        .get_mut(&w.id)
        .unwrap()
        .set_property(&mut w.host, None, "location", Some("before_browser".into()))
        .unwrap();
    assert_eq!(report.updated, vec![w.w2]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, w.w1);

    assert!(w.surface(w.w1).is_none());
    assert_eq!(w.surface(w.w2), Some(("T0".to_string(), Slot::BeforeBrowser)));

    // A later write the window can satisfy brings the surface back.
    w.set(None, "location", "after_browser");
    assert_eq!(w.surface(w.w1), Some(("T0".to_string(), Slot::AfterBrowser)));
}

#[tokio::test]
async fn surface_updates_are_announced() {
    let mut host = SimulatedBrowser::new();
    let (w1, _) = host.open_window();
    let events = Arc::new(EventBus::default());
    let mut rx = events.subscribe();
    let mut registry = PanelRegistry::new(Arc::clone(&events));
    let info = ExtensionInfo::new("x", "X", "moz-extension://x/").unwrap();
    let manifest = PanelManifest {
        default_panel: Some("p.html".into()),
        ..Default::default()
    };
    registry
        .on_panel_declared(&mut host, info, &manifest)
        .unwrap();

    match rx.recv().await.unwrap() {
        PanelEvent::SurfaceUpdated { window, url, .. } => {
            assert_eq!(window, w1);
            assert_eq!(url, "moz-extension://x/p.html");
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        rx.recv().await.unwrap(),
        PanelEvent::PanelRegistered(ExtensionId::new("x"))
    );
}
