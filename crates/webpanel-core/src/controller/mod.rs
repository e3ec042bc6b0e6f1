//! Per-extension panel controller.
//!
//! A `PanelController` composes the override store, the surface factory and
//! the window synchronizer behind one facade: `build`, `shutdown`, and
//! property reads and writes. Callbacks from the host (tab selected, tab
//! closed) are routed here by the registry.

mod operations;
mod types;

pub use operations::PanelController;
pub use types::ExtensionInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use webpanel_chrome::{placement, BrowserHost, SimulatedBrowser};
    use webpanel_common::{EventBus, PanelError, PanelProperty, PropertyValue, Slot, WindowId};
    use webpanel_config::PanelManifest;

    fn info() -> ExtensionInfo {
        ExtensionInfo::new("Foo@Example.com", "Foo", "moz-extension://foo/").unwrap()
    }

    fn controller() -> PanelController {
        let manifest = PanelManifest {
            default_title: Some("T0".into()),
            default_location: None,
            default_panel: Some("panel.html".into()),
        };
        PanelController::from_manifest(info(), &manifest, Arc::new(EventBus::default())).unwrap()
    }

    fn label(host: &SimulatedBrowser, c: &PanelController, w: WindowId) -> Option<String> {
        let doc = host.document(w)?;
        let node = doc.get_element_by_id(c.surface_id())?;
        doc.attribute(node, "label").map(str::to_string)
    }

    #[test]
    fn extension_info_rejects_bad_base_url() {
        assert!(ExtensionInfo::new("a", "A", "not a url").is_err());
    }

    #[test]
    fn bad_manifest_location_is_a_config_error() {
        let manifest = PanelManifest {
            default_location: Some("sideways".into()),
            ..Default::default()
        };
        let result =
            PanelController::from_manifest(info(), &manifest, Arc::new(EventBus::default()));
        assert!(result.is_err());
    }

    #[test]
    fn surface_ids_derive_from_extension() {
        let c = controller();
        assert_eq!(c.surface_id(), "foo_example_com-webext-panel");
        assert_eq!(c.content_host_id(), "inner-foo_example_com-webext-panel");
    }

    #[test]
    fn build_subscribes_and_materializes() {
        let mut host = SimulatedBrowser::new();
        let (w1, _) = host.open_window();
        let (w2, _) = host.open_window();
        let mut c = controller();

        let report = c.build(&mut host);
        assert!(report.is_clean());
        assert!(c.is_subscribed());
        assert_eq!(host.active_subscriptions(), 1);
        assert_eq!(label(&host, &c, w1).as_deref(), Some("T0"));
        assert_eq!(label(&host, &c, w2).as_deref(), Some("T0"));
    }

    #[test]
    fn build_twice_keeps_one_subscription() {
        let mut host = SimulatedBrowser::new();
        host.open_window();
        let mut c = controller();
        c.build(&mut host);
        c.build(&mut host);
        assert_eq!(host.active_subscriptions(), 1);
    }

    #[test]
    fn unknown_property_name() {
        let mut host = SimulatedBrowser::new();
        let mut c = controller();
        let err = c
            .set_property(&mut host, None, "colour", Some("red".into()))
            .unwrap_err();
        assert_eq!(err, PanelError::UnknownProperty("colour".into()));
        assert!(c.get_property(None, "colour").is_err());
    }

    #[test]
    fn tab_write_refreshes_only_when_selected() {
        let mut host = SimulatedBrowser::new();
        let (w, a) = host.open_window();
        let b = host.open_tab(w).unwrap();
        let mut c = controller();
        c.build(&mut host);

        let report = c
            .set_property(&mut host, Some(b), "title", Some("B".into()))
            .unwrap();
        assert!(report.updated.is_empty());
        assert_eq!(label(&host, &c, w).as_deref(), Some("T0"));

        let report = c
            .set_property(&mut host, Some(a), "title", Some("A".into()))
            .unwrap();
        assert_eq!(report.updated, vec![w]);
        assert_eq!(label(&host, &c, w).as_deref(), Some("A"));
    }

    #[test]
    fn tab_selection_applies_that_tabs_overrides() {
        let mut host = SimulatedBrowser::new();
        let (w, _) = host.open_window();
        let b = host.open_tab(w).unwrap();
        let mut c = controller();
        c.build(&mut host);
        c.set(&mut host, Some(b), PanelProperty::Location, Some(Slot::AboveBrowser.into()))
            .unwrap();

        let event = host.select_tab(b).unwrap();
        assert!(c.on_tab_selected(&mut host, &event).is_some());

        let doc = host.document(w).unwrap();
        let node = doc.get_element_by_id(c.surface_id()).unwrap();
        assert_eq!(placement::locate(doc, node), Some(Slot::AboveBrowser));
    }

    #[test]
    fn get_property_reads_effective_values() {
        let mut host = SimulatedBrowser::new();
        let (_, a) = host.open_window();
        let mut c = controller();
        c.set_property(&mut host, Some(a), "collapsed", Some(true.into()))
            .unwrap();

        assert_eq!(
            c.get_property(Some(a), "collapsed").unwrap(),
            PropertyValue::Bool(true)
        );
        assert_eq!(
            c.get_property(None, "collapsed").unwrap(),
            PropertyValue::Bool(false)
        );
        assert_eq!(
            c.get_property(Some(a), "location").unwrap(),
            PropertyValue::from("after_browser")
        );
    }

    #[test]
    fn disabled_panel_renders_collapsed() {
        let mut host = SimulatedBrowser::new();
        let (w, _) = host.open_window();
        let mut c = controller();
        c.build(&mut host);
        c.set_property(&mut host, None, "enabled", Some(false.into()))
            .unwrap();

        let doc = host.document(w).unwrap();
        let node = doc.get_element_by_id(c.surface_id()).unwrap();
        assert_eq!(doc.attribute(node, "collapsed"), Some("true"));
    }

    #[test]
    fn writes_before_build_touch_no_window() {
        let mut host = SimulatedBrowser::new();
        let (w, _) = host.open_window();
        let mut c = controller();
        let report = c
            .set_property(&mut host, None, "title", Some("x".into()))
            .unwrap();
        assert!(report.updated.is_empty());
        assert!(label(&host, &c, w).is_none());
    }

    #[test]
    fn shutdown_tears_everything_down() {
        let mut host = SimulatedBrowser::new();
        let (w, a) = host.open_window();
        let b = host.open_tab(w).unwrap();
        let mut c = controller();
        c.build(&mut host);
        c.set_property(&mut host, Some(a), "title", Some("A".into()))
            .unwrap();

        c.shutdown(&mut host);
        assert!(!c.is_subscribed());
        assert_eq!(host.active_subscriptions(), 0);
        assert!(label(&host, &c, w).is_none());
        assert_eq!(c.store().override_count(), 0);

        // A later selection is not delivered to us.
        let event = host.select_tab(b).unwrap();
        assert!(c.on_tab_selected(&mut host, &event).is_none());
        assert!(label(&host, &c, w).is_none());

        // Idempotent.
        c.shutdown(&mut host);
        assert_eq!(host.active_subscriptions(), 0);
    }

    #[test]
    fn shutdown_without_build_is_safe() {
        let mut host = SimulatedBrowser::new();
        host.open_window();
        let mut c = controller();
        c.shutdown(&mut host);
        assert_eq!(host.active_subscriptions(), 0);
    }

    #[test]
    fn foreign_subscription_is_ignored() {
        let mut host = SimulatedBrowser::new();
        let (w, _) = host.open_window();
        let b = host.open_tab(w).unwrap();
        let mut c = controller();
        c.build(&mut host);

        let mut event = host.select_tab(b).unwrap();
        event.listeners.clear();
        assert!(c.on_tab_selected(&mut host, &event).is_none());
    }

    #[test]
    fn closed_tab_forgets_overrides() {
        let mut host = SimulatedBrowser::new();
        let (_, a) = host.open_window();
        let mut c = controller();
        c.set_property(&mut host, Some(a), "title", Some("A".into()))
            .unwrap();
        assert!(c.on_tab_closed(a));
        assert!(!c.on_tab_closed(a));
        assert_eq!(
            c.get_property(Some(a), "title").unwrap(),
            PropertyValue::from("T0")
        );
    }

    #[test]
    fn stale_tab_write_triggers_no_refresh() {
        let mut host = SimulatedBrowser::new();
        let (w, _) = host.open_window();
        let b = host.open_tab(w).unwrap();
        let mut c = controller();
        c.build(&mut host);
        host.close_tab(b);

        let report = c
            .set_property(&mut host, Some(b), "title", Some("ghost".into()))
            .unwrap();
        assert!(report.updated.is_empty());
        assert_eq!(label(&host, &c, w).as_deref(), Some("T0"));
        assert!(c.store().overrides_for(b).is_some());
    }
}
