use super::*;
use crate::settings::SimulatorSettings;

#[test]
fn empty_manifest_is_valid() {
    assert!(validate_panel_manifest(&PanelManifest::default()).is_ok());
}

#[test]
fn every_slot_name_is_accepted() {
    for slot in Slot::ALL {
        let opts = PanelManifest {
            default_location: Some(slot.as_str().to_string()),
            ..Default::default()
        };
        assert!(validate_panel_manifest(&opts).is_ok(), "{slot} rejected");
    }
}

#[test]
fn collects_all_manifest_errors() {
    let opts = PanelManifest {
        default_title: None,
        default_location: Some("left".into()),
        default_panel: Some("http://[::1".into()),
    };
    let err = validate_panel_manifest(&opts).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("default_location"));
    assert!(msg.contains("default_panel"));
}

#[test]
fn relative_and_absolute_panels_are_valid() {
    for panel in ["panel.html", "/ui/panel.html", "https://example.com/p"] {
        let opts = PanelManifest {
            default_panel: Some(panel.into()),
            ..Default::default()
        };
        assert!(validate_panel_manifest(&opts).is_ok(), "{panel} rejected");
    }
}

#[test]
fn default_settings_are_valid() {
    assert!(validate_settings(&SimulatorSettings::default()).is_ok());
}

#[test]
fn settings_out_of_range() {
    let mut settings = SimulatorSettings::default();
    settings.browser.windows = 0;
    settings.browser.tabs_per_window = 100;
    let err = validate_settings(&settings).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("browser.windows"));
    assert!(msg.contains("browser.tabs_per_window"));
}

#[test]
fn settings_bad_base_url() {
    let mut settings = SimulatorSettings::default();
    settings.extension.base_url = "not a url".into();
    assert!(validate_settings(&settings).is_err());
}

#[test]
fn settings_empty_extension_id() {
    let mut settings = SimulatorSettings::default();
    settings.extension.id = "  ".into();
    let err = validate_settings(&settings).unwrap_err();
    assert!(err.to_string().contains("extension.id"));
}
