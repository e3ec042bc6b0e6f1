//! One simulator run: open windows, declare the panel, apply writes.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use webpanel_chrome::{BrowserHost, NodeSnapshot, SimulatedBrowser};
use webpanel_common::{
    ConfigError, EventBus, ExtensionId, PanelEvent, PanelProperty, PropertyValue, WindowId,
};
use webpanel_config::validation::validate_settings;
use webpanel_config::{load_manifest, ExtensionManifest, PanelManifest, SimulatorSettings};
use webpanel_core::{ExtensionInfo, PanelRegistry};

/// A `NAME=VALUE` default write from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: Option<PropertyValue>,
}

impl Assignment {
    /// An empty value is a null write. `true`/`false` become booleans only
    /// for the boolean properties; every other value stays text.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let (name, value) = raw.split_once('=').ok_or_else(|| {
            ConfigError::ValidationError(format!("expected NAME=VALUE, got '{raw}'"))
        })?;
        let name = name.trim();
        let boolean = matches!(
            name.parse::<PanelProperty>(),
            Ok(PanelProperty::Enabled | PanelProperty::Collapsed)
        );
        let value = match value.trim() {
            "" => None,
            text if boolean => Some(match text.parse::<bool>() {
                Ok(flag) => PropertyValue::Bool(flag),
                // Left as text so the write reports the type mismatch.
                Err(_) => PropertyValue::from(text),
            }),
            text => Some(PropertyValue::from(text)),
        };
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct WindowReport {
    pub window: WindowId,
    pub tree: NodeSnapshot,
    #[serde(skip)]
    pub outline: String,
}

#[derive(Debug)]
pub struct RunOutput {
    pub windows: Vec<WindowReport>,
    pub events: Vec<PanelEvent>,
}

/// Apply the `--windows` override and re-check the settings it lands in.
pub fn override_windows(
    settings: &mut SimulatorSettings,
    windows: Option<u32>,
) -> Result<(), ConfigError> {
    let Some(windows) = windows else {
        return Ok(());
    };
    settings.browser.windows = windows;
    validate_settings(settings)
}

/// Read the manifest named by `path`, or fall back to an empty panel section.
pub fn read_manifest(path: Option<&str>) -> Result<ExtensionManifest, ConfigError> {
    match path {
        Some(path) => load_manifest(Path::new(path)),
        None => {
            info!("no manifest given, using an empty panel section");
            Ok(ExtensionManifest {
                panel: Some(PanelManifest::default()),
                ..Default::default()
            })
        }
    }
}

pub fn run(
    settings: &SimulatorSettings,
    manifest: &ExtensionManifest,
    assignments: &[Assignment],
) -> webpanel_common::Result<RunOutput> {
    let panel = manifest.panel.as_ref().ok_or_else(|| {
        ConfigError::ValidationError("manifest does not declare a panel".to_string())
    })?;
    let name = if manifest.name.is_empty() {
        settings.extension.id.as_str()
    } else {
        manifest.name.as_str()
    };
    let extension = ExtensionInfo::new(&settings.extension.id, name, &settings.extension.base_url)?;
    let id = extension.id.clone();

    let mut host = SimulatedBrowser::new();
    for _ in 0..settings.browser.windows {
        let (window, _) = host.open_window();
        for _ in 1..settings.browser.tabs_per_window {
            host.open_tab(window);
        }
    }

    let events = Arc::new(EventBus::default());
    let mut rx = events.subscribe();
    let mut registry = PanelRegistry::new(Arc::clone(&events));

    let report = registry.on_panel_declared(&mut host, extension, panel)?;
    info!(
        extension = %id,
        windows = report.updated.len(),
        failed = report.failed.len(),
        "panel declared"
    );

    apply(&mut registry, &mut host, &id, assignments)?;

    let windows = host
        .browser_windows()
        .into_iter()
        .filter_map(|window| {
            let doc = host.document(window)?;
            Some(WindowReport {
                window,
                tree: doc.snapshot(),
                outline: doc.outline(),
            })
        })
        .collect();

    let mut emitted = Vec::new();
    while let Ok(event) = rx.try_recv() {
        emitted.push(event);
    }

    Ok(RunOutput {
        windows,
        events: emitted,
    })
}

fn apply(
    registry: &mut PanelRegistry,
    host: &mut SimulatedBrowser,
    id: &ExtensionId,
    assignments: &[Assignment],
) -> webpanel_common::Result<()> {
    let Some(controller) = registry.get_mut(id) else {
        return Err(webpanel_common::PanelError::NotRegistered(id.clone()).into());
    };
    for assignment in assignments {
        let report =
            controller.set_property(host, None, &assignment.name, assignment.value.clone())?;
        for (window, error) in &report.failed {
            warn!(%window, %error, property = %assignment.name, "write not applied");
        }
    }
    Ok(())
}
