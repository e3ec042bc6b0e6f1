//! Record types for the per-tab override store.

use webpanel_common::{PanelError, PanelProperty, PropertyValue, Slot};
use webpanel_config::DeclaredPanel;

/// Extension-wide panel settings that every tab inherits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsRecord {
    pub enabled: bool,
    pub title: String,
    pub location: Slot,
    pub panel: String,
    pub collapsed: bool,
}

impl From<&DeclaredPanel> for DefaultsRecord {
    fn from(declared: &DeclaredPanel) -> Self {
        Self {
            enabled: true,
            title: declared.title.clone(),
            location: declared.location,
            panel: declared.panel.clone(),
            collapsed: false,
        }
    }
}

/// Sparse per-tab overrides. `None` means "inherit from the defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideRecord {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub location: Option<Slot>,
    pub panel: Option<String>,
    pub collapsed: Option<bool>,
}

impl OverrideRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Defaults merged with one tab's overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveProperties {
    pub enabled: bool,
    pub title: String,
    pub location: Slot,
    pub panel: String,
    pub collapsed: bool,
}

impl EffectiveProperties {
    pub fn merge(defaults: &DefaultsRecord, overrides: Option<&OverrideRecord>) -> Self {
        let Some(o) = overrides else {
            return Self::from(defaults);
        };
        Self {
            enabled: o.enabled.unwrap_or(defaults.enabled),
            title: o.title.clone().unwrap_or_else(|| defaults.title.clone()),
            location: o.location.unwrap_or(defaults.location),
            panel: o.panel.clone().unwrap_or_else(|| defaults.panel.clone()),
            collapsed: o.collapsed.unwrap_or(defaults.collapsed),
        }
    }

    pub fn get(&self, property: PanelProperty) -> PropertyValue {
        match property {
            PanelProperty::Enabled => self.enabled.into(),
            PanelProperty::Title => self.title.clone().into(),
            PanelProperty::Location => self.location.into(),
            PanelProperty::Panel => self.panel.clone().into(),
            PanelProperty::Collapsed => self.collapsed.into(),
        }
    }

    /// Whether the surface should render collapsed: explicitly, or because
    /// the panel is disabled.
    pub fn renders_collapsed(&self) -> bool {
        self.collapsed || !self.enabled
    }
}

impl From<&DefaultsRecord> for EffectiveProperties {
    fn from(d: &DefaultsRecord) -> Self {
        Self {
            enabled: d.enabled,
            title: d.title.clone(),
            location: d.location,
            panel: d.panel.clone(),
            collapsed: d.collapsed,
        }
    }
}

/// A validated value ready to be stored under a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TypedValue {
    Bool(bool),
    Text(String),
    Slot(Slot),
}

impl TypedValue {
    pub(super) fn check(property: PanelProperty, value: PropertyValue) -> Result<Self, PanelError> {
        let mismatch = |expected: &str| PanelError::InvalidValue {
            property: property.as_str(),
            reason: format!("expected {expected}"),
        };
        match property {
            PanelProperty::Enabled | PanelProperty::Collapsed => value
                .as_bool()
                .map(TypedValue::Bool)
                .ok_or_else(|| mismatch("a boolean")),
            PanelProperty::Title | PanelProperty::Panel => match value {
                PropertyValue::Text(s) => Ok(TypedValue::Text(s)),
                PropertyValue::Bool(_) => Err(mismatch("a string")),
            },
            PanelProperty::Location => value.as_slot().map(TypedValue::Slot),
        }
    }
}
