//! Reads and writes on the override store.

use std::collections::HashMap;

use tracing::debug;
use webpanel_common::{PanelError, PanelProperty, PropertyValue, TabId};
use webpanel_config::DeclaredPanel;

use super::types::TypedValue;
use super::{DefaultsRecord, EffectiveProperties, OverrideRecord};

/// Two-level panel configuration: extension defaults plus sparse per-tab
/// overrides, merged on read.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    declared: DeclaredPanel,
    defaults: DefaultsRecord,
    overrides: HashMap<TabId, OverrideRecord>,
}

impl OverrideStore {
    pub fn new(declared: DeclaredPanel) -> Self {
        let defaults = DefaultsRecord::from(&declared);
        Self {
            declared,
            defaults,
            overrides: HashMap::new(),
        }
    }

    pub fn defaults(&self) -> &DefaultsRecord {
        &self.defaults
    }

    /// Effective properties for `tab`, or the defaults when `tab` is `None`.
    ///
    /// The first read of a tab creates its (empty) override record.
    pub fn get(&mut self, tab: Option<TabId>) -> EffectiveProperties {
        match tab {
            None => EffectiveProperties::from(&self.defaults),
            Some(tab) => {
                let record = self.overrides.entry(tab).or_default();
                EffectiveProperties::merge(&self.defaults, Some(record))
            }
        }
    }

    /// Write one property.
    ///
    /// - `tab == None`: changes the default; `None` restores the declared value.
    /// - `tab` with a value: sets the tab's override.
    /// - `tab` without a value: drops the tab's override so it inherits again.
    pub fn set(
        &mut self,
        tab: Option<TabId>,
        property: PanelProperty,
        value: Option<PropertyValue>,
    ) -> Result<(), PanelError> {
        let value = value
            .map(|v| TypedValue::check(property, v))
            .transpose()?;

        match tab {
            None => self.set_default(property, value),
            Some(tab) => {
                let record = self.overrides.entry(tab).or_default();
                set_override(record, property, value);
                debug!(%tab, %property, "tab override updated");
            }
        }
        Ok(())
    }

    fn set_default(&mut self, property: PanelProperty, value: Option<TypedValue>) {
        let d = &mut self.defaults;
        match (property, value) {
            (PanelProperty::Enabled, Some(TypedValue::Bool(b))) => d.enabled = b,
            (PanelProperty::Enabled, _) => d.enabled = true,
            (PanelProperty::Collapsed, Some(TypedValue::Bool(b))) => d.collapsed = b,
            (PanelProperty::Collapsed, _) => d.collapsed = false,
            (PanelProperty::Title, Some(TypedValue::Text(s))) => d.title = s,
            (PanelProperty::Title, _) => d.title = self.declared.title.clone(),
            (PanelProperty::Panel, Some(TypedValue::Text(s))) => d.panel = s,
            (PanelProperty::Panel, _) => d.panel = self.declared.panel.clone(),
            (PanelProperty::Location, Some(TypedValue::Slot(slot))) => d.location = slot,
            (PanelProperty::Location, _) => d.location = self.declared.location,
        }
        debug!(%property, "panel default updated");
    }

    /// Drop the record of a closed tab.
    pub fn forget_tab(&mut self, tab: TabId) -> bool {
        self.overrides.remove(&tab).is_some()
    }

    /// Discard every tab record.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Number of tabs with a record, empty or not.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn overrides_for(&self, tab: TabId) -> Option<&OverrideRecord> {
        self.overrides.get(&tab)
    }
}

fn set_override(record: &mut OverrideRecord, property: PanelProperty, value: Option<TypedValue>) {
    match (property, value) {
        (PanelProperty::Enabled, Some(TypedValue::Bool(b))) => record.enabled = Some(b),
        (PanelProperty::Enabled, _) => record.enabled = None,
        (PanelProperty::Collapsed, Some(TypedValue::Bool(b))) => record.collapsed = Some(b),
        (PanelProperty::Collapsed, _) => record.collapsed = None,
        (PanelProperty::Title, Some(TypedValue::Text(s))) => record.title = Some(s),
        (PanelProperty::Title, _) => record.title = None,
        (PanelProperty::Panel, Some(TypedValue::Text(s))) => record.panel = Some(s),
        (PanelProperty::Panel, _) => record.panel = None,
        (PanelProperty::Location, Some(TypedValue::Slot(slot))) => record.location = Some(slot),
        (PanelProperty::Location, _) => record.location = None,
    }
}
