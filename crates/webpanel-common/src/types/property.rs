use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PanelError;

use super::core::Slot;

/// A panel property that can be read or written per tab or globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelProperty {
    Enabled,
    Title,
    Location,
    Panel,
    Collapsed,
}

impl PanelProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelProperty::Enabled => "enabled",
            PanelProperty::Title => "title",
            PanelProperty::Location => "location",
            PanelProperty::Panel => "panel",
            PanelProperty::Collapsed => "collapsed",
        }
    }
}

impl fmt::Display for PanelProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelProperty {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(PanelProperty::Enabled),
            "title" => Ok(PanelProperty::Title),
            "location" => Ok(PanelProperty::Location),
            "panel" => Ok(PanelProperty::Panel),
            "collapsed" => Ok(PanelProperty::Collapsed),
            other => Err(PanelError::UnknownProperty(other.to_string())),
        }
    }
}

/// Value carried by a property read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Bool(_) => None,
        }
    }

    /// Interpret as a slot name.
    pub fn as_slot(&self) -> Result<Slot, PanelError> {
        let name = self.as_text().ok_or_else(|| PanelError::InvalidValue {
            property: "location",
            reason: "expected a location name".into(),
        })?;
        name.parse().map_err(|reason| PanelError::InvalidValue {
            property: "location",
            reason,
        })
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<Slot> for PropertyValue {
    fn from(slot: Slot) -> Self {
        PropertyValue::Text(slot.as_str().to_string())
    }
}
