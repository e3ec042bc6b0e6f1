use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static INVALID_WIDGET_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").expect("id: static regex pattern must compile"));

/// Sanitise an extension id into something usable as an element id.
///
/// Lowercases the input and replaces every character outside
/// `[a-z0-9_-]` with an underscore.
pub fn make_widget_id(id: &str) -> String {
    INVALID_WIDGET_CHARS
        .replace_all(&id.to_lowercase(), "_")
        .into_owned()
}

/// Identity of the extension that owns a panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExtensionId(String);

impl ExtensionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of this extension's panel surface, stable for its lifetime.
    pub fn surface_id(&self) -> String {
        format!("{}-webext-panel", make_widget_id(&self.0))
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Handle returned by the host when a tab-select listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_id_lowercases_and_replaces() {
        assert_eq!(make_widget_id("Foo@Example.com"), "foo_example_com");
        assert_eq!(make_widget_id("already-ok_1"), "already-ok_1");
        assert_eq!(make_widget_id("{a1b2}"), "_a1b2_");
    }

    #[test]
    fn surface_id_is_derived_from_widget_id() {
        let ext = ExtensionId::new("Panel@Test.Org");
        assert_eq!(ext.surface_id(), "panel_test_org-webext-panel");
    }

    #[test]
    fn surface_id_is_stable() {
        let ext = ExtensionId::new("x@y");
        assert_eq!(ext.surface_id(), ext.clone().surface_id());
    }

    #[test]
    fn display_formats() {
        assert_eq!(WindowId(2).to_string(), "window-2");
        assert_eq!(TabId(7).to_string(), "tab-7");
        assert_eq!(ExtensionId::new("a@b").to_string(), "a@b");
    }

    #[test]
    fn extension_id_serialization() {
        let ext = ExtensionId::new("a@b");
        let json = serde_json::to_string(&ext).unwrap();
        assert_eq!(json, "\"a@b\"");
        let back: ExtensionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ext);
    }

    #[test]
    fn window_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(WindowId(1));
        set.insert(WindowId(1));
        set.insert(WindowId(2));
        assert_eq!(set.len(), 2);
    }
}
