use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index of an element inside one window's chrome document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Anchor position of a panel relative to the main content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    BeforeBrowser,
    #[default]
    AfterBrowser,
    AboveBrowser,
    BelowBrowser,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::BeforeBrowser,
        Slot::AfterBrowser,
        Slot::AboveBrowser,
        Slot::BelowBrowser,
    ];

    /// Name used in manifests and API calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::BeforeBrowser => "before_browser",
            Slot::AfterBrowser => "after_browser",
            Slot::AboveBrowser => "above_browser",
            Slot::BelowBrowser => "below_browser",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("unknown panel location '{s}'"))
    }
}

/// Why an extension is being shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShutdownReason {
    /// The whole application is exiting; UI is left for session restore.
    AppShutdown,
    AddonDisable,
    AddonUninstall,
    AddonUpgrade,
    AddonDowngrade,
}

impl ShutdownReason {
    pub fn is_app_shutdown(&self) -> bool {
        matches!(self, ShutdownReason::AppShutdown)
    }
}
