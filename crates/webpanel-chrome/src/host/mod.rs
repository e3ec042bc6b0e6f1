//! The browser host a panel lives in.
//!
//! `BrowserHost` abstracts window enumeration, tab selection, chrome
//! documents and tab-select subscriptions. `SimulatedBrowser` is an
//! in-memory implementation used by the simulator and the tests.

mod simulated;

pub use simulated::SimulatedBrowser;

use webpanel_common::{SubscriptionId, TabId, WindowId};

use crate::document::ChromeDocument;

/// A tab became the selected tab of its window.
///
/// `listeners` holds the subscriptions that were active when the event fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelected {
    pub window: WindowId,
    pub tab: TabId,
    pub listeners: Vec<SubscriptionId>,
}

impl TabSelected {
    pub fn is_delivered_to(&self, subscription: SubscriptionId) -> bool {
        self.listeners.contains(&subscription)
    }
}

/// Outcome of closing a tab in the simulated host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabClosed {
    pub window: WindowId,
    /// The tab was the window's last, so the window closed with it.
    pub window_closed: bool,
    /// Set when the closed tab was selected and another tab took over.
    pub selected: Option<TabSelected>,
}

pub trait BrowserHost {
    /// Currently open top-level browser windows, in enumeration order.
    fn browser_windows(&self) -> Vec<WindowId>;

    fn selected_tab(&self, window: WindowId) -> Option<TabId>;

    /// The window a tab belongs to, if the tab is still open.
    fn tab_window(&self, tab: TabId) -> Option<WindowId>;

    fn document(&self, window: WindowId) -> Option<&ChromeDocument>;

    fn document_mut(&mut self, window: WindowId) -> Option<&mut ChromeDocument>;

    fn subscribe_tab_select(&mut self) -> SubscriptionId;

    /// Returns `false` if the subscription was not active.
    fn unsubscribe_tab_select(&mut self, subscription: SubscriptionId) -> bool;

    /// Whether `tab` is the selected tab of its window.
    fn is_tab_selected(&self, tab: TabId) -> bool {
        self.tab_window(tab)
            .and_then(|w| self.selected_tab(w))
            .is_some_and(|selected| selected == tab)
    }
}
