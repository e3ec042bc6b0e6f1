use std::collections::BTreeSet;

use tracing::debug;
use webpanel_common::{SubscriptionId, TabId, WindowId};

use super::{BrowserHost, TabClosed, TabSelected};
use crate::document::ChromeDocument;
use crate::layout;

struct SimWindow {
    id: WindowId,
    tabs: Vec<TabId>,
    selected: usize,
    document: ChromeDocument,
}

/// In-memory browser: ordered windows, each with tabs and a chrome document.
pub struct SimulatedBrowser {
    windows: Vec<SimWindow>,
    subscriptions: BTreeSet<u64>,
    next_window: u32,
    next_tab: u64,
    next_subscription: u64,
}

impl SimulatedBrowser {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            subscriptions: BTreeSet::new(),
            next_window: 1,
            next_tab: 1,
            next_subscription: 1,
        }
    }

    /// Open a regular browser window with one selected tab.
    pub fn open_window(&mut self) -> (WindowId, TabId) {
        self.open_window_with(layout::browser_window())
    }

    /// Open a window with a custom chrome document and one selected tab.
    pub fn open_window_with(&mut self, document: ChromeDocument) -> (WindowId, TabId) {
        let id = WindowId(self.next_window);
        self.next_window += 1;
        let tab = self.allocate_tab();
        self.windows.push(SimWindow {
            id,
            tabs: vec![tab],
            selected: 0,
            document,
        });
        debug!(window = %id, %tab, "window opened");
        (id, tab)
    }

    /// Add a background tab to `window`.
    pub fn open_tab(&mut self, window: WindowId) -> Option<TabId> {
        let index = self.window_index(window)?;
        let tab = self.allocate_tab();
        self.windows[index].tabs.push(tab);
        Some(tab)
    }

    /// Make `tab` the selected tab of its window.
    ///
    /// Returns the event to dispatch, or `None` when the tab is unknown or
    /// already selected.
    pub fn select_tab(&mut self, tab: TabId) -> Option<TabSelected> {
        let (w, t) = self.locate_tab(tab)?;
        let window = &mut self.windows[w];
        if window.selected == t {
            return None;
        }
        window.selected = t;
        let id = window.id;
        Some(self.selection_event(id, tab))
    }

    /// Close a tab. Closing the last tab of a window closes the window.
    ///
    /// When the selected tab closes, the previous tab (or the next one, for
    /// the first tab) becomes selected and the select event is returned.
    pub fn close_tab(&mut self, tab: TabId) -> Option<TabClosed> {
        let (w, t) = self.locate_tab(tab)?;
        let window = &mut self.windows[w];
        let id = window.id;
        window.tabs.remove(t);

        if window.tabs.is_empty() {
            self.windows.remove(w);
            debug!(window = %id, "last tab closed, window closed");
            return Some(TabClosed {
                window: id,
                window_closed: true,
                selected: None,
            });
        }

        let was_selected = window.selected == t;
        if window.selected > t || (was_selected && t > 0) {
            window.selected -= 1;
        }
        let selected = if was_selected {
            let next = window.tabs[window.selected];
            debug!(window = %id, closed = %tab, selected = %next, "selected tab closed");
            Some(self.selection_event(id, next))
        } else {
            None
        };
        Some(TabClosed {
            window: id,
            window_closed: false,
            selected,
        })
    }

    pub fn close_window(&mut self, window: WindowId) -> bool {
        match self.window_index(window) {
            Some(index) => {
                self.windows.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn tabs(&self, window: WindowId) -> Vec<TabId> {
        self.window_index(window)
            .map(|i| self.windows[i].tabs.clone())
            .unwrap_or_default()
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    fn allocate_tab(&mut self) -> TabId {
        let tab = TabId(self.next_tab);
        self.next_tab += 1;
        tab
    }

    fn selection_event(&self, window: WindowId, tab: TabId) -> TabSelected {
        TabSelected {
            window,
            tab,
            listeners: self
                .subscriptions
                .iter()
                .map(|&id| SubscriptionId(id))
                .collect(),
        }
    }

    fn window_index(&self, window: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == window)
    }

    fn locate_tab(&self, tab: TabId) -> Option<(usize, usize)> {
        self.windows.iter().enumerate().find_map(|(w, window)| {
            window
                .tabs
                .iter()
                .position(|&t| t == tab)
                .map(|t| (w, t))
        })
    }
}

impl Default for SimulatedBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserHost for SimulatedBrowser {
    fn browser_windows(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    fn selected_tab(&self, window: WindowId) -> Option<TabId> {
        let w = &self.windows[self.window_index(window)?];
        w.tabs.get(w.selected).copied()
    }

    fn tab_window(&self, tab: TabId) -> Option<WindowId> {
        self.locate_tab(tab).map(|(w, _)| self.windows[w].id)
    }

    fn document(&self, window: WindowId) -> Option<&ChromeDocument> {
        self.windows
            .iter()
            .find(|w| w.id == window)
            .map(|w| &w.document)
    }

    fn document_mut(&mut self, window: WindowId) -> Option<&mut ChromeDocument> {
        self.windows
            .iter_mut()
            .find(|w| w.id == window)
            .map(|w| &mut w.document)
    }

    fn subscribe_tab_select(&mut self) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscriptions.insert(id);
        SubscriptionId(id)
    }

    fn unsubscribe_tab_select(&mut self, subscription: SubscriptionId) -> bool {
        self.subscriptions.remove(&subscription.0)
    }
}
