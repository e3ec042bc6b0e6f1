//! Element ids of the browser window chrome and a builder for the standard layout.

use crate::document::ChromeDocument;

pub const MAIN_WINDOW: &str = "main-window";
pub const BROWSER_PANEL: &str = "browser-panel";
pub const NAVIGATOR_TOOLBOX: &str = "navigator-toolbox";
pub const BROWSER: &str = "browser";
pub const BORDER_START: &str = "browser-border-start";
pub const SIDEBAR_BOX: &str = "sidebar-box";
pub const SIDEBAR_SPLITTER: &str = "sidebar-splitter";
pub const APP_CONTENT: &str = "appcontent";
pub const BORDER_END: &str = "browser-border-end";

/// Build the chrome tree of a regular browser window:
///
/// ```text
/// window#main-window
///   vbox#browser-panel
///     toolbox#navigator-toolbox
///     hbox#browser
///       vbox#browser-border-start
///       vbox#sidebar-box [hidden]
///       splitter#sidebar-splitter [hidden]
///       vbox#appcontent
///       vbox#browser-border-end
/// ```
pub fn browser_window() -> ChromeDocument {
    let mut doc = ChromeDocument::new("window", MAIN_WINDOW);
    let root = doc.root();

    let panel = doc.create_element_with_id("vbox", BROWSER_PANEL);
    doc.append_child(root, panel);

    let toolbox = doc.create_element_with_id("toolbox", NAVIGATOR_TOOLBOX);
    doc.append_child(panel, toolbox);

    let browser = doc.create_element_with_id("hbox", BROWSER);
    doc.append_child(panel, browser);

    for (tag, id, hidden) in [
        ("vbox", BORDER_START, false),
        ("vbox", SIDEBAR_BOX, true),
        ("splitter", SIDEBAR_SPLITTER, true),
        ("vbox", APP_CONTENT, false),
        ("vbox", BORDER_END, false),
    ] {
        let node = doc.create_element_with_id(tag, id);
        doc.set_hidden(node, hidden);
        doc.append_child(browser, node);
    }

    doc
}

/// A window without the regular browser chrome (popup, legacy layout).
pub fn bare_window() -> ChromeDocument {
    ChromeDocument::new("window", MAIN_WINDOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_window_has_all_anchors() {
        let doc = browser_window();
        for id in [
            BROWSER_PANEL,
            NAVIGATOR_TOOLBOX,
            BROWSER,
            BORDER_START,
            SIDEBAR_SPLITTER,
            APP_CONTENT,
            BORDER_END,
        ] {
            assert!(doc.get_element_by_id(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn sidebar_splitter_starts_hidden() {
        let doc = browser_window();
        let splitter = doc.get_element_by_id(SIDEBAR_SPLITTER).unwrap();
        assert!(doc.is_hidden(splitter));
    }

    #[test]
    fn browser_children_order() {
        let doc = browser_window();
        let browser = doc.get_element_by_id(BROWSER).unwrap();
        let ids: Vec<_> = doc
            .children(browser)
            .iter()
            .map(|&n| doc.element(n).unwrap().id().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![BORDER_START, SIDEBAR_BOX, SIDEBAR_SPLITTER, APP_CONTENT, BORDER_END]
        );
    }

    #[test]
    fn bare_window_has_no_anchors() {
        let doc = bare_window();
        assert!(doc.get_element_by_id(BORDER_END).is_none());
        assert_eq!(doc.len(), 1);
    }
}
