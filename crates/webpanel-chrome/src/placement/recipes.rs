//! One insertion recipe per slot.

use tracing::debug;
use webpanel_common::{NodeId, PlacementError, Slot, WindowId};

use crate::document::ChromeDocument;
use crate::layout::{BORDER_END, BORDER_START, BROWSER_PANEL, NAVIGATOR_TOOLBOX, SIDEBAR_SPLITTER};

pub const SPLITTER_END: &str = "sidebar-splitter-end";
pub const SPLITTER_ABOVE: &str = "sidebar-splitter-above";
pub const SPLITTER_BELOW: &str = "sidebar-splitter-below";

const SPLITTER_CLASS: &str = "chromeclass-extrachrome sidebar-splitter";

/// Id of the element a slot positions itself against.
pub fn anchor_id(slot: Slot) -> &'static str {
    match slot {
        Slot::BeforeBrowser => BORDER_START,
        Slot::AfterBrowser => BORDER_END,
        Slot::AboveBrowser => NAVIGATOR_TOOLBOX,
        Slot::BelowBrowser => BROWSER_PANEL,
    }
}

/// Id of the separator associated with a slot. `before_browser` reuses the
/// window's own sidebar splitter; the others are created on demand.
pub fn separator_id(slot: Slot) -> &'static str {
    match slot {
        Slot::BeforeBrowser => SIDEBAR_SPLITTER,
        Slot::AfterBrowser => SPLITTER_END,
        Slot::AboveBrowser => SPLITTER_ABOVE,
        Slot::BelowBrowser => SPLITTER_BELOW,
    }
}

/// Attach `surface` at `slot`, creating the slot's separator on first use.
///
/// An attached surface is moved, so it is never present at two positions.
/// All anchors are resolved before the tree is touched: on error the
/// document is unchanged.
pub fn place(
    doc: &mut ChromeDocument,
    window: WindowId,
    slot: Slot,
    surface: NodeId,
) -> Result<(), PlacementError> {
    if !doc.contains(surface) {
        return Err(PlacementError::DetachedNode(window));
    }

    let missing = |anchor: &'static str| PlacementError::MissingAnchor {
        window,
        slot,
        anchor,
    };
    let anchor = doc
        .get_element_by_id(anchor_id(slot))
        .ok_or_else(|| missing(anchor_id(slot)))?;

    let attached = match slot {
        Slot::BeforeBrowser => {
            let splitter = doc
                .get_element_by_id(SIDEBAR_SPLITTER)
                .ok_or_else(|| missing(SIDEBAR_SPLITTER))?;
            if doc.parent(anchor).is_none() {
                return Err(missing(BORDER_START));
            }
            doc.set_hidden(splitter, false);
            doc.insert_after(anchor, surface)
        }
        Slot::AfterBrowser => {
            let parent = doc.parent(anchor).ok_or_else(|| missing(BORDER_END))?;
            if doc.get_element_by_id(SPLITTER_END).is_none() {
                let splitter = create_splitter(doc, window, SPLITTER_END);
                doc.insert_before(parent, splitter, Some(anchor));
            }
            doc.insert_before(parent, surface, Some(anchor))
        }
        Slot::AboveBrowser => {
            let parent = doc
                .parent(anchor)
                .ok_or_else(|| missing(NAVIGATOR_TOOLBOX))?;
            let splitter = match doc.get_element_by_id(SPLITTER_ABOVE) {
                Some(s) => s,
                None => {
                    let s = create_splitter(doc, window, SPLITTER_ABOVE);
                    doc.insert_after(anchor, s);
                    s
                }
            };
            let parent = doc.parent(splitter).unwrap_or(parent);
            doc.insert_before(parent, surface, Some(splitter))
        }
        Slot::BelowBrowser => {
            if doc.get_element_by_id(SPLITTER_BELOW).is_none() {
                let splitter = create_splitter(doc, window, SPLITTER_BELOW);
                doc.append_child(anchor, splitter);
            }
            doc.append_child(anchor, surface)
        }
    };

    if attached {
        Ok(())
    } else {
        Err(PlacementError::DetachedNode(window))
    }
}

fn create_splitter(doc: &mut ChromeDocument, window: WindowId, id: &str) -> NodeId {
    let splitter = doc.create_element_with_id("splitter", id);
    doc.set_attribute(splitter, "class", SPLITTER_CLASS);
    debug!(%window, splitter = id, "created panel splitter");
    splitter
}

/// Which slot `surface` currently occupies, judged by its position.
pub fn locate(doc: &ChromeDocument, surface: NodeId) -> Option<Slot> {
    if !doc.is_connected(surface) {
        return None;
    }
    let id_of = |n: Option<NodeId>| n.and_then(|n| doc.element(n)).and_then(|el| el.id());

    if id_of(doc.previous_sibling(surface)) == Some(BORDER_START) {
        return Some(Slot::BeforeBrowser);
    }
    if id_of(doc.next_sibling(surface)) == Some(BORDER_END) {
        return Some(Slot::AfterBrowser);
    }
    if id_of(doc.parent(surface)) == Some(BROWSER_PANEL) {
        let index = doc.index_in_parent(surface)?;
        let above_splitter = doc
            .get_element_by_id(SPLITTER_ABOVE)
            .and_then(|s| doc.index_in_parent(s));
        return match above_splitter {
            Some(split) if index < split => Some(Slot::AboveBrowser),
            _ => Some(Slot::BelowBrowser),
        };
    }
    None
}
