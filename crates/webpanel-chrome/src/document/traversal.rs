//! Lookup and traversal on the chrome tree.

use serde::Serialize;
use std::collections::BTreeMap;

use webpanel_common::NodeId;

use super::ChromeDocument;

/// Owned, serializable copy of an attached subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl ChromeDocument {
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(|el| el.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map(|el| el.children()).unwrap_or(&[])
    }

    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent).iter().position(|&c| c == node)
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let idx = self.index_in_parent(node)?;
        self.children(parent).get(idx + 1).copied()
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let idx = self.index_in_parent(node)?;
        idx.checked_sub(1)
            .and_then(|i| self.children(parent).get(i).copied())
    }

    /// Whether `node` is reachable from the root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.root {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Attached nodes in document (depth-first, pre-order) order.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    /// First attached element with the given id, in document order.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants()
            .into_iter()
            .find(|&n| self.element(n).and_then(|el| el.id()) == Some(element_id))
    }

    /// How many attached elements carry the given id.
    pub fn count_by_id(&self, element_id: &str) -> usize {
        self.descendants()
            .into_iter()
            .filter(|&n| self.element(n).and_then(|el| el.id()) == Some(element_id))
            .count()
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        self.snapshot_node(self.root)
    }

    fn snapshot_node(&self, node: NodeId) -> NodeSnapshot {
        let el = self.element(node);
        NodeSnapshot {
            tag: el.map(|e| e.tag().to_string()).unwrap_or_default(),
            id: el.and_then(|e| e.id()).map(str::to_string),
            attributes: el.map(|e| e.attributes().clone()).unwrap_or_default(),
            hidden: el.is_some_and(|e| e.is_hidden()),
            children: self
                .children(node)
                .iter()
                .map(|&c| self.snapshot_node(c))
                .collect(),
        }
    }

    /// Indented one-line-per-element rendering of the attached tree.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(self.root, 0, &mut out);
        out
    }

    fn outline_into(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(el) = self.element(node) else {
            return;
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(el.tag());
        if let Some(id) = el.id() {
            out.push('#');
            out.push_str(id);
        }
        if el.is_hidden() {
            out.push_str(" [hidden]");
        }
        if let Some(label) = el.attribute("label") {
            out.push_str(&format!(" label={label:?}"));
        }
        if let Some(src) = el.attribute("src") {
            out.push_str(&format!(" src={src:?}"));
        }
        out.push('\n');
        for &child in el.children() {
            self.outline_into(child, depth + 1, out);
        }
    }
}
