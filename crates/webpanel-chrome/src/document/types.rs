//! Core types for the chrome tree: Element and ChromeDocument.

use std::collections::BTreeMap;

use webpanel_common::NodeId;

/// One element of a window's chrome tree.
#[derive(Debug, Clone)]
pub struct Element {
    pub(super) tag: String,
    pub(super) id: Option<String>,
    pub(super) attributes: BTreeMap<String, String>,
    pub(super) hidden: bool,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            attributes: BTreeMap::new(),
            hidden: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed element tree for a single window.
///
/// Nodes are addressed by [`NodeId`]. Removed nodes leave a hole so ids are
/// never reused within one document.
#[derive(Debug, Clone)]
pub struct ChromeDocument {
    pub(super) nodes: Vec<Option<Element>>,
    pub(super) root: NodeId,
}

impl ChromeDocument {
    /// A document holding only a root element.
    pub fn new(root_tag: &str, root_id: &str) -> Self {
        let mut root = Element::new(root_tag);
        root.id = Some(root_id.to_string());
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0).and_then(Option::as_ref)
    }

    pub(super) fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).and_then(Option::as_mut)
    }

    /// Whether `node` is still alive (attached or not).
    pub fn contains(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Element::new(tag)));
        id
    }

    /// Create a detached element with an element id.
    pub fn create_element_with_id(&mut self, tag: &str, element_id: &str) -> NodeId {
        let node = self.create_element(tag);
        if let Some(el) = self.element_mut(node) {
            el.id = Some(element_id.to_string());
        }
        node
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) -> bool {
        match self.element_mut(node) {
            Some(el) => {
                el.attributes.insert(name.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attribute(name))
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) -> bool {
        match self.element_mut(node) {
            Some(el) => {
                el.hidden = hidden;
                true
            }
            None => false,
        }
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| el.hidden)
    }

    /// Number of live elements, attached or detached.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
