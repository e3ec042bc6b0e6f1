//! Mutating operations on the chrome tree: insert, append, move, remove.

use webpanel_common::NodeId;

use super::ChromeDocument;

impl ChromeDocument {
    /// Insert `node` into `parent` before `reference`, or at the end when
    /// `reference` is `None`. An attached `node` is moved, never duplicated.
    ///
    /// Returns `false` if any node is unknown, `reference` is not a child of
    /// `parent`, or the move would make `node` its own ancestor.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> bool {
        if !self.contains(parent) || !self.contains(node) {
            return false;
        }
        if self.is_inclusive_ancestor(node, parent) {
            return false;
        }

        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return false;
            }
            // Inserting a node before itself leaves it where it is.
            if reference == node {
                return true;
            }
        }

        self.detach(node);

        let index = match reference {
            Some(r) => self.index_in_parent(r),
            None => None,
        };
        let Some(parent_el) = self.element_mut(parent) else {
            return false;
        };
        match index {
            Some(i) => parent_el.children.insert(i, node),
            None => parent_el.children.push(node),
        }
        if let Some(el) = self.element_mut(node) {
            el.parent = Some(parent);
        }
        true
    }

    /// Append `node` as the last child of `parent`, moving it if attached.
    pub fn append_child(&mut self, parent: NodeId, node: NodeId) -> bool {
        self.insert_before(parent, node, None)
    }

    /// Insert `node` as the next sibling of `anchor`.
    pub fn insert_after(&mut self, anchor: NodeId, node: NodeId) -> bool {
        let Some(parent) = self.parent(anchor) else {
            return false;
        };
        let reference = self.next_sibling(anchor);
        self.insert_before(parent, node, reference)
    }

    /// Unlink `node` from its parent, keeping it (and its subtree) alive.
    /// Returns `true` if it had a parent.
    pub fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.parent(node) else {
            return false;
        };
        if let Some(parent_el) = self.element_mut(parent) {
            parent_el.children.retain(|&c| c != node);
        }
        if let Some(el) = self.element_mut(node) {
            el.parent = None;
        }
        true
    }

    /// Detach `node` and free it together with its whole subtree.
    /// The root cannot be removed.
    pub fn remove(&mut self, node: NodeId) -> bool {
        if node == self.root || !self.contains(node) {
            return false;
        }
        self.detach(node);

        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            if let Some(el) = self.nodes.get_mut(current.0).and_then(Option::take) {
                pending.extend(el.children);
            }
        }
        true
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }
}
