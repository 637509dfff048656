//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; detaching a node only unlinks it from the light
//! tree, so NodeIds held by components stay valid for the document lifetime.

use crate::{DomError, DomResult, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree containing only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document root
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_valid() {
            self.nodes.get(id.0 as usize)
        } else {
            None
        }
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_valid() {
            self.nodes.get_mut(id.0 as usize)
        } else {
            None
        }
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Append a child as the last child of parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        self.detach(child)?;

        let old_last = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);
        {
            let node = self.get_mut(child).ok_or(DomError::NotFound)?;
            node.parent = parent;
            node.prev_sibling = old_last;
            node.next_sibling = NodeId::NONE;
        }
        if old_last.is_valid() {
            if let Some(prev) = self.get_mut(old_last) {
                prev.next_sibling = child;
            }
        }
        let parent_node = self.get_mut(parent).ok_or(DomError::NotFound)?;
        if !parent_node.first_child.is_valid() {
            parent_node.first_child = child;
        }
        parent_node.last_child = child;
        Ok(())
    }

    /// Unlink a node from its parent (no-op if already detached)
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.get(id).ok_or(DomError::NotFound)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = next;
            }
        }
        if next.is_valid() {
            if let Some(node) = self.get_mut(next) {
                node.prev_sibling = prev;
            }
        }
        if let Some(node) = self.get_mut(parent) {
            if node.first_child == id {
                node.first_child = next;
            }
            if node.last_child == id {
                node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
        Ok(())
    }

    /// Remove every child of a node
    pub fn clear_children(&mut self, parent: NodeId) {
        while let Some(first) = self.get(parent).map(|n| n.first_child) {
            if !first.is_valid() {
                break;
            }
            let _ = self.detach(first);
        }
    }

    /// Child IDs of a node, in order
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        while current.is_valid() {
            out.push(current);
            current = self.get(current).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        }
        out
    }

    /// Descendant IDs of a node in document order (depth-first, pre-order)
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(root, &mut out);
        out
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(node) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Get an attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Check if an element carries an attribute
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute, returning the old value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<Option<String>> {
        let elem = self
            .get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement)?;
        let old = elem.get_attr(name).map(str::to_string);
        elem.set_attr(name, value);
        Ok(old)
    }

    /// Concatenated text of a node's descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(|n| n.as_text()) {
            out.push_str(text);
        }
        for child in self.descendants(id) {
            if let Some(text) = self.get(child).and_then(|n| n.as_text()) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace a node's children with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        if self.get(id).is_none() {
            return Err(DomError::NotFound);
        }
        self.clear_children(id);
        let text_node = self.create_text(text);
        self.append_child(id, text_node)
    }

    /// Every element under root carrying the given attribute, document order
    pub fn elements_with_attribute(&self, root: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.has_attribute(id, name))
            .collect()
    }

    /// Every element under root with the given tag name, document order
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.tag_name(id).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }
}
