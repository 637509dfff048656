//! Shadow roots
//!
//! The rendering boundary: shadow children live in the same arena as the
//! light tree but are never linked under the document root, so document-order
//! scans cannot reach them.

use crate::NodeId;

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// Shadow root attached to a host element
#[derive(Debug, Clone)]
pub struct ShadowRoot {
    pub host: NodeId,
    pub mode: ShadowRootMode,
    children: Vec<NodeId>,
}

impl ShadowRoot {
    /// Create a new shadow root
    pub fn new(host: NodeId, mode: ShadowRootMode) -> Self {
        Self {
            host,
            mode,
            children: Vec::new(),
        }
    }

    /// Top-level shadow children
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Add a top-level child
    pub fn append_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// First top-level child, if any
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_root_children() {
        let mut shadow = ShadowRoot::new(NodeId(1), ShadowRootMode::Open);
        shadow.append_child(NodeId(2));
        shadow.append_child(NodeId(3));

        assert_eq!(shadow.children().len(), 2);
        assert_eq!(shadow.first_child(), Some(NodeId(2)));
    }
}
