//! Tag host
//!
//! Owns live component instances and drives their lifecycle: upgrade scans,
//! exactly-once connect/disconnect delivery, and observed-attribute change
//! notification.

use crate::{TagComponent, TagRegistry};
use lumiere_dom::{Console, Document, NodeId};
use std::collections::HashMap;

/// Drives tag component lifecycle against one document
pub struct TagHost {
    registry: TagRegistry,
    console: Console,
    components: HashMap<NodeId, Box<dyn TagComponent>>,
}

impl TagHost {
    pub fn new(registry: TagRegistry, console: Console) -> Self {
        Self {
            registry,
            console,
            components: HashMap::new(),
        }
    }

    /// The registry backing this host
    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Whether a live instance is bound to the node
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.components.contains_key(&node)
    }

    /// Scan the document for defined tag names and connect every element
    /// that does not have a live instance yet. Returns how many were
    /// connected.
    pub fn upgrade(&mut self, doc: &mut Document) -> usize {
        let candidates: Vec<NodeId> = doc
            .tree()
            .descendants(doc.root())
            .into_iter()
            .filter(|&id| {
                doc.tree()
                    .tag_name(id)
                    .is_some_and(|tag| self.registry.is_defined(tag))
                    && !self.components.contains_key(&id)
            })
            .collect();

        let count = candidates.len();
        for node in candidates {
            self.connect(doc, node);
        }
        if count > 0 {
            tracing::debug!("Upgraded {count} tag instances");
        }
        count
    }

    /// Construct and connect a component for one node. No-op when the tag is
    /// not defined or the node already has a live instance.
    pub fn connect(&mut self, doc: &mut Document, node: NodeId) {
        if self.components.contains_key(&node) {
            return;
        }
        let Some(factory) = doc
            .tree()
            .tag_name(node)
            .and_then(|tag| self.registry.get(tag))
            .map(|definition| definition.factory)
        else {
            return;
        };

        let mut component = factory(doc, node, self.console.clone());
        component.connected(doc);
        self.components.insert(node, component);
    }

    /// Remove a node from the document and deliver `disconnected` to its
    /// instance. Listener release is the component's responsibility; the
    /// rendering boundary is dropped here.
    pub fn disconnect(&mut self, doc: &mut Document, node: NodeId) {
        let _ = doc.tree_mut().detach(node);
        if let Some(mut component) = self.components.remove(&node) {
            component.disconnected(doc);
            doc.detach_shadow(node);
        }
    }

    /// Write an attribute on a node and deliver `attribute_changed` when a
    /// live instance observes that attribute.
    pub fn set_attribute(&mut self, doc: &mut Document, node: NodeId, name: &str, value: &str) {
        let Ok(old) = doc.tree_mut().set_attribute(node, name, value) else {
            return;
        };

        let observed = doc
            .tree()
            .tag_name(node)
            .and_then(|tag| self.registry.get(tag))
            .is_some_and(|definition| definition.observes(name));
        if !observed {
            return;
        }
        if let Some(component) = self.components.get_mut(&node) {
            component.attribute_changed(doc, name, old.as_deref(), value);
        }
    }

    /// Read a live instance's value proxy
    pub fn value(&self, doc: &Document, node: NodeId) -> Option<String> {
        self.components.get(&node).map(|c| c.value(doc))
    }

    /// Write a live instance's value proxy. Returns false when no instance
    /// is bound to the node.
    pub fn set_value(&mut self, doc: &mut Document, node: NodeId, value: &str) -> bool {
        if let Some(component) = self.components.get_mut(&node) {
            component.set_value(doc, value);
            true
        } else {
            false
        }
    }

    /// Number of live instances
    pub fn live_count(&self) -> usize {
        self.components.len()
    }
}
