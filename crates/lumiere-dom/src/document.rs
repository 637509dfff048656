//! Document - high-level document API
//!
//! Owns the light tree, the shadow roots, and the listener table. Passed
//! explicitly to every component and scanner; nothing in this workspace
//! reaches for an ambient document.

use crate::events::{EventListeners, Handler};
use crate::{
    DomError, DomResult, DomTree, Event, EventType, ListenerId, NodeId, ShadowRoot, ShadowRootMode,
};
use std::collections::HashMap;

/// A live document
pub struct Document {
    tree: DomTree,
    url: String,
    shadow_roots: HashMap<NodeId, ShadowRoot>,
    listeners: EventListeners,
    /// Listener ids taken out of the table while their node is dispatching
    in_flight: Vec<ListenerId>,
    /// Removals requested for in-flight listeners, applied after dispatch
    pending_removals: Vec<ListenerId>,
}

impl Document {
    /// Create an empty document
    pub fn new(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            shadow_roots: HashMap::new(),
            listeners: EventListeners::default(),
            in_flight: Vec::new(),
            pending_removals: Vec::new(),
        }
    }

    /// Document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Document root
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Every element in the light tree carrying the attribute, document order.
    /// Shadow content is never reached: it is not linked under the root.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.tree.elements_with_attribute(self.tree.root(), name)
    }

    /// Every element in the light tree with the tag name, document order
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.tree.elements_by_tag(self.tree.root(), tag)
    }

    /// First element whose `id` attribute matches
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node| self.tree.get_attribute(node, "id") == Some(id))
    }

    // --- shadow roots -----------------------------------------------------

    /// Attach a shadow root to a host element. One per host; a second attach
    /// is an error (initialization happens exactly once).
    pub fn attach_shadow(&mut self, host: NodeId, mode: ShadowRootMode) -> DomResult<()> {
        if self.tree.get(host).is_none() {
            return Err(DomError::NotFound);
        }
        if self.tree.get(host).is_some_and(|n| !n.is_element()) {
            return Err(DomError::NotAnElement);
        }
        if self.shadow_roots.contains_key(&host) {
            return Err(DomError::ShadowAlreadyAttached);
        }
        self.shadow_roots.insert(host, ShadowRoot::new(host, mode));
        Ok(())
    }

    /// The shadow root attached to a host, if any
    pub fn shadow_root(&self, host: NodeId) -> Option<&ShadowRoot> {
        self.shadow_roots.get(&host)
    }

    /// Remove the shadow root from a host. Its nodes stay in the arena but
    /// become unreachable.
    pub fn detach_shadow(&mut self, host: NodeId) -> Option<ShadowRoot> {
        self.shadow_roots.remove(&host)
    }

    /// Append a detached node as a top-level shadow child
    pub fn shadow_append(&mut self, host: NodeId, child: NodeId) -> DomResult<()> {
        if self.tree.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        let root = self.shadow_roots.get_mut(&host).ok_or(DomError::NotFound)?;
        root.append_child(child);
        Ok(())
    }

    // --- events -----------------------------------------------------------

    /// Attach a listener. The returned handle is the only way to detach it.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: EventType,
        handler: Handler,
    ) -> ListenerId {
        self.listeners.add(node, event_type, handler)
    }

    /// Detach the registration behind the handle. Returns false for a handle
    /// that was never issued or was already removed.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id) {
            return true;
        }
        if self.in_flight.contains(&id) && !self.pending_removals.contains(&id) {
            self.pending_removals.push(id);
            return true;
        }
        false
    }

    /// Listeners currently attached to a node
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.count(node)
    }

    /// Listeners attached anywhere in the document
    pub fn total_listeners(&self) -> usize {
        self.listeners.total()
    }

    /// Dispatch an event to its target's listeners, synchronously, in
    /// registration order. Returns the number of listeners that fired.
    /// Listeners added to the target during dispatch do not fire for this
    /// event; removals requested during dispatch take effect afterwards.
    pub fn dispatch(&mut self, event: Event) -> usize {
        let mut entries = self.listeners.take(event.target);
        let taken_ids: Vec<ListenerId> = entries.iter().map(|e| e.id).collect();
        self.in_flight.extend(&taken_ids);

        let mut fired = 0;
        for entry in &mut entries {
            if entry.event_type != event.event_type {
                continue;
            }
            if self.pending_removals.contains(&entry.id) {
                continue;
            }
            (entry.handler)(self, &event);
            fired += 1;
        }

        self.in_flight.retain(|id| !taken_ids.contains(id));
        let removed: Vec<ListenerId> = self
            .pending_removals
            .iter()
            .copied()
            .filter(|id| taken_ids.contains(id))
            .collect();
        self.pending_removals.retain(|id| !removed.contains(id));
        self.listeners.restore(event.target, entries, &removed);
        fired
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut doc = Document::default();
        let button = doc.tree_mut().create_element("button");
        let root = doc.root();
        doc.tree_mut().append_child(root, button).unwrap();

        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            doc.add_event_listener(
                button,
                EventType::Click,
                Box::new(move |_, _| order.borrow_mut().push(tag)),
            );
        }

        let fired = doc.dispatch(Event::new(EventType::Click, button));
        assert_eq!(fired, 2);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_remove_listener_by_handle() {
        let mut doc = Document::default();
        let node = doc.tree_mut().create_element("div");

        let id = doc.add_event_listener(node, EventType::Click, Box::new(|_, _| {}));
        assert_eq!(doc.listener_count(node), 1);
        assert!(doc.remove_event_listener(id));
        assert_eq!(doc.listener_count(node), 0);
        // A second removal with the same handle is a no-op
        assert!(!doc.remove_event_listener(id));
    }

    #[test]
    fn test_removal_during_dispatch_takes_effect_after() {
        let mut doc = Document::default();
        let node = doc.tree_mut().create_element("div");

        let hits = Rc::new(RefCell::new(0));
        let hits_inner = Rc::clone(&hits);
        // The listener removes itself at first delivery
        let slot: Rc<RefCell<Option<ListenerId>>> = Rc::new(RefCell::new(None));
        let slot_inner = Rc::clone(&slot);
        let id = doc.add_event_listener(
            node,
            EventType::Click,
            Box::new(move |doc, _| {
                *hits_inner.borrow_mut() += 1;
                if let Some(id) = *slot_inner.borrow() {
                    doc.remove_event_listener(id);
                }
            }),
        );
        *slot.borrow_mut() = Some(id);

        doc.dispatch(Event::new(EventType::Click, node));
        doc.dispatch(Event::new(EventType::Click, node));
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(doc.listener_count(node), 0);
    }

    #[test]
    fn test_shadow_children_invisible_to_document_scans() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-input");
        let root = doc.root();
        doc.tree_mut().append_child(root, host).unwrap();
        doc.attach_shadow(host, ShadowRootMode::Open).unwrap();

        let inner = doc.tree_mut().create_element("input");
        doc.tree_mut().set_attribute(inner, "lm-post", "hidden").unwrap();
        doc.shadow_append(host, inner).unwrap();

        assert!(doc.elements_with_attribute("lm-post").is_empty());
        assert_eq!(doc.shadow_root(host).unwrap().first_child(), Some(inner));
    }

    #[test]
    fn test_second_shadow_attach_rejected() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-video");
        doc.attach_shadow(host, ShadowRootMode::Open).unwrap();

        assert!(matches!(
            doc.attach_shadow(host, ShadowRootMode::Open),
            Err(DomError::ShadowAlreadyAttached)
        ));
    }
}
