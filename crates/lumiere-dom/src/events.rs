//! Events
//!
//! Synchronous event dispatch. Listeners fire in registration order on the
//! target node. Removal is strictly by the `ListenerId` handed out at
//! registration time; there is no removal by structural comparison, so the
//! original reference must be retained by whoever wants to detach.

use crate::{Document, NodeId};
use std::collections::HashMap;

/// Event types delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Input,
    Change,
    Submit,
    Play,
    Pause,
    Ended,
    Upload,
}

/// A dispatched event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    /// Payload (input value, uploaded file text, ...)
    pub detail: Option<String>,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            detail: None,
        }
    }

    pub fn with_detail(event_type: EventType, target: NodeId, detail: impl Into<String>) -> Self {
        Self {
            event_type,
            target,
            detail: Some(detail.into()),
        }
    }
}

/// Handle identifying one listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Listener callback
pub type Handler = Box<dyn FnMut(&mut Document, &Event)>;

pub(crate) struct ListenerEntry {
    pub id: ListenerId,
    pub event_type: EventType,
    pub handler: Handler,
}

/// Per-node listener table
#[derive(Default)]
pub(crate) struct EventListeners {
    by_node: HashMap<NodeId, Vec<ListenerEntry>>,
    next_id: u64,
}

impl EventListeners {
    pub fn add(&mut self, node: NodeId, event_type: EventType, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.by_node.entry(node).or_default().push(ListenerEntry {
            id,
            event_type,
            handler,
        });
        id
    }

    /// Remove the registration with the given handle. Returns false when the
    /// handle is unknown (already removed, or never issued).
    pub fn remove(&mut self, id: ListenerId) -> bool {
        for entries in self.by_node.values_mut() {
            if let Some(index) = entries.iter().position(|e| e.id == id) {
                entries.remove(index);
                return true;
            }
        }
        false
    }

    /// Number of listeners attached to a node (any event type)
    pub fn count(&self, node: NodeId) -> usize {
        self.by_node.get(&node).map_or(0, Vec::len)
    }

    /// Total listeners across all nodes
    pub fn total(&self) -> usize {
        self.by_node.values().map(Vec::len).sum()
    }

    /// Take every entry for a node, leaving the slot empty during dispatch
    pub fn take(&mut self, node: NodeId) -> Vec<ListenerEntry> {
        self.by_node.remove(&node).unwrap_or_default()
    }

    /// Return entries after dispatch, merging with any added meanwhile and
    /// dropping any removed meanwhile.
    pub fn restore(&mut self, node: NodeId, entries: Vec<ListenerEntry>, removed: &[ListenerId]) {
        let added = self.by_node.remove(&node).unwrap_or_default();
        let mut merged: Vec<ListenerEntry> = entries
            .into_iter()
            .filter(|e| !removed.contains(&e.id))
            .collect();
        merged.extend(added);
        if !merged.is_empty() {
            self.by_node.insert(node, merged);
        }
    }
}
