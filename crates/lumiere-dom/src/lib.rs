//! Lumière DOM - headless document tree
//!
//! Arena-based DOM with attributes, shadow roots, a synchronous event
//! dispatcher, and the user-visible console channel. Every component and
//! scanner receives a `Document` explicitly; there is no ambient document.

mod console;
mod document;
mod events;
mod node;
mod shadow;
mod tree;

pub use console::{Console, ConsoleEntry, ConsoleLevel};
pub use document::Document;
pub use events::{Event, EventType, Handler, ListenerId};
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use shadow::{ShadowRoot, ShadowRootMode};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Check that this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

/// DOM operation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomError {
    #[error("Node not found")]
    NotFound,

    #[error("Node is not an element")]
    NotAnElement,

    #[error("Node is not a child of the given parent")]
    NotAChild,

    #[error("Shadow root already attached to host")]
    ShadowAlreadyAttached,
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;
