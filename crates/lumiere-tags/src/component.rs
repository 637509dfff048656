//! Tag component trait
//!
//! Lifecycle contract for one live tag instance. Construction builds the
//! rendering boundary exactly once; `connected`/`disconnected` are delivered
//! exactly once per insertion/removal by the `TagHost`; `attribute_changed`
//! only fires for attributes the definition declares as observed.

use lumiere_dom::{Console, Document, NodeId, ShadowRootMode};

/// Constructor for a tag instance. Runs when the host element is upgraded;
/// builds the component's rendering boundary and initial configuration.
pub type TagFactory = fn(&mut Document, NodeId, Console) -> Box<dyn TagComponent>;

/// One live tag instance bound to a host element
pub trait TagComponent {
    /// The host element this instance is bound to
    fn host(&self) -> NodeId;

    /// Delivered once per insertion into a live document. Attach listeners
    /// and perform the first render of derived children here.
    fn connected(&mut self, _doc: &mut Document) {}

    /// Delivered once per removal. Every listener attached in `connected`
    /// must be released here, using the handles retained at attach time.
    fn disconnected(&mut self, _doc: &mut Document) {}

    /// Delivered when an observed attribute mutates. Re-derive the
    /// corresponding wrapped-element property synchronously.
    fn attribute_changed(&mut self, _doc: &mut Document, _name: &str, _old: Option<&str>, _new: &str) {
    }

    /// Read the wrapped element's value-bearing property
    fn value(&self, _doc: &Document) -> String {
        String::new()
    }

    /// Write the wrapped element's value-bearing property
    fn set_value(&mut self, _doc: &mut Document, _value: &str) {}
}

/// Attach the rendering boundary and mount a single wrapped native element
/// inside it. Construction is the single initialization point; callers only
/// run this once per host.
pub(crate) fn mount_wrapped(doc: &mut Document, host: NodeId, tag: &str) -> NodeId {
    if let Err(err) = doc.attach_shadow(host, ShadowRootMode::Open) {
        tracing::debug!("shadow attach on existing boundary: {err}");
    }
    let inner = doc.tree_mut().create_element(tag);
    let _ = doc.shadow_append(host, inner);
    inner
}
