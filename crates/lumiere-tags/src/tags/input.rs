//! `<lm-input>` - text input wrapper
//!
//! Wraps a native `<input type="text">` in the rendering boundary. While
//! connected, an `input` listener on the wrapped element re-emits a `change`
//! event on the host carrying the current value.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, Event, EventType, ListenerId, NodeId};

pub struct InputTag {
    host: NodeId,
    input: NodeId,
    input_listener: Option<ListenerId>,
}

impl InputTag {
    pub fn new(doc: &mut Document, host: NodeId) -> Self {
        let input = mount_wrapped(doc, host, "input");
        let _ = doc.tree_mut().set_attribute(input, "type", "text");
        Self {
            host,
            input,
            input_listener: None,
        }
    }

    /// The wrapped native input
    pub fn input(&self) -> NodeId {
        self.input
    }
}

impl TagComponent for InputTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let host = self.host;
        let input = self.input;
        // The handle is retained; disconnect removes this exact registration.
        let id = doc.add_event_listener(
            input,
            EventType::Input,
            Box::new(move |doc, _| {
                let value = doc
                    .tree()
                    .get_attribute(input, "value")
                    .unwrap_or_default()
                    .to_string();
                doc.dispatch(Event::with_detail(EventType::Change, host, value));
            }),
        );
        self.input_listener = Some(id);
    }

    fn disconnected(&mut self, doc: &mut Document) {
        if let Some(id) = self.input_listener.take() {
            doc.remove_event_listener(id);
        }
    }

    fn value(&self, doc: &Document) -> String {
        doc.tree()
            .get_attribute(self.input, "value")
            .unwrap_or_default()
            .to_string()
    }

    fn set_value(&mut self, doc: &mut Document, value: &str) {
        let _ = doc.tree_mut().set_attribute(self.input, "value", value);
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(InputTag::new(doc, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (Document, NodeId) {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-input");
        let root = doc.root();
        doc.tree_mut().append_child(root, host).unwrap();
        (doc, host)
    }

    #[test]
    fn test_value_proxy_roundtrip() {
        let (mut doc, host) = setup();
        let mut tag = InputTag::new(&mut doc, host);

        tag.set_value(&mut doc, "hello");
        assert_eq!(tag.value(&doc), "hello");
        tag.set_value(&mut doc, "hello");
        assert_eq!(tag.value(&doc), "hello");
    }

    #[test]
    fn test_input_reemitted_as_change_on_host() {
        let (mut doc, host) = setup();
        let mut tag = InputTag::new(&mut doc, host);
        tag.connected(&mut doc);
        tag.set_value(&mut doc, "typed");

        let seen = Rc::new(RefCell::new(None));
        let seen_inner = Rc::clone(&seen);
        doc.add_event_listener(
            host,
            EventType::Change,
            Box::new(move |_, event| {
                *seen_inner.borrow_mut() = event.detail.clone();
            }),
        );

        doc.dispatch(Event::new(EventType::Input, tag.input()));
        assert_eq!(seen.borrow().as_deref(), Some("typed"));
    }

    #[test]
    fn test_disconnect_releases_listener() {
        let (mut doc, host) = setup();
        let mut tag = InputTag::new(&mut doc, host);
        tag.connected(&mut doc);
        assert_eq!(doc.listener_count(tag.input()), 1);

        tag.disconnected(&mut doc);
        assert_eq!(doc.listener_count(tag.input()), 0);
        assert_eq!(doc.total_listeners(), 0);
        // Nothing left capable of firing
        assert_eq!(doc.dispatch(Event::new(EventType::Input, tag.input())), 0);
    }
}
