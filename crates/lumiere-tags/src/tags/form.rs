//! `<lm-form>` - form wrapper
//!
//! Wraps a native `<form>`. While connected, a submit listener logs one
//! `name: value` line per named field under the form. The handle is retained
//! at attach time and reused at detach time.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, EventType, ListenerId, NodeId};

pub struct FormTag {
    host: NodeId,
    form: NodeId,
    console: Console,
    submit_listener: Option<ListenerId>,
}

impl FormTag {
    pub fn new(doc: &mut Document, host: NodeId, console: Console) -> Self {
        let form = mount_wrapped(doc, host, "form");
        Self {
            host,
            form,
            console,
            submit_listener: None,
        }
    }

    /// The wrapped native form element
    pub fn form(&self) -> NodeId {
        self.form
    }
}

impl TagComponent for FormTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let form = self.form;
        let console = self.console.clone();
        let id = doc.add_event_listener(
            form,
            EventType::Submit,
            Box::new(move |doc, _| {
                for field in doc.tree().descendants(form) {
                    if let Some(name) = doc.tree().get_attribute(field, "name") {
                        let value = doc.tree().get_attribute(field, "value").unwrap_or_default();
                        console.log(format!("{name}: {value}"));
                    }
                }
            }),
        );
        self.submit_listener = Some(id);
    }

    fn disconnected(&mut self, doc: &mut Document) {
        if let Some(id) = self.submit_listener.take() {
            doc.remove_event_listener(id);
        }
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, console: Console) -> Box<dyn TagComponent> {
    Box::new(FormTag::new(doc, host, console))
}
