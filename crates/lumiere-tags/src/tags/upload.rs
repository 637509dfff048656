//! `<lm-upload>` - file upload wrapper (text mode)
//!
//! Wraps a native `<input type="file">`. The file reader itself is external;
//! the read text arrives as the detail of a `change` event on the wrapped
//! input, is re-emitted as an `upload` event on the host, and the upload
//! handler logs it. Both handles are retained and released on disconnect.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, Event, EventType, ListenerId, NodeId};

pub struct UploadTag {
    host: NodeId,
    file_input: NodeId,
    console: Console,
    change_listener: Option<ListenerId>,
    upload_listener: Option<ListenerId>,
}

impl UploadTag {
    pub fn new(doc: &mut Document, host: NodeId, console: Console) -> Self {
        let file_input = mount_wrapped(doc, host, "input");
        let _ = doc.tree_mut().set_attribute(file_input, "type", "file");
        Self {
            host,
            file_input,
            console,
            change_listener: None,
            upload_listener: None,
        }
    }

    /// The wrapped native file input
    pub fn file_input(&self) -> NodeId {
        self.file_input
    }
}

impl TagComponent for UploadTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let host = self.host;
        self.change_listener = Some(doc.add_event_listener(
            self.file_input,
            EventType::Change,
            Box::new(move |doc, event| {
                let text = event.detail.clone().unwrap_or_default();
                doc.dispatch(Event::with_detail(EventType::Upload, host, text));
            }),
        ));

        let console = self.console.clone();
        self.upload_listener = Some(doc.add_event_listener(
            host,
            EventType::Upload,
            Box::new(move |_, event| {
                let text = event.detail.as_deref().unwrap_or_default();
                console.log(format!("Uploaded file data: {text}"));
            }),
        ));
    }

    fn disconnected(&mut self, doc: &mut Document) {
        for id in [self.change_listener.take(), self.upload_listener.take()]
            .into_iter()
            .flatten()
        {
            doc.remove_event_listener(id);
        }
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, console: Console) -> Box<dyn TagComponent> {
    Box::new(UploadTag::new(doc, host, console))
}
