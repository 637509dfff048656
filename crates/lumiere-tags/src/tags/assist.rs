//! `<lm-ai>` - click-triggered assistant hook
//!
//! A click on the host logs the processing notice. The listener is attached
//! on connect (not in the constructor) so the handle can be released on
//! disconnect.

use crate::component::TagComponent;
use lumiere_dom::{Console, Document, EventType, ListenerId, NodeId};

pub struct AssistTag {
    host: NodeId,
    console: Console,
    click_listener: Option<ListenerId>,
}

impl AssistTag {
    pub fn new(host: NodeId, console: Console) -> Self {
        Self {
            host,
            console,
            click_listener: None,
        }
    }
}

impl TagComponent for AssistTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let console = self.console.clone();
        let id = doc.add_event_listener(
            self.host,
            EventType::Click,
            Box::new(move |_, _| console.log("Processing data...")),
        );
        self.click_listener = Some(id);
    }

    fn disconnected(&mut self, doc: &mut Document) {
        if let Some(id) = self.click_listener.take() {
            doc.remove_event_listener(id);
        }
    }
}

/// Registered factory
pub fn create(_doc: &mut Document, host: NodeId, console: Console) -> Box<dyn TagComponent> {
    Box::new(AssistTag::new(host, console))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_dom::{ConsoleLevel, Event};

    #[test]
    fn test_click_logs_processing_notice() {
        let mut doc = Document::default();
        let console = Console::new();
        let host = doc.tree_mut().create_element("lm-ai");
        let mut tag = AssistTag::new(host, console.clone());
        tag.connected(&mut doc);

        doc.dispatch(Event::new(EventType::Click, host));
        assert_eq!(console.messages(ConsoleLevel::Log), vec!["Processing data..."]);

        tag.disconnected(&mut doc);
        assert_eq!(doc.dispatch(Event::new(EventType::Click, host)), 0);
    }
}
