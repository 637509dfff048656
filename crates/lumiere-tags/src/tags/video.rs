//! `<lm-video>` - video wrapper with playback notifications
//!
//! Wraps a native `<video>`. While connected, play/pause/ended events on the
//! wrapped element emit console notifications. All three listener handles
//! are retained and released on disconnect.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, EventType, ListenerId, NodeId};

pub struct VideoTag {
    host: NodeId,
    video: NodeId,
    console: Console,
    playback_listeners: Vec<ListenerId>,
}

impl VideoTag {
    pub fn new(doc: &mut Document, host: NodeId, console: Console) -> Self {
        let video = mount_wrapped(doc, host, "video");
        if let Some(src) = doc.tree().get_attribute(host, "src").map(str::to_string) {
            let _ = doc.tree_mut().set_attribute(video, "src", &src);
        }
        Self {
            host,
            video,
            console,
            playback_listeners: Vec::new(),
        }
    }

    /// The wrapped native video element
    pub fn video(&self) -> NodeId {
        self.video
    }
}

impl TagComponent for VideoTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let notifications = [
            (EventType::Play, "Video started playing"),
            (EventType::Pause, "Video paused"),
            (EventType::Ended, "Video ended"),
        ];
        for (event_type, message) in notifications {
            let console = self.console.clone();
            let id = doc.add_event_listener(
                self.video,
                event_type,
                Box::new(move |_, _| console.log(message)),
            );
            self.playback_listeners.push(id);
        }
    }

    fn disconnected(&mut self, doc: &mut Document) {
        for id in self.playback_listeners.drain(..) {
            doc.remove_event_listener(id);
        }
    }

    fn attribute_changed(&mut self, doc: &mut Document, name: &str, _old: Option<&str>, new: &str) {
        if name == "src" {
            let _ = doc.tree_mut().set_attribute(self.video, "src", new);
        }
    }

    fn value(&self, doc: &Document) -> String {
        doc.tree()
            .get_attribute(self.video, "src")
            .unwrap_or_default()
            .to_string()
    }

    fn set_value(&mut self, doc: &mut Document, value: &str) {
        let _ = doc.tree_mut().set_attribute(self.video, "src", value);
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, console: Console) -> Box<dyn TagComponent> {
    Box::new(VideoTag::new(doc, host, console))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_dom::{ConsoleLevel, Event};

    #[test]
    fn test_playback_notifications() {
        let mut doc = Document::default();
        let console = Console::new();
        let host = doc.tree_mut().create_element("lm-video");
        let mut tag = VideoTag::new(&mut doc, host, console.clone());
        tag.connected(&mut doc);

        doc.dispatch(Event::new(EventType::Play, tag.video()));
        doc.dispatch(Event::new(EventType::Ended, tag.video()));

        let logs = console.messages(ConsoleLevel::Log);
        assert_eq!(logs, vec!["Video started playing", "Video ended"]);
    }

    #[test]
    fn test_disconnect_releases_all_playback_listeners() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-video");
        let mut tag = VideoTag::new(&mut doc, host, Console::new());
        tag.connected(&mut doc);
        assert_eq!(doc.listener_count(tag.video()), 3);

        tag.disconnected(&mut doc);
        assert_eq!(doc.listener_count(tag.video()), 0);
        assert_eq!(doc.dispatch(Event::new(EventType::Play, tag.video())), 0);
    }
}
