//! `<lm-audio>` - audio wrapper
//!
//! Wraps a native `<audio>` with controls on and autoplay off. The media
//! source comes from the host's `src` attribute; a missing source leaves the
//! wrapped element unset.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, NodeId};

pub struct AudioTag {
    host: NodeId,
    audio: NodeId,
}

impl AudioTag {
    pub fn new(doc: &mut Document, host: NodeId) -> Self {
        let audio = mount_wrapped(doc, host, "audio");
        let _ = doc.tree_mut().set_attribute(audio, "controls", "");
        Self { host, audio }
    }

    /// The wrapped native audio element
    pub fn audio(&self) -> NodeId {
        self.audio
    }

    fn sync_src(&self, doc: &mut Document) {
        if let Some(src) = doc.tree().get_attribute(self.host, "src").map(str::to_string) {
            let _ = doc.tree_mut().set_attribute(self.audio, "src", &src);
        }
    }
}

impl TagComponent for AudioTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        self.sync_src(doc);
    }

    fn attribute_changed(&mut self, doc: &mut Document, name: &str, _old: Option<&str>, new: &str) {
        if name == "src" {
            let _ = doc.tree_mut().set_attribute(self.audio, "src", new);
        }
    }

    fn value(&self, doc: &Document) -> String {
        doc.tree()
            .get_attribute(self.audio, "src")
            .unwrap_or_default()
            .to_string()
    }

    fn set_value(&mut self, doc: &mut Document, value: &str) {
        let _ = doc.tree_mut().set_attribute(self.audio, "src", value);
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(AudioTag::new(doc, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_src_leaves_source_unset() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-audio");
        let mut tag = AudioTag::new(&mut doc, host);
        tag.connected(&mut doc);

        assert_eq!(doc.tree().get_attribute(tag.audio(), "src"), None);
        assert_eq!(doc.tree().get_attribute(tag.audio(), "controls"), Some(""));
    }

    #[test]
    fn test_src_change_propagates() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-audio");
        let mut tag = AudioTag::new(&mut doc, host);

        tag.attribute_changed(&mut doc, "src", None, "song.ogg");
        assert_eq!(tag.value(&doc), "song.ogg");
    }
}
