//! `<lm-image>` - image wrapper
//!
//! Wraps a native `<img>`. The source is taken from the host's `src`
//! attribute at construction and tracked while connected.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, NodeId};

pub struct ImageTag {
    host: NodeId,
    img: NodeId,
}

impl ImageTag {
    pub fn new(doc: &mut Document, host: NodeId) -> Self {
        let img = mount_wrapped(doc, host, "img");
        if let Some(src) = doc.tree().get_attribute(host, "src").map(str::to_string) {
            let _ = doc.tree_mut().set_attribute(img, "src", &src);
        }
        Self { host, img }
    }

    /// The wrapped native image element
    pub fn img(&self) -> NodeId {
        self.img
    }
}

impl TagComponent for ImageTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn attribute_changed(&mut self, doc: &mut Document, name: &str, _old: Option<&str>, new: &str) {
        if name == "src" {
            let _ = doc.tree_mut().set_attribute(self.img, "src", new);
        }
    }

    fn value(&self, doc: &Document) -> String {
        doc.tree()
            .get_attribute(self.img, "src")
            .unwrap_or_default()
            .to_string()
    }

    fn set_value(&mut self, doc: &mut Document, value: &str) {
        let _ = doc.tree_mut().set_attribute(self.img, "src", value);
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(ImageTag::new(doc, host))
}
