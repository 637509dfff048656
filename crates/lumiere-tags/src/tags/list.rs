//! `<lm-ul>` - plain list
//!
//! Wraps a native `<ul>`. On connect, the host's light children become one
//! `<li>` per child, carrying that child's text. Re-rendering fully replaces
//! prior derived items.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, NodeId};

pub struct ListTag {
    host: NodeId,
    list: NodeId,
}

impl ListTag {
    pub fn new(doc: &mut Document, host: NodeId) -> Self {
        let list = mount_wrapped(doc, host, "ul");
        Self { host, list }
    }

    /// The wrapped native list element
    pub fn list(&self) -> NodeId {
        self.list
    }

    /// Replace the derived items with one `<li>` per entry, in order.
    pub fn render_items(&self, doc: &mut Document, items: &[String]) {
        doc.tree_mut().clear_children(self.list);
        for item in items {
            let li = doc.tree_mut().create_element("li");
            let _ = doc.tree_mut().set_text_content(li, item);
            let _ = doc.tree_mut().append_child(self.list, li);
        }
    }

    fn light_item_texts(&self, doc: &Document) -> Vec<String> {
        doc.tree()
            .children(self.host)
            .into_iter()
            .map(|child| doc.tree().text_content(child))
            .collect()
    }
}

impl TagComponent for ListTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let items = self.light_item_texts(doc);
        self.render_items(doc, &items);
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(ListTag::new(doc, host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_children_become_items() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-ul");
        for text in ["one", "two"] {
            let child = doc.tree_mut().create_element("span");
            doc.tree_mut().set_text_content(child, text).unwrap();
            doc.tree_mut().append_child(host, child).unwrap();
        }

        let mut tag = ListTag::new(&mut doc, host);
        tag.connected(&mut doc);

        let items = doc.tree().children(tag.list());
        assert_eq!(items.len(), 2);
        assert_eq!(doc.tree().text_content(items[0]), "one");
        assert_eq!(doc.tree().tag_name(items[1]), Some("li"));
    }

    #[test]
    fn test_rerender_replaces_not_appends() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-ul");
        let tag = ListTag::new(&mut doc, host);

        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        tag.render_items(&mut doc, &items);
        tag.render_items(&mut doc, &items);

        assert_eq!(doc.tree().children(tag.list()).len(), 3);
    }
}
