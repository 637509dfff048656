//! `<lm-select>` - selectable options list
//!
//! Wraps a native `<select>`. Option descriptors are ordered
//! `{value, label}` pairs; assigning them regenerates one `<option>` per
//! descriptor, fully replacing prior output. The initial descriptors come
//! from the host's `options` attribute as a JSON array; malformed JSON
//! degrades to an empty option list. The selected value is proxied through
//! the host's `value` attribute.

use crate::component::{mount_wrapped, TagComponent};
use lumiere_dom::{Console, Document, NodeId};
use serde::Deserialize;

/// One option descriptor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub struct SelectTag {
    host: NodeId,
    select: NodeId,
    options: Vec<SelectOption>,
}

impl SelectTag {
    pub fn new(doc: &mut Document, host: NodeId) -> Self {
        let select = mount_wrapped(doc, host, "select");
        Self {
            host,
            select,
            options: Vec::new(),
        }
    }

    /// The wrapped native select element
    pub fn select(&self) -> NodeId {
        self.select
    }

    /// Current option descriptors
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace the option descriptors and re-render. Setting the same
    /// sequence twice yields the same rendered output, not duplicates.
    pub fn set_options(&mut self, doc: &mut Document, options: Vec<SelectOption>) {
        self.options = options;
        self.render_options(doc);
    }

    fn render_options(&self, doc: &mut Document) {
        doc.tree_mut().clear_children(self.select);
        for option in &self.options {
            let node = doc.tree_mut().create_element("option");
            let _ = doc.tree_mut().set_attribute(node, "value", &option.value);
            let _ = doc.tree_mut().set_text_content(node, &option.label);
            let _ = doc.tree_mut().append_child(self.select, node);
        }
    }

    fn options_from_attribute(&self, doc: &Document) -> Vec<SelectOption> {
        let Some(json) = doc.tree().get_attribute(self.host, "options") else {
            return Vec::new();
        };
        match serde_json::from_str(json) {
            Ok(options) => options,
            Err(err) => {
                tracing::debug!("ignoring malformed options attribute: {err}");
                Vec::new()
            }
        }
    }
}

impl TagComponent for SelectTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let options = self.options_from_attribute(doc);
        self.set_options(doc, options);
    }

    fn attribute_changed(&mut self, doc: &mut Document, name: &str, _old: Option<&str>, _new: &str) {
        if name == "options" {
            let options = self.options_from_attribute(doc);
            self.set_options(doc, options);
        }
    }

    fn value(&self, doc: &Document) -> String {
        doc.tree()
            .get_attribute(self.host, "value")
            .unwrap_or_default()
            .to_string()
    }

    fn set_value(&mut self, doc: &mut Document, value: &str) {
        let _ = doc.tree_mut().set_attribute(self.host, "value", value);
    }
}

/// Registered factory
pub fn create(doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(SelectTag::new(doc, host))
}
