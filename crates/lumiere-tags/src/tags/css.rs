//! `<lm-css>` - inline style rule processor
//!
//! No rendering boundary: the tag's own text content is a semicolon-delimited
//! `property:value` list applied to the host's style map on connect. Each
//! rule is processed independently; a malformed rule is skipped without
//! aborting the rest.

use crate::component::TagComponent;
use lumiere_dom::{Console, Document, NodeId};

pub struct CssTag {
    host: NodeId,
}

impl CssTag {
    pub fn new(host: NodeId) -> Self {
        Self { host }
    }
}

/// Parse a semicolon-delimited `property:value` blob into discrete style
/// assignments. Segments without a colon, or with an empty property or
/// value, are dropped.
pub fn parse_style_rules(text: &str) -> Vec<(String, String)> {
    text.split(';')
        .filter_map(|rule| {
            let (property, value) = rule.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((property.to_string(), value.to_string()))
        })
        .collect()
}

impl TagComponent for CssTag {
    fn host(&self) -> NodeId {
        self.host
    }

    fn connected(&mut self, doc: &mut Document) {
        let text = doc.tree().text_content(self.host);
        let rules = parse_style_rules(&text);
        if let Some(elem) = doc.tree_mut().get_mut(self.host).and_then(|n| n.as_element_mut()) {
            for (property, value) in &rules {
                elem.set_style(property, value);
            }
        }
    }

    fn value(&self, doc: &Document) -> String {
        doc.tree().text_content(self.host)
    }

    fn set_value(&mut self, doc: &mut Document, value: &str) {
        let _ = doc.tree_mut().set_text_content(self.host, value);
    }
}

/// Registered factory
pub fn create(_doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(CssTag::new(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_rule_skipped_not_fatal() {
        let rules = parse_style_rules("color:red;margin:10px;badrule;padding:5px");
        assert_eq!(
            rules,
            vec![
                ("color".to_string(), "red".to_string()),
                ("margin".to_string(), "10px".to_string()),
                ("padding".to_string(), "5px".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_segments_ignored() {
        assert!(parse_style_rules(";;;").is_empty());
        assert!(parse_style_rules("color:;:red").is_empty());
    }

    #[test]
    fn test_connected_applies_rules_to_host() {
        let mut doc = Document::default();
        let host = doc.tree_mut().create_element("lm-css");
        let root = doc.root();
        doc.tree_mut().append_child(root, host).unwrap();
        doc.tree_mut()
            .set_text_content(host, "color: red; margin: 10px")
            .unwrap();

        let mut tag = CssTag::new(host);
        tag.connected(&mut doc);

        let elem = doc.tree().get(host).unwrap().as_element().unwrap();
        assert_eq!(elem.get_style("color"), Some("red"));
        assert_eq!(elem.get_style("margin"), Some("10px"));
    }
}
