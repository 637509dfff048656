//! Meeting links
//!
//! Generates a short random meeting id, advertises the join URL, and stages
//! the link in the page's copy field.

use lumiere_dom::{Console, Document};
use uuid::Uuid;

const COPY_FIELD_ID: &str = "copyInput";

/// Create a meeting link with a fresh 8-hex-digit id, log the join URL, and
/// stage the link in the `#copyInput` field. Returns the link.
pub fn create_meeting_link(doc: &mut Document, console: &Console, base_url: &str) -> String {
    let id: String = Uuid::new_v4().simple().to_string()[..8].to_string();
    let link = format!("{base_url}/{id}");
    console.log(format!("Join the meeting: {link}"));
    if let Some(field) = doc.element_by_id(COPY_FIELD_ID) {
        let _ = doc.tree_mut().set_attribute(field, "value", &link);
    }
    link
}

/// Read back whatever is staged in the `#copyInput` field
pub fn copy_link(doc: &Document) -> Option<String> {
    let field = doc.element_by_id(COPY_FIELD_ID)?;
    doc.tree()
        .get_attribute(field, "value")
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_staged_in_copy_field() {
        let mut doc = Document::default();
        let root = doc.root();
        let field = doc.tree_mut().create_element("input");
        doc.tree_mut().append_child(root, field).unwrap();
        doc.tree_mut().set_attribute(field, "id", "copyInput").unwrap();

        let console = Console::new();
        let link = create_meeting_link(&mut doc, &console, "https://meet.example.com");

        assert!(link.starts_with("https://meet.example.com/"));
        assert_eq!(link.len(), "https://meet.example.com/".len() + 8);
        assert_eq!(copy_link(&doc).as_deref(), Some(link.as_str()));
        assert_eq!(console.entries().len(), 1);
    }

    #[test]
    fn test_ids_are_fresh_per_call() {
        let mut doc = Document::default();
        let console = Console::new();
        let a = create_meeting_link(&mut doc, &console, "https://meet.example.com");
        let b = create_meeting_link(&mut doc, &console, "https://meet.example.com");
        assert_ne!(a, b);
    }

    #[test]
    fn test_copy_without_field_is_none() {
        let doc = Document::default();
        assert!(copy_link(&doc).is_none());
    }
}
