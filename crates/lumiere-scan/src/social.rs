//! Social markers and post scanners
//!
//! Marker setters write one `lm-*` attribute on one node; the post scanners
//! derive text or markup from attribute pairs.

use crate::attr;
use crate::reaction::resolve_reaction;
use lumiere_dom::{Console, Document, NodeId};

/// Send a message by setting `lm-message` on a node
pub fn send_message(doc: &mut Document, node: NodeId, message: &str) {
    let _ = doc.tree_mut().set_attribute(node, attr::MESSAGE, message);
}

/// Add a comment by setting `lm-comment` on a node
pub fn add_comment(doc: &mut Document, node: NodeId, comment: &str) {
    let _ = doc.tree_mut().set_attribute(node, attr::COMMENT, comment);
}

/// Indicate the team by setting `lm-team` on a node
pub fn indicate_team(doc: &mut Document, node: NodeId, team: &str) {
    let _ = doc.tree_mut().set_attribute(node, attr::TEAM, team);
}

/// Indicate a team member by setting `lm-t-member` on a node
pub fn indicate_team_member(doc: &mut Document, node: NodeId, member: &str) {
    let _ = doc.tree_mut().set_attribute(node, attr::TEAM_MEMBER, member);
}

/// Create a note by setting `lm-note` on a node
pub fn create_note(doc: &mut Document, node: NodeId, note: &str) {
    let _ = doc.tree_mut().set_attribute(node, attr::NOTE, note);
}

/// Indicate the sender or commenter by setting `lm-s-from` on a node
pub fn indicate_sender(doc: &mut Document, node: NodeId, sender: &str) {
    let _ = doc.tree_mut().set_attribute(node, attr::SENDER, sender);
}

/// The announcement text carried by a node's `lm-anc` attribute, or empty
pub fn announcement_content(doc: &Document, node: NodeId) -> String {
    doc.tree()
        .get_attribute(node, attr::ANNOUNCEMENT)
        .unwrap_or_default()
        .to_string()
}

/// Markup fragment for a post with its resolved reaction glyph
pub fn post_status_with_reaction(content: &str, reaction: &str) -> String {
    let glyph = resolve_reaction(reaction);
    format!(
        r#"<div {post}="{content}" {react}="{reaction}">{content} {glyph}</div>"#,
        post = attr::POST,
        react = attr::REACT,
    )
}

/// Label every post with its topic: for each node carrying the post
/// attribute, the visible text becomes `"<topic>: <post>"`, in document
/// order. A node without the topic attribute gets an empty topic prefix.
pub fn create_topics_for_posts(doc: &mut Document, topic_attr: &str, post_attr: &str) {
    for node in doc.elements_with_attribute(post_attr) {
        let topic = doc
            .tree()
            .get_attribute(node, topic_attr)
            .unwrap_or_default()
            .to_string();
        let post = doc
            .tree()
            .get_attribute(node, post_attr)
            .unwrap_or_default()
            .to_string();
        let _ = doc.tree_mut().set_text_content(node, &format!("{topic}: {post}"));
    }
}

/// A recognized figure node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub name: Option<String>,
    pub node: NodeId,
}

/// Enumerate every `[lm-figure]` node into name/node descriptors, logging
/// the enumeration.
pub fn identify_figures(doc: &Document, console: &Console) -> Vec<Figure> {
    let figures: Vec<Figure> = doc
        .elements_with_attribute(attr::FIGURE)
        .into_iter()
        .map(|node| Figure {
            name: doc
                .tree()
                .get_attribute(node, attr::FIGURE_NAME)
                .map(str::to_string),
            node,
        })
        .collect();

    for figure in &figures {
        console.log(format!(
            "Figure: {}",
            figure.name.as_deref().unwrap_or("(unnamed)")
        ));
    }
    figures
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_dom::ConsoleLevel;

    fn doc_with_nodes(count: usize) -> (Document, Vec<NodeId>) {
        let mut doc = Document::default();
        let root = doc.root();
        let nodes = (0..count)
            .map(|_| {
                let node = doc.tree_mut().create_element("div");
                doc.tree_mut().append_child(root, node).unwrap();
                node
            })
            .collect();
        (doc, nodes)
    }

    #[test]
    fn test_marker_setters() {
        let (mut doc, nodes) = doc_with_nodes(1);
        let node = nodes[0];

        send_message(&mut doc, node, "Hello");
        indicate_team(&mut doc, node, "Team A");
        create_note(&mut doc, node, "a note");

        assert_eq!(doc.tree().get_attribute(node, attr::MESSAGE), Some("Hello"));
        assert_eq!(doc.tree().get_attribute(node, attr::TEAM), Some("Team A"));
        assert_eq!(doc.tree().get_attribute(node, attr::NOTE), Some("a note"));
    }

    #[test]
    fn test_post_fragment_embeds_glyph() {
        assert_eq!(
            post_status_with_reaction("Hello World!", "happy"),
            r#"<div lm-post="Hello World!" lm-react="happy">Hello World! 😄</div>"#
        );
        assert_eq!(
            post_status_with_reaction("Goodbye!", "custom:bye"),
            r#"<div lm-post="Goodbye!" lm-react="custom:bye">Goodbye! bye</div>"#
        );
    }

    #[test]
    fn test_topic_labeling() {
        let (mut doc, nodes) = doc_with_nodes(2);
        for (node, i) in nodes.iter().zip(1..) {
            doc.tree_mut()
                .set_attribute(*node, attr::POST, &format!("Post {i}"))
                .unwrap();
            doc.tree_mut()
                .set_attribute(*node, attr::TOPIC, &format!("Topic {i}"))
                .unwrap();
        }

        create_topics_for_posts(&mut doc, attr::TOPIC, attr::POST);
        assert_eq!(doc.tree().text_content(nodes[0]), "Topic 1: Post 1");
        assert_eq!(doc.tree().text_content(nodes[1]), "Topic 2: Post 2");
    }

    #[test]
    fn test_announcement_content_defaults_empty() {
        let (mut doc, nodes) = doc_with_nodes(1);
        assert_eq!(announcement_content(&doc, nodes[0]), "");

        doc.tree_mut()
            .set_attribute(nodes[0], attr::ANNOUNCEMENT, "Release on Friday")
            .unwrap();
        assert_eq!(announcement_content(&doc, nodes[0]), "Release on Friday");
    }

    #[test]
    fn test_identify_figures() {
        let (mut doc, nodes) = doc_with_nodes(2);
        for (node, name) in nodes.iter().zip(["Linus Torvalds", "Ada Lovelace"]) {
            doc.tree_mut().set_attribute(*node, attr::FIGURE, "").unwrap();
            doc.tree_mut().set_attribute(*node, attr::FIGURE_NAME, name).unwrap();
        }

        let console = Console::new();
        let figures = identify_figures(&doc, &console);
        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].name.as_deref(), Some("Linus Torvalds"));
        assert_eq!(console.messages(ConsoleLevel::Log).len(), 2);
    }
}
