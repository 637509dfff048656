//! Reply synthesis
//!
//! For every reply-marker node whose reply-target matches, a new sibling
//! node is appended carrying the reply text. No matching marker, no
//! mutation.

use crate::attr;
use lumiere_dom::{Document, NodeId};

/// Append a reply next to every `[lm-reply]` marker whose `lm-rl-to` equals
/// `reply_to`. The synthesized sibling's text is
/// `"<content> - Reply to: <to>, From: <from>"`. Returns the appended nodes.
pub fn reply_to_message(
    doc: &mut Document,
    content: &str,
    reply_to: &str,
    reply_from: &str,
) -> Vec<NodeId> {
    let markers: Vec<NodeId> = doc
        .elements_with_attribute(attr::REPLY)
        .into_iter()
        .filter(|&node| doc.tree().get_attribute(node, attr::REPLY_TO) == Some(reply_to))
        .collect();

    let mut appended = Vec::new();
    for marker in markers {
        let parent = match doc.tree().get(marker) {
            Some(node) if node.parent.is_valid() => node.parent,
            _ => continue,
        };
        let reply = doc.tree_mut().create_element("div");
        let text = format!("{content} - Reply to: {reply_to}, From: {reply_from}");
        let _ = doc.tree_mut().set_text_content(reply, &text);
        let _ = doc.tree_mut().set_attribute(reply, attr::MESSAGE, &text);
        let _ = doc.tree_mut().append_child(parent, reply);
        appended.push(reply);
    }
    appended
}
