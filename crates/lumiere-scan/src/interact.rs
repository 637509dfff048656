//! Interaction scanners
//!
//! Click-triggered behaviors (call-to-action, reporting), the output display,
//! and the placeholder setter - the one scanner with a loud precondition.

use crate::{attr, ScanError};
use lumiere_dom::{Console, Document, EventType, ListenerId, NodeId};

const OUTPUT_TAG: &str = "lm-output";
const INPUT_TAG: &str = "lm-input";

/// Attach a click listener to every node carrying the attribute. The
/// attribute is read at click time, so later edits show up in the emitted
/// text. Returns the listener handles.
pub fn add_cta_listeners(doc: &mut Document, console: &Console, attribute: &str) -> Vec<ListenerId> {
    let name = attribute.to_string();
    let mut handles = Vec::new();
    for node in doc.elements_with_attribute(attribute) {
        let console = console.clone();
        let name = name.clone();
        let id = doc.add_event_listener(
            node,
            EventType::Click,
            Box::new(move |doc, event| {
                let message = doc
                    .tree()
                    .get_attribute(event.target, &name)
                    .unwrap_or_default();
                console.log(message.to_string());
            }),
        );
        handles.push(id);
    }
    handles
}

/// Attach a click listener to every `[lm-report]` node that logs
/// `Reported: <content>` when clicked. Returns the listener handles.
pub fn report_errors(doc: &mut Document, console: &Console) -> Vec<ListenerId> {
    let mut handles = Vec::new();
    for node in doc.elements_with_attribute(attr::REPORT) {
        let console = console.clone();
        let id = doc.add_event_listener(
            node,
            EventType::Click,
            Box::new(move |doc, event| {
                let content = doc
                    .tree()
                    .get_attribute(event.target, attr::REPORT)
                    .unwrap_or_default();
                console.log(format!("Reported: {content}"));
            }),
        );
        handles.push(id);
    }
    handles
}

/// Write text into the first `<lm-output>` tag, or emit a console error when
/// the page has none.
pub fn display_output(doc: &mut Document, console: &Console, output: &str) {
    match doc.elements_by_tag(OUTPUT_TAG).first().copied() {
        Some(node) => {
            let _ = doc.tree_mut().set_text_content(node, output);
        }
        None => console.error("The <lm-output> tag is not found in the document."),
    }
}

/// Copy a node's `lm-plhd` attribute onto its native `placeholder` property.
/// Usage error unless the node is an `<lm-input>` element.
pub fn set_placeholder(doc: &mut Document, node: NodeId) -> Result<(), ScanError> {
    let tag = doc
        .tree()
        .tag_name(node)
        .ok_or_else(|| ScanError::NotAnInput("(not an element)".to_string()))?;
    if tag != INPUT_TAG {
        return Err(ScanError::NotAnInput(tag.to_string()));
    }

    let hint = doc
        .tree()
        .get_attribute(node, attr::PLACEHOLDER_HINT)
        .unwrap_or_default()
        .to_string();
    let _ = doc.tree_mut().set_attribute(node, "placeholder", &hint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_dom::{ConsoleLevel, Event};

    #[test]
    fn test_cta_click_reads_attribute_at_click_time() {
        let mut doc = Document::default();
        let root = doc.root();
        let button = doc.tree_mut().create_element("button");
        doc.tree_mut().append_child(root, button).unwrap();
        doc.tree_mut().set_attribute(button, attr::CTA, "Join now").unwrap();

        let console = Console::new();
        add_cta_listeners(&mut doc, &console, attr::CTA);

        doc.dispatch(Event::new(EventType::Click, button));
        doc.tree_mut().set_attribute(button, attr::CTA, "Last chance").unwrap();
        doc.dispatch(Event::new(EventType::Click, button));

        assert_eq!(
            console.messages(ConsoleLevel::Log),
            vec!["Join now", "Last chance"]
        );
    }

    #[test]
    fn test_report_click_logs_content() {
        let mut doc = Document::default();
        let root = doc.root();
        let button = doc.tree_mut().create_element("button");
        doc.tree_mut().append_child(root, button).unwrap();
        doc.tree_mut()
            .set_attribute(button, attr::REPORT, "Button is not working")
            .unwrap();

        let console = Console::new();
        report_errors(&mut doc, &console);
        doc.dispatch(Event::new(EventType::Click, button));

        assert_eq!(
            console.messages(ConsoleLevel::Log),
            vec!["Reported: Button is not working"]
        );
    }

    #[test]
    fn test_display_output_without_target_is_console_error() {
        let mut doc = Document::default();
        let console = Console::new();
        display_output(&mut doc, &console, "model output");

        assert_eq!(console.messages(ConsoleLevel::Error).len(), 1);
    }

    #[test]
    fn test_display_output_writes_first_target() {
        let mut doc = Document::default();
        let root = doc.root();
        let output = doc.tree_mut().create_element("lm-output");
        doc.tree_mut().append_child(root, output).unwrap();

        let console = Console::new();
        display_output(&mut doc, &console, "model output");
        assert_eq!(doc.tree().text_content(output), "model output");
        assert!(console.entries().is_empty());
    }

    #[test]
    fn test_set_placeholder_requires_lm_input() {
        let mut doc = Document::default();
        let root = doc.root();
        let div = doc.tree_mut().create_element("div");
        doc.tree_mut().append_child(root, div).unwrap();

        assert!(matches!(
            set_placeholder(&mut doc, div),
            Err(ScanError::NotAnInput(tag)) if tag == "div"
        ));
    }

    #[test]
    fn test_set_placeholder_copies_hint() {
        let mut doc = Document::default();
        let root = doc.root();
        let input = doc.tree_mut().create_element("lm-input");
        doc.tree_mut().append_child(root, input).unwrap();
        doc.tree_mut()
            .set_attribute(input, attr::PLACEHOLDER_HINT, "Enter name")
            .unwrap();

        set_placeholder(&mut doc, input).unwrap();
        assert_eq!(doc.tree().get_attribute(input, "placeholder"), Some("Enter name"));
    }
}
