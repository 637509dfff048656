//! Markup audit
//!
//! Lexical check flagging sender and team-member values that leak outside
//! their attribute context in the raw markup.

use lumiere_dom::Console;
use once_cell::sync::Lazy;
use regex::Regex;

static CONTEXT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)lm-s-from\s*=\s*["']([^"']*)["']|lm-t-member\s*=\s*["']([^"']*)["']"#)
        .expect("audit pattern is valid")
});

/// Scan raw markup for `lm-s-from` / `lm-t-member` values appearing outside
/// their own attribute assignment. Each leaked value earns one console
/// warning; returns whether anything was flagged.
pub fn scan_html_for_illegal_usage(html: &str, console: &Console) -> bool {
    // Spans of the sanctioned attribute assignments, and the values they bind
    let mut contexts: Vec<(usize, usize)> = Vec::new();
    let mut values: Vec<String> = Vec::new();
    for caps in CONTEXT_PATTERN.captures_iter(html) {
        let whole = caps.get(0).expect("group 0 always present");
        contexts.push((whole.start(), whole.end()));
        if let Some(value) = caps.get(1).or_else(|| caps.get(2)) {
            if !value.as_str().is_empty() {
                values.push(value.as_str().to_string());
            }
        }
    }

    let mut flagged = false;
    for value in &values {
        let mut from = 0;
        while let Some(pos) = html[from..].find(value.as_str()) {
            let start = from + pos;
            let end = start + value.len();
            from = end;
            if contexts.iter().any(|&(cs, ce)| start >= cs && end <= ce) {
                continue;
            }
            console.warn(format!(
                "Warning: Illegal usage of \"lm-s-from\" and \"lm-t-member\" attributes detected: \"{value}\""
            ));
            flagged = true;
            break;
        }
    }
    flagged
}
