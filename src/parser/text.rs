use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node};

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Visible text of an HTML document on one line, whitespace collapsed.
pub fn flatten_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()));
        if !hidden {
            parts.push(text);
        }
    }

    WS_RE.replace_all(&parts.join(" "), " ").trim().to_string()
}

/// Collapse whitespace in a fragment of already-extracted text.
pub fn squash(text: &str) -> String {
    WS_RE.replace_all(text, " ").trim().to_string()
}

// ── Tests ──
