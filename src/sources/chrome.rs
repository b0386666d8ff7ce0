use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{window, PlatformSource};
use crate::error::ParseError;
use crate::model::{Platform, ReleaseRecord};
use crate::parser::extract::extract_records;
use crate::parser::text::flatten_text;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bChrome ?OS\s+M?(\d+(?:\.\d+){0,3})\b(?:\s+((?i:beta))\b)?").unwrap()
});
static RELEASED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:released?|release date:?)\s+(?:on\s+)?([A-Z][a-z]+\.? \d{1,2}, \d{4}|\d{4}-\d{2}-\d{2})",
    )
    .unwrap()
});

/// How far past a version label to look for its release-date phrase.
const DATE_WINDOW: usize = 200;

const PLATFORMS: &[Platform] = &[Platform::ChromeOs];

/// ChromeOS release notes. Plain-text regex, no structural traversal.
pub struct ChromeSource {
    url: String,
}

impl ChromeSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl PlatformSource for ChromeSource {
    fn name(&self) -> &'static str {
        "ChromeOS"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn platforms(&self) -> &'static [Platform] {
        PLATFORMS
    }

    fn parse(&self, html: &str) -> Result<Vec<ReleaseRecord>, ParseError> {
        let text = flatten_text(html);
        if text.is_empty() {
            return Err(ParseError::MissingElement {
                source_name: self.name(),
                what: "page text",
            });
        }

        let pairs = release_pairs(&text);
        Ok(extract_records(&pairs, Platform::ChromeOs, &self.url))
    }
}

/// Synthesized ("ChromeOS <n>[ Beta]", date) pairs in page order. The date is the
/// first release-date phrase after the label and before the next label.
fn release_pairs(text: &str) -> Vec<(String, Option<String>)> {
    let matches: Vec<_> = VERSION_RE.captures_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, caps)| {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let next = matches
                .get(i + 1)
                .and_then(|c| c.get(0))
                .map_or(text.len(), |m| m.start());
            let after = window(text, whole.end, next, DATE_WINDOW);
            let date = RELEASED_RE.captures(after).map(|c| c[1].to_string());

            let title = match caps.get(2) {
                Some(marker) => format!("ChromeOS {} {}", &caps[1], marker.as_str()),
                None => format!("ChromeOS {}", &caps[1]),
            };
            debug!(title = %title, date = ?date, "chromeos label");
            (title, date)
        })
        .collect()
}

// ── Tests ──
