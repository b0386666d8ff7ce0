use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{window, PlatformSource};
use crate::error::ParseError;
use crate::model::{Platform, ReleaseRecord};
use crate::parser::text::flatten_text;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bWindows 11,?\s+version\s+(\d{2}H[12])\b").unwrap()
});
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").unwrap());
static PREVIEW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:preview|insider)\b").unwrap());

/// How far past a version token to look for its availability date.
const DATE_WINDOW: usize = 160;

const PLATFORMS: &[Platform] = &[Platform::Windows];

/// Windows release health. Plain-text regex over version tokens like `24H2`.
pub struct WindowsSource {
    url: String,
}

impl WindowsSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl PlatformSource for WindowsSource {
    fn name(&self) -> &'static str {
        "Windows"
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
        Ok(records_from_text(&text, &self.url))
    }
}

fn records_from_text(text: &str, source_url: &str) -> Vec<ReleaseRecord> {
    let matches: Vec<_> = TOKEN_RE.captures_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, caps)| {
            let end = caps.get(0).map_or(0, |m| m.end());
            let next = matches
                .get(i + 1)
                .and_then(|c| c.get(0))
                .map_or(text.len(), |m| m.start());
            let after = window(text, end, next, DATE_WINDOW);

            let version = caps[1].to_uppercase();
            let release_date = DATE_RE.captures(after).map(|c| c[1].to_string());
            let is_beta = PREVIEW_RE.is_match(after);
            debug!(version = %version, date = ?release_date, beta = is_beta, "windows token");

            ReleaseRecord {
                platform: Platform::Windows,
                version,
                release_date,
                is_beta,
                source_url: source_url.to_string(),
            }
        })
        .collect()
}

// ── Tests ──
