use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::PlatformSource;
use crate::error::ParseError;
use crate::model::{Platform, ReleaseRecord};
use crate::parser::extract::extract_records;
use crate::parser::text::squash;

static BLOCK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article, section").unwrap());
static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, .article-title").unwrap());
static DATE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("time, .article-date, p.lighter").unwrap());

const PLATFORMS: &[Platform] = &[Platform::MacOs, Platform::IpadOs];

/// Apple developer news releases page (macOS + iPadOS).
pub struct AppleSource {
    url: String,
}

impl AppleSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl PlatformSource for AppleSource {
    fn name(&self) -> &'static str {
        "Apple"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn platforms(&self) -> &'static [Platform] {
        PLATFORMS
    }

    fn parse(&self, html: &str) -> Result<Vec<ReleaseRecord>, ParseError> {
        let Some(pairs) = release_pairs(html) else {
            return Err(ParseError::MissingElement {
                source_name: self.name(),
                what: "article or section blocks",
            });
        };

        Ok(PLATFORMS
            .iter()
            .flat_map(|&p| extract_records(&pairs, p, &self.url))
            .collect())
    }
}

/// (heading, date) per article/section block, in document order. A block is keyed by its
/// first heading, so nested blocks that share one heading yield a single pair.
/// `None` when the page has no blocks at all.
fn release_pairs(html: &str) -> Option<Vec<(String, Option<String>)>> {
    let document = Html::parse_document(html);
    let blocks: Vec<ElementRef> = document.select(&BLOCK_SEL).collect();
    if blocks.is_empty() {
        return None;
    }

    let mut seen = HashSet::new();
    let pairs = blocks
        .into_iter()
        .filter_map(|block| {
            let heading = block.select(&HEADING_SEL).next()?;
            if !seen.insert(heading.id()) {
                return None;
            }
            let title = squash(&heading.text().collect::<String>());
            if title.is_empty() {
                return None;
            }
            let date = block.select(&DATE_SEL).next().and_then(date_of);
            debug!(title = %title, date = ?date, "apple block");
            Some((title, date))
        })
        .collect();
    Some(pairs)
}

/// `datetime` attribute when present (timestamp part dropped), otherwise the element text.
fn date_of(el: ElementRef) -> Option<String> {
    if let Some(attr) = el.value().attr("datetime") {
        let day = attr.split('T').next().unwrap_or(attr).trim();
        if !day.is_empty() {
            return Some(day.to_string());
        }
    }
    let text = squash(&el.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

// ── Tests ──
