pub mod apple;
pub mod chrome;
pub mod windows;

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{FetchError, ParseError};
use crate::model::{Platform, ReleaseRecord};
use crate::net;

pub use apple::AppleSource;
pub use chrome::ChromeSource;
pub use windows::WindowsSource;

/// One vendor page. Fetching is shared; each source only knows how to read its page.
pub trait PlatformSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn url(&self) -> &str;

    /// Link written to the CSV for this source's platforms.
    fn notes_url(&self) -> &str {
        self.url()
    }

    fn platforms(&self) -> &'static [Platform];

    fn parse(&self, html: &str) -> Result<Vec<ReleaseRecord>, ParseError>;
}

/// Fetch the source's page and parse it. A fetch failure is returned; a parse
/// failure is logged and yields no records.
pub async fn fetch_records(
    client: &reqwest::Client,
    source: &dyn PlatformSource,
) -> Result<Vec<ReleaseRecord>, FetchError> {
    let html = net::fetch_page(client, source.name(), source.url()).await?;
    match source.parse(&html) {
        Ok(records) => {
            info!("{}: {} release records", source.name(), records.len());
            Ok(records)
        }
        Err(e) => {
            warn!("{}", e);
            Ok(Vec::new())
        }
    }
}

/// Sources in run order.
pub fn default_sources(settings: &Settings) -> Vec<Box<dyn PlatformSource>> {
    vec![
        Box::new(AppleSource::new(&settings.apple_url)),
        Box::new(ChromeSource::new(&settings.chrome_url)),
        Box::new(WindowsSource::new(&settings.windows_url)),
    ]
}

/// Slice of `text` after `start`, capped at `max` bytes and at `stop`, on a char boundary.
pub(crate) fn window(text: &str, start: usize, stop: usize, max: usize) -> &str {
    let mut end = stop.min(start + max).min(text.len());
    while end > start && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}

// ── Tests ──
