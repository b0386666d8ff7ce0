//! Scrapes current and upcoming OS releases (macOS, iPadOS, ChromeOS, Windows)
//! from vendor pages into a CSV table.

pub mod config;
pub mod diff;
pub mod error;
pub mod export;
pub mod model;
pub mod net;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod sources;

pub use config::Settings;
pub use error::{FetchError, ParseError};
pub use model::{OutputRow, Platform, PlatformSummary, ReleaseRecord};
pub use pipeline::{run, RunReport};
