use crate::config;
use crate::model::{OutputRow, Platform, PlatformSummary, SourceResult, UNKNOWN};
use crate::parser::dates::normalize_date;

/// One row per device type in [`Platform::ALL`] order, whatever the sources found.
pub fn build_rows(results: &[SourceResult]) -> Vec<OutputRow> {
    Platform::ALL
        .iter()
        .map(|&platform| match results.iter().find(|r| r.platform == platform) {
            Some(result) => build_row(platform, &result.summary, &result.notes_url),
            None => build_row(platform, &PlatformSummary::default(), default_notes_url(platform)),
        })
        .collect()
}

fn build_row(platform: Platform, summary: &PlatformSummary, notes_url: &str) -> OutputRow {
    OutputRow {
        device_type: platform.device_type().to_string(),
        current_version_label: version_label(platform, summary.current_version.as_deref()),
        current_date: normalize_date(summary.current_date.as_deref()),
        upcoming_version_label: version_label(platform, summary.upcoming_version.as_deref()),
        upcoming_date: normalize_date(summary.upcoming_date.as_deref()),
        release_notes_url: notes_url.to_string(),
    }
}

fn version_label(platform: Platform, version: Option<&str>) -> String {
    match version.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!("{} {}", platform.label(), v),
        None => UNKNOWN.to_string(),
    }
}

fn default_notes_url(platform: Platform) -> &'static str {
    match platform {
        Platform::MacOs | Platform::IpadOs => config::APPLE_URL,
        Platform::ChromeOs => config::CHROME_URL,
        Platform::Windows => config::WINDOWS_URL,
    }
}

// ── Tests ──
