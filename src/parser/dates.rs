use chrono::NaiveDate;
use tracing::debug;

use crate::model::UNKNOWN;

/// Input formats, tried in order.
const FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// Normalize a scraped date to `D Month YYYY` (e.g. `6 October 2025`).
///
/// Null or blank input gives [`UNKNOWN`]. Input matching none of the known formats
/// is returned trimmed but otherwise unchanged: callers cannot tell a canonical
/// date from an unparsed one, so the output is only as good as the page.
pub fn normalize_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN.to_string();
    };

    match parse_date(raw) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => {
            debug!(raw, "unrecognized date format, keeping raw value");
            raw.to_string()
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

// ── Tests ──
