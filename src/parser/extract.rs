use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::version::{PreRelease, ReleaseKey, Version};
use crate::model::{Platform, PlatformSummary, ReleaseRecord};

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\S+)(?:\s+(beta|rc|release candidate)(?:\s*(\d+))?)?").unwrap()
});

/// Version pattern that follows the platform name in a title. A capitalized
/// marketing name of up to two words may sit in between (`macOS Big Sur 11.7`).
fn title_regex(platform: Platform) -> Regex {
    let pattern = format!(
        r"\b{}\s+(?:[A-Z][a-z]+\s+){{0,2}}(\d+(?:\.\d+)*)(?:\s+((?i:beta|rc|release candidate))\b(?:\s*(\d+))?)?",
        regex::escape(platform.name())
    );
    Regex::new(&pattern).unwrap()
}

/// Turn (title, date) pairs into records for one platform, keeping document order.
/// Titles that do not mention the platform, or mention it without a version, are skipped.
pub fn extract_records<T, D>(
    pairs: &[(T, Option<D>)],
    platform: Platform,
    source_url: &str,
) -> Vec<ReleaseRecord>
where
    T: AsRef<str>,
    D: AsRef<str>,
{
    let re = title_regex(platform);
    pairs
        .iter()
        .filter_map(|(title, date)| {
            let title = title.as_ref();
            let caps = re.captures(title)?;
            let mut version = caps[1].to_string();
            // only a marker right after this platform's version makes it a pre-release
            let marker = caps.get(2);
            if let Some(marker) = marker {
                version.push(' ');
                version.push_str(marker.as_str());
                if let Some(seq) = caps.get(3) {
                    version.push(' ');
                    version.push_str(seq.as_str());
                }
            }
            let record = ReleaseRecord {
                platform,
                version,
                release_date: date
                    .as_ref()
                    .map(|d| d.as_ref().trim().to_string())
                    .filter(|d| !d.is_empty()),
                is_beta: marker.is_some(),
                source_url: source_url.to_string(),
            };
            debug!(%platform, title, version = %record.version, beta = record.is_beta, "matched release");
            Some(record)
        })
        .collect()
}

/// Ordering key for a record's version string (`26.1 beta 2`, `15.6`, `24H2`).
pub fn release_key(version: &str) -> Option<ReleaseKey> {
    let caps = KEY_RE.captures(version.trim())?;
    let numeric = Version::parse(&caps[1])?;
    let pre = caps
        .get(2)
        .and_then(|m| PreRelease::from_marker(m.as_str(), caps.get(3).map(|s| s.as_str())));
    Some(ReleaseKey { version: numeric, pre })
}

/// Pick the greatest stable and greatest beta release.
///
/// Ties keep the record seen first on the page. An upcoming release that is not
/// newer than the current one is dropped.
pub fn summarize(records: &[ReleaseRecord]) -> PlatformSummary {
    let current = latest(records.iter().filter(|r| !r.is_beta));
    let upcoming = latest(records.iter().filter(|r| r.is_beta));

    let upcoming = match (&current, upcoming) {
        (Some((cur_key, _)), Some((up_key, up))) if up_key.version <= cur_key.version => {
            debug!(
                version = %up.version,
                current = ?cur_key.version.segments(),
                "dropping pre-release that is not newer than current"
            );
            None
        }
        (_, up) => up,
    };

    PlatformSummary {
        current_version: current.as_ref().map(|(_, r)| r.version.clone()),
        current_date: current.and_then(|(_, r)| r.release_date.clone()),
        upcoming_version: upcoming.as_ref().map(|(_, r)| r.version.clone()),
        upcoming_date: upcoming.and_then(|(_, r)| r.release_date.clone()),
    }
}

fn latest<'a>(
    records: impl Iterator<Item = &'a ReleaseRecord>,
) -> Option<(ReleaseKey, &'a ReleaseRecord)> {
    let mut best: Option<(ReleaseKey, &ReleaseRecord)> = None;
    for record in records {
        let Some(key) = release_key(&record.version) else {
            debug!(version = %record.version, "skipping unparseable version");
            continue;
        };
        let replace = match &best {
            Some((best_key, _)) => key > *best_key,
            None => true,
        };
        if replace {
            best = Some((key, record));
        }
    }
    best
}

pub fn summarize_pairs<T, D>(pairs: &[(T, Option<D>)], platform: Platform) -> PlatformSummary
where
    T: AsRef<str>,
    D: AsRef<str>,
{
    summarize(&extract_records(pairs, platform, ""))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, Option<String>)> {
        items
            .iter()
            .map(|(t, d)| (t.to_string(), Some(d.to_string())))
            .collect()
    }

    #[test]
    fn stable_and_beta() {
        let input = pairs(&[
            ("macOS 15.6 (24G84)", "2025-08-01"),
            ("macOS 26.1 beta 2", "2025-10-06"),
        ]);
        let s = summarize_pairs(&input, Platform::MacOs);
        assert_eq!(s.current_version.as_deref(), Some("15.6"));
        assert_eq!(s.current_date.as_deref(), Some("2025-08-01"));
        assert_eq!(s.upcoming_version.as_deref(), Some("26.1 beta 2"));
        assert_eq!(s.upcoming_date.as_deref(), Some("2025-10-06"));
    }

    #[test]
    fn only_betas() {
        let input = pairs(&[
            ("iPadOS 26.1 beta 2 (23B5059e)", "2025-10-06"),
            ("iPadOS 26.1 beta 3 (23B5064e)", "2025-10-13"),
            ("iPadOS 26.0.1 beta", "2025-09-20"),
        ]);
        let s = summarize_pairs(&input, Platform::IpadOs);
        assert_eq!(s.current_version, None);
        assert_eq!(s.current_date, None);
        assert_eq!(s.upcoming_version.as_deref(), Some("26.1 beta 3"));
        assert_eq!(s.upcoming_date.as_deref(), Some("2025-10-13"));
    }

    #[test]
    fn numeric_max_not_page_order() {
        let input = pairs(&[
            ("macOS 9.0", "2019-01-01"),
            ("macOS 10.0", "2020-01-01"),
            ("macOS 10.0.0", "2020-02-02"),
        ]);
        let s = summarize_pairs(&input, Platform::MacOs);
        assert_eq!(s.current_version.as_deref(), Some("10.0"));
        assert_eq!(s.current_date.as_deref(), Some("2020-01-01"));
    }

    #[test]
    fn marketing_name_and_rc() {
        let input = pairs(&[
            ("macOS Tahoe 26.0.1 (25A362)", "2025-09-29"),
            ("macOS Tahoe 26.1 RC (25B77)", "2025-10-28"),
            ("macOS Tahoe 26.1 beta 4", "2025-10-20"),
        ]);
        let s = summarize_pairs(&input, Platform::MacOs);
        assert_eq!(s.current_version.as_deref(), Some("26.0.1"));
        assert_eq!(s.upcoming_version.as_deref(), Some("26.1 RC"));
    }

    #[test]
    fn shared_titles_match_each_platform() {
        let input = pairs(&[
            ("iOS & iPadOS 26.1 beta 2 (23B5059e)", "2025-10-06"),
            ("macOS 26.1 beta 2 (25B5057f)", "2025-10-06"),
            ("watchOS 26.1 beta 2", "2025-10-06"),
        ]);
        let ipad = extract_records(&input, Platform::IpadOs, "https://example.test");
        assert_eq!(ipad.len(), 1);
        assert_eq!(ipad[0].version, "26.1 beta 2");
        assert!(ipad[0].is_beta);
        assert_eq!(ipad[0].source_url, "https://example.test");

        let mac = extract_records(&input, Platform::MacOs, "");
        assert_eq!(mac.len(), 1);
    }

    #[test]
    fn stale_beta_is_dropped() {
        let input = pairs(&[
            ("macOS 26.0 RC", "2025-09-09"),
            ("macOS 26.0 (25A354)", "2025-09-15"),
        ]);
        let s = summarize_pairs(&input, Platform::MacOs);
        assert_eq!(s.current_version.as_deref(), Some("26.0"));
        assert_eq!(s.upcoming_version, None);
        assert_eq!(s.upcoming_date, None);
    }

    #[test]
    fn no_matches_is_empty_summary() {
        let input = pairs(&[("Xcode 26.1 beta 2", "2025-10-06"), ("macOS Tahoe", "")]);
        assert_eq!(summarize_pairs(&input, Platform::MacOs), PlatformSummary::default());
    }

    #[test]
    fn missing_and_blank_dates() {
        let input: Vec<(&str, Option<&str>)> =
            vec![("macOS 15.7", None), ("macOS 15.6", Some("  "))];
        let records = extract_records(&input, Platform::MacOs, "");
        assert!(records.iter().all(|r| r.release_date.is_none()));
        let s = summarize(&records);
        assert_eq!(s.current_version.as_deref(), Some("15.7"));
        assert_eq!(s.current_date, None);
    }

    #[test]
    fn two_word_marketing_name() {
        let input = pairs(&[("macOS Big Sur 11.7.10 (20G1427)", "2023-09-11")]);
        let s = summarize_pairs(&input, Platform::MacOs);
        assert_eq!(s.current_version.as_deref(), Some("11.7.10"));
        assert_eq!(s.current_date.as_deref(), Some("2023-09-11"));
    }

    #[test]
    fn beta_marker_belongs_to_its_own_platform() {
        let input = pairs(&[("iOS 26.1 beta 2 and iPadOS 26.0.1", "2025-10-06")]);
        let records = extract_records(&input, Platform::IpadOs, "");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].version, "26.0.1");
        assert!(!records[0].is_beta);
    }

    #[test]
    fn release_candidate_outranks_beta() {
        let input = pairs(&[
            ("macOS Tahoe 26.1 beta 3", "2025-10-13"),
            ("macOS Tahoe 26.1 Release Candidate 2", "2025-10-28"),
            ("macOS Tahoe 26.0.1", "2025-09-29"),
        ]);
        let records = extract_records(&input, Platform::MacOs, "");
        assert_eq!(records[1].version, "26.1 Release Candidate 2");
        assert!(records[1].is_beta);

        let s = summarize(&records);
        assert_eq!(s.current_version.as_deref(), Some("26.0.1"));
        assert_eq!(s.upcoming_version.as_deref(), Some("26.1 Release Candidate 2"));
        assert_eq!(s.upcoming_date.as_deref(), Some("2025-10-28"));
    }

    #[test]
    fn equal_betas_keep_first_seen() {
        let input = pairs(&[
            ("macOS 26.1 beta 2", "2025-10-06"),
            ("macOS 26.1 beta 2 (25B5057f)", "2025-10-08"),
        ]);
        let s = summarize_pairs(&input, Platform::MacOs);
        assert_eq!(s.upcoming_version.as_deref(), Some("26.1 beta 2"));
        assert_eq!(s.upcoming_date.as_deref(), Some("2025-10-06"));
    }
}
