use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static SEGMENT_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.Hh]").unwrap());

/// Dotted-numeric version. Segments compare as integers and missing trailing
/// segments count as 0, so `9.0 < 10.0` and `15.6 == 15.6.0`.
///
/// Windows feature-update tokens like `24H2` parse as `[24, 2]`.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    pub fn parse(s: &str) -> Option<Version> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let segments = SEGMENT_SPLIT_RE
            .split(s)
            .map(|seg| seg.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Version { segments })
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Pre-release marker following the numeric version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreRelease {
    Beta(u32),
    Rc(u32),
}

impl PreRelease {
    /// `marker` is the matched word ("beta", "RC", "Release Candidate"); a missing
    /// sequence number counts as 1.
    pub fn from_marker(marker: &str, seq: Option<&str>) -> Option<PreRelease> {
        let n = seq.and_then(|s| s.parse().ok()).unwrap_or(1);
        let m = marker.to_ascii_lowercase();
        if m == "beta" {
            Some(PreRelease::Beta(n))
        } else if m == "rc" || m.starts_with("release candidate") {
            Some(PreRelease::Rc(n))
        } else {
            None
        }
    }
}

/// Numeric version plus optional pre-release, ordered so that within the same
/// numeric version beta < RC, then by sequence number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseKey {
    pub version: Version,
    pub pre: Option<PreRelease>,
}

// ── Tests ──
