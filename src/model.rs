use std::fmt;

/// Placeholder printed for any value a source could not find.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    IpadOs,
    ChromeOs,
    Windows,
}

impl Platform {
    /// Fixed CSV row order.
    pub const ALL: [Platform; 4] = [
        Platform::MacOs,
        Platform::IpadOs,
        Platform::ChromeOs,
        Platform::Windows,
    ];

    /// Name as it appears in vendor release titles.
    pub fn name(self) -> &'static str {
        match self {
            Platform::MacOs => "macOS",
            Platform::IpadOs => "iPadOS",
            Platform::ChromeOs => "ChromeOS",
            Platform::Windows => "Windows",
        }
    }

    /// Prefix for the version label in the output table.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Windows => "Windows 11",
            other => other.name(),
        }
    }

    pub fn device_type(self) -> &'static str {
        match self {
            Platform::MacOs => "MacBook",
            Platform::IpadOs => "iPad",
            Platform::ChromeOs => "Chromebook",
            Platform::Windows => "Windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One release announcement found on a vendor page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub platform: Platform,
    pub version: String,
    pub release_date: Option<String>,
    pub is_beta: bool,
    pub source_url: String,
}

/// Latest stable and latest pre-release for one platform. Dates are raw as scraped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformSummary {
    pub current_version: Option<String>,
    pub current_date: Option<String>,
    pub upcoming_version: Option<String>,
    pub upcoming_date: Option<String>,
}

/// What one source contributed to the run.
#[derive(Debug, Clone)]
pub struct SourceResult {
    pub platform: Platform,
    pub summary: PlatformSummary,
    pub notes_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub device_type: String,
    pub current_version_label: String,
    pub current_date: String,
    pub upcoming_version_label: String,
    pub upcoming_date: String,
    pub release_notes_url: String,
}

pub const CSV_HEADER: [&str; 6] = [
    "Device Type",
    "Current OS Version",
    "Current OS Release Date",
    "Upcoming OS Version",
    "Upcoming Release Date",
    "Release Notes URL",
];

impl OutputRow {
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.device_type.clone(),
            self.current_version_label.clone(),
            self.current_date.clone(),
            self.upcoming_version_label.clone(),
            self.upcoming_date.clone(),
            self.release_notes_url.clone(),
        ]
    }
}
