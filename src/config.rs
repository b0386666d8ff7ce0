use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const APPLE_URL: &str = "https://developer.apple.com/news/releases/";
pub const CHROME_URL: &str = "https://chromeos.dev/en/releases";
pub const WINDOWS_URL: &str = "https://learn.microsoft.com/en-us/windows/release-health/";

const OUTPUT_PATH: &str = "os_versions.csv";
const HIGHLIGHTED_PATH: &str = "highlighted_os_versions.csv";
const USER_AGENT: &str = concat!("os_versions/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_SECS: u64 = 30;

/// Optional settings file in the working directory (`os_versions.toml`, `.yaml`, ...).
const CONFIG_FILE: &str = "os_versions";
const ENV_PREFIX: &str = "OSV";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output_path: PathBuf,
    pub highlighted_path: PathBuf,
    /// Write the highlighted diff against the previous output.
    pub highlight: bool,
    pub apple_url: String,
    pub chrome_url: String,
    pub windows_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_PATH),
            highlighted_path: PathBuf::from(HIGHLIGHTED_PATH),
            highlight: true,
            apple_url: APPLE_URL.to_string(),
            chrome_url: CHROME_URL.to_string(),
            windows_url: WINDOWS_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Defaults, then `os_versions.*` if present, then `OSV_*` environment variables.
    pub fn load() -> Result<Settings> {
        let d = Settings::default();
        Config::builder()
            .set_default("output_path", OUTPUT_PATH)?
            .set_default("highlighted_path", HIGHLIGHTED_PATH)?
            .set_default("highlight", d.highlight)?
            .set_default("apple_url", d.apple_url)?
            .set_default("chrome_url", d.chrome_url)?
            .set_default("windows_url", d.windows_url)?
            .set_default("user_agent", d.user_agent)?
            .set_default("timeout_secs", d.timeout_secs)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

// ── Tests ──
