use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::FetchError;

pub fn build_client(settings: &Settings) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Single GET; any transport error or non-success status fails the fetch.
pub async fn fetch_page(
    client: &reqwest::Client,
    source_name: &'static str,
    url: &str,
) -> Result<String, FetchError> {
    info!("Fetching {}: {}", source_name, url);
    let request_err = |source| FetchError::Request {
        source_name,
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(request_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            source_name,
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(request_err)?;
    debug!(source_name, bytes = body.len(), "fetched page");
    Ok(body)
}
