use thiserror::Error;

/// Network or HTTP failure while fetching a vendor page. Aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{source_name}: request to {url} failed: {source}")]
    Request {
        source_name: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{source_name}: {url} returned HTTP {status}")]
    Status {
        source_name: &'static str,
        url: String,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    pub fn source_name(&self) -> &'static str {
        match self {
            FetchError::Request { source_name, .. } | FetchError::Status { source_name, .. } => {
                source_name
            }
        }
    }
}

/// Page fetched fine but an expected structure was not there.
/// Recoverable: the source contributes no records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{source_name}: no {what} found on page")]
    MissingElement {
        source_name: &'static str,
        what: &'static str,
    },
}
