use thiserror::Error;

use chara_curator_fetch::FetchError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Fetching, configuration or output failure
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
