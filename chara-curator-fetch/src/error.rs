/// Errors that can occur while fetching or writing character data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} {reason} from {url}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Character '{key}': {source}")]
    Character {
        key: String,
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unexpected_shape(msg: impl Into<String>) -> Self {
        Self::UnexpectedShape(msg.into())
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Attach the character key being processed when this error occurred.
    pub(crate) fn for_character(self, key: &str) -> Self {
        Self::Character {
            key: key.to_string(),
            source: Box::new(self),
        }
    }
}
