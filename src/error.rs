//! Error types for fetching, configuration, and output.
//!
//! [`FetchFailure`] is the only failure the extraction pipeline recognizes.
//! [`TopicScraper::extract`](crate::scrapers::discourse::TopicScraper::extract)
//! collapses it into an empty result; `try_extract` hands it to the caller.

use reqwest::StatusCode;
use thiserror::Error;

/// A category page could not be fetched.
#[derive(Error, Debug)]
pub enum FetchFailure {
    /// Connection, DNS, TLS, timeout, or body read error.
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: StatusCode },
}

impl FetchFailure {
    /// The URL the request was sent to.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } => url,
        }
    }

    /// Whether the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

/// Invalid scraper configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid topic selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("max_topics must be at least 1")]
    ZeroMaxTopics,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure writing the result file.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
