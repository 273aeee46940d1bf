use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL errors: {}", messages.join(", "))]
    GraphQL { messages: Vec<String> },

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Config file not found at {0}. Create it with [github] owner/repo and [slack] channel")]
    ConfigMissing(PathBuf),

    #[error(
        "No GitHub token found. Set GITHUB_TOKEN env var or add token to [github] in config.toml"
    )]
    MissingToken,

    #[error(
        "No webhook URL found. Set SLACK_WEBHOOK_URL env var or add webhook_url to [slack] in config.toml"
    )]
    MissingWebhookUrl,

    #[error("Invalid webhook URL {url}: {source}")]
    InvalidWebhookUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, ReporterError>;
