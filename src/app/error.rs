use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuFeedError {
    #[error("Fetch failed ({status} {reason}) for {url}")]
    Fetch {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to parse feed JSON: {0}")]
    Parse(String),

    #[error("CSV feed is empty")]
    EmptyFeed,

    #[error("Feed payload was empty")]
    EmptyPayload,

    #[error("No menu items found in feed")]
    NoItems,

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize feed")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MenuFeedError>;
