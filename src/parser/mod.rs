pub mod csv;

use serde_json::Value;

use crate::app::{MenuFeedError, Result};
use crate::domain::FeedFormat;

/// Parse raw feed text into a JSON value for the normalizer.
///
/// A leading byte-order mark is ignored.
pub fn parse_feed(text: &str, format: FeedFormat) -> Result<Value> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match format {
        FeedFormat::Csv => csv::parse_csv(text),
        FeedFormat::Json => parse_json(text),
    }
}

pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| MenuFeedError::Parse(e.to_string()))
}
