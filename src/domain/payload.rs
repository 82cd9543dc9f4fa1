use serde_json::Value;

use crate::app::{MenuFeedError, Result};

/// A parsed feed, before normalization.
///
/// Feeds arrive either as a bare array of records or as an object with an
/// `items` array and optional feed-level timestamps. The shape is settled
/// once here so the normalizer never has to look at raw JSON structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Records(Vec<Value>),
    Document(FeedDocument),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedDocument {
    pub items: Vec<Value>,
    pub updated_at: Option<String>,
    pub last_updated: Option<String>,
    pub meta_updated_at: Option<String>,
}

impl Payload {
    /// Resolve a JSON value into a payload.
    ///
    /// `null`, `false`, `0` and `""` count as an empty payload. An object
    /// whose `items` is not an array, or any other scalar, yields a document
    /// with no items.
    pub fn from_value(value: Value) -> Result<Self> {
        if is_blank(&value) {
            return Err(MenuFeedError::EmptyPayload);
        }

        match value {
            Value::Array(records) => Ok(Payload::Records(records)),
            Value::Object(mut map) => {
                let items = match map.remove("items") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                let meta_updated_at = map
                    .get("meta")
                    .and_then(|meta| non_empty_str(meta.get("updatedAt")))
                    .map(String::from);

                Ok(Payload::Document(FeedDocument {
                    items,
                    updated_at: non_empty_str(map.get("updatedAt")).map(String::from),
                    last_updated: non_empty_str(map.get("lastUpdated")).map(String::from),
                    meta_updated_at,
                }))
            }
            _ => Ok(Payload::Document(FeedDocument::default())),
        }
    }

    pub fn records(&self) -> &[Value] {
        match self {
            Payload::Records(records) => records,
            Payload::Document(doc) => &doc.items,
        }
    }

    /// Feed-level timestamps in priority order: `updatedAt`, `lastUpdated`, `meta.updatedAt`.
    pub fn feed_timestamps(&self) -> Vec<&str> {
        match self {
            Payload::Records(_) => Vec::new(),
            Payload::Document(doc) => [&doc.updated_at, &doc.last_updated, &doc.meta_updated_at]
                .into_iter()
                .filter_map(|v| v.as_deref())
                .collect(),
        }
    }
}

/// A string value with at least one character, or `None`.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
