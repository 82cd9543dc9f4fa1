pub mod timestamp;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::app::{MenuFeedError, Result};
use crate::domain::{MenuFeed, MenuItem, Payload};

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, raw: Value) -> Result<MenuFeed> {
        self.normalize_at(raw, Utc::now())
    }

    /// Normalize with an explicit clock for the last-resort `updatedAt`.
    pub fn normalize_at(&self, raw: Value, now: DateTime<Utc>) -> Result<MenuFeed> {
        let payload = Payload::from_value(raw)?;
        let records = payload.records();

        if records.is_empty() {
            return Err(MenuFeedError::NoItems);
        }

        let updated_at = payload
            .feed_timestamps()
            .into_iter()
            .find_map(timestamp::feed_timestamp)
            .or_else(|| timestamp::latest_updated_at(records))
            .unwrap_or_else(|| timestamp::format_iso(now));

        let items: Vec<MenuItem> = records.iter().map(normalize_item).collect();
        debug!(items = items.len(), updated_at = %updated_at, "Normalized menu feed");

        Ok(MenuFeed { updated_at, items })
    }
}

fn normalize_item(record: &Value) -> MenuItem {
    MenuItem {
        name: text_field(record, "name"),
        sku: text_field(record, "sku"),
        price: price_field(record),
        pill: text_field(record, "pill"),
        description: text_field(record, "description"),
        image: text_field(record, "image"),
        image_alt: match record.get("imageAlt") {
            None | Some(Value::Null) => None,
            Some(value) => Some(coerce_text(value)),
        },
    }
}

fn text_field(record: &Value, key: &str) -> String {
    record.get(key).map(coerce_text).unwrap_or_default()
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn price_field(record: &Value) -> Option<f64> {
    let price = match record.get("price")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };

    price.is_finite().then_some(price)
}
