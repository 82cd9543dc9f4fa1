use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::app::{MenuFeedError, Result};

/// Parse CSV text into `{ "items": [ {header: value, ...}, ... ] }`.
///
/// The first non-blank line is the header row. Quoted fields may contain
/// commas and `""` escapes but not line breaks. Short rows are padded with
/// empty strings; fields past the last header are dropped.
pub fn parse_csv(text: &str) -> Result<Value> {
    let mut lines = text.trim().lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(MenuFeedError::EmptyFeed)?;
    let headers = split_csv_line(header_line);

    let rows: Vec<Value> = lines
        .enumerate()
        .map(|(index, line)| {
            let fields = split_csv_line(line);
            if fields.len() > headers.len() {
                warn!(
                    row = index + 1,
                    dropped = fields.len() - headers.len(),
                    "CSV row has more fields than the header; extra fields dropped"
                );
            }

            let mut record = Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = fields.get(i).cloned().unwrap_or_default();
                record.insert(header.clone(), Value::String(value));
            }
            Value::Object(record)
        })
        .collect();

    debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV feed");
    Ok(json!({ "items": rows }))
}

/// Split one CSV line on commas outside double quotes, trimming each field.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);

    values.into_iter().map(|v| v.trim().to_string()).collect()
}
