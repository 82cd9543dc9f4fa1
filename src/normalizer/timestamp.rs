use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Naive forms accepted in addition to RFC 3339 / RFC 2822, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A feed-level timestamp as ISO-8601.
///
/// RFC 3339 strings and bare `YYYY-MM-DD` dates are kept exactly as given;
/// every other accepted form is reformatted with [`format_iso`].
pub fn feed_timestamp(raw: &str) -> Option<String> {
    let parsed = parse_timestamp(raw)?;

    let already_iso = DateTime::parse_from_rfc3339(raw).is_ok()
        || (raw.len() == 10 && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok());
    if already_iso {
        Some(raw.to_string())
    } else {
        Some(format_iso(parsed))
    }
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`
pub fn format_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Most recent per-record `updatedAt` (or `lastUpdated`) that parses.
///
/// Strings go through [`parse_timestamp`]; numbers are epoch milliseconds.
pub fn latest_updated_at(records: &[Value]) -> Option<String> {
    records
        .iter()
        .filter_map(record_timestamp)
        .max()
        .map(format_iso)
}

fn record_timestamp(record: &Value) -> Option<DateTime<Utc>> {
    let value = present(record.get("updatedAt")).or_else(|| present(record.get("lastUpdated")))?;

    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

/// Non-empty strings and non-zero numbers; anything else counts as unset.
fn present(value: Option<&Value>) -> Option<&Value> {
    let value = value?;
    let set = match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => false,
    };
    set.then_some(value)
}
