use std::path::Path;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Csv,
    Json,
}

impl FeedFormat {
    /// CSV when the server says `text/csv` or the URL ends in `.csv`, JSON otherwise.
    pub fn detect_remote(url: &Url, content_type: Option<&str>) -> Self {
        let csv_header = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("text/csv"))
            .unwrap_or(false);

        if csv_header || has_csv_suffix(url.as_str()) {
            FeedFormat::Csv
        } else {
            FeedFormat::Json
        }
    }

    /// CSV when the path ends in `.csv`, JSON otherwise.
    pub fn detect_local(path: &Path) -> Self {
        if has_csv_suffix(&path.to_string_lossy()) {
            FeedFormat::Csv
        } else {
            FeedFormat::Json
        }
    }
}

fn has_csv_suffix(s: &str) -> bool {
    s.to_ascii_lowercase().ends_with(".csv")
}
