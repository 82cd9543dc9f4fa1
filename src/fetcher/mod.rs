pub mod http_fetcher;

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::app::{MenuFeedError, Result};
use crate::domain::{FeedFormat, Source};

#[derive(Debug)]
pub struct FetchResult {
    pub body: String,
    /// Raw `content-type` response header, if any
    pub content_type: Option<String>,
}

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult>;
}

/// Feed text plus the format it should be parsed as.
#[derive(Debug)]
pub struct RawFeed {
    pub text: String,
    pub format: FeedFormat,
}

/// Read a source through `fetcher` (remote) or the filesystem (local).
pub async fn read_source(fetcher: &(dyn Fetcher + Send + Sync), source: &Source) -> Result<RawFeed> {
    let raw = match source {
        Source::Remote(url) => {
            let result = fetcher.fetch(url).await?;
            let format = FeedFormat::detect_remote(url, result.content_type.as_deref());
            RawFeed {
                text: result.body,
                format,
            }
        }
        Source::Local(path) => RawFeed {
            text: read_local(path).await?,
            format: FeedFormat::detect_local(path),
        },
    };

    debug!(bytes = raw.text.len(), format = ?raw.format, "Read menu feed from {}", source);
    Ok(raw)
}

async fn read_local(path: &Path) -> Result<String> {
    info!("Reading menu feed from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| MenuFeedError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct StubFetcher {
        body: String,
        content_type: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchResult> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(FetchResult {
                body: self.body.clone(),
                content_type: self.content_type.clone(),
            })
        }
    }

    fn stub(body: &str, content_type: Option<&str>) -> StubFetcher {
        StubFetcher {
            body: body.into(),
            content_type: content_type.map(String::from),
            requested: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn test_remote_csv_by_content_type() {
        let fetcher = stub("name\nX", Some("text/csv"));
        let source = Source::resolve("https://example.com/menu").unwrap();

        let raw = read_source(&fetcher, &source).await.unwrap();
        assert_eq!(raw.format, FeedFormat::Csv);
        assert_eq!(raw.text, "name\nX");
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            vec!["https://example.com/menu".to_string()]
        );
    }

    #[tokio::test]
    async fn test_remote_defaults_to_json() {
        let fetcher = stub("[]", None);
        let source = Source::resolve("https://example.com/menu").unwrap();

        let raw = read_source(&fetcher, &source).await.unwrap();
        assert_eq!(raw.format, FeedFormat::Json);
    }

    #[tokio::test]
    async fn test_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.csv");
        std::fs::write(&path, "name,price\nLatte,4.5\n").unwrap();

        let fetcher = stub("unused", None);
        let raw = read_source(&fetcher, &Source::Local(path)).await.unwrap();
        assert_eq!(raw.format, FeedFormat::Csv);
        assert_eq!(raw.text, "name,price\nLatte,4.5\n");
        assert!(fetcher.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_local_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let fetcher = stub("unused", None);
        let err = read_source(&fetcher, &Source::Local(path.clone()))
            .await
            .unwrap_err();
        match err {
            MenuFeedError::FileRead { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileRead, got {:?}", other),
        }
    }
}
