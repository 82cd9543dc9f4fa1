use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::app::{MenuFeedError, Result};
use crate::config::HttpSettings;
use crate::fetcher::{FetchResult, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        info!("Fetching menu feed from {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuFeedError::Fetch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.text().await?;

        Ok(FetchResult { body, content_type })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one canned HTTP/1.1 response on a local port and return its base URL.
    async fn serve_once(status_line: &'static str, content_type: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        Url::parse(&format!("http://{}/menu", addr)).unwrap()
    }

    // Bypass any proxy configured in the environment; the server is loopback.
    fn direct_fetcher() -> HttpFetcher {
        HttpFetcher::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn test_builds_from_settings() {
        assert!(HttpFetcher::new(&HttpSettings::default()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once("200 OK", "text/csv; charset=utf-8", "name,price\nLatte,4.5\n").await;
        let fetcher = direct_fetcher();

        let result = fetcher.fetch(&url).await.unwrap();
        assert_eq!(result.body, "name,price\nLatte,4.5\n");
        assert_eq!(result.content_type.as_deref(), Some("text/csv; charset=utf-8"));
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let url = serve_once("404 Not Found", "text/plain", "missing").await;
        let fetcher = direct_fetcher();

        let err = fetcher.fetch(&url).await.unwrap_err();
        match &err {
            MenuFeedError::Fetch { status, reason, .. } => {
                assert_eq!(*status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected Fetch error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("Fetch failed (404 Not Found) for http://"));
    }
}
