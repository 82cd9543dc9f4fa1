use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::{MenuFeedError, Result};
use crate::domain::MenuFeed;

/// Pretty JSON (two-space indent) with a trailing newline.
pub fn render(feed: &MenuFeed) -> Result<String> {
    let mut body = serde_json::to_string_pretty(feed)?;
    body.push('\n');
    Ok(body)
}

/// Write `feed` to `path`, creating parent directories and replacing any
/// existing file.
///
/// The document goes to a sibling `.tmp` file first and is renamed into
/// place, so readers never see a half-written feed.
pub async fn write_feed(path: &Path, feed: &MenuFeed) -> Result<()> {
    let body = render(feed)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| write_error(parent, e))?;
    }

    let tmp = temp_path(path);
    if let Err(e) = replace_via(&tmp, path, body).await {
        // Best effort; report the write error, not the cleanup one
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e);
    }

    info!(items = feed.items.len(), "Wrote menu feed to {}", path.display());
    Ok(())
}

async fn replace_via(tmp: &Path, path: &Path, body: String) -> Result<()> {
    tokio::fs::write(tmp, body)
        .await
        .map_err(|e| write_error(tmp, e))?;
    tokio::fs::rename(tmp, path)
        .await
        .map_err(|e| write_error(path, e))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("menu.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(path: &Path, source: std::io::Error) -> MenuFeedError {
    MenuFeedError::Write {
        path: path.to_path_buf(),
        source,
    }
}
