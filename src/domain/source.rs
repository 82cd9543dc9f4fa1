use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::app::{MenuFeedError, Result};

/// Where the menu feed lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An `http://` or `https://` URL
    Remote(Url),
    /// An absolute path on the local filesystem
    Local(PathBuf),
}

impl Source {
    /// Classify a raw source string.
    ///
    /// Anything starting with `http://` or `https://` (any case) is remote and
    /// must parse as a URL. Everything else is a local path, made absolute
    /// against the working directory without touching the filesystem.
    pub fn resolve(raw: &str) -> Result<Self> {
        if Self::is_remote(raw) {
            return Ok(Source::Remote(Url::parse(raw)?));
        }

        let path = std::path::absolute(raw).map_err(|e| MenuFeedError::FileRead {
            path: PathBuf::from(raw),
            source: e,
        })?;
        Ok(Source::Local(path))
    }

    pub fn is_remote(raw: &str) -> bool {
        has_prefix_ignore_case(raw, "http://") || has_prefix_ignore_case(raw, "https://")
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{}", url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

fn has_prefix_ignore_case(raw: &str, prefix: &str) -> bool {
    raw.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
