//! # menu-feed
//!
//! Turns a restaurant menu feed into a static JSON document.
//!
//! ## Architecture
//!
//! One linear pipeline per invocation:
//!
//! ```text
//! Source → Fetcher → Format detection → Parser → Normalizer → Writer
//! ```
//!
//! - [`domain`]: Source classification, format detection, menu models
//! - [`fetcher`]: HTTP GET or local file read
//! - [`parser`]: CSV tokenizer and JSON parsing
//! - [`normalizer`]: Maps raw records into [`MenuItem`](domain::MenuItem)s and picks `updatedAt`
//! - [`writer`]: Pretty JSON output
//!
//! ## Quick Start
//!
//! ```bash
//! # Local CSV to the default output (data/menu.json)
//! menu-feed data/menu.csv
//!
//! # Remote feed to a site build directory
//! MENU_FEED_URL=https://cafe.example/menu.json MENU_OUTPUT_PATH=public/menu.json menu-feed
//! ```

/// Application context and error types.
///
/// The [`AppContext`](app::AppContext) struct wires the resolved
/// [`Config`](config::Config) to a fetcher and normalizer.
pub mod app;

/// Command-line interface using clap.
///
/// `menu-feed [SOURCE] [OUTPUT] [--config FILE] [--timeout SECS]`
pub mod cli;

/// Run configuration: environment overrides, arguments, optional TOML file.
pub mod config;

/// Core domain models.
///
/// - [`Source`](domain::Source): remote URL or local path
/// - [`FeedFormat`](domain::FeedFormat): CSV or JSON
/// - [`Payload`](domain::Payload): parsed feed shape
/// - [`MenuItem`](domain::MenuItem) / [`MenuFeed`](domain::MenuFeed): normalized output
pub mod domain;

/// Feed retrieval.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for remote fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Normalization into the canonical menu schema.
pub mod normalizer;

/// CSV and JSON parsing.
pub mod parser;

/// Output rendering.
///
/// [`write_feed`](writer::write_feed) writes pretty JSON through a sibling
/// temporary file, so an existing output is replaced whole or not at all.
pub mod writer;
