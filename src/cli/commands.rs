use std::path::PathBuf;

use tracing::debug;

use crate::app::{AppContext, Result};
use crate::domain::Source;
use crate::fetcher;
use crate::parser;
use crate::writer;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub item_count: usize,
    pub updated_at: String,
    pub output: PathBuf,
}

/// Fetch, parse, normalize and write the configured menu feed.
///
/// Nothing is written unless every earlier stage succeeds.
pub async fn fetch_menu(ctx: &AppContext) -> Result<RunSummary> {
    let source = Source::resolve(&ctx.config.source)?;
    let raw = fetcher::read_source(ctx.fetcher.as_ref(), &source).await?;

    let parsed = parser::parse_feed(&raw.text, raw.format)?;
    let feed = ctx.normalizer.normalize(parsed)?;
    debug!(items = feed.items.len(), "Feed ready to write");

    writer::write_feed(&ctx.config.output, &feed).await?;

    Ok(RunSummary {
        item_count: feed.items.len(),
        updated_at: feed.updated_at,
        output: ctx.config.output.clone(),
    })
}

pub fn print_summary(summary: &RunSummary) {
    println!(
        "Wrote {} menu items to {}",
        summary.item_count,
        summary.output.display()
    );
    println!("Feed last updated at {}", summary.updated_at);
}

/// The single stderr line for a failed run, with the full cause chain.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("Unable to fetch menu data: {:#}", err)
}
