pub mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "menu-feed", version)]
#[command(about = "Fetch a menu feed (CSV or JSON) and write it as normalized JSON", long_about = None)]
pub struct Cli {
    /// Feed URL or local file path [env: MENU_FEED_URL, FEED_URL take precedence]
    pub source: Option<String>,

    /// Output JSON path [env: MENU_OUTPUT_PATH takes precedence]
    pub output: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}
