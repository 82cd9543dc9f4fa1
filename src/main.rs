use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use menu_feed::app::AppContext;
use menu_feed::cli::commands::{self, RunSummary};
use menu_feed::cli::Cli;
use menu_feed::config::{Config, FileConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the run summary
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(summary) => {
            commands::print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", commands::error_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let file = FileConfig::load(cli.config.as_deref()).context("Could not load configuration")?;
    let config = Config::resolve(cli, file, |key| std::env::var(key).ok())
        .context("Could not resolve paths")?;

    let ctx = AppContext::new(config)?;
    Ok(commands::fetch_menu(&ctx).await?)
}
