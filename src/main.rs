//! Docmatter - inject static-site front matter into a markdown documentation tree.

mod cli;
mod config;
mod error;
mod logger;
mod patch;
mod walk;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::PublishConfig;
use walk::process_directory;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let report = process_directory(&cli.base_dir, &config)
        .with_context(|| format!("failed to publish `{}`", cli.base_dir.display()))?;

    log!("done"; "patched {}, skipped {}", report.patched, report.skipped);
    Ok(())
}

/// Load and validate the lookup tables, falling back to the built-in ones.
fn load_config(cli: &Cli) -> Result<PublishConfig> {
    let Some(path) = cli.config.as_deref() else {
        return Ok(PublishConfig::default());
    };

    let config = PublishConfig::from_path(path)
        .with_context(|| format!("failed to load config `{}`", path.display()))?;
    config.validate()?;
    Ok(config)
}
