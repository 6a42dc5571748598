//! boxen - Draw boxes around text in the terminal.
//!
//! This is the main binary: it merges command-line flags over the loaded
//! configuration and prints the rendered box to stdout.

mod cli;
mod logging;

use anyhow::{Context, Result};
use boxen_config::Config;
use boxen_protocol::BoxStyle;
use boxen_render::{Boxen, TerminalRenderer};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    if cli.list_styles {
        for style in BoxStyle::all() {
            println!("{style}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    cli.apply(&mut config);
    config.validate()?;
    debug!(?config, "effective configuration");

    let content = cli.content(std::io::stdin().lock())?;
    let boxen = Boxen::new(TerminalRenderer::from_config(&config));
    let rendered = boxen.render(content, &config.box_options)?;
    print!("{rendered}");

    Ok(())
}
