use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use roster::config::Config;
use roster::logging;
use roster::store::{AppState, Store};
use roster::ui;

/// Terminal roster browser with an incremental name filter.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write tracing output to this file; the terminal itself is
    /// taken by the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref()).context("initializing logging")?;

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let store = Store::new(AppState::with_items(config.items.clone()));

    ui::run(store, &config).context("running ui")?;
    Ok(())
}
