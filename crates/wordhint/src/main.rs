//! Main entry point for wordhint
//!
//! Loads configuration, applies command-line overrides, starts logging and
//! hands over to the GUI.

mod cli_args;

use anyhow::{Context, Result};
use clap::Parser;
use cli_args::Cli;
use tracing::{info, warn};
use wordhint_core::{init_logging, load_config, load_config_from, save_config_to};
use wordhint_gui::LaunchOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = init_logging(cli.logging_destination()).context("failed to start logging")?;
    if let Some(path) = log_path {
        info!(path = %path.display(), "Logging to file");
    }

    let mut load = match cli.config.as_deref() {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    for warning in &load.warnings {
        warn!("{}", warning);
    }
    info!(source = ?load.source, "Configuration loaded");

    cli.apply_overrides(&mut load.config);
    if let Some(path) = cli.save_target() {
        save_config_to(&load.config, &path)
            .with_context(|| format!("failed to save configuration to {}", path.display()))?;
        info!(path = %path.display(), "Configuration saved");
    }
    let capabilities = cli.capabilities(&load.config);

    wordhint_gui::run(LaunchOptions {
        config: load.config,
        capabilities,
        theme: cli.theme.map(Into::into),
    })
    .context("GUI exited with an error")?;

    Ok(())
}
