#![forbid(unsafe_code)]

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use sculpt_edit::{EditorConfig, load_config_from_path};
use std::io;
use std::process::ExitCode;

use crate::cli::Cli;

fn load_config(cli: &Cli) -> Result<EditorConfig> {
    let Some(path) = &cli.config else {
        return Ok(EditorConfig::default());
    };
    let cfg = load_config_from_path(path)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading config {}", path.display()))?;
    log::info!(target: "cli", "loaded config from {}", path.display());
    Ok(cfg)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // -v sets the floor; RUST_LOG still wins for individual targets
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = load_config(&cli)?;
    let ok = commands::run(&cli.command, &config, &mut io::stdout().lock())?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
