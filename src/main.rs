use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;

mod config;
mod demo;

use config::Config;
use live_scoreboard::Scoreboard;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let source = match &config.script {
        Some(path) => {
            info!("Replaying script {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?
        }
        None => {
            info!("No script given, replaying the built-in demo");
            demo::BUILTIN_SCRIPT.to_string()
        }
    };
    let commands = demo::parse_script(&source)?;

    let mut scoreboard = Scoreboard::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(
        &mut scoreboard,
        &commands,
        config.format,
        config.fail_fast,
        &mut out,
    )?;
    out.flush()?;

    Ok(())
}
