use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How summaries are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One "Home 1 - Away 0" line per match
    #[default]
    Text,
    /// A JSON array of match summaries
    Json,
}

/// Live football scoreboard demo
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard-demo", version, about)]
pub struct Config {
    /// Command script to replay; the built-in demo runs when omitted
    #[arg(long, env = "SCOREBOARD_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Summary output format
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Stop at the first rejected command instead of logging it and going on
    #[arg(long, env = "SCOREBOARD_FAIL_FAST", default_value = "false")]
    pub fail_fast: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.script {
            if !path.is_file() {
                anyhow::bail!("script {} does not exist or is not a file", path.display());
            }
        }
        Ok(())
    }
}
