pub mod render;
pub mod script;

pub use render::render_summary;
pub use script::{parse_script, Command};

use anyhow::{Context, Result};
use live_scoreboard::Scoreboard;
use std::io::Write;
use tracing::{info, warn};

use crate::config::OutputFormat;

/// Sequence replayed when no script is given.
pub const BUILTIN_SCRIPT: &str = "\
# opening round
start, Argentina, Brazil
start, Portugal, Germany
update, Portugal, Germany, 1, 0
update, Argentina, Brazil, 0, 1
summary

start, Japan, Poland
update, Japan, Poland, 0, 1
update, Japan, Poland, 0, 2
summary

update, Portugal, Germany, 1, 1
finish, Argentina, Brazil
start, France, Spain
start, Brazil, Chile
update, France, Spain, 0, 1
update, Brazil, Chile, 1, 0
summary

finish, Portugal, Germany
finish, France, Spain
summary
";

/// Outcome of replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub applied: usize,
    pub rejected: usize,
}

/// Apply `commands` to `scoreboard`, writing every requested summary to `out`.
///
/// A command the scoreboard rejects is logged and counted, or aborts the run
/// when `fail_fast` is set.
pub fn run<W: Write>(
    scoreboard: &mut Scoreboard,
    commands: &[Command],
    format: OutputFormat,
    fail_fast: bool,
    out: &mut W,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for (idx, command) in commands.iter().enumerate() {
        let result = match command {
            Command::Start {
                home_team,
                away_team,
            } => scoreboard.start_match(home_team, away_team),
            Command::Update {
                home_team,
                away_team,
                home_score,
                away_score,
            } => scoreboard.update_score(home_team, away_team, *home_score, *away_score),
            Command::Finish {
                home_team,
                away_team,
            } => scoreboard.finish_match(home_team, away_team),
            Command::Summary => {
                let text = render_summary(&scoreboard.summary(), format)?;
                writeln!(out, "{}", text).context("Failed to write summary")?;
                continue;
            }
        };

        match result {
            Ok(()) => stats.applied += 1,
            Err(e) if fail_fast => {
                return Err(e)
                    .with_context(|| format!("command {} ({:?}) rejected", idx + 1, command));
            }
            Err(e) => {
                warn!("Command {} rejected: {}", idx + 1, e);
                stats.rejected += 1;
            }
        }
    }

    info!(
        "Script finished: {} applied, {} rejected, {} match(es) still in progress",
        stats.applied,
        stats.rejected,
        scoreboard.active_matches()
    );
    Ok(stats)
}
