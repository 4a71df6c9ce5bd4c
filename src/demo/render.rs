use anyhow::Result;
use live_scoreboard::MatchSummary;

use crate::config::OutputFormat;

pub fn render_summary(summary: &[MatchSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::from("CURRENT SCOREBOARD:\n");
            if summary.is_empty() {
                out.push_str("(no matches in progress)\n");
            }
            for (rank, m) in summary.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", rank + 1, m));
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)? + "\n"),
    }
}
