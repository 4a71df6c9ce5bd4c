use anyhow::{bail, Context, Result};

/// One line of a scoreboard script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home_team: String,
        away_team: String,
    },
    Update {
        home_team: String,
        away_team: String,
        home_score: i32,
        away_score: i32,
    },
    Finish {
        home_team: String,
        away_team: String,
    },
    Summary,
}

/// Parse a script: one comma-separated command per line.
///
/// ```text
/// # comment
/// start, Argentina, Brazil
/// update, Argentina, Brazil, 0, 1
/// finish, Argentina, Brazil
/// summary
/// ```
///
/// Scores are parsed as signed integers; range checks are left to the
/// scoreboard so a negative score is a rejected command, not a parse error.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            parse_line(line).with_context(|| format!("line {}: {}", idx + 1, line.trim()))
        })
        .collect()
}

fn parse_line(line: &str) -> Result<Command> {
    let mut fields = line.split(',').map(str::trim);
    let verb = fields.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = fields.collect();

    let command = match (verb.as_str(), args.as_slice()) {
        ("start", [home, away]) => Command::Start {
            home_team: home.to_string(),
            away_team: away.to_string(),
        },
        ("update", [home, away, home_score, away_score]) => Command::Update {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: parse_score(home_score)?,
            away_score: parse_score(away_score)?,
        },
        ("finish", [home, away]) => Command::Finish {
            home_team: home.to_string(),
            away_team: away.to_string(),
        },
        ("summary", []) => Command::Summary,
        ("start" | "finish", _) => {
            bail!("{} expects 2 team names, got {} field(s)", verb, args.len())
        }
        ("update", _) => bail!(
            "update expects 2 team names and 2 scores, got {} field(s)",
            args.len()
        ),
        ("summary", _) => bail!("summary takes no arguments"),
        (other, _) => bail!("unknown command '{}'", other),
    };
    Ok(command)
}

fn parse_score(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .with_context(|| format!("invalid score '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let commands = parse_script(
            "start, Argentina, Brazil\n\
             update, Argentina, Brazil, 0, 1\n\
             finish, Argentina, Brazil\n\
             summary\n",
        )
        .unwrap();

        assert_eq!(
            commands,
            vec![
                Command::Start {
                    home_team: "Argentina".into(),
                    away_team: "Brazil".into(),
                },
                Command::Update {
                    home_team: "Argentina".into(),
                    away_team: "Brazil".into(),
                    home_score: 0,
                    away_score: 1,
                },
                Command::Finish {
                    home_team: "Argentina".into(),
                    away_team: "Brazil".into(),
                },
                Command::Summary,
            ]
        );
    }

    #[test]
    fn test_comments_blank_lines_and_spacing() {
        let commands = parse_script("# opening day\n\n   START ,  South Korea ,Ghana  \n").unwrap();
        assert_eq!(
            commands,
            vec![Command::Start {
                home_team: "South Korea".into(),
                away_team: "Ghana".into(),
            }]
        );
    }

    #[test]
    fn test_negative_score_is_left_to_the_scoreboard() {
        let commands = parse_script("update, Japan, Poland, -1, 0").unwrap();
        assert!(matches!(commands[0], Command::Update { home_score: -1, .. }));
    }

    #[test]
    fn test_empty_team_name_is_left_to_the_scoreboard() {
        let commands = parse_script("start, , Poland").unwrap();
        assert!(matches!(&commands[0], Command::Start { home_team, .. } if home_team.is_empty()));
    }

    #[test]
    fn test_error_reports_line_number() {
        let err = parse_script("summary\n# fine\nkickoff, A, B").unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("line 3"), "unexpected error: {}", msg);
        assert!(msg.contains("unknown command 'kickoff'"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_wrong_arity() {
        assert!(parse_script("start, Argentina").is_err());
        assert!(parse_script("update, Argentina, Brazil, 1").is_err());
        assert!(parse_script("summary, now").is_err());
    }

    #[test]
    fn test_line_without_verb_is_unknown_command() {
        let err = parse_script(", Argentina, Brazil").unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("line 1"), "unexpected error: {}", msg);
        assert!(msg.contains("unknown command ''"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_bad_score() {
        let err = parse_script("update, Argentina, Brazil, one, 0").unwrap_err();
        assert!(format!("{:#}", err).contains("invalid score 'one'"));
    }
}
