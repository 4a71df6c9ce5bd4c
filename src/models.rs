use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A match currently in progress.
///
/// The home/away pair and the start time are fixed for the lifetime of the
/// match; a score change produces a new `Match` through [`Match::with_score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    started_at: DateTime<Utc>,
}

impl Match {
    /// New match at 0-0, started at `started_at`.
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Match {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            started_at,
        }
    }

    /// Copy of this match carrying the given absolute scores.
    pub fn with_score(&self, home_score: u32, away_score: u32) -> Self {
        Match {
            home_score,
            away_score,
            ..self.clone()
        }
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Combined score; widened so two `u32::MAX` scores cannot overflow.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// True when this match is between exactly `home_team` (home) and `away_team` (away).
    pub fn is_between(&self, home_team: &str, away_team: &str) -> bool {
        self.home_team == home_team && self.away_team == away_team
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// Read-only view of a match handed out by the scoreboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSummary {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchSummary {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        MatchSummary {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score,
            away_score,
        }
    }
}

impl From<&Match> for MatchSummary {
    fn from(m: &Match) -> Self {
        MatchSummary {
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            home_score: m.home_score,
            away_score: m.away_score,
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
