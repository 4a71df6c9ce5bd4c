use thiserror::Error;

/// Errors returned by the scoreboard and its match repository.
///
/// None of them is fatal: each one means the call was rejected and the
/// scoreboard state is exactly what it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// Malformed input, detected before any state is touched.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The team is already committed to a different active match.
    #[error("team {team} is already playing a match")]
    Conflict { team: String },

    /// No active match exists for this exact home/away pair.
    #[error("there is no match {home_team} - {away_team}")]
    NotFound {
        home_team: String,
        away_team: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("home team name cannot be empty")]
    EmptyHomeTeam,
    #[error("away team name cannot be empty")]
    EmptyAwayTeam,
    #[error("home and away team names cannot be the same")]
    SameTeams,
    #[error("home score cannot be negative")]
    NegativeHomeScore,
    #[error("away score cannot be negative")]
    NegativeAwayScore,
}

impl ScoreboardError {
    pub(crate) fn not_found(home_team: &str, away_team: &str) -> Self {
        ScoreboardError::NotFound {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
