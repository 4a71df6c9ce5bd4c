use crate::error::ValidationError;

pub(crate) fn validate_teams(home_team: &str, away_team: &str) -> Result<(), ValidationError> {
    if home_team.is_empty() {
        return Err(ValidationError::EmptyHomeTeam);
    }
    if away_team.is_empty() {
        return Err(ValidationError::EmptyAwayTeam);
    }
    if home_team == away_team {
        return Err(ValidationError::SameTeams);
    }
    Ok(())
}

/// Convert caller-supplied scores into stored scores, rejecting negatives.
pub(crate) fn validate_scores(
    home_score: i32,
    away_score: i32,
) -> Result<(u32, u32), ValidationError> {
    let home = u32::try_from(home_score).map_err(|_| ValidationError::NegativeHomeScore)?;
    let away = u32::try_from(away_score).map_err(|_| ValidationError::NegativeAwayScore)?;
    Ok((home, away))
}
