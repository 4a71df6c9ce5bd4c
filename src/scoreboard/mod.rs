mod validation;

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, ScoreboardError};
use crate::models::{Match, MatchSummary};
use crate::ranking::{rank, RankingRule, TotalScoreThenRecency};
use crate::repository::{InMemoryMatchRepository, MatchRepository};

use validation::{validate_scores, validate_teams};

/// Scoreboard of the matches currently being played.
///
/// A match is identified by its ordered (home, away) pair of team names.  It
/// is added by [`start_match`](Scoreboard::start_match), rescored by
/// [`update_score`](Scoreboard::update_score) and dropped by
/// [`finish_match`](Scoreboard::finish_match).  Every operation validates its
/// input before touching the repository, so a rejected call changes nothing.
pub struct Scoreboard {
    repository: Box<dyn MatchRepository>,
    ranking: Box<dyn RankingRule>,
    clock: Box<dyn Clock>,
}

impl Scoreboard {
    pub fn new(
        repository: impl MatchRepository + 'static,
        ranking: impl RankingRule + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Scoreboard {
            repository: Box::new(repository),
            ranking: Box::new(ranking),
            clock: Box::new(clock),
        }
    }

    /// Start a 0-0 match between `home_team` and `away_team`.
    ///
    /// Fails with `Conflict` if either team is already playing.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        validate_teams(home_team, away_team)?;

        for team in [home_team, away_team] {
            if self.repository.contains_team(team) {
                return Err(ScoreboardError::Conflict {
                    team: team.to_string(),
                });
            }
        }

        let started_at = self.clock.now();
        self.repository
            .save(Match::new(home_team, away_team, started_at))?;
        info!("Match started: {} vs {} at {}", home_team, away_team, started_at);
        Ok(())
    }

    /// Set the absolute score of an active match.
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        validate_teams(home_team, away_team)?;
        let (home_score, away_score) = validate_scores(home_score, away_score)?;

        let current = self
            .repository
            .find(home_team, away_team)
            .ok_or_else(|| ScoreboardError::not_found(home_team, away_team))?;

        self.repository
            .save(current.with_score(home_score, away_score))?;
        debug!(
            "Score updated: {} {}-{} {}",
            home_team, home_score, away_score, away_team
        );
        Ok(())
    }

    /// Finish an active match, removing it from the scoreboard.
    pub fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        validate_teams(home_team, away_team)?;

        let finished = self.repository.remove(home_team, away_team)?;
        info!(
            "Match finished: {} {}-{} {}",
            finished.home_team(),
            finished.home_score(),
            finished.away_score(),
            finished.away_team()
        );
        Ok(())
    }

    /// Active matches, ranked by the configured rule.
    pub fn summary(&self) -> Vec<MatchSummary> {
        let mut matches = self.repository.list_all();
        rank(&mut matches, self.ranking.as_ref());
        debug!("Summary produced for {} active match(es)", matches.len());
        matches.iter().map(MatchSummary::from).collect()
    }

    pub fn active_matches(&self) -> usize {
        self.repository.len()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Scoreboard::new(
            InMemoryMatchRepository::new(),
            TotalScoreThenRecency,
            SystemClock::new(),
        )
    }
}
