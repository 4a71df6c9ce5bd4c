//! Dual-keyed in-memory match store.
//!
//! Every active match is indexed twice: once under its home team and once
//! under its away team.  Either index answers "is this team playing?" in O(1),
//! and a pair lookup is only a hit when both indices agree on the same match.
//!
//! Both maps are private and only ever written together, so no caller can
//! observe one of them updated without the other.

use std::collections::HashMap;
use tracing::debug;

use super::MatchRepository;
use crate::error::{Result, ScoreboardError};
use crate::models::Match;

#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    /// home team -> match
    by_home: HashMap<String, Match>,
    /// away team -> match
    by_away: HashMap<String, Match>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// First team of `m` that is already bound to a different match, if any.
    fn conflicting_team<'a>(&self, m: &'a Match) -> Option<&'a str> {
        [m.home_team(), m.away_team()].into_iter().find(|team| {
            [self.by_home.get(*team), self.by_away.get(*team)]
                .into_iter()
                .flatten()
                .any(|stored| !stored.is_between(m.home_team(), m.away_team()))
        })
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn save(&mut self, m: Match) -> Result<()> {
        if let Some(team) = self.conflicting_team(&m) {
            return Err(ScoreboardError::Conflict {
                team: team.to_string(),
            });
        }

        debug!(
            "Saving match {} {}-{} {}",
            m.home_team(),
            m.home_score(),
            m.away_score(),
            m.away_team()
        );
        self.by_away.insert(m.away_team().to_string(), m.clone());
        self.by_home.insert(m.home_team().to_string(), m);
        Ok(())
    }

    fn contains_team(&self, team: &str) -> bool {
        self.by_home.contains_key(team) || self.by_away.contains_key(team)
    }

    fn find(&self, home_team: &str, away_team: &str) -> Option<Match> {
        let home_hit = self
            .by_home
            .get(home_team)
            .filter(|m| m.is_between(home_team, away_team))?;
        let away_hit = self
            .by_away
            .get(away_team)
            .filter(|m| m.is_between(home_team, away_team))?;

        (home_hit == away_hit).then(|| home_hit.clone())
    }

    fn remove(&mut self, home_team: &str, away_team: &str) -> Result<Match> {
        if self.find(home_team, away_team).is_none() {
            return Err(ScoreboardError::not_found(home_team, away_team));
        }

        self.by_away.remove(away_team);
        self.by_home
            .remove(home_team)
            .ok_or_else(|| ScoreboardError::not_found(home_team, away_team))
    }

    fn list_all(&self) -> Vec<Match> {
        self.by_home.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.by_home.len()
    }
}
