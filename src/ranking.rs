use std::cmp::Ordering;

use crate::models::Match;

/// Ordering applied to the active matches when a summary is produced.
pub trait RankingRule: Send + Sync {
    fn compare(&self, a: &Match, b: &Match) -> Ordering;
}

impl<F> RankingRule for F
where
    F: Fn(&Match, &Match) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &Match, b: &Match) -> Ordering {
        self(a, b)
    }
}

/// Highest combined score first; among equal totals the most recently started
/// match first.
///
/// Matches equal on both keys fall back to home then away team name so the
/// summary order never depends on storage order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TotalScoreThenRecency;

impl RankingRule for TotalScoreThenRecency {
    fn compare(&self, a: &Match, b: &Match) -> Ordering {
        b.total_score()
            .cmp(&a.total_score())
            .then_with(|| b.started_at().cmp(&a.started_at()))
            .then_with(|| a.home_team().cmp(b.home_team()))
            .then_with(|| a.away_team().cmp(b.away_team()))
    }
}

/// Sort `matches` in place by `rule`.
pub fn rank(matches: &mut [Match], rule: &dyn RankingRule) {
    matches.sort_by(|a, b| rule.compare(a, b));
}
