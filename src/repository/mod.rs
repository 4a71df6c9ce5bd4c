pub mod in_memory;

pub use in_memory::InMemoryMatchRepository;

use crate::error::Result;
use crate::models::Match;

/// Store of the matches currently in progress.
///
/// Implementations must keep every team in at most one stored match and must
/// answer lookups consistently whichever team the lookup starts from.
pub trait MatchRepository: Send + Sync {
    /// Store `m`, replacing a previously stored match between the same home and
    /// away teams.
    ///
    /// Fails with `Conflict` when either team already plays in a different
    /// match; nothing is stored in that case.
    fn save(&mut self, m: Match) -> Result<()>;

    /// Whether `team` plays (home or away) in any stored match.
    fn contains_team(&self, team: &str) -> bool;

    /// The stored match between exactly `home_team` and `away_team`.
    fn find(&self, home_team: &str, away_team: &str) -> Option<Match>;

    /// Remove and return the match between `home_team` and `away_team`.
    /// Fails with `NotFound` when there is no such match.
    fn remove(&mut self, home_team: &str, away_team: &str) -> Result<Match>;

    /// Every stored match, in no particular order.
    fn list_all(&self) -> Vec<Match>;

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
