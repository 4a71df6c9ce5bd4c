//! In-memory live scoreboard.
//!
//! Tracks the matches currently being played, keeps every team in at most one
//! of them, and produces a summary ranked by combined score (most recently
//! started first on ties).
//!
//! ```text
//! caller -> Scoreboard -> (validate) -> MatchRepository
//!                              \-> RankingRule -> MatchSummary -> caller
//! ```

pub mod clock;
pub mod error;
pub mod models;
pub mod ranking;
pub mod repository;
pub mod scoreboard;

pub use clock::{Clock, SystemClock};
pub use error::{Result, ScoreboardError, ValidationError};
pub use models::{Match, MatchSummary};
pub use ranking::{RankingRule, TotalScoreThenRecency};
pub use repository::{InMemoryMatchRepository, MatchRepository};
pub use scoreboard::Scoreboard;
