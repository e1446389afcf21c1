//! Weekly leaderboards over rated matches
//!
//! This module keeps rated matches in a storage backend and ranks players
//! per week by their mean match rating.

pub mod ranking;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use ranking::{build_leaderboard, LeaderboardEntry};
pub use service::RatingService;
pub use storage::{InMemoryLeaderboard, LeaderboardStorage, RatedMatch};
