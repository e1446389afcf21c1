//! Pitch Rating - position-weighted performance ratings for football matches
//!
//! This crate turns the raw event counters of a player's match into a single
//! 1.0 to 10.0 rating, weighted by playing position, and ranks players on
//! weekly leaderboards.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod metrics;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use leaderboard::{InMemoryLeaderboard, LeaderboardStorage, RatingService};
pub use rating::{calculate_rating, RatingCalculator, RatingEngine, RatingResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
