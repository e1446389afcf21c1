//! Rating service configuration
//!
//! The weight table itself is fixed; these settings only cover how
//! submissions are validated and how results are reported.

use crate::rating::ValidationPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Handling of negative or out-of-range counters
    pub validation_policy: ValidationPolicy,
    /// Include per-component contributions in reported ratings
    pub include_breakdown: bool,
    /// Number of entries returned for a weekly leaderboard
    pub leaderboard_size: usize,
    /// Rated matches kept in memory before the oldest are evicted
    pub max_stored_matches: usize,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            validation_policy: ValidationPolicy::Reject,
            include_breakdown: false,
            leaderboard_size: 20,
            max_stored_matches: 10_000,
        }
    }
}
