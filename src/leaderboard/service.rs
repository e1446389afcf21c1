//! Rating service
//!
//! Ties validation, rating, storage and metrics together for callers that
//! submit match statistics and read back leaderboards.

use crate::config::RatingSettings;
use crate::error::{RatingError, Result};
use crate::leaderboard::ranking::{build_leaderboard, LeaderboardEntry};
use crate::leaderboard::storage::{LeaderboardStorage, RatedMatch};
use crate::metrics::MetricsCollector;
use crate::rating::RatingCalculator;
use crate::types::{MatchSubmission, PositionCategory};
use crate::utils::{current_timestamp, generate_match_id};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validates and rates submissions, and keeps them for leaderboards
pub struct RatingService {
    calculator: Arc<dyn RatingCalculator>,
    storage: Arc<dyn LeaderboardStorage>,
    settings: RatingSettings,
    metrics: Option<Arc<MetricsCollector>>,
}

impl RatingService {
    /// Create a new rating service
    pub fn new(
        calculator: Arc<dyn RatingCalculator>,
        storage: Arc<dyn LeaderboardStorage>,
        settings: RatingSettings,
    ) -> Self {
        Self {
            calculator,
            storage,
            settings,
            metrics: None,
        }
    }

    /// Attach a metrics collector
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn settings(&self) -> &RatingSettings {
        &self.settings
    }

    pub fn metrics(&self) -> Option<Arc<MetricsCollector>> {
        self.metrics.clone()
    }

    /// Validate, rate and store one submission
    pub fn submit(&self, submission: MatchSubmission) -> Result<RatedMatch> {
        let started = Instant::now();

        if submission.player_id.trim().is_empty() {
            return Err(self.reject(RatingError::InvalidSubmission {
                reason: "Player ID cannot be empty".to_string(),
            }));
        }

        let stats = match submission.stats.validate(self.settings.validation_policy) {
            Ok(stats) => stats,
            Err(e) => {
                warn!(
                    "Rejected stats for player {}: {}",
                    submission.player_id, e
                );
                return Err(self.reject(e));
            }
        };

        let label = submission.position_category.as_deref();
        let position = PositionCategory::resolve(label);
        if let Some(label) = label {
            if PositionCategory::parse_known(label).is_none() {
                debug!(
                    "Unknown position category '{}' for player {}, rating as {}",
                    label, submission.player_id, position
                );
            }
        }

        let result = self.calculator.calculate_rating(&stats, position);
        let rated = RatedMatch {
            player_id: submission.player_id,
            match_id: submission.match_id.unwrap_or_else(generate_match_id),
            week: submission.week,
            position,
            result,
            recorded_at: current_timestamp(),
        };

        self.storage.record(rated.clone())?;

        if let Some(metrics) = &self.metrics {
            metrics.record_rating(&rated.result, started.elapsed());
        }

        info!(
            "Rated player {} as {} in match {} (week {}): {:.1}",
            rated.player_id, rated.position, rated.match_id, rated.week, rated.result.rating
        );

        Ok(rated)
    }

    /// Ranked table for a week, limited to the configured size
    pub fn leaderboard(&self, week: u32) -> Result<Vec<LeaderboardEntry>> {
        let matches = self.storage.matches_for_week(week)?;
        let board = build_leaderboard(week, &matches, self.settings.leaderboard_size);

        debug!(
            "Built week {} leaderboard: {} entries from {} matches",
            week,
            board.len(),
            matches.len()
        );

        Ok(board)
    }

    /// Every rated match of a player, oldest first
    pub fn player_history(&self, player_id: &str) -> Result<Vec<RatedMatch>> {
        self.storage.matches_for_player(player_id)
    }

    fn reject(&self, error: RatingError) -> anyhow::Error {
        if let Some(metrics) = &self.metrics {
            metrics.record_rejection(error.reason());
        }
        error.into()
    }
}
