//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use pitch_rating::rating::{RatingCalculator, RatingResult, WeightTable};
use pitch_rating::types::{MatchStatRecord, MatchSubmission, PositionCategory, RawMatchStats};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Mock rating calculator that returns a fixed rating and records its calls
#[derive(Debug)]
pub struct FixedRatingCalculator {
    rating: f64,
    calls: Mutex<Vec<(MatchStatRecord, PositionCategory)>>,
    weights: WeightTable,
}

impl FixedRatingCalculator {
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            calls: Mutex::new(Vec::new()),
            weights: WeightTable::standard(),
        }
    }

    /// Get all calculation calls made (for testing)
    pub fn calls(&self) -> Vec<(MatchStatRecord, PositionCategory)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for FixedRatingCalculator {
    fn calculate_rating(
        &self,
        stats: &MatchStatRecord,
        position: PositionCategory,
    ) -> RatingResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((stats.clone(), position));
        }

        RatingResult {
            rating: self.rating,
            position,
            breakdown: BTreeMap::new(),
            versatility_bonus: 0.0,
            raw_total: self.rating,
        }
    }

    fn weights(&self) -> &WeightTable {
        &self.weights
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({ "type": "fixed", "rating": self.rating })
    }
}

/// Submission for `player_id` in `week` with the given category and stats
pub fn submission(
    player_id: &str,
    week: u32,
    category: &str,
    stats: RawMatchStats,
) -> MatchSubmission {
    MatchSubmission {
        player_id: player_id.to_string(),
        match_id: None,
        week,
        position_category: Some(category.to_string()),
        stats,
    }
}

/// A solid ninety minutes from a striker
pub fn striker_stats() -> RawMatchStats {
    RawMatchStats {
        goals: 2,
        assists: 1,
        shots_on: 4,
        shots_off: 1,
        short_passes_successful: 18,
        short_passes_unsuccessful: 4,
        long_passes_successful: 2,
        long_passes_unsuccessful: 1,
        fouls: 1,
        offsides: 2,
        minutes_played: 90,
        position_played: "ST".to_string(),
        natural_position: "ST".to_string(),
        ..Default::default()
    }
}

/// A busy afternoon for a centre back
pub fn defender_stats() -> RawMatchStats {
    RawMatchStats {
        tackles: 5,
        interceptions: 4,
        clearances: 6,
        short_passes_successful: 35,
        short_passes_unsuccessful: 3,
        long_passes_successful: 5,
        long_passes_unsuccessful: 2,
        yellow_cards: 1,
        fouls: 2,
        minutes_played: 90,
        position_played: "CB".to_string(),
        natural_position: "CB".to_string(),
        ..Default::default()
    }
}
