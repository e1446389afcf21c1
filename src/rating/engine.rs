//! Position-weighted performance rating engine
//!
//! Turns the raw counters of one match into a single score between 1.0 and
//! 10.0. The computation is a pure, single pass over the weights of the
//! resolved position category.

use crate::rating::calculator::{RatingCalculator, RatingResult, MAX_RATING, MIN_RATING};
use crate::rating::components::raw_score;
use crate::rating::weights::{ComponentKind, WeightTable};
use crate::types::{MatchStatRecord, PositionCategory};
use crate::utils::round_to_tenth;
use std::collections::BTreeMap;
use tracing::trace;

/// Starting point of every rating
pub const BASE_RATING: f64 = 6.0;

/// Flat bonus for a strong performance outside the natural position
pub const VERSATILITY_BONUS: f64 = 0.3;

/// Mean weighted contribution a performance must exceed to earn the bonus
pub const VERSATILITY_THRESHOLD: f64 = 0.5;

/// Rating engine over a fixed weight table
#[derive(Debug, Clone)]
pub struct RatingEngine {
    weights: WeightTable,
}

impl RatingEngine {
    /// Create an engine over a custom weight table
    pub fn new(weights: WeightTable) -> crate::error::Result<Self> {
        weights.validate()?;

        Ok(Self { weights })
    }

    /// Engine over the standard production weights
    pub const fn standard() -> Self {
        Self {
            weights: WeightTable::STANDARD,
        }
    }

    /// Rate a performance, resolving the category label first.
    ///
    /// Unknown or missing labels are rated as midfielder.
    pub fn rate_labelled(&self, stats: &MatchStatRecord, category: Option<&str>) -> RatingResult {
        self.calculate_rating(stats, PositionCategory::resolve(category))
    }

    fn versatility_bonus(stats: &MatchStatRecord, breakdown: &BTreeMap<ComponentKind, f64>) -> f64 {
        if !stats.played_out_of_position() {
            return 0.0;
        }

        let average = if breakdown.is_empty() {
            0.0
        } else {
            breakdown.values().sum::<f64>() / breakdown.len() as f64
        };

        if average > VERSATILITY_THRESHOLD {
            VERSATILITY_BONUS
        } else {
            0.0
        }
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RatingCalculator for RatingEngine {
    fn calculate_rating(
        &self,
        stats: &MatchStatRecord,
        position: PositionCategory,
    ) -> RatingResult {
        let mut breakdown = BTreeMap::new();
        let mut contributions = 0.0;

        for weight in self.weights.weights_for(position) {
            let contribution = raw_score(weight.component, stats) * weight.weight;
            contributions += contribution;
            breakdown.insert(weight.component, contribution);
        }

        let versatility_bonus = Self::versatility_bonus(stats, &breakdown);
        let raw_total = BASE_RATING + contributions + versatility_bonus;
        let rating = round_to_tenth(raw_total.clamp(MIN_RATING, MAX_RATING));

        trace!(
            position = %position,
            raw_total,
            rating,
            versatility_bonus,
            "Rated match performance"
        );

        RatingResult {
            rating,
            position,
            breakdown,
            versatility_bonus,
            raw_total,
        }
    }

    fn weights(&self) -> &WeightTable {
        &self.weights
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "positional",
            "base_rating": BASE_RATING,
            "min_rating": MIN_RATING,
            "max_rating": MAX_RATING,
            "versatility_bonus": VERSATILITY_BONUS,
            "versatility_threshold": VERSATILITY_THRESHOLD,
            "weights": {
                "goalkeeper": self.weights.weights_for(PositionCategory::Goalkeeper),
                "defender": self.weights.weights_for(PositionCategory::Defender),
                "midfielder": self.weights.weights_for(PositionCategory::Midfielder),
                "attacker": self.weights.weights_for(PositionCategory::Attacker),
            }
        })
    }
}

/// Rate a performance with the standard weights
pub fn calculate_rating(stats: &MatchStatRecord, position: PositionCategory) -> RatingResult {
    RatingEngine::standard().calculate_rating(stats, position)
}
