//! Rating calculator trait and result types
//!
//! This module defines the interface for match performance ratings so that
//! the service layer can be driven by the positional engine or by a test
//! double.

use crate::rating::weights::{ComponentKind, WeightTable};
use crate::types::{MatchStatRecord, PositionCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest rating a performance can receive
pub const MIN_RATING: f64 = 1.0;

/// Highest rating a performance can receive
pub const MAX_RATING: f64 = 10.0;

/// Result of rating a single match performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    /// Final rating in [1.0, 10.0], rounded to one decimal place
    pub rating: f64,
    /// Category whose weights were applied
    pub position: PositionCategory,
    /// Weighted contribution of every component scored for the category
    pub breakdown: BTreeMap<ComponentKind, f64>,
    /// Flat bonus for playing well out of position (0.0 when not awarded)
    pub versatility_bonus: f64,
    /// Total before clamping and rounding
    pub raw_total: f64,
}

impl RatingResult {
    /// Weighted contribution of a component, if it was scored
    pub fn contribution(&self, component: ComponentKind) -> Option<f64> {
        self.breakdown.get(&component).copied()
    }

    /// Whether the unclamped total fell outside the rating bounds
    pub fn was_clamped(&self) -> bool {
        self.raw_total < MIN_RATING || self.raw_total > MAX_RATING
    }

    pub fn has_versatility_bonus(&self) -> bool {
        self.versatility_bonus > 0.0
    }
}

/// Trait for rating a player's performance in a match
pub trait RatingCalculator: Send + Sync {
    /// Rate one performance using the weights of `position`
    fn calculate_rating(&self, stats: &MatchStatRecord, position: PositionCategory)
        -> RatingResult;

    /// Weight table used for every calculation
    fn weights(&self) -> &WeightTable;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}
