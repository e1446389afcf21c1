//! Match performance rating
//!
//! This module provides the position-weighted rating engine, its weight
//! tables and component scorers, and validation of submitted statistics.

pub mod calculator;
pub mod components;
pub mod engine;
pub mod validation;
pub mod weights;

// Re-export commonly used types
pub use calculator::{RatingCalculator, RatingResult, MAX_RATING, MIN_RATING};
pub use engine::{calculate_rating, RatingEngine, BASE_RATING};
pub use validation::ValidationPolicy;
pub use weights::{ComponentKind, ComponentWeight, WeightTable};
