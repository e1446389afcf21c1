//! Validation of submitted match statistics
//!
//! Submitted counters arrive as signed integers. They are checked here before
//! they reach the engine, which only accepts non-negative counters.

use crate::error::RatingError;
use crate::types::{MatchStatRecord, RawMatchStats};
use serde::{Deserialize, Serialize};

/// Longest match a player can take part in, extra time included
pub const MAX_MINUTES_PLAYED: u32 = 120;

/// How out-of-domain counters are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Fail with [`RatingError::InvalidStatistic`]
    #[default]
    Reject,
    /// Clamp negatives to zero and minutes to the match length
    Clamp,
}

impl std::str::FromStr for ValidationPolicy {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(ValidationPolicy::Reject),
            "clamp" => Ok(ValidationPolicy::Clamp),
            other => Err(RatingError::ConfigurationError {
                message: format!("Unknown validation policy: {}", other),
            }),
        }
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::Reject => write!(f, "reject"),
            ValidationPolicy::Clamp => write!(f, "clamp"),
        }
    }
}

fn counter(field: &'static str, value: i64, policy: ValidationPolicy) -> Result<u32, RatingError> {
    match u32::try_from(value) {
        Ok(v) => Ok(v),
        Err(_) if policy == ValidationPolicy::Clamp => Ok(if value < 0 { 0 } else { u32::MAX }),
        Err(_) => Err(RatingError::InvalidStatistic { field, value }),
    }
}

fn minutes(value: i64, policy: ValidationPolicy) -> Result<u32, RatingError> {
    let minutes = counter("minutes_played", value, policy)?;
    if minutes <= MAX_MINUTES_PLAYED {
        Ok(minutes)
    } else if policy == ValidationPolicy::Clamp {
        Ok(MAX_MINUTES_PLAYED)
    } else {
        Err(RatingError::InvalidStatistic {
            field: "minutes_played",
            value,
        })
    }
}

impl RawMatchStats {
    /// Convert into a [`MatchStatRecord`] under the given policy.
    ///
    /// Fields are checked in declaration order; under [`ValidationPolicy::Reject`]
    /// the first offending field is reported.
    pub fn validate(&self, policy: ValidationPolicy) -> Result<MatchStatRecord, RatingError> {
        Ok(MatchStatRecord {
            goals: counter("goals", self.goals, policy)?,
            assists: counter("assists", self.assists, policy)?,
            shots_on: counter("shots_on", self.shots_on, policy)?,
            shots_off: counter("shots_off", self.shots_off, policy)?,
            short_passes_successful: counter(
                "short_passes_successful",
                self.short_passes_successful,
                policy,
            )?,
            short_passes_unsuccessful: counter(
                "short_passes_unsuccessful",
                self.short_passes_unsuccessful,
                policy,
            )?,
            long_passes_successful: counter(
                "long_passes_successful",
                self.long_passes_successful,
                policy,
            )?,
            long_passes_unsuccessful: counter(
                "long_passes_unsuccessful",
                self.long_passes_unsuccessful,
                policy,
            )?,
            crosses_successful: counter("crosses_successful", self.crosses_successful, policy)?,
            crosses_unsuccessful: counter(
                "crosses_unsuccessful",
                self.crosses_unsuccessful,
                policy,
            )?,
            interceptions: counter("interceptions", self.interceptions, policy)?,
            tackles: counter("tackles", self.tackles, policy)?,
            clearances: counter("clearances", self.clearances, policy)?,
            gk_saves: counter("gk_saves", self.gk_saves, policy)?,
            goals_conceded: counter("goals_conceded", self.goals_conceded, policy)?,
            yellow_cards: counter("yellow_cards", self.yellow_cards, policy)?,
            red_cards: counter("red_cards", self.red_cards, policy)?,
            fouls: counter("fouls", self.fouls, policy)?,
            offsides: counter("offsides", self.offsides, policy)?,
            minutes_played: minutes(self.minutes_played, policy)?,
            position_played: self.position_played.trim().to_string(),
            natural_position: self.natural_position.trim().to_string(),
        })
    }
}
