//! Common types used throughout the rating service

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for matches
pub type MatchId = Uuid;

/// Positional group that decides which weights apply to a performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionCategory {
    Goalkeeper,
    Defender,
    #[default]
    Midfielder,
    Attacker,
}

impl PositionCategory {
    pub const ALL: [PositionCategory; 4] = [
        PositionCategory::Goalkeeper,
        PositionCategory::Defender,
        PositionCategory::Midfielder,
        PositionCategory::Attacker,
    ];

    /// Parse one of the four known category labels, ignoring case and
    /// surrounding whitespace
    pub fn parse_known(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "goalkeeper" => Some(PositionCategory::Goalkeeper),
            "defender" => Some(PositionCategory::Defender),
            "midfielder" => Some(PositionCategory::Midfielder),
            "attacker" => Some(PositionCategory::Attacker),
            _ => None,
        }
    }

    /// Resolve an optional category label.
    ///
    /// Anything that is not one of the four known categories, including a
    /// missing label, resolves to [`PositionCategory::Midfielder`].
    pub fn resolve(label: Option<&str>) -> Self {
        label
            .and_then(Self::parse_known)
            .unwrap_or(PositionCategory::Midfielder)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionCategory::Goalkeeper => "goalkeeper",
            PositionCategory::Defender => "defender",
            PositionCategory::Midfielder => "midfielder",
            PositionCategory::Attacker => "attacker",
        }
    }
}

impl From<&str> for PositionCategory {
    fn from(label: &str) -> Self {
        Self::resolve(Some(label))
    }
}

impl std::str::FromStr for PositionCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::resolve(Some(s)))
    }
}

impl std::fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated raw counters for one player in one match.
///
/// Every field not supplied by the caller defaults to zero (or an empty
/// string). `assists` is taken as given and never derived from crosses or
/// passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchStatRecord {
    pub goals: u32,
    pub assists: u32,
    pub shots_on: u32,
    pub shots_off: u32,
    pub short_passes_successful: u32,
    pub short_passes_unsuccessful: u32,
    pub long_passes_successful: u32,
    pub long_passes_unsuccessful: u32,
    pub crosses_successful: u32,
    pub crosses_unsuccessful: u32,
    pub interceptions: u32,
    pub tackles: u32,
    pub clearances: u32,
    pub gk_saves: u32,
    pub goals_conceded: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub fouls: u32,
    pub offsides: u32,
    /// Minutes on the pitch, 0 to 120
    pub minutes_played: u32,
    pub position_played: String,
    pub natural_position: String,
}

impl MatchStatRecord {
    /// Successful short and long passes combined
    pub fn successful_passes(&self) -> u32 {
        self.short_passes_successful
            .saturating_add(self.long_passes_successful)
    }

    /// Unsuccessful short and long passes combined
    pub fn unsuccessful_passes(&self) -> u32 {
        self.short_passes_unsuccessful
            .saturating_add(self.long_passes_unsuccessful)
    }

    /// Shots on and off target combined
    pub fn total_shots(&self) -> u32 {
        self.shots_on.saturating_add(self.shots_off)
    }

    /// Whether the player lined up somewhere other than their natural position
    pub fn played_out_of_position(&self) -> bool {
        let natural = self.natural_position.trim();
        let played = self.position_played.trim();
        !natural.is_empty() && !played.is_empty() && natural.to_lowercase() != played.to_lowercase()
    }
}

/// Unvalidated counters as submitted by a form or JSON payload.
///
/// Mirrors [`MatchStatRecord`] with signed fields so that out-of-domain input
/// can be detected instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMatchStats {
    pub goals: i64,
    pub assists: i64,
    pub shots_on: i64,
    pub shots_off: i64,
    pub short_passes_successful: i64,
    pub short_passes_unsuccessful: i64,
    pub long_passes_successful: i64,
    pub long_passes_unsuccessful: i64,
    pub crosses_successful: i64,
    pub crosses_unsuccessful: i64,
    pub interceptions: i64,
    pub tackles: i64,
    pub clearances: i64,
    pub gk_saves: i64,
    pub goals_conceded: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub fouls: i64,
    pub offsides: i64,
    pub minutes_played: i64,
    pub position_played: String,
    pub natural_position: String,
}

/// A player's statistics for one match, submitted for rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSubmission {
    pub player_id: PlayerId,
    /// Generated when the caller does not supply one
    #[serde(default)]
    pub match_id: Option<MatchId>,
    #[serde(default)]
    pub week: u32,
    #[serde(default)]
    pub position_category: Option<String>,
    #[serde(default)]
    pub stats: RawMatchStats,
}
