//! Rated match storage interface and implementations
//!
//! This module defines the interface for keeping rated matches around for
//! leaderboards and player history, with an in-memory implementation.

use crate::error::RatingError;
use crate::rating::RatingResult;
use crate::types::{MatchId, PlayerId, PositionCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A rated performance with the metadata needed to rank it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedMatch {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub week: u32,
    pub position: PositionCategory,
    pub result: RatingResult,
    pub recorded_at: DateTime<Utc>,
}

impl RatedMatch {
    pub fn rating(&self) -> f64 {
        self.result.rating
    }

    /// JSON summary of the match, optionally with the per-component breakdown
    pub fn to_report(&self, include_breakdown: bool) -> serde_json::Value {
        let mut report = serde_json::json!({
            "player_id": self.player_id,
            "match_id": self.match_id,
            "week": self.week,
            "position": self.position,
            "rating": self.result.rating,
        });

        if include_breakdown {
            report["breakdown"] = serde_json::json!(self.result.breakdown);
            report["versatility_bonus"] = serde_json::json!(self.result.versatility_bonus);
        }

        report
    }
}

/// Trait for rated match storage operations
pub trait LeaderboardStorage: Send + Sync {
    /// Store a rated match, replacing any earlier rating of the same player
    /// in the same match
    fn record(&self, rated: RatedMatch) -> crate::error::Result<()>;

    /// All rated matches of a week
    fn matches_for_week(&self, week: u32) -> crate::error::Result<Vec<RatedMatch>>;

    /// All rated matches of a player, oldest first
    fn matches_for_player(&self, player_id: &str) -> crate::error::Result<Vec<RatedMatch>>;

    /// Total number of stored matches
    fn match_count(&self) -> crate::error::Result<usize>;

    /// Remove every match of a week, returning how many were removed
    fn clear_week(&self, week: u32) -> crate::error::Result<usize>;
}

/// In-memory rated match storage
#[derive(Debug)]
pub struct InMemoryLeaderboard {
    matches: RwLock<Vec<RatedMatch>>,
    max_entries: usize,
}

impl InMemoryLeaderboard {
    /// Create a new in-memory store holding at most `max_entries` matches
    pub fn new(max_entries: usize) -> Self {
        Self {
            matches: RwLock::new(Vec::new()),
            max_entries,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<RatedMatch>>, RatingError> {
        self.matches.read().map_err(|_| RatingError::Internal {
            message: "Failed to acquire matches read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<RatedMatch>>, RatingError> {
        self.matches.write().map_err(|_| RatingError::Internal {
            message: "Failed to acquire matches write lock".to_string(),
        })
    }

    /// Drop the oldest recorded matches once the store exceeds its bound
    fn evict_oldest(matches: &mut Vec<RatedMatch>, max_entries: usize) {
        if matches.len() > max_entries {
            matches.sort_by_key(|m| m.recorded_at);
            let to_remove = matches.len() - max_entries;
            matches.drain(..to_remove);
        }
    }
}

impl Default for InMemoryLeaderboard {
    fn default() -> Self {
        Self::new(10000)
    }
}

impl LeaderboardStorage for InMemoryLeaderboard {
    fn record(&self, rated: RatedMatch) -> crate::error::Result<()> {
        let mut matches = self.write()?;

        matches.retain(|m| !(m.player_id == rated.player_id && m.match_id == rated.match_id));
        matches.push(rated);
        Self::evict_oldest(&mut matches, self.max_entries);

        Ok(())
    }

    fn matches_for_week(&self, week: u32) -> crate::error::Result<Vec<RatedMatch>> {
        let matches = self.read()?;
        Ok(matches.iter().filter(|m| m.week == week).cloned().collect())
    }

    fn matches_for_player(&self, player_id: &str) -> crate::error::Result<Vec<RatedMatch>> {
        let matches = self.read()?;
        let mut history: Vec<RatedMatch> = matches
            .iter()
            .filter(|m| m.player_id == player_id)
            .cloned()
            .collect();
        history.sort_by_key(|m| m.recorded_at);
        Ok(history)
    }

    fn match_count(&self) -> crate::error::Result<usize> {
        Ok(self.read()?.len())
    }

    fn clear_week(&self, week: u32) -> crate::error::Result<usize> {
        let mut matches = self.write()?;
        let before = matches.len();
        matches.retain(|m| m.week != week);
        Ok(before - matches.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::calculate_rating;
    use crate::types::MatchStatRecord;
    use crate::utils::generate_match_id;
    use chrono::Duration;

    fn rated(player_id: &str, week: u32, goals: u32, minutes_ago: i64) -> RatedMatch {
        let stats = MatchStatRecord {
            goals,
            ..Default::default()
        };
        RatedMatch {
            player_id: player_id.to_string(),
            match_id: generate_match_id(),
            week,
            position: PositionCategory::Attacker,
            result: calculate_rating(&stats, PositionCategory::Attacker),
            recorded_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_record_and_query_by_week() {
        let storage = InMemoryLeaderboard::default();
        storage.record(rated("p1", 1, 1, 3)).unwrap();
        storage.record(rated("p2", 1, 0, 2)).unwrap();
        storage.record(rated("p1", 2, 2, 1)).unwrap();

        assert_eq!(storage.match_count().unwrap(), 3);
        assert_eq!(storage.matches_for_week(1).unwrap().len(), 2);
        assert_eq!(storage.matches_for_week(2).unwrap().len(), 1);
        assert!(storage.matches_for_week(3).unwrap().is_empty());
    }

    #[test]
    fn test_player_history_is_ordered() {
        let storage = InMemoryLeaderboard::default();
        let newer = rated("p1", 2, 2, 1);
        let older = rated("p1", 1, 1, 10);
        storage.record(newer.clone()).unwrap();
        storage.record(older.clone()).unwrap();
        storage.record(rated("p2", 1, 0, 5)).unwrap();

        let history = storage.matches_for_player("p1").unwrap();
        assert_eq!(history, vec![older, newer]);
    }

    #[test]
    fn test_rerecording_a_match_replaces_it() {
        let storage = InMemoryLeaderboard::default();
        let first = rated("p1", 1, 0, 2);
        let mut corrected = rated("p1", 1, 2, 1);
        corrected.match_id = first.match_id;

        storage.record(first).unwrap();
        storage.record(corrected.clone()).unwrap();

        assert_eq!(storage.matches_for_week(1).unwrap(), vec![corrected]);
    }

    #[test]
    fn test_oldest_matches_evicted() {
        let storage = InMemoryLeaderboard::new(2);
        storage.record(rated("oldest", 1, 0, 30)).unwrap();
        storage.record(rated("middle", 1, 0, 20)).unwrap();
        storage.record(rated("newest", 1, 0, 10)).unwrap();

        let remaining: Vec<String> = storage
            .matches_for_week(1)
            .unwrap()
            .into_iter()
            .map(|m| m.player_id)
            .collect();
        assert_eq!(remaining, vec!["middle".to_string(), "newest".to_string()]);
    }

    #[test]
    fn test_clear_week() {
        let storage = InMemoryLeaderboard::default();
        storage.record(rated("p1", 1, 0, 3)).unwrap();
        storage.record(rated("p2", 1, 0, 2)).unwrap();
        storage.record(rated("p3", 2, 0, 1)).unwrap();

        assert_eq!(storage.clear_week(1).unwrap(), 2);
        assert_eq!(storage.match_count().unwrap(), 1);
        assert_eq!(storage.clear_week(1).unwrap(), 0);
    }

    #[test]
    fn test_report_breakdown_is_optional() {
        let match_ = rated("p1", 4, 1, 0);

        let short = match_.to_report(false);
        assert_eq!(short["player_id"], "p1");
        assert_eq!(short["position"], "attacker");
        assert!(short.get("breakdown").is_none());

        let full = match_.to_report(true);
        assert!(full["breakdown"]["goals"].is_number());
        assert_eq!(full["versatility_bonus"], 0.0);
    }
}
