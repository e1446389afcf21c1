//! Weekly leaderboard ranking

use crate::leaderboard::storage::RatedMatch;
use crate::types::{PlayerId, PositionCategory};
use crate::utils::{mean, round_to_tenth};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One player's line in a weekly leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the table
    pub rank: usize,
    pub player_id: PlayerId,
    /// Category of the player's most recent match that week
    pub position: PositionCategory,
    /// Mean match rating, rounded to one decimal place
    pub composite_score: f64,
    pub matches_played: usize,
    pub week: u32,
}

/// Rank the players of `week` by composite score.
///
/// Matches from other weeks are ignored. Ties on score go to the player with
/// more matches, then to the lower player id. At most `limit` entries are
/// returned.
pub fn build_leaderboard(week: u32, matches: &[RatedMatch], limit: usize) -> Vec<LeaderboardEntry> {
    let mut by_player: HashMap<&str, Vec<&RatedMatch>> = HashMap::new();
    for rated in matches.iter().filter(|m| m.week == week) {
        by_player.entry(rated.player_id.as_str()).or_default().push(rated);
    }

    let mut entries: Vec<LeaderboardEntry> = by_player
        .into_iter()
        .filter_map(|(player_id, player_matches)| {
            let latest = player_matches.iter().max_by_key(|m| m.recorded_at)?;
            let ratings: Vec<f64> = player_matches.iter().map(|m| m.rating()).collect();

            Some(LeaderboardEntry {
                rank: 0,
                player_id: player_id.to_string(),
                position: latest.position,
                composite_score: round_to_tenth(mean(&ratings)),
                matches_played: player_matches.len(),
                week,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.composite_score
            .total_cmp(&a.composite_score)
            .then_with(|| b.matches_played.cmp(&a.matches_played))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    entries.truncate(limit);

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    entries
}
