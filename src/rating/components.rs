//! Raw component scoring
//!
//! Every component except discipline is capped before weighting so that no
//! single statistic can dominate a rating. Discipline is left uncapped.

use crate::rating::weights::ComponentKind;
use crate::types::MatchStatRecord;

pub const GOALS_CAP: f64 = 2.0;
pub const ASSISTS_CAP: f64 = 1.5;
pub const PASSES_CAP: f64 = 2.5;
pub const TACKLES_CAP: f64 = 2.0;
pub const INTERCEPTIONS_CAP: f64 = 1.5;
pub const CLEARANCES_CAP: f64 = 1.5;
pub const GK_SAVES_CAP: f64 = 2.5;
pub const GOALS_CONCEDED_CAP: f64 = 2.5;
pub const DISTRIBUTION_CAP: f64 = 1.5;
pub const SHOTS_ON_TARGET_CAP: f64 = 2.0;

/// Unweighted score of one component for a match
pub fn raw_score(component: ComponentKind, stats: &MatchStatRecord) -> f64 {
    match component {
        ComponentKind::Goals => (f64::from(stats.goals) * 0.8).min(GOALS_CAP),
        ComponentKind::Assists => (f64::from(stats.assists) * 0.6).min(ASSISTS_CAP),
        ComponentKind::Passes => passing_score(stats),
        ComponentKind::Tackles => (f64::from(stats.tackles) * 0.3).min(TACKLES_CAP),
        ComponentKind::Interceptions => {
            (f64::from(stats.interceptions) * 0.25).min(INTERCEPTIONS_CAP)
        }
        ComponentKind::Clearances => (f64::from(stats.clearances) * 0.2).min(CLEARANCES_CAP),
        ComponentKind::GkSaves => (f64::from(stats.gk_saves) * 0.15).min(GK_SAVES_CAP),
        ComponentKind::GoalsConceded => {
            (f64::from(stats.goals_conceded) * 0.5).min(GOALS_CONCEDED_CAP)
        }
        ComponentKind::Distribution => {
            (f64::from(stats.successful_passes()) * 0.05).min(DISTRIBUTION_CAP)
        }
        ComponentKind::ShotsOnTarget => shooting_score(stats),
        ComponentKind::Discipline => discipline_penalty(stats),
    }
}

/// Successful passes as a percentage of attempts, 0 when nothing was attempted
pub fn pass_accuracy_pct(stats: &MatchStatRecord) -> f64 {
    let successful = f64::from(stats.successful_passes());
    let attempted = successful + f64::from(stats.unsuccessful_passes());
    successful / attempted.max(1.0) * 100.0
}

/// Shots on target as a percentage of all shots, 0 when no shots were taken
pub fn shot_accuracy_pct(stats: &MatchStatRecord) -> f64 {
    let total = stats.total_shots();
    if total > 0 {
        f64::from(stats.shots_on) / f64::from(total).max(1.0) * 100.0
    } else {
        0.0
    }
}

fn passing_score(stats: &MatchStatRecord) -> f64 {
    let successful = f64::from(stats.successful_passes());
    let raw = pass_accuracy_pct(stats) / 100.0 * 2.0 + successful / 50.0;
    raw.min(PASSES_CAP)
}

fn shooting_score(stats: &MatchStatRecord) -> f64 {
    let raw = f64::from(stats.shots_on) * 0.3 + shot_accuracy_pct(stats) / 100.0;
    raw.min(SHOTS_ON_TARGET_CAP)
}

/// Uncapped misconduct score; weighted negatively by every category
fn discipline_penalty(stats: &MatchStatRecord) -> f64 {
    f64::from(stats.yellow_cards) * 0.3
        + f64::from(stats.red_cards) * 1.5
        + f64::from(stats.fouls) * 0.1
}
