//! Integration tests for the pitch-rating service
//!
//! These tests validate the system working together, including:
//! - Rating of realistic match submissions per position
//! - Validation policies for malformed counters
//! - Weekly leaderboards across several submissions
//! - Metrics export

mod fixtures;

use pitch_rating::config::RatingSettings;
use pitch_rating::leaderboard::{InMemoryLeaderboard, LeaderboardStorage, RatingService};
use pitch_rating::metrics::MetricsCollector;
use pitch_rating::rating::{
    calculate_rating, ComponentKind, RatingCalculator, RatingEngine, ValidationPolicy,
};
use pitch_rating::types::{MatchStatRecord, PositionCategory, RawMatchStats};
use pitch_rating::RatingError;
use std::sync::Arc;
use std::thread;

use fixtures::{defender_stats, striker_stats, submission, FixedRatingCalculator};

/// Integration test setup that creates a complete system
fn create_test_system(
    settings: RatingSettings,
) -> (RatingService, Arc<InMemoryLeaderboard>, Arc<MetricsCollector>) {
    let storage = Arc::new(InMemoryLeaderboard::new(settings.max_stored_matches));
    let metrics = Arc::new(MetricsCollector::new().unwrap());
    let service = RatingService::new(Arc::new(RatingEngine::standard()), storage.clone(), settings)
        .with_metrics(metrics.clone());

    (service, storage, metrics)
}

#[test]
fn test_goalkeeper_saves_scenario() {
    let stats = MatchStatRecord {
        gk_saves: 5,
        ..Default::default()
    };

    let result = calculate_rating(&stats, PositionCategory::Goalkeeper);

    assert_eq!(result.rating, 6.2);
}

#[test]
fn test_attacker_scoring_scenario() {
    let stats = MatchStatRecord {
        goals: 3,
        shots_on: 4,
        shots_off: 2,
        ..Default::default()
    };

    let result = calculate_rating(&stats, PositionCategory::Attacker);

    assert_eq!(result.rating, 7.1);
}

#[test]
fn test_red_card_penalty_scenario() {
    let stats = MatchStatRecord {
        red_cards: 10,
        ..Default::default()
    };

    for position in PositionCategory::ALL {
        assert_eq!(calculate_rating(&stats, position).rating, 4.5);
    }
}

#[test]
fn test_rating_floor_scenario() {
    let stats = MatchStatRecord {
        red_cards: 50,
        ..Default::default()
    };

    assert_eq!(
        calculate_rating(&stats, PositionCategory::Midfielder).rating,
        1.0
    );
}

#[test]
fn test_complete_submission_workflow() {
    let (service, storage, metrics) = create_test_system(RatingSettings::default());

    // Step 1: a striker and a centre back submit their match
    let striker = service
        .submit(submission("striker_9", 3, "Attacker", striker_stats()))
        .unwrap();
    let defender = service
        .submit(submission("centre_back_4", 3, "defender", defender_stats()))
        .unwrap();

    assert_eq!(striker.rating(), 7.4);
    assert_eq!(defender.rating(), 7.1);
    assert_eq!(storage.match_count().unwrap(), 2);

    // Step 2: the breakdown only holds components of the player's category
    assert!(striker.result.contribution(ComponentKind::ShotsOnTarget).is_some());
    assert!(striker.result.contribution(ComponentKind::Tackles).is_none());
    assert!(defender.result.contribution(ComponentKind::Tackles).is_some());
    assert!(defender.result.contribution(ComponentKind::ShotsOnTarget).is_none());

    // Step 3: the weekly leaderboard ranks them
    let board = service.leaderboard(3).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].player_id, "striker_9");
    assert_eq!(board[0].position, PositionCategory::Attacker);
    assert_eq!(board[1].player_id, "centre_back_4");
    assert_eq!(board[1].rank, 2);

    // Step 4: metrics saw both ratings
    let text = metrics.export_text().unwrap();
    assert!(text.contains("pitch_rating_ratings_total{position=\"attacker\"} 1"));
    assert!(text.contains("pitch_rating_ratings_total{position=\"defender\"} 1"));
}

#[test]
fn test_unknown_category_rated_as_midfielder() {
    let (service, _, _) = create_test_system(RatingSettings::default());

    let unknown = service
        .submit(submission("p1", 1, "unknown_role", defender_stats()))
        .unwrap();
    let explicit = service
        .submit(submission("p2", 1, "midfielder", defender_stats()))
        .unwrap();

    assert_eq!(unknown.position, PositionCategory::Midfielder);
    assert_eq!(unknown.result, explicit.result);
}

#[test]
fn test_reject_policy_stops_malformed_submissions() {
    let (service, storage, metrics) = create_test_system(RatingSettings::default());
    let mut stats = striker_stats();
    stats.minutes_played = 130;

    let err = service
        .submit(submission("p1", 1, "attacker", stats))
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<RatingError>(),
        Some(&RatingError::InvalidStatistic {
            field: "minutes_played",
            value: 130
        })
    );
    assert_eq!(storage.match_count().unwrap(), 0);
    assert_eq!(metrics.rating().ratings_total.with_label_values(&["attacker"]).get(), 0);
}

#[test]
fn test_clamp_policy_accepts_malformed_submissions() {
    let settings = RatingSettings {
        validation_policy: ValidationPolicy::Clamp,
        ..Default::default()
    };
    let (service, _, _) = create_test_system(settings);
    let mut stats = striker_stats();
    stats.yellow_cards = -2;
    stats.minutes_played = 130;

    let clamped = service
        .submit(submission("p1", 1, "attacker", stats))
        .unwrap();
    let clean = service
        .submit(submission("p2", 1, "attacker", striker_stats()))
        .unwrap();

    assert_eq!(clamped.result, clean.result);
}

#[test]
fn test_service_uses_injected_calculator() {
    let calculator = Arc::new(FixedRatingCalculator::new(8.5));
    let service = RatingService::new(
        calculator.clone(),
        Arc::new(InMemoryLeaderboard::default()),
        RatingSettings::default(),
    );

    let rated = service
        .submit(submission("p1", 2, "GOALKEEPER", RawMatchStats::default()))
        .unwrap();

    assert_eq!(rated.rating(), 8.5);
    let calls = calculator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, PositionCategory::Goalkeeper);
    assert_eq!(calculator.config()["type"], "fixed");
}

#[test]
fn test_leaderboard_averages_several_matches() {
    let (service, _, _) = create_test_system(RatingSettings::default());

    // Two matches at 6.0 and 6.6 average to 6.3
    service
        .submit(submission("p1", 5, "attacker", RawMatchStats::default()))
        .unwrap();
    service
        .submit(submission(
            "p1",
            5,
            "attacker",
            RawMatchStats {
                goals: 2,
                ..Default::default()
            },
        ))
        .unwrap();
    // One match at 6.3 as well, but fewer matches
    service
        .submit(submission(
            "p2",
            5,
            "attacker",
            RawMatchStats {
                goals: 1,
                ..Default::default()
            },
        ))
        .unwrap();

    let board = service.leaderboard(5).unwrap();

    assert_eq!(board[0].player_id, "p1");
    assert_eq!(board[0].composite_score, 6.3);
    assert_eq!(board[0].matches_played, 2);
    assert_eq!(board[1].player_id, "p2");
    assert_eq!(board[1].composite_score, 6.3);
    assert_eq!(service.player_history("p1").unwrap().len(), 2);
}

#[test]
fn test_concurrent_rating() {
    let engine = Arc::new(RatingEngine::standard());
    let stats = MatchStatRecord {
        goals: 1,
        tackles: 4,
        short_passes_successful: 30,
        short_passes_unsuccessful: 6,
        ..Default::default()
    };
    let expected = engine.calculate_rating(&stats, PositionCategory::Defender);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            let stats = stats.clone();
            thread::spawn(move || {
                (0..100)
                    .map(|_| engine.calculate_rating(&stats, PositionCategory::Defender))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn test_concurrent_submissions() {
    let (service, storage, _) = create_test_system(RatingSettings::default());
    let service = Arc::new(service);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let service = service.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    let player = format!("player_{}_{}", t, i);
                    service
                        .submit(submission(&player, 1, "midfielder", defender_stats()))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(storage.match_count().unwrap(), 100);
    assert_eq!(service.leaderboard(1).unwrap().len(), 20);
}
