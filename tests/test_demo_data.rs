//! Tests for the locally generated timeline and community data

use cardiocheck::assessment::{community, timeline};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_timeline_has_six_months() {
    let mut rng = StdRng::seed_from_u64(7);
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let timeline = timeline::generate(today, &mut rng);

    assert_eq!(timeline.len(), 6);
    assert_eq!(timeline.labels.len(), 6);
    assert_eq!(timeline.risk_scores.len(), 6);
    assert_eq!(timeline.fitness_scores.len(), 6);
}

#[test]
fn test_timeline_ends_at_current_month() {
    let mut rng = StdRng::seed_from_u64(7);
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let timeline = timeline::generate(today, &mut rng);

    assert_eq!(
        timeline.labels.last().map(String::as_str),
        Some("Aug"),
        "The newest month should be last"
    );
}

#[test]
fn test_timeline_scores_stay_in_bounds() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let timeline = timeline::generate(today, &mut rng);

        for risk in &timeline.risk_scores {
            assert!(
                (20.0..=100.0).contains(risk),
                "Risk score {} out of bounds for seed {}",
                risk,
                seed
            );
        }
        for fitness in &timeline.fitness_scores {
            assert!(
                (0.0..=90.0).contains(fitness),
                "Fitness score {} out of bounds for seed {}",
                fitness,
                seed
            );
        }
    }
}

#[test]
fn test_timeline_trends_risk_down_fitness_up() {
    let mut rng = StdRng::seed_from_u64(42);
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    let timeline = timeline::generate(today, &mut rng);

    // Jitter is at most 5, the underlying slope is 8 per month over 5 steps
    assert!(
        timeline.risk_scores.first() > timeline.risk_scores.last(),
        "Risk should trend downward over the series"
    );
    assert!(
        timeline.fitness_scores.first() < timeline.fitness_scores.last(),
        "Fitness should trend upward over the series"
    );
}

#[test]
fn test_timeline_demo_series() {
    let demo = timeline::demo();
    assert_eq!(demo.len(), 6);
    assert_eq!(demo.labels[0], "Jan");
    assert_eq!(demo.risk_scores[0], 75.0);
    assert_eq!(demo.fitness_scores[5], 70.0);
}

#[test]
fn test_community_stats_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    let stats = community::generate(&mut rng);

    assert_eq!(stats.len(), 4);
    assert_eq!(stats[0].label, "Your Age Group Average Risk");
    assert_eq!(stats[3].label, "Exercise Habits Comparison");
    assert_eq!(stats[3].value, "Above Average");
    assert!(stats[3].better, "The exercise comparison is always favorable");
}

#[test]
fn test_community_demo_set() {
    let stats = community::demo();
    assert_eq!(stats.len(), 4);
    assert_eq!(stats[0].value, "45%");
    assert_eq!(stats[0].percentile, "25th percentile");
}

#[test]
fn test_community_stats_percentiles_formatted() {
    let mut rng = StdRng::seed_from_u64(11);
    for stat in community::generate(&mut rng) {
        assert!(
            stat.percentile.ends_with("th percentile"),
            "Unexpected percentile format: {}",
            stat.percentile
        );
    }
}
