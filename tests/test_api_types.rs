//! Tests for decoding the backend JSON payloads

use cardiocheck::api::types::{CommunityStatsResponse, PredictionResponse, RiskFactorsResponse};
use cardiocheck::assessment::{FormData, HealthMetrics, RiskLevel};
use cardiocheck::assessment::timeline::Timeline;

#[test]
fn test_decode_health_metrics_payload() {
    let body = r#"{
        "heart_rate": {"zone": "Resting", "percentage": 38.9, "current_hr": 70, "max_hr": 180},
        "bmi": {"category": "Normal Range", "percentage": 85.0, "value": 22.8},
        "cholesterol": {"level": "Healthy Level", "percentage": 80.0},
        "fitness": {"level": "Good", "percentage": 70.0}
    }"#;

    let metrics: HealthMetrics = serde_json::from_str(body).expect("metrics payload should decode");
    assert_eq!(metrics.heart_rate.zone, "Resting");
    assert_eq!(metrics.heart_rate.max_hr, 180);
    assert_eq!(metrics.bmi.category, "Normal Range");
    assert_eq!(metrics.fitness.percentage, 70.0);
}

#[test]
fn test_decode_risk_factors_payload() {
    let body = r#"{
        "risk_factors": [
            {"name": "Age", "risk": "medium", "value": 50.0},
            {"name": "Smoking", "risk": "high", "value": 1.0},
            {"name": "Exercise", "risk": "low", "value": 1.0}
        ]
    }"#;

    let response: RiskFactorsResponse =
        serde_json::from_str(body).expect("risk factors payload should decode");
    assert_eq!(response.risk_factors.len(), 3);
    assert_eq!(response.risk_factors[0].level, RiskLevel::Medium);
    assert_eq!(response.risk_factors[1].level, RiskLevel::High);
    assert_eq!(response.risk_factors[2].name, "Exercise");
}

#[test]
fn test_decode_community_stats_payload() {
    let body = r#"{
        "community_stats": [
            {"label": "Your Age Group Average Risk", "value": "45%",
             "percentile": "25th percentile", "better": true}
        ]
    }"#;

    let response: CommunityStatsResponse =
        serde_json::from_str(body).expect("community stats payload should decode");
    assert_eq!(response.community_stats.len(), 1);
    assert!(response.community_stats[0].better);
}

#[test]
fn test_decode_timeline_payload() {
    let body = r#"{
        "labels": ["Mar", "Apr", "May", "Jun", "Jul", "Aug"],
        "risk_scores": [78.0, 71.0, 66.0, 57.0, 49.0, 42.0],
        "fitness_scores": [41.0, 47.0, 55.0, 62.0, 68.0, 75.0]
    }"#;

    let timeline: Timeline = serde_json::from_str(body).expect("timeline payload should decode");
    assert_eq!(timeline.len(), 6);
    assert_eq!(timeline.labels[5], "Aug");
}

#[test]
fn test_decode_prediction_payload() {
    let high: PredictionResponse = serde_json::from_str(r#"{"prediction": 1}"#).unwrap();
    assert_eq!(high.prediction, 1);

    let low: PredictionResponse = serde_json::from_str(r#"{"prediction": 0}"#).unwrap();
    assert_eq!(low.prediction, 0);
}

#[test]
fn test_form_serializes_as_flat_map() {
    let mut form = FormData::new();
    form.set(cardiocheck::assessment::FieldId::Age, "45");
    form.set(cardiocheck::assessment::FieldId::HighBp, "1");

    let json = serde_json::to_value(&form).expect("form should serialize");
    assert_eq!(json["age"], "45");
    assert_eq!(json["highbp"], "1");
}

#[test]
fn test_form_roundtrips_from_answers_file() {
    let body = r#"{"age": "52", "highchol": "1", "physactivity": "0"}"#;
    let form: FormData = serde_json::from_str(body).expect("answers file should decode");

    assert_eq!(form.age(), 52);
    assert!(form.high_chol());
    assert!(!form.physically_active());
}
