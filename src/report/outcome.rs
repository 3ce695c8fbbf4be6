//! Assembly of everything a completed assessment displays

use crate::api::HealthDataSource;
use crate::assessment::badges::{self, Achievement};
use crate::assessment::community::CommunityStat;
use crate::assessment::risk::{HealthLevel, Prediction, RiskFactor};
use crate::assessment::timeline::Timeline;
use crate::assessment::{health_level, health_score, FormData, HealthMetrics};

/// Everything the results screen and dashboard need, gathered in one place.
/// Each piece comes from the backend when reachable and from the local
/// calculation otherwise; `notices` records which fell back.
#[derive(Debug, Clone)]
pub struct AssessmentOutcome {
    pub form: FormData,
    pub metrics: HealthMetrics,
    pub factors: Vec<RiskFactor>,
    pub prediction: Prediction,
    pub timeline: Timeline,
    pub community: Vec<CommunityStat>,
    pub achievements: Vec<Achievement>,
    pub notices: Vec<String>,
}

impl AssessmentOutcome {
    /// Run the full submission round-trip for a validated form
    pub fn collect(form: FormData, source: &mut HealthDataSource) -> Self {
        let (metrics, _) = source.metrics(&form);
        let (factors, _) = source.risk_factors(&form);
        let (prediction, _) = source.predict(&form);
        let (timeline, _) = source.timeline();
        let (community, _) = source.community_stats();
        let achievements = badges::achievements(&form);
        let notices = source.take_notices();

        Self {
            form,
            metrics,
            factors,
            prediction,
            timeline,
            community,
            achievements,
            notices,
        }
    }

    /// Gamified health score derived from the risk percentage
    pub fn health_score(&self) -> u32 {
        health_score(self.prediction.risk_percentage)
    }

    pub fn health_level(&self) -> HealthLevel {
        health_level(self.health_score())
    }
}
