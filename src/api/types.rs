//! Wire shapes for the backend endpoints
//!
//! The metric, risk-factor, community, and timeline payloads deserialize
//! straight into the assessment types, which use the same field names as the
//! backend JSON. Only the envelope wrappers live here.

use serde::{Deserialize, Serialize};

use crate::assessment::community::CommunityStat;
use crate::assessment::risk::RiskFactor;

/// Envelope for `POST /api/risk-factors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactorsResponse {
    pub risk_factors: Vec<RiskFactor>,
}

/// Envelope for `GET /api/community-stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityStatsResponse {
    pub community_stats: Vec<CommunityStat>,
}

/// Response for the prediction endpoint: 1 = high risk, 0 = low risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: u8,
}
