//! Blocking HTTP client for the CardioCheck backend
//!
//! Every endpoint is optional: callers go through [`HealthDataSource`], which
//! substitutes the local calculation (or demo data) on any failure and keeps
//! a notice so the UI can surface that it fell back.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::assessment::community::{self, CommunityStat};
use crate::assessment::risk::{self, Prediction, RiskFactor};
use crate::assessment::timeline::{self, Timeline};
use crate::assessment::{compute_metrics, FormData, HealthMetrics};

use super::types::{CommunityStatsResponse, PredictionResponse, RiskFactorsResponse};

/// Errors from a backend call. None of these are fatal to the UI; they only
/// decide whether a fallback value is substituted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin typed wrapper over the five backend endpoints
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn decode<T: DeserializeOwned>(
        endpoint: &'static str,
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        let body = response
            .text()
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        Self::decode(endpoint, response)
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        Self::decode(endpoint, response)
    }

    pub fn health_metrics(&self, form: &FormData) -> Result<HealthMetrics, ApiError> {
        self.post_json("/api/health-metrics", form.as_map())
    }

    pub fn risk_factors(&self, form: &FormData) -> Result<Vec<RiskFactor>, ApiError> {
        let response: RiskFactorsResponse = self.post_json("/api/risk-factors", form.as_map())?;
        Ok(response.risk_factors)
    }

    pub fn community_stats(&self) -> Result<Vec<CommunityStat>, ApiError> {
        let response: CommunityStatsResponse = self.get_json("/api/community-stats")?;
        Ok(response.community_stats)
    }

    pub fn health_timeline(&self) -> Result<Timeline, ApiError> {
        self.get_json("/api/health-timeline")
    }

    pub fn predict(&self, form: &FormData) -> Result<Prediction, ApiError> {
        let response: PredictionResponse = self.post_json("/predict", form.as_map())?;
        Ok(Prediction::from_high_risk(response.prediction == 1))
    }
}

/// Where a displayed value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Remote,
    Fallback,
}

/// Backend access with graceful degradation
///
/// `offline()` skips the network entirely; otherwise each accessor tries the
/// backend once and falls back to the local calculation, recording a one-line
/// notice per failure for the UI to show.
pub struct HealthDataSource {
    client: Option<ApiClient>,
    notices: Vec<String>,
}

impl HealthDataSource {
    pub fn offline() -> Self {
        Self {
            client: None,
            notices: Vec::new(),
        }
    }

    pub fn connected(client: ApiClient) -> Self {
        Self {
            client: Some(client),
            notices: Vec::new(),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }

    /// Drain the accumulated fallback notices
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn fetch<T>(
        &mut self,
        what: &str,
        remote: impl FnOnce(&ApiClient) -> Result<T, ApiError>,
        local: impl FnOnce() -> T,
    ) -> (T, DataOrigin) {
        if let Some(client) = &self.client {
            match remote(client) {
                Ok(value) => return (value, DataOrigin::Remote),
                Err(err) => {
                    self.notices
                        .push(format!("{} unavailable ({}); using local values", what, err));
                }
            }
        }
        (local(), DataOrigin::Fallback)
    }

    pub fn metrics(&mut self, form: &FormData) -> (HealthMetrics, DataOrigin) {
        self.fetch(
            "health metrics",
            |c| c.health_metrics(form),
            || compute_metrics(form),
        )
    }

    pub fn risk_factors(&mut self, form: &FormData) -> (Vec<RiskFactor>, DataOrigin) {
        self.fetch(
            "risk factors",
            |c| c.risk_factors(form),
            || risk::risk_factors(form),
        )
    }

    pub fn community_stats(&mut self) -> (Vec<CommunityStat>, DataOrigin) {
        self.fetch(
            "community stats",
            |c| c.community_stats(),
            || community::generate(&mut rand::thread_rng()),
        )
    }

    pub fn timeline(&mut self) -> (Timeline, DataOrigin) {
        self.fetch(
            "health timeline",
            |c| c.health_timeline(),
            timeline::generate_now,
        )
    }

    pub fn predict(&mut self, form: &FormData) -> (Prediction, DataOrigin) {
        self.fetch(
            "prediction",
            |c| c.predict(form),
            || risk::fallback_prediction(&risk::risk_factors(form)),
        )
    }
}
