//! Assessment domain: form model, metric derivations, risk scoring, and
//! demo-data generators

pub mod badges;
pub mod community;
pub mod form;
pub mod metrics;
pub mod risk;
pub mod timeline;

pub use form::{cards, CardSpec, FieldId, FieldKind, FieldSpec, FormData};
pub use metrics::{compute_metrics, HealthMetrics};
pub use risk::{fallback_prediction, health_level, health_score, risk_factors, Prediction, RiskFactor, RiskLevel};
