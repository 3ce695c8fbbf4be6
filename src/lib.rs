//! CardioCheck - terminal heart-health self-assessment
//!
//! A guided four-card assessment wizard with validation gating and animated
//! card transitions, followed by a results screen and a gamified analytics
//! dashboard. Metrics, risk factors, and the prediction come from the
//! CardioCheck backend when it is reachable and from equivalent local
//! calculations otherwise.

pub mod api;
pub mod assessment;
pub mod cli;
pub mod report;
pub mod utils;
