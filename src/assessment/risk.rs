//! Risk-factor derivation, risk banding, and the gamified health score

use std::fmt;

use serde::{Deserialize, Serialize};

use super::form::FormData;
use super::metrics;

/// Qualitative risk level assigned to a single factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// A named health attribute with its value and assigned risk level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    #[serde(rename = "risk")]
    pub level: RiskLevel,
    pub value: f64,
}

impl RiskFactor {
    fn new(name: &str, level: RiskLevel, value: f64) -> Self {
        Self {
            name: name.to_string(),
            level,
            value,
        }
    }
}

fn binary_level(flagged: bool) -> RiskLevel {
    if flagged {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// Derive the eight risk factors from the form answers
pub fn risk_factors(form: &FormData) -> Vec<RiskFactor> {
    let mut factors = Vec::with_capacity(8);

    let age = form.age();
    let age_level = if age < 45 {
        RiskLevel::Low
    } else if age < 65 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    factors.push(RiskFactor::new("Age", age_level, age as f64));

    factors.push(RiskFactor::new(
        "Blood Pressure",
        binary_level(form.high_bp()),
        form.high_bp() as u8 as f64,
    ));
    factors.push(RiskFactor::new(
        "Cholesterol",
        binary_level(form.high_chol()),
        form.high_chol() as u8 as f64,
    ));
    // Exercise is inverted: being active is the low-risk state
    factors.push(RiskFactor::new(
        "Exercise",
        binary_level(!form.physically_active()),
        form.physically_active() as u8 as f64,
    ));
    factors.push(RiskFactor::new(
        "Smoking",
        binary_level(form.smoker()),
        form.smoker() as u8 as f64,
    ));
    factors.push(RiskFactor::new(
        "Diabetes",
        binary_level(form.diabetes()),
        form.diabetes() as u8 as f64,
    ));

    let bmi = metrics::bmi(form.height_feet(), form.height_inches(), form.weight_lb());
    let bmi_level = if bmi < 25.0 {
        RiskLevel::Low
    } else if bmi < 30.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    factors.push(RiskFactor::new("BMI", bmi_level, bmi));

    let gen = form.general_health();
    let gen_level = if gen <= 2 {
        RiskLevel::Low
    } else if gen == 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    factors.push(RiskFactor::new("General Health", gen_level, gen as f64));

    factors
}

/// Display band for an overall risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
        }
    }
}

/// Band a risk percentage: <=30 low, <=70 moderate, else high
pub fn risk_band(risk_percentage: f64) -> RiskBand {
    if risk_percentage <= 30.0 {
        RiskBand::Low
    } else if risk_percentage <= 70.0 {
        RiskBand::Moderate
    } else {
        RiskBand::High
    }
}

/// Outcome of a completed assessment
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub high_risk: bool,
    /// Display percentage on the risk meter
    pub risk_percentage: f64,
}

impl Prediction {
    pub fn from_high_risk(high_risk: bool) -> Self {
        Self {
            high_risk,
            risk_percentage: if high_risk { 75.0 } else { 25.0 },
        }
    }

    pub fn band(&self) -> RiskBand {
        risk_band(self.risk_percentage)
    }

    pub fn headline(&self) -> &'static str {
        if self.high_risk {
            "High Risk of Heart Disease"
        } else {
            "Low Risk of Heart Disease"
        }
    }

    pub fn analysis(&self) -> &'static str {
        if self.high_risk {
            "Based on your assessment, you may have elevated cardiovascular \
             risk factors. Consider consulting with a healthcare provider for \
             personalized recommendations."
        } else {
            "Great job! Your assessment indicates favorable cardiovascular \
             health indicators. Continue your healthy lifestyle habits."
        }
    }
}

/// Local prediction when the model endpoint is unreachable: high risk once
/// three or more factors sit at the high level.
pub fn fallback_prediction(factors: &[RiskFactor]) -> Prediction {
    let high_count = factors
        .iter()
        .filter(|f| f.level == RiskLevel::High)
        .count();
    Prediction::from_high_risk(high_count >= 3)
}

/// Gamified health score: inverse of risk with a floor of 20
pub fn health_score(risk_percentage: f64) -> u32 {
    (100.0 - risk_percentage).max(20.0).round() as u32
}

/// Letter grade and title for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthLevel {
    pub grade: &'static str,
    pub title: &'static str,
}

pub fn health_level(score: u32) -> HealthLevel {
    let (grade, title) = if score >= 90 {
        ("A+", "Heart Champion")
    } else if score >= 80 {
        ("A", "Health Hero")
    } else if score >= 70 {
        ("B+", "Wellness Warrior")
    } else if score >= 60 {
        ("B", "Health Seeker")
    } else {
        ("C", "Starting Journey")
    };
    HealthLevel { grade, title }
}
