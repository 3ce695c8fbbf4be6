//! Pure health-metric derivations
//!
//! These are the client-side fallback calculations: each one is a pure
//! function of the form answers, used whenever the backend metric endpoint is
//! unavailable. Band edges match the backend exactly so local and remote
//! results agree.

use serde::{Deserialize, Serialize};

use super::form::FormData;

/// Resting heart rate assumed when no measurement is available
pub const DEFAULT_RESTING_HR: u32 = 70;

/// Maximum heart rate by the age-predicted formula (220 - age)
pub fn max_heart_rate(age: u32) -> u32 {
    220u32.saturating_sub(age)
}

/// Heart-rate training zone derived from percentage of maximum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    pub zone: String,
    pub percentage: f64,
    pub current_hr: u32,
    pub max_hr: u32,
}

pub fn heart_rate_zone(age: u32, current_hr: u32) -> HeartRateZone {
    let max_hr = max_heart_rate(age);
    let percentage = (current_hr as f64 / max_hr as f64) * 100.0;

    let zone = if percentage < 50.0 {
        "Resting"
    } else if percentage < 60.0 {
        "Fat Burn"
    } else if percentage < 70.0 {
        "Aerobic"
    } else if percentage < 85.0 {
        "Anaerobic"
    } else {
        "Red Line"
    };

    HeartRateZone {
        zone: zone.to_string(),
        percentage: percentage.min(100.0),
        current_hr,
        max_hr,
    }
}

/// Body mass index from imperial height and weight
pub fn bmi(height_feet: u32, height_inches: u32, weight_lb: u32) -> f64 {
    let height_total_inches = (height_feet * 12 + height_inches) as f64;
    let height_m = height_total_inches * 0.0254;
    let weight_kg = weight_lb as f64 * 0.453592;
    weight_kg / (height_m * height_m)
}

/// BMI reading with its display bracket and health percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub category: String,
    pub percentage: f64,
    pub value: f64,
}

/// Bracket a BMI value. Brackets partition the number line at 18.5 / 25 / 30
/// with no overlap or gap.
pub fn bmi_category(bmi: f64) -> BmiReading {
    let (category, percentage) = if bmi < 18.5 {
        ("Underweight", 40.0)
    } else if bmi < 25.0 {
        ("Normal Range", 85.0)
    } else if bmi < 30.0 {
        ("Overweight", 60.0)
    } else {
        ("Obese", 30.0)
    };

    BmiReading {
        category: category.to_string(),
        percentage,
        value: bmi,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CholesterolReading {
    pub level: String,
    pub percentage: f64,
}

pub fn cholesterol_level(high_cholesterol: bool) -> CholesterolReading {
    let (level, percentage) = if high_cholesterol {
        ("High Risk", 30.0)
    } else {
        ("Healthy Level", 80.0)
    };
    CholesterolReading {
        level: level.to_string(),
        percentage,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReading {
    pub level: String,
    pub percentage: f64,
}

/// Cardiovascular fitness estimate: activity sets the base, youth adds
/// potential, capped at 95.
pub fn fitness_level(age: u32, physically_active: bool) -> FitnessReading {
    let base_fitness = if physically_active { 60.0 } else { 30.0 };
    let age_factor = ((50.0 - age as f64) / 50.0 * 20.0).max(0.0);
    let total_fitness = (base_fitness + age_factor).min(95.0);

    let level = if total_fitness >= 80.0 {
        "Excellent"
    } else if total_fitness >= 65.0 {
        "Good"
    } else if total_fitness >= 50.0 {
        "Fair"
    } else {
        "Poor"
    };

    FitnessReading {
        level: level.to_string(),
        percentage: total_fitness,
    }
}

/// The four dashboard metrics as one bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub heart_rate: HeartRateZone,
    pub bmi: BmiReading,
    pub cholesterol: CholesterolReading,
    pub fitness: FitnessReading,
}

/// Compute all four metrics locally from the form answers
pub fn compute_metrics(form: &FormData) -> HealthMetrics {
    let age = form.age();
    let body_mass = bmi(form.height_feet(), form.height_inches(), form.weight_lb());

    HealthMetrics {
        heart_rate: heart_rate_zone(age, DEFAULT_RESTING_HR),
        bmi: bmi_category(body_mass),
        cholesterol: cholesterol_level(form.high_chol()),
        fitness: fitness_level(age, form.physically_active()),
    }
}
