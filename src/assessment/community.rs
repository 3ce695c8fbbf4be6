//! Community comparison statistics
//!
//! The backend simulates these; locally we do the same with an injected RNG,
//! and keep a fixed demo set for fully offline display.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One community comparison entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityStat {
    pub label: String,
    pub value: String,
    pub percentile: String,
    pub better: bool,
}

impl CommunityStat {
    fn new(label: &str, value: String, percentile: String, better: bool) -> Self {
        Self {
            label: label.to_string(),
            value,
            percentile,
            better,
        }
    }
}

/// Generate the four comparison entries the dashboard shows
pub fn generate<R: Rng>(rng: &mut R) -> Vec<CommunityStat> {
    vec![
        CommunityStat::new(
            "Your Age Group Average Risk",
            format!("{}%", rng.gen_range(35..=55)),
            format!("{}th percentile", rng.gen_range(15..=85)),
            rng.gen_bool(0.5),
        ),
        CommunityStat::new(
            "Similar BMI Range",
            format!("{}%", rng.gen_range(40..=60)),
            format!("{}th percentile", rng.gen_range(20..=80)),
            rng.gen_bool(0.5),
        ),
        CommunityStat::new(
            "Regional Health Score",
            format!("{}%", rng.gen_range(30..=50)),
            format!("{}th percentile", rng.gen_range(25..=75)),
            rng.gen_bool(0.5),
        ),
        CommunityStat::new(
            "Exercise Habits Comparison",
            "Above Average".to_string(),
            format!("{}th percentile", rng.gen_range(60..=90)),
            true,
        ),
    ]
}

/// Fixed demo entries
pub fn demo() -> Vec<CommunityStat> {
    vec![
        CommunityStat::new(
            "Your Age Group Average Risk",
            "45%".to_string(),
            "25th percentile".to_string(),
            true,
        ),
        CommunityStat::new(
            "Similar BMI Range",
            "52%".to_string(),
            "40th percentile".to_string(),
            false,
        ),
        CommunityStat::new(
            "Regional Health Score",
            "38%".to_string(),
            "35th percentile".to_string(),
            true,
        ),
        CommunityStat::new(
            "Fitness Level Comparison",
            "Above Average".to_string(),
            "65th percentile".to_string(),
            true,
        ),
    ]
}
