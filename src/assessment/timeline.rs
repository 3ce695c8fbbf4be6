//! Six-month health-journey timeline data
//!
//! Generated locally when the timeline endpoint is unavailable. The series
//! trends the way the backend simulates it: risk falling, fitness rising,
//! with a little jitter. The RNG is injected so tests stay deterministic.

use chrono::{Datelike, Duration, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Timeline chart data: one label and two scores per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub labels: Vec<String>,
    pub risk_scores: Vec<f64>,
    pub fitness_scores: Vec<f64>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

const MONTHS: usize = 6;

fn month_abbrev(date: NaiveDate) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES[date.month0() as usize].to_string()
}

/// Generate six months of timeline data ending at `today`
pub fn generate<R: Rng>(today: NaiveDate, rng: &mut R) -> Timeline {
    let mut timeline = Timeline {
        labels: Vec::with_capacity(MONTHS),
        risk_scores: Vec::with_capacity(MONTHS),
        fitness_scores: Vec::with_capacity(MONTHS),
    };

    // Oldest month first; risk improves and fitness builds toward today
    for i in 0..MONTHS {
        let months_back = (MONTHS - 1 - i) as i64;
        let date = today - Duration::days(30 * months_back);
        let jitter_risk = rng.gen_range(-5..=5) as f64;
        let jitter_fit = rng.gen_range(-5..=5) as f64;

        timeline.labels.push(month_abbrev(date));
        timeline
            .risk_scores
            .push((80.0 - i as f64 * 8.0 + jitter_risk).max(20.0));
        timeline
            .fitness_scores
            .push((40.0 + i as f64 * 8.0 + jitter_fit).min(90.0));
    }

    timeline
}

/// Generate using the system date and thread RNG
pub fn generate_now() -> Timeline {
    generate(Local::now().date_naive(), &mut rand::thread_rng())
}

/// Static demo series used when even local generation is not wanted
pub fn demo() -> Timeline {
    Timeline {
        labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        risk_scores: vec![75.0, 70.0, 65.0, 60.0, 55.0, 45.0],
        fitness_scores: vec![40.0, 45.0, 50.0, 55.0, 60.0, 70.0],
    }
}
