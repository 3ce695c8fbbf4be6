//! Achievements, insights, and recommendations shown on the dashboard

use super::form::FormData;

/// An achievement badge with its unlock state
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// The six dashboard achievements. First-assessment is always unlocked on a
/// completed run; the exercise badge follows the activity answer.
pub fn achievements(form: &FormData) -> Vec<Achievement> {
    vec![
        Achievement {
            title: "First Assessment",
            description: "Completed your first health check",
            unlocked: true,
        },
        Achievement {
            title: "Health Warrior",
            description: "Maintained low risk for 3 months",
            unlocked: false,
        },
        Achievement {
            title: "Exercise Champion",
            description: "Met exercise goals for 4 weeks",
            unlocked: form.physically_active(),
        },
        Achievement {
            title: "Heart Hero",
            description: "Improved risk score by 20%",
            unlocked: false,
        },
        Achievement {
            title: "Consistency King",
            description: "Daily health tracking for 30 days",
            unlocked: false,
        },
        Achievement {
            title: "Lifestyle Legend",
            description: "Completed all health recommendations",
            unlocked: false,
        },
    ]
}

/// A short health insight shown with the results
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insight {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn insights() -> &'static [Insight] {
    &[
        Insight {
            title: "Stay Active",
            description: "Regular exercise reduces cardiovascular risk by 30-35%",
        },
        Insight {
            title: "Nutrition Matters",
            description: "A heart-healthy diet can improve your risk profile significantly",
        },
        Insight {
            title: "Quality Sleep",
            description: "7-9 hours of sleep supports optimal heart health",
        },
        Insight {
            title: "Regular Checkups",
            description: "Annual health screenings help catch issues early",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

/// A dashboard recommendation card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub title: &'static str,
    pub content: &'static str,
    pub priority: Priority,
}

pub fn recommendations() -> &'static [Recommendation] {
    &[
        Recommendation {
            title: "Increase Cardiovascular Exercise",
            content: "Aim for 150 minutes of moderate aerobic activity per week. \
                      Start with 20-minute walks and gradually increase intensity.",
            priority: Priority::High,
        },
        Recommendation {
            title: "Monitor Blood Pressure Daily",
            content: "Daily monitoring would be beneficial. Consider investing in \
                      a home blood pressure monitor.",
            priority: Priority::High,
        },
        Recommendation {
            title: "Optimize Sleep Schedule",
            content: "Quality sleep is crucial for heart health. Aim for 7-9 hours \
                      per night and maintain a consistent sleep schedule.",
            priority: Priority::Medium,
        },
        Recommendation {
            title: "Stress Management Techniques",
            content: "Consider incorporating meditation, yoga, or deep breathing \
                      exercises to manage stress levels.",
            priority: Priority::Medium,
        },
        Recommendation {
            title: "Nutritional Assessment",
            content: "A diet rich in fruits, vegetables, and whole grains can \
                      significantly improve cardiovascular health.",
            priority: Priority::Low,
        },
        Recommendation {
            title: "Regular Health Checkups",
            content: "Schedule regular checkups with your healthcare provider to \
                      monitor your progress.",
            priority: Priority::Medium,
        },
    ]
}
