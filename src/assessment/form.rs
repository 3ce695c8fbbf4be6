//! Assessment form model: cards, fields, and accumulated answers
//!
//! The assessment is a fixed linear sequence of four cards, each owning a set
//! of input fields. A field is valid when it holds a non-empty value at
//! validation time; typed accessors parse the raw strings on demand for the
//! metric calculations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier for every input field collected by the assessment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Age,
    Sex,
    HeightFeet,
    HeightInches,
    Weight,
    HighBp,
    HighChol,
    CholCheck,
    Diabetes,
    Smoker,
    PhysActivity,
    Fruits,
    Veggies,
    HvyAlcohol,
    GenHealth,
    MentHealth,
    PhysHealth,
    DiffWalk,
    AnyHealthcare,
    NoDocBcCost,
    Education,
    Income,
}

impl FieldId {
    /// Stable string key used for serialization and API payloads
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Age => "age",
            FieldId::Sex => "sex",
            FieldId::HeightFeet => "height_feet",
            FieldId::HeightInches => "height_inches",
            FieldId::Weight => "weight",
            FieldId::HighBp => "highbp",
            FieldId::HighChol => "highchol",
            FieldId::CholCheck => "cholcheck",
            FieldId::Diabetes => "diabetes",
            FieldId::Smoker => "smoker",
            FieldId::PhysActivity => "physactivity",
            FieldId::Fruits => "fruits",
            FieldId::Veggies => "veggies",
            FieldId::HvyAlcohol => "hvyalcoholconsump",
            FieldId::GenHealth => "genhlth",
            FieldId::MentHealth => "menthlth",
            FieldId::PhysHealth => "physhlth",
            FieldId::DiffWalk => "diffwalk",
            FieldId::AnyHealthcare => "anyhealthcare",
            FieldId::NoDocBcCost => "nodocbccost",
            FieldId::Education => "education",
            FieldId::Income => "income",
        }
    }
}

/// How a field is entered and rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free numeric entry with an inclusive valid range
    Number { min: u32, max: u32, unit: &'static str },
    /// One-of selection; options are (label, stored value) pairs
    Choice { options: &'static [(&'static str, &'static str)] },
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Whether `value` satisfies this field: required fields need a value,
    /// and numeric entries must parse into the declared range
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match value {
            None | Some("") => !self.required,
            Some(v) => match self.kind {
                FieldKind::Number { min, max, .. } => v
                    .trim()
                    .parse::<u32>()
                    .is_ok_and(|n| (min..=max).contains(&n)),
                FieldKind::Choice { .. } => true,
            },
        }
    }
}

/// One card (screen) of the multi-part form
#[derive(Debug, Clone, Copy)]
pub struct CardSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
}

const YES_NO: &[(&str, &str)] = &[("No", "0"), ("Yes", "1")];

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::Age,
        label: "Age",
        kind: FieldKind::Number { min: 18, max: 120, unit: "years" },
        required: true,
    },
    FieldSpec {
        id: FieldId::Sex,
        label: "Sex",
        kind: FieldKind::Choice { options: &[("Female", "0"), ("Male", "1")] },
        required: true,
    },
    FieldSpec {
        id: FieldId::HeightFeet,
        label: "Height (feet)",
        kind: FieldKind::Number { min: 3, max: 8, unit: "ft" },
        required: true,
    },
    FieldSpec {
        id: FieldId::HeightInches,
        label: "Height (inches)",
        kind: FieldKind::Number { min: 0, max: 11, unit: "in" },
        required: true,
    },
    FieldSpec {
        id: FieldId::Weight,
        label: "Weight",
        kind: FieldKind::Number { min: 50, max: 700, unit: "lb" },
        required: true,
    },
];

const MEDICAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::HighBp,
        label: "High blood pressure",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::HighChol,
        label: "High cholesterol",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::CholCheck,
        label: "Cholesterol check in last 5 years",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::Diabetes,
        label: "Diabetes",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
];

const LIFESTYLE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::Smoker,
        label: "Smoked 100+ cigarettes in lifetime",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::PhysActivity,
        label: "Physical activity in past 30 days",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::Fruits,
        label: "Eat fruit daily",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::Veggies,
        label: "Eat vegetables daily",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::HvyAlcohol,
        label: "Heavy alcohol consumption",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
];

const WELLBEING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: FieldId::GenHealth,
        label: "General health",
        kind: FieldKind::Choice {
            options: &[
                ("Excellent", "1"),
                ("Very good", "2"),
                ("Good", "3"),
                ("Fair", "4"),
                ("Poor", "5"),
            ],
        },
        required: true,
    },
    FieldSpec {
        id: FieldId::MentHealth,
        label: "Days of poor mental health (last 30)",
        kind: FieldKind::Number { min: 0, max: 30, unit: "days" },
        required: true,
    },
    FieldSpec {
        id: FieldId::PhysHealth,
        label: "Days of poor physical health (last 30)",
        kind: FieldKind::Number { min: 0, max: 30, unit: "days" },
        required: true,
    },
    FieldSpec {
        id: FieldId::DiffWalk,
        label: "Serious difficulty walking",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::AnyHealthcare,
        label: "Have healthcare coverage",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::NoDocBcCost,
        label: "Skipped doctor visit due to cost",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldSpec {
        id: FieldId::Education,
        label: "Education level (1-6)",
        kind: FieldKind::Number { min: 1, max: 6, unit: "" },
        required: false,
    },
    FieldSpec {
        id: FieldId::Income,
        label: "Income bracket (1-8)",
        kind: FieldKind::Number { min: 1, max: 8, unit: "" },
        required: false,
    },
];

const CARDS: &[CardSpec] = &[
    CardSpec {
        title: "Personal Details",
        subtitle: "Basic information about you",
        fields: PERSONAL_FIELDS,
    },
    CardSpec {
        title: "Medical History",
        subtitle: "Known conditions and screenings",
        fields: MEDICAL_FIELDS,
    },
    CardSpec {
        title: "Lifestyle",
        subtitle: "Daily habits that affect heart health",
        fields: LIFESTYLE_FIELDS,
    },
    CardSpec {
        title: "Wellbeing",
        subtitle: "Overall health and access to care",
        fields: WELLBEING_FIELDS,
    },
];

/// The fixed card sequence of the assessment form
pub fn cards() -> &'static [CardSpec] {
    CARDS
}

/// Accumulated form answers, keyed by field
///
/// Values are stored as the raw entered strings; a field with no entry or an
/// empty string is treated as missing by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value; an empty string clears the field
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(id.key());
        } else {
            self.values.insert(id.key().to_string(), value);
        }
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.values.get(id.key()).map(String::as_str)
    }

    /// Whether the field currently holds a non-empty value
    pub fn is_filled(&self, id: FieldId) -> bool {
        self.get(id).is_some_and(|v| !v.is_empty())
    }

    /// Clear every answer
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn parse_u32(&self, id: FieldId) -> Option<u32> {
        self.get(id)?.trim().parse().ok()
    }

    fn flag(&self, id: FieldId, default: bool) -> bool {
        match self.parse_u32(id) {
            Some(v) => v != 0,
            None => default,
        }
    }

    // Typed accessors with the same defaults the original backend applies to
    // missing fields.

    pub fn age(&self) -> u32 {
        self.parse_u32(FieldId::Age).unwrap_or(30)
    }

    pub fn height_feet(&self) -> u32 {
        self.parse_u32(FieldId::HeightFeet).unwrap_or(5)
    }

    pub fn height_inches(&self) -> u32 {
        self.parse_u32(FieldId::HeightInches).unwrap_or(8)
    }

    pub fn weight_lb(&self) -> u32 {
        self.parse_u32(FieldId::Weight).unwrap_or(150)
    }

    pub fn high_bp(&self) -> bool {
        self.flag(FieldId::HighBp, false)
    }

    pub fn high_chol(&self) -> bool {
        self.flag(FieldId::HighChol, false)
    }

    pub fn smoker(&self) -> bool {
        self.flag(FieldId::Smoker, false)
    }

    pub fn diabetes(&self) -> bool {
        self.flag(FieldId::Diabetes, false)
    }

    pub fn physically_active(&self) -> bool {
        self.flag(FieldId::PhysActivity, true)
    }

    pub fn general_health(&self) -> u32 {
        self.parse_u32(FieldId::GenHealth).unwrap_or(3)
    }

    /// Flat map of raw answers for API payloads
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}
