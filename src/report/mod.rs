//! Report module - assessment outcome assembly, terminal summary, CSV export

pub mod export;
pub mod outcome;
pub mod summary;

pub use outcome::AssessmentOutcome;
