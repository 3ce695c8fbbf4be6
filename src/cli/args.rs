//! Command-line argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default timeline export filename, next to the working directory
const DEFAULT_EXPORT: &str = "health_timeline.csv";

/// CardioCheck - Terminal heart-health self-assessment
///
/// Runs a guided four-card assessment wizard, then shows your results and a
/// gamified analytics dashboard. Uses the backend when reachable and falls
/// back to local calculations otherwise.
#[derive(Parser, Debug)]
#[command(name = "cardiocheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the CardioCheck backend
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5, value_parser = parse_timeout, global = true)]
    pub timeout: u64,

    /// Skip the backend entirely and use local calculations
    #[arg(long, global = true)]
    pub offline: bool,

    /// Skip the welcome screen and go straight to the assessment
    #[arg(long)]
    pub no_welcome: bool,

    /// Where to write the timeline CSV when exporting from the dashboard
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an assessment headlessly from a saved answers file and print a
    /// summary report
    Report {
        /// Answers JSON file (a flat map of field name to value)
        input: PathBuf,

        /// Also write the six-month timeline as CSV to this path
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Overwrite an existing export file without asking
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Resolved timeline export path for dashboard exports
    pub fn export_path(&self) -> PathBuf {
        self.export
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT))
    }
}

/// Validate timeout argument (must be 1-300 seconds)
fn parse_timeout(s: &str) -> Result<u64, String> {
    let secs: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of seconds", s))?;
    if (1..=300).contains(&secs) {
        Ok(secs)
    } else {
        Err(format!("timeout must be between 1 and 300 seconds, got {}", secs))
    }
}
