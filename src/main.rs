//! CardioCheck entry point

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use cardiocheck::api::{ApiClient, HealthDataSource};
use cardiocheck::assessment::FormData;
use cardiocheck::cli::{self, wizard, Cli, Commands};
use cardiocheck::report::{export, summary, AssessmentOutcome};
use cardiocheck::utils::{progress, styling};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut source = build_source(&cli)?;

    match &cli.command {
        Some(Commands::Report {
            input,
            export,
            force,
        }) => run_report(&mut source, input, export.as_deref(), *force),
        None => wizard::run_app(&cli, &mut source),
    }
}

fn build_source(cli: &Cli) -> Result<HealthDataSource> {
    if cli.offline {
        return Ok(HealthDataSource::offline());
    }
    let client = ApiClient::new(&cli.api_url, Duration::from_secs(cli.timeout))
        .context("could not build the HTTP client")?;
    Ok(HealthDataSource::connected(client))
}

/// Headless assessment from a saved answers file
fn run_report(
    source: &mut HealthDataSource,
    input: &Path,
    export_to: Option<&Path>,
    force: bool,
) -> Result<()> {
    styling::print_banner();

    let raw = fs::read_to_string(input)
        .with_context(|| format!("could not read answers file {}", input.display()))?;
    let form: FormData = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid answers file", input.display()))?;

    let spinner = progress::create_spinner("Running assessment...");
    let outcome = AssessmentOutcome::collect(form, source);
    if outcome.notices.is_empty() {
        progress::finish_spinner_success(&spinner, "Assessment complete");
    } else {
        progress::finish_spinner_warning(&spinner, "Assessment complete (local fallback used)");
        for notice in &outcome.notices {
            styling::print_warning(notice);
        }
    }

    summary::print_summary(&outcome);

    if let Some(path) = export_to {
        export_timeline(&outcome, path, force)?;
    }

    Ok(())
}

fn export_timeline(outcome: &AssessmentOutcome, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force && !cli::confirm_overwrite(path)? {
        styling::print_info("Export skipped");
        return Ok(());
    }
    export::write_timeline_csv(&outcome.timeline, path)?;
    styling::print_success(&format!("Timeline exported to {}", path.display()));
    Ok(())
}
