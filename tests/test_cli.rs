//! CLI surface tests: argument parsing and binary behavior

use std::path::PathBuf;

use assert_cmd::Command;
use cardiocheck::cli::{Cli, Commands};
use clap::Parser;
use predicates::prelude::*;

#[test]
fn test_defaults() {
    let cli = Cli::parse_from(["cardiocheck"]);

    assert!(cli.command.is_none());
    assert_eq!(cli.api_url, "http://localhost:5000");
    assert_eq!(cli.timeout, 5);
    assert!(!cli.offline);
    assert!(!cli.no_welcome);
    assert_eq!(cli.export_path(), PathBuf::from("health_timeline.csv"));
}

#[test]
fn test_flags_and_overrides() {
    let cli = Cli::parse_from([
        "cardiocheck",
        "--api-url",
        "http://example.test:8080",
        "--timeout",
        "30",
        "--offline",
        "--no-welcome",
        "--export",
        "out.csv",
    ]);

    assert_eq!(cli.api_url, "http://example.test:8080");
    assert_eq!(cli.timeout, 30);
    assert!(cli.offline);
    assert!(cli.no_welcome);
    assert_eq!(cli.export_path(), PathBuf::from("out.csv"));
}

#[test]
fn test_timeout_rejects_out_of_range() {
    assert!(Cli::try_parse_from(["cardiocheck", "--timeout", "0"]).is_err());
    assert!(Cli::try_parse_from(["cardiocheck", "--timeout", "301"]).is_err());
    assert!(Cli::try_parse_from(["cardiocheck", "--timeout", "abc"]).is_err());
    assert!(Cli::try_parse_from(["cardiocheck", "--timeout", "300"]).is_ok());
}

#[test]
fn test_report_subcommand_parsing() {
    let cli = Cli::parse_from([
        "cardiocheck",
        "report",
        "answers.json",
        "--export",
        "timeline.csv",
        "--force",
    ]);

    match cli.command {
        Some(Commands::Report {
            input,
            export,
            force,
        }) => {
            assert_eq!(input, PathBuf::from("answers.json"));
            assert_eq!(export, Some(PathBuf::from("timeline.csv")));
            assert!(force);
        }
        other => panic!("Expected report subcommand, got {:?}", other),
    }
}

#[test]
fn test_help_mentions_assessment() {
    Command::cargo_bin("cardiocheck")
        .expect("binary should build")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assessment"));
}

#[test]
fn test_report_with_missing_file_fails() {
    Command::cargo_bin("cardiocheck")
        .expect("binary should build")
        .args(["--offline", "report", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn test_report_runs_offline() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let answers = dir.path().join("answers.json");
    std::fs::write(
        &answers,
        r#"{"age": "45", "highbp": "1", "highchol": "0", "physactivity": "1",
            "height_feet": "5", "height_inches": "8", "weight": "150",
            "smoker": "0", "diabetes": "0", "genhlth": "2"}"#,
    )
    .expect("should write answers file");

    Command::cargo_bin("cardiocheck")
        .expect("binary should build")
        .args(["--offline", "report"])
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk of Heart Disease"));
}
