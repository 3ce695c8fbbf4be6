//! Terminal summary tables for the headless report command

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;

use super::outcome::AssessmentOutcome;
use crate::assessment::RiskLevel;

fn level_cell(level: RiskLevel) -> Cell {
    let color = match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    };
    Cell::new(level.to_string().to_uppercase())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

/// Print the full assessment summary to stdout
pub fn print_summary(outcome: &AssessmentOutcome) {
    println!();
    let headline_style = if outcome.prediction.high_risk {
        style(outcome.prediction.headline()).red().bold()
    } else {
        style(outcome.prediction.headline()).green().bold()
    };
    println!(
        "  {}  ({}% · {})",
        headline_style,
        outcome.prediction.risk_percentage,
        outcome.prediction.band().label()
    );
    println!();

    print_metrics_table(outcome);
    println!();
    print_factors_table(outcome);
    println!();

    let level = outcome.health_level();
    println!(
        "  Health score: {}  Grade {} · {}",
        style(outcome.health_score()).cyan().bold(),
        style(level.grade).cyan().bold(),
        style(level.title).magenta()
    );
    println!();
    println!("  {}", style(outcome.prediction.analysis()).dim());
    println!();
}

fn print_metrics_table(outcome: &AssessmentOutcome) {
    let m = &outcome.metrics;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Reading").add_attribute(Attribute::Bold),
            Cell::new("Score").add_attribute(Attribute::Bold),
        ]);

    table.add_row(vec![
        Cell::new("Heart Rate Zone"),
        Cell::new(format!(
            "{} ({} / {} bpm)",
            m.heart_rate.zone, m.heart_rate.current_hr, m.heart_rate.max_hr
        )),
        Cell::new(format!("{:.0}%", m.heart_rate.percentage)),
    ]);
    table.add_row(vec![
        Cell::new("BMI"),
        Cell::new(format!("{} ({:.1})", m.bmi.category, m.bmi.value)),
        Cell::new(format!("{:.0}%", m.bmi.percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Cholesterol"),
        Cell::new(m.cholesterol.level.clone()),
        Cell::new(format!("{:.0}%", m.cholesterol.percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Fitness Level"),
        Cell::new(m.fitness.level.clone()),
        Cell::new(format!("{:.0}%", m.fitness.percentage)),
    ]);

    println!("{table}");
}

fn print_factors_table(outcome: &AssessmentOutcome) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Risk Factor").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Level").add_attribute(Attribute::Bold),
        ]);

    for factor in &outcome.factors {
        table.add_row(vec![
            Cell::new(&factor.name),
            Cell::new(format!("{:.1}", factor.value)),
            level_cell(factor.level),
        ]);
    }

    println!("{table}");
}
