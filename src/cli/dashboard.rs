//! Results screen and gamified analytics dashboard rendering
//!
//! The results screen shows the risk meter, headline, and health score; the
//! dashboard adds the four metric gauges, the risk-factor matrix, the
//! six-month trend chart, community comparisons, achievements, and
//! recommendations. Both render from a completed [`AssessmentOutcome`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

use crate::assessment::badges;
use crate::assessment::risk::{health_level, health_score, RiskBand, RiskLevel};
use crate::report::outcome::AssessmentOutcome;

fn band_color(band: RiskBand) -> Color {
    match band {
        RiskBand::Low => Color::Green,
        RiskBand::Moderate => Color::Yellow,
        RiskBand::High => Color::Red,
    }
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn footer_line<'a>(status: Option<&'a str>, keys: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(status) = status {
        spans.push(Span::styled("· ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(status, Style::default().fg(Color::DarkGray).italic()));
    }
    Line::from(spans)
}

// ============================================================================
// Results Screen
// ============================================================================

pub fn render_results(f: &mut Frame, outcome: &AssessmentOutcome, status: Option<&str>) {
    let area = f.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Assessment Results ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // headline
            Constraint::Length(3), // risk meter
            Constraint::Length(4), // health score
            Constraint::Min(4),    // analysis + insights
            Constraint::Length(1), // footer
        ])
        .split(inner);

    let prediction = &outcome.prediction;
    let band = prediction.band();
    let color = band_color(band);

    let headline = vec![
        Line::from(""),
        Line::from(Span::styled(
            prediction.headline(),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("{}% risk · {}", prediction.risk_percentage, band.label()),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        chunks[0],
    );

    let meter = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Risk Meter ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color))
        .percent(prediction.risk_percentage.clamp(0.0, 100.0) as u16);
    f.render_widget(meter, chunks[1]);

    let score = health_score(prediction.risk_percentage);
    let level = health_level(score);
    let score_lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Health Score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", score),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled("  Grade ", Style::default().fg(Color::Gray)),
            Span::styled(level.grade, Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                format!("  ·  {}", level.title),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(score_lines).alignment(Alignment::Center),
        chunks[2],
    );

    let mut body = vec![
        Line::from(Span::styled(
            outcome.prediction.analysis(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for insight in badges::insights() {
        body.push(Line::from(vec![
            Span::styled("  ✦ ", Style::default().fg(Color::Cyan)),
            Span::styled(insight.title, Style::default().fg(Color::White).bold()),
            Span::styled(
                format!(" · {}", insight.description),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(body), chunks[3]);

    f.render_widget(
        Paragraph::new(footer_line(
            status,
            &[("D", "dashboard"), ("N", "new assessment"), ("Q", "quit")],
        ))
        .alignment(Alignment::Center),
        chunks[4],
    );
}

// ============================================================================
// Analytics Dashboard
// ============================================================================

pub fn render_dashboard(f: &mut Frame, outcome: &AssessmentOutcome, status: Option<&str>) {
    let area = f.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Health Analytics Dashboard ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // metric gauges
            Constraint::Percentage(40), // factors + chart
            Constraint::Min(6),         // community + achievements + recs
            Constraint::Length(1),      // footer
        ])
        .split(inner);

    render_metric_gauges(f, rows[0], outcome);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    render_risk_matrix(f, middle[0], outcome);
    render_timeline_chart(f, middle[1], outcome);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[2]);
    render_community(f, bottom[0], outcome);
    render_achievements(f, bottom[1], outcome);
    render_recommendations(f, bottom[2]);

    f.render_widget(
        Paragraph::new(footer_line(
            status,
            &[
                ("R", "results"),
                ("E", "export timeline"),
                ("N", "new assessment"),
                ("Q", "quit"),
            ],
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
}

fn render_metric_gauges(f: &mut Frame, area: Rect, outcome: &AssessmentOutcome) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let m = &outcome.metrics;
    let gauges: [(&str, String, f64, Color); 4] = [
        (
            "Heart Rate Zone",
            m.heart_rate.zone.clone(),
            m.heart_rate.percentage,
            Color::Red,
        ),
        (
            "BMI",
            format!("{} ({:.1})", m.bmi.category, m.bmi.value),
            m.bmi.percentage,
            Color::Cyan,
        ),
        (
            "Cholesterol",
            m.cholesterol.level.clone(),
            m.cholesterol.percentage,
            Color::Yellow,
        ),
        (
            "Fitness Level",
            m.fitness.level.clone(),
            m.fitness.percentage,
            Color::Green,
        ),
    ];

    for (i, (title, label, pct, color)) in gauges.into_iter().enumerate() {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .gauge_style(Style::default().fg(color))
            .label(label)
            .percent(pct.clamp(0.0, 100.0) as u16);
        f.render_widget(gauge, cols[i]);
    }
}

fn render_risk_matrix(f: &mut Frame, area: Rect, outcome: &AssessmentOutcome) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Risk Factor Matrix ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = outcome
        .factors
        .iter()
        .map(|factor| {
            let color = level_color(factor.level);
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<16}", factor.name),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>6}", factor.level.to_string()),
                    Style::default().fg(color).bold(),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_timeline_chart(f: &mut Frame, area: Rect, outcome: &AssessmentOutcome) {
    let timeline = &outcome.timeline;

    let risk_points: Vec<(f64, f64)> = timeline
        .risk_scores
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();
    let fitness_points: Vec<(f64, f64)> = timeline
        .fitness_scores
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Risk Score")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&risk_points),
        Dataset::default()
            .name("Fitness Score")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&fitness_points),
    ];

    let x_labels: Vec<Span> = timeline
        .labels
        .iter()
        .map(|l| Span::styled(l.clone(), Style::default().fg(Color::DarkGray)))
        .collect();
    let max_x = (timeline.labels.len().max(2) - 1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Health Journey · 6 Months ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(vec![
                    Span::styled("0", Style::default().fg(Color::DarkGray)),
                    Span::styled("50", Style::default().fg(Color::DarkGray)),
                    Span::styled("100", Style::default().fg(Color::DarkGray)),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_community(f: &mut Frame, area: Rect, outcome: &AssessmentOutcome) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Community Insights ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for stat in &outcome.community {
        let arrow = if stat.better { "▲" } else { "▼" };
        let arrow_color = if stat.better { Color::Green } else { Color::Red };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", arrow), Style::default().fg(arrow_color)),
            Span::styled(stat.label.clone(), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {} · {}", stat.value, stat.percentile),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_achievements(f: &mut Frame, area: Rect, outcome: &AssessmentOutcome) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Achievements ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = outcome
        .achievements
        .iter()
        .map(|a| {
            if a.unlocked {
                Line::from(vec![
                    Span::styled("★ ", Style::default().fg(Color::Yellow)),
                    Span::styled(a.title, Style::default().fg(Color::White).bold()),
                ])
            } else {
                Line::from(vec![
                    Span::styled("☆ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(a.title, Style::default().fg(Color::DarkGray)),
                ])
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_recommendations(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recommendations ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = badges::recommendations()
        .iter()
        .map(|rec| {
            let color = match rec.priority {
                badges::Priority::High => Color::Red,
                badges::Priority::Medium => Color::Yellow,
                badges::Priority::Low => Color::Green,
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", rec.priority.label()),
                    Style::default().fg(color).bold(),
                ),
                Span::styled(rec.title, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
