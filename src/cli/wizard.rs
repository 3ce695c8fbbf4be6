//! Interactive TUI wizard for the CardioCheck assessment
//!
//! This module owns the wizard controller and the terminal front-end around
//! it:
//! - `WizardState`: the step state machine (card navigation, validation
//!   gating, progress reporting, reset, submit)
//! - `Transition`: the two-phase card animation, driven by an injectable
//!   clock so tests are deterministic
//! - `App` + `run_app`: the single-threaded event loop covering the welcome
//!   screen, the assessment wizard, the results screen, and the analytics
//!   dashboard
//!
//! # Navigation rules
//!
//! Advancing validates every required field on the current card; any empty
//! field is flagged inline, focus jumps to the first invalid field, and the
//! step does not change. Going back never validates. While a card transition
//! is in flight no card is interactive: the outgoing card is deactivated when
//! the exit phase starts and the incoming card only becomes interactive once
//! the enter phase completes.

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::api::HealthDataSource;
use crate::assessment::form::{cards, CardSpec, FieldId, FieldKind, FieldSpec, FormData};
use crate::report::outcome::AssessmentOutcome;

use super::args::Cli;
use super::dashboard;

// ============================================================================
// Clock Abstraction
// ============================================================================

/// Source of monotonic time for animation sequencing
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock implementation used by the real UI
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// ============================================================================
// Card Transition
// ============================================================================

/// Duration of the outgoing card's exit phase
pub const EXIT_DURATION: Duration = Duration::from_millis(250);
/// Stagger before the incoming card becomes interactive
pub const ENTER_DURATION: Duration = Duration::from_millis(50);
/// How long the welcome screen stays up before the wizard appears
pub const WELCOME_DURATION: Duration = Duration::from_millis(2500);

/// Slide direction of a card transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Forward,
    Backward,
}

/// Two-phase transition between cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Idle,
    /// Outgoing card is animating out; `target` becomes current afterwards
    Exiting {
        target: usize,
        slide: Slide,
        started: Instant,
    },
    /// Incoming card is animating in; not yet interactive
    Entering { slide: Slide, started: Instant },
}

// ============================================================================
// Progress Indicator
// ============================================================================

/// State of a single progress dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Completed,
    Active,
    Upcoming,
}

// ============================================================================
// Wizard State Machine
// ============================================================================

/// The wizard controller: current card, answers, validation flags, and the
/// in-flight transition
pub struct WizardState {
    pub current_index: usize,
    pub form: FormData,
    /// Focused field index within the current card
    pub focus: usize,
    /// Fields flagged invalid by the last failed validation
    pub invalid: Vec<FieldId>,
    pub transition: Transition,
    pub show_quit_confirm: bool,
    /// Submit control disabled while the assessment is being processed
    pub submitting: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_index: 0,
            form: FormData::new(),
            focus: 0,
            invalid: Vec::new(),
            transition: Transition::Idle,
            show_quit_confirm: false,
            submitting: false,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_count(&self) -> usize {
        cards().len()
    }

    pub fn current_card(&self) -> &'static CardSpec {
        &cards()[self.current_index]
    }

    pub fn is_last_step(&self) -> bool {
        self.current_index == self.step_count() - 1
    }

    /// Whether the current card accepts input right now. False while a
    /// transition is in flight or a submission is processing, so the outgoing
    /// and incoming cards are never simultaneously interactive.
    pub fn is_interactive(&self) -> bool {
        matches!(self.transition, Transition::Idle) && !self.submitting
    }

    /// Index of the interactive card, if any
    pub fn active_card(&self) -> Option<usize> {
        if self.is_interactive() {
            Some(self.current_index)
        } else {
            None
        }
    }

    /// Progress dot states as a pure function of the current index
    pub fn progress(&self) -> Vec<ProgressState> {
        (0..self.step_count())
            .map(|i| {
                if i < self.current_index {
                    ProgressState::Completed
                } else if i == self.current_index {
                    ProgressState::Active
                } else {
                    ProgressState::Upcoming
                }
            })
            .collect()
    }

    /// Fields on `card_index` that fail validation: required fields with no
    /// value, and numeric entries outside their declared range
    pub fn invalid_fields(&self, card_index: usize) -> Vec<FieldId> {
        cards()[card_index]
            .fields
            .iter()
            .filter(|f| !f.accepts(self.form.get(f.id)))
            .map(|f| f.id)
            .collect()
    }

    fn flag_invalid(&mut self, missing: Vec<FieldId>) {
        // Focus jumps to the first invalid field so it scrolls into view
        if let Some(first) = missing.first() {
            if let Some(pos) = self
                .current_card()
                .fields
                .iter()
                .position(|f| f.id == *first)
            {
                self.focus = pos;
            }
        }
        self.invalid = missing;
    }

    /// Validate the current card and begin the forward transition.
    /// Returns false (no step change, invalid fields flagged) when any field
    /// fails validation, when on the last card, or mid-transition.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.is_interactive() || self.is_last_step() {
            return false;
        }
        let missing = self.invalid_fields(self.current_index);
        if !missing.is_empty() {
            self.flag_invalid(missing);
            return false;
        }
        self.transition = Transition::Exiting {
            target: self.current_index + 1,
            slide: Slide::Forward,
            started: now,
        };
        true
    }

    /// Begin the backward transition, skipping validation entirely
    pub fn back(&mut self, now: Instant) -> bool {
        if !self.is_interactive() || self.current_index == 0 {
            return false;
        }
        self.transition = Transition::Exiting {
            target: self.current_index - 1,
            slide: Slide::Backward,
            started: now,
        };
        true
    }

    /// Clear all answers and return to the first card
    pub fn reset(&mut self) {
        self.form.clear();
        self.current_index = 0;
        self.focus = 0;
        self.invalid.clear();
        self.transition = Transition::Idle;
        self.submitting = false;
    }

    /// Validate the final card; on success the submit control is disabled and
    /// the caller hands the form to the submission path
    pub fn try_submit(&mut self) -> bool {
        if !self.is_interactive() || !self.is_last_step() {
            return false;
        }
        let missing = self.invalid_fields(self.current_index);
        if !missing.is_empty() {
            self.flag_invalid(missing);
            return false;
        }
        self.submitting = true;
        true
    }

    /// Advance the transition phases based on the current time
    pub fn tick(&mut self, now: Instant) {
        match self.transition {
            Transition::Exiting {
                target,
                slide,
                started,
            } if now.duration_since(started) >= EXIT_DURATION => {
                self.current_index = target;
                self.focus = 0;
                self.transition = Transition::Entering {
                    slide,
                    started: now,
                };
            }
            Transition::Entering { started, .. }
                if now.duration_since(started) >= ENTER_DURATION =>
            {
                self.transition = Transition::Idle;
            }
            _ => {}
        }
    }

    /// Store a value for a field; a non-empty value clears its invalid flag,
    /// mirroring the input-change behavior of the original form
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        let filled = !value.is_empty();
        self.form.set(id, value);
        if filled {
            self.invalid.retain(|f| *f != id);
        }
    }

    fn focused_field(&self) -> &'static FieldSpec {
        &self.current_card().fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        let count = self.current_card().fields.len();
        if self.focus + 1 < count {
            self.focus += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Cycle the focused choice field's selection by `delta`, wrapping
    pub fn cycle_choice(&mut self, delta: isize) {
        let field = self.focused_field();
        if let FieldKind::Choice { options } = field.kind {
            let len = options.len() as isize;
            let current = self
                .form
                .get(field.id)
                .and_then(|v| options.iter().position(|(_, value)| *value == v))
                .map(|p| p as isize);
            let next = match current {
                Some(pos) => (pos + delta).rem_euclid(len),
                None if delta >= 0 => 0,
                None => len - 1,
            };
            self.set_field(field.id, options[next as usize].1);
        }
    }

    /// Append a typed digit to the focused numeric field
    pub fn type_digit(&mut self, c: char) {
        let field = self.focused_field();
        if let FieldKind::Number { .. } = field.kind {
            if c.is_ascii_digit() {
                let mut value = self.form.get(field.id).unwrap_or("").to_string();
                if value.len() < 4 {
                    value.push(c);
                    self.set_field(field.id, value);
                }
            }
        }
    }

    /// Delete the last digit of the focused numeric field; returns false when
    /// there was nothing to delete (caller then navigates back instead)
    pub fn delete_digit(&mut self) -> bool {
        let field = self.focused_field();
        if let FieldKind::Number { .. } = field.kind {
            let mut value = self.form.get(field.id).unwrap_or("").to_string();
            if !value.is_empty() {
                value.pop();
                self.form.set(field.id, value);
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Application Screens
// ============================================================================

/// Which section is displayed. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome { shown_at: Instant },
    Assessment,
    Results,
    Dashboard,
}

/// Full TUI application state
pub struct App<C: Clock> {
    pub screen: Screen,
    pub wizard: WizardState,
    pub outcome: Option<AssessmentOutcome>,
    /// Footer status line (fallback notices, export confirmations)
    pub status: Option<String>,
    clock: C,
}

impl<C: Clock> App<C> {
    pub fn new(clock: C, skip_welcome: bool) -> Self {
        let screen = if skip_welcome {
            Screen::Assessment
        } else {
            Screen::Welcome {
                shown_at: clock.now(),
            }
        };
        Self {
            screen,
            wizard: WizardState::new(),
            outcome: None,
            status: None,
            clock,
        }
    }

    /// Restore the entry state: answers cleared, card 1 active, results and
    /// dashboard hidden
    pub fn new_assessment(&mut self) {
        self.wizard.reset();
        self.outcome = None;
        self.status = None;
        self.screen = Screen::Assessment;
    }

    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Screen::Welcome { shown_at } = self.screen {
            if now.duration_since(shown_at) >= WELCOME_DURATION {
                self.screen = Screen::Assessment;
            }
        }
        self.wizard.tick(now);
    }
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the full TUI flow: welcome, wizard, results, dashboard
pub fn run_app(cli: &Cli, source: &mut HealthDataSource) -> Result<()> {
    let mut app = App::new(SystemClock, cli.no_welcome);
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut app, source, cli);
    teardown_terminal();
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<SystemClock>,
    source: &mut HealthDataSource,
    cli: &Cli,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| render_app(f, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Quit confirmation overlay takes precedence over everything
        if app.wizard.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(()),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.wizard.show_quit_confirm = false;
                }
                _ => {}
            }
            continue;
        }

        match app.screen {
            Screen::Welcome { .. } => {
                // Any key skips the boot screen
                app.screen = Screen::Assessment;
            }
            Screen::Assessment => handle_assessment_key(terminal, app, source, key)?,
            Screen::Results => match key.code {
                KeyCode::Char('d') | KeyCode::Char('D') => app.screen = Screen::Dashboard,
                KeyCode::Char('n') | KeyCode::Char('N') => app.new_assessment(),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    app.wizard.show_quit_confirm = true;
                }
                _ => {}
            },
            Screen::Dashboard => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => app.screen = Screen::Results,
                KeyCode::Char('n') | KeyCode::Char('N') => app.new_assessment(),
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    app.status = Some(export_timeline(app, cli));
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    app.wizard.show_quit_confirm = true;
                }
                _ => {}
            },
        }
    }
}

/// One status line covering every fallback notice from a submission
pub fn status_from_notices(notices: &[String]) -> Option<String> {
    if notices.is_empty() {
        None
    } else {
        Some(notices.join(" · "))
    }
}

fn export_timeline(app: &App<SystemClock>, cli: &Cli) -> String {
    let Some(outcome) = &app.outcome else {
        return "Nothing to export yet".to_string();
    };
    let path = cli.export_path();
    match crate::report::export::write_timeline_csv(&outcome.timeline, &path) {
        Ok(()) => format!("Timeline exported to {}", path.display()),
        Err(err) => format!("Export failed: {}", err),
    }
}

/// Handle a key press on the assessment screen
fn handle_assessment_key(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<SystemClock>,
    source: &mut HealthDataSource,
    key: KeyEvent,
) -> Result<()> {
    // Keys are dropped while a transition or submission is in flight; a
    // pending transition always completes on its own via tick()
    if !app.wizard.is_interactive() {
        return Ok(());
    }

    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.wizard.show_quit_confirm = true;
        }
        KeyCode::Up => app.wizard.focus_prev(),
        KeyCode::Down | KeyCode::Tab => app.wizard.focus_next(),
        KeyCode::Left => app.wizard.cycle_choice(-1),
        KeyCode::Right => app.wizard.cycle_choice(1),
        KeyCode::Char(c) if c.is_ascii_digit() => app.wizard.type_digit(c),
        KeyCode::Backspace => {
            if !app.wizard.delete_digit() {
                app.wizard.back(now);
            }
        }
        KeyCode::Enter => {
            if app.wizard.is_last_step() {
                if app.wizard.try_submit() {
                    // Busy frame before the blocking submission round-trip
                    terminal.draw(|f| render_app(f, app))?;
                    let outcome = AssessmentOutcome::collect(app.wizard.form.clone(), source);
                    app.status = status_from_notices(&outcome.notices);
                    app.outcome = Some(outcome);
                    app.wizard.submitting = false;
                    app.screen = Screen::Results;
                }
            } else {
                app.wizard.advance(now);
            }
        }
        _ => {}
    }
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_app(f: &mut Frame, app: &App<SystemClock>) {
    match app.screen {
        Screen::Welcome { .. } => render_welcome(f),
        Screen::Assessment => render_assessment(f, app),
        Screen::Results => {
            if let Some(outcome) = &app.outcome {
                dashboard::render_results(f, outcome, app.status.as_deref());
            }
        }
        Screen::Dashboard => {
            if let Some(outcome) = &app.outcome {
                dashboard::render_dashboard(f, outcome, app.status.as_deref());
            }
        }
    }

    if app.wizard.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

fn render_logo(f: &mut Frame, area: Rect) {
    let red = Style::default().fg(Color::Red).bold();
    let logo_lines = vec![
        Line::from(Span::styled(" ██████╗ █████╗ ██████╗ ██████╗ ██╗ ██████╗ ", red)),
        Line::from(Span::styled("██╔════╝██╔══██╗██╔══██╗██╔══██╗██║██╔═══██╗", red)),
        Line::from(Span::styled("██║     ███████║██████╔╝██║  ██║██║██║   ██║", red)),
        Line::from(Span::styled("██║     ██╔══██║██╔══██╗██║  ██║██║██║   ██║", red)),
        Line::from(Span::styled("╚██████╗██║  ██║██║  ██║██████╔╝██║╚██████╔╝", red)),
        Line::from(Span::styled(" ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚═╝ ╚═════╝ ", red)),
        Line::from(""),
        Line::from(vec![
            Span::styled("♥ ", red),
            Span::styled(
                "CardioCheck · Know your heart",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(logo_lines).alignment(Alignment::Center), area);
}

fn render_welcome(f: &mut Frame) {
    let area = f.area();
    let logo_area = centered_fixed_rect(46, 9, area);
    render_logo(f, logo_area);

    let hint_y = logo_area.y + logo_area.height + 1;
    if hint_y < area.height {
        let hint_area = Rect::new(area.x, hint_y, area.width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                "press any key to begin",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}

fn render_assessment(f: &mut Frame, app: &App<SystemClock>) {
    let area = f.area();
    let wizard = &app.wizard;

    let logo_height = 9u16;
    let hint_height = 1u16;
    let box_width = 66u16;
    let ideal_box_height = 16u16;
    let box_height = ideal_box_height
        .min(area.height.saturating_sub(logo_height + hint_height + 2))
        .max(10);

    let total_height = logo_height + box_height + hint_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    let logo_area = Rect::new(x, y, box_width.min(area.width), logo_height);
    render_logo(f, logo_area);

    let box_area = Rect::new(x, y + logo_height, box_width.min(area.width), box_height);
    f.render_widget(Clear, box_area);

    let card = wizard.current_card();
    let title_text = format!(
        " Card {}/{} · {} ",
        wizard.current_index + 1,
        wizard.step_count(),
        card.title
    );

    let border_color = if wizard.is_interactive() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title_text)
        .title_style(Style::default().fg(border_color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    render_progress_dots(f, chunks[0], wizard);
    render_card_fields(f, chunks[1], wizard);

    let hint_area = Rect::new(x, box_area.y + box_area.height, box_width.min(area.width), 1);
    render_help_bar(f, hint_area, wizard);
}

fn render_progress_dots(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let mut spans = vec![Span::raw("  ")];
    for (i, state) in wizard.progress().iter().enumerate() {
        let (symbol, style) = match state {
            ProgressState::Completed => ("✓", Style::default().fg(Color::Green).bold()),
            ProgressState::Active => ("●", Style::default().fg(Color::Cyan).bold()),
            ProgressState::Upcoming => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(symbol, style));
        if i + 1 < wizard.step_count() {
            spans.push(Span::styled("──", Style::default().fg(Color::DarkGray)));
        }
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        wizard.current_card().subtitle,
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_card_fields(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let card = wizard.current_card();
    let dimmed = !wizard.is_interactive();

    let mut lines = Vec::with_capacity(card.fields.len() + 2);
    lines.push(Line::from(""));

    for (i, field) in card.fields.iter().enumerate() {
        let focused = i == wizard.focus && !dimmed;
        let invalid = wizard.invalid.contains(&field.id);

        let marker = if focused { "▸ " } else { "  " };
        let label_style = if invalid {
            Style::default().fg(Color::Red).bold()
        } else if focused {
            Style::default().fg(Color::White).bold()
        } else if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value_style = if invalid {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<38}", field.label), label_style),
            Span::styled(field_value_text(wizard, field), value_style),
        ];
        if invalid {
            spans.push(Span::styled("  required", Style::default().fg(Color::Red)));
        }
        lines.push(Line::from(spans));
    }

    if wizard.submitting {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Processing your assessment...",
            Style::default().fg(Color::Yellow).bold(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn field_value_text(wizard: &WizardState, field: &FieldSpec) -> String {
    match field.kind {
        FieldKind::Number { unit, .. } => match wizard.form.get(field.id) {
            Some(v) if !v.is_empty() => {
                if unit.is_empty() {
                    v.to_string()
                } else {
                    format!("{} {}", v, unit)
                }
            }
            _ => "—".to_string(),
        },
        FieldKind::Choice { options } => {
            let selected = wizard
                .form
                .get(field.id)
                .and_then(|v| options.iter().find(|(_, value)| *value == v));
            match selected {
                Some((label, _)) => format!("◂ {} ▸", label),
                None => "◂ — ▸".to_string(),
            }
        }
    }
}

fn render_help_bar(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled("Enter", key)];
    spans.push(Span::styled(
        if wizard.is_last_step() { " submit  " } else { " next  " },
        text,
    ));
    spans.push(Span::styled("↑/↓", key));
    spans.push(Span::styled(" field  ", text));
    spans.push(Span::styled("◂/▸", key));
    spans.push(Span::styled(" choose  ", text));
    if wizard.current_index > 0 {
        spans.push(Span::styled("Bksp", key));
        spans.push(Span::styled(" delete/back  ", text));
    }
    spans.push(Span::styled("Q/Esc", key));
    spans.push(Span::styled(" quit", text));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(40, 7, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit CardioCheck? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Are you sure you want to quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}
