//! Tests for the wizard state machine: validation gating, navigation,
//! progress reporting, reset, and the two-phase card transition

use std::time::{Duration, Instant};

use cardiocheck::assessment::form::{cards, FieldId, FieldKind};
use cardiocheck::cli::wizard::{
    status_from_notices, ProgressState, Transition, WizardState, ENTER_DURATION, EXIT_DURATION,
};

/// Fill every field on the wizard's current card with a valid value
fn fill_current_card(wizard: &mut WizardState) {
    let card = cards()[wizard.current_index];
    for field in card.fields {
        match field.kind {
            FieldKind::Number { min, .. } => wizard.set_field(field.id, min.to_string()),
            FieldKind::Choice { options } => wizard.set_field(field.id, options[0].1),
        }
    }
}

/// Drive the transition to completion with explicit times
fn settle(wizard: &mut WizardState, from: Instant) -> Instant {
    let after_exit = from + EXIT_DURATION;
    wizard.tick(after_exit);
    let after_enter = after_exit + ENTER_DURATION;
    wizard.tick(after_enter);
    after_enter
}

#[test]
fn test_advance_blocked_by_empty_required_field() {
    let mut wizard = WizardState::new();
    let now = Instant::now();

    let advanced = wizard.advance(now);

    assert!(!advanced, "Advance should fail with empty required fields");
    assert_eq!(wizard.current_index, 0, "Step should not change");
    assert!(
        !wizard.invalid.is_empty(),
        "Empty required fields should be flagged invalid"
    );
    assert_eq!(
        wizard.transition,
        Transition::Idle,
        "No transition should start on failed validation"
    );
}

#[test]
fn test_advance_focuses_first_invalid_field() {
    let mut wizard = WizardState::new();
    // Fill everything except the first field
    fill_current_card(&mut wizard);
    wizard.form.set(FieldId::Age, "");
    wizard.focus = 3;

    wizard.advance(Instant::now());

    assert_eq!(wizard.invalid, vec![FieldId::Age]);
    assert_eq!(wizard.focus, 0, "Focus should jump to the first invalid field");
}

#[test]
fn test_advance_moves_exactly_one_step() {
    let mut wizard = WizardState::new();
    fill_current_card(&mut wizard);
    let now = Instant::now();

    assert!(wizard.advance(now), "Advance should succeed on a filled card");
    settle(&mut wizard, now);

    assert_eq!(wizard.current_index, 1, "Advance should move forward one card");
}

#[test]
fn test_back_skips_validation() {
    let mut wizard = WizardState::new();
    fill_current_card(&mut wizard);
    let now = Instant::now();
    wizard.advance(now);
    let now = settle(&mut wizard, now);

    // Card 2 is completely empty, back must still work
    assert!(wizard.back(now), "Back should never validate");
    settle(&mut wizard, now);
    assert_eq!(wizard.current_index, 0);
}

#[test]
fn test_back_refused_on_first_card() {
    let mut wizard = WizardState::new();
    assert!(!wizard.back(Instant::now()), "Back has no effect on card 1");
    assert_eq!(wizard.current_index, 0);
}

#[test]
fn test_filling_field_clears_invalid_flag() {
    let mut wizard = WizardState::new();
    wizard.advance(Instant::now());
    assert!(wizard.invalid.contains(&FieldId::Age));

    wizard.set_field(FieldId::Age, "45");

    assert!(
        !wizard.invalid.contains(&FieldId::Age),
        "Entering a value should clear the field's invalid flag"
    );
}

#[test]
fn test_progress_has_exactly_one_active_step() {
    let mut wizard = WizardState::new();
    let mut now = Instant::now();

    for _ in 0..cards().len() {
        let progress = wizard.progress();
        let active = progress
            .iter()
            .filter(|s| **s == ProgressState::Active)
            .count();
        assert_eq!(active, 1, "Exactly one step should be active");
        assert_eq!(
            progress[wizard.current_index],
            ProgressState::Active,
            "The active dot should match the current index"
        );
        for (i, state) in progress.iter().enumerate() {
            if i < wizard.current_index {
                assert_eq!(*state, ProgressState::Completed);
            } else if i > wizard.current_index {
                assert_eq!(*state, ProgressState::Upcoming);
            }
        }

        if !wizard.is_last_step() {
            fill_current_card(&mut wizard);
            wizard.advance(now);
            now = settle(&mut wizard, now);
        }
    }
}

#[test]
fn test_no_card_interactive_during_transition() {
    let mut wizard = WizardState::new();
    fill_current_card(&mut wizard);
    let now = Instant::now();
    wizard.advance(now);

    // Exit phase: outgoing card deactivated
    assert!(!wizard.is_interactive());
    assert_eq!(wizard.active_card(), None);

    // Still exiting just before the boundary
    wizard.tick(now + EXIT_DURATION - Duration::from_millis(1));
    assert_eq!(wizard.current_index, 0, "Index flips only after the exit phase");
    assert_eq!(wizard.active_card(), None);

    // Enter phase: incoming card present but not yet interactive
    let after_exit = now + EXIT_DURATION;
    wizard.tick(after_exit);
    assert_eq!(wizard.current_index, 1);
    assert!(
        matches!(wizard.transition, Transition::Entering { .. }),
        "Exit phase should hand over to the enter phase"
    );
    assert_eq!(wizard.active_card(), None);

    // Enter phase complete: incoming card becomes interactive
    wizard.tick(after_exit + ENTER_DURATION);
    assert_eq!(wizard.active_card(), Some(1));
}

#[test]
fn test_input_ignored_mid_transition() {
    let mut wizard = WizardState::new();
    fill_current_card(&mut wizard);
    let now = Instant::now();
    wizard.advance(now);

    assert!(
        !wizard.advance(now + Duration::from_millis(10)),
        "Advance should be refused mid-transition"
    );
    assert!(
        !wizard.back(now + Duration::from_millis(10)),
        "Back should be refused mid-transition"
    );
}

#[test]
fn test_reset_clears_answers_and_returns_to_first_card() {
    let mut wizard = WizardState::new();
    let mut now = Instant::now();
    for _ in 0..cards().len() - 1 {
        fill_current_card(&mut wizard);
        wizard.advance(now);
        now = settle(&mut wizard, now);
    }
    fill_current_card(&mut wizard);
    assert_eq!(wizard.current_index, cards().len() - 1);

    wizard.reset();

    assert_eq!(wizard.current_index, 0, "Reset should return to card 1");
    assert!(wizard.form.is_empty(), "Reset should clear all answers");
    assert!(wizard.invalid.is_empty());
    assert_eq!(wizard.transition, Transition::Idle);
}

#[test]
fn test_submit_only_on_last_card() {
    let mut wizard = WizardState::new();
    fill_current_card(&mut wizard);
    assert!(!wizard.try_submit(), "Submit is refused before the last card");
}

#[test]
fn test_submit_validates_final_card() {
    let mut wizard = WizardState::new();
    let mut now = Instant::now();
    for _ in 0..cards().len() - 1 {
        fill_current_card(&mut wizard);
        wizard.advance(now);
        now = settle(&mut wizard, now);
    }

    assert!(
        !wizard.try_submit(),
        "Submit should fail while required fields are empty"
    );
    assert!(!wizard.submitting);

    fill_current_card(&mut wizard);
    assert!(wizard.try_submit(), "Submit should succeed on a filled card");
    assert!(wizard.submitting, "Submit control disabled while processing");
    assert!(!wizard.is_interactive());
}

#[test]
fn test_optional_fields_do_not_block_submit() {
    let mut wizard = WizardState::new();
    let mut now = Instant::now();
    for _ in 0..cards().len() - 1 {
        fill_current_card(&mut wizard);
        wizard.advance(now);
        now = settle(&mut wizard, now);
    }
    fill_current_card(&mut wizard);
    // Education and income are optional
    wizard.form.set(FieldId::Education, "");
    wizard.form.set(FieldId::Income, "");

    assert!(
        wizard.try_submit(),
        "Optional fields should not block submission"
    );
}

#[test]
fn test_out_of_range_number_blocks_advance() {
    let mut wizard = WizardState::new();
    fill_current_card(&mut wizard);
    // Age field accepts 18-120
    wizard.set_field(FieldId::Age, "9999");

    assert!(
        !wizard.advance(Instant::now()),
        "A value above the field's range should block the transition"
    );
    assert_eq!(wizard.current_index, 0);
    assert!(wizard.invalid.contains(&FieldId::Age));

    wizard.set_field(FieldId::Age, "10");
    assert!(
        !wizard.advance(Instant::now()),
        "A value below the field's range should block the transition"
    );

    wizard.set_field(FieldId::Age, "45");
    assert!(wizard.advance(Instant::now()), "An in-range value should pass");
}

#[test]
fn test_empty_optional_number_is_accepted() {
    let mut wizard = WizardState::new();
    let mut now = Instant::now();
    for _ in 0..cards().len() - 1 {
        fill_current_card(&mut wizard);
        wizard.advance(now);
        now = settle(&mut wizard, now);
    }
    fill_current_card(&mut wizard);
    // Education is optional, but a filled value must still be in 1-6
    wizard.form.set(FieldId::Education, "9");
    assert!(!wizard.try_submit(), "An out-of-range optional value should block");

    wizard.form.set(FieldId::Education, "");
    assert!(wizard.try_submit(), "An empty optional field should not block");
}

#[test]
fn test_status_line_covers_all_notices() {
    assert_eq!(status_from_notices(&[]), None);

    let notices = vec![
        "health metrics unavailable; using local values".to_string(),
        "prediction unavailable; using local values".to_string(),
    ];
    let status = status_from_notices(&notices).expect("notices should produce a status");
    assert!(status.contains("health metrics"));
    assert!(
        status.contains("prediction"),
        "Every fallback notice should appear in the status line: {}",
        status
    );
}

#[test]
fn test_choice_cycling_wraps() {
    let mut wizard = WizardState::new();
    // Sex is the second field on the first card
    wizard.focus = 1;

    wizard.cycle_choice(1);
    assert_eq!(wizard.form.get(FieldId::Sex), Some("0"));
    wizard.cycle_choice(1);
    assert_eq!(wizard.form.get(FieldId::Sex), Some("1"));
    wizard.cycle_choice(1);
    assert_eq!(wizard.form.get(FieldId::Sex), Some("0"), "Cycling should wrap");
    wizard.cycle_choice(-1);
    assert_eq!(wizard.form.get(FieldId::Sex), Some("1"), "Backward cycling should wrap");
}

#[test]
fn test_digit_entry_and_deletion() {
    let mut wizard = WizardState::new();
    wizard.focus = 0; // age

    wizard.type_digit('4');
    wizard.type_digit('2');
    assert_eq!(wizard.form.get(FieldId::Age), Some("42"));

    assert!(wizard.delete_digit());
    assert_eq!(wizard.form.get(FieldId::Age), Some("4"));
    assert!(wizard.delete_digit());
    assert!(
        !wizard.delete_digit(),
        "Deleting from an empty field should report nothing to delete"
    );
}
