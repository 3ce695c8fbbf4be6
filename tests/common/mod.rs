//! Shared test fixtures

use cardiocheck::assessment::form::{cards, FieldKind, FormData};

/// A form with every field answered: numeric fields get their minimum valid
/// value, choice fields get their first option.
pub fn filled_form() -> FormData {
    let mut form = FormData::new();
    for card in cards() {
        for field in card.fields {
            match field.kind {
                FieldKind::Number { min, .. } => form.set(field.id, min.to_string()),
                FieldKind::Choice { options } => form.set(field.id, options[0].1),
            }
        }
    }
    form
}
