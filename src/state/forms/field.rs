//! Editing operations on individual quote fields

use crate::state::quote::{QuoteField, QuoteRequest};

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
}

impl FieldKind {
    pub fn of(field: QuoteField) -> Self {
        if field.is_choice() {
            FieldKind::Choice
        } else {
            FieldKind::Text
        }
    }
}

/// Push a character to the field value.
///
/// Selectors take a space as "next option" and ignore everything else.
/// Returns true when the value changed.
pub fn push_char(request: &mut QuoteRequest, field: QuoteField, c: char) -> bool {
    match FieldKind::of(field) {
        FieldKind::Text => match request.text_mut(field) {
            Some(text) => {
                text.push(c);
                true
            }
            None => false,
        },
        FieldKind::Choice if c == ' ' => {
            request.cycle_choice(field, true);
            true
        }
        FieldKind::Choice => false,
    }
}

/// Remove the last character from the field value.
/// Backspace on a selector clears the selection.
pub fn pop_char(request: &mut QuoteRequest, field: QuoteField) -> bool {
    match FieldKind::of(field) {
        FieldKind::Text => request
            .text_mut(field)
            .and_then(|text| text.pop())
            .is_some(),
        FieldKind::Choice => clear(request, field),
    }
}

/// Step a selector; text fields are not affected
pub fn cycle(request: &mut QuoteRequest, field: QuoteField, forward: bool) -> bool {
    if FieldKind::of(field) == FieldKind::Choice {
        request.cycle_choice(field, forward);
        true
    } else {
        false
    }
}

/// Clear the field value
pub fn clear(request: &mut QuoteRequest, field: QuoteField) -> bool {
    match field {
        QuoteField::Transmission => request.transmission.take().is_some(),
        QuoteField::Usage => request.usage.take().is_some(),
        other => request.text_mut(other).is_some_and(|text| {
            let had_value = !text.is_empty();
            text.clear();
            had_value
        }),
    }
}
