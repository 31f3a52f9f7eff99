//! Quote form state: field values, inline errors and the focus cursor

use super::field;
use crate::state::quote::{QuoteField, QuoteRequest};
use crate::state::validation::{validate, ValidationErrors};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the submit button row, after the last field
pub const SUBMIT_ROW: usize = QuoteField::ALL.len();

/// The quote form: request values plus the errors shown next to them
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    pub request: QuoteRequest,
    pub errors: ValidationErrors,
    pub active_field_index: usize,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field under the cursor, `None` on the submit row
    pub fn active(&self) -> Option<QuoteField> {
        QuoteField::from_index(self.active_field_index)
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(f) = self.active() {
            if field::push_char(&mut self.request, f, c) {
                self.errors.clear(f);
            }
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(f) = self.active() {
            if field::pop_char(&mut self.request, f) {
                self.errors.clear(f);
            }
        }
    }

    /// Step the active selector forwards or backwards
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(f) = self.active() {
            if field::cycle(&mut self.request, f, forward) {
                self.errors.clear(f);
            }
        }
    }

    /// Move the cursor to a field
    pub fn focus(&mut self, f: QuoteField) {
        self.set_active_field(f.index());
    }

    /// Run the validator, keep its result for display and report whether
    /// the request can be sent. On failure the cursor jumps to the first
    /// invalid field.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.request);
        let first = self.errors.iter().next().map(|(f, _)| f);
        match first {
            Some(f) => {
                self.focus(f);
                false
            }
            None => true,
        }
    }

    /// Back to an empty form with the cursor on the first field
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Form for QuoteForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::quote::{Transmission, UsageType};
    use crate::state::validation::tests::valid_request;

    fn form_at(f: QuoteField) -> QuoteForm {
        let mut form = QuoteForm::new();
        form.focus(f);
        form
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = QuoteForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active(), Some(QuoteField::Name));
            assert!(form.errors.is_empty());
            assert_eq!(form.request, QuoteRequest::default());
        }

        #[test]
        fn test_field_count_includes_submit_row() {
            assert_eq!(QuoteForm::new().field_count(), 12);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = QuoteForm::new();
            for _ in 0..12 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = QuoteForm::new();
            form.prev_field();
            assert!(form.is_submit_row_active());
            assert_eq!(form.active(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = QuoteForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_active_field() {
            let mut form = form_at(QuoteField::Model);
            for c in "Gol".chars() {
                form.input_char(c);
            }
            assert_eq!(form.request.model, "Gol");
            form.backspace();
            assert_eq!(form.request.model, "Go");
        }

        #[test]
        fn test_typing_on_submit_row_is_ignored() {
            let mut form = QuoteForm::new();
            form.set_active_field(SUBMIT_ROW);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.request, QuoteRequest::default());
        }

        #[test]
        fn test_typing_clears_only_that_error() {
            let mut form = QuoteForm::new();
            assert!(!form.validate());
            let before = form.errors.len();

            form.focus(QuoteField::Name);
            for c in "Ana".chars() {
                form.input_char(c);
            }

            assert!(form.errors.name.is_none());
            assert_eq!(form.errors.phone, Some("Telefone é obrigatório"));
            assert_eq!(form.errors.len(), before - 1);
        }

        #[test]
        fn test_typed_character_clears_error() {
            let mut form = QuoteForm::new();
            form.validate();
            form.focus(QuoteField::Email);
            assert!(form.errors.email.is_some());
            form.input_char('a');
            assert!(form.errors.email.is_none());
            assert!(form.errors.name.is_some());
        }

        #[test]
        fn test_selector_change_clears_error() {
            let mut form = QuoteForm::new();
            form.validate();
            form.focus(QuoteField::Usage);
            form.cycle_choice(true);
            assert_eq!(form.request.usage, Some(UsageType::Personal));
            assert!(form.errors.usage.is_none());
            assert!(form.errors.transmission.is_some());
        }

        #[test]
        fn test_cycle_on_text_field_keeps_error() {
            let mut form = QuoteForm::new();
            form.validate();
            form.focus(QuoteField::Year);
            form.cycle_choice(true);
            assert!(form.errors.year.is_some());
        }

        #[test]
        fn test_letters_do_not_change_selector() {
            let mut form = form_at(QuoteField::Transmission);
            form.input_char('M');
            assert_eq!(form.request.transmission, None);
            form.input_char(' ');
            assert_eq!(form.request.transmission, Some(Transmission::Manual));
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_valid_request() {
            let mut form = QuoteForm {
                request: valid_request(),
                ..Default::default()
            };
            assert!(form.validate());
            assert!(form.errors.is_empty());
        }

        #[test]
        fn test_failed_validation_focuses_first_invalid_field() {
            let mut form = QuoteForm {
                request: valid_request(),
                ..Default::default()
            };
            form.request.plate.clear();
            form.request.usage = None;
            form.focus(QuoteField::Name);

            assert!(!form.validate());
            assert_eq!(form.active(), Some(QuoteField::Plate));
        }

        #[test]
        fn test_validate_replaces_stale_errors() {
            let mut form = QuoteForm::new();
            form.validate();
            form.request = valid_request();
            form.request.transmission = Some(Transmission::Automatic);
            assert!(form.validate());
            assert!(form.errors.is_empty());
        }

        #[test]
        fn test_reset_returns_to_empty_form() {
            let mut form = QuoteForm {
                request: valid_request(),
                active_field_index: 5,
                ..Default::default()
            };
            form.errors.set(QuoteField::Year, "Ano é obrigatório");
            form.reset();
            assert_eq!(form.request, QuoteRequest::default());
            assert!(form.errors.is_empty());
            assert_eq!(form.active_field_index, 0);
        }
    }
}
