//! Form domain layer
//!
//! Field editing and the quote form state behind the main screen.

mod field;
mod form_state;

pub use field::FieldKind;
pub use form_state::{Form, QuoteForm};

#[cfg(test)]
pub use form_state::SUBMIT_ROW;
