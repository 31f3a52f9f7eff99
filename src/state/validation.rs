//! Field validation for quote requests

use super::quote::{QuoteField, QuoteRequest};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const INVALID_EMAIL: &str = "Email inválido";

/// Per-field error messages, present only for failing fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub city_state: Option<&'static str>,
    pub brand: Option<&'static str>,
    pub model: Option<&'static str>,
    pub year: Option<&'static str>,
    pub plate: Option<&'static str>,
    pub engine_size: Option<&'static str>,
    pub transmission: Option<&'static str>,
    pub usage: Option<&'static str>,
}

impl ValidationErrors {
    fn slot(&mut self, field: QuoteField) -> &mut Option<&'static str> {
        match field {
            QuoteField::Name => &mut self.name,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Email => &mut self.email,
            QuoteField::CityState => &mut self.city_state,
            QuoteField::Brand => &mut self.brand,
            QuoteField::Model => &mut self.model,
            QuoteField::Year => &mut self.year,
            QuoteField::Plate => &mut self.plate,
            QuoteField::EngineSize => &mut self.engine_size,
            QuoteField::Transmission => &mut self.transmission,
            QuoteField::Usage => &mut self.usage,
        }
    }

    pub fn get(&self, field: QuoteField) -> Option<&'static str> {
        match field {
            QuoteField::Name => self.name,
            QuoteField::Phone => self.phone,
            QuoteField::Email => self.email,
            QuoteField::CityState => self.city_state,
            QuoteField::Brand => self.brand,
            QuoteField::Model => self.model,
            QuoteField::Year => self.year,
            QuoteField::Plate => self.plate,
            QuoteField::EngineSize => self.engine_size,
            QuoteField::Transmission => self.transmission,
            QuoteField::Usage => self.usage,
        }
    }

    pub fn set(&mut self, field: QuoteField, message: &'static str) {
        *self.slot(field) = Some(message);
    }

    /// Drop the error for one field, leaving the others in place
    pub fn clear(&mut self, field: QuoteField) {
        *self.slot(field) = None;
    }

    /// Failing fields and their messages, in display order
    pub fn iter(&self) -> impl Iterator<Item = (QuoteField, &'static str)> + '_ {
        QuoteField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|msg| (field, msg)))
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Message shown when a field is left blank
pub fn required_message(field: QuoteField) -> &'static str {
    match field {
        QuoteField::Name => "Nome é obrigatório",
        QuoteField::Phone => "Telefone é obrigatório",
        QuoteField::Email => "Email é obrigatório",
        QuoteField::CityState => "Cidade e Estado são obrigatórios",
        QuoteField::Brand => "Marca é obrigatória",
        QuoteField::Model => "Modelo é obrigatório",
        QuoteField::Year => "Ano é obrigatório",
        QuoteField::Plate => "Placa é obrigatória",
        QuoteField::EngineSize => "Motorização é obrigatória",
        QuoteField::Transmission => "Câmbio é obrigatório",
        QuoteField::Usage => "Tipo de uso é obrigatório",
    }
}

/// `local@domain.tld` with no whitespace or extra `@`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check every field of the request.
///
/// Rules are independent of each other: blank text (after trimming) or a
/// missing selection is an error, and a non-blank email must also look like
/// an address. The result is empty exactly when the request can be sent.
pub fn validate(request: &QuoteRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in QuoteField::ALL {
        if request.is_blank(field) {
            errors.set(field, required_message(field));
        }
    }

    if errors.email.is_none() && !is_valid_email(&request.email) {
        errors.set(QuoteField::Email, INVALID_EMAIL);
    }

    errors
}
