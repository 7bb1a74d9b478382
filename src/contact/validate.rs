//! Client-side contact form validation.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::MIN_MESSAGE_CHARS;
use crate::effect::Effect;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email.";
pub const MESSAGE_TOO_SHORT: &str = "Please include at least 10 characters.";

/// Contact form inputs, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input inside the form.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Raw values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot with
/// at least one character on each side somewhere in the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check one field, returning its error message on failure.
///
/// # Errors
///
/// Returns the user-facing message for the failed check.
pub fn check(field: Field, value: &str) -> Result<(), &'static str> {
    match field {
        Field::Name if value.trim().is_empty() => Err(NAME_REQUIRED),
        Field::Email if !is_valid_email(value) => Err(EMAIL_INVALID),
        Field::Message if value.trim().chars().count() < MIN_MESSAGE_CHARS => Err(MESSAGE_TOO_SHORT),
        _ => Ok(()),
    }
}

/// Result of checking every field. All checks run even after a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    results: Vec<(Field, Result<(), &'static str>)>,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    /// Failed fields and their messages, in validation order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.results
            .iter()
            .filter_map(|&(field, result)| result.err().map(|message| (field, message)))
    }

    /// Show or clear the error beside every field.
    #[must_use]
    pub fn effects(&self) -> Vec<Effect> {
        self.results
            .iter()
            .map(|&(field, result)| match result {
                Ok(()) => Effect::ClearFieldError(field),
                Err(message) => Effect::ShowFieldError { field, message },
            })
            .collect()
    }
}

/// Validate name, email, and message, in that order.
#[must_use]
pub fn validate(fields: &FormFields) -> Validation {
    Validation {
        results: Field::ALL
            .iter()
            .map(|&field| (field, check(field, fields.value(field))))
            .collect(),
    }
}
