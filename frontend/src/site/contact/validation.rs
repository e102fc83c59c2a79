//! Contact form rules. Values are trimmed first; the first failing rule wins.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-+()]{6,}$").expect("phone pattern compiles"));

/// Text fields of the form, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

/// Inline error shown under a field; `Display` is the visitor-facing text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Dieses Feld ist erforderlich.")]
    Required,
    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein.")]
    InvalidEmail,
    #[error("Bitte geben Sie eine gültige Telefonnummer ein.")]
    InvalidPhone,
    #[error("Ihre Nachricht sollte mindestens 10 Zeichen enthalten.")]
    MessageTooShort,
    #[error("Bitte stimmen Sie der Datenschutzerklärung zu.")]
    ConsentMissing,
}

pub fn validate_field(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return if field.is_required() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }
    match field {
        Field::Email if !EMAIL_PATTERN.is_match(value) => Err(ValidationError::InvalidEmail),
        Field::Phone if !PHONE_PATTERN.is_match(value) => Err(ValidationError::InvalidPhone),
        Field::Message if value.chars().count() < MESSAGE_MIN_CHARS => {
            Err(ValidationError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
}

impl ContactValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

/// Outcome of validating the whole form on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormReport {
    pub errors: BTreeMap<Field, ValidationError>,
    pub consent: Option<ValidationError>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.consent.is_none()
    }

    /// The field to focus: the first invalid one in form order.
    pub fn first_invalid(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }
}

pub fn validate_form(values: &ContactValues) -> FormReport {
    let errors = Field::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, values.get(field))
                .err()
                .map(|error| (field, error))
        })
        .collect();
    let consent = (!values.consent).then_some(ValidationError::ConsentMissing);
    FormReport { errors, consent }
}
