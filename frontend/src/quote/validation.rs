use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::field::FieldName;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern compiles"));

/// A failed check on a single field. Carries the text shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty after trimming.
    #[error("{0}")]
    Required(&'static str),
    /// Field has content but the wrong shape.
    #[error("{0}")]
    Format(&'static str),
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required(msg) | ValidationError::Format(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    EmailShape(&'static str),
    DigitsOnly(&'static str),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match *self {
            Rule::Required(msg) => {
                if value.trim().is_empty() {
                    return Err(ValidationError::Required(msg));
                }
            }
            Rule::EmailShape(msg) => {
                if !EMAIL_SHAPE.is_match(value) {
                    return Err(ValidationError::Format(msg));
                }
            }
            Rule::DigitsOnly(msg) => {
                if !DIGITS_ONLY.is_match(value) {
                    return Err(ValidationError::Format(msg));
                }
            }
        }
        Ok(())
    }
}

const NAME_RULES: &[Rule] = &[Rule::Required("Name is required.")];

const EMAIL_RULES: &[Rule] = &[
    Rule::Required("Email is required."),
    Rule::EmailShape("Please enter a valid email address."),
];

const PHONE_RULES: &[Rule] = &[
    Rule::Required("WhatsApp number is required."),
    Rule::DigitsOnly("Please enter numbers only."),
];

const COUNTRY_CODE_RULES: &[Rule] = &[Rule::Required("Please select a country code.")];

/// Ordered rule chain for a field. The first failing rule wins.
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::Name => NAME_RULES,
        FieldName::Email => EMAIL_RULES,
        FieldName::Phone => PHONE_RULES,
        FieldName::CountryCode => COUNTRY_CODE_RULES,
        FieldName::Message => &[],
    }
}

pub fn validate_field(field: FieldName, value: &str) -> Result<(), ValidationError> {
    rules_for(field).iter().try_for_each(|rule| rule.check(value))
}
