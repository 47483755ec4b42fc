use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::validation::ValidationError;

/// The fixed set of inputs on the quote form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    CountryCode,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::CountryCode,
        FieldName::Message,
    ];

    /// Fields checked on submit. `Message` is optional.
    pub const REQUIRED: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::CountryCode,
    ];

    /// The `name` attribute used in the markup.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::CountryCode => "country_code",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quote form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Unset,
    Valid,
    Invalid,
}

impl Validity {
    /// Class marker for the input, if any.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Validity::Unset => None,
            Validity::Valid => Some("valid"),
            Validity::Invalid => Some("invalid"),
        }
    }
}

/// Current value of one input plus its validation state.
///
/// The error slot and the validity flag are only ever written together,
/// so an error is present exactly when the field is `Invalid`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormField {
    value: String,
    validity: Validity,
    error: Option<ValidationError>,
}

impl FormField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(ValidationError::message)
    }

    pub fn record(&mut self, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.validity = Validity::Valid;
                self.error = None;
            }
            Err(err) => {
                self.validity = Validity::Invalid;
                self.error = Some(err);
            }
        }
    }

    /// Drops the marker and the message, keeps the value.
    pub fn clear_error(&mut self) {
        self.validity = Validity::Unset;
        self.error = None;
    }

    pub fn reset(&mut self) {
        *self = FormField::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_markup_names() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert_eq!(
            "fax".parse::<FieldName>(),
            Err(UnknownField("fax".to_string()))
        );
    }

    #[test]
    fn test_error_slot_follows_validity() {
        let mut field = FormField::default();
        assert_eq!(field.validity(), Validity::Unset);
        assert!(field.error().is_none());

        field.record(Err(ValidationError::Required("Name is required.")));
        assert_eq!(field.validity(), Validity::Invalid);
        assert_eq!(field.error_message(), Some("Name is required."));

        field.record(Ok(()));
        assert_eq!(field.validity(), Validity::Valid);
        assert!(field.error().is_none());

        field.record(Err(ValidationError::Format("Please enter numbers only.")));
        field.clear_error();
        assert_eq!(field.validity(), Validity::Unset);
        assert!(field.error_message().is_none());
    }
}
