//! Per-step validation producing field-keyed messages.
//!
//! Validators are pure: they read a step record and report every validated
//! field, with an empty message for fields that pass. A fully passing record
//! yields `Ok(())`, so callers can tell "no errors" apart from a mapping that
//! happens to contain only some failures.

mod rules;

use std::collections::BTreeMap;

pub use self::rules::{
    AADHAR_MESSAGE, AADHAR_PATTERN, EMAIL_MESSAGE, EMAIL_PATTERN, NAME_MESSAGE, NAME_PATTERN,
    PAN_MESSAGE, PAN_PATTERN, PASSWORD_MAX, PASSWORD_MIN, PASSWORD_TOO_LONG_MESSAGE,
    PASSWORD_TOO_SHORT_MESSAGE, PHONE_MESSAGE, PHONE_PATTERN, USERNAME_MESSAGE, USERNAME_PATTERN,
    check, is_valid_aadhar, is_valid_email, is_valid_name, is_valid_pan, is_valid_password,
    is_valid_phone, is_valid_username,
};
use super::{CredentialInput, Field, ProfileInput};

/// Field-keyed validation messages for one submit attempt.
///
/// An empty message marks a field that passed. The whole value is replaced on
/// every attempt; messages are never merged across attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    fn record(&mut self, field: Field, message: Option<&str>) {
        self.0.insert(field, message.unwrap_or_default().to_owned());
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.values().all(String::is_empty) {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Message for a failing field, or `None` when it passed or was not
    /// validated.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Fields whose message is non-empty, in field order.
    pub fn failing_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
    }

    /// Every validated field with its message, empty for passing fields.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failing_fields().next().is_none()
    }
}

/// Validate the credentials step.
///
/// # Errors
///
/// Returns [`ValidationErrors`] covering username, email and password when at
/// least one of them fails its rule.
///
/// # Examples
/// ```
/// use signup::domain::{CredentialInput, Field, validate_credentials};
///
/// assert!(validate_credentials(&CredentialInput::new("johndoe45", "A@B.com", "secret1")).is_ok());
///
/// let errors = validate_credentials(&CredentialInput::new("johndoe45", "A@B.com", "short"))
///     .expect_err("password too short");
/// assert_eq!(
///     errors.message(Field::Password),
///     Some("Password must be more than 6 characters")
/// );
/// assert_eq!(errors.message(Field::Username), None);
/// ```
pub fn validate_credentials(input: &CredentialInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.record(Field::Username, check(Field::Username, &input.username));
    errors.record(Field::Email, check(Field::Email, &input.email));
    errors.record(Field::Password, check(Field::Password, &input.password));
    errors.into_result()
}

/// Validate the profile step.
///
/// Country and city are selections and are not reported.
///
/// # Errors
///
/// Returns [`ValidationErrors`] covering names, phone, PAN and Aadhar when at
/// least one of them fails its rule.
pub fn validate_profile(input: &ProfileInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.record(Field::FirstName, check(Field::FirstName, &input.firstname));
    errors.record(Field::LastName, check(Field::LastName, &input.lastname));
    errors.record(Field::Phone, check(Field::Phone, &input.phone));
    errors.record(Field::Pan, check(Field::Pan, &input.pan));
    errors.record(Field::Aadhar, check(Field::Aadhar, &input.aadhar));
    errors.into_result()
}

#[cfg(test)]
mod tests;
