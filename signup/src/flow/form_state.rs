//! Field values of the active step plus the derived enablement flag.
//!
//! Enablement only says whether the step's primary action may be pressed: it
//! is true once no field holds an empty string. It says nothing about whether
//! the values are valid.

use std::fmt;

use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::{CREDENTIAL_FIELDS, CredentialInput, Field, PROFILE_FIELDS, ProfileInput};

/// The two steps of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Account credentials (initial step).
    Credentials,
    /// Personal and government-ID details.
    Profile,
    /// The record has been handed to the display page.
    Submitted,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Credentials => "credentials",
            Self::Profile => "profile",
            Self::Submitted => "submitted",
        })
    }
}

/// Errors raised by field mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field does not belong to the active step.
    #[error("field '{field}' is not part of the {step} step")]
    UnknownField {
        /// Field that was addressed.
        field: Field,
        /// Step that was active.
        step: StepKind,
    },
}

/// A step record whose fields can be read and replaced by [`Field`].
pub trait FormRecord {
    /// Step this record belongs to.
    const STEP: StepKind;

    /// Fields of the step, in display order.
    const FIELDS: &'static [Field];

    /// Current value of `field`, or `None` if it is not part of the step.
    fn value(&self, field: Field) -> Option<&str>;

    /// Replace `field` with `value`. Returns false, leaving the record
    /// untouched, if the field is not part of the step.
    fn replace(&mut self, field: Field, value: String) -> bool;
}

impl FormRecord for CredentialInput {
    const STEP: StepKind = StepKind::Credentials;
    const FIELDS: &'static [Field] = CREDENTIAL_FIELDS;

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(self.username.as_str()),
            Field::Email => Some(self.email.as_str()),
            Field::Password => Some(self.password.as_str()),
            _ => None,
        }
    }

    fn replace(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            // Dropping the old buffer wipes it.
            Field::Password => self.password = Zeroizing::new(value),
            _ => return false,
        }
        true
    }
}

impl FormRecord for ProfileInput {
    const STEP: StepKind = StepKind::Profile;
    const FIELDS: &'static [Field] = PROFILE_FIELDS;

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(self.firstname.as_str()),
            Field::LastName => Some(self.lastname.as_str()),
            Field::Phone => Some(self.phone.as_str()),
            Field::Country => Some(self.country.as_str()),
            Field::City => Some(self.city.as_str()),
            Field::Pan => Some(self.pan.as_str()),
            Field::Aadhar => Some(self.aadhar.as_str()),
            _ => None,
        }
    }

    fn replace(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::FirstName => &mut self.firstname,
            Field::LastName => &mut self.lastname,
            Field::Phone => &mut self.phone,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Pan => &mut self.pan,
            Field::Aadhar => &mut self.aadhar,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Current record of a step and whether its primary action is enabled.
///
/// # Examples
/// ```
/// use signup::domain::{CredentialInput, Field};
/// use signup::flow::FormState;
///
/// let mut form = FormState::new(CredentialInput::default());
/// assert!(!form.is_enabled());
///
/// form.set_field(Field::Username, "johndoe45").unwrap();
/// form.set_field(Field::Email, "a@b.com").unwrap();
/// form.set_field(Field::Password, "x").unwrap();
/// assert!(form.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState<R> {
    record: R,
    enabled: bool,
}

impl<R: FormRecord> FormState<R> {
    /// Wrap a record, deriving enablement from its current values.
    #[must_use]
    pub fn new(record: R) -> Self {
        let enabled = !has_empty_field(&record);
        Self { record, enabled }
    }

    /// Replace exactly one field and recompute enablement.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `field` is not part of this
    /// step; the state is left unchanged.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if !self.record.replace(field, value.into()) {
            return Err(FormError::UnknownField {
                field,
                step: R::STEP,
            });
        }
        self.enabled = !has_empty_field(&self.record);
        debug!(%field, enabled = self.enabled, "form field updated");
        Ok(())
    }

    /// Whether the primary action of the step may be pressed.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current value of `field`, or `None` if it is not part of the step.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        self.record.value(field)
    }

    /// Current record.
    #[must_use]
    pub const fn record(&self) -> &R {
        &self.record
    }

    /// Give up the state, returning the record.
    #[must_use]
    pub fn into_record(self) -> R {
        self.record
    }
}

fn has_empty_field<R: FormRecord>(record: &R) -> bool {
    R::FIELDS
        .iter()
        .any(|field| record.value(*field).is_some_and(str::is_empty))
}
