//! Step controller for the two-step signup form.
//!
//! [`SignupFlow`] owns whichever step is active and exposes the three user
//! actions: edit a field, press "Next" and press "Create account". Step
//! records, enablement and validation messages stay inside the flow; the
//! confirmation prompt and navigation are injected per call through the
//! domain ports.

mod form_state;
mod steps;

use std::mem;

use thiserror::Error;

pub use self::form_state::{FormError, FormRecord, FormState, StepKind};
pub use self::steps::{
    AdvanceOutcome, CredentialsStep, ProfileStep, SubmitError, SubmitFailure, SubmitOutcome,
};
use crate::domain::ports::{Confirmation, ConfirmationError, NavigationError, Navigator};
use crate::domain::{
    AttemptId, CREDENTIAL_FIELDS, Field, PROFILE_FIELDS, ReferenceData, ValidationErrors,
};

/// Outcome of a step action that did not fail in a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// "Next" moved the flow to the profile step.
    Advanced,
    /// The action was disabled because a field is empty; nothing changed.
    Disabled,
    /// Validation failed; read the messages with [`SignupFlow::errors`].
    Invalid,
    /// The confirmation prompt was declined; nothing changed.
    Declined,
    /// The record was handed to the display page.
    Submitted,
}

/// Errors returned by [`SignupFlow`] actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The action is not offered by the active step.
    #[error("'{action}' is not available on the {step} step")]
    WrongStep {
        /// Action that was requested.
        action: &'static str,
        /// Step that was active.
        step: StepKind,
    },
    /// The flow already handed its record to the display page.
    #[error("the registration was already submitted")]
    AlreadySubmitted,
    /// A field edit addressed the wrong step.
    #[error(transparent)]
    Form(#[from] FormError),
    /// The confirmation prompt failed; the profile step is unchanged.
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
    /// Navigation to the display page failed; the profile step is unchanged.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl From<SubmitFailure> for FlowError {
    fn from(failure: SubmitFailure) -> Self {
        match failure {
            SubmitFailure::Confirmation(error) => Self::Confirmation(error),
            SubmitFailure::Navigation(error) => Self::Navigation(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Credentials(CredentialsStep),
    Profile(ProfileStep),
    Submitted,
}

impl Step {
    const fn kind(&self) -> StepKind {
        match self {
            Self::Credentials(_) => StepKind::Credentials,
            Self::Profile(_) => StepKind::Profile,
            Self::Submitted => StepKind::Submitted,
        }
    }
}

/// One signup attempt, from the empty credentials step to submission.
///
/// # Examples
/// ```
/// use signup::domain::{Field, ReferenceData};
/// use signup::flow::{Attempt, SignupFlow, StepKind};
///
/// let mut flow = SignupFlow::new(ReferenceData::default());
/// assert!(!flow.is_enabled());
///
/// flow.set_field(Field::Username, "johndoe45").unwrap();
/// flow.set_field(Field::Email, "John@Example.com").unwrap();
/// flow.set_field(Field::Password, "secret1").unwrap();
/// assert_eq!(flow.next().unwrap(), Attempt::Advanced);
/// assert_eq!(flow.step(), StepKind::Profile);
/// assert_eq!(flow.value(Field::City), Some("Kolkata"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupFlow {
    attempt: AttemptId,
    reference: ReferenceData,
    step: Step,
}

impl SignupFlow {
    /// Start a new attempt on the empty credentials step.
    #[must_use]
    pub fn new(reference: ReferenceData) -> Self {
        Self::with_attempt(AttemptId::generate(), reference)
    }

    /// Start a new attempt with a caller-chosen identifier.
    #[must_use]
    pub fn with_attempt(attempt: AttemptId, reference: ReferenceData) -> Self {
        Self {
            attempt,
            reference,
            step: Step::Credentials(CredentialsStep::mount(attempt, reference)),
        }
    }

    /// Identifier attached to this attempt's log events.
    #[must_use]
    pub const fn attempt_id(&self) -> AttemptId {
        self.attempt
    }

    /// Selection lists offered by the profile step.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Active step.
    #[must_use]
    pub const fn step(&self) -> StepKind {
        self.step.kind()
    }

    /// Inputs of the active step, in display order.
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        match self.step {
            Step::Credentials(_) => CREDENTIAL_FIELDS,
            Step::Profile(_) => PROFILE_FIELDS,
            Step::Submitted => &[],
        }
    }

    /// Current value of `field` on the active step.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        match &self.step {
            Step::Credentials(step) => step.form().value(field),
            Step::Profile(step) => step.form().value(field),
            Step::Submitted => None,
        }
    }

    /// Whether the active step's primary action may be pressed.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match &self.step {
            Step::Credentials(step) => step.form().is_enabled(),
            Step::Profile(step) => step.form().is_enabled(),
            Step::Submitted => false,
        }
    }

    /// Messages from the active step's latest rejected attempt.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match &self.step {
            Step::Credentials(step) => step.errors(),
            Step::Profile(step) => step.errors(),
            Step::Submitted => None,
        }
    }

    /// Message shown under `field`, if it failed the latest attempt.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors().and_then(|errors| errors.message(field))
    }

    /// Edit one field of the active step.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Form`] if the field belongs to the other step and
    /// [`FlowError::AlreadySubmitted`] once the record has been handed on.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FlowError> {
        match &mut self.step {
            Step::Credentials(step) => step.form_mut().set_field(field, value)?,
            Step::Profile(step) => step.form_mut().set_field(field, value)?,
            Step::Submitted => return Err(FlowError::AlreadySubmitted),
        }
        Ok(())
    }

    /// Press "Next" on the credentials step.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::WrongStep`] when the profile step is active and
    /// [`FlowError::AlreadySubmitted`] once the record has been handed on.
    #[expect(
        clippy::should_implement_trait,
        reason = "named after the form's Next action, not iteration"
    )]
    pub fn next(&mut self) -> Result<Attempt, FlowError> {
        let credentials = match mem::replace(&mut self.step, Step::Submitted) {
            Step::Credentials(credentials) => credentials,
            other => {
                let error = wrong_step("next", &other);
                self.step = other;
                return Err(error);
            }
        };

        let (next, attempt) = match credentials.next() {
            AdvanceOutcome::Advanced(profile) => (Step::Profile(profile), Attempt::Advanced),
            AdvanceOutcome::Disabled(kept) => (Step::Credentials(kept), Attempt::Disabled),
            AdvanceOutcome::Invalid(kept) => (Step::Credentials(kept), Attempt::Invalid),
        };
        self.step = next;
        Ok(attempt)
    }

    /// Press "Create account" on the profile step.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::WrongStep`] on the credentials step,
    /// [`FlowError::AlreadySubmitted`] after a successful submission, and
    /// [`FlowError::Confirmation`] or [`FlowError::Navigation`] when a
    /// collaborator fails. Collaborator failures keep the profile step and its
    /// values.
    pub fn submit<C, N>(
        &mut self,
        confirmation: &mut C,
        navigator: &mut N,
    ) -> Result<Attempt, FlowError>
    where
        C: Confirmation + ?Sized,
        N: Navigator + ?Sized,
    {
        let profile = match mem::replace(&mut self.step, Step::Submitted) {
            Step::Profile(profile) => profile,
            other => {
                let error = wrong_step("create account", &other);
                self.step = other;
                return Err(error);
            }
        };

        let (next, attempt) = match profile.submit(confirmation, navigator) {
            Ok(SubmitOutcome::Submitted) => (Step::Submitted, Attempt::Submitted),
            Ok(SubmitOutcome::Disabled(kept)) => (Step::Profile(kept), Attempt::Disabled),
            Ok(SubmitOutcome::Invalid(kept)) => (Step::Profile(kept), Attempt::Invalid),
            Ok(SubmitOutcome::Declined(kept)) => (Step::Profile(kept), Attempt::Declined),
            Err(error) => {
                let (kept, failure) = error.into_parts();
                self.step = Step::Profile(kept);
                return Err(failure.into());
            }
        };
        self.step = next;
        Ok(attempt)
    }
}

const fn wrong_step(action: &'static str, step: &Step) -> FlowError {
    match step {
        Step::Submitted => FlowError::AlreadySubmitted,
        other => FlowError::WrongStep {
            action,
            step: other.kind(),
        },
    }
}
