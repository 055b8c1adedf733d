//! The two signup steps and the transitions between them.
//!
//! Transitions consume the current step. A successful "Next" moves the
//! committed credentials into the profile step; a confirmed submission moves
//! the finished [`SessionRecord`] into the navigator. Nothing is shared or
//! mutated behind the caller's back.

use thiserror::Error;
use tracing::{debug, info};

use super::form_state::FormState;
use crate::domain::ports::{
    Confirmation, ConfirmationError, NavigationError, Navigator, REGISTRATION_PROMPT, Route,
};
use crate::domain::{
    AttemptId, CredentialInput, Field, ProfileInput, ReferenceData, SessionRecord,
    ValidationErrors, validate_credentials, validate_profile,
};

/// First step: account credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsStep {
    attempt: AttemptId,
    reference: ReferenceData,
    form: FormState<CredentialInput>,
    errors: Option<ValidationErrors>,
}

/// Result of pressing "Next" on the credentials step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Credentials were accepted; the profile step is now active.
    Advanced(ProfileStep),
    /// Some field is empty, so the action was not available.
    Disabled(CredentialsStep),
    /// Validation failed; the step now carries the messages.
    Invalid(CredentialsStep),
}

impl CredentialsStep {
    /// Mount the credentials step with empty fields.
    #[must_use]
    pub fn mount(attempt: AttemptId, reference: ReferenceData) -> Self {
        Self {
            attempt,
            reference,
            form: FormState::new(CredentialInput::default()),
            errors: None,
        }
    }

    /// Field values and enablement.
    #[must_use]
    pub const fn form(&self) -> &FormState<CredentialInput> {
        &self.form
    }

    /// Mutable field values; enablement is recomputed on each change.
    pub const fn form_mut(&mut self) -> &mut FormState<CredentialInput> {
        &mut self.form
    }

    /// Messages from the latest rejected attempt, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Press "Next".
    ///
    /// Advances only when every field is filled in and every credential rule
    /// passes. The accepted credentials are committed with a lower-cased
    /// email and carried into the profile step.
    #[must_use]
    pub fn next(self) -> AdvanceOutcome {
        if !self.form.is_enabled() {
            return AdvanceOutcome::Disabled(self);
        }

        match validate_credentials(self.form.record()) {
            Ok(()) => {
                info!(attempt = %self.attempt, "credentials accepted");
                let credentials = self.form.into_record().committed();
                AdvanceOutcome::Advanced(ProfileStep::mount(
                    self.attempt,
                    self.reference,
                    credentials,
                ))
            }
            Err(errors) => {
                debug!(
                    attempt = %self.attempt,
                    failing = ?errors.failing_fields().collect::<Vec<Field>>(),
                    "credentials rejected"
                );
                AdvanceOutcome::Invalid(Self {
                    errors: Some(errors),
                    ..self
                })
            }
        }
    }
}

/// Second step: personal and government-ID details.
///
/// Holds the credentials committed by the first step until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStep {
    attempt: AttemptId,
    reference: ReferenceData,
    credentials: CredentialInput,
    form: FormState<ProfileInput>,
    errors: Option<ValidationErrors>,
}

/// Result of pressing "Create account" on the profile step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session record was handed to the display page.
    Submitted,
    /// Some field is empty, so the action was not available.
    Disabled(ProfileStep),
    /// Validation failed; the step now carries the messages.
    Invalid(ProfileStep),
    /// The user declined the confirmation; nothing changed.
    Declined(ProfileStep),
}

/// Failure of a collaborator during submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitFailure {
    /// The confirmation prompt could not be answered.
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
    /// The display page could not be reached.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// A submission that failed in a collaborator, returning the untouched step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("profile submission failed: {failure}")]
pub struct SubmitError {
    step: Box<ProfileStep>,
    #[source]
    failure: SubmitFailure,
}

impl SubmitError {
    /// Collaborator failure.
    #[must_use]
    pub const fn failure(&self) -> &SubmitFailure {
        &self.failure
    }

    /// Recover the step as it was before submission.
    #[must_use]
    pub fn into_step(self) -> ProfileStep {
        *self.step
    }

    /// Split into the recovered step and the collaborator failure.
    #[must_use]
    pub fn into_parts(self) -> (ProfileStep, SubmitFailure) {
        (*self.step, self.failure)
    }
}

impl ProfileStep {
    /// Mount the profile step on top of committed credentials.
    #[must_use]
    pub fn mount(
        attempt: AttemptId,
        reference: ReferenceData,
        credentials: CredentialInput,
    ) -> Self {
        Self {
            attempt,
            reference,
            credentials,
            form: FormState::new(ProfileInput::mounted(&reference)),
            errors: None,
        }
    }

    /// Credentials committed by the first step.
    #[must_use]
    pub const fn credentials(&self) -> &CredentialInput {
        &self.credentials
    }

    /// Selection lists offered by this step.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Field values and enablement.
    #[must_use]
    pub const fn form(&self) -> &FormState<ProfileInput> {
        &self.form
    }

    /// Mutable field values; enablement is recomputed on each change.
    pub const fn form_mut(&mut self) -> &mut FormState<ProfileInput> {
        &mut self.form
    }

    /// Messages from the latest rejected attempt, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Press "Create account".
    ///
    /// Re-validates the profile, asks for confirmation, normalises names and
    /// PAN, then navigates to [`Route::Home`] with the finished record.
    /// Validation failures never reach the prompt. Once validation passes the
    /// previous attempt's messages are cleared, so a declined prompt returns
    /// the typed values with no messages.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`], carrying the step with its values intact,
    /// when the confirmation or navigation collaborator fails.
    pub fn submit<C, N>(
        mut self,
        confirmation: &mut C,
        navigator: &mut N,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        C: Confirmation + ?Sized,
        N: Navigator + ?Sized,
    {
        if !self.form.is_enabled() {
            return Ok(SubmitOutcome::Disabled(self));
        }

        if let Err(errors) = validate_profile(self.form.record()) {
            debug!(
                attempt = %self.attempt,
                failing = ?errors.failing_fields().collect::<Vec<Field>>(),
                "profile rejected"
            );
            return Ok(SubmitOutcome::Invalid(Self {
                errors: Some(errors),
                ..self
            }));
        }
        self.errors = None;

        let confirmed = match confirmation.confirm(REGISTRATION_PROMPT) {
            Ok(confirmed) => confirmed,
            Err(error) => return Err(self.fail(error.into())),
        };
        if !confirmed {
            info!(attempt = %self.attempt, "registration not confirmed");
            return Ok(SubmitOutcome::Declined(self));
        }

        let record = SessionRecord::new(
            self.credentials.clone(),
            self.form.record().clone().normalized(),
        );
        if let Err(error) = navigator.go_to(Route::Home, record) {
            return Err(self.fail(error.into()));
        }
        info!(attempt = %self.attempt, route = %Route::Home, "registration submitted");
        Ok(SubmitOutcome::Submitted)
    }

    fn fail(self, failure: SubmitFailure) -> SubmitError {
        SubmitError {
            step: Box::new(self),
            failure,
        }
    }
}
