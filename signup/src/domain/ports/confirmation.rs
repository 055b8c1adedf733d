//! Port for the blocking yes/no prompt shown before registration.
//!
//! The profile step asks this collaborator once validation passes. Any
//! synchronous yes/no mechanism can stand in: a terminal prompt, a scripted
//! answer, or a fixed policy such as [`AutoConfirmation`].

use thiserror::Error;

/// Question asked before the session record is handed on.
pub const REGISTRATION_PROMPT: &str = "Do you want to proceed with the registration?";

/// Errors raised while asking for confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfirmationError {
    /// The prompt could not be written or the answer could not be read.
    #[error("confirmation prompt failed: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },
    /// Input ended before an answer was given.
    #[error("input closed before the confirmation was answered")]
    Closed,
}

/// Synchronous yes/no interaction.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmation {
    /// Ask `prompt` and return whether the user agreed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError`] when no answer could be obtained.
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfirmationError>;
}

/// Confirmation that answers every prompt the same way without asking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirmation {
    answer: bool,
}

impl AutoConfirmation {
    /// Always agree.
    #[must_use]
    pub const fn accept() -> Self {
        Self { answer: true }
    }

    /// Always decline.
    #[must_use]
    pub const fn decline() -> Self {
        Self { answer: false }
    }
}

impl Confirmation for AutoConfirmation {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, ConfirmationError> {
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AutoConfirmation::accept(), true)]
    #[case(AutoConfirmation::decline(), false)]
    #[case(AutoConfirmation::default(), false)]
    fn auto_confirmation_returns_fixed_answer(
        #[case] mut confirmation: AutoConfirmation,
        #[case] expected: bool,
    ) {
        let answer = confirmation
            .confirm(REGISTRATION_PROMPT)
            .expect("fixed answers never fail");
        assert_eq!(answer, expected);
    }

    #[test]
    fn closed_error_formats_correctly() {
        assert_eq!(
            ConfirmationError::Closed.to_string(),
            "input closed before the confirmation was answered"
        );
    }
}
