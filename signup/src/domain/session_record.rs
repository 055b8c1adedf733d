//! Transfer object handed from the signup flow to the display page.

use serde::Serialize;

use super::credentials::CredentialInput;
use super::profile::ProfileInput;

/// Completed result of both signup steps.
///
/// Serialises with the `authData` / `userData` keys the display page reads.
///
/// ## Invariants
/// - Built only from credentials and a profile that passed validation and
///   normalisation; the display page renders it without re-validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    auth_data: CredentialInput,
    user_data: ProfileInput,
}

impl SessionRecord {
    /// Combine committed credentials with a finalised profile.
    #[must_use]
    pub const fn new(auth_data: CredentialInput, user_data: ProfileInput) -> Self {
        Self {
            auth_data,
            user_data,
        }
    }

    /// Credentials from the first step.
    #[must_use]
    pub const fn auth_data(&self) -> &CredentialInput {
        &self.auth_data
    }

    /// Profile details from the second step.
    #[must_use]
    pub const fn user_data(&self) -> &ProfileInput {
        &self.user_data
    }

    /// Render the record as two-space indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the serialiser error if the record cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
