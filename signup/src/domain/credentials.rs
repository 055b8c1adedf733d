//! Account credentials collected by the first signup step.

use serde::{Serialize, Serializer};
use zeroize::Zeroizing;

use super::normalize::normalize_email;

/// Raw credentials as typed on the first step.
///
/// Values are unvalidated until [`crate::domain::validate_credentials`]
/// accepts them. The password buffer is wiped when dropped or replaced.
///
/// # Examples
/// ```
/// use signup::domain::CredentialInput;
///
/// let input = CredentialInput::new("johndoe45", "A@B.com", "secret1");
/// assert_eq!(input.committed().email, "a@b.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CredentialInput {
    /// Account name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Account secret.
    #[serde(serialize_with = "serialize_password")]
    pub password: Zeroizing<String>,
}

impl CredentialInput {
    /// Build credentials from raw values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Freeze the credentials for the session record, lower-casing the email.
    #[must_use]
    pub fn committed(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self
        }
    }
}

fn serialize_password<S>(password: &Zeroizing<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(password.as_str())
}
