//! Named inputs collected by the two signup steps.
//!
//! A [`Field`] carries three spellings: the input id used in records and
//! serialised payloads, the short key used for validation messages, and the
//! label shown next to the input.

use std::fmt;

/// Every input the signup flow collects, across both steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Account name chosen on the credentials step.
    Username,
    /// Contact address chosen on the credentials step.
    Email,
    /// Secret chosen on the credentials step.
    Password,
    /// Given name on the profile step.
    FirstName,
    /// Family name on the profile step.
    LastName,
    /// Phone number on the profile step, pre-filled with a calling code.
    Phone,
    /// Country selection on the profile step.
    Country,
    /// City selection on the profile step.
    City,
    /// India PAN identifier on the profile step.
    Pan,
    /// India Aadhar identifier on the profile step.
    Aadhar,
}

/// Inputs of the credentials step, in display order.
pub const CREDENTIAL_FIELDS: &[Field] = &[Field::Username, Field::Email, Field::Password];

/// Inputs of the profile step, in display order.
pub const PROFILE_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Phone,
    Field::Country,
    Field::City,
    Field::Pan,
    Field::Aadhar,
];

impl Field {
    /// Input id, matching the serialised record key.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::FirstName => "firstname",
            Self::LastName => "lastname",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }

    /// Short key under which validation messages are reported.
    #[must_use]
    pub const fn error_key(self) -> &'static str {
        match self {
            Self::Username => "uname",
            Self::Email => "email",
            Self::Password => "pass",
            Self::FirstName => "fname",
            Self::LastName => "lname",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }

    /// Human-readable label shown beside the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone number",
            Self::Country => "Country",
            Self::City => "City",
            Self::Pan => "PAN number",
            Self::Aadhar => "Aadhar number",
        }
    }

    /// Resolve a field from its input id.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::Field;
    ///
    /// assert_eq!(Field::from_id("pan"), Some(Field::Pan));
    /// assert_eq!(Field::from_id("nickname"), None);
    /// ```
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        CREDENTIAL_FIELDS
            .iter()
            .chain(PROFILE_FIELDS)
            .copied()
            .find(|field| field.id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
