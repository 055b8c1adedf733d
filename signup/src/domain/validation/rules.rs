//! Named field predicates and their user-facing messages.
//!
//! Each rule is a pure predicate over a raw input value. Patterns compile once
//! on first use.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Field;

/// Username: three letters, then 1 to 17 characters outside the class
/// `[s@-_.]`.
///
/// The class is kept literally: `@-_` is the range `@`..`_`, which also
/// excludes upper-case ASCII letters after the third character.
pub const USERNAME_PATTERN: &str = r"^[a-zA-Z]{3}[^s@-_.]{1,17}$";
/// Email: `local@domain.tld` with no whitespace or `@` inside the parts.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
/// First and last names: ASCII letters only.
pub const NAME_PATTERN: &str = r"^[a-zA-Z]+$";
/// Phone: optional `+`, optional parenthesised code, then 5 and 5–7 digits.
pub const PHONE_PATTERN: &str = r"^[+]?[(]?[0-9]{0,2}[)]?[-\s.]?[0-9]{5}[-\s.]?[0-9]{5,7}$";
/// India PAN: 3 letters, a category letter, a letter, 4 digits, a letter.
pub const PAN_PATTERN: &str = r"^[A-Za-z]{3}[ACFHPTacfhpt]{1}[A-Za-z]{1}[0-9]{4}[A-Za-z]{1}$";
/// India Aadhar: 12 digits, the first from 2 to 9.
pub const AADHAR_PATTERN: &str = r"^[2-9]{1}[0-9]{3}[0-9]{4}[0-9]{4}$";

/// Shortest accepted password, in characters.
pub const PASSWORD_MIN: usize = 7;
/// Longest accepted password, in characters.
pub const PASSWORD_MAX: usize = 15;

/// Message for a rejected username.
pub const USERNAME_MESSAGE: &str =
    "Username must start with atleast 3 alphabets but less than 20 characters";
/// Message for a rejected email.
pub const EMAIL_MESSAGE: &str = "Invalid email format (must be like user@example.com)";
/// Message for a password above [`PASSWORD_MAX`].
pub const PASSWORD_TOO_LONG_MESSAGE: &str = "Password must be less than 16 characters";
/// Message for a password below [`PASSWORD_MIN`].
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be more than 6 characters";
/// Message for a rejected first or last name.
pub const NAME_MESSAGE: &str = "Only alphabets are allowed";
/// Message for a rejected phone number.
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
/// Message for a rejected PAN.
pub const PAN_MESSAGE: &str = "Please enter a valid PAN number";
/// Message for a rejected Aadhar number.
pub const AADHAR_MESSAGE: &str = "Please enter a valid Aadhar number";

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static NAME_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static PAN_RE: OnceLock<Regex> = OnceLock::new();
static AADHAR_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("field regex {pattern} failed to compile: {error}"))
    })
}

/// Return true if the username matches [`USERNAME_PATTERN`].
///
/// ```
/// use signup::domain::validation::is_valid_username;
///
/// assert!(is_valid_username("johndoe45"));
/// assert!(!is_valid_username("joh_doe"));
/// ```
#[must_use]
pub fn is_valid_username(value: &str) -> bool {
    compiled(&USERNAME_RE, USERNAME_PATTERN).is_match(value)
}

/// Return true if the email matches [`EMAIL_PATTERN`].
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    compiled(&EMAIL_RE, EMAIL_PATTERN).is_match(value)
}

/// Return true if the password length lies within
/// [`PASSWORD_MIN`]..=[`PASSWORD_MAX`] characters.
#[must_use]
pub fn is_valid_password(value: &str) -> bool {
    password_message(value).is_none()
}

/// Return true if the name consists of ASCII letters only.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    compiled(&NAME_RE, NAME_PATTERN).is_match(value)
}

/// Return true if the phone number matches [`PHONE_PATTERN`].
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    compiled(&PHONE_RE, PHONE_PATTERN).is_match(value)
}

/// Return true if the PAN matches [`PAN_PATTERN`].
#[must_use]
pub fn is_valid_pan(value: &str) -> bool {
    compiled(&PAN_RE, PAN_PATTERN).is_match(value)
}

/// Return true if the Aadhar number matches [`AADHAR_PATTERN`].
#[must_use]
pub fn is_valid_aadhar(value: &str) -> bool {
    compiled(&AADHAR_RE, AADHAR_PATTERN).is_match(value)
}

fn password_message(value: &str) -> Option<&'static str> {
    let length = value.chars().count();
    if length > PASSWORD_MAX {
        Some(PASSWORD_TOO_LONG_MESSAGE)
    } else if length < PASSWORD_MIN {
        Some(PASSWORD_TOO_SHORT_MESSAGE)
    } else {
        None
    }
}

const fn verdict(valid: bool, message: &'static str) -> Option<&'static str> {
    if valid { None } else { Some(message) }
}

/// Check one field value, returning the message to show when it fails.
///
/// Selections (country and city) carry no rule and always pass.
///
/// # Examples
/// ```
/// use signup::domain::Field;
/// use signup::domain::validation::check;
///
/// assert_eq!(check(Field::Aadhar, "234567890123"), None);
/// assert_eq!(
///     check(Field::Aadhar, "123456789012"),
///     Some("Please enter a valid Aadhar number")
/// );
/// ```
#[must_use]
pub fn check(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Username => verdict(is_valid_username(value), USERNAME_MESSAGE),
        Field::Email => verdict(is_valid_email(value), EMAIL_MESSAGE),
        Field::Password => password_message(value),
        Field::FirstName | Field::LastName => verdict(is_valid_name(value), NAME_MESSAGE),
        Field::Phone => verdict(is_valid_phone(value), PHONE_MESSAGE),
        Field::Pan => verdict(is_valid_pan(value), PAN_MESSAGE),
        Field::Aadhar => verdict(is_valid_aadhar(value), AADHAR_MESSAGE),
        Field::Country | Field::City => None,
    }
}
