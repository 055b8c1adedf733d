//! Tests for field rules and per-step validation.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn valid_credentials() -> CredentialInput {
    CredentialInput::new("johndoe45", "USER@Example.com", "secret1")
}

#[fixture]
fn valid_profile() -> ProfileInput {
    ProfileInput {
        firstname: "john".to_owned(),
        lastname: "DOE".to_owned(),
        phone: "+91 98765 43210".to_owned(),
        country: "India".to_owned(),
        city: "Kolkata".to_owned(),
        pan: "abcpz1234d".to_owned(),
        aadhar: "234567890123".to_owned(),
    }
}

#[rstest]
#[case("johndoe45", true)]
#[case("abcd", true)]
#[case("abc12345678901234567", true)] // 3 + 17
#[case("abc123456789012345678", false)] // 3 + 18
#[case("abc", false)] // nothing after the letters
#[case("ab1defg", false)] // fewer than three leading letters
#[case("joh_doe", false)]
#[case("joh.doe", false)]
#[case("joh@doe", false)]
#[case("johsdoe", false)] // literal `s` is excluded
#[case("johnDoe", false)] // `A`-`Z` fall inside the `@`-`_` range
#[case("joh[doe", false)]
#[case("joh doe", true)] // whitespace is not excluded
#[case("joh-doe", true)] // `-` only forms the range
fn username_rule(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_username(value), expected, "username {value:?}");
}

#[rstest]
#[case("USER@Example.com", true)]
#[case("a@b.co", true)]
#[case("a@b", false)]
#[case("a b@c.com", false)]
#[case("a@@b.com", false)]
#[case("@b.com", false)]
fn email_rule(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_email(value), expected, "email {value:?}");
}

#[rstest]
#[case(6, Some(PASSWORD_TOO_SHORT_MESSAGE))]
#[case(7, None)]
#[case(15, None)]
#[case(16, Some(PASSWORD_TOO_LONG_MESSAGE))]
fn password_boundaries(#[case] length: usize, #[case] expected: Option<&str>) {
    let password = "x".repeat(length);
    assert_eq!(check(Field::Password, &password), expected);
    assert_eq!(is_valid_password(&password), expected.is_none());
}

#[test]
fn password_length_counts_characters() {
    assert!(is_valid_password("ééééééé"));
}

#[rstest]
#[case("John", true)]
#[case("j", true)]
#[case("Mary-Jane", false)]
#[case("John2", false)]
#[case("", false)]
fn name_rule(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_name(value), expected, "name {value:?}");
}

#[rstest]
#[case("+91 98765 43210", true)]
#[case("9876543210", true)]
#[case("+(91)-98765-4321012", true)]
#[case("98765.43210", true)]
#[case("+91 ", false)]
#[case("+91 9876", false)]
#[case("+91 98765 43210 99", false)]
fn phone_rule(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_phone(value), expected, "phone {value:?}");
}

#[rstest]
#[case("abcpz1234d", true)]
#[case("ABCPZ1234D", true)]
#[case("ABCFZ1234D", true)]
#[case("ABCXZ1234D", false)] // X is not a category code
#[case("ABCPZ123D", false)]
#[case("ABCPZ12345", false)]
fn pan_rule(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_pan(value), expected, "pan {value:?}");
}

#[rstest]
#[case("234567890123", true)]
#[case("999999999999", true)]
#[case("123456789012", false)]
#[case("023456789012", false)]
#[case("23456789012", false)]
#[case("2345 6789 0123", false)]
fn aadhar_rule(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(is_valid_aadhar(value), expected, "aadhar {value:?}");
}

#[rstest]
fn valid_credentials_pass(valid_credentials: CredentialInput) {
    assert_eq!(validate_credentials(&valid_credentials), Ok(()));
}

#[rstest]
fn credential_errors_cover_every_field(mut valid_credentials: CredentialInput) {
    valid_credentials.username = "jo".to_owned();

    let errors = validate_credentials(&valid_credentials).expect_err("username fails");

    let keys: Vec<_> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(keys, vec![Field::Username, Field::Email, Field::Password]);
    assert_eq!(errors.message(Field::Username), Some(USERNAME_MESSAGE));
    assert_eq!(errors.message(Field::Email), None);
    assert_eq!(
        errors.failing_fields().collect::<Vec<_>>(),
        vec![Field::Username]
    );
    assert!(!errors.is_clean());
}

#[rstest]
fn valid_profile_passes(valid_profile: ProfileInput) {
    assert_eq!(validate_profile(&valid_profile), Ok(()));
}

#[rstest]
fn profile_errors_skip_selections(mut valid_profile: ProfileInput) {
    valid_profile.aadhar = "123456789012".to_owned();
    valid_profile.city = String::new();

    let errors = validate_profile(&valid_profile).expect_err("aadhar fails");

    assert_eq!(errors.message(Field::Aadhar), Some(AADHAR_MESSAGE));
    assert_eq!(errors.message(Field::City), None);
    assert!(errors.iter().all(|(field, _)| field != Field::City));
    assert!(errors.iter().all(|(field, _)| field != Field::Country));
}

#[rstest]
fn profile_reports_every_failure(valid_profile: ProfileInput) {
    let profile = ProfileInput {
        firstname: "J0hn".to_owned(),
        lastname: "D oe".to_owned(),
        phone: "+91 ".to_owned(),
        pan: "nope".to_owned(),
        ..valid_profile
    };

    let errors = validate_profile(&profile).expect_err("several failures");

    assert_eq!(
        errors.failing_fields().collect::<Vec<_>>(),
        vec![Field::FirstName, Field::LastName, Field::Phone, Field::Pan]
    );
    assert_eq!(errors.message(Field::FirstName), Some(NAME_MESSAGE));
    assert_eq!(errors.message(Field::Phone), Some(PHONE_MESSAGE));
    assert_eq!(errors.message(Field::Pan), Some(PAN_MESSAGE));
}
