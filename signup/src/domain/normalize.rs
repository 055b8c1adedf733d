//! Case folding applied to accepted values before they reach the session
//! record.

/// Lower-case an email address.
///
/// # Examples
/// ```
/// use signup::domain::normalize_email;
///
/// assert_eq!(normalize_email("USER@Example.com"), "user@example.com");
/// ```
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// Upper-case the first character of a name and lower-case the rest.
///
/// # Examples
/// ```
/// use signup::domain::capitalize_name;
///
/// assert_eq!(capitalize_name("mARY"), "Mary");
/// assert_eq!(capitalize_name(""), "");
/// ```
#[must_use]
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Upper-case a PAN identifier.
///
/// # Examples
/// ```
/// use signup::domain::normalize_pan;
///
/// assert_eq!(normalize_pan("abcpz1234d"), "ABCPZ1234D");
/// ```
#[must_use]
pub fn normalize_pan(pan: &str) -> String {
    pan.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("john", "John")]
    #[case("JOHN", "John")]
    #[case("j", "J")]
    #[case("McDonald", "Mcdonald")]
    fn capitalize_name_folds_tail(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(capitalize_name(raw), expected);
    }

    #[test]
    fn normalize_email_keeps_structure() {
        assert_eq!(normalize_email("A@B.com"), "a@b.com");
    }
}
