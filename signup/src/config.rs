//! Runtime settings loaded via `OrthoConfig`.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_LOG_FILTER: &str = "info";

/// Settings controlling logging and the registration prompt.
///
/// Values come from `SIGNUP_*` environment variables and configuration files;
/// command-line flags are folded in afterwards with
/// [`SignupSettings::with_flags`].
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct SignupSettings {
    /// Emit JSON log lines instead of the compact format.
    #[ortho_config(default = false)]
    pub log_json: bool,
    /// Tracing filter directive.
    pub log_filter: Option<String>,
    /// Answer the registration prompt yes without asking.
    #[ortho_config(default = false)]
    pub assume_yes: bool,
}

impl SignupSettings {
    /// Return the configured filter directive, falling back to `info`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Fold in command-line switches. A flag can only turn a setting on.
    #[must_use]
    pub fn with_flags(self, assume_yes: bool, log_json: bool) -> Self {
        Self {
            assume_yes: self.assume_yes || assume_yes,
            log_json: self.log_json || log_json,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> SignupSettings {
        SignupSettings::load_from_iter([OsString::from("signup")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SIGNUP_LOG_JSON", None::<String>),
            ("SIGNUP_LOG_FILTER", None::<String>),
            ("SIGNUP_ASSUME_YES", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.log_json);
        assert!(!settings.assume_yes);
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SIGNUP_LOG_JSON", Some("true".to_owned())),
            ("SIGNUP_LOG_FILTER", Some("signup=debug".to_owned())),
            ("SIGNUP_ASSUME_YES", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.log_json);
        assert!(settings.assume_yes);
        assert_eq!(settings.log_filter(), "signup=debug");
    }

    #[rstest]
    #[case(false, false, false, false)]
    #[case(true, false, true, false)]
    #[case(false, true, false, true)]
    fn flags_only_switch_settings_on(
        #[case] assume_yes: bool,
        #[case] log_json: bool,
        #[case] expected_assume_yes: bool,
        #[case] expected_log_json: bool,
    ) {
        let _guard = lock_env([
            ("SIGNUP_LOG_JSON", None::<String>),
            ("SIGNUP_LOG_FILTER", None::<String>),
            ("SIGNUP_ASSUME_YES", None::<String>),
        ]);

        let settings = load_from_empty_args().with_flags(assume_yes, log_json);
        assert_eq!(settings.assume_yes, expected_assume_yes);
        assert_eq!(settings.log_json, expected_log_json);
    }

    #[test]
    fn flags_never_switch_settings_off() {
        let settings = SignupSettings {
            log_json: true,
            log_filter: None,
            assume_yes: true,
        }
        .with_flags(false, false);

        assert!(settings.assume_yes);
        assert!(settings.log_json);
    }
}
