//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_value_unchanged() {
        assert_eq!(
            expand_env("https://api.notion.com/v1", "notion.base_url").unwrap(),
            "https://api.notion.com/v1"
        );
    }

    #[test]
    fn test_expand_default_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QALOG_EXPAND_TEST_UNSET");
        }

        let value = expand_env("${QALOG_EXPAND_TEST_UNSET:-fallback}", "notion.page_id").unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QALOG_EXPAND_TEST_MISSING");
        }

        let err = expand_env("${QALOG_EXPAND_TEST_MISSING}", "notion.api_key").unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "notion.api_key");
                assert_eq!(message, "${QALOG_EXPAND_TEST_MISSING} not set");
            }
            other => panic!("Expected ConfigError::EnvVar, got {other:?}"),
        }
    }
}
