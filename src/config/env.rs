//! Environment Variable Source
//!
//! Provides read-only access to the process environment.

use super::provider::VarSource;

/// Read-only process environment source.
///
/// Keys are looked up verbatim, so dotted keys such as `user.name` are
/// resolved as literal variable names. Values that are not valid unicode
/// are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvVarSource {
    prefix: Option<String>,
}

impl EnvVarSource {
    /// Create a source with no prefix
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a source that prepends `prefix` to every key
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn env_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }
}

impl VarSource for EnvVarSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.env_key(key)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_prefix() {
        assert_eq!(EnvVarSource::new().env_key("GRAVITINO_USER"), "GRAVITINO_USER");
        assert_eq!(EnvVarSource::prefixed("APP_").env_key("USER"), "APP_USER");
    }

    #[test]
    fn test_env_source_get() {
        temp_env::with_vars(
            vec![
                ("GRAVITINO_TEST_ENV_SET", Some("value")),
                ("GRAVITINO_TEST_ENV_EMPTY", Some("")),
                ("GRAVITINO_TEST_ENV_UNSET", None),
            ],
            || {
                let source = EnvVarSource::new();
                assert_eq!(source.get("GRAVITINO_TEST_ENV_SET"), Some("value".into()));
                assert!(source.contains("GRAVITINO_TEST_ENV_EMPTY"));
                assert_eq!(source.get_non_empty("GRAVITINO_TEST_ENV_EMPTY"), None);
                assert_eq!(source.get("GRAVITINO_TEST_ENV_UNSET"), None);
            },
        );
    }
}
