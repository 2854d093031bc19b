//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::EditPolicy;
use std::env;
use tracing_subscriber::EnvFilter;

/// Variable selecting how phone edits are checked.
pub const EDIT_POLICY_VAR: &str = "ADDRESS_BOOK_EDIT_POLICY";

/// Variable selecting the log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How `edit_phone` treats replacement numbers (default: unchecked)
    pub edit_policy: EditPolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_EDIT_POLICY`: `unchecked` or `validated` (default: unchecked)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let edit_policy = Self::parse_edit_policy(EDIT_POLICY_VAR, EditPolicy::default())?;
        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            edit_policy,
            log_level,
        })
    }

    /// Build the log filter for `log_level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the level is not a valid filter
    /// directive.
    pub fn env_filter(&self) -> ConfigResult<EnvFilter> {
        EnvFilter::try_new(&self.log_level).map_err(|e| ConfigError::InvalidValue {
            var: LOG_LEVEL_VAR.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse an environment variable as an [`EditPolicy`] with a default value.
    fn parse_edit_policy(var_name: &str, default: EditPolicy) -> ConfigResult<EditPolicy> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "unchecked" => Ok(EditPolicy::Unchecked),
                "validated" => Ok(EditPolicy::Validated),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be 'unchecked' or 'validated', got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            edit_policy: EditPolicy::default(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.edit_policy, EditPolicy::Unchecked);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_env_filter_from_default_level() {
        assert!(Config::default().env_filter().is_ok());

        let config = Config {
            log_level: "address_book=debug,warn".to_string(),
            ..Config::default()
        };
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_env_filter_rejects_bad_directive() {
        let config = Config {
            log_level: "address_book=notalevel".to_string(),
            ..Config::default()
        };
        match config.env_filter() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, LOG_LEVEL_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other.map(|f| f.to_string())),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset(EDIT_POLICY_VAR);
        guard.unset(LOG_LEVEL_VAR);

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set(EDIT_POLICY_VAR, "Validated");
        guard.set(LOG_LEVEL_VAR, "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.edit_policy, EditPolicy::Validated);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_edit_policy() {
        let mut guard = EnvGuard::new();
        guard.set(EDIT_POLICY_VAR, "sometimes");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, EDIT_POLICY_VAR);
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.unset(EDIT_POLICY_VAR);
        guard.set(LOG_LEVEL_VAR, "  ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == LOG_LEVEL_VAR
        ));
    }

    #[test]
    #[serial]
    fn test_parse_edit_policy() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_EDIT_POLICY", " unchecked ");

        let result = Config::parse_edit_policy("TEST_EDIT_POLICY", EditPolicy::Validated);
        assert_eq!(result.unwrap(), EditPolicy::Unchecked);

        let result = Config::parse_edit_policy("NONEXISTENT_POLICY", EditPolicy::Validated);
        assert_eq!(result.unwrap(), EditPolicy::Validated);
    }
}
