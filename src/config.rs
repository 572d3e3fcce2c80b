//! Runtime configuration.
//!
//! Values come from environment variables with the `ROSTER` prefix; nested keys would use `__`
//! as separator. A `.env` file in the working directory is read first when present.
//!
//! - `ROSTER__MAILBOX_CAPACITY=64` -> `mailbox_capacity = 64`
//! - `ROSTER__LOG_FILTER=debug` -> `log_filter = "debug"`

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RosterConfig {
    /// Channel buffer of every registry actor.
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_mailbox_capacity() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: default_mailbox_capacity(),
            log_filter: default_log_filter(),
        }
    }
}

impl RosterConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("ROSTER").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid("mailbox_capacity must be > 0".into()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ROSTER__MAILBOX_CAPACITY");
        env::remove_var("ROSTER__LOG_FILTER");
    }

    #[test]
    fn defaults_apply_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = RosterConfig::load().unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.mailbox_capacity, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ROSTER__MAILBOX_CAPACITY", "8");
        env::set_var("ROSTER__LOG_FILTER", "debug");
        let result = RosterConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.mailbox_capacity, 8);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn malformed_number_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ROSTER__MAILBOX_CAPACITY", "plenty");
        let result = RosterConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn validate_rejects_zero_mailbox() {
        let config = RosterConfig {
            mailbox_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_blank_filter() {
        let config = RosterConfig {
            log_filter: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(RosterConfig::default().validate().is_ok());
    }
}
