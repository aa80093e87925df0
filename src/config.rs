//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default location of the persisted settings document.
pub const DEFAULT_STATE_PATH: &str = "./data/bankease.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON settings document holding the onboarding flag.
    pub state_path: PathBuf,
    /// Path observed first, before any user input.
    pub start_path: String,
    /// Keep the flag in memory only (nothing survives a restart).
    pub ephemeral: bool,
    /// Directory for rolling log files. Logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
    /// Print frames as JSON lines instead of text.
    pub json_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            start_path: "/".to_string(),
            ephemeral: false,
            log_dir: None,
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Build configuration from `BANKEASE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let state_path = std::env::var("BANKEASE_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.state_path);

        let start_path =
            std::env::var("BANKEASE_START_PATH").unwrap_or(defaults.start_path);
        validate_start_path(&start_path)?;

        let ephemeral = std::env::var("BANKEASE_EPHEMERAL")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        let log_dir = std::env::var("BANKEASE_LOG_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let json_output = std::env::var("BANKEASE_JSON")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        Ok(Self {
            state_path,
            start_path,
            ephemeral,
            log_dir,
            json_output,
        })
    }
}

fn validate_start_path(path: &str) -> Result<(), ConfigError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: "BANKEASE_START_PATH".to_string(),
            message: format!("'{path}' must start with '/'"),
        })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.state_path, PathBuf::from(DEFAULT_STATE_PATH));
        assert_eq!(config.start_path, "/");
        assert!(!config.ephemeral);
        assert!(config.log_dir.is_none());
        assert!(!config.json_output);
    }

    #[test]
    fn start_path_must_be_absolute() {
        assert!(validate_start_path("/dashboard").is_ok());
        let err = validate_start_path("dashboard").unwrap_err();
        assert!(err.to_string().contains("BANKEASE_START_PATH"));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("1"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool(" yes "));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("nope"));
    }
}
