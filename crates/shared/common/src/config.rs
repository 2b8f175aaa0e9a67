//! Form configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use domain::{PasswordPolicy, DEFAULT_DEBOUNCE_MS};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Environment variable holding the debounce delay in milliseconds
pub const ENV_DEBOUNCE_MS: &str = "SIGNUP_DEBOUNCE_MS";

/// Environment variable selecting `debounced` or `synchronous` validation
pub const ENV_VALIDATION_MODE: &str = "SIGNUP_VALIDATION_MODE";

/// Environment variable selecting the `standard` or `strict` password policy
pub const ENV_PASSWORD_POLICY: &str = "SIGNUP_PASSWORD_POLICY";

/// When feedback follows the raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Feedback refreshes once the field has been quiet for the delay
    #[default]
    Debounced,
    /// Feedback refreshes on every keystroke
    Synchronous,
}

impl FromStr for ValidationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debounced" => Ok(ValidationMode::Debounced),
            "synchronous" | "sync" => Ok(ValidationMode::Synchronous),
            other => Err(AppError::config(format!("unknown validation mode: {}", other))),
        }
    }
}

/// Sign-up form configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Quiet period before a field's feedback refreshes
    pub debounce_ms: u64,
    pub validation_mode: ValidationMode,
    pub password_policy: PasswordPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            validation_mode: ValidationMode::Debounced,
            password_policy: PasswordPolicy::Standard,
        }
    }
}

impl FormConfig {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Unparsable values fall back to the defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            debounce_ms: parse_or_default(&lookup, ENV_DEBOUNCE_MS, defaults.debounce_ms),
            validation_mode: parse_or_default(
                &lookup,
                ENV_VALIDATION_MODE,
                defaults.validation_mode,
            ),
            password_policy: parse_or_default(
                &lookup,
                ENV_PASSWORD_POLICY,
                defaults.password_policy,
            ),
        }
    }

    /// Get the debounce delay as a duration.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn is_debounced(&self) -> bool {
        matches!(self.validation_mode, ValidationMode::Debounced)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("{} has invalid value {:?} ({}), using default", key, raw, e);
            default
        }),
    }
}
