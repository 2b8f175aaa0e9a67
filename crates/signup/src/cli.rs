//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Flags override
//! whatever the environment configured.

use clap::Parser;
use common::{FormConfig, ValidationMode, ENV_DEBOUNCE_MS, ENV_PASSWORD_POLICY};
use domain::PasswordPolicy;

use crate::render::OutputFormat;

/// Interactive sign-up form with live validation feedback
#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet period before feedback refreshes, in milliseconds
    #[arg(short, long, env = ENV_DEBOUNCE_MS)]
    pub debounce_ms: Option<u64>,

    /// Refresh feedback on every keystroke instead of debouncing
    /// (`SIGNUP_VALIDATION_MODE` is read through the form config)
    #[arg(short, long)]
    pub synchronous: bool,

    /// Password policy (`standard` or `strict`)
    #[arg(short, long, env = ENV_PASSWORD_POLICY)]
    pub policy: Option<PasswordPolicy>,

    /// Render each view as a JSON line
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply flag overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut FormConfig) {
        if let Some(ms) = self.debounce_ms {
            config.debounce_ms = ms;
        }
        if self.synchronous {
            config.validation_mode = ValidationMode::Synchronous;
        }
        if let Some(policy) = self.policy {
            config.password_policy = policy;
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["signup", "-d", "250", "--synchronous", "--policy", "strict"]);
        let mut config = FormConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.validation_mode, ValidationMode::Synchronous);
        assert_eq!(config.password_policy, PasswordPolicy::Strict);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["signup"]);
        let mut config = FormConfig {
            debounce_ms: 40,
            ..FormConfig::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.debounce_ms, 40);
        assert!(config.is_debounced());
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_flags_fall_back_to_env() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        let env_of = |id: &str| {
            cmd.get_arguments()
                .find(|arg| arg.get_id().as_str() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("debounce_ms").as_deref(), Some(ENV_DEBOUNCE_MS));
        assert_eq!(env_of("policy").as_deref(), Some(ENV_PASSWORD_POLICY));
        assert_eq!(env_of("synchronous"), None);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["signup", "--policy", "lenient"]).is_err());
    }
}
