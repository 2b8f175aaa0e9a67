//! Validation predicates for the sign-up fields.
//!
//! All predicates are pure and total: any string yields a boolean, and
//! malformed input simply fails the check.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{
    EMAIL_PATTERN, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, POLICY_STANDARD, POLICY_STRICT,
};
use crate::error::DomainError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check an email address against the `local@domain.tld` grammar.
///
/// Syntactic only; no MX lookup is performed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least [`MIN_PASSWORD_LENGTH`] characters.
///
/// Counts Unicode scalar values, not UTF-16 units: `"😀😀😀😀😀A1"` is 7 long.
pub fn check_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// At most [`MAX_PASSWORD_LENGTH`] characters.
pub fn check_max_length(password: &str) -> bool {
    password.chars().count() <= MAX_PASSWORD_LENGTH
}

/// Contains an ASCII uppercase letter.
pub fn check_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Contains an ASCII digit.
pub fn check_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Contains no whitespace at all.
pub fn check_no_whitespace(password: &str) -> bool {
    !password.chars().any(char::is_whitespace)
}

/// Standard password validity: min length, uppercase and digit.
pub fn is_valid_password(password: &str) -> bool {
    PasswordPolicy::Standard.is_valid(password)
}

/// Password strictness.
///
/// `Strict` additionally rejects whitespace and passwords longer than
/// [`MAX_PASSWORD_LENGTH`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordPolicy {
    #[default]
    Standard,
    Strict,
}

impl PasswordPolicy {
    /// Evaluate every rule this policy knows about.
    pub fn evaluate(&self, password: &str) -> PasswordChecks {
        let strict = matches!(self, PasswordPolicy::Strict);
        PasswordChecks {
            min_length: check_min_length(password),
            uppercase: check_uppercase(password),
            digit: check_digit(password),
            // Rules outside the policy always pass
            no_whitespace: !strict || check_no_whitespace(password),
            within_max_length: !strict || check_max_length(password),
        }
    }

    /// Check whether a password satisfies this policy.
    pub fn is_valid(&self, password: &str) -> bool {
        self.evaluate(password).all_pass()
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, PasswordPolicy::Strict)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordPolicy::Standard => POLICY_STANDARD,
            PasswordPolicy::Strict => POLICY_STRICT,
        }
    }
}

impl FromStr for PasswordPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            POLICY_STANDARD => Ok(PasswordPolicy::Standard),
            POLICY_STRICT => Ok(PasswordPolicy::Strict),
            other => Err(DomainError::unknown_policy(other)),
        }
    }
}

impl std::fmt::Display for PasswordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-rule outcome of a password evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub no_whitespace: bool,
    pub within_max_length: bool,
}

impl PasswordChecks {
    /// Aggregate validity: every rule passes.
    pub fn all_pass(&self) -> bool {
        self.min_length
            && self.uppercase
            && self.digit
            && self.no_whitespace
            && self.within_max_length
    }

    /// The min-length requirement line also covers the strict rules, since
    /// the form shows them under one label.
    pub fn length_requirement(&self) -> bool {
        self.min_length && self.no_whitespace && self.within_max_length
    }
}

/// Outcome of every rule for one snapshot of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid_email: bool,
    pub password: PasswordChecks,
}

impl ValidationResult {
    pub fn evaluate(email: &str, password: &str, policy: PasswordPolicy) -> Self {
        Self {
            valid_email: is_valid_email(email),
            password: policy.evaluate(password),
        }
    }

    pub fn valid_password(&self) -> bool {
        self.password.all_pass()
    }
}
