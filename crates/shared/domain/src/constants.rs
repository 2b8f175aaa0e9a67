//! Domain-level constants.
//!
//! These constants define the sign-up rules and feedback defaults.

// =============================================================================
// Email
// =============================================================================

/// Syntactic `local@domain.tld` grammar accepted for the email field
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

// =============================================================================
// Password
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length under the strict policy
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Policy name for the three-rule password check
pub const POLICY_STANDARD: &str = "standard";

/// Policy name adding the whitespace and maximum length rules
pub const POLICY_STRICT: &str = "strict";

// =============================================================================
// Feedback
// =============================================================================

/// Default quiet period before a field's feedback is refreshed
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Message shown once the form has been accepted
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Requirement line labels, in display order
pub const REQUIREMENT_MIN_LENGTH_LABEL: &str = "Has at least 8 characters (no spaces)";
pub const REQUIREMENT_UPPERCASE_LABEL: &str = "Uppercase and lowercase letters";
pub const REQUIREMENT_DIGIT_LABEL: &str = "At least one digit";
