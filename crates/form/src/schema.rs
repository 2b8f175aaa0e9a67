//! Form-level schema validation.
//!
//! Evaluated against the raw field values when the user submits. The live
//! feedback uses the same predicates on the debounced copies, so a field
//! that shows as valid also passes here once its value has settled.

use std::borrow::Cow;

use domain::{
    check_digit, check_max_length, check_no_whitespace, check_uppercase, is_valid_email,
    PasswordPolicy, MAX_PASSWORD_LENGTH,
};
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Sign-up payload as seen by the schema.
#[derive(Debug, Clone, Validate)]
pub struct SignUpSchema {
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "validate_character_classes")
    )]
    pub password: String,
}

/// Schema messages grouped by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub email: Vec<String>,
    pub password: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }

    pub fn email_ok(&self) -> bool {
        self.email.is_empty()
    }

    pub fn password_ok(&self) -> bool {
        self.password.is_empty()
    }
}

impl SignUpSchema {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Run the schema, adding the strict password rules when the policy asks.
    pub fn check(&self, policy: PasswordPolicy) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => collect(&e),
        };

        if policy.is_strict() {
            if !check_max_length(&self.password) {
                errors.password.push(format!(
                    "Password must be at most {} characters",
                    MAX_PASSWORD_LENGTH
                ));
            }
            if !check_no_whitespace(&self.password) {
                errors.password.push("No spaces allowed".to_string());
            }
        }

        errors
    }
}

fn collect(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::default();
    for (field, list) in errors.field_errors() {
        let messages = list.iter().map(message_of);
        match field.to_string().as_str() {
            "email" => out.email.extend(messages),
            "password" => out.password.extend(messages),
            _ => {}
        }
    }
    out
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(rule_error("email", "Invalid email address"))
    }
}

fn validate_character_classes(password: &str) -> Result<(), ValidationError> {
    if !check_uppercase(password) {
        return Err(rule_error(
            "uppercase",
            "Password must contain an uppercase letter",
        ));
    }
    if !check_digit(password) {
        return Err(rule_error("digit", "Password must contain a digit"));
    }
    Ok(())
}
