//! Domain layer - Sign-up validation rules and feedback classification.
//!
//! This crate contains pure logic with no runtime or I/O dependencies.
//! Everything here is deterministic and safe to call on every keystroke.

pub mod constants;
pub mod display;
pub mod error;
pub mod field;
pub mod validation;

pub use constants::*;
pub use display::{classify, DisplayState};
pub use error::{DomainError, DomainResult};
pub use field::Field;
pub use validation::{
    check_digit, check_max_length, check_min_length, check_no_whitespace, check_uppercase,
    is_valid_email, is_valid_password, PasswordChecks, PasswordPolicy, ValidationResult,
};
