//! Common utilities shared across the sign-up crates.
//!
//! This crate provides:
//! - Unified error handling
//! - Form configuration loaded from the environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
