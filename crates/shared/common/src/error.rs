//! Unified error handling.
//!
//! A failing validation rule is not an error: it is rendered as feedback.
//! These variants cover the few things that can actually go wrong around
//! the form (configuration, terminal I/O, the session task).

use domain::DomainError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Rendering layer
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(String),

    // Session lifecycle
    #[error("Form session error: {0}")]
    Session(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get error code for logs and machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Session(_) => "SESSION_ERROR",
            AppError::Domain(_) => "DOMAIN_ERROR",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        AppError::Render(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        AppError::Session(msg.into())
    }
}
