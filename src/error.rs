//! Custom error types and handling
//!
//! This module defines the application's error types. Workers surface their
//! failures through [`AppError`] so that one failing worker never takes the
//! others down with it.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Results log errors
    #[error("Failed to open results log: {0}")]
    LogOpen(String),

    #[error("Failed to write results log: {0}")]
    LogWrite(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LogOpen(_) => "LOG_OPEN_ERROR",
            Self::LogWrite(_) => "LOG_WRITE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_log() {
        let err = AppError::LogOpen("permission denied".to_string());
        assert_eq!(err.to_string(), "Failed to open results log: permission denied");
        assert_eq!(err.error_code(), "LOG_OPEN_ERROR");
    }
}
