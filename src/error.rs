//! Error types for the rating service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid statistic '{field}': {value}")]
    InvalidStatistic { field: &'static str, value: i64 },

    #[error("Invalid match submission: {reason}")]
    InvalidSubmission { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal service error: {message}")]
    Internal { message: String },
}

impl RatingError {
    /// Short machine-readable label, used as a metrics dimension
    pub fn reason(&self) -> &'static str {
        match self {
            RatingError::InvalidStatistic { .. } => "invalid_statistic",
            RatingError::InvalidSubmission { .. } => "invalid_submission",
            RatingError::ConfigurationError { .. } => "configuration",
            RatingError::Internal { .. } => "internal",
        }
    }
}
