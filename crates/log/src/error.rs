//! Error handling for morph-log

use thiserror::Error;

/// Logger setup errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The level directive does not parse as an `EnvFilter`
    #[error("Invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// Invalid configuration value, or a subscriber is already installed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create a filter parsing error
    pub fn filter(filter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::Filter { .. } => "LOG_FILTER_ERROR",
            Self::Config(_) => "LOG_CONFIG_ERROR",
        }
    }
}

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;
