//! Optional container errors

use thiserror::Error;

/// Errors raised by [`Optional`](crate::Optional) builders and accessors.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    /// A builder that requires a value was handed nothing
    #[error("Invalid argument '{argument}': a present Optional cannot be built from an absent value")]
    InvalidArgument { argument: &'static str },

    /// The value of an empty optional was requested
    #[error(
        "Value requested from an empty Optional; check is_present() or use one of the or_else methods"
    )]
    IllegalState,
}

impl OptionalError {
    /// Create an invalid argument error for the named parameter
    pub const fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Get error code for monitoring
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "OPTIONAL_INVALID_ARGUMENT",
            Self::IllegalState => "OPTIONAL_ILLEGAL_STATE",
        }
    }
}

/// Result type alias for optional operations
pub type OptionalResult<T> = Result<T, OptionalError>;
