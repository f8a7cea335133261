//! Conversion Error Types
//!
//! Two failure kinds exist: an argument that must not be absent was absent
//! ([`ConvertError::InvalidArgument`]), or the source could not be read as the
//! requested type ([`FormatError`]). The safe API suppresses exactly the
//! second kind.

use thiserror::Error;

use crate::locale::Locale;
use crate::target::TargetType;

// ============================================================================
// FORMAT ERROR
// ============================================================================

/// Why a ladder step rejected its input
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatReason {
    /// Text does not follow the numeric grammar of the locale
    #[error("not a valid number")]
    Malformed,

    /// Numeric text is well formed but outside the target's range
    #[error("value is outside the range of the target type")]
    Overflow,

    /// Integer text names no member of the enumeration
    #[error("{0} is not a defined ordinal of the enumeration")]
    UndefinedOrdinal(i64),

    /// Text matches no member name of the enumeration
    #[error("not a member of the enumeration")]
    UnknownMember,

    /// Text is not a canonical hyphenated identifier
    #[error("expected a hyphenated 8-4-4-4-12 hex identifier")]
    MalformedIdentifier,

    /// Text is not one of the accepted boolean tokens
    #[error("expected one of 1, 0, true, false")]
    UnrecognizedBoolean,

    /// A character target received zero or several characters
    #[error("expected exactly one character")]
    NotASingleChar,

    /// The ladder produced a value the typed API could not extract
    #[error("converted value does not match the requested type")]
    TypeMismatch,
}

/// The source could not be interpreted as the target type under a locale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse '{value}' as {target} (locale {locale}): {reason}")]
pub struct FormatError {
    /// The original source text
    pub value: String,
    /// Name of the target type
    pub target: String,
    /// Tag of the locale used
    pub locale: &'static str,
    /// The rejecting rule
    pub reason: FormatReason,
}

impl FormatError {
    /// Create a format error for `value` converted to `target` under `locale`
    pub fn new(
        value: impl Into<String>,
        target: &TargetType,
        locale: &Locale,
        reason: FormatReason,
    ) -> Self {
        Self {
            value: value.into(),
            target: target.name().into_owned(),
            locale: locale.tag(),
            reason,
        }
    }
}

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Conversion errors
///
/// All strict conversion entry points return this error type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A required input was absent, or a descriptor was malformed
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// The source cannot be read as the requested type
    #[error(transparent)]
    Format(#[from] FormatError),
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ConvertError {
    /// Create an invalid argument error
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Create the error for an absent source value
    pub fn absent_value() -> Self {
        Self::invalid_argument("value", "source value is absent")
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "CONVERT_INVALID_ARGUMENT",
            Self::Format(_) => "CONVERT_FORMAT_ERROR",
        }
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// The format error, if this is one
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(err) => Some(err),
            Self::InvalidArgument { .. } => None,
        }
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
