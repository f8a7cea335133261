//! Strict and safe conversion entry points
//!
//! The strict tier returns [`ConvertResult`]. The safe tier runs the same
//! ladder and turns every failure into an empty [`Optional`]. Each tier has a
//! default-locale and an explicit-locale form, for boxed and string sources.

use morph_optional::Optional;

use crate::convertible::Convertible;
use crate::error::{ConvertError, ConvertResult, FormatError, FormatReason};
use crate::ladder;
use crate::locale::{Locale, default_locale};
use crate::target::TargetType;
use crate::value::Value;

/// A converter bound to one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    locale: Locale,
}

impl Default for Converter {
    /// A converter for the process default locale
    fn default() -> Self {
        Self::new(default_locale())
    }
}

impl Converter {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    // ==================== Strict ====================

    /// Convert a boxed value to `T`
    pub fn parse<T: Convertible>(&self, value: &Value) -> ConvertResult<T> {
        let target = T::target_type();
        let converted = ladder::convert_value(value, &target, &self.locale)?;
        T::from_value(converted).ok_or_else(|| self.mismatch(value.to_string(), &target))
    }

    /// Convert text to `T`
    pub fn parse_str<T: Convertible>(&self, text: &str) -> ConvertResult<T> {
        let target = T::target_type();
        let converted = ladder::parse_text(text, &target, &self.locale)?;
        T::from_value(converted).ok_or_else(|| self.mismatch(text, &target))
    }

    /// Convert a boxed value to the runtime-described `target`
    pub fn convert(&self, value: &Value, target: &TargetType) -> ConvertResult<Value> {
        ladder::convert_value(value, target, &self.locale)
    }

    // ==================== Safe ====================

    pub fn try_parse<T: Convertible>(&self, value: &Value) -> Optional<T> {
        suppress(self.parse(value))
    }

    pub fn try_parse_str<T: Convertible>(&self, text: &str) -> Optional<T> {
        suppress(self.parse_str(text))
    }

    pub fn try_convert(&self, value: &Value, target: &TargetType) -> Optional<Value> {
        suppress(self.convert(value, target))
    }

    fn mismatch(&self, source: impl Into<String>, target: &TargetType) -> ConvertError {
        FormatError::new(source, target, &self.locale, FormatReason::TypeMismatch).into()
    }
}

fn suppress<T>(result: ConvertResult<T>) -> Optional<T> {
    match result {
        Ok(value) => Optional::of(value),
        Err(err) => {
            tracing::trace!(code = err.code(), "safe conversion returned empty");
            Optional::empty()
        }
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Convert a boxed value to `T` under the process default locale.
///
/// # Errors
///
/// [`ConvertError::InvalidArgument`] for [`Value::Null`], or
/// [`ConvertError::Format`] when the value cannot be read as `T`.
pub fn parse<T: Convertible>(value: &Value) -> ConvertResult<T> {
    Converter::default().parse(value)
}

/// Convert a boxed value to `T` under `locale`
pub fn parse_with<T: Convertible>(value: &Value, locale: &Locale) -> ConvertResult<T> {
    Converter::new(*locale).parse(value)
}

/// Convert text to `T` under the process default locale
pub fn parse_str<T: Convertible>(text: &str) -> ConvertResult<T> {
    Converter::default().parse_str(text)
}

/// Convert text to `T` under `locale`
pub fn parse_str_with<T: Convertible>(text: &str, locale: &Locale) -> ConvertResult<T> {
    Converter::new(*locale).parse_str(text)
}

/// Convert a boxed value to `T`, empty on any failure
pub fn try_parse<T: Convertible>(value: &Value) -> Optional<T> {
    Converter::default().try_parse(value)
}

pub fn try_parse_with<T: Convertible>(value: &Value, locale: &Locale) -> Optional<T> {
    Converter::new(*locale).try_parse(value)
}

pub fn try_parse_str<T: Convertible>(text: &str) -> Optional<T> {
    Converter::default().try_parse_str(text)
}

pub fn try_parse_str_with<T: Convertible>(text: &str, locale: &Locale) -> Optional<T> {
    Converter::new(*locale).try_parse_str(text)
}

/// Convert a boxed value to a runtime-described target
pub fn convert(value: &Value, target: &TargetType, locale: &Locale) -> ConvertResult<Value> {
    Converter::new(*locale).convert(value, target)
}

pub fn try_convert(value: &Value, target: &TargetType, locale: &Locale) -> Optional<Value> {
    Converter::new(*locale).try_convert(value, target)
}
