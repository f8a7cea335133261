//! # morph-convert
//!
//! Locale-aware conversion of text and dynamically-typed values into typed
//! values: numbers, booleans, UUIDs, `char`, text and user enumerations.
//!
//! Two tiers share one conversion ladder. The strict tier ([`parse`],
//! [`parse_str`], [`convert`], ...) returns [`ConvertResult`]; the safe tier
//! ([`try_parse`], [`try_parse_str`], [`try_convert`], ...) returns an empty
//! [`Optional`] instead of failing.
//!
//! ```rust
//! use morph_convert::prelude::*;
//!
//! let de = Locale::from_tag("de-DE").unwrap();
//! assert_eq!(parse_str_with::<f64>("1.234,5", &de).unwrap(), 1234.5);
//! assert_eq!(parse::<i64>(&Value::from("321333423433")).unwrap(), 321_333_423_433);
//! assert!(try_parse_str::<u8>("300").is_empty());
//! ```
//!
//! Without configuration the default locale is invariant. Install a different
//! one once at startup with [`set_default_locale`] or [`ConvertConfig::apply`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod convertible;
pub mod converter;
pub mod error;
mod ladder;
pub mod locale;
mod numeric;
pub mod target;
pub mod value;

pub use config::ConvertConfig;
pub use convertible::{Convertible, Enumeration};
pub use converter::{
    Converter, convert, parse, parse_str, parse_str_with, parse_with, try_convert, try_parse,
    try_parse_str, try_parse_str_with, try_parse_with,
};
pub use error::{ConvertError, ConvertResult, FormatError, FormatReason};
pub use locale::{CaseRule, Locale, LocaleError, default_locale, set_default_locale};
pub use morph_optional::Optional;
pub use target::{EnumDescriptor, EnumMember, PrimitiveKind, TargetType};
pub use value::{EnumValue, Value, ValueKind};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use std::sync::Arc;
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConvertError, ConvertResult, Convertible, Converter, Locale, Optional, TargetType, Value,
    };
    pub use crate::{
        convert, parse, parse_str, parse_str_with, parse_with, try_convert, try_parse,
        try_parse_str, try_parse_str_with, try_parse_with,
    };
    pub use crate::convertible_enum;
}
