//! Converter configuration
//!
//! ```rust
//! use morph_convert::ConvertConfig;
//!
//! let config = ConvertConfig::with_locale("de-DE");
//! assert_eq!(config.resolve_locale().unwrap().decimal_separator(), ',');
//! ```

use crate::locale::{Locale, LocaleError, set_default_locale};

/// Environment variable naming the process default locale
pub const LOCALE_ENV: &str = "MORPH_LOCALE";

/// Startup configuration of the process default locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertConfig {
    /// Culture tag; `None` means the ambient locale of the environment
    pub locale: Option<String>,
}

impl ConvertConfig {
    /// Configuration naming `tag` explicitly
    pub fn with_locale(tag: impl Into<String>) -> Self {
        Self {
            locale: Some(tag.into()),
        }
    }

    /// Read `MORPH_LOCALE`
    pub fn from_env() -> Self {
        Self {
            locale: std::env::var(LOCALE_ENV)
                .ok()
                .filter(|tag| !tag.trim().is_empty()),
        }
    }

    /// The locale this configuration names.
    ///
    /// Without an explicit tag this is [`Locale::from_env`].
    pub fn resolve_locale(&self) -> Result<Locale, LocaleError> {
        match &self.locale {
            Some(tag) => Locale::from_tag(tag),
            None => Ok(Locale::from_env()),
        }
    }

    /// Resolve the locale and install it as the process default
    pub fn apply(&self) -> Result<Locale, LocaleError> {
        let locale = self.resolve_locale()?;
        set_default_locale(locale)?;
        Ok(locale)
    }
}
