//! Culture conventions used by the conversion ladder
//!
//! A [`Locale`] is a small `Copy` token: separators, sign characters,
//! special-value symbols and the case-folding rule for name comparisons.
//! The built-in table covers the cultures the converter ships with; there is
//! no locale authoring beyond [`Locale::new`].
//!
//! The process default is write-once. Call [`set_default_locale`] at startup;
//! until then [`default_locale`] is [`Locale::INVARIANT`].

use core::fmt;

use once_cell::sync::OnceCell;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Locale resolution and configuration errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag names no locale of the built-in table
    #[error("Unknown locale '{tag}'")]
    Unknown { tag: String },

    /// The process default was already set
    #[error("Default locale already configured as '{current}'")]
    AlreadyConfigured { current: &'static str },
}

// ============================================================================
// LOCALE
// ============================================================================

/// How a locale folds case when comparing names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseRule {
    /// Unicode default lowercasing
    Default,
    /// Turkish and Azeri: dotted and dotless i are distinct letters
    Turkic,
}

/// Formatting conventions of one culture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: &'static str,
    decimal_separator: char,
    group_separator: char,
    negative_sign: char,
    positive_sign: char,
    nan_symbol: &'static str,
    positive_infinity: &'static str,
    negative_infinity: &'static str,
    case_rule: CaseRule,
}

impl Locale {
    /// Culture-neutral conventions (`.` decimal, `,` grouping)
    pub const INVARIANT: Self = Self {
        tag: "invariant",
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
        positive_sign: '+',
        nan_symbol: "NaN",
        positive_infinity: "Infinity",
        negative_infinity: "-Infinity",
        case_rule: CaseRule::Default,
    };

    /// Define a locale with default signs, symbols and case rule
    pub const fn new(tag: &'static str, decimal_separator: char, group_separator: char) -> Self {
        Self {
            tag,
            decimal_separator,
            group_separator,
            negative_sign: '-',
            positive_sign: '+',
            nan_symbol: "NaN",
            positive_infinity: "∞",
            negative_infinity: "-∞",
            case_rule: CaseRule::Default,
        }
    }

    /// Override the negative sign
    pub const fn with_negative_sign(mut self, sign: char) -> Self {
        self.negative_sign = sign;
        self
    }

    /// Override the NaN and infinity symbols
    pub const fn with_symbols(
        mut self,
        nan: &'static str,
        positive_infinity: &'static str,
        negative_infinity: &'static str,
    ) -> Self {
        self.nan_symbol = nan;
        self.positive_infinity = positive_infinity;
        self.negative_infinity = negative_infinity;
        self
    }

    /// Override the case-folding rule
    pub const fn with_case_rule(mut self, rule: CaseRule) -> Self {
        self.case_rule = rule;
        self
    }

    // ==================== Accessors ====================

    #[inline]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    #[inline]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[inline]
    pub const fn group_separator(&self) -> char {
        self.group_separator
    }

    #[inline]
    pub const fn negative_sign(&self) -> char {
        self.negative_sign
    }

    #[inline]
    pub const fn positive_sign(&self) -> char {
        self.positive_sign
    }

    #[inline]
    pub const fn nan_symbol(&self) -> &'static str {
        self.nan_symbol
    }

    #[inline]
    pub const fn positive_infinity(&self) -> &'static str {
        self.positive_infinity
    }

    #[inline]
    pub const fn negative_infinity(&self) -> &'static str {
        self.negative_infinity
    }

    #[inline]
    pub const fn case_rule(&self) -> CaseRule {
        self.case_rule
    }

    // ==================== Lookup ====================

    /// All built-in locales, invariant first
    pub fn all() -> &'static [Locale] {
        BUILTIN
    }

    /// Resolve a culture tag such as `de-DE`, `de_DE.UTF-8` or `en`.
    ///
    /// Matching ignores case and the separator style. A tag whose region is
    /// unknown falls back to the first locale of the same language.
    pub fn from_tag(tag: &str) -> Result<Self, LocaleError> {
        let normalized = normalize_tag(tag);
        if normalized.is_empty()
            || normalized.eq_ignore_ascii_case("c")
            || normalized.eq_ignore_ascii_case("posix")
        {
            return Ok(Self::INVARIANT);
        }

        if let Some(locale) = BUILTIN
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&normalized))
        {
            return Ok(*locale);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        BUILTIN
            .iter()
            .skip(1)
            .find(|l| {
                l.tag
                    .split('-')
                    .next()
                    .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
            })
            .copied()
            .ok_or_else(|| LocaleError::Unknown {
                tag: tag.to_string(),
            })
    }

    /// The ambient locale of the process environment.
    ///
    /// Reads `LC_ALL`, `LC_NUMERIC` and `LANG` in that order. Unknown or
    /// missing values resolve to [`Locale::INVARIANT`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Locale::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some((key, tag)) = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .find_map(|key| lookup(key).filter(|v| !v.is_empty()).map(|v| (key, v)))
        else {
            return Self::INVARIANT;
        };

        match Self::from_tag(&tag) {
            Ok(locale) => locale,
            Err(err) => {
                tracing::debug!(variable = key, %err, "ambient locale not recognised, using invariant");
                Self::INVARIANT
            }
        }
    }

    // ==================== Case folding ====================

    /// Fold `text` to the form used for case-insensitive comparison
    pub fn fold_case(&self, text: &str) -> String {
        match self.case_rule {
            CaseRule::Default => text.to_lowercase(),
            CaseRule::Turkic => text
                .chars()
                .map(|c| match c {
                    'I' => 'ı',
                    'İ' => 'i',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase(),
        }
    }

    /// Compare two strings ignoring case under this locale's rule
    pub fn eq_ignore_case(&self, a: &str, b: &str) -> bool {
        a == b || self.fold_case(a) == self.fold_case(b)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let end = tag.find(['.', '@']).unwrap_or(tag.len());
    tag[..end].replace('_', "-")
}

// ============================================================================
// BUILT-IN TABLE
// ============================================================================

static BUILTIN: &[Locale] = &[
    Locale::INVARIANT,
    Locale::new("en-US", '.', ','),
    Locale::new("en-GB", '.', ','),
    Locale::new("de-DE", ',', '.'),
    Locale::new("de-CH", '.', '\u{2019}'),
    Locale::new("fr-FR", ',', '\u{202F}'),
    Locale::new("es-ES", ',', '.'),
    Locale::new("it-IT", ',', '.'),
    Locale::new("nl-NL", ',', '.'),
    Locale::new("pt-BR", ',', '.'),
    Locale::new("ru-RU", ',', '\u{00A0}').with_symbols("не число", "∞", "-∞"),
    Locale::new("pl-PL", ',', '\u{00A0}'),
    Locale::new("sv-SE", ',', '\u{00A0}')
        .with_negative_sign('\u{2212}')
        .with_symbols("NaN", "∞", "\u{2212}∞"),
    Locale::new("ja-JP", '.', ','),
    Locale::new("tr-TR", ',', '.').with_case_rule(CaseRule::Turkic),
];

// ============================================================================
// PROCESS DEFAULT
// ============================================================================

static DEFAULT_LOCALE: OnceCell<Locale> = OnceCell::new();

/// Configure the process default locale. May succeed only once.
pub fn set_default_locale(locale: Locale) -> Result<(), LocaleError> {
    DEFAULT_LOCALE.set(locale).map_err(|_| {
        let current = default_locale().tag();
        LocaleError::AlreadyConfigured { current }
    })?;
    tracing::debug!(locale = locale.tag(), "default locale configured");
    Ok(())
}

/// The process default locale; invariant until configured
pub fn default_locale() -> Locale {
    DEFAULT_LOCALE.get().copied().unwrap_or(Locale::INVARIANT)
}
