//! # morph-optional
//!
//! An immutable container that either holds exactly one value or nothing.
//!
//! `Optional<T>` is the vocabulary type the conversion engine returns from its
//! non-failing API. It is a thin wrapper over [`Option`] with a builder set that
//! makes the "reject absent input" and "absent input means empty" cases two
//! distinct constructors.
//!
//! ```rust
//! use morph_optional::Optional;
//!
//! let port = Optional::of(8080);
//! assert!(port.is_present());
//! assert_eq!(port.map(|p| p + 1).or_else(0), 8081);
//!
//! let missing: Optional<u16> = Optional::of_nullable(None);
//! assert_eq!(missing.or_default(), 0);
//! assert_eq!(missing.to_string(), "{Empty-Optional}");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;

use core::fmt;

pub use error::{OptionalError, OptionalResult};

/// Text rendered by `Display` for an empty optional.
pub const EMPTY_DISPLAY: &str = "{Empty-Optional}";

/// A value that may or may not be present.
///
/// Instances are immutable: every combinator consumes `self` and returns a new
/// container. Equality, hashing and ordering derive from the contained value,
/// with the empty state comparing less than any present value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Optional<T> {
    inner: Option<T>,
}

impl<T> Optional<T> {
    // ==================== Builders ====================

    /// Builds a present optional holding `value`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Builds a present optional from a nullable input, rejecting `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidArgument`] when `value` is `None`.
    #[inline]
    pub fn try_of(value: Option<T>) -> OptionalResult<Self> {
        value
            .map(Self::of)
            .ok_or(OptionalError::invalid_argument("value"))
    }

    /// Builds an optional that is present when `value` is `Some`, empty otherwise.
    #[inline]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { inner: value }
    }

    /// Builds an empty optional.
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    // ==================== Queries ====================

    /// Returns `true` if a value is present
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if no value is present
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrows the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::IllegalState`] when the optional is empty.
    #[inline]
    pub fn value(&self) -> OptionalResult<&T> {
        self.inner.as_ref().ok_or(OptionalError::IllegalState)
    }

    /// Takes the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::IllegalState`] when the optional is empty.
    #[inline]
    pub fn into_value(self) -> OptionalResult<T> {
        self.inner.ok_or(OptionalError::IllegalState)
    }

    // ==================== Fallbacks ====================

    /// Returns the value if present, otherwise `fallback`.
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        self.inner.unwrap_or(fallback)
    }

    /// Returns the value if present, otherwise the result of `supplier`.
    ///
    /// The supplier only runs for an empty optional.
    #[inline]
    pub fn or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.inner.unwrap_or_else(supplier)
    }

    /// Returns the value if present, otherwise `T::default()`.
    #[inline]
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    // ==================== Combinators ====================

    /// Maps the value if present.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional::of_nullable(self.inner.map(mapper))
    }

    /// Maps the value with a function that may itself produce nothing.
    ///
    /// A `None` from `mapper` yields an empty optional, never a present one.
    #[inline]
    pub fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::of_nullable(self.inner.and_then(mapper))
    }

    /// Applies an optional-returning function to the value if present.
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.inner {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::of_nullable(self.inner.filter(predicate))
    }

    /// Invokes `consumer` with the value if present; does nothing otherwise.
    #[inline]
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.inner {
            consumer(value);
        }
    }

    // ==================== Interop ====================

    /// Borrow as an `Optional<&T>`
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            inner: self.inner.as_ref(),
        }
    }

    /// Borrow as a standard `Option<&T>`
    #[inline]
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Convert into a standard `Option<T>`
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.inner
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional::Empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => value.fmt(f),
            None => f.write_str(EMPTY_DISPLAY),
        }
    }
}
