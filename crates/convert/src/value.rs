//! Dynamically-typed source values
//!
//! [`Value`] is the boxed form a caller hands to the object-accepting API when
//! the source type is only known at runtime. Every variant is one concrete
//! runtime type, so the ladder's identity check is an exact variant match.

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::locale::Locale;
use crate::numeric;
use crate::target::{PrimitiveKind, TargetType};

/// A boxed member of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumValue {
    /// Name of the enumeration type
    pub enum_name: Cow<'static, str>,
    /// Member name
    pub member: Cow<'static, str>,
    /// Backing integer
    pub ordinal: i64,
}

impl EnumValue {
    pub fn new(
        enum_name: impl Into<Cow<'static, str>>,
        member: impl Into<Cow<'static, str>>,
        ordinal: i64,
    ) -> Self {
        Self {
            enum_name: enum_name.into(),
            member: member.into(),
            ordinal,
        }
    }
}

/// Runtime type tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Primitive(PrimitiveKind),
    Text,
    Identifier,
    Enumeration,
}

impl ValueKind {
    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "bool",
            Self::Primitive(kind) => kind.name(),
            Self::Text => "string",
            Self::Identifier => "uuid",
            Self::Enumeration => "enum",
        }
    }
}

/// A value whose type is known only at runtime
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "lowercase"))]
pub enum Value {
    /// The absent sentinel
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    Text(String),
    Uuid(Uuid),
    Enum(EnumValue),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::I8(_) => ValueKind::Primitive(PrimitiveKind::I8),
            Self::I16(_) => ValueKind::Primitive(PrimitiveKind::I16),
            Self::I32(_) => ValueKind::Primitive(PrimitiveKind::I32),
            Self::I64(_) => ValueKind::Primitive(PrimitiveKind::I64),
            Self::I128(_) => ValueKind::Primitive(PrimitiveKind::I128),
            Self::Isize(_) => ValueKind::Primitive(PrimitiveKind::Isize),
            Self::U8(_) => ValueKind::Primitive(PrimitiveKind::U8),
            Self::U16(_) => ValueKind::Primitive(PrimitiveKind::U16),
            Self::U32(_) => ValueKind::Primitive(PrimitiveKind::U32),
            Self::U64(_) => ValueKind::Primitive(PrimitiveKind::U64),
            Self::U128(_) => ValueKind::Primitive(PrimitiveKind::U128),
            Self::Usize(_) => ValueKind::Primitive(PrimitiveKind::Usize),
            Self::F32(_) => ValueKind::Primitive(PrimitiveKind::F32),
            Self::F64(_) => ValueKind::Primitive(PrimitiveKind::F64),
            Self::Decimal(_) => ValueKind::Primitive(PrimitiveKind::Decimal),
            Self::Char(_) => ValueKind::Primitive(PrimitiveKind::Char),
            Self::Text(_) => ValueKind::Text,
            Self::Uuid(_) => ValueKind::Identifier,
            Self::Enum(_) => ValueKind::Enumeration,
        }
    }

    /// Check if this is the absent sentinel
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is text
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Borrow as text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check whether this value's runtime type is exactly `target`.
    ///
    /// An enum value also has to name a member `target` defines.
    pub fn matches(&self, target: &TargetType) -> bool {
        match (self, target) {
            (Self::Text(_), TargetType::Text)
            | (Self::Bool(_), TargetType::Boolean)
            | (Self::Uuid(_), TargetType::Identifier) => true,
            (Self::Enum(value), TargetType::Enumeration(desc)) => {
                value.enum_name == desc.name()
                    && desc
                        .by_ordinal(value.ordinal)
                        .is_some_and(|member| member.name == value.member)
            }
            (_, TargetType::Primitive(kind)) => self.kind() == ValueKind::Primitive(*kind),
            _ => false,
        }
    }

    // ==================== Stringify ====================

    /// Render this value as text under `locale`.
    ///
    /// Returns `None` for [`Value::Null`]. The rendering is the one the
    /// ladder re-parses, so every non-null value round-trips through it.
    pub fn to_text(&self, locale: &Locale) -> Option<Cow<'_, str>> {
        let text = match self {
            Self::Null => return None,
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Bool(true) => Cow::Borrowed("True"),
            Self::Bool(false) => Cow::Borrowed("False"),
            Self::I8(v) => Cow::Owned(numeric::format_integer(*v, locale)),
            Self::I16(v) => Cow::Owned(numeric::format_integer(*v, locale)),
            Self::I32(v) => Cow::Owned(numeric::format_integer(*v, locale)),
            Self::I64(v) => Cow::Owned(numeric::format_integer(*v, locale)),
            Self::I128(v) => Cow::Owned(numeric::format_integer(*v, locale)),
            Self::Isize(v) => Cow::Owned(numeric::format_integer(*v, locale)),
            Self::U8(v) => Cow::Owned(v.to_string()),
            Self::U16(v) => Cow::Owned(v.to_string()),
            Self::U32(v) => Cow::Owned(v.to_string()),
            Self::U64(v) => Cow::Owned(v.to_string()),
            Self::U128(v) => Cow::Owned(v.to_string()),
            Self::Usize(v) => Cow::Owned(v.to_string()),
            Self::F32(v) => Cow::Owned(numeric::format_float(*v, locale)),
            Self::F64(v) => Cow::Owned(numeric::format_float(*v, locale)),
            Self::Decimal(v) => Cow::Owned(numeric::format_decimal(v, locale)),
            Self::Char(c) => Cow::Owned(c.to_string()),
            Self::Uuid(id) => Cow::Owned(id.hyphenated().to_string()),
            Self::Enum(value) => Cow::Borrowed(value.member.as_ref()),
        };
        Some(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text(&Locale::INVARIANT) {
            Some(text) => f.write_str(&text),
            None => f.write_str("null"),
        }
    }
}

// ==================== From impls ====================

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    char => Char,
    String => Text,
    Uuid => Uuid,
    EnumValue => Enum,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
