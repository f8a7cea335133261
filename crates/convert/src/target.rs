//! Target type descriptors
//!
//! [`TargetType`] is the closed set of shapes the ladder can convert into.
//! Typed callers never build one by hand: [`Convertible::target_type`]
//! supplies it at the call boundary. Callers holding a runtime type name use
//! [`TargetType::from_name`].
//!
//! [`Convertible::target_type`]: crate::Convertible::target_type

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConvertError, ConvertResult};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Primitive targets handled by the locale-aware numeric step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Decimal,
    Char,
}

impl PrimitiveKind {
    /// Every primitive kind
    pub const ALL: [Self; 16] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::Usize,
        Self::F32,
        Self::F64,
        Self::Decimal,
        Self::Char,
    ];

    /// Rust name of the type
    pub const fn name(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::Char => "char",
        }
    }
}

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// One named constant of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub name: Cow<'static, str>,
    pub ordinal: i64,
}

impl EnumMember {
    pub fn new(name: impl Into<Cow<'static, str>>, ordinal: i64) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// An enumeration of named constants with integer backing values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: Cow<'static, str>,
    members: Vec<EnumMember>,
}

impl EnumDescriptor {
    /// Build a descriptor, members in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidArgument`] for an empty enum name, a
    /// member name declared twice or an ordinal declared twice.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        members: impl IntoIterator<Item = EnumMember>,
    ) -> ConvertResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConvertError::invalid_argument(
                "name",
                "enumeration name must not be empty",
            ));
        }

        let members: Vec<EnumMember> = members.into_iter().collect();
        let mut names = HashSet::with_capacity(members.len());
        let mut ordinals = HashSet::with_capacity(members.len());
        for member in &members {
            if member.name.is_empty() {
                return Err(ConvertError::invalid_argument(
                    "members",
                    format!("enumeration {name} has a member without a name"),
                ));
            }
            if !names.insert(member.name.as_ref()) {
                return Err(ConvertError::invalid_argument(
                    "members",
                    format!("member {} declared twice in {name}", member.name),
                ));
            }
            if !ordinals.insert(member.ordinal) {
                return Err(ConvertError::invalid_argument(
                    "members",
                    format!("ordinal {} declared twice in {name}", member.ordinal),
                ));
            }
        }

        Ok(Self { name, members })
    }

    /// Build a descriptor whose ordinals follow declaration order from zero
    pub fn sequential<I, S>(name: impl Into<Cow<'static, str>>, names: I) -> ConvertResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let members = names
            .into_iter()
            .zip(0_i64..)
            .map(|(n, ordinal)| EnumMember::new(n, ordinal));
        Self::new(name, members)
    }

    /// Descriptor of a Rust enum declared through [`convertible_enum!`].
    ///
    /// The compiler already rejects the duplicates [`EnumDescriptor::new`]
    /// checks for, so no validation runs.
    ///
    /// [`convertible_enum!`]: crate::convertible_enum
    #[doc(hidden)]
    pub fn from_declaration(name: &'static str, members: Vec<EnumMember>) -> Self {
        Self {
            name: Cow::Borrowed(name),
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// The member backed by `ordinal`
    pub fn by_ordinal(&self, ordinal: i64) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.ordinal == ordinal)
    }

    /// The first member, in declaration order, whose name satisfies `matches`
    pub fn by_name<F>(&self, mut matches: F) -> Option<&EnumMember>
    where
        F: FnMut(&str) -> bool,
    {
        self.members.iter().find(|m| matches(m.name.as_ref()))
    }
}

// ============================================================================
// TARGET TYPE
// ============================================================================

/// The type a conversion produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    /// UTF-8 text
    Text,
    /// `bool`
    Boolean,
    /// A named-constant enumeration
    Enumeration(Arc<EnumDescriptor>),
    /// A globally unique identifier
    Identifier,
    /// Numbers and `char`
    Primitive(PrimitiveKind),
}

impl TargetType {
    /// Diagnostic name of the type
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Text => Cow::Borrowed("string"),
            Self::Boolean => Cow::Borrowed("bool"),
            Self::Enumeration(desc) => Cow::Owned(desc.name().to_string()),
            Self::Identifier => Cow::Borrowed("uuid"),
            Self::Primitive(kind) => Cow::Borrowed(kind.name()),
        }
    }

    /// Resolve a non-enum type by name (`"i32"`, `"bool"`, `"uuid"`, ...).
    ///
    /// Enumerations carry their members and cannot be named; build them with
    /// [`EnumDescriptor`].
    pub fn from_name(name: &str) -> Option<Self> {
        let target = match name.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Self::Text,
            "bool" | "boolean" => Self::Boolean,
            "uuid" | "guid" => Self::Identifier,
            "int" => Self::Primitive(PrimitiveKind::I32),
            "long" => Self::Primitive(PrimitiveKind::I64),
            "float" => Self::Primitive(PrimitiveKind::F32),
            "double" => Self::Primitive(PrimitiveKind::F64),
            other => {
                let kind = PrimitiveKind::ALL
                    .into_iter()
                    .find(|k| k.name() == other)?;
                Self::Primitive(kind)
            }
        };
        Some(target)
    }
}

impl From<EnumDescriptor> for TargetType {
    fn from(desc: EnumDescriptor) -> Self {
        Self::Enumeration(Arc::new(desc))
    }
}

impl From<PrimitiveKind> for TargetType {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
