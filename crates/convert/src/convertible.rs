//! Types the conversion ladder can produce
//!
//! [`Convertible`] ties a Rust type to its [`TargetType`] and to the [`Value`]
//! variant that carries it. Every supported primitive implements it here;
//! user enums get it from [`convertible_enum!`](crate::convertible_enum).

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::target::{EnumDescriptor, PrimitiveKind, TargetType};
use crate::value::{EnumValue, Value};

/// A type that can be the target of a conversion
pub trait Convertible: Sized {
    /// Descriptor handed to the ladder
    fn target_type() -> TargetType;

    /// Take the value back out of the variant carrying it
    fn from_value(value: Value) -> Option<Self>;

    /// Box the value
    fn into_value(self) -> Value;
}

macro_rules! impl_convertible {
    ($($ty:ty => $variant:ident, $target:expr;)*) => {
        $(
            impl Convertible for $ty {
                #[inline]
                fn target_type() -> TargetType {
                    $target
                }

                #[inline]
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

impl_convertible! {
    String => Text, TargetType::Text;
    bool => Bool, TargetType::Boolean;
    Uuid => Uuid, TargetType::Identifier;
    i8 => I8, TargetType::Primitive(PrimitiveKind::I8);
    i16 => I16, TargetType::Primitive(PrimitiveKind::I16);
    i32 => I32, TargetType::Primitive(PrimitiveKind::I32);
    i64 => I64, TargetType::Primitive(PrimitiveKind::I64);
    i128 => I128, TargetType::Primitive(PrimitiveKind::I128);
    isize => Isize, TargetType::Primitive(PrimitiveKind::Isize);
    u8 => U8, TargetType::Primitive(PrimitiveKind::U8);
    u16 => U16, TargetType::Primitive(PrimitiveKind::U16);
    u32 => U32, TargetType::Primitive(PrimitiveKind::U32);
    u64 => U64, TargetType::Primitive(PrimitiveKind::U64);
    u128 => U128, TargetType::Primitive(PrimitiveKind::U128);
    usize => Usize, TargetType::Primitive(PrimitiveKind::Usize);
    f32 => F32, TargetType::Primitive(PrimitiveKind::F32);
    f64 => F64, TargetType::Primitive(PrimitiveKind::F64);
    Decimal => Decimal, TargetType::Primitive(PrimitiveKind::Decimal);
    char => Char, TargetType::Primitive(PrimitiveKind::Char);
}

// ============================================================================
// ENUMERATIONS
// ============================================================================

/// A Rust enum with integer-backed, named members
pub trait Enumeration: Copy + 'static {
    /// Shared descriptor of the enum's members
    fn descriptor() -> Arc<EnumDescriptor>;

    fn from_ordinal(ordinal: i64) -> Option<Self>;

    fn ordinal(self) -> i64;
}

/// [`Convertible::target_type`] for an [`Enumeration`]
pub fn enum_target_type<E: Enumeration>() -> TargetType {
    TargetType::Enumeration(E::descriptor())
}

/// [`Convertible::from_value`] for an [`Enumeration`]
pub fn enum_from_value<E: Enumeration>(value: Value) -> Option<E> {
    match value {
        Value::Enum(v) if v.enum_name == E::descriptor().name() => E::from_ordinal(v.ordinal),
        _ => None,
    }
}

/// [`Convertible::into_value`] for an [`Enumeration`]
pub fn enum_into_value<E: Enumeration>(member: E) -> Value {
    let descriptor = E::descriptor();
    let ordinal = member.ordinal();
    let name = descriptor
        .by_ordinal(ordinal)
        .map(|m| m.name.clone())
        .unwrap_or_default();
    Value::Enum(EnumValue::new(descriptor.name().to_string(), name, ordinal))
}

/// Declare a fieldless enum that converts with the ladder.
///
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`;
/// other attributes are passed through. Explicit discriminants become the
/// ordinals.
///
/// ```
/// use morph_convert::{convertible_enum, parse_str};
///
/// convertible_enum! {
///     pub enum Entry {
///         Entry1,
///         Entry2,
///         Entry3 = 7,
///     }
/// }
///
/// assert_eq!(parse_str::<Entry>("entry2").unwrap(), Entry::Entry2);
/// assert_eq!(parse_str::<Entry>("7").unwrap(), Entry::Entry3);
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $ordinal:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(= $ordinal)?,
            )+
        }

        impl $crate::Enumeration for $name {
            fn descriptor() -> $crate::__private::Arc<$crate::EnumDescriptor> {
                static DESCRIPTOR: $crate::__private::Lazy<$crate::__private::Arc<$crate::EnumDescriptor>> =
                    $crate::__private::Lazy::new(|| {
                        $crate::__private::Arc::new($crate::EnumDescriptor::from_declaration(
                            stringify!($name),
                            vec![$($crate::EnumMember::new(stringify!($variant), $name::$variant as i64)),+],
                        ))
                    });
                $crate::__private::Arc::clone(&DESCRIPTOR)
            }

            fn from_ordinal(ordinal: i64) -> Option<Self> {
                $(
                    if ordinal == Self::$variant as i64 {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            #[inline]
            fn ordinal(self) -> i64 {
                self as i64
            }
        }

        impl $crate::Convertible for $name {
            fn target_type() -> $crate::TargetType {
                $crate::convertible::enum_target_type::<Self>()
            }

            fn from_value(value: $crate::Value) -> Option<Self> {
                $crate::convertible::enum_from_value(value)
            }

            fn into_value(self) -> $crate::Value {
                $crate::convertible::enum_into_value(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::convertible_enum! {
        /// Test enum
        enum Level {
            Low = -1,
            Mid,
            High = 10,
        }
    }

    #[test]
    fn test_primitive_round_trip_through_value() {
        assert_eq!(i32::from_value(12_i32.into_value()), Some(12));
        assert_eq!(i32::from_value(Value::I64(12)), None);
        assert_eq!(String::from_value(Value::text("a")), Some("a".to_string()));
        assert_eq!(
            <char as Convertible>::target_type(),
            TargetType::Primitive(PrimitiveKind::Char)
        );
    }

    #[test]
    fn test_enum_descriptor_follows_declaration() {
        let desc = Level::descriptor();
        assert_eq!(desc.name(), "Level");
        let members: Vec<_> = desc
            .members()
            .iter()
            .map(|m| (m.name.as_ref(), m.ordinal))
            .collect();
        assert_eq!(members, vec![("Low", -1), ("Mid", 0), ("High", 10)]);
        assert!(Arc::ptr_eq(&desc, &Level::descriptor()));
    }

    #[test]
    fn test_enum_value_round_trip() {
        let value = Level::High.into_value();
        assert_eq!(value, Value::Enum(EnumValue::new("Level", "High", 10)));
        assert_eq!(Level::from_value(value), Some(Level::High));
        assert_eq!(Level::from_value(Value::Enum(EnumValue::new("Other", "High", 10))), None);
        assert_eq!(Level::from_ordinal(5), None);
    }
}
