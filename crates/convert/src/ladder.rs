//! The conversion ladder
//!
//! Rules are tried in a fixed order and the first that applies decides the
//! result:
//!
//! 1. identity, when the source already has the target's runtime type
//! 2. stringify any other non-text source under the locale
//! 3. text targets take the string unchanged
//! 4. enumerations, by ordinal then by case-insensitive name
//! 5. identifiers, canonical hyphenated form only
//! 6. booleans, `1`/`0`/`true`/`false`
//! 7. primitives, through the locale numeric grammar
//!
//! Every rejection is a [`FormatError`].

use std::borrow::Cow;

use uuid::Uuid;

use crate::error::{ConvertError, ConvertResult, FormatError, FormatReason};
use crate::locale::Locale;
use crate::numeric;
use crate::target::{EnumDescriptor, EnumMember, PrimitiveKind, TargetType};
use crate::value::{EnumValue, Value};

/// Run the full ladder on a boxed source
pub(crate) fn convert_value(
    source: &Value,
    target: &TargetType,
    locale: &Locale,
) -> ConvertResult<Value> {
    if source.matches(target) {
        tracing::trace!(target_type = %target, "identity conversion");
        return Ok(source.clone());
    }

    let text = source.to_text(locale).ok_or_else(ConvertError::absent_value)?;
    if let Cow::Owned(rendered) = &text {
        tracing::trace!(
            source_kind = source.kind().name(),
            rendered = %rendered,
            locale = locale.tag(),
            "stringified source"
        );
    }
    parse_text(&text, target, locale).map_err(ConvertError::from)
}

/// Run the text rules of the ladder
pub(crate) fn parse_text(
    text: &str,
    target: &TargetType,
    locale: &Locale,
) -> Result<Value, FormatError> {
    let result = match target {
        TargetType::Text => {
            tracing::trace!("text target, value unchanged");
            return Ok(Value::text(text));
        }
        TargetType::Enumeration(descriptor) => {
            parse_enum(text, descriptor, locale).map(Value::Enum)
        }
        TargetType::Identifier => parse_identifier(text).map(Value::Uuid),
        TargetType::Boolean => parse_boolean(text).map(Value::Bool),
        TargetType::Primitive(kind) => parse_primitive(text, *kind, locale),
    };

    match result {
        Ok(value) => {
            tracing::trace!(target_type = %target, locale = locale.tag(), "parsed text");
            Ok(value)
        }
        Err(reason) => {
            let err = FormatError::new(text, target, locale, reason);
            tracing::debug!(code = "CONVERT_FORMAT_ERROR", %err, "conversion rejected");
            Err(err)
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

fn parse_enum(
    text: &str,
    descriptor: &EnumDescriptor,
    locale: &Locale,
) -> Result<EnumValue, FormatReason> {
    let member = match numeric::parse_integer::<i64>(text, locale) {
        Ok(ordinal) => descriptor
            .by_ordinal(ordinal)
            .ok_or(FormatReason::UndefinedOrdinal(ordinal))?,
        Err(FormatReason::Overflow) => return Err(FormatReason::Overflow),
        Err(_) => {
            let name = text.trim();
            let folded = locale.fold_case(name);
            descriptor
                .by_name(|candidate| candidate == name || locale.fold_case(candidate) == folded)
                .ok_or(FormatReason::UnknownMember)?
        }
    };
    Ok(member_value(descriptor, member))
}

fn member_value(descriptor: &EnumDescriptor, member: &EnumMember) -> EnumValue {
    EnumValue::new(
        descriptor.name().to_string(),
        member.name.clone(),
        member.ordinal,
    )
}

/// Only the 36-character `8-4-4-4-12` form, either case
fn parse_identifier(text: &str) -> Result<Uuid, FormatReason> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 36
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => *b == b'-',
            _ => b.is_ascii_hexdigit(),
        });
    if !shaped {
        return Err(FormatReason::MalformedIdentifier);
    }
    Uuid::parse_str(text).map_err(|_| FormatReason::MalformedIdentifier)
}

fn parse_boolean(text: &str) -> Result<bool, FormatReason> {
    let token = text.trim();
    if token == "1" || token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token == "0" || token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FormatReason::UnrecognizedBoolean)
    }
}

fn parse_char(text: &str) -> Result<char, FormatReason> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FormatReason::NotASingleChar),
    }
}

fn parse_primitive(text: &str, kind: PrimitiveKind, locale: &Locale) -> Result<Value, FormatReason> {
    use numeric::{parse_decimal, parse_float, parse_integer};

    let value = match kind {
        PrimitiveKind::I8 => Value::I8(parse_integer(text, locale)?),
        PrimitiveKind::I16 => Value::I16(parse_integer(text, locale)?),
        PrimitiveKind::I32 => Value::I32(parse_integer(text, locale)?),
        PrimitiveKind::I64 => Value::I64(parse_integer(text, locale)?),
        PrimitiveKind::I128 => Value::I128(parse_integer(text, locale)?),
        PrimitiveKind::Isize => Value::Isize(parse_integer(text, locale)?),
        PrimitiveKind::U8 => Value::U8(parse_integer(text, locale)?),
        PrimitiveKind::U16 => Value::U16(parse_integer(text, locale)?),
        PrimitiveKind::U32 => Value::U32(parse_integer(text, locale)?),
        PrimitiveKind::U64 => Value::U64(parse_integer(text, locale)?),
        PrimitiveKind::U128 => Value::U128(parse_integer(text, locale)?),
        PrimitiveKind::Usize => Value::Usize(parse_integer(text, locale)?),
        PrimitiveKind::F32 => Value::F32(parse_float(text, locale)?),
        PrimitiveKind::F64 => Value::F64(parse_float(text, locale)?),
        PrimitiveKind::Decimal => Value::Decimal(parse_decimal(text, locale)?),
        PrimitiveKind::Char => Value::Char(parse_char(text)?),
    };
    Ok(value)
}
