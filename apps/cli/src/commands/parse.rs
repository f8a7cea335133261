//! `morph parse`

use anyhow::{Context, bail};
use morph_convert::{Converter, EnumDescriptor, EnumMember, Locale, TargetType, Value};
use serde_json::json;

use crate::cli::ParseArgs;

pub fn run(args: &ParseArgs, locale: Locale) -> anyhow::Result<()> {
    let target = target_type(args)?;
    let source = Value::from(args.value.clone());
    let converter = Converter::new(locale);
    tracing::debug!(target_type = %target, locale = locale.tag(), safe = args.safe, "parse");

    let converted = if args.safe {
        converter.try_convert(&source, &target).into_option()
    } else {
        let value = converter
            .convert(&source, &target)
            .with_context(|| format!("cannot convert to {target}"))?;
        Some(value)
    };

    match (converted, args.json) {
        (Some(value), true) => {
            let out = json!({
                "value": to_json(&value),
                "type": target.name(),
                "locale": locale.tag(),
            });
            println!("{out}");
        }
        (None, true) => {
            let out = json!({ "value": null, "type": target.name(), "locale": locale.tag() });
            println!("{out}");
        }
        (value, false) => println!("{}", morph_convert::Optional::from(value)),
    }
    Ok(())
}

fn target_type(args: &ParseArgs) -> anyhow::Result<TargetType> {
    if args.target.eq_ignore_ascii_case("enum") {
        let descriptor = enum_descriptor(&args.enum_name, &args.members)?;
        return Ok(descriptor.into());
    }
    if !args.members.is_empty() {
        bail!("--member is only valid with --type enum");
    }
    TargetType::from_name(&args.target).with_context(|| format!("unknown type '{}'", args.target))
}

/// Members get the next ordinal after the previous one unless given explicitly
fn enum_descriptor(name: &str, members: &[String]) -> anyhow::Result<EnumDescriptor> {
    if members.is_empty() {
        bail!("--type enum needs at least one --member");
    }

    let mut next = 0_i64;
    let mut parsed = Vec::with_capacity(members.len());
    for entry in members {
        let (member, ordinal) = match entry.split_once('=') {
            Some((member, ordinal)) => {
                let ordinal: i64 = ordinal
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid ordinal in --member {entry}"))?;
                (member.trim(), ordinal)
            }
            None => (entry.trim(), next),
        };
        parsed.push(EnumMember::new(member.to_string(), ordinal));
        next = ordinal.saturating_add(1);
    }

    Ok(EnumDescriptor::new(name.to_string(), parsed)?)
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::I8(v) => json!(v),
        Value::I16(v) => json!(v),
        Value::I32(v) => json!(v),
        Value::I64(v) => json!(v),
        Value::Isize(v) => json!(v),
        Value::U8(v) => json!(v),
        Value::U16(v) => json!(v),
        Value::U32(v) => json!(v),
        Value::U64(v) => json!(v),
        Value::Usize(v) => json!(v),
        Value::F32(v) if v.is_finite() => json!(v),
        Value::F64(v) if v.is_finite() => json!(v),
        Value::Enum(e) => json!({ "member": e.member, "ordinal": e.ordinal }),
        // Wide integers, decimals, non-finite floats and the textual kinds
        other => json!(other.to_string()),
    }
}
