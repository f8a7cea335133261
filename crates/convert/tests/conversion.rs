//! End-to-end conversion behaviour through the public API

use morph_convert::prelude::*;
use morph_convert::{EnumDescriptor, EnumValue, FormatReason, PrimitiveKind};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

convertible_enum! {
    pub enum Entry {
        Entry1,
        Entry2,
        Entry3,
    }
}

convertible_enum! {
    pub enum MessageMatch {
        Exact,
        Wildcard,
        Regex,
    }
}

convertible_enum! {
    pub enum Field {
        Item,
        Other,
    }
}

const GUID: &str = "9A87A428-5E16-485F-833C-AAAE7B2CF203";

fn locale(tag: &str) -> Locale {
    Locale::from_tag(tag).unwrap()
}

fn reason<T: std::fmt::Debug>(result: ConvertResult<T>) -> FormatReason {
    result.unwrap_err().as_format().map(|e| e.reason).unwrap()
}

// ============================================================================
// SIMPLE TARGETS
// ============================================================================

#[test]
fn parses_simple_text() {
    assert_eq!(parse_str::<String>("hello world").unwrap(), "hello world");
    assert_eq!(parse_str::<i32>("12").unwrap(), 12);
    assert_eq!(parse_str::<i64>("321333423433").unwrap(), 321_333_423_433);
    assert_eq!(parse_str::<f32>("3213.33423433").unwrap(), 3213.334_234_33_f32);
    assert_eq!(parse_str::<f64>("3213.33423433").unwrap(), 3213.334_234_33_f64);
    assert_eq!(parse_str::<bool>("true").unwrap(), true);
}

#[test]
fn parses_enum_and_guid() {
    assert_eq!(parse_str::<MessageMatch>("Regex").unwrap(), MessageMatch::Regex);
    assert_eq!(parse_str::<Uuid>(GUID).unwrap(), Uuid::parse_str(GUID).unwrap());
}

#[test]
fn guid_round_trips_through_text() {
    let id = parse_str::<Uuid>(GUID).unwrap();
    let text = parse::<String>(&Value::from(id)).unwrap();
    assert_eq!(text, GUID.to_lowercase());
    assert_eq!(parse_str::<Uuid>(&text).unwrap(), id);
}

#[rstest]
#[case("1", true)]
#[case("true", true)]
#[case("TRUE", true)]
#[case(" True ", true)]
#[case("0", false)]
#[case("false", false)]
#[case("FaLsE", false)]
fn boolean_tokens(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(parse_str::<bool>(text).unwrap(), expected);
}

#[rstest]
#[case("blub")]
#[case("yes")]
#[case("on")]
#[case("2")]
#[case("")]
fn boolean_rejects_other_tokens(#[case] text: &str) {
    assert_eq!(reason(parse_str::<bool>(text)), FormatReason::UnrecognizedBoolean);
    assert!(try_parse_str::<bool>(text).is_empty());
}

// ============================================================================
// ENUMERATIONS
// ============================================================================

#[rstest]
#[case(Value::from("Entry2"), Entry::Entry2)]
#[case(Value::from(0), Entry::Entry1)]
#[case(Value::from("1"), Entry::Entry2)]
#[case(Value::from(2_i64), Entry::Entry3)]
#[case(Value::from("entry3"), Entry::Entry3)]
#[case(Entry::Entry1.into_value(), Entry::Entry1)]
fn enum_by_name_or_ordinal(#[case] source: Value, #[case] expected: Entry) {
    assert_eq!(parse::<Entry>(&source).unwrap(), expected);
}

#[test]
fn enum_rejects_unknown_names_and_ordinals() {
    assert_eq!(reason(parse_str::<Entry>("Entry2uuuu")), FormatReason::UnknownMember);
    assert_eq!(reason(parse_str::<Entry>("12")), FormatReason::UndefinedOrdinal(12));
    assert_eq!(reason(parse_str::<Entry>("1,000")), FormatReason::UnknownMember);
    assert!(try_parse_str::<Entry>("Entry2uuuu").is_empty());
}

#[rstest]
#[case(" Entry2 ", Entry::Entry2)]
#[case("\tentry3\n", Entry::Entry3)]
#[case(" 1 ", Entry::Entry2)]
fn enum_text_is_trimmed(#[case] text: &str, #[case] expected: Entry) {
    assert_eq!(parse_str::<Entry>(text).unwrap(), expected);
}

#[test]
fn enum_value_with_undefined_member_is_reparsed() {
    let target = Entry::target_type();
    let bogus = Value::Enum(EnumValue::new("Entry", "Bogus", 99));

    let err = convert(&bogus, &target, &Locale::INVARIANT).unwrap_err();
    assert_eq!(err.as_format().map(|e| e.reason), Some(FormatReason::UnknownMember));
    assert_eq!(reason(parse::<Entry>(&bogus)), FormatReason::UnknownMember);

    // A defined name under a stale ordinal resolves by name
    let stale = Value::Enum(EnumValue::new("Entry", "Entry3", 0));
    assert_eq!(parse::<Entry>(&stale).unwrap(), Entry::Entry3);
}

#[test]
fn enum_member_of_another_enum_is_matched_by_name() {
    let source = MessageMatch::Exact.into_value();
    assert!(try_parse::<Entry>(&source).is_empty());

    let source = Value::Enum(EnumValue::new("Other", "Entry3", 0));
    assert_eq!(parse::<Entry>(&source).unwrap(), Entry::Entry3);
}

#[test]
fn enum_names_fold_case_under_the_locale() {
    let tr = locale("tr-TR");
    assert_eq!(parse_str_with::<Field>("ITEM", &tr).unwrap(), Field::Item);
    assert_eq!(parse_str_with::<Field>("ıtem", &tr).unwrap(), Field::Item);
    assert!(try_parse_str_with::<Field>("item", &tr).is_empty());

    assert_eq!(parse_str_with::<Field>("item", &Locale::INVARIANT).unwrap(), Field::Item);
}

#[test]
fn runtime_enum_descriptor() {
    let target = TargetType::from(EnumDescriptor::sequential("Mode", ["Fast", "Slow"]).unwrap());
    let out = convert(&Value::from("slow"), &target, &Locale::INVARIANT).unwrap();
    assert_eq!(out, Value::Enum(EnumValue::new("Mode", "Slow", 1)));
}

// ============================================================================
// BOXED SOURCES
// ============================================================================

#[test]
fn parses_boxed_values() {
    assert_eq!(parse::<String>(&Value::from("Hello world")).unwrap(), "Hello world");
    assert_eq!(parse::<i32>(&Value::from(12)).unwrap(), 12);
    assert_eq!(parse::<i32>(&Value::from("12")).unwrap(), 12);
    assert_eq!(parse::<i64>(&Value::from(12_u8)).unwrap(), 12);
    assert_eq!(parse::<String>(&Value::from(true)).unwrap(), "True");
    assert_eq!(parse::<bool>(&Value::from(1_u64)).unwrap(), true);
}

#[test]
fn safe_parse_of_boxed_values() {
    assert_eq!(try_parse::<String>(&Value::from("Hello world")).into_value().unwrap(), "Hello world");
    assert_eq!(try_parse::<i32>(&Value::from(12)).into_value(), Ok(12));
    assert_eq!(try_parse::<i32>(&Value::from("12")).into_value(), Ok(12));
}

#[rstest]
#[case::null(Value::Null)]
#[case::unrelated(Value::from(Uuid::nil()))]
#[case::not_a_number(Value::from("xyz"))]
#[case::overflow(Value::from(i64::MAX))]
fn safe_parse_yields_empty(#[case] source: Value) {
    assert!(!try_parse::<i32>(&source).is_present());
}

#[test]
fn strict_parse_of_null_is_invalid_argument() {
    let err = parse::<i32>(&Value::from(None::<String>)).unwrap_err();
    assert_eq!(err.code(), "CONVERT_INVALID_ARGUMENT");
    assert!(!err.is_format());
}

#[test]
fn identity_returns_the_source() {
    let source = Value::from(f32::INFINITY);
    let out = convert(&source, &TargetType::Primitive(PrimitiveKind::F32), &locale("ru-RU")).unwrap();
    assert_eq!(out, source);
}

// ============================================================================
// LOCALES
// ============================================================================

#[rstest]
#[case("invariant", "3.5", Some(3.5))]
#[case("en-US", "3.5", Some(3.5))]
#[case("de-DE", "3,5", Some(3.5))]
#[case("de-DE", "3.5", Some(35.0))]
#[case("fr-FR", "3,5", Some(3.5))]
#[case("fr-FR", "3.5", None)]
#[case("de-CH", "1’234.5", Some(1234.5))]
#[case("ru-RU", "1 234,5", Some(1234.5))]
fn decimal_separator_follows_locale(
    #[case] tag: &str,
    #[case] text: &str,
    #[case] expected: Option<f64>,
) {
    let got = try_parse_str_with::<f64>(text, &locale(tag));
    assert_eq!(got.into_option(), expected);
}

#[test]
fn integers_never_group() {
    assert_eq!(reason(parse_str::<i32>("1,000")), FormatReason::Malformed);
    assert_eq!(reason(parse_str_with::<i32>("1.000", &locale("de-DE"))), FormatReason::Malformed);
}

#[test]
fn format_error_reports_diagnostics() {
    let err = parse_str_with::<u8>("300", &locale("pl-PL")).unwrap_err();
    let format = err.as_format().unwrap();
    assert_eq!(format.value, "300");
    assert_eq!(format.target, "u8");
    assert_eq!(format.locale, "pl-PL");
    assert_eq!(format.reason, FormatReason::Overflow);
}

#[test]
fn boxed_float_stringifies_under_locale() {
    let sv = locale("sv-SE");
    let out = Converter::new(sv).parse::<String>(&Value::from(-1.5_f64)).unwrap();
    assert_eq!(out, "\u{2212}1,5");
    assert_eq!(Converter::new(sv).parse_str::<f64>(&out).unwrap(), -1.5);
}
