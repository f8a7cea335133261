//! Locale-aware numeric grammar
//!
//! Integers: optional sign, ASCII digits, nothing else. Fractional types
//! additionally accept group separators in the integral part, the locale
//! decimal separator and an exponent. Floats also accept the locale's NaN and
//! infinity symbols. Surrounding whitespace is ignored.
//!
//! Formatting is the inverse: plain digits, the locale decimal separator and
//! the locale negative sign, never grouping.

use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use rust_decimal::Decimal;

use crate::error::FormatReason;
use crate::locale::Locale;

// ============================================================================
// FLOAT ABSTRACTION
// ============================================================================

/// The IEEE types the grammar produces
pub(crate) trait Float: Copy + fmt::Display + FromStr {
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Float for $t {
                const NAN: Self = <$t>::NAN;
                const INFINITY: Self = <$t>::INFINITY;
                const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    <$t>::is_infinite(self)
                }

                #[inline]
                fn is_sign_negative(self) -> bool {
                    <$t>::is_sign_negative(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

// ============================================================================
// PARSING
// ============================================================================

/// Parse an integer of any width
pub(crate) fn parse_integer<T: FromStr>(text: &str, locale: &Locale) -> Result<T, FormatReason> {
    let (negative, digits) = strip_sign(text.trim(), locale);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatReason::Malformed);
    }

    // A negative zero is zero, for unsigned targets too
    let parsed = if negative && digits.bytes().any(|b| b != b'0') {
        format!("-{digits}").parse()
    } else {
        digits.parse()
    };
    parsed.map_err(|_| FormatReason::Overflow)
}

/// Parse a binary floating point number
pub(crate) fn parse_float<F: Float>(text: &str, locale: &Locale) -> Result<F, FormatReason> {
    let text = text.trim();
    if locale.eq_ignore_case(text, locale.nan_symbol()) {
        return Ok(F::NAN);
    }
    if locale.eq_ignore_case(text, locale.positive_infinity()) {
        return Ok(F::INFINITY);
    }
    if locale.eq_ignore_case(text, locale.negative_infinity()) {
        return Ok(F::NEG_INFINITY);
    }

    let numeral = scan_fractional(text, locale)?;
    numeral
        .scientific()
        .parse()
        .map_err(|_| FormatReason::Malformed)
}

/// Parse a base-10 decimal
///
/// The exponent is folded into the digits before parsing, so only values
/// outside the `Decimal` range overflow. Digits past the 28th fractional
/// place are rounded away.
pub(crate) fn parse_decimal(text: &str, locale: &Locale) -> Result<Decimal, FormatReason> {
    let numeral = scan_fractional(text.trim(), locale)?;
    let plain = numeral.positional().ok_or(FormatReason::Overflow)?;
    Decimal::from_str(&plain).map_err(|_| FormatReason::Overflow)
}

/// Integral digits of `Decimal::MAX`
const DECIMAL_INTEGRAL_DIGITS: i64 = 29;

/// Fractional places a `Decimal` can hold
const DECIMAL_SCALE: i64 = 28;

/// A fractional numeral with the locale stripped away
#[derive(Debug)]
struct Numeral {
    negative: bool,
    integral: String,
    fraction: String,
    exponent: Option<i64>,
}

impl Numeral {
    /// Rust's float grammar: `-12.5e-3`
    fn scientific(&self) -> String {
        let mut out = String::with_capacity(self.integral.len() + self.fraction.len() + 24);
        if self.negative {
            out.push('-');
        }
        if self.integral.is_empty() {
            out.push('0');
        }
        out.push_str(&self.integral);
        if !self.fraction.is_empty() {
            out.push('.');
            out.push_str(&self.fraction);
        }
        if let Some(exponent) = self.exponent {
            out.push('e');
            out.push_str(&exponent.to_string());
        }
        out
    }

    /// The same value with the exponent applied to the decimal point.
    /// `None` when the integral part has more digits than a `Decimal` holds.
    fn positional(&self) -> Option<String> {
        let digits = format!("{}{}", self.integral, self.fraction);
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Some("0".to_string());
        }

        // Position of the decimal point relative to the first significant digit
        let leading_zeros = (digits.len() - significant.len()) as i64;
        let point = (self.integral.len() as i64)
            .saturating_add(self.exponent.unwrap_or(0))
            .saturating_sub(leading_zeros);

        if point > DECIMAL_INTEGRAL_DIGITS {
            return None;
        }
        if point < -DECIMAL_SCALE {
            return Some("0".to_string());
        }

        let mut out = String::with_capacity(significant.len() + DECIMAL_INTEGRAL_DIGITS as usize + 3);
        if self.negative {
            out.push('-');
        }
        if point <= 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
            out.push_str(significant);
        } else {
            let point = point as usize;
            if point >= significant.len() {
                out.push_str(significant);
                out.extend(std::iter::repeat_n('0', point - significant.len()));
            } else {
                out.push_str(&significant[..point]);
                out.push('.');
                out.push_str(&significant[point..]);
            }
        }
        Some(out)
    }
}

fn scan_fractional(text: &str, locale: &Locale) -> Result<Numeral, FormatReason> {
    let (negative, body) = strip_sign(text, locale);
    let mut chars = body.chars().peekable();

    let mut integral = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            integral.push(c);
        } else if integral.is_empty() || !is_group_separator(c, locale) {
            break;
        }
        chars.next();
    }

    let mut fraction = String::new();
    if chars.next_if_eq(&locale.decimal_separator()).is_some() {
        while let Some(c) = chars.next_if(char::is_ascii_digit) {
            fraction.push(c);
        }
    }

    if integral.is_empty() && fraction.is_empty() {
        return Err(FormatReason::Malformed);
    }

    let exponent = if chars.next_if(|c| matches!(c, 'e' | 'E')).is_some() {
        Some(scan_exponent(&mut chars, locale)?)
    } else {
        None
    };

    if chars.next().is_some() {
        return Err(FormatReason::Malformed);
    }

    Ok(Numeral {
        negative,
        integral,
        fraction,
        exponent,
    })
}

/// Exponents beyond `i64` saturate; either way the value is out of range
fn scan_exponent(chars: &mut Peekable<Chars<'_>>, locale: &Locale) -> Result<i64, FormatReason> {
    let negative = chars
        .next_if(|&c| c == '-' || c == locale.negative_sign())
        .is_some();
    if !negative {
        chars.next_if(|&c| c == '+' || c == locale.positive_sign());
    }

    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    if digits.is_empty() {
        return Err(FormatReason::Malformed);
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Split off a leading sign. The ASCII signs are always accepted.
fn strip_sign<'a>(text: &'a str, locale: &Locale) -> (bool, &'a str) {
    if let Some(rest) = text
        .strip_prefix(locale.negative_sign())
        .or_else(|| text.strip_prefix('-'))
    {
        return (true, rest);
    }
    let rest = text
        .strip_prefix(locale.positive_sign())
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    (false, rest)
}

fn is_group_separator(c: char, locale: &Locale) -> bool {
    let separator = locale.group_separator();
    c == separator
        || (is_space_separator(separator) && is_space_separator(c))
        || (separator == '\u{2019}' && c == '\'')
}

// Any of these stands in for a space-like group separator
const fn is_space_separator(c: char) -> bool {
    matches!(c, ' ' | '\u{00A0}' | '\u{202F}')
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Render an integer with the locale's negative sign
pub(crate) fn format_integer<T: fmt::Display>(value: T, locale: &Locale) -> String {
    localize(&value.to_string(), locale)
}

/// Render a float in its shortest round-trip form
pub(crate) fn format_float<F: Float>(value: F, locale: &Locale) -> String {
    if value.is_nan() {
        locale.nan_symbol().to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            locale.negative_infinity().to_string()
        } else {
            locale.positive_infinity().to_string()
        }
    } else {
        localize(&value.to_string(), locale)
    }
}

pub(crate) fn format_decimal(value: &Decimal, locale: &Locale) -> String {
    localize(&value.to_string(), locale)
}

fn localize(plain: &str, locale: &Locale) -> String {
    let (negative, body) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain),
    };
    let mut out = String::with_capacity(plain.len() + 2);
    if negative {
        out.push(locale.negative_sign());
    }
    out.extend(body.chars().map(|c| {
        if c == '.' {
            locale.decimal_separator()
        } else {
            c
        }
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn locale(tag: &str) -> Locale {
        Locale::from_tag(tag).unwrap()
    }

    #[rstest]
    #[case("12", Ok(12))]
    #[case("  -12 ", Ok(-12))]
    #[case("+7", Ok(7))]
    #[case("2147483648", Err(FormatReason::Overflow))]
    #[case("1,000", Err(FormatReason::Malformed))]
    #[case("12.0", Err(FormatReason::Malformed))]
    #[case("", Err(FormatReason::Malformed))]
    #[case("-", Err(FormatReason::Malformed))]
    #[case("--1", Err(FormatReason::Malformed))]
    fn test_parse_i32(#[case] text: &str, #[case] expected: Result<i32, FormatReason>) {
        assert_eq!(parse_integer::<i32>(text, &Locale::INVARIANT), expected);
    }

    #[test]
    fn test_unsigned_accepts_negative_zero_only() {
        assert_eq!(parse_integer::<u8>("-0", &Locale::INVARIANT), Ok(0));
        assert_eq!(
            parse_integer::<u8>("-1", &Locale::INVARIANT),
            Err(FormatReason::Overflow)
        );
        assert_eq!(
            parse_integer::<u8>("256", &Locale::INVARIANT),
            Err(FormatReason::Overflow)
        );
    }

    #[test]
    fn test_locale_negative_sign() {
        let sv = locale("sv-SE");
        assert_eq!(parse_integer::<i64>("\u{2212}5", &sv), Ok(-5));
        assert_eq!(parse_integer::<i64>("-5", &sv), Ok(-5));
        assert_eq!(format_integer(-5_i64, &sv), "\u{2212}5");
    }

    #[rstest]
    #[case("invariant", "3.5", Ok(3.5))]
    #[case("invariant", "1,234.5", Ok(1234.5))]
    #[case("invariant", "3,5", Ok(35.0))]
    #[case("de-DE", "3,5", Ok(3.5))]
    #[case("de-DE", "3.5", Ok(35.0))]
    #[case("de-DE", "1.234,5", Ok(1234.5))]
    #[case("fr-FR", "1 234,5", Ok(1234.5))]
    #[case("fr-FR", "3.5", Err(FormatReason::Malformed))]
    #[case("invariant", "1.5e3", Ok(1500.0))]
    #[case("invariant", "1.5E-1", Ok(0.15))]
    #[case("invariant", ".5", Ok(0.5))]
    #[case("invariant", "5.", Ok(5.0))]
    #[case("invariant", ",5", Err(FormatReason::Malformed))]
    #[case("invariant", "1e", Err(FormatReason::Malformed))]
    #[case("invariant", "abc", Err(FormatReason::Malformed))]
    fn test_parse_f64(
        #[case] tag: &str,
        #[case] text: &str,
        #[case] expected: Result<f64, FormatReason>,
    ) {
        assert_eq!(parse_float::<f64>(text, &locale(tag)), expected);
    }

    #[test]
    fn test_special_symbols() {
        assert!(parse_float::<f64>("nan", &Locale::INVARIANT).unwrap().is_nan());
        assert_eq!(
            parse_float::<f32>("-infinity", &Locale::INVARIANT),
            Ok(f32::NEG_INFINITY)
        );
        assert_eq!(parse_float::<f64>("∞", &locale("de-DE")), Ok(f64::INFINITY));
        assert!(parse_float::<f64>("не число", &locale("ru-RU")).unwrap().is_nan());
        assert_eq!(
            parse_float::<f64>("NaN", &locale("ru-RU")),
            Err(FormatReason::Malformed)
        );
    }

    #[test]
    fn test_parse_decimal() {
        let de = locale("de-DE");
        assert_eq!(parse_decimal("1.234,50", &de), Ok(Decimal::new(123_450, 2)));
        assert_eq!(
            parse_decimal("-2.5e2", &Locale::INVARIANT),
            Ok(Decimal::new(-250, 0))
        );
        assert_eq!(
            parse_decimal("NaN", &Locale::INVARIANT),
            Err(FormatReason::Malformed)
        );
    }

    #[rstest]
    #[case("0.5e29", Ok(Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0)))]
    #[case("9e27", Ok(Decimal::from_i128_with_scale(9 * 10_i128.pow(27), 0)))]
    #[case("1.5e-28", Ok(Decimal::new(2, 28)))]
    #[case("-125e-2", Ok(Decimal::new(-125, 2)))]
    #[case("0.000e5", Ok(Decimal::ZERO))]
    #[case("1e-40", Ok(Decimal::ZERO))]
    #[case("1e29", Err(FormatReason::Overflow))]
    #[case("8e28", Err(FormatReason::Overflow))]
    #[case("1e99999999999999999999", Err(FormatReason::Overflow))]
    fn test_parse_decimal_exponent(
        #[case] text: &str,
        #[case] expected: Result<Decimal, FormatReason>,
    ) {
        assert_eq!(parse_decimal(text, &Locale::INVARIANT), expected);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(3213.334_f32, &Locale::INVARIANT), "3213.334");
        assert_eq!(format_float(-0.25_f64, &locale("de-DE")), "-0,25");
        assert_eq!(format_float(f64::NAN, &locale("ru-RU")), "не число");
        assert_eq!(format_float(f64::NEG_INFINITY, &Locale::INVARIANT), "-Infinity");
        assert_eq!(format_decimal(&Decimal::new(-15, 1), &locale("fr-FR")), "-1,5");
    }

    proptest! {
        #[test]
        fn integers_round_trip_in_every_locale(v in any::<i64>(), idx in 0..Locale::all().len()) {
            let locale = Locale::all()[idx];
            let text = format_integer(v, &locale);
            prop_assert_eq!(parse_integer::<i64>(&text, &locale), Ok(v));
        }

        #[test]
        fn floats_round_trip_in_every_locale(v in any::<f64>(), idx in 0..Locale::all().len()) {
            let locale = Locale::all()[idx];
            let text = format_float(v, &locale);
            let back = parse_float::<f64>(&text, &locale).unwrap();
            if v.is_nan() {
                prop_assert!(back.is_nan());
            } else {
                prop_assert_eq!(back.to_bits(), v.to_bits());
            }
        }
    }
}
