//! Stringify-then-parse properties

use morph_convert::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

fn any_locale() -> impl Strategy<Value = Locale> {
    (0..Locale::all().len()).prop_map(|i| Locale::all()[i])
}

proptest! {
    #[test]
    fn integers_through_text(v in any::<i128>(), locale in any_locale()) {
        let text = parse_with::<String>(&Value::from(v), &locale).unwrap();
        prop_assert_eq!(parse_str_with::<i128>(&text, &locale).unwrap(), v);
    }

    #[test]
    fn unsigned_widen_through_value(v in any::<u32>()) {
        prop_assert_eq!(parse::<u64>(&Value::from(v)).unwrap(), u64::from(v));
    }

    #[test]
    fn floats_through_text(v in any::<f32>(), locale in any_locale()) {
        let text = parse_with::<String>(&Value::from(v), &locale).unwrap();
        let back = parse_str_with::<f32>(&text, &locale).unwrap();
        if v.is_nan() {
            prop_assert!(back.is_nan());
        } else {
            prop_assert_eq!(back.to_bits(), v.to_bits());
        }
    }

    #[test]
    fn decimals_through_text(mantissa in any::<i64>(), scale in 0_u32..=18, locale in any_locale()) {
        let v = Decimal::new(mantissa, scale);
        let text = parse_with::<String>(&Value::from(v), &locale).unwrap();
        prop_assert_eq!(parse_str_with::<Decimal>(&text, &locale).unwrap(), v);
    }

    #[test]
    fn booleans_through_text(v in any::<bool>()) {
        let text = parse::<String>(&Value::from(v)).unwrap();
        prop_assert_eq!(parse_str::<bool>(&text).unwrap(), v);
    }

    #[test]
    fn uuids_through_text(bytes in any::<[u8; 16]>()) {
        let id = Uuid::from_bytes(bytes);
        let text = parse::<String>(&Value::from(id)).unwrap();
        prop_assert_eq!(parse_str::<Uuid>(&text).unwrap(), id);
        prop_assert_eq!(parse_str::<Uuid>(&text.to_uppercase()).unwrap(), id);
    }

    #[test]
    fn safe_never_fails_on_arbitrary_text(text in ".*") {
        let _ = try_parse_str::<i64>(&text);
        let _ = try_parse_str::<f64>(&text);
        let _ = try_parse_str::<bool>(&text);
        let _ = try_parse_str::<Uuid>(&text);
        let _ = try_parse_str::<char>(&text);
    }
}
