//! Property tests for the optional container
//!
//! These verify the container laws that callers of the conversion API rely on.

use morph_optional::{Optional, OptionalError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

proptest! {
    #[test]
    fn present_holds_its_value(x in any::<i64>()) {
        let opt = Optional::of(x);
        prop_assert!(opt.is_present());
        prop_assert_eq!(opt.value(), Ok(&x));
    }

    #[test]
    fn present_text_holds_its_value(s in ".*") {
        let opt = Optional::of(s.clone());
        prop_assert_eq!(opt.into_value(), Ok(s));
    }

    #[test]
    fn map_identity(x in any::<i32>()) {
        prop_assert_eq!(Optional::of(x).map(|v| v), Optional::of(x));
    }

    #[test]
    fn map_composition(x in any::<i16>()) {
        let f = |v: i16| i32::from(v) * 2;
        let g = |v: i32| v - 1;
        prop_assert_eq!(Optional::of(x).map(f).map(g), Optional::of(x).map(|v| g(f(v))));
    }

    #[test]
    fn flat_map_left_identity(x in any::<u8>()) {
        let f = |v: u8| if v % 2 == 0 { Optional::of(v) } else { Optional::empty() };
        prop_assert_eq!(Optional::of(x).flat_map(f), f(x));
    }

    #[test]
    fn option_roundtrip(x in proptest::option::of(any::<u32>())) {
        let opt = Optional::from(x);
        prop_assert_eq!(opt.is_present(), x.is_some());
        prop_assert_eq!(Option::<u32>::from(opt), x);
    }
}

#[rstest]
#[case::empty(Optional::<String>::empty())]
#[case::default(Optional::<String>::default())]
fn empty_rejects_value_access(#[case] opt: Optional<String>) {
    assert!(!opt.is_present());
    assert_eq!(opt.value().unwrap_err(), OptionalError::IllegalState);
    assert_eq!(opt.into_value().unwrap_err(), OptionalError::IllegalState);
}

#[rstest]
#[case(Optional::of(3), 3)]
#[case(Optional::empty(), 42)]
fn or_else_falls_back_only_when_empty(#[case] opt: Optional<i32>, #[case] expected: i32) {
    assert_eq!(opt.or_else(42), expected);
}

#[test]
fn empty_combinators_stay_empty() {
    let empty = Optional::<i32>::empty();
    assert!(empty.map(|v| v + 1).is_empty());
    assert!(empty.flat_map(Optional::of).is_empty());
    assert!(empty.filter(|_| true).is_empty());
    assert_eq!(empty.or_default(), 0);
    assert_eq!(empty.into_iter().count(), 0);
}

#[test]
fn equality_follows_contained_value() {
    assert_eq!(Optional::of("a"), Optional::of("a"));
    assert_ne!(Optional::of("a"), Optional::of("b"));
    assert_ne!(Optional::of("a"), Optional::empty());
    assert!(Optional::<i32>::empty() < Optional::of(i32::MIN));
}
