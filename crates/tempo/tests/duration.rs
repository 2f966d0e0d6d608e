// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "test code")]
#![allow(clippy::float_cmp, clippy::unwrap_used, reason = "test code")]

//! Tests for `Duration` through the public API.

use std::cmp::Ordering;

use rstest::rstest;
use tempo::{Duration, ErrorKind, Hours, MicroSeconds, MilliSeconds, Minutes, NanoSeconds, Seconds, Unit};

#[test]
fn comparison_is_unit_independent() {
    assert_eq!(Seconds::new(1.0).compare(&MilliSeconds::new(1000.0)), Ordering::Equal);
    assert_eq!(Seconds::new(1.0).compare(&Seconds::new(2.0)), Ordering::Less);
    assert_eq!(Hours::new(0.5), Minutes::new(30.0));
    assert_eq!(NanoSeconds::new(1_500.0), MicroSeconds::new(1.5));
}

#[test]
fn comparison_is_transitive_across_units() {
    let a = MilliSeconds::new(999.0);
    let b = Seconds::new(1.0);
    let c = MicroSeconds::new(1_000_001.0);

    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
}

#[rstest]
#[case(Seconds::new(400.0), Seconds::new(100.0), 4, 4.0)]
#[case(Seconds::new(100.0), Seconds::new(400.0), 0, 0.25)]
#[case(Seconds::new(60.0), Seconds::new(-20.0), -3, -3.0)]
#[case(Seconds::new(1.0), Seconds::new(3.0), 0, 1.0 / 3.0)]
fn division(#[case] dividend: Seconds, #[case] divisor: Seconds, #[case] int: i64, #[case] float: f64) {
    assert_eq!(dividend.divide_int(&divisor).unwrap(), int);
    assert_eq!(dividend.divide_float(&divisor).unwrap(), float);
}

#[test]
fn modulo_across_units() {
    assert!(Seconds::new(11.0).modulo(&Seconds::new(10.0)).unwrap().is_equal(&Seconds::new(1.0)));
    assert_eq!(Minutes::new(2.0).modulo(&Seconds::new(50.0)).unwrap(), Seconds::new(20.0));
}

#[test]
fn division_by_zero_everywhere() {
    let duration = Seconds::new(3.0);
    let zeros = [
        Duration::with_unit(0.0, Unit::HOURS),
        Duration::zero(),
        Duration::with_unit(0.0, Unit::SECONDS / 10.0),
    ];

    assert!(matches!(duration.slice(0.0).unwrap_err().kind(), ErrorKind::DivisionByZero));
    for zero in zeros {
        assert!(matches!(duration.divide_int(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero));
        assert!(matches!(duration.divide_float(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero));
        assert!(matches!(duration.modulo(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero));
    }
}

#[test]
fn subtype_is_kept_by_arithmetic() {
    let total: MilliSeconds = MilliSeconds::new(100.0) + Seconds::new(1.0) - MicroSeconds::new(500.0);

    assert_eq!(total.unit(), Unit::MILLISECONDS);
    assert_eq!(total.value(), 1099.5);
}

#[test]
fn custom_unit_renders_relative_to_canonical_unit() {
    let tenth = Duration::with_unit(5.0, Unit::SECONDS / 10.0);

    assert_eq!(tenth.to_string(), "5 1/10 second equivalent");
    assert_eq!(tenth, MilliSeconds::new(500.0));
    assert_eq!(Seconds::create_from(tenth).to_string(), "0.5 seconds");
}

#[rstest]
#[case(Seconds::new(1.0), "1 second")]
#[case(Seconds::new(2.0), "2 seconds")]
#[case(Seconds::new(-1.0), "-1 seconds")]
#[case(Seconds::new(0.0), "0 seconds")]
fn seconds_render(#[case] duration: Seconds, #[case] expected: &str) {
    assert_eq!(duration.to_string(), expected);
}
