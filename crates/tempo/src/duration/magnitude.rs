// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Exact ordering of nanosecond magnitudes via their fixed-point decimal rendering.
//!
//! Native float comparison is sensitive to the last bits of a product such as
//! `value * unit`, so two durations of equal magnitude built from different units may not
//! compare equal. The magnitudes are instead rendered as fixed-point decimals (which never
//! use exponential notation) and compared digit by digit.

use std::cmp::Ordering;

/// Fractional digits kept when rendering nanoseconds. Differences below a femtosecond are
/// rounding noise and compare as equal.
const FRACTION_DIGITS: usize = 6;

/// A nanosecond magnitude in a form with an exact, total ordering.
///
/// Variant order is significant: NaN sorts after positive infinity and equals itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Magnitude {
    NegativeInfinity,
    Finite(Decimal),
    PositiveInfinity,
    NaN,
}

impl Magnitude {
    pub(crate) fn of(nanos: f64) -> Self {
        if nanos.is_nan() {
            Self::NaN
        } else if nanos == f64::INFINITY {
            Self::PositiveInfinity
        } else if nanos == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else {
            Self::Finite(Decimal::new(nanos))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Decimal {
    fn new(value: f64) -> Self {
        let rendered = format!("{:.*}", FRACTION_DIGITS, value);

        let (negative, digits) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        // "-0.000000" is zero.
        let is_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');

        Self {
            negative: negative && !is_zero,
            integer: integer.to_owned(),
            fraction: fraction.to_owned(),
        }
    }

    fn cmp_abs(&self, other: &Self) -> Ordering {
        // No leading zeros, so a longer integer part is a larger number.
        self.integer
            .len()
            .cmp(&other.integer.len())
            .then_with(|| self.integer.cmp(&other.integer))
            .then_with(|| self.fraction.cmp(&other.fraction))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
