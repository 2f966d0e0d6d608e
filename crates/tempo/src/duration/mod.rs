// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod magnitude;

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};

use magnitude::Magnitude;

use crate::unit::{Dynamic, FixedUnit, Hour, Micro, Milli, Minute, Nano, Second, Unit, UnitTag};
use crate::{Error, Result};

/// A duration fixed to nanoseconds.
pub type NanoSeconds = Duration<Nano>;

/// A duration fixed to microseconds.
pub type MicroSeconds = Duration<Micro>;

/// A duration fixed to milliseconds.
pub type MilliSeconds = Duration<Milli>;

/// A duration fixed to seconds.
pub type Seconds = Duration<Second>;

/// A duration fixed to minutes.
pub type Minutes = Duration<Minute>;

/// A duration fixed to hours.
pub type Hours = Duration<Hour>;

/// An amount of elapsed time, stored as a value in a unit.
///
/// The magnitude of a duration is `value * unit` nanoseconds. The unit tag `U` fixes the unit
/// at the type level: [`Seconds`] is always expressed in seconds, [`MilliSeconds`] in
/// milliseconds, and so on. The default tag, [`Dynamic`], accepts any unit including custom
/// ratios.
///
/// Durations are immutable values; every operation returns a new duration.
///
/// # Arithmetic
///
/// Durations of any two tags can be added and subtracted. The result keeps the tag and unit
/// of the left operand; the right operand is converted into that unit first.
///
/// ```
/// use tempo::{MilliSeconds, Seconds};
///
/// let total: Seconds = Seconds::new(10.0) + MilliSeconds::new(500.0);
/// assert_eq!(total.value(), 10.5);
///
/// let rest = Seconds::new(10.0) - Seconds::new(3.0);
/// assert_eq!(rest.to_string(), "7 seconds");
/// ```
///
/// # Comparison
///
/// Durations compare by magnitude, regardless of the units they were built from. Comparison
/// never relies on native float equality: both magnitudes are rendered as fixed-point decimal
/// nanoseconds and compared exactly, so rounding noise from unit conversion does not break
/// equality.
///
/// ```
/// use tempo::{MilliSeconds, Seconds};
///
/// assert_eq!(Seconds::new(1.0), MilliSeconds::new(1000.0));
/// assert!(Seconds::new(1.0) < Seconds::new(2.0));
/// assert_eq!(Seconds::new(0.1) + Seconds::new(0.2), MilliSeconds::new(300.0));
/// ```
///
/// # Division
///
/// [`slice`][Self::slice], [`divide_int`][Self::divide_int], [`divide_float`][Self::divide_float]
/// and [`modulo`][Self::modulo] fail with [`ErrorKind::DivisionByZero`][crate::ErrorKind::DivisionByZero]
/// when the divisor is zero.
///
/// ```
/// use tempo::Seconds;
///
/// assert_eq!(Seconds::new(400.0).divide_int(&Seconds::new(100.0))?, 4);
/// assert_eq!(Seconds::new(100.0).divide_float(&Seconds::new(400.0))?, 0.25);
/// assert_eq!(Seconds::new(11.0).modulo(&Seconds::new(10.0))?, Seconds::new(1.0));
/// assert!(Seconds::new(1.0).divide_int(&Seconds::zero()).is_err());
///
/// # Ok::<(), tempo::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Duration<U: UnitTag = Dynamic> {
    value: f64,
    unit: Unit,
    tag: PhantomData<U>,
}

impl<U: FixedUnit> Duration<U> {
    /// Creates a duration of `value` in the tag's unit.
    ///
    /// ```
    /// use tempo::{Seconds, Unit};
    ///
    /// let duration = Seconds::new(1.5);
    /// assert_eq!(duration.value_in(Unit::MILLISECONDS), 1500.0);
    /// ```
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self::from_parts(value, U::UNIT)
    }
}

impl Duration<Dynamic> {
    /// Creates a duration of `value` in an arbitrary `unit`.
    ///
    /// The sentinels [`Unit::UNKNOWN`] and [`Unit::UNCHANGED`] are not units and are replaced
    /// by nanoseconds.
    #[must_use]
    pub fn with_unit(value: f64, unit: Unit) -> Self {
        let unit = if unit.is_sentinel() { Unit::NANOSECONDS } else { unit };
        Self::from_parts(value, unit)
    }
}

impl<U: UnitTag> Duration<U> {
    const fn from_parts(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit,
            tag: PhantomData,
        }
    }

    /// Returns a zero-length duration.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_parts(0.0, U::conversion_unit())
    }

    /// Converts any duration into this duration type.
    ///
    /// The result is expressed in the tag's unit, or in nanoseconds for [`Dynamic`].
    ///
    /// ```
    /// use tempo::{Duration, MicroSeconds, Seconds, Unit};
    ///
    /// let micros = MicroSeconds::create_from(Seconds::new(10.0));
    /// assert_eq!(micros.value(), 10_000_000.0);
    ///
    /// let dynamic: Duration = Duration::create_from(Seconds::new(1.0));
    /// assert_eq!(dynamic.unit(), Unit::NANOSECONDS);
    /// ```
    #[must_use]
    pub fn create_from<V: UnitTag>(other: Duration<V>) -> Self {
        let unit = U::conversion_unit();
        Self::from_parts(other.value_in(unit), unit)
    }

    /// Converts a [`std::time::Duration`].
    #[must_use]
    pub fn from_std(duration: std::time::Duration) -> Self {
        Self::create_from(Seconds::new(duration.as_secs_f64()))
    }

    /// Converts into a [`std::time::Duration`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`][crate::ErrorKind::OutOfRange] when the duration is
    /// negative, not finite or too large.
    pub fn to_std(&self) -> Result<std::time::Duration> {
        std::time::Duration::try_from_secs_f64(self.value_in(Unit::SECONDS))
            .map_err(|e| Error::out_of_range(format!("{self} is not representable as std::time::Duration: {e}")))
    }

    /// Returns the unit of the stored value.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the stored value, expressed in [`unit`][Self::unit].
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the value expressed in `unit`.
    ///
    /// When `unit` is [`Unit::UNCHANGED`] or the duration's own unit, the stored value is
    /// returned as-is, without a conversion round trip.
    ///
    /// ```
    /// use tempo::{Seconds, Unit};
    ///
    /// let quarter = Seconds::new(10.0).slice(4.0)?;
    /// assert_eq!(quarter.value_in(Unit::UNCHANGED), 2.5);
    /// assert_eq!(quarter.value_in(Unit::MILLISECONDS), 2500.0);
    ///
    /// # Ok::<(), tempo::Error>(())
    /// ```
    #[must_use]
    pub fn value_in(&self, unit: Unit) -> f64 {
        if unit == Unit::UNCHANGED || unit == self.unit {
            return self.value;
        }

        (self.value * self.unit.ratio()) / unit.ratio()
    }

    /// Returns the stored value truncated toward zero.
    #[must_use]
    pub fn int_value(&self) -> i64 {
        self.int_value_in(Unit::UNCHANGED)
    }

    /// Returns the value expressed in `unit`, truncated toward zero.
    #[expect(clippy::cast_possible_truncation, reason = "truncation toward zero is the intent")]
    #[must_use]
    pub fn int_value_in(&self, unit: Unit) -> i64 {
        self.value_in(unit) as i64
    }

    /// Returns `true` if the magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.compare(&NanoSeconds::zero()) == Ordering::Equal
    }

    /// Returns `true` if the magnitude is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.compare(&NanoSeconds::zero()) == Ordering::Less
    }

    /// Divides the duration into `count` equal parts and returns one of them.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DivisionByZero`][crate::ErrorKind::DivisionByZero] if `count` is zero.
    ///
    /// ```
    /// use tempo::Seconds;
    ///
    /// assert_eq!(Seconds::new(100.0).slice(4.0)?.to_string(), "25 seconds");
    ///
    /// # Ok::<(), tempo::Error>(())
    /// ```
    pub fn slice(&self, count: f64) -> Result<Self> {
        if count == 0.0 {
            return Err(Error::division_by_zero());
        }

        Ok(Self::from_parts(self.value / count, self.unit))
    }

    /// Returns how many whole times `other` fits into this duration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DivisionByZero`][crate::ErrorKind::DivisionByZero] if `other` is zero.
    #[expect(clippy::cast_possible_truncation, reason = "truncation toward zero is the intent")]
    pub fn divide_int<V: UnitTag>(&self, other: &Duration<V>) -> Result<i64> {
        self.divide_float(other).map(|ratio| ratio as i64)
    }

    /// Returns the ratio of this duration to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DivisionByZero`][crate::ErrorKind::DivisionByZero] if `other` is zero.
    pub fn divide_float<V: UnitTag>(&self, other: &Duration<V>) -> Result<f64> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }

        Ok(self.value / other.value_in(self.unit))
    }

    /// Returns the remainder of dividing this duration by `other`, in this duration's unit.
    ///
    /// The remainder carries the sign of this duration. When both durations share a unit the
    /// remainder is computed directly on the stored values, which is exact. Otherwise both are
    /// scaled to nanoseconds first so that widely differing units lose as little precision as
    /// possible.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DivisionByZero`][crate::ErrorKind::DivisionByZero] if `other` is zero.
    pub fn modulo<V: UnitTag>(&self, other: &Duration<V>) -> Result<Self> {
        if other.is_zero() {
            return Err(Error::division_by_zero());
        }

        if other.unit == self.unit {
            return Ok(Self::from_parts(self.value % other.value, self.unit));
        }

        let this_nanos = self.value_in(Unit::NANOSECONDS);
        let other_nanos = other.value_in(Unit::NANOSECONDS);

        Ok(Self::from_parts((this_nanos % other_nanos) / self.unit.ratio(), self.unit))
    }

    /// Orders two durations by magnitude.
    ///
    /// Magnitudes are compared at a resolution of one millionth of a nanosecond: durations whose
    /// magnitudes differ by less than 5e-7 ns compare equal. The ordering is total: NaN
    /// magnitudes sort after positive infinity and equal each other.
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use tempo::{MilliSeconds, Seconds};
    ///
    /// assert_eq!(Seconds::new(1.0).compare(&MilliSeconds::new(1000.0)), Ordering::Equal);
    /// assert_eq!(Seconds::new(1.0).compare(&Seconds::new(2.0)), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare<V: UnitTag>(&self, other: &Duration<V>) -> Ordering {
        self.magnitude().cmp(&other.magnitude())
    }

    /// Returns `true` if both durations have the same magnitude.
    #[must_use]
    pub fn is_equal<V: UnitTag>(&self, other: &Duration<V>) -> bool {
        self.compare(other) == Ordering::Equal
    }

    fn magnitude(&self) -> Magnitude {
        Magnitude::of(self.value_in(Unit::NANOSECONDS))
    }
}

impl<U: UnitTag> Default for Duration<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: UnitTag, V: UnitTag> Add<Duration<V>> for Duration<U> {
    type Output = Self;

    fn add(self, rhs: Duration<V>) -> Self {
        Self::from_parts(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl<U: UnitTag, V: UnitTag> Sub<Duration<V>> for Duration<U> {
    type Output = Self;

    fn sub(self, rhs: Duration<V>) -> Self {
        Self::from_parts(self.value - rhs.value_in(self.unit), self.unit)
    }
}

impl<U: UnitTag> Neg for Duration<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.value, self.unit)
    }
}

impl<U: UnitTag, V: UnitTag> PartialEq<Duration<V>> for Duration<U> {
    fn eq(&self, other: &Duration<V>) -> bool {
        self.is_equal(other)
    }
}

impl<U: UnitTag> Eq for Duration<U> {}

impl<U: UnitTag, V: UnitTag> PartialOrd<Duration<V>> for Duration<U> {
    fn partial_cmp(&self, other: &Duration<V>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<U: UnitTag> Ord for Duration<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<U: UnitTag> From<std::time::Duration> for Duration<U> {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_std(duration)
    }
}

impl<U: UnitTag> TryFrom<Duration<U>> for std::time::Duration {
    type Error = Error;

    fn try_from(duration: Duration<U>) -> Result<Self> {
        duration.to_std()
    }
}

impl<U: UnitTag> Display for Duration<U> {
    #[expect(clippy::float_cmp, reason = "exactly one unit is singular")]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let plural = self.value != 1.0;
        match self.unit.name(plural) {
            Some(name) => write!(f, "{} {name}", self.value),
            None => write!(f, "{} {}", self.value, self.unit.custom_name()),
        }
    }
}

impl<U: UnitTag> Debug for Duration<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duration")
            .field("value", &self.value)
            .field("unit", &self.unit.ratio())
            .finish()
    }
}

#[cfg(any(feature = "serde", test))]
impl<U: UnitTag> serde_core::Serialize for Duration<U> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.serialize_f64(self.value_in(U::conversion_unit()))
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de, U: UnitTag> serde_core::Deserialize<'de> for Duration<U> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        let value = <f64 as serde_core::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_parts(value, U::conversion_unit()))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::ErrorKind;

    static_assertions::assert_impl_all!(Seconds: Debug, Display, Clone, Copy, Send, Sync, Ord, Default);
    static_assertions::assert_impl_all!(Duration: Debug, Display, Clone, Copy, Send, Sync, Ord, Default);
    static_assertions::assert_impl_all!(Seconds: PartialEq<MilliSeconds>, PartialOrd<Duration>);

    #[test]
    fn value_in_same_unit_is_unchanged() {
        let duration = Seconds::new(10.0).slice(4.0).unwrap();

        assert_eq!(duration.value(), 2.5);
        assert_eq!(duration.value_in(Unit::UNCHANGED), 2.5);
        assert_eq!(duration.value_in(Unit::SECONDS), 2.5);
        assert_eq!(duration.value_in(Unit::MILLISECONDS), 2500.0);
        assert_eq!(duration.int_value(), 2);
    }

    #[test]
    fn int_value_truncates_toward_zero() {
        assert_eq!(Seconds::new(2.9).int_value(), 2);
        assert_eq!(Seconds::new(-2.9).int_value(), -2);
        assert_eq!(MilliSeconds::new(1999.0).int_value_in(Unit::SECONDS), 1);
    }

    #[rstest]
    #[case(Unit::NANOSECONDS)]
    #[case(Unit::MICROSECONDS)]
    #[case(Unit::MILLISECONDS)]
    #[case(Unit::MINUTES)]
    #[case(Unit::SECONDS / 10.0)]
    fn unit_conversion_round_trip(#[case] unit: Unit) {
        let original = Seconds::new(12.345);
        let converted = Duration::with_unit(original.value_in(unit), unit);

        let back = converted.value_in(original.unit());
        assert!((back - original.value()).abs() < 1e-9, "{back} != {}", original.value());
    }

    #[test]
    fn compare_across_units() {
        assert_eq!(Seconds::new(1.0).compare(&MilliSeconds::new(1000.0)), Ordering::Equal);
        assert_eq!(Seconds::new(1.0).compare(&Seconds::new(2.0)), Ordering::Less);
        assert_eq!(Minutes::new(1.0).compare(&Seconds::new(59.0)), Ordering::Greater);
        assert_eq!(Hours::new(1.0).compare(&MicroSeconds::new(3_600_000_000.0)), Ordering::Equal);
        assert!(Seconds::new(1.0).is_equal(&NanoSeconds::new(1e9)));
    }

    #[test]
    fn compare_absorbs_conversion_noise() {
        let sum = Seconds::new(0.1) + Seconds::new(0.2);

        assert_ne!(sum.value(), 0.3);
        assert_eq!(sum, MilliSeconds::new(300.0));
        assert_eq!(sum, Seconds::new(0.3));
    }

    #[test]
    fn compare_tolerance_is_half_a_femtosecond() {
        assert_eq!(NanoSeconds::new(1.0).compare(&NanoSeconds::new(1.0 + 4e-7)), Ordering::Equal);
        assert_eq!(NanoSeconds::new(1.0).compare(&NanoSeconds::new(1.0 + 2e-6)), Ordering::Less);
        assert!(NanoSeconds::new(-4e-7).is_zero());
    }

    #[test]
    fn compare_negative_durations() {
        let mut durations = vec![Seconds::new(1.0), Seconds::new(-1.0), Seconds::zero(), Seconds::new(-2.0)];
        durations.sort();

        assert_eq!(
            durations,
            vec![Seconds::new(-2.0), Seconds::new(-1.0), Seconds::zero(), Seconds::new(1.0)]
        );
        assert!(MilliSeconds::new(-1500.0) < Seconds::new(-1.0));
    }

    #[test]
    fn compare_is_total_for_nan() {
        let nan = Seconds::new(f64::NAN);

        assert_eq!(nan.compare(&nan), Ordering::Equal);
        assert_eq!(nan.compare(&Seconds::new(f64::INFINITY)), Ordering::Greater);
    }

    #[test]
    fn is_zero_ok() {
        assert!(Seconds::zero().is_zero());
        assert!(Duration::with_unit(0.0, Unit::HOURS).is_zero());
        assert!(Seconds::new(-0.0).is_zero());
        assert!(!NanoSeconds::new(1.0).is_zero());
    }

    #[test]
    fn is_negative_ok() {
        assert!(Seconds::new(-1.0).is_negative());
        assert!(!Seconds::zero().is_negative());
        assert!(!Seconds::new(1.0).is_negative());
    }

    #[test]
    fn add_keeps_left_unit() {
        let total = Seconds::new(10.0) + MilliSeconds::new(500.0);

        assert_eq!(total.unit(), Unit::SECONDS);
        assert_eq!(total.value(), 10.5);
        assert_eq!((Seconds::new(10.0) + Seconds::new(-3.0)).to_string(), "7 seconds");
    }

    #[test]
    fn subtract_keeps_left_unit() {
        let rest = MilliSeconds::new(1500.0) - Seconds::new(1.0);

        assert_eq!(rest.unit(), Unit::MILLISECONDS);
        assert_eq!(rest.value(), 500.0);
        assert_eq!((Seconds::new(10.0) - Seconds::new(-3.0)).to_string(), "13 seconds");
    }

    #[rstest]
    #[case(Seconds::new(0.1), Seconds::new(0.2))]
    #[case(Seconds::new(7.0), Seconds::new(-7.5))]
    #[case(Seconds::new(0.3), Seconds::new(0.7))]
    #[case(Seconds::new(-1.25), Seconds::new(0.125))]
    fn arithmetic_identities(#[case] d: Seconds, #[case] e: Seconds) {
        assert_eq!((d + e) - e, d);
        assert_eq!(d + (-e), d - e);
        assert_eq!(d + Seconds::new(-e.value()), d - e);
    }

    #[test]
    fn slice_ok() {
        let slice = Seconds::new(100.0).slice(4.0).unwrap();

        assert_eq!(slice, Seconds::new(25.0));
        assert_eq!(slice.unit(), Unit::SECONDS);
    }

    #[test]
    fn divide_ok() {
        assert_eq!(Seconds::new(400.0).divide_int(&Seconds::new(100.0)).unwrap(), 4);
        assert_eq!(Seconds::new(450.0).divide_int(&Seconds::new(100.0)).unwrap(), 4);
        assert_eq!(Seconds::new(100.0).divide_float(&Seconds::new(400.0)).unwrap(), 0.25);
        assert_eq!(MilliSeconds::new(1500.0).divide_float(&Seconds::new(1.0)).unwrap(), 1.5);
    }

    #[test]
    fn modulo_ok() {
        assert_eq!(Seconds::new(11.0).modulo(&Seconds::new(10.0)).unwrap(), Seconds::new(1.0));
        assert_eq!(Seconds::new(-11.0).modulo(&Seconds::new(10.0)).unwrap(), Seconds::new(-1.0));

        let remainder = Seconds::new(1.5).modulo(&MilliSeconds::new(400.0)).unwrap();
        assert_eq!(remainder.unit(), Unit::SECONDS);
        assert_eq!(remainder, MilliSeconds::new(300.0));
    }

    #[test]
    fn division_by_zero() {
        let zero = MilliSeconds::zero();
        let duration = Seconds::new(10.0);

        assert!(matches!(duration.slice(0.0).unwrap_err().kind(), ErrorKind::DivisionByZero));
        assert!(matches!(duration.divide_int(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero));
        assert!(matches!(duration.divide_float(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero));
        assert!(matches!(duration.modulo(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero));
        assert!(matches!(
            duration.modulo(&Seconds::new(-0.0)).unwrap_err().kind(),
            ErrorKind::DivisionByZero
        ));
    }

    #[test]
    fn create_from_ok() {
        let micros = MicroSeconds::create_from(Seconds::new(10.0));
        assert_eq!(micros.value(), 10_000_000.0);
        assert_eq!(micros.unit(), Unit::MICROSECONDS);

        let dynamic: Duration = Duration::create_from(Seconds::new(1.0));
        assert_eq!(dynamic.unit(), Unit::NANOSECONDS);
        assert_eq!(dynamic.value(), 1e9);
    }

    #[test]
    fn with_unit_replaces_sentinels() {
        assert_eq!(Duration::with_unit(5.0, Unit::UNKNOWN).unit(), Unit::NANOSECONDS);
        assert_eq!(Duration::with_unit(5.0, Unit::UNCHANGED).unit(), Unit::NANOSECONDS);
        assert_eq!(Duration::with_unit(5.0, Unit::MINUTES).unit(), Unit::MINUTES);
    }

    #[rstest]
    #[case(Seconds::new(1.0).to_string(), "1 second")]
    #[case(Seconds::new(2.0).to_string(), "2 seconds")]
    #[case(Seconds::new(0.5).to_string(), "0.5 seconds")]
    #[case(MilliSeconds::new(2.5).to_string(), "2.5 milliseconds")]
    #[case(NanoSeconds::new(1.0).to_string(), "1 nanosecond")]
    #[case(Duration::with_unit(3.0, Unit::MINUTES).to_string(), "3 minutes")]
    #[case(Duration::with_unit(1.0, Unit::HOURS).to_string(), "1 hour")]
    #[case(Duration::with_unit(5.0, Unit::SECONDS / 10.0).to_string(), "5 1/10 second equivalent")]
    fn display(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[test]
    fn debug_shows_value_and_unit() {
        assert_eq!(
            format!("{:?}", MilliSeconds::new(2.0)),
            "Duration { value: 2.0, unit: 1000000.0 }"
        );
    }

    #[test]
    fn std_interop() {
        let duration = Seconds::from_std(std::time::Duration::from_millis(1500));
        assert_eq!(duration.value(), 1.5);

        let millis: MilliSeconds = std::time::Duration::from_millis(1500).into();
        assert_eq!(millis.value(), 1500.0);

        assert_eq!(Seconds::new(1.5).to_std().unwrap(), std::time::Duration::from_millis(1500));
        assert_eq!(
            std::time::Duration::try_from(MilliSeconds::new(250.0)).unwrap(),
            std::time::Duration::from_millis(250)
        );
    }

    #[test]
    fn std_interop_out_of_range() {
        let error = Seconds::new(-1.0).to_std().unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::OutOfRange(_)));
        assert!(error.to_string().starts_with("-1 seconds is not representable"));

        assert!(Seconds::new(f64::NAN).to_std().is_err());
    }

    #[test]
    fn default_is_zero() {
        assert!(Seconds::default().is_zero());
        assert_eq!(Duration::<Dynamic>::default().unit(), Unit::NANOSECONDS);
    }

    #[test]
    fn serde_fixed_unit() {
        let json = serde_json::to_string(&Seconds::new(1.5)).unwrap();
        assert_eq!(json, "1.5");

        let duration: MilliSeconds = serde_json::from_str("250.5").unwrap();
        assert_eq!(duration.value(), 250.5);
        assert_eq!(duration.unit(), Unit::MILLISECONDS);
    }

    #[test]
    fn serde_dynamic_uses_nanoseconds() {
        let duration = Duration::with_unit(2.0, Unit::SECONDS / 10.0);
        let json = serde_json::to_string(&duration).unwrap();

        let restored: Duration = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.unit(), Unit::NANOSECONDS);
        assert_eq!(restored, MilliSeconds::new(200.0));
    }
}
