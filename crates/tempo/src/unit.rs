// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Time units and the tags that fix them on durations.

use std::fmt::Debug;
use std::ops::{Div, Mul};

/// A time unit, expressed as the number of nanoseconds in one unit.
///
/// The canonical units are provided as associated constants. Any other positive ratio can be
/// used as a custom unit, for example a tenth of a second:
///
/// ```
/// use tempo::{Duration, Unit};
///
/// let tenth = Unit::SECONDS / 10.0;
/// let duration = Duration::with_unit(5.0, tenth);
///
/// assert_eq!(duration.value_in(Unit::MILLISECONDS), 500.0);
/// assert_eq!(duration.to_string(), "5 1/10 second equivalent");
/// ```
///
/// Two sentinel values exist that are not real units: [`Unit::UNKNOWN`] marks a duration
/// type without a fixed unit, and [`Unit::UNCHANGED`] asks [`Duration::value_in`][crate::Duration::value_in]
/// to keep the duration's own unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Unit(f64);

impl Unit {
    /// One nanosecond.
    pub const NANOSECONDS: Self = Self(1.0);

    /// One microsecond.
    pub const MICROSECONDS: Self = Self(1e3);

    /// One millisecond.
    pub const MILLISECONDS: Self = Self(1e6);

    /// One second.
    pub const SECONDS: Self = Self(1e9);

    /// One minute.
    pub const MINUTES: Self = Self(60e9);

    /// One hour.
    pub const HOURS: Self = Self(3600e9);

    /// The unit is not fixed by the duration type.
    pub const UNKNOWN: Self = Self(0.0);

    /// Keep the current unit when reading a value.
    pub const UNCHANGED: Self = Self(-1.0);

    /// Canonical units in ascending order, with their singular and plural names.
    const CANONICAL: [(Self, &'static str, &'static str); 6] = [
        (Self::NANOSECONDS, "nanosecond", "nanoseconds"),
        (Self::MICROSECONDS, "microsecond", "microseconds"),
        (Self::MILLISECONDS, "millisecond", "milliseconds"),
        (Self::SECONDS, "second", "seconds"),
        (Self::MINUTES, "minute", "minutes"),
        (Self::HOURS, "hour", "hours"),
    ];

    /// Creates a custom unit from the number of nanoseconds it contains.
    #[must_use]
    pub const fn custom(nanos_per_unit: f64) -> Self {
        Self(nanos_per_unit)
    }

    /// Returns the number of nanoseconds in one unit.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        self.0
    }

    /// Returns `true` for [`Unit::UNKNOWN`] and [`Unit::UNCHANGED`].
    #[must_use]
    pub fn is_sentinel(self) -> bool {
        self == Self::UNKNOWN || self == Self::UNCHANGED
    }

    /// Returns the canonical name of the unit, or `None` if the ratio is not a canonical unit.
    ///
    /// ```
    /// use tempo::Unit;
    ///
    /// assert_eq!(Unit::SECONDS.name(false), Some("second"));
    /// assert_eq!(Unit::MILLISECONDS.name(true), Some("milliseconds"));
    /// assert_eq!((Unit::SECONDS / 10.0).name(true), None);
    /// ```
    #[must_use]
    pub fn name(self, plural: bool) -> Option<&'static str> {
        Self::CANONICAL
            .iter()
            .find(|(unit, _, _)| *unit == self)
            .map(|&(_, singular, many)| if plural { many } else { singular })
    }

    /// Renders an arbitrary ratio relative to the nearest canonical unit.
    ///
    /// The reference is the smallest canonical unit that is not smaller than this one, or hours
    /// for anything larger. Ratios that divide the reference evenly render as a fraction.
    ///
    /// ```
    /// use tempo::Unit;
    ///
    /// assert_eq!((Unit::SECONDS / 10.0).custom_name(), "1/10 second equivalent");
    /// assert_eq!((Unit::HOURS * 2.0).custom_name(), "2 hours equivalent");
    /// assert_eq!((Unit::SECONDS * 0.3).custom_name(), "0.3 seconds equivalent");
    /// ```
    #[expect(clippy::float_cmp, reason = "exactly one unit is singular")]
    #[must_use]
    pub fn custom_name(self) -> String {
        let ratio = self.0;
        if !ratio.is_finite() || ratio <= 0.0 {
            return format!("{ratio} nanoseconds equivalent");
        }

        let (reference, singular, plural) = Self::CANONICAL
            .iter()
            .copied()
            .find(|(unit, _, _)| unit.0 >= ratio)
            .unwrap_or((Self::HOURS, "hour", "hours"));

        let factor = ratio / reference.0;
        if factor < 1.0 {
            let divisor = reference.0 / ratio;
            if divisor.fract() == 0.0 {
                return format!("1/{divisor} {singular} equivalent");
            }
        }

        let name = if factor == 1.0 { singular } else { plural };
        format!("{factor} {name} equivalent")
    }
}

impl Mul<f64> for Unit {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Unit {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

/// Marks the unit a [`Duration`][crate::Duration] is fixed to.
///
/// This trait is sealed. The tags are the zero-sized types in this module, [`Dynamic`] being
/// the one without a fixed unit.
pub trait UnitTag: Copy + Default + Debug + Send + Sync + 'static + sealed::Sealed {
    /// The fixed unit, or [`Unit::UNKNOWN`] if the tag has none.
    const UNIT: Unit;

    /// The unit that values are converted into when creating a duration of this tag.
    ///
    /// Tags without a fixed unit use nanoseconds.
    #[must_use]
    fn conversion_unit() -> Unit {
        if Self::UNIT == Unit::UNKNOWN {
            Unit::NANOSECONDS
        } else {
            Self::UNIT
        }
    }
}

/// Marks tags with a fixed unit. Durations of these tags can be created from a bare value.
pub trait FixedUnit: UnitTag {}

/// The tag of a duration that may hold any unit, including custom ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dynamic;

impl sealed::Sealed for Dynamic {}

impl UnitTag for Dynamic {
    const UNIT: Unit = Unit::UNKNOWN;
}

macro_rules! fixed_unit {
    ($(#[$meta:meta])* $name:ident => $unit:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl UnitTag for $name {
            const UNIT: Unit = $unit;
        }

        impl FixedUnit for $name {}
    };
}

fixed_unit!(
    /// The tag of durations fixed to nanoseconds.
    Nano => Unit::NANOSECONDS
);
fixed_unit!(
    /// The tag of durations fixed to microseconds.
    Micro => Unit::MICROSECONDS
);
fixed_unit!(
    /// The tag of durations fixed to milliseconds.
    Milli => Unit::MILLISECONDS
);
fixed_unit!(
    /// The tag of durations fixed to seconds.
    Second => Unit::SECONDS
);
fixed_unit!(
    /// The tag of durations fixed to minutes.
    Minute => Unit::MINUTES
);
fixed_unit!(
    /// The tag of durations fixed to hours.
    Hour => Unit::HOURS
);

mod sealed {
    pub trait Sealed {}
}
