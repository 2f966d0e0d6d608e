// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Sub};
use std::time::SystemTime;

use tracing::{Level, event};

use crate::clock::{CalendarClock, Clock, SteadyClock};
use crate::unit::UnitTag;
use crate::{Duration, Error, Result, Seconds, Unit};

/// An instant on the wall clock, measured from the unix epoch.
pub type CalendarTime = Time<Calendar>;

/// An instant on the monotonic clock, measured from an arbitrary process-wide epoch.
pub type SteadyTime = Time<Steady>;

/// The clock domain of a [`Time`].
///
/// This trait is sealed. The domains are [`Calendar`] and [`Steady`].
pub trait Domain: Copy + Default + Debug + Send + Sync + 'static + sealed::Sealed {
    /// How the epoch of the domain is described when displaying a time.
    const EPOCH: &'static str;
}

/// The wall-clock domain. Its epoch is the unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calendar;

/// The monotonic domain. Its epoch is implementation-defined and only meaningful within the
/// current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Steady;

impl sealed::Sealed for Calendar {}
impl sealed::Sealed for Steady {}

impl Domain for Calendar {
    const EPOCH: &'static str = "unix epoch";
}

impl Domain for Steady {
    const EPOCH: &'static str = "epoch";
}

/// An instant in time, stored as the number of seconds since the epoch of its domain.
///
/// Times of different domains cannot be compared or subtracted; the epochs are unrelated. To
/// move a calendar time onto the monotonic timeline use [`SteadyTime::from_time`].
///
/// ```
/// use tempo::{CalendarTime, Seconds};
///
/// let start = CalendarTime::from_seconds(100.0);
/// let end = start.after(Seconds::new(5.0));
///
/// assert_eq!(end.diff(&start), Seconds::new(5.0));
/// assert_eq!(end.before(Seconds::new(5.0)), start);
/// assert!(start < end);
/// ```
///
/// Mixing domains does not compile:
///
/// ```compile_fail
/// use tempo::{CalendarTime, SteadyTime};
///
/// let calendar = CalendarTime::from_seconds(1.0);
/// let steady = SteadyTime::from_seconds(1.0);
/// let _ = calendar.diff(&steady);
/// ```
#[derive(Clone, Copy)]
pub struct Time<D: Domain> {
    seconds_since_epoch: Seconds,
    domain: PhantomData<D>,
}

impl<D: Domain> Time<D> {
    /// Creates a time `seconds` after the epoch.
    #[must_use]
    pub const fn from_seconds(seconds: f64) -> Self {
        Self::from_offset(Seconds::new(seconds))
    }

    /// Creates a time the given duration after the epoch.
    #[must_use]
    pub fn from_duration<U: UnitTag>(since_epoch: Duration<U>) -> Self {
        Self::from_offset(Seconds::create_from(since_epoch))
    }

    const fn from_offset(seconds_since_epoch: Seconds) -> Self {
        Self {
            seconds_since_epoch,
            domain: PhantomData,
        }
    }

    /// Returns the offset from the epoch.
    #[must_use]
    pub fn seconds_since_epoch(&self) -> Seconds {
        self.seconds_since_epoch
    }

    /// Returns the duration from `other` to this time. The result is negative if `other` is later.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Seconds {
        self.seconds_since_epoch - other.seconds_since_epoch
    }

    /// Returns the time `duration` after this one.
    #[must_use]
    pub fn after<U: UnitTag>(&self, duration: Duration<U>) -> Self {
        Self::from_offset(self.seconds_since_epoch + duration)
    }

    /// Returns the time `duration` before this one.
    #[must_use]
    pub fn before<U: UnitTag>(&self, duration: Duration<U>) -> Self {
        Self::from_offset(self.seconds_since_epoch - duration)
    }
}

impl CalendarTime {
    /// Converts a wall-clock [`SystemTime`]. Times before the unix epoch have a negative offset.
    #[must_use]
    pub fn from_system_time(time: SystemTime) -> Self {
        let seconds = match time.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since) => since.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        };

        Self::from_seconds(seconds)
    }

    /// Converts into a wall-clock [`SystemTime`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`][crate::ErrorKind::OutOfRange] when the offset is not
    /// finite or the instant cannot be represented by the platform.
    pub fn to_system_time(&self) -> Result<SystemTime> {
        let seconds = self.seconds_since_epoch.value();
        let magnitude = std::time::Duration::try_from_secs_f64(seconds.abs())
            .map_err(|e| Error::out_of_range(format!("{self} is not representable as SystemTime: {e}")))?;

        let time = if seconds < 0.0 {
            SystemTime::UNIX_EPOCH.checked_sub(magnitude)
        } else {
            SystemTime::UNIX_EPOCH.checked_add(magnitude)
        };

        time.ok_or_else(|| Error::out_of_range(format!("{self} is outside the range of SystemTime")))
    }
}

impl SteadyTime {
    /// Moves a calendar time onto the monotonic timeline.
    ///
    /// The epochs of the two domains cannot be related arithmetically, so the conversion reads
    /// both clocks back to back and applies the offset of `time` from the calendar reading to the
    /// steady reading. The result is only as accurate as the gap between the two reads; under
    /// normal scheduling that is well below a millisecond, but preemption between the reads
    /// shows up as error.
    ///
    /// ```
    /// use tempo::{CalendarClock, Clock, Seconds, SteadyClock, SteadyTime};
    ///
    /// let in_a_minute = CalendarClock.now().after(Seconds::new(60.0));
    /// let steady = SteadyTime::from_time(&in_a_minute);
    ///
    /// let remaining = steady.diff(&SteadyClock.now());
    /// assert!(remaining > Seconds::new(59.0) && remaining <= Seconds::new(60.0));
    /// ```
    #[must_use]
    pub fn from_time(time: &CalendarTime) -> Self {
        let steady_now = SteadyClock.now();
        let calendar_now = CalendarClock.now();

        let offset = time.diff(&calendar_now);
        event!(Level::TRACE, message = "calendar time moved to steady timeline", offset = %offset);

        steady_now.after(offset)
    }
}

impl<D: Domain> Sub for Time<D> {
    type Output = Seconds;

    fn sub(self, rhs: Self) -> Seconds {
        self.diff(&rhs)
    }
}

impl<D: Domain, U: UnitTag> Add<Duration<U>> for Time<D> {
    type Output = Self;

    fn add(self, rhs: Duration<U>) -> Self {
        self.after(rhs)
    }
}

impl<D: Domain, U: UnitTag> Sub<Duration<U>> for Time<D> {
    type Output = Self;

    fn sub(self, rhs: Duration<U>) -> Self {
        self.before(rhs)
    }
}

impl<D: Domain> PartialEq for Time<D> {
    fn eq(&self, other: &Self) -> bool {
        self.seconds_since_epoch == other.seconds_since_epoch
    }
}

impl<D: Domain> Eq for Time<D> {}

impl<D: Domain> PartialOrd for Time<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Domain> Ord for Time<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds_since_epoch.compare(&other.seconds_since_epoch)
    }
}

impl From<SystemTime> for CalendarTime {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl TryFrom<CalendarTime> for SystemTime {
    type Error = Error;

    fn try_from(time: CalendarTime) -> Result<Self> {
        time.to_system_time()
    }
}

#[cfg(any(feature = "jiff", test))]
impl From<jiff::Timestamp> for CalendarTime {
    fn from(timestamp: jiff::Timestamp) -> Self {
        Self::from_system_time(timestamp.into())
    }
}

#[cfg(any(feature = "jiff", test))]
impl TryFrom<CalendarTime> for jiff::Timestamp {
    type Error = Error;

    fn try_from(time: CalendarTime) -> Result<Self> {
        let system_time = time.to_system_time()?;
        Self::try_from(system_time)
            .map_err(|e| Error::out_of_range(format!("{time} is outside the range of jiff::Timestamp: {e}")))
    }
}

impl<D: Domain> Display for Time<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Adding zero turns a rounded negative zero into "0".
        let nanos = self.seconds_since_epoch.value_in(Unit::NANOSECONDS).round() + 0.0;
        write!(f, "{nanos:.0} ns since {}", D::EPOCH)
    }
}

impl<D: Domain> Debug for Time<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Time")
            .field("domain", &D::default())
            .field("seconds_since_epoch", &self.seconds_since_epoch.value())
            .finish()
    }
}

#[cfg(any(feature = "serde", test))]
impl<D: Domain> serde_core::Serialize for Time<D> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serde_core::Serialize::serialize(&self.seconds_since_epoch, serializer)
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de, D: Domain> serde_core::Deserialize<'de> for Time<D> {
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: serde_core::Deserializer<'de>,
    {
        <Seconds as serde_core::Deserialize>::deserialize(deserializer).map(Self::from_offset)
    }
}

mod sealed {
    pub trait Sealed {}
}
