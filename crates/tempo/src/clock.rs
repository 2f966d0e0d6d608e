// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::OnceLock;
use std::time::{Instant, SystemTime};

use crate::time::{Calendar, Domain, Steady, Time};
use crate::{CalendarTime, Seconds, SteadyTime, Stopwatch};

/// A source of the current time.
///
/// Code that depends on time should take a `Clock` instead of reading the platform clocks
/// directly, so that tests can substitute a [`MockClock`][crate::MockClock].
///
/// # Examples
///
/// ```
/// use tempo::{Clock, Seconds, Time};
///
/// fn is_expired<C: Clock>(clock: &C, deadline: Time<C::Domain>) -> bool {
///     clock.now() >= deadline
/// }
///
/// let clock = tempo::CalendarClock;
/// let deadline = clock.now().before(Seconds::new(1.0));
/// assert!(is_expired(&clock, deadline));
/// ```
pub trait Clock {
    /// The domain of the times this clock produces.
    type Domain: Domain;

    /// Samples the current time.
    fn now(&self) -> Time<Self::Domain>;

    /// Starts a [`Stopwatch`] that measures elapsed time against this clock.
    fn stopwatch(&self) -> Stopwatch<'_, Self>
    where
        Self: Sized,
    {
        Stopwatch::new(self)
    }
}

/// The wall clock.
///
/// Readings follow the system clock, including any adjustments made to it. Use
/// [`SteadyClock`] to measure elapsed time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarClock;

impl Clock for CalendarClock {
    type Domain = Calendar;

    fn now(&self) -> CalendarTime {
        CalendarTime::from_system_time(SystemTime::now())
    }
}

/// The monotonic clock.
///
/// Readings never decrease and are unaffected by changes to the system clock.
///
/// The epoch is fixed lazily by the first `now()` call in the process, so that reading is zero and
/// every later reading is positive. Steady times for instants before the epoch, such as those
/// produced by [`SteadyTime::from_time`] for an earlier calendar time, have negative offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyClock;

static STEADY_EPOCH: OnceLock<Instant> = OnceLock::new();

impl Clock for SteadyClock {
    type Domain = Steady;

    fn now(&self) -> SteadyTime {
        let epoch = *STEADY_EPOCH.get_or_init(Instant::now);
        let since_epoch = Instant::now().saturating_duration_since(epoch);

        SteadyTime::from_duration(Seconds::from_std(since_epoch))
    }
}
