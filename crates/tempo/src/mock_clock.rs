// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::Mutex;
use tracing::{Level, event};

use crate::time::Calendar;
use crate::unit::UnitTag;
use crate::{CalendarTime, Clock, Duration, Error, NanoSeconds, Result, Unit};

/// A calendar clock whose time only changes when told to.
///
/// `MockClock` is available when the `test-util` feature is enabled. It starts at the unix
/// epoch unless created with [`MockClock::new_at`], and moves either by jumping to an instant
/// with [`set_time`][Self::set_time] or by flowing forward with [`elapse`][Self::elapse].
///
/// Clones share the simulated instant: hand a clone to the code under test and drive time from
/// the test.
///
/// # Examples
///
/// ```
/// use tempo::{CalendarTime, Clock, MockClock, Seconds};
///
/// let clock = MockClock::new_at(CalendarTime::from_seconds(1_000.0));
/// let observer = clock.clone();
///
/// clock.elapse(Seconds::new(5.0))?;
/// assert_eq!(observer.now(), CalendarTime::from_seconds(1_005.0));
///
/// // Time does not flow backwards...
/// assert!(clock.elapse(Seconds::new(-1.0)).is_err());
///
/// // ...but the clock can be re-pointed anywhere.
/// clock.set_time(CalendarTime::from_seconds(10.0));
/// assert_eq!(observer.now(), CalendarTime::from_seconds(10.0));
///
/// # Ok::<(), tempo::Error>(())
/// ```
///
/// # Production code and `MockClock`
///
/// Enable the `test-util` feature only for `dev-dependencies`:
///
/// ```toml
/// tempo = { version = "*", features = ["test-util"] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    /// Nanoseconds since the unix epoch.
    nanos: Arc<Mutex<f64>>,
}

impl MockClock {
    /// Creates a clock at the unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at `time`.
    #[must_use]
    pub fn new_at(time: CalendarTime) -> Self {
        let clock = Self::new();
        clock.set_time(time);
        clock
    }

    /// Moves the clock to `time`, forwards or backwards.
    pub fn set_time(&self, time: CalendarTime) {
        let nanos = time.seconds_since_epoch().value_in(Unit::NANOSECONDS);
        *self.nanos.lock() = nanos;

        event!(Level::DEBUG, message = "mock clock set", time = %time);
    }

    /// Moves the clock to a wall-clock [`SystemTime`].
    pub fn set_date_time(&self, time: SystemTime) {
        self.set_time(CalendarTime::from_system_time(time));
    }

    /// Lets `duration` pass on the clock.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDirection`][crate::ErrorKind::InvalidDirection] if `duration`
    /// is negative, however small. The clock is left unchanged.
    pub fn elapse<U: UnitTag>(&self, duration: Duration<U>) -> Result<()> {
        // Checked on the raw value; `is_negative` treats sub-femtosecond values as zero.
        let delta = duration.value_in(Unit::NANOSECONDS);
        if delta < 0.0 {
            event!(Level::DEBUG, message = "rejected negative elapse", duration = %duration);
            return Err(Error::invalid_direction());
        }

        let mut nanos = self.nanos.lock();
        *nanos += delta;

        event!(Level::TRACE, message = "mock clock elapsed", duration = %duration, nanos = *nanos);
        Ok(())
    }
}

impl Clock for MockClock {
    type Domain = Calendar;

    fn now(&self) -> CalendarTime {
        CalendarTime::from_duration(NanoSeconds::new(*self.nanos.lock()))
    }
}
