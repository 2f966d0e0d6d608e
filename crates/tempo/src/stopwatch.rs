// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::time::Time;
use crate::{Clock, Seconds};

/// Measures the time elapsed on a clock since the stopwatch was started.
///
/// An instance of `Stopwatch` is created by calling [`Clock::stopwatch()`] or by passing
/// a [`Clock`] to [`Stopwatch::new()`]. Measure against a [`SteadyClock`][crate::SteadyClock]
/// in production; wall-clock adjustments make calendar measurements unreliable.
///
/// # Examples
///
/// ```
/// use tempo::{Clock, Seconds, SteadyClock};
///
/// let stopwatch = SteadyClock.stopwatch();
/// // Perform some operation...
/// assert!(stopwatch.elapsed() >= Seconds::zero());
/// ```
///
/// With the `test-util` feature, a stopwatch on a `MockClock` measures
/// simulated time, which makes timing-dependent code deterministic to test.
#[derive(Debug)]
pub struct Stopwatch<'a, C: Clock> {
    clock: &'a C,
    start: Time<C::Domain>,
}

impl<'a, C: Clock> Stopwatch<'a, C> {
    /// Starts a stopwatch on `clock`.
    #[must_use]
    pub fn new(clock: &'a C) -> Self {
        Self {
            clock,
            start: clock.now(),
        }
    }

    /// Returns the time at which the stopwatch was started.
    #[must_use]
    pub fn start(&self) -> Time<C::Domain> {
        self.start
    }

    /// Returns the time elapsed since the stopwatch was started.
    #[must_use]
    pub fn elapsed(&self) -> Seconds {
        self.clock.now().diff(&self.start)
    }
}
