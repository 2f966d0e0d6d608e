// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::unwrap_used,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Unit-aware durations, calendar and steady clocks, and a mock clock for deterministic tests.
//!
//! # Quick Start
//!
//! ```
//! use tempo::{Clock, MilliSeconds, Seconds, SteadyClock};
//!
//! fn measure<C: Clock>(clock: &C) -> Seconds {
//!     let stopwatch = clock.stopwatch();
//!     // Perform some operation...
//!     stopwatch.elapsed()
//! }
//!
//! let elapsed = measure(&SteadyClock);
//! assert!(elapsed < MilliSeconds::new(500.0));
//! ```
//!
//! # Durations
//!
//! A [`Duration`] is a value in a [`Unit`]. The unit can be fixed by the type, as in [`Seconds`]
//! or [`MilliSeconds`], or chosen at runtime, including custom ratios such as a tenth of a second.
//! Durations of different units mix freely in arithmetic and comparison:
//!
//! ```
//! use tempo::{MilliSeconds, Minutes, Seconds};
//!
//! let total = Minutes::new(1.0) + Seconds::new(30.0);
//! assert_eq!(total.to_string(), "1.5 minutes");
//! assert_eq!(total, MilliSeconds::new(90_000.0));
//! ```
//!
//! Comparison is exact with respect to magnitude: durations built from different units compare
//! equal whenever they describe the same amount of time, even when the floating-point values
//! involved are not exactly representable.
//!
//! # Times and clocks
//!
//! A [`Clock`] produces a [`Time`] in its domain. [`CalendarClock`] reads the wall clock and
//! produces [`CalendarTime`]; [`SteadyClock`] reads the monotonic clock and produces
//! [`SteadyTime`]. The two domains have unrelated epochs, so their times cannot be mixed.
//! [`SteadyTime::from_time`] moves a calendar time onto the steady timeline when needed.
//!
//! # Testing
//!
//! With the `test-util` feature, `MockClock` is a calendar clock that only moves when the test
//! tells it to:
//!
//! ```
//! # #[cfg(feature = "test-util")]
//! # {
//! use tempo::{CalendarTime, Clock, MockClock, Seconds};
//!
//! let clock = MockClock::new_at(CalendarTime::from_seconds(100.0));
//! let stopwatch = clock.stopwatch();
//!
//! clock.elapse(Seconds::new(5.0))?;
//! assert_eq!(stopwatch.elapsed(), Seconds::new(5.0));
//! # }
//! # Ok::<(), tempo::Error>(())
//! ```
//!
//! # Features
//!
//! - `test-util` - exposes `MockClock`. Enable it for `dev-dependencies` only.
//! - `serde` - serializes durations and times as floating-point numbers.
//! - `jiff` - conversions between [`CalendarTime`] and `jiff::Timestamp`.

mod clock;
mod duration;
mod error;
#[cfg(any(feature = "test-util", test))]
mod mock_clock;
mod stopwatch;
mod time;
pub mod unit;

pub use clock::{CalendarClock, Clock, SteadyClock};
pub use duration::{Duration, Hours, MicroSeconds, MilliSeconds, Minutes, NanoSeconds, Seconds};
pub use error::{Error, ErrorKind, Result};
#[cfg(any(feature = "test-util", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub use mock_clock::MockClock;
pub use stopwatch::Stopwatch;
pub use time::{Calendar, CalendarTime, Domain, Steady, SteadyTime, Time};
pub use unit::Unit;
