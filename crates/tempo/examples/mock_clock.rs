// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(clippy::unwrap_used, reason = "example code")]

//! This example demonstrates how to use `MockClock` to control the passage of time.

use std::time::{Duration, SystemTime};

use tempo::{CalendarTime, Clock, ErrorKind, MockClock, Seconds};

fn main() {
    let clock = MockClock::new();

    // Retrieve the current time, then the time again later.
    let now = clock.now();
    let later = clock.now();

    // Notice that the time is the same.
    assert_eq!(now, later);

    // Let 1 second pass.
    clock.elapse(Seconds::new(1.0)).unwrap();
    assert_eq!(clock.now().diff(&later), Seconds::new(1.0));

    // Create a stopwatch. Time does not move on its own.
    let stopwatch = clock.stopwatch();
    assert!(stopwatch.elapsed().is_zero());

    clock.elapse(Seconds::new(2.0)).unwrap();
    assert_eq!(stopwatch.elapsed(), Seconds::new(2.0));

    // Elapsing a negative duration is refused and leaves the clock where it was.
    let error = clock.elapse(Seconds::new(-1.0)).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidDirection));
    assert_eq!(stopwatch.elapsed(), Seconds::new(2.0));

    // Jumping to a point in time is allowed in both directions.
    let date_time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    clock.set_date_time(date_time);
    assert_eq!(clock.now(), CalendarTime::from_seconds(1_700_000_000.0));

    clock.set_time(CalendarTime::from_seconds(0.0));
    println!("Clock reset to {}", clock.now());
}
