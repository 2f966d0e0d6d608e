// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example demonstrates reading the calendar and steady clocks and working with durations.

use std::thread;

use tempo::{CalendarClock, Clock, MilliSeconds, Seconds, SteadyClock, SteadyTime};

fn main() -> tempo::Result<()> {
    // Take the API's clock as a generic parameter so that tests can substitute a mock clock.
    let job = Job::new(SteadyClock);
    let elapsed = job.run();
    println!("Job finished in {elapsed}, or {} ms.", elapsed.int_value_in(tempo::Unit::MILLISECONDS));

    // Durations of different units mix freely.
    let budget = Seconds::new(1.0);
    let remaining = budget - elapsed;
    println!("Remaining budget: {remaining}");

    // Split the remaining budget into equal slots.
    let slot = remaining.slice(4.0)?;
    println!("Each of 4 slots gets {slot}");

    // Schedule a deadline on the wall clock and find out when it is on the steady timeline.
    let deadline = CalendarClock.now().after(MilliSeconds::new(250.0));
    let steady_deadline = SteadyTime::from_time(&deadline);
    println!("Deadline: {deadline}, or {steady_deadline}");

    Ok(())
}

struct Job<C> {
    clock: C,
}

impl<C: Clock> Job<C> {
    const fn new(clock: C) -> Self {
        Self { clock }
    }

    fn run(&self) -> Seconds {
        // Start the measurement.
        let stopwatch = self.clock.stopwatch();

        // Simulate some work.
        thread::sleep(std::time::Duration::from_millis(10));

        stopwatch.elapsed()
    }
}
