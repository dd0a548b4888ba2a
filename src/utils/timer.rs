//! Single-run timing for harness executions.
//!
//! One monotonic stopwatch per run, optionally with the calling thread pinned
//! to its current core so the measurement is not split across migrations.

use std::time::{Duration, Instant};

use super::cpu_affinity::ThreadPin;

/// CPU pinning strategy while a computation runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Leave scheduling to the OS
    None,
    /// Pin for the duration of each run, restore afterwards
    #[default]
    PerRun,
}

/// Monotonic stopwatch started at construction.
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
    _pin: Option<ThreadPin>,
}

impl Stopwatch {
    /// Start timing, pinning the current thread if the strategy asks for it.
    pub fn start(strategy: PinStrategy) -> Self {
        let pin = match strategy {
            PinStrategy::None => None,
            PinStrategy::PerRun => Some(ThreadPin::current_core()),
        };
        Self {
            start: Instant::now(),
            _pin: pin,
        }
    }

    /// Elapsed time so far; the pin (if any) is released when the stopwatch drops.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop and return the elapsed time.
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

/// Format a duration with a unit suited to its magnitude.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", d.as_secs_f64())
    }
}
