use std::hint::black_box;
use std::time::{Duration, Instant};

/// Monotonic time source. `now` is an offset from an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// `std::time::Instant`-backed clock (nanosecond resolution on supported platforms).
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[derive(Clone, Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Calls `f` exactly once between two clock reads.
#[inline(always)]
pub fn time_once<C: Clock, T>(clock: &C, f: impl FnOnce() -> T) -> Timed<T> {
    let start = clock.now();
    let value = black_box(f());
    let end = clock.now();

    Timed {
        value,
        elapsed: end.saturating_sub(start),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Advances by a fixed step on every read.
    pub(crate) struct SteppingClock {
        ticks: Cell<u64>,
        step: Duration,
    }

    impl SteppingClock {
        pub(crate) fn new(step: Duration) -> Self {
            Self {
                ticks: Cell::new(0),
                step,
            }
        }

        pub(crate) fn reads(&self) -> u64 {
            self.ticks.get()
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> Duration {
            let t = self.ticks.get();
            self.ticks.set(t + 1);
            self.step * t as u32
        }
    }

    #[test]
    fn test_time_once_calls_exactly_once() {
        let clock = SteppingClock::new(Duration::from_micros(250));
        let calls = Cell::new(0);
        let timed = time_once(&clock, || {
            calls.set(calls.get() + 1);
            42
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(timed.value, 42);
        assert_eq!(timed.elapsed, Duration::from_micros(250));
        assert_eq!(clock.reads(), 2);
    }

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);

        let timed = time_once(&clock, || std::thread::sleep(Duration::from_millis(2)));
        assert!(timed.elapsed >= Duration::from_millis(2));
    }
}
