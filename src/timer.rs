use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Reads the monotonic clock right before and right after `f`.
pub fn measure<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let before = Instant::now();
    let value = f();
    let after = Instant::now();

    Timed {
        value,
        elapsed: after.duration_since(before),
    }
}
