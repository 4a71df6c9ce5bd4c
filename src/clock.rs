use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of match start times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock that never hands out the same instant twice.
///
/// Two matches started back to back can land on the same wall-clock reading;
/// the second one is pushed forward by a nanosecond so "more recently started"
/// is always well defined for matches started through one clock.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_nanos: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        // timestamp_nanos_opt is None only past the year 2262
        let wall = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let mut prev = self.last_nanos.load(Ordering::Acquire);
        loop {
            let next = wall.max(prev.saturating_add(1));
            match self.last_nanos.compare_exchange_weak(
                prev,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return DateTime::from_timestamp_nanos(next),
                Err(actual) => prev = actual,
            }
        }
    }
}
