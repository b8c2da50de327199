use chrono::{DateTime, Datelike, Local, Utc};
use std::sync::Mutex;

/// Source of "now" for every service.
///
/// The current year bucket is derived from this clock, so injecting a fixed
/// clock makes all year-scoped operations deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar year of `now()` in the local timezone.
    fn current_year(&self) -> i32 {
        local_year(self.now())
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Calendar year of an instant, by local date.
pub fn local_year(instant: DateTime<Utc>) -> i32 {
    instant.with_timezone(&Local).year()
}

/// Zero-based calendar month (0 = January) of an instant, by local date.
pub fn local_month0(instant: DateTime<Utc>) -> u32 {
    instant.with_timezone(&Local).month0()
}
