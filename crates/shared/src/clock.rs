//! Clock abstraction for time-dependent services.
//!
//! Window evaluation is a pure function of "now", so anything that owns a
//! timer takes a [`Clock`] instead of calling [`Utc::now`] directly. Tests
//! drive a [`ManualClock`] and step it explicitly.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Intended for tests.
#[derive(Debug)]
pub struct ManualClock {
    unix_millis: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at the given instant.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            unix_millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    /// Jump the clock to an absolute instant.
    pub fn set(&self, to: DateTime<Utc>) {
        self.unix_millis.store(to.timestamp_millis(), Ordering::SeqCst);
    }

    /// Move the clock forward by the given duration.
    pub fn advance(&self, by: Duration) {
        self.unix_millis
            .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        // Stored millis always originate from a valid DateTime.
        DateTime::from_timestamp_millis(self.unix_millis.load(Ordering::SeqCst))
            .unwrap_or_default()
    }
}
