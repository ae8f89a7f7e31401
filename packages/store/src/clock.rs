//! Time source for record ids and creation timestamps.
//!
//! Record ids are wall-clock milliseconds since the Unix epoch, so
//! near-simultaneous writes can collide and a clock step can produce
//! out-of-order ids. The [`Clock`] trait makes the
//! source injectable: production code uses [`WallClock`], tests use
//! [`ManualClock`] for deterministic ids.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current wall-clock time in milliseconds since the epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Platform-aware wall clock: `js_sys::Date::now()` on WASM,
/// `std::time::SystemTime` natively.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_millis(&self) -> i64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0)
        }
    }
}

/// Hand-advanced clock for deterministic tests.
///
/// Each call to [`Clock::now_millis`] returns the current value and advances it
/// by one, so consecutive records get distinct, predictable ids.
#[derive(Clone, Debug)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start_millis)),
        }
    }

    /// Jump the clock to an absolute time.
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.fetch_add(1, Ordering::SeqCst)
    }
}

/// Format epoch milliseconds as an ISO-8601 UTC timestamp
/// (`2024-05-01T12:30:45.123Z`), matching `Date#toISOString`.
pub fn iso8601(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_millis(), 100);
        assert_eq!(clock.now_millis(), 101);

        clock.set(500);
        assert_eq!(clock.now_millis(), 500);
    }

    #[test]
    fn test_iso8601_format() {
        assert_eq!(iso8601(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(iso8601(1_700_000_000_000), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_wall_clock_is_recent() {
        // Sanity bound: after 2020-01-01 and before 2100.
        let now = WallClock.now_millis();
        assert!(now > 1_577_836_800_000);
        assert!(now < 4_102_444_800_000);
    }
}
