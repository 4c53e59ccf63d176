//! Wall-clock sources.
//!
//! The scheduler never reads the system clock directly; it asks a [`Clock`]
//! so that ticks can be driven from a fixed or replayed time in tests.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Duration, Local, NaiveDateTime};

/// A source of the current local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one copy and hand another
/// to a scheduler.
///
/// # Example
///
/// ```
/// use earnings_ticker::ticker::{Clock, ManualClock};
/// use chrono::{Duration, NaiveDateTime};
///
/// let start = NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance(Duration::seconds(90));
/// assert_eq!(clock.now().format("%H:%M:%S").to_string(), "09:01:30");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Sets the clock to `time`.
    pub fn set(&self, time: NaiveDateTime) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = time;
    }

    /// Moves the clock by `delta`, which may be negative.
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
