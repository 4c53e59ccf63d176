//! Tick output.

use std::time::Instant;

use crate::calculation::format_clock;
use crate::models::AccrualResult;

/// One published tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickUpdate {
    /// The freshly computed, un-animated figures.
    pub result: AccrualResult,
    /// `HH:MM:SS` of `result.as_of`, 24-hour.
    pub clock: String,
    /// Monotonic instant the tick was published, for animation timing.
    pub published_at: Instant,
}

impl TickUpdate {
    /// Wraps a result, deriving the clock string from its `as_of`.
    pub fn new(result: AccrualResult, published_at: Instant) -> Self {
        let clock = format_clock(result.as_of);
        Self {
            result,
            clock,
            published_at,
        }
    }
}

/// Receives every tick a scheduler publishes.
///
/// Implementations must not call back into the scheduler that owns them.
/// Closures taking `&TickUpdate` are sinks too.
pub trait EarningsSink: Send + 'static {
    /// Handles one tick.
    fn publish(&mut self, update: &TickUpdate);
}

impl<F> EarningsSink for F
where
    F: FnMut(&TickUpdate) + Send + 'static,
{
    fn publish(&mut self, update: &TickUpdate) {
        self(update)
    }
}
