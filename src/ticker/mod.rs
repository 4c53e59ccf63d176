//! Live recomputation of accrued earnings.
//!
//! This module contains the [`TickScheduler`] that republishes accrual once
//! per interval, the [`Clock`] seam it reads local time through, and the
//! [`EarningsSink`] seam it publishes to.

mod clock;
mod scheduler;
mod sink;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{TickHandle, TickScheduler};
pub use sink::{EarningsSink, TickUpdate};
