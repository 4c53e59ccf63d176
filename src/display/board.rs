//! The three-counter earnings display.

use std::time::Instant;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::AnimationConfig;
use crate::models::AccrualResult;
use crate::ticker::{EarningsSink, TickUpdate};

use super::animator::ValueAnimator;

/// What a renderer shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Displayed amount earned today.
    pub today: Decimal,
    /// Displayed amount earned this month.
    pub month: Decimal,
    /// Displayed amount earned this year.
    pub year: Decimal,
    /// `HH:MM:SS` of the latest tick, empty before the first one.
    pub clock: String,
}

/// A sink that animates the today, month and year counters.
///
/// Every published tick retargets the three animators at the tick's
/// publication instant; renderers call [`snapshot`](Self::snapshot) at their
/// own frame rate.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::compute;
/// use earnings_ticker::config::AnimationConfig;
/// use earnings_ticker::display::EarningsBoard;
/// use earnings_ticker::models::{PayFrequency, SalaryParameters};
/// use earnings_ticker::ticker::{EarningsSink, TickUpdate};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::time::{Duration, Instant};
///
/// let params = SalaryParameters::new(Decimal::new(260000, 0), PayFrequency::Yearly, true).unwrap();
/// let noon = NaiveDateTime::parse_from_str("2026-01-14 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let published_at = Instant::now();
///
/// let mut board = EarningsBoard::new(&AnimationConfig::default());
/// board.publish(&TickUpdate::new(compute(noon, &params), published_at));
///
/// let snapshot = board.snapshot(published_at + Duration::from_secs(1));
/// assert_eq!(snapshot.today, Decimal::new(500, 0));
/// assert_eq!(snapshot.clock, "12:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct EarningsBoard {
    today: ValueAnimator,
    month: ValueAnimator,
    year: ValueAnimator,
    clock: String,
    latest: Option<AccrualResult>,
}

impl EarningsBoard {
    /// Creates a board with all counters idle at zero.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            today: ValueAnimator::new(Decimal::ZERO, config),
            month: ValueAnimator::new(Decimal::ZERO, config),
            year: ValueAnimator::new(Decimal::ZERO, config),
            clock: String::new(),
            latest: None,
        }
    }

    /// Samples all three counters at `now`.
    pub fn snapshot(&mut self, now: Instant) -> BoardSnapshot {
        BoardSnapshot {
            today: self.today.sample(now),
            month: self.month.sample(now),
            year: self.year.sample(now),
            clock: self.clock.clone(),
        }
    }

    /// Returns the most recent un-animated result, if any tick arrived.
    pub fn latest(&self) -> Option<&AccrualResult> {
        self.latest.as_ref()
    }

    /// Returns the animator for today's counter.
    pub fn today(&self) -> &ValueAnimator {
        &self.today
    }

    /// Returns the animator for this month's counter.
    pub fn month(&self) -> &ValueAnimator {
        &self.month
    }

    /// Returns the animator for this year's counter.
    pub fn year(&self) -> &ValueAnimator {
        &self.year
    }
}

impl EarningsSink for EarningsBoard {
    fn publish(&mut self, update: &TickUpdate) {
        let at = update.published_at;
        self.today.transition_to(update.result.earned_today, at);
        self.month.transition_to(update.result.earned_this_month, at);
        self.year.transition_to(update.result.earned_this_year, at);
        self.clock.clone_from(&update.clock);
        self.latest = Some(update.result.clone());
    }
}
