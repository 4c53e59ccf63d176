//! Accrual result model.
//!
//! An [`AccrualResult`] is recomputed from scratch on every tick and never
//! persisted.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earned amounts for the day, month and year containing `as_of`.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::AccrualResult;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let result = AccrualResult {
///     earned_today: Decimal::new(500, 0),
///     earned_this_month: Decimal::new(14500, 0),
///     earned_this_year: Decimal::new(120500, 0),
///     as_of: NaiveDateTime::parse_from_str("2026-05-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert!(result.earned_today <= result.earned_this_month);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// Amount earned since local midnight.
    pub earned_today: Decimal,
    /// Amount earned since the first day of the month.
    pub earned_this_month: Decimal,
    /// Amount earned since January 1st.
    pub earned_this_year: Decimal,
    /// The local wall-clock instant these figures correspond to.
    pub as_of: NaiveDateTime,
}

impl AccrualResult {
    /// Returns the figures as a `(today, month, year)` tuple.
    pub fn amounts(&self) -> (Decimal, Decimal, Decimal) {
        (
            self.earned_today,
            self.earned_this_month,
            self.earned_this_year,
        )
    }
}
