//! Earnings accrual.
//!
//! [`compute`] turns a local instant and a set of salary parameters into the
//! amounts earned so far today, this month and this year. Every figure is
//! derived fresh from the start-of-period anchors, so period rollovers need
//! no reset events.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;

use crate::models::{AccrualResult, SalaryParameters};

use super::day_detection::{is_working_day, working_days_between};
use super::day_progress::{fraction_of_day_elapsed, start_of_month, start_of_year};
use super::rates::{WORKING_DAYS_PER_MONTH, WORKING_DAYS_PER_YEAR, normalize_rates};

/// Computes earnings accrued as of `now`.
///
/// The calculation is pure: the same `(now, params)` always yields the same
/// result. It assumes `params.is_valid()`, which bounds the amount so no
/// intermediate overflows; callers that may hold invalid parameters should
/// check first (the scheduler does).
///
/// - today: `daily × fraction_of_day` on a working day, otherwise 0
/// - month: `(monthly / 22) × (working days before today + today's fraction)`
/// - year: `(annual / 260) × (working days before today + today's fraction)`
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::compute;
/// use earnings_ticker::models::{PayFrequency, SalaryParameters};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let params = SalaryParameters::new(Decimal::new(260000, 0), PayFrequency::Yearly, true).unwrap();
/// let noon = NaiveDateTime::parse_from_str("2026-01-14 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = compute(noon, &params);
/// assert_eq!(result.earned_today, Decimal::new(500, 0));
/// ```
pub fn compute(now: NaiveDateTime, params: &SalaryParameters) -> AccrualResult {
    let rates = normalize_rates(params);
    let today = now.date();

    let today_fraction = if is_working_day(today, params.count_weekends) {
        fraction_of_day_elapsed(now)
    } else {
        Decimal::ZERO
    };

    let earned_today = rates.daily * today_fraction;

    let month_days = working_days_between(start_of_month(today), today, params.count_weekends);
    let earned_this_month = rates.monthly / Decimal::from(WORKING_DAYS_PER_MONTH)
        * (Decimal::from(month_days) + today_fraction);

    let year_days = working_days_between(start_of_year(today), today, params.count_weekends);
    let earned_this_year = rates.annual / Decimal::from(WORKING_DAYS_PER_YEAR)
        * (Decimal::from(year_days) + today_fraction);

    AccrualResult {
        earned_today,
        earned_this_month,
        earned_this_year,
        as_of: now,
    }
}

/// Computes earnings accrued as of a zoned instant, using its local
/// calendar fields.
pub fn compute_at<Tz: TimeZone>(now: &DateTime<Tz>, params: &SalaryParameters) -> AccrualResult {
    compute(now.naive_local(), params)
}
