//! Calculation logic for the earnings ticker.
//!
//! This module contains the pure accrual engine: rate normalization per pay
//! frequency, working-day detection and counting, intra-day progress, and the
//! [`compute`] function that combines them into an [`AccrualResult`](crate::models::AccrualResult).

mod accrual;
mod day_detection;
mod day_progress;
mod rates;

pub use accrual::{compute, compute_at};
pub use day_detection::{DayType, get_day_type, is_working_day, working_days_between};
pub use day_progress::{
    format_clock, fraction_of_day_elapsed, local_midnight, start_of_month, start_of_year,
};
pub use rates::{
    HOURS_PER_WORKDAY, MONTHS_PER_YEAR, NormalizedRates, WORKING_DAYS_PER_MONTH,
    WORKING_DAYS_PER_YEAR, normalize_rates,
};
