//! Period anchors and intra-day progress.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Returns the fraction of the local day elapsed at `now`, in `[0, 1)`.
///
/// Resolution is one millisecond. Leap-second representations are folded
/// into the last millisecond of the day so the result stays below 1.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::fraction_of_day_elapsed;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let noon = NaiveDateTime::parse_from_str("2026-01-14 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(fraction_of_day_elapsed(noon), Decimal::new(5, 1));
/// ```
pub fn fraction_of_day_elapsed(now: NaiveDateTime) -> Decimal {
    let elapsed = (now - local_midnight(now))
        .num_milliseconds()
        .clamp(0, MILLIS_PER_DAY - 1);
    Decimal::from(elapsed) / Decimal::from(MILLIS_PER_DAY)
}

/// Returns local midnight at the start of `now`'s date.
pub fn local_midnight(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Returns the first day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns January 1st of `date`'s year.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// Formats `now` as a 24-hour `HH:MM:SS` clock string.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::format_clock;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-14 07:05:09", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(format_clock(now), "07:05:09");
/// ```
pub fn format_clock(now: NaiveDateTime) -> String {
    // A leap second keeps showing :59 instead of chrono's :60.
    now.with_nanosecond(0)
        .unwrap_or(now)
        .format("%H:%M:%S")
        .to_string()
}
