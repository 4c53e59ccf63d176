//! Day detection and working-day counting.
//!
//! This module decides which calendar days accrue salary and counts the
//! working days that have fully elapsed in a period.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of a calendar day for accrual purposes.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if `date` accrues salary under the given weekend policy.
///
/// Every day counts when `count_weekends` is true; otherwise only Monday
/// through Friday do.
pub fn is_working_day(date: NaiveDate, count_weekends: bool) -> bool {
    count_weekends || !get_day_type(date).is_weekend()
}

/// Counts working days in the half-open range `[start, end)`.
///
/// Returns 0 when `end <= start`. Whole weeks are counted arithmetically, so
/// the cost does not grow with the length of the range.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::working_days_between;
/// use chrono::NaiveDate;
///
/// // Thursday 2026-01-01 up to (not including) Thursday 2026-01-15
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(working_days_between(start, end, false), 10);
/// assert_eq!(working_days_between(start, end, true), 14);
/// ```
pub fn working_days_between(start: NaiveDate, end: NaiveDate, count_weekends: bool) -> u32 {
    if end <= start {
        return 0;
    }

    let total_days = (end - start).num_days() as u32;
    if count_weekends {
        return total_days;
    }

    let full_weeks = total_days / 7;
    let remainder = total_days % 7;

    // The remainder starts on the same weekday as `start`.
    let remainder_start = start + Days::new(u64::from(full_weeks) * 7);
    let remainder_working = remainder_start
        .iter_days()
        .take(remainder as usize)
        .filter(|day| is_working_day(*day, false))
        .count() as u32;

    full_weeks * 5 + remainder_working
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn naive_count(start: NaiveDate, end: NaiveDate, count_weekends: bool) -> u32 {
        start
            .iter_days()
            .take_while(|day| *day < end)
            .filter(|day| is_working_day(*day, count_weekends))
            .count() as u32
    }

    #[test]
    fn test_monday_is_weekday() {
        // 2026-01-12 is a Monday
        assert_eq!(get_day_type(make_date("2026-01-12")), DayType::Weekday);
    }

    #[test]
    fn test_friday_is_weekday() {
        assert_eq!(get_day_type(make_date("2026-01-16")), DayType::Weekday);
    }

    #[test]
    fn test_saturday_is_saturday() {
        assert_eq!(get_day_type(make_date("2026-01-17")), DayType::Saturday);
    }

    #[test]
    fn test_sunday_is_sunday() {
        assert_eq!(get_day_type(make_date("2026-01-18")), DayType::Sunday);
    }

    #[test]
    fn test_weekend_is_not_working_day_without_weekends() {
        assert!(!is_working_day(make_date("2026-01-17"), false));
        assert!(!is_working_day(make_date("2026-01-18"), false));
        assert!(is_working_day(make_date("2026-01-19"), false));
    }

    #[test]
    fn test_every_day_is_working_day_with_weekends() {
        assert!(is_working_day(make_date("2026-01-17"), true));
        assert!(is_working_day(make_date("2026-01-18"), true));
        assert!(is_working_day(make_date("2026-01-19"), true));
    }

    #[test]
    fn test_empty_range_counts_zero() {
        let day = make_date("2026-03-10");
        assert_eq!(working_days_between(day, day, false), 0);
        assert_eq!(working_days_between(day, day, true), 0);
    }

    #[test]
    fn test_reversed_range_counts_zero() {
        let start = make_date("2026-03-10");
        let end = make_date("2026-03-01");
        assert_eq!(working_days_between(start, end, true), 0);
    }

    #[test]
    fn test_range_excludes_end_date() {
        // Monday up to (not including) the next Monday
        let start = make_date("2026-01-12");
        let end = make_date("2026-01-19");
        assert_eq!(working_days_between(start, end, false), 5);
        assert_eq!(working_days_between(start, end, true), 7);
    }

    #[test]
    fn test_range_starting_on_weekend() {
        // Saturday 2026-01-17 to Wednesday 2026-01-21: Mon, Tue
        let start = make_date("2026-01-17");
        let end = make_date("2026-01-21");
        assert_eq!(working_days_between(start, end, false), 2);
    }

    #[test]
    fn test_range_across_leap_day() {
        // 2028 is a leap year; February has 29 days
        let start = make_date("2028-02-01");
        let end = make_date("2028-03-01");
        assert_eq!(working_days_between(start, end, true), 29);
        assert_eq!(working_days_between(start, end, false), 21);
    }

    #[test]
    fn test_whole_year_2026() {
        let start = make_date("2026-01-01");
        let end = make_date("2027-01-01");
        assert_eq!(working_days_between(start, end, true), 365);
        assert_eq!(working_days_between(start, end, false), 261);
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(format!("{}", DayType::Weekday), "Weekday");
        assert_eq!(format!("{}", DayType::Saturday), "Saturday");
        assert_eq!(format!("{}", DayType::Sunday), "Sunday");
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::Sunday).unwrap();
        assert_eq!(json, "\"sunday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Sunday);
    }

    proptest! {
        #[test]
        fn prop_closed_form_matches_day_by_day(
            start_offset in 0i64..3000,
            length in 0i64..400,
            count_weekends in any::<bool>(),
        ) {
            let base = make_date("2020-01-01");
            let start = base + chrono::Duration::days(start_offset);
            let end = start + chrono::Duration::days(length);
            prop_assert_eq!(
                working_days_between(start, end, count_weekends),
                naive_count(start, end, count_weekends)
            );
        }
    }
}
