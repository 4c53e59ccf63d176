//! Rate normalization.
//!
//! Whatever frequency a salary is entered in, accrual runs on three base
//! rates: per working day, per month and per year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayFrequency, SalaryParameters};

/// Working days in a year (52 weeks × 5).
pub const WORKING_DAYS_PER_YEAR: u32 = 260;

/// Working days in a month.
pub const WORKING_DAYS_PER_MONTH: u32 = 22;

/// Months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Paid hours in one working day.
pub const HOURS_PER_WORKDAY: u32 = 8;

/// The three base rates derived from a salary figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRates {
    /// Amount earned over one full working day.
    pub daily: Decimal,
    /// Amount earned over one month.
    pub monthly: Decimal,
    /// Amount earned over one year.
    pub annual: Decimal,
}

/// Normalizes a salary figure to daily, monthly and annual rates.
///
/// | frequency | daily          | monthly      | annual         |
/// |-----------|----------------|--------------|----------------|
/// | yearly    | amount / 260   | amount / 12  | amount         |
/// | monthly   | amount / 22    | amount       | amount × 12    |
/// | daily     | amount         | daily × 22   | amount × 260   |
/// | hourly    | amount × 8     | daily × 22   | amount × 8 × 260 |
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::normalize_rates;
/// use earnings_ticker::models::{PayFrequency, SalaryParameters};
/// use rust_decimal::Decimal;
///
/// let params = SalaryParameters::new(Decimal::new(260000, 0), PayFrequency::Yearly, true).unwrap();
/// let rates = normalize_rates(&params);
/// assert_eq!(rates.daily, Decimal::new(1000, 0));
/// ```
pub fn normalize_rates(params: &SalaryParameters) -> NormalizedRates {
    let amount = params.amount;
    let days_per_year = Decimal::from(WORKING_DAYS_PER_YEAR);
    let days_per_month = Decimal::from(WORKING_DAYS_PER_MONTH);
    let months_per_year = Decimal::from(MONTHS_PER_YEAR);
    let hours_per_day = Decimal::from(HOURS_PER_WORKDAY);

    match params.frequency {
        PayFrequency::Yearly => NormalizedRates {
            daily: amount / days_per_year,
            monthly: amount / months_per_year,
            annual: amount,
        },
        PayFrequency::Monthly => NormalizedRates {
            daily: amount / days_per_month,
            monthly: amount,
            annual: amount * months_per_year,
        },
        PayFrequency::Daily => NormalizedRates {
            daily: amount,
            monthly: amount * days_per_month,
            annual: amount * days_per_year,
        },
        PayFrequency::Hourly => {
            let daily = amount * hours_per_day;
            NormalizedRates {
                daily,
                monthly: daily * days_per_month,
                annual: daily * days_per_year,
            }
        }
    }
}
