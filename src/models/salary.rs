//! Salary parameter models.
//!
//! This module defines [`SalaryParameters`] and [`PayFrequency`], the inputs
//! every accrual calculation is driven by.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The largest salary figure accepted, in any frequency.
///
/// Hourly figures are scaled by up to 8 × 260 × 366 on the way to a
/// year-to-date total; this bound keeps every intermediate well inside
/// `Decimal`'s range.
// 1_000_000_000_000_000 (10^15) at scale 0; `Decimal::new` is not `const`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// The unit a salary figure is denominated in.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::PayFrequency;
///
/// let frequency: PayFrequency = "Monthly".parse().unwrap();
/// assert_eq!(frequency, PayFrequency::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Amount is paid per year.
    #[default]
    Yearly,
    /// Amount is paid per month.
    Monthly,
    /// Amount is paid per working day.
    Daily,
    /// Amount is paid per working hour.
    Hourly,
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayFrequency::Yearly => write!(f, "yearly"),
            PayFrequency::Monthly => write!(f, "monthly"),
            PayFrequency::Daily => write!(f, "daily"),
            PayFrequency::Hourly => write!(f, "hourly"),
        }
    }
}

impl FromStr for PayFrequency {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Ok(PayFrequency::Yearly),
            "monthly" => Ok(PayFrequency::Monthly),
            "daily" => Ok(PayFrequency::Daily),
            "hourly" => Ok(PayFrequency::Hourly),
            other => Err(EngineError::InvalidParameters {
                field: "frequency".to_string(),
                message: format!("unknown pay frequency '{}'", other),
            }),
        }
    }
}

/// The salary figure and accrual policy a calculation runs with.
///
/// Fields are public so collaborators can build parameters directly; the
/// scheduler still checks [`SalaryParameters::is_valid`] before it runs
/// anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryParameters {
    /// The salary figure, denominated per `frequency`.
    pub amount: Decimal,
    /// The unit `amount` is denominated in.
    #[serde(default)]
    pub frequency: PayFrequency,
    /// When false, Saturdays and Sundays accrue nothing.
    #[serde(default)]
    pub count_weekends: bool,
}

impl SalaryParameters {
    /// Creates validated salary parameters.
    ///
    /// Returns `InvalidParameters` if `amount` is zero, negative or above
    /// [`MAX_AMOUNT`].
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::models::{PayFrequency, SalaryParameters};
    /// use rust_decimal::Decimal;
    ///
    /// let params = SalaryParameters::new(Decimal::new(5000, 0), PayFrequency::Monthly, false).unwrap();
    /// assert!(params.is_valid());
    ///
    /// assert!(SalaryParameters::new(Decimal::ZERO, PayFrequency::Monthly, false).is_err());
    /// ```
    pub fn new(
        amount: Decimal,
        frequency: PayFrequency,
        count_weekends: bool,
    ) -> EngineResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidParameters {
                field: "amount".to_string(),
                message: format!("must be greater than zero, got {}", amount),
            });
        }
        if amount > MAX_AMOUNT {
            return Err(EngineError::InvalidParameters {
                field: "amount".to_string(),
                message: format!("must be at most {}, got {}", MAX_AMOUNT, amount),
            });
        }

        Ok(Self {
            amount,
            frequency,
            count_weekends,
        })
    }

    /// Parses a free-form amount as typed by a user.
    ///
    /// Surrounding whitespace is ignored. Empty, non-numeric and out-of-range
    /// input all yield `InvalidParameters`.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::models::{PayFrequency, SalaryParameters};
    ///
    /// let params = SalaryParameters::parse(" 260000 ", PayFrequency::Yearly, true)?;
    /// assert_eq!(params.amount.to_string(), "260000");
    /// # Ok::<(), earnings_ticker::error::EngineError>(())
    /// ```
    pub fn parse(
        amount: &str,
        frequency: PayFrequency,
        count_weekends: bool,
    ) -> EngineResult<Self> {
        let trimmed = amount.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidParameters {
                field: "amount".to_string(),
                message: "no amount entered".to_string(),
            });
        }

        let parsed = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| EngineError::InvalidParameters {
                field: "amount".to_string(),
                message: format!("'{}' is not a number", trimmed),
            })?;

        Self::new(parsed, frequency, count_weekends)
    }

    /// Returns true if these parameters can drive a calculation.
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO && self.amount <= MAX_AMOUNT
    }
}
