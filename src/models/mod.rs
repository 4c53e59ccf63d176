//! Core data models for the earnings ticker.
//!
//! This module contains the salary inputs and the derived accrual figures.

mod accrual_result;
mod salary;

pub use accrual_result::AccrualResult;
pub use salary::{MAX_AMOUNT, PayFrequency, SalaryParameters};
