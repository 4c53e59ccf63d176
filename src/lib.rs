//! Live salary accrual engine.
//!
//! This crate computes how much of a periodic salary has been earned so far
//! today, this month and this year, republishes those figures once per tick,
//! and animates displayed values towards each new figure.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod ticker;
