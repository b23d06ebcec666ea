//! Tax calculation modules.
//!
//! The two liabilities this estimator computes are kept separate: FICA
//! payroll tax over gross wage income, and bracketed income tax over
//! taxable income. [`crate::Taxpayer`] wires both into a full estimate.

pub mod common;
pub mod fica;
pub mod income_tax;

pub use fica::{FicaBreakdown, FicaCalculator, FicaConfig, FicaError};
pub use income_tax::TaxSchedule;
