//! 2025 federal tax reference values.
//!
//! Everything here is compiled in; this estimator supports the single
//! 2025 tax year and nothing else.
//!
//! # Standard deductions
//!
//! | Filing status | Amount |
//! |---------------|--------|
//! | Single | $15,000 |
//! | Married Filing Jointly | $30,000 |
//! | Married Filing Separately | $15,000 |
//! | Head of Household | $22,500 |
//!
//! An unset filing status falls back to the Single amount.
//!
//! # FICA parameters
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Social security wage cap | $176,100 |
//! | Social security rate | 6.2% |
//! | Medicare rate | 1.45% |
//! | Additional Medicare rate | 0.9% |
//! | Surtax threshold (Single, Head of Household) | $200,000 |
//! | Surtax threshold (Married Filing Jointly) | $250,000 |
//! | Surtax threshold (Married Filing Separately) | $125,000 |
//!
//! An unset filing status uses the $200,000 threshold.

use rust_decimal::Decimal;

use crate::models::{FilingStatus, TaxBracket};

/// Standard deduction for a filing status; unset falls back to Single.
pub fn standard_deduction(status: Option<FilingStatus>) -> Decimal {
    let amount = match status {
        Some(FilingStatus::MarriedFilingJointly) => 30000,
        Some(FilingStatus::HeadOfHousehold) => 22500,
        Some(FilingStatus::Single | FilingStatus::MarriedFilingSeparately) | None => 15000,
    };
    Decimal::from(amount)
}

/// The amounts the deduction-entry heuristic recognizes as a standard
/// deduction regardless of description.
pub fn standard_deduction_amounts() -> [Decimal; 3] {
    [
        Decimal::from(15000),
        Decimal::from(22500),
        Decimal::from(30000),
    ]
}

/// Additional-Medicare surtax threshold for a filing status.
pub fn surtax_threshold(status: Option<FilingStatus>) -> Decimal {
    let amount = match status {
        Some(FilingStatus::MarriedFilingJointly) => 250000,
        Some(FilingStatus::MarriedFilingSeparately) => 125000,
        Some(FilingStatus::Single | FilingStatus::HeadOfHousehold) | None => 200000,
    };
    Decimal::from(amount)
}

/// Maximum earnings subject to social security tax.
pub fn ss_wage_max() -> Decimal {
    Decimal::from(176100)
}

/// Employee-side social security tax rate.
pub fn ss_tax_rate() -> Decimal {
    Decimal::new(62, 3) // 0.062
}

/// Employee-side Medicare tax rate.
pub fn medicare_tax_rate() -> Decimal {
    Decimal::new(145, 4) // 0.0145
}

/// Additional Medicare tax rate above the surtax threshold.
pub fn additional_medicare_rate() -> Decimal {
    Decimal::new(9, 3) // 0.009
}

/// The 2025 rate schedule for a filing status.
///
/// Brackets are sorted ascending, contiguous, and end with an unbounded
/// top bracket, which is what [`crate::calculations::TaxSchedule`]
/// expects.
pub fn tax_brackets(status: FilingStatus) -> Vec<TaxBracket> {
    match status {
        FilingStatus::Single => vec![
            bracket(0, Some(11925), 10),
            bracket(11925, Some(48475), 12),
            bracket(48475, Some(103350), 22),
            bracket(103350, Some(197300), 24),
            bracket(197300, Some(250525), 32),
            bracket(250525, Some(626350), 35),
            bracket(626350, None, 37),
        ],
        FilingStatus::MarriedFilingJointly => vec![
            bracket(0, Some(23850), 10),
            bracket(23850, Some(96950), 12),
            bracket(96950, Some(206700), 22),
            bracket(206700, Some(394600), 24),
            bracket(394600, Some(501050), 32),
            bracket(501050, Some(751600), 35),
            bracket(751600, None, 37),
        ],
        FilingStatus::MarriedFilingSeparately => vec![
            bracket(0, Some(11925), 10),
            bracket(11925, Some(48475), 12),
            bracket(48475, Some(103350), 22),
            bracket(103350, Some(197300), 24),
            bracket(197300, Some(250525), 32),
            bracket(250525, Some(375800), 35),
            bracket(375800, None, 37),
        ],
        FilingStatus::HeadOfHousehold => vec![
            bracket(0, Some(17000), 10),
            bracket(17000, Some(64850), 12),
            bracket(64850, Some(103350), 22),
            bracket(103350, Some(197300), 24),
            bracket(197300, Some(250525), 32),
            bracket(250525, Some(626350), 35),
            bracket(626350, None, 37),
        ],
    }
}

/// Builds one bracket from whole-dollar bounds and a whole-percent rate.
fn bracket(lower: i64, upper: Option<i64>, rate_percent: i64) -> TaxBracket {
    TaxBracket {
        lower: Decimal::from(lower),
        upper: upper.map(Decimal::from),
        rate: Decimal::new(rate_percent, 2),
    }
}
