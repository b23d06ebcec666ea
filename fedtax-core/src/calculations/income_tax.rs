//! Federal income tax from the progressive rate schedules.
//!
//! Each filing status has its own bracket schedule; the tax is the sum
//! over brackets of the income slice falling inside that bracket times
//! the bracket rate. For reference, the 2025 Single schedule:
//!
//! | Over | Up to | Rate |
//! |------|-------|------|
//! | $0 | $11,925 | 10% |
//! | $11,925 | $48,475 | 12% |
//! | $48,475 | $103,350 | 22% |
//! | $103,350 | $197,300 | 24% |
//! | $197,300 | $250,525 | 32% |
//! | $250,525 | $626,350 | 35% |
//! | $626,350 | — | 37% |
//!
//! The other schedules live in [`crate::tables`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use fedtax_core::calculations::TaxSchedule;
//! use fedtax_core::models::FilingStatus;
//! use fedtax_core::tables;
//!
//! let brackets = tables::tax_brackets(FilingStatus::Single);
//! let schedule = TaxSchedule::new(&brackets);
//!
//! // 11925 × 0.10 + (45000 - 11925) × 0.12
//! assert_eq!(schedule.calculate(dec!(45000.00)), dec!(5161.50));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::TaxBracket;

/// Calculator over one progressive bracket schedule.
#[derive(Debug, Clone)]
pub struct TaxSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> TaxSchedule<'a> {
    /// Creates a schedule over the given brackets.
    ///
    /// Brackets must be sorted by `lower` ascending and contiguous, with
    /// the last bracket unbounded, as the tables in [`crate::tables`]
    /// are. Income above the last bounded bracket is otherwise not
    /// taxed.
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Tax on `taxable_income`, accumulated bracket by bracket and
    /// rounded to whole cents at the end.
    ///
    /// Zero or negative income owes nothing, as does an empty schedule.
    pub fn calculate(&self, taxable_income: Decimal) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if taxable_income <= bracket.lower {
                break;
            }
            let slice_top = bracket
                .upper
                .map_or(taxable_income, |upper| taxable_income.min(upper));
            tax += (slice_top - bracket.lower) * bracket.rate;
        }

        round_half_up(tax)
    }
}
