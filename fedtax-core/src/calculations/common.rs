//! Shared helpers for monetary arithmetic.

use rust_decimal::Decimal;

/// Rounds to two decimal places, midpoints away from zero.
///
/// Every calculation step rounds its result with this, so intermediate
/// values never carry sub-cent precision forward.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fedtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(5161.495)), dec!(5161.50));
/// assert_eq!(round_half_up(dec!(5161.494)), dec!(5161.49));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two values.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}
