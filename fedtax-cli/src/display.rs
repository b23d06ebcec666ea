//! Money formatting for console output.

use rust_decimal::Decimal;

use fedtax_core::calculations::common::round_half_up;

/// Formats an amount as US dollars with grouped thousands, always two
/// decimal places: `$1,234.56`, `-$0.50` for negatives.
pub fn format_usd(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);
    let negative = rounded < Decimal::ZERO;

    let text = rounded.abs().to_string();
    let (dollars, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_thousands(dollars);

    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Inserts a comma before every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_usd(dec!(1234567.89)), "$1,234,567.89");
    }

    #[test]
    fn format_usd_pads_to_two_decimal_places() {
        assert_eq!(format_usd(dec!(9751.5)), "$9,751.50");
        assert_eq!(format_usd(dec!(60000)), "$60,000.00");
    }

    #[test]
    fn format_usd_leaves_small_amounts_ungrouped() {
        assert_eq!(format_usd(dec!(999)), "$999.00");
        assert_eq!(format_usd(dec!(0)), "$0.00");
    }

    #[test]
    fn format_usd_puts_the_sign_before_the_dollar() {
        assert_eq!(format_usd(dec!(-1000)), "-$1,000.00");
        assert_eq!(format_usd(dec!(-0.50)), "-$0.50");
    }

    #[test]
    fn format_usd_rounds_half_up_first() {
        assert_eq!(format_usd(dec!(10.005)), "$10.01");
    }

    #[test]
    fn format_usd_does_not_sign_an_amount_that_rounds_to_zero() {
        assert_eq!(format_usd(dec!(-0.001)), "$0.00");
    }
}
