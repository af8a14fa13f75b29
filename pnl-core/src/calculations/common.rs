//! Rounding and formatting shared by the totals.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pnl_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pnl_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(52000)), "52000.00");
/// assert_eq!(format_amount(dec!(-500)), "-500.00");
/// assert_eq!(format_amount(dec!(0.125)), "0.13");
/// ```
pub fn format_amount(value: Decimal) -> String {
    // Precision pads with zeros even where the mantissa has no room for a
    // scale of two.
    format!("{:.2}", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        assert_eq!(round_half_up(dec!(999999.999)), dec!(1000000.00));
    }

    // =========================================================================
    // format_amount tests
    // =========================================================================

    #[test]
    fn format_amount_pads_whole_numbers() {
        assert_eq!(format_amount(dec!(31000)), "31000.00");
    }

    #[test]
    fn format_amount_pads_single_decimal() {
        assert_eq!(format_amount(dec!(1500.5)), "1500.50");
    }

    #[test]
    fn format_amount_rounds_extra_precision() {
        assert_eq!(format_amount(dec!(10.005)), "10.01");
        assert_eq!(format_amount(dec!(10.004)), "10.00");
    }

    #[test]
    fn format_amount_zero() {
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn format_amount_pads_values_at_the_top_of_the_range() {
        assert_eq!(format_amount(Decimal::MAX), "79228162514264337593543950335.00");
        assert_eq!(format_amount(Decimal::MIN), "-79228162514264337593543950335.00");
        assert_eq!(
            format_amount(dec!(1234567890123456789012345678.9)),
            "1234567890123456789012345678.90"
        );
    }

    #[test]
    fn format_amount_keeps_sign_of_losses() {
        assert_eq!(format_amount(dec!(-2500.75)), "-2500.75");
    }
}
