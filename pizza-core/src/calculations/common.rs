//! Rounding and display helpers shared by pricing and the view model.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pizza_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(10.454)), dec!(10.45));
/// assert_eq!(round_half_up(dec!(10.455)), dec!(10.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a price with exactly two decimal places and no currency symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pizza_core::calculations::common::format_price;
///
/// assert_eq!(format_price(dec!(16)), "16.00");
/// assert_eq!(format_price(dec!(10.5)), "10.50");
/// ```
pub fn format_price(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}
