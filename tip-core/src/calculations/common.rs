//! Rounding shared by everything that shows money to a person.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly half a cent round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3.333)), dec!(3.33));
/// assert_eq!(round_half_up(dec!(6.665)), dec!(6.67));
/// assert_eq!(round_half_up(dec!(-6.665)), dec!(-6.67));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
