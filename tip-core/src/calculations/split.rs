//! The bill split itself.
//!
//! | Value              | Formula                        |
//! |--------------------|--------------------------------|
//! | total tip          | bill × percent / 100           |
//! | tip per person     | total tip / people             |
//! | total per person   | (bill + total tip) / people    |
//!
//! Nothing is rounded here. The functions are pure: identical inputs
//! always produce identical outputs.

use rust_decimal::Decimal;

use crate::models::SplitResult;
use crate::validation::ValidatedInput;

/// Splits a bill and its tip evenly across `people`.
///
/// Callers must pass `people >= 1`; [`InputValidator`](crate::validation::InputValidator)
/// guarantees this along with a bill small enough not to overflow.
///
/// # Panics
///
/// Panics if `people` is zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::compute;
///
/// let result = compute(dec!(100), 4, dec!(20));
///
/// assert_eq!(result.total_tip, dec!(20.00));
/// assert_eq!(result.tip_per_person, dec!(5.00));
/// assert_eq!(result.total_per_person, dec!(30.00));
/// ```
pub fn compute(
    bill: Decimal,
    people: u32,
    percent: Decimal,
) -> SplitResult {
    assert!(people >= 1, "party size must be at least 1");

    let people = Decimal::from(people);
    let total_tip = bill * percent / Decimal::ONE_HUNDRED;

    SplitResult {
        total_tip,
        tip_per_person: total_tip / people,
        total_per_person: (bill + total_tip) / people,
    }
}

/// Runs [`compute`] on input that already passed validation.
pub fn compute_validated(input: &ValidatedInput) -> SplitResult {
    compute(input.bill, input.people, input.percent)
}
