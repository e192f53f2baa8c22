//! Input validation for the tip form.
//!
//! The validator is the single place where raw form text becomes numbers.
//! Checks run in a fixed order (bill, then party size, then tip percentage)
//! and the first failure is returned.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{FormInput, InputValidator, ValidationError};
//!
//! let validator = InputValidator::default();
//!
//! let ok = validator.validate(&FormInput::new("1,250.00", "5", "18%")).unwrap();
//! assert_eq!(ok.bill, dec!(1250.00));
//! assert_eq!(ok.people, 5);
//! assert_eq!(ok.percent, dec!(18));
//!
//! let err = validator.validate(&FormInput::new("0", "2", "15")).unwrap_err();
//! assert!(matches!(err, ValidationError::InvalidBill { .. }));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{FormField, FormInput};

/// Largest bill the validator accepts.
///
/// Together with [`MAX_TIP_PERCENT`] keeps `bill × percent` far inside
/// [`Decimal`]'s range.
pub const MAX_BILL_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Default ceiling for the tip percentage.
pub const DEFAULT_MAX_TIP_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Highest tip ceiling a validator can be configured with.
pub const MAX_TIP_PERCENT: Decimal = Decimal::ONE_THOUSAND;

/// Reasons a calculation attempt can be rejected.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Bill amount must be a positive number (got '{input}').")]
    InvalidBill { input: String },

    #[error("Party size must be a whole number of at least 1 (got '{input}').")]
    InvalidPartySize { input: String },

    #[error("Choose a tip percentage greater than 0 and at most {max} (got '{input}').")]
    InvalidTipPercent { input: String, max: Decimal },
}

impl ValidationError {
    /// The form field the user has to correct.
    pub fn field(&self) -> FormField {
        match self {
            Self::InvalidBill { .. } => FormField::BillAmount,
            Self::InvalidPartySize { .. } => FormField::PartySize,
            Self::InvalidTipPercent { .. } => FormField::TipPercent,
        }
    }
}

/// Form values after normalization into strict numeric types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    /// Bill amount, always > 0.
    pub bill: Decimal,
    /// Party size, always >= 1.
    pub people: u32,
    /// Tip percentage, always > 0 and within the validator's ceiling.
    pub percent: Decimal,
}

/// Parses and checks raw [`FormInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValidator {
    max_tip_percent: Decimal,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TIP_PERCENT)
    }
}

impl InputValidator {
    /// Creates a validator that accepts tips up to `max_tip_percent`.
    ///
    /// Ceilings above [`MAX_TIP_PERCENT`] are clamped to it.
    pub fn new(max_tip_percent: Decimal) -> Self {
        if max_tip_percent > MAX_TIP_PERCENT {
            warn!(%max_tip_percent, "tip ceiling clamped to {MAX_TIP_PERCENT}");
        }
        Self {
            max_tip_percent: max_tip_percent.min(MAX_TIP_PERCENT),
        }
    }

    pub fn max_tip_percent(&self) -> Decimal {
        self.max_tip_percent
    }

    /// Validates all three fields, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidBill`] if the bill is empty, not a number,
    ///   not positive, or above [`MAX_BILL_AMOUNT`]
    /// - [`ValidationError::InvalidPartySize`] if the party size is empty, not
    ///   a whole number, below 1, or too large for `u32`
    /// - [`ValidationError::InvalidTipPercent`] if no tip is selected, or it is
    ///   not a number, not positive, or above the configured maximum
    pub fn validate(
        &self,
        input: &FormInput,
    ) -> Result<ValidatedInput, ValidationError> {
        let validated = ValidatedInput {
            bill: self.validate_bill(&input.bill_amount)?,
            people: self.validate_party_size(&input.party_size)?,
            percent: self.validate_tip_percent(&input.tip_percent)?,
        };
        debug!(
            bill = %validated.bill,
            people = validated.people,
            percent = %validated.percent,
            "form input accepted"
        );
        Ok(validated)
    }

    fn validate_bill(
        &self,
        raw: &str,
    ) -> Result<Decimal, ValidationError> {
        match parse_number(raw) {
            Some(bill) if bill > Decimal::ZERO && bill <= MAX_BILL_AMOUNT => Ok(bill),
            _ => Err(reject(ValidationError::InvalidBill {
                input: raw.to_string(),
            })),
        }
    }

    fn validate_party_size(
        &self,
        raw: &str,
    ) -> Result<u32, ValidationError> {
        parse_number(raw)
            .filter(|n| n.fract().is_zero())
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                reject(ValidationError::InvalidPartySize {
                    input: raw.to_string(),
                })
            })
    }

    fn validate_tip_percent(
        &self,
        raw: &str,
    ) -> Result<Decimal, ValidationError> {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
        match parse_number(number) {
            Some(percent) if percent > Decimal::ZERO && percent <= self.max_tip_percent => {
                Ok(percent)
            }
            _ => Err(reject(ValidationError::InvalidTipPercent {
                input: raw.to_string(),
                max: self.max_tip_percent,
            })),
        }
    }
}

fn reject(error: ValidationError) -> ValidationError {
    debug!(field = error.field().as_str(), %error, "form input rejected");
    error
}

/// Trims whitespace and drops `,` thousands separators.
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a normalized number; empty or unparseable input yields `None`.
fn parse_number(s: &str) -> Option<Decimal> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}
