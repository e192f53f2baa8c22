//! State behind a single tip form.
//!
//! The host owns one [`FormState`] and feeds user actions into it one at a
//! time. Nothing here blocks or shares state, so handlers are plain `&mut self`
//! methods.
//!
//! A result exists only while the most recent calculation attempt passed
//! validation and the form has not been reset since. Editing a field leaves
//! the last result or error on display until the next calculate or reset.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculations::compute_validated;
use crate::models::{FormField, FormInput, ServiceRating, SplitResult};
use crate::validation::{InputValidator, ValidationError};

/// Form inputs plus the outcome of the last calculation attempt.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: FormInput,
    validator: InputValidator,
    error: Option<ValidationError>,
    result: Option<SplitResult>,
}

impl FormState {
    /// Creates an empty form checked by `validator`.
    pub fn new(validator: InputValidator) -> Self {
        Self {
            validator,
            ..Default::default()
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Error from the last failed calculation, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Result from the last successful calculation, if any.
    pub fn result(&self) -> Option<&SplitResult> {
        self.result.as_ref()
    }

    /// Whether a result is currently available for display.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    /// Stores a new raw value for `field`. Does not recompute.
    pub fn on_field_change(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        debug!(field = field.as_str(), value = %value, "field changed");
        self.input.set(field, value);
    }

    /// Selects a tip percentage, same as typing it into the tip field.
    pub fn on_quick_pick_percent(
        &mut self,
        percent: Decimal,
    ) {
        self.on_field_change(FormField::TipPercent, percent.to_string());
    }

    /// Selects the tip percentage for a service rating.
    pub fn on_quick_pick(
        &mut self,
        rating: ServiceRating,
    ) {
        self.on_quick_pick_percent(rating.percent());
    }

    /// Validates the current input and, if it passes, computes a new result.
    ///
    /// On failure the error is kept and any previous result is dropped. On
    /// success the error is cleared and the result replaced. The inputs are
    /// left as they are either way.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tip_core::{FormField, FormState};
    ///
    /// let mut form = FormState::default();
    /// form.on_field_change(FormField::BillAmount, "50");
    /// form.on_field_change(FormField::PartySize, "1");
    /// form.on_quick_pick_percent(dec!(18));
    ///
    /// let result = form.on_calculate().unwrap();
    /// assert_eq!(result.total_per_person, dec!(59.00));
    /// assert!(form.has_result());
    /// ```
    pub fn on_calculate(&mut self) -> Result<SplitResult, ValidationError> {
        match self.validator.validate(&self.input) {
            Ok(validated) => {
                let result = compute_validated(&validated);
                info!(
                    total_tip = %result.total_tip,
                    total_per_person = %result.total_per_person,
                    "split calculated"
                );
                self.error = None;
                self.result = Some(result);
                Ok(result)
            }
            Err(error) => {
                info!(field = error.field().as_str(), "calculation rejected");
                self.result = None;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Clears every field (tip back to unselected), the error and the result.
    pub fn on_reset(&mut self) {
        debug!("form reset");
        self.input = FormInput::default();
        self.error = None;
        self.result = None;
    }
}
