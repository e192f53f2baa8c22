use serde::{Deserialize, Serialize};

use crate::models::FormField;

/// Raw, unvalidated form values exactly as the host collected them.
///
/// Every field is kept as text; normalization into numbers happens once,
/// in [`InputValidator`](crate::validation::InputValidator). An empty tip
/// percentage means no tip has been selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub bill_amount: String,
    pub party_size: String,
    pub tip_percent: String,
}

impl FormInput {
    /// Builds an input from the three raw values.
    pub fn new(
        bill_amount: impl Into<String>,
        party_size: impl Into<String>,
        tip_percent: impl Into<String>,
    ) -> Self {
        Self {
            bill_amount: bill_amount.into(),
            party_size: party_size.into(),
            tip_percent: tip_percent.into(),
        }
    }

    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        match field {
            FormField::BillAmount => &self.bill_amount,
            FormField::PartySize => &self.party_size,
            FormField::TipPercent => &self.tip_percent,
        }
    }

    pub fn set(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        let slot = match field {
            FormField::BillAmount => &mut self.bill_amount,
            FormField::PartySize => &mut self.party_size,
            FormField::TipPercent => &mut self.tip_percent,
        };
        *slot = value.into();
    }

    /// Returns `true` when no field holds anything but whitespace.
    pub fn is_blank(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }
}
