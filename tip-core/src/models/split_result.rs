use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a successful split calculation.
///
/// Values are unrounded; formatting for display is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Tip for the whole bill.
    pub total_tip: Decimal,
    /// Each person's share of the tip.
    pub tip_per_person: Decimal,
    /// Each person's share of bill plus tip.
    pub total_per_person: Decimal,
}
