//! Fee payment status rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Payment state of a fee record.
///
/// [`FeeStatus::derive`] never produces `Overdue`; the variant exists so
/// externally flagged records still parse, but every write recomputes the
/// status from the amounts and overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    Pending,
    Partial,
    Paid,
    Overdue,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "PENDING",
            FeeStatus::Partial => "PARTIAL",
            FeeStatus::Paid => "PAID",
            FeeStatus::Overdue => "OVERDUE",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "PENDING" => Ok(FeeStatus::Pending),
            "PARTIAL" => Ok(FeeStatus::Partial),
            "PAID" => Ok(FeeStatus::Paid),
            "OVERDUE" => Ok(FeeStatus::Overdue),
            other => Err(CoreError::Validation(format!("unknown fee status: {other}"))),
        }
    }

    /// Recompute the status from the fee amounts.
    pub fn derive(amount: f64, amount_paid: f64) -> Self {
        if amount_paid >= amount {
            FeeStatus::Paid
        } else if amount_paid > 0.0 {
            FeeStatus::Partial
        } else {
            FeeStatus::Pending
        }
    }
}

/// Outstanding balance on a fee. Negative when overpaid.
pub fn balance(amount: f64, amount_paid: f64) -> f64 {
    amount - amount_paid
}
