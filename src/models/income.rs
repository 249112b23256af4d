//! Income model
//!
//! One income record per source per member within a plan. Amounts are
//! positive; a member may have any number of records (or none).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{IncomeId, UserId};
use super::money::Money;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// An income belonging to one plan member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub id: IncomeId,
    /// The member this income belongs to
    pub user_id: UserId,
    /// Amount in cents, positive
    pub amount: Money,
    /// Free-form source label ("Salary", "Freelance", ...)
    #[serde(default)]
    pub label: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income record
    pub fn new(user_id: UserId, amount: Money) -> Self {
        Self {
            id: IncomeId::new(),
            user_id,
            amount,
            label: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a new income record with a source label
    pub fn with_label(user_id: UserId, amount: Money, label: impl Into<String>) -> Self {
        let mut income = Self::new(user_id, amount);
        income.label = label.into();
        income
    }

    /// Validate the income record
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
