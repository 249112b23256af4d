//! Planned expense model
//!
//! An expense is either personal (owed entirely by one member) or common
//! (jointly owed, apportioned by percentage shares). The scope is a tagged
//! union so the two shapes cannot be confused in code or in serialized form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, UserId};
use super::money::Money;
use super::share::ExpenseShare;

/// Who owes a planned expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum ExpenseScope {
    /// Owed entirely by one member
    Personal { user_id: UserId },
    /// Jointly owed, split by basis-point shares
    Common { shares: Vec<ExpenseShare> },
}

impl ExpenseScope {
    /// Check whether this is a personal expense
    pub fn is_personal(&self) -> bool {
        matches!(self, Self::Personal { .. })
    }

    /// Check whether this is a common (jointly-owed) expense
    pub fn is_common(&self) -> bool {
        matches!(self, Self::Common { .. })
    }
}

/// Validation errors for planned expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A planned expense within a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedExpense {
    #[serde(default)]
    pub id: ExpenseId,
    /// Display name ("Rent", "Groceries", ...)
    #[serde(default)]
    pub name: String,
    /// Amount in cents, positive
    pub amount: Money,
    #[serde(flatten)]
    pub scope: ExpenseScope,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl PlannedExpense {
    /// Create a personal expense owed by one member
    pub fn personal(user_id: UserId, amount: Money, name: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            scope: ExpenseScope::Personal { user_id },
            created_at: Utc::now(),
        }
    }

    /// Create a common expense split by the given shares
    ///
    /// The shares are not validated here; run them through
    /// [`crate::services::validate_shares`] before persisting.
    pub fn common(shares: Vec<ExpenseShare>, amount: Money, name: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            scope: ExpenseScope::Common { shares },
            created_at: Utc::now(),
        }
    }

    /// Validate the expense amount
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
