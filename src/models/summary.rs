//! Settlement output projection
//!
//! The summary is derived on demand by the settlement engine and never
//! persisted. All monetary fields serialize as integer cents; currency
//! formatting happens at the display boundary only.

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::money::Money;

/// One member's settlement row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub user_id: UserId,
    /// Sum of this member's incomes
    pub total_income: Money,
    /// Sum of this member's personal expenses
    pub personal_expenses: Money,
    /// This member's rounded slices of all common expenses
    pub common_expense_share: Money,
    /// personal_expenses + common_expense_share
    pub total_expenses: Money,
    /// total_income - total_expenses (may be negative)
    pub savings: Money,
    /// Envelope spending logged by this member, across all envelopes
    pub envelope_spent: Money,
    /// Plan-level envelope allocation total (identical for every member)
    pub envelope_allocated: Money,
}

impl MemberSummary {
    /// An all-zero row for a member with no records
    pub fn zeroed(user_id: UserId) -> Self {
        Self {
            user_id,
            total_income: Money::zero(),
            personal_expenses: Money::zero(),
            common_expense_share: Money::zero(),
            total_expenses: Money::zero(),
            savings: Money::zero(),
            envelope_spent: Money::zero(),
            envelope_allocated: Money::zero(),
        }
    }
}

/// The full settlement for one plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of per_user total_income
    pub total_income: Money,
    /// Sum of per_user total_expenses
    pub total_expenses: Money,
    /// Sum of per_user savings
    pub total_savings: Money,
    /// One row per roster member, in roster order
    pub per_user: Vec<MemberSummary>,
}

impl PlanSummary {
    /// Find the row for a specific member
    pub fn member(&self, user_id: UserId) -> Option<&MemberSummary> {
        self.per_user.iter().find(|m| m.user_id == user_id)
    }
}
