//! Ownership shares for jointly-owed expenses
//!
//! A common expense carries one share per participating member, expressed in
//! basis points (1/100 of a percent). The shares of a persisted expense sum
//! to exactly 10000; that invariant is enforced by the share validator at
//! the write path, never re-checked by the settlement engine.

use serde::{Deserialize, Serialize};

use super::ids::UserId;

pub use super::money::BASIS_POINTS_TOTAL;

/// One member's slice of a jointly-owed expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseShare {
    /// The member who owes this slice
    pub user_id: UserId,
    /// Share size in basis points (0-10000)
    pub percentage: u32,
}

impl ExpenseShare {
    /// Create a new share
    pub fn new(user_id: UserId, percentage: u32) -> Self {
        Self {
            user_id,
            percentage,
        }
    }

    /// Check whether the percentage lies in the valid 0-10000 range
    pub fn is_in_range(&self) -> bool {
        self.percentage <= BASIS_POINTS_TOTAL
    }
}
