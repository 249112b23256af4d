//! Envelope (per-category sub-budget) model
//!
//! An envelope allocates a fixed amount to one spending category within a
//! plan and records actual spending against it. Each entry is tagged with
//! the member who logged it; settlement attributes spending to that member
//! regardless of which envelope it was logged against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{EntryId, EnvelopeId, UserId};
use super::money::Money;

/// Validation errors for envelopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    NegativeAllocation,
}

impl std::fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAllocation => write!(f, "Envelope allocation cannot be negative"),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}

/// One spending record logged against an envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeEntry {
    #[serde(default)]
    pub id: EntryId,
    /// The member who logged this spending
    pub user_id: UserId,
    /// Amount spent, in cents
    pub amount: Money,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

impl EnvelopeEntry {
    /// Create a new entry
    pub fn new(user_id: UserId, amount: Money) -> Self {
        Self {
            id: EntryId::new(),
            user_id,
            amount,
            logged_at: Utc::now(),
        }
    }
}

/// A per-category sub-budget within a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub id: EnvelopeId,
    /// The spending category this envelope covers
    pub category: String,
    /// Amount set aside for the category, non-negative
    pub allocated_amount: Money,
    /// Spending logged against this envelope, in log order
    #[serde(default)]
    pub entries: Vec<EnvelopeEntry>,
}

impl Envelope {
    /// Create a new empty envelope
    pub fn new(category: impl Into<String>, allocated_amount: Money) -> Self {
        Self {
            id: EnvelopeId::new(),
            category: category.into(),
            allocated_amount,
            entries: Vec::new(),
        }
    }

    /// Log spending by a member against this envelope
    pub fn log_entry(&mut self, user_id: UserId, amount: Money) -> &EnvelopeEntry {
        self.entries.push(EnvelopeEntry::new(user_id, amount));
        self.entries.last().unwrap()
    }

    /// Total spending logged against this envelope (all members)
    pub fn total_spent(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Remaining allocation after logged spending
    pub fn remaining(&self) -> Money {
        self.allocated_amount - self.total_spent()
    }

    /// Validate the envelope
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        if self.allocated_amount.is_negative() {
            return Err(EnvelopeValidationError::NegativeAllocation);
        }
        Ok(())
    }
}
