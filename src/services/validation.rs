//! Write-path validation
//!
//! Gates acceptance of jointly-owed expense shares (and, for the CLI, whole
//! plan snapshots) before they are treated as persisted state. Errors are
//! field-tagged and collected rather than thrown; an empty list is the sole
//! acceptance signal. The settlement engine itself never re-validates.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::models::{ExpenseScope, ExpenseShare, PlanSnapshot, BASIS_POINTS_TOTAL};

/// A single field-tagged validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field the error refers to (e.g., "shares")
    pub field: String,
    /// Human-readable message, suitable for direct display
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the ownership shares of a jointly-owed expense
///
/// Rules:
/// - shares must be non-empty;
/// - every percentage must lie in 0-10000 basis points. An out-of-range
///   value is reported once, and the sum check is skipped for that call
///   (the sum is meaningless when an individual value is already invalid);
/// - otherwise the percentages must sum to exactly 10000.
///
/// Returns all collected errors; an empty vec means the shares are
/// acceptable. Callers must not persist a common expense whose shares fail
/// this check.
pub fn validate_shares(shares: &[ExpenseShare]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if shares.is_empty() {
        errors.push(ValidationError::new(
            "shares",
            "at least one share is required",
        ));
        return errors;
    }

    if shares.iter().any(|s| !s.is_in_range()) {
        errors.push(ValidationError::new(
            "shares",
            "share percentages must be between 0 and 10000 basis points",
        ));
        // Sum check is meaningless with an out-of-range value present
        return errors;
    }

    let total: u32 = shares.iter().map(|s| s.percentage).sum();
    if total != BASIS_POINTS_TOTAL {
        errors.push(ValidationError::new(
            "shares",
            "share percentages must sum to 10000 (basis points)",
        ));
    }

    errors
}

/// Validate a whole plan snapshot at the write path
///
/// Collects every problem in the document: duplicate roster members,
/// non-positive income and expense amounts, negative envelope allocations,
/// and malformed shares on each common expense. Field names carry the
/// offending record's position so errors can be traced back to the input.
pub fn validate_snapshot(snapshot: &PlanSnapshot) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for member in &snapshot.members {
        if !seen.insert(member.id) {
            errors.push(ValidationError::new(
                "members",
                format!("duplicate member {}", member.id),
            ));
        }
    }

    for (i, income) in snapshot.incomes.iter().enumerate() {
        if let Err(e) = income.validate() {
            errors.push(ValidationError::new(format!("incomes[{}].amount", i), e.to_string()));
        }
    }

    for (i, expense) in snapshot.expenses.iter().enumerate() {
        if let Err(e) = expense.validate() {
            errors.push(ValidationError::new(format!("expenses[{}].amount", i), e.to_string()));
        }
        if let ExpenseScope::Common { shares } = &expense.scope {
            for share_error in validate_shares(shares) {
                errors.push(ValidationError::new(
                    format!("expenses[{}].{}", i, share_error.field),
                    share_error.message,
                ));
            }
        }
    }

    for (i, envelope) in snapshot.envelopes.iter().enumerate() {
        if let Err(e) = envelope.validate() {
            errors.push(ValidationError::new(
                format!("envelopes[{}].allocated_amount", i),
                e.to_string(),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Envelope, Income, Member, Money, PlanPeriod, PlannedExpense, UserId};

    #[test]
    fn test_valid_shares_pass() {
        let shares = vec![
            ExpenseShare::new(UserId::new(), 6000),
            ExpenseShare::new(UserId::new(), 4000),
        ];
        assert!(validate_shares(&shares).is_empty());
    }

    #[test]
    fn test_single_full_share_passes() {
        let shares = vec![ExpenseShare::new(UserId::new(), 10_000)];
        assert!(validate_shares(&shares).is_empty());
    }

    #[test]
    fn test_empty_shares_rejected() {
        let errors = validate_shares(&[]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "shares");
        assert_eq!(errors[0].message, "at least one share is required");
    }

    #[test]
    fn test_out_of_range_reported_once_and_sum_skipped() {
        // Two out-of-range values, and a sum that is also wrong: exactly
        // one error comes back.
        let shares = vec![
            ExpenseShare::new(UserId::new(), 10_001),
            ExpenseShare::new(UserId::new(), 20_000),
        ];
        let errors = validate_shares(&shares);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("between 0 and 10000"));
    }

    #[test]
    fn test_wrong_sum_rejected() {
        let shares = vec![
            ExpenseShare::new(UserId::new(), 5000),
            ExpenseShare::new(UserId::new(), 4000),
        ];
        let errors = validate_shares(&shares);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "share percentages must sum to 10000 (basis points)"
        );
    }

    #[test]
    fn test_zero_percentage_share_is_allowed() {
        let shares = vec![
            ExpenseShare::new(UserId::new(), 0),
            ExpenseShare::new(UserId::new(), 10_000),
        ];
        assert!(validate_shares(&shares).is_empty());
    }

    #[test]
    fn test_snapshot_validation_collects_everything() {
        let a = UserId::new();
        let alice = Member::with_id(a, "Alice");
        let mut snapshot =
            PlanSnapshot::new("Home", PlanPeriod::new(2026, 8), vec![alice.clone(), alice]);
        snapshot.incomes.push(Income::new(a, Money::zero()));
        snapshot.expenses.push(PlannedExpense::common(
            vec![ExpenseShare::new(a, 5000)],
            Money::from_cents(1000),
            "Rent",
        ));
        snapshot
            .envelopes
            .push(Envelope::new("Groceries", Money::from_cents(-5)));

        let errors = validate_snapshot(&snapshot);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert!(fields.contains(&"members"));
        assert!(fields.contains(&"incomes[0].amount"));
        assert!(fields.contains(&"expenses[0].shares"));
        assert!(fields.contains(&"envelopes[0].allocated_amount"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_clean_snapshot_passes() {
        let a = UserId::new();
        let b = UserId::new();
        let roster = vec![Member::with_id(a, "Alice"), Member::with_id(b, "Bob")];
        let mut snapshot = PlanSnapshot::new("Home", PlanPeriod::new(2026, 8), roster);
        snapshot.incomes.push(Income::new(a, Money::from_cents(200_000)));
        snapshot.expenses.push(PlannedExpense::common(
            vec![ExpenseShare::new(a, 6000), ExpenseShare::new(b, 4000)],
            Money::from_cents(100_000),
            "Rent",
        ));

        assert!(validate_snapshot(&snapshot).is_empty());
    }
}
