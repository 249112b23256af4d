//! Settlement engine
//!
//! Computes the per-member and aggregate financial summary for one plan
//! snapshot: income, personal expense burden, rounded slices of common
//! expenses, savings, and envelope figures.
//!
//! The engine is a pure read path. It takes the snapshot's collections as
//! immutable inputs, performs no validation (that happened at the write
//! path), never fails, and degrades to zeros on missing or non-matching
//! data. Calling it twice with the same inputs yields identical output, so
//! it is safe to invoke concurrently without synchronization.

use log::trace;

use crate::models::{
    Envelope, ExpenseScope, Income, MemberSummary, Money, PlanSnapshot, PlanSummary,
    PlannedExpense, UserId,
};

/// Compute the settlement summary for one plan
///
/// `member_ids` is authoritative: `per_user` contains exactly one row per
/// roster member, in roster order, even for members with no records.
/// Conversely, incomes, expenses, and envelope entries referencing a user
/// absent from the roster contribute nothing to the output.
///
/// A member's slice of a common expense is `amount * percentage / 10000`,
/// rounded to the nearest cent (ties away from zero) independently per
/// member per expense. The rounded slices of one expense may not sum back
/// to its exact amount; that drift is accepted, not reconciled. The
/// aggregate totals are the sums of the per-member rows, so aggregate and
/// rows always agree by construction.
pub fn compute_plan_summary(
    member_ids: &[UserId],
    incomes: &[Income],
    expenses: &[PlannedExpense],
    envelopes: &[Envelope],
) -> PlanSummary {
    // Plan-level figure, repeated unfiltered on every row
    let envelope_allocated: Money = envelopes.iter().map(|e| e.allocated_amount).sum();

    let per_user: Vec<MemberSummary> = member_ids
        .iter()
        .map(|&member| {
            let total_income: Money = incomes
                .iter()
                .filter(|i| i.user_id == member)
                .map(|i| i.amount)
                .sum();

            let personal_expenses: Money = expenses
                .iter()
                .filter(|e| matches!(e.scope, ExpenseScope::Personal { user_id } if user_id == member))
                .map(|e| e.amount)
                .sum();

            let common_expense_share: Money = expenses
                .iter()
                .filter_map(|e| match &e.scope {
                    ExpenseScope::Common { shares } => shares
                        .iter()
                        .find(|s| s.user_id == member)
                        .map(|s| e.amount.apportion_bp(s.percentage)),
                    ExpenseScope::Personal { .. } => None,
                })
                .sum();

            let envelope_spent: Money = envelopes
                .iter()
                .flat_map(|e| e.entries.iter())
                .filter(|entry| entry.user_id == member)
                .map(|entry| entry.amount)
                .sum();

            let total_expenses = personal_expenses + common_expense_share;

            MemberSummary {
                user_id: member,
                total_income,
                personal_expenses,
                common_expense_share,
                total_expenses,
                savings: total_income - total_expenses,
                envelope_spent,
                envelope_allocated,
            }
        })
        .collect();

    let summary = PlanSummary {
        total_income: per_user.iter().map(|m| m.total_income).sum(),
        total_expenses: per_user.iter().map(|m| m.total_expenses).sum(),
        total_savings: per_user.iter().map(|m| m.savings).sum(),
        per_user,
    };

    trace!(
        "settled plan: {} members, {} incomes, {} expenses, {} envelopes",
        member_ids.len(),
        incomes.len(),
        expenses.len(),
        envelopes.len()
    );

    summary
}

/// Convenience wrapper: settle a whole snapshot
pub fn settle(snapshot: &PlanSnapshot) -> PlanSummary {
    compute_plan_summary(
        &snapshot.member_ids(),
        &snapshot.incomes,
        &snapshot.expenses,
        &snapshot.envelopes,
    )
}
