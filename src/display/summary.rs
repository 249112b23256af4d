//! Settlement summary display formatting
//!
//! Renders a computed `PlanSummary` as a terminal table. This is the only
//! place cents are turned into display currency; the engine and export
//! layers deal in integers exclusively.

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{MemberSummary, Money, PlanSummary, UserId};

/// One rendered table row
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Personal")]
    personal: String,
    #[tabled(rename = "Common Share")]
    common: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Savings")]
    savings: String,
    #[tabled(rename = "Env. Spent")]
    envelope_spent: String,
}

fn fmt(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

fn member_label(user_id: UserId, names: &HashMap<UserId, String>) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| user_id.to_string())
}

fn row(member: &MemberSummary, names: &HashMap<UserId, String>, symbol: &str) -> SummaryRow {
    SummaryRow {
        member: member_label(member.user_id, names),
        income: fmt(member.total_income, symbol),
        personal: fmt(member.personal_expenses, symbol),
        common: fmt(member.common_expense_share, symbol),
        expenses: fmt(member.total_expenses, symbol),
        savings: fmt(member.savings, symbol),
        envelope_spent: fmt(member.envelope_spent, symbol),
    }
}

/// Format a settlement summary as a table plus aggregate footer
///
/// `names` maps member ids to display names; members without a name fall
/// back to their short id.
pub fn format_summary(
    summary: &PlanSummary,
    names: &HashMap<UserId, String>,
    currency_symbol: &str,
) -> String {
    if summary.per_user.is_empty() {
        return "No members in plan.".to_string();
    }

    let rows: Vec<SummaryRow> = summary
        .per_user
        .iter()
        .map(|m| row(m, names, currency_symbol))
        .collect();

    let table = Table::new(rows).with(Style::sharp()).to_string();

    // Plan-level envelope allocation is identical on every row; show it once
    let envelope_allocated = summary.per_user[0].envelope_allocated;
    let envelope_spent: Money = summary.per_user.iter().map(|m| m.envelope_spent).sum();

    let mut output = table;
    output.push('\n');
    output.push_str(&format!(
        "Totals: income {}, expenses {}, savings {}\n",
        fmt(summary.total_income, currency_symbol),
        fmt(summary.total_expenses, currency_symbol),
        fmt(summary.total_savings, currency_symbol),
    ));
    output.push_str(&format!(
        "Envelopes: {} spent of {} allocated\n",
        fmt(envelope_spent, currency_symbol),
        fmt(envelope_allocated, currency_symbol),
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Income;
    use crate::services::compute_plan_summary;

    #[test]
    fn test_empty_plan_message() {
        let summary = compute_plan_summary(&[], &[], &[], &[]);
        let out = format_summary(&summary, &HashMap::new(), "$");
        assert_eq!(out, "No members in plan.");
    }

    #[test]
    fn test_named_member_and_totals() {
        let a = UserId::new();
        let incomes = vec![Income::new(a, Money::from_cents(300_000))];
        let summary = compute_plan_summary(&[a], &incomes, &[], &[]);

        let mut names = HashMap::new();
        names.insert(a, "Alice".to_string());

        let out = format_summary(&summary, &names, "$");
        assert!(out.contains("Alice"));
        assert!(out.contains("$3000.00"));
        assert!(out.contains("Totals: income $3000.00"));
    }

    #[test]
    fn test_unnamed_member_falls_back_to_id() {
        let a = UserId::new();
        let summary = compute_plan_summary(&[a], &[], &[], &[]);
        let out = format_summary(&summary, &HashMap::new(), "$");
        assert!(out.contains("usr-"));
    }
}
