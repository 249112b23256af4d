//! CSV export functionality
//!
//! Exports the per-member settlement rows to CSV for spreadsheet use.
//! Amounts are written as integer cents; spreadsheets can divide by 100.

use std::collections::HashMap;
use std::io::Write;

use crate::error::SplitbookResult;
use crate::models::{PlanSummary, UserId};

/// Write per-member settlement rows as CSV
///
/// Columns: member, income, personal, common_share, expenses, savings,
/// envelope_spent, envelope_allocated. All amounts are in cents.
pub fn export_summary_csv<W: Write>(
    summary: &PlanSummary,
    names: &HashMap<UserId, String>,
    writer: W,
) -> SplitbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "member",
        "income",
        "personal",
        "common_share",
        "expenses",
        "savings",
        "envelope_spent",
        "envelope_allocated",
    ])?;

    for member in &summary.per_user {
        let name = names
            .get(&member.user_id)
            .cloned()
            .unwrap_or_else(|| member.user_id.to_string());

        csv_writer.write_record([
            name,
            member.total_income.cents().to_string(),
            member.personal_expenses.cents().to_string(),
            member.common_expense_share.cents().to_string(),
            member.total_expenses.cents().to_string(),
            member.savings.cents().to_string(),
            member.envelope_spent.cents().to_string(),
            member.envelope_allocated.cents().to_string(),
        ])?;
    }

    csv_writer.flush().map_err(crate::error::SplitbookError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Income, Money};
    use crate::services::compute_plan_summary;

    #[test]
    fn test_csv_rows() {
        let a = UserId::new();
        let incomes = vec![Income::new(a, Money::from_cents(200_000))];
        let summary = compute_plan_summary(&[a], &incomes, &[], &[]);

        let mut names = HashMap::new();
        names.insert(a, "Alice".to_string());

        let mut buf = Vec::new();
        export_summary_csv(&summary, &names, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "member,income,personal,common_share,expenses,savings,envelope_spent,envelope_allocated"
        );
        assert_eq!(lines.next().unwrap(), "Alice,200000,0,0,0,200000,0,0");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_unknown_member_uses_short_id() {
        let a = UserId::new();
        let summary = compute_plan_summary(&[a], &[], &[], &[]);

        let mut buf = Vec::new();
        export_summary_csv(&summary, &HashMap::new(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("usr-"));
    }
}
