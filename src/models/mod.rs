//! Core data models for splitbook
//!
//! This module contains all the data structures that represent the shared
//! budgeting domain: plan snapshots, incomes, planned expenses and their
//! ownership shares, envelopes, and the derived settlement summary.

pub mod envelope;
pub mod expense;
pub mod ids;
pub mod income;
pub mod member;
pub mod money;
pub mod period;
pub mod plan;
pub mod share;
pub mod summary;

pub use envelope::{Envelope, EnvelopeEntry};
pub use expense::{ExpenseScope, PlannedExpense};
pub use ids::{EntryId, EnvelopeId, ExpenseId, IncomeId, PlanId, UserId};
pub use income::Income;
pub use member::Member;
pub use money::{Money, BASIS_POINTS_TOTAL};
pub use period::PlanPeriod;
pub use plan::PlanSnapshot;
pub use share::ExpenseShare;
pub use summary::{MemberSummary, PlanSummary};
