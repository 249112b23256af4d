//! splitbook - shared-household budget settlement
//!
//! This library provides the core functionality for splitbook, a tool that
//! settles one household budgeting period: who earned what, who owes which
//! slice of the jointly-owed expenses, and what each member saves. Amounts
//! are integer cents end to end; currency formatting only ever happens at
//! the display boundary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (snapshots, incomes, expenses, envelopes)
//! - `services`: The share validator and the settlement engine
//! - `display`: Terminal formatting
//! - `export`: JSON/CSV/YAML settlement export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use splitbook::models::{Income, Money, UserId};
//! use splitbook::services::compute_plan_summary;
//!
//! let alice = UserId::new();
//! let incomes = vec![Income::new(alice, Money::from_cents(300_000))];
//! let summary = compute_plan_summary(&[alice], &incomes, &[], &[]);
//! assert_eq!(summary.total_income.cents(), 300_000);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{SplitbookError, SplitbookResult};
