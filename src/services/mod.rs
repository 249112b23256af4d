//! Service layer for splitbook
//!
//! The service layer holds the two pure computations at the heart of the
//! application: write-path share/snapshot validation and the read-path
//! settlement engine. Both are free functions over explicit inputs; there
//! is no hidden state.

pub mod settlement;
pub mod validation;

pub use settlement::{compute_plan_summary, settle};
pub use validation::{validate_shares, validate_snapshot, ValidationError};
