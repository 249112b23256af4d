//! Display formatting for terminal output
//!
//! Provides utilities for formatting settlement results and validation
//! feedback for terminal display. Currency formatting (cents to display
//! units) happens here and nowhere else.

pub mod summary;
pub mod validation;

pub use summary::format_summary;
pub use validation::format_validation_errors;
