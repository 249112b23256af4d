//! Validation feedback formatting

use crate::services::ValidationError;

/// Format collected validation errors as a bulleted list
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "Snapshot is valid.".to_string();
    }

    let mut output = format!("{} validation error(s):\n", errors.len());
    for error in errors {
        output.push_str(&format!("  - {}: {}\n", error.field, error.message));
    }
    output
}
