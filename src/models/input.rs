//! Presence and shape checks shared by the three creation inputs.

use crate::errors::ValidationErrors;

/// Trimmed value of a required text field; records a violation when the
/// field is missing or blank.
pub(crate) fn required(
    errs: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match optional(value) {
        Some(v) => Some(v),
        None => {
            errs.push(field, "is required");
            None
        }
    }
}

/// Trimmed value of an optional text field; blank counts as absent.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Minimal address shape: exactly one `@` with text on both sides.
pub(crate) fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
