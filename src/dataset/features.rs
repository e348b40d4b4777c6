//! Feature building: turn a record's fields into the single text the
//! vectorizer consumes.

use crate::dataset::types::MissingFieldPolicy;
use crate::error::{ClassifierError, Result};

/// Concatenate subject and body with a single space, no normalization.
pub fn build_text(subject: &str, body: &str) -> String {
    format!("{} {}", subject, body)
}

/// Resolve an optional field according to the configured policy.
pub fn resolve_field(
    value: Option<String>,
    field: &str,
    row: usize,
    policy: MissingFieldPolicy,
) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => match policy {
            MissingFieldPolicy::TreatAsEmpty => Ok(String::new()),
            MissingFieldPolicy::Reject => Err(ClassifierError::Schema(format!(
                "row {} is missing required field '{}'",
                row, field
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_text_is_plain_concatenation() {
        assert_eq!(build_text("Win money", "Click now"), "Win money Click now");
        assert_eq!(build_text("", ""), " ");
        assert_eq!(build_text("a", ""), "a ");
    }

    #[test]
    fn test_resolve_field_treat_as_empty() {
        let v = resolve_field(None, "subject", 3, MissingFieldPolicy::TreatAsEmpty).unwrap();
        assert_eq!(v, "");
    }

    #[test]
    fn test_resolve_field_reject() {
        let err = resolve_field(None, "body", 7, MissingFieldPolicy::Reject).unwrap_err();
        assert!(err.to_string().contains("row 7"));
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn test_resolve_field_passes_through_present_values() {
        let v = resolve_field(Some("hello".into()), "subject", 0, MissingFieldPolicy::Reject);
        assert_eq!(v.unwrap(), "hello");
    }
}
