//! Dataset types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassifierError;

/// Binary class label for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    /// Stable index used by the classifier's internal tables
    pub fn index(self) -> usize {
        match self {
            Label::Spam => 0,
            Label::Ham => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Label::Spam,
            _ => Label::Ham,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ClassifierError;

    /// Only the exact strings "spam" and "ham" are accepted; anything else
    /// is rejected rather than guessed at.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spam" => Ok(Label::Spam),
            "ham" => Ok(Label::Ham),
            other => Err(ClassifierError::Schema(format!(
                "unknown label value: '{}' (expected 'spam' or 'ham')",
                other
            ))),
        }
    }
}

/// A single labeled record after loading and field resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Identifier from the optional email_id column, or the row number
    pub record_id: String,
    pub subject: String,
    pub body: String,
    pub label: Label,
}

/// A raw row as it appears in the input, before field resolution.
/// Empty cells surface as `None` instead of a string sentinel.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub email_id: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub label: String,
}

/// Policy for rows with a missing subject or body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Fail loading with a schema error
    Reject,
    /// Substitute the empty string
    TreatAsEmpty,
}

/// Predicted class for one record, recomputed whenever the model changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub record_id: String,
    pub label: Label,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!("spam".parse::<Label>().unwrap(), Label::Spam);
        assert_eq!("ham".parse::<Label>().unwrap(), Label::Ham);
    }

    #[test]
    fn test_label_rejects_unknown_values() {
        assert!("Spam".parse::<Label>().is_err());
        assert!("not spam".parse::<Label>().is_err());
        assert!("".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_roundtrip_index() {
        assert_eq!(Label::from_index(Label::Spam.index()), Label::Spam);
        assert_eq!(Label::from_index(Label::Ham.index()), Label::Ham);
    }
}
