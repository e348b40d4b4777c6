//! Result filtering
//!
//! Partition a prediction set by predicted class, preserving original order.

use std::str::FromStr;

use crate::dataset::{Label, PredictionResult};
use crate::error::ClassifierError;

/// Requested class view over a prediction set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFilter {
    All,
    Spam,
    NotSpam,
}

impl FromStr for ClassFilter {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ClassFilter::All),
            "spam" => Ok(ClassFilter::Spam),
            "ham" | "not_spam" => Ok(ClassFilter::NotSpam),
            other => Err(ClassifierError::Prediction(format!(
                "unknown class filter: '{}' (expected all, spam, or ham)",
                other
            ))),
        }
    }
}

/// Return the subset of predictions matching the filter, in original order.
pub fn filter_predictions(
    predictions: &[PredictionResult],
    filter: ClassFilter,
) -> Vec<PredictionResult> {
    predictions
        .iter()
        .filter(|p| match filter {
            ClassFilter::All => true,
            ClassFilter::Spam => p.label == Label::Spam,
            ClassFilter::NotSpam => p.label == Label::Ham,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(id: &str, label: Label) -> PredictionResult {
        PredictionResult {
            record_id: id.to_string(),
            label,
            confidence: 0.9,
        }
    }

    fn sample() -> Vec<PredictionResult> {
        vec![
            prediction("1", Label::Spam),
            prediction("2", Label::Ham),
            prediction("3", Label::Spam),
            prediction("4", Label::Ham),
            prediction("5", Label::Spam),
        ]
    }

    #[test]
    fn test_filters_are_disjoint_and_union_to_all() {
        let predictions = sample();
        let spam = filter_predictions(&predictions, ClassFilter::Spam);
        let ham = filter_predictions(&predictions, ClassFilter::NotSpam);
        let all = filter_predictions(&predictions, ClassFilter::All);

        assert_eq!(spam.len() + ham.len(), all.len());
        for p in &spam {
            assert!(!ham.iter().any(|h| h.record_id == p.record_id));
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let spam = filter_predictions(&sample(), ClassFilter::Spam);
        let ids: Vec<&str> = spam.iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<ClassFilter>().unwrap(), ClassFilter::All);
        assert_eq!("Spam".parse::<ClassFilter>().unwrap(), ClassFilter::Spam);
        assert_eq!("ham".parse::<ClassFilter>().unwrap(), ClassFilter::NotSpam);
        assert!("junk".parse::<ClassFilter>().is_err());
    }
}
