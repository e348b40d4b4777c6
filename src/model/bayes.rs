//! Multinomial Naive Bayes classifier
//!
//! Fit on sparse TF-IDF vectors with Laplace smoothing; scoring runs in log
//! space and reports a posterior confidence alongside the predicted label.

use crate::dataset::Label;
use crate::error::{ClassifierError, Result};
use crate::model::vectorizer::SparseVector;

const NUM_CLASSES: usize = 2;

/// A fitted multinomial Naive Bayes model
pub struct MultinomialNb {
    class_log_prior: [f64; NUM_CLASSES],
    /// Per-class log feature probabilities, indexed by vocabulary index
    feature_log_prob: Vec<[f64; NUM_CLASSES]>,
}

impl MultinomialNb {
    /// Fit from training vectors and their labels. The caller guarantees the
    /// training set is non-empty and contains both classes.
    pub fn fit(vectors: &[SparseVector], labels: &[Label], vocabulary_size: usize) -> Result<Self> {
        if vectors.is_empty() || vectors.len() != labels.len() {
            return Err(ClassifierError::Training(
                "classifier requires a non-empty training set".to_string(),
            ));
        }

        let mut class_counts = [0usize; NUM_CLASSES];
        let mut feature_counts = vec![[0.0f64; NUM_CLASSES]; vocabulary_size];
        let mut class_totals = [0.0f64; NUM_CLASSES];

        for (vector, label) in vectors.iter().zip(labels) {
            let class = label.index();
            class_counts[class] += 1;
            for &(index, weight) in vector {
                feature_counts[index][class] += weight;
                class_totals[class] += weight;
            }
        }

        if class_counts.iter().any(|&c| c == 0) {
            return Err(ClassifierError::Training(
                "training set must contain both spam and ham examples".to_string(),
            ));
        }

        let total = vectors.len() as f64;
        let mut class_log_prior = [0.0; NUM_CLASSES];
        for class in 0..NUM_CLASSES {
            class_log_prior[class] = (class_counts[class] as f64 / total).ln();
        }

        // Laplace smoothing over the vocabulary
        let mut feature_log_prob = vec![[0.0; NUM_CLASSES]; vocabulary_size];
        for class in 0..NUM_CLASSES {
            let denominator = class_totals[class] + vocabulary_size as f64;
            for index in 0..vocabulary_size {
                feature_log_prob[index][class] =
                    ((feature_counts[index][class] + 1.0) / denominator).ln();
            }
        }

        Ok(Self {
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Predict the label for a vector, with the posterior probability of the
    /// winning class. An empty vector falls back to the class priors, which
    /// makes the majority class the deterministic answer.
    pub fn predict(&self, vector: &SparseVector) -> (Label, f64) {
        let mut log_joint = self.class_log_prior;

        for &(index, weight) in vector {
            for class in 0..NUM_CLASSES {
                log_joint[class] += weight * self.feature_log_prob[index][class];
            }
        }

        let (best_class, best_score) = log_joint
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(class, &score)| (class, score))
            .unwrap_or((0, 0.0));

        // Posterior via log-sum-exp normalization
        let max = log_joint.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let denom = max + log_joint.iter().map(|&s| (s - max).exp()).sum::<f64>().ln();
        let confidence = (best_score - denom).exp();

        (Label::from_index(best_class), confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(usize, f64)]) -> SparseVector {
        pairs.to_vec()
    }

    #[test]
    fn test_fit_rejects_empty_training_set() {
        let result = MultinomialNb::fit(&[], &[], 4);
        assert!(result.is_err());
    }

    #[test]
    fn test_fit_rejects_single_class() {
        let vectors = vec![vector(&[(0, 1.0)]), vector(&[(1, 1.0)])];
        let labels = vec![Label::Spam, Label::Spam];
        assert!(MultinomialNb::fit(&vectors, &labels, 2).is_err());
    }

    #[test]
    fn test_predicts_separable_classes() {
        // Feature 0 only in spam, feature 1 only in ham
        let vectors = vec![
            vector(&[(0, 2.0)]),
            vector(&[(0, 1.0)]),
            vector(&[(1, 2.0)]),
            vector(&[(1, 1.0)]),
        ];
        let labels = vec![Label::Spam, Label::Spam, Label::Ham, Label::Ham];
        let model = MultinomialNb::fit(&vectors, &labels, 2).unwrap();

        let (label, confidence) = model.predict(&vector(&[(0, 1.5)]));
        assert_eq!(label, Label::Spam);
        assert!(confidence > 0.5 && confidence <= 1.0);

        let (label, _) = model.predict(&vector(&[(1, 1.5)]));
        assert_eq!(label, Label::Ham);
    }

    #[test]
    fn test_empty_vector_falls_back_to_majority_prior() {
        let vectors = vec![
            vector(&[(0, 1.0)]),
            vector(&[(0, 1.0)]),
            vector(&[(0, 1.0)]),
            vector(&[(1, 1.0)]),
        ];
        let labels = vec![Label::Spam, Label::Spam, Label::Spam, Label::Ham];
        let model = MultinomialNb::fit(&vectors, &labels, 2).unwrap();

        let (label, confidence) = model.predict(&vector(&[]));
        assert_eq!(label, Label::Spam);
        assert!((confidence - 0.75).abs() < 1e-9);
    }
}
