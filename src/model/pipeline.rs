//! Training pipeline
//!
//! Linear flow: shuffle with a fixed seed, split, fit vectorizer and
//! classifier on the training partition only, score accuracy on the held-out
//! partition. The fitted model is immutable and never persisted.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::dataset::features::build_text;
use crate::dataset::{Label, PredictionResult, Record};
use crate::error::{ClassifierError, Result};
use crate::model::bayes::MultinomialNb;
use crate::model::vectorizer::TfIdfVectorizer;

/// Options controlling the train/held-out split
#[derive(Debug, Clone, Copy)]
pub struct TrainingOptions {
    pub split_ratio: f64,
    pub seed: u64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            split_ratio: 0.8,
            seed: 42,
        }
    }
}

/// Summary of one training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub total_records: usize,
    pub training_records: usize,
    pub heldout_records: usize,
    pub spam_records: usize,
    pub ham_records: usize,
    /// Held-out accuracy in [0,1]; absent when the held-out split is empty
    pub accuracy: Option<f64>,
    pub vocabulary_size: usize,
}

/// A fitted vectorizer + classifier pair, immutable once built
pub struct TrainedModel {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl std::fmt::Debug for TrainedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainedModel").finish_non_exhaustive()
    }
}

impl TrainedModel {
    /// Classify arbitrary text. Empty or whitespace-only input is rejected.
    pub fn predict_text(&self, text: &str) -> Result<(Label, f64)> {
        if text.trim().is_empty() {
            return Err(ClassifierError::Prediction(
                "cannot classify empty text".to_string(),
            ));
        }

        let vector = self.vectorizer.transform(text);
        Ok(self.classifier.predict(&vector))
    }

    /// Classify one record's subject/body pair.
    pub fn predict_record(&self, record: &Record) -> Result<PredictionResult> {
        let (label, confidence) = self.predict_text(&build_text(&record.subject, &record.body))?;
        Ok(PredictionResult {
            record_id: record.record_id.clone(),
            label,
            confidence,
        })
    }

    /// Classify every record, preserving input order. Records whose text is
    /// empty keep their place with a prior-only prediction rather than
    /// aborting the whole pass.
    pub fn predict_records(&self, records: &[Record]) -> Vec<PredictionResult> {
        records
            .iter()
            .map(|record| {
                let text = build_text(&record.subject, &record.body);
                let vector = self.vectorizer.transform(&text);
                let (label, confidence) = self.classifier.predict(&vector);
                PredictionResult {
                    record_id: record.record_id.clone(),
                    label,
                    confidence,
                }
            })
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

/// Train a model on the given records and report held-out accuracy.
pub fn train(records: &[Record], options: TrainingOptions) -> Result<(TrainedModel, TrainingReport)> {
    if !(0.0..=1.0).contains(&options.split_ratio) {
        return Err(ClassifierError::Training(format!(
            "split ratio must be in [0,1], got {}",
            options.split_ratio
        )));
    }

    let mut indices: Vec<usize> = (0..records.len()).collect();
    let mut rng = StdRng::seed_from_u64(options.seed);
    indices.shuffle(&mut rng);

    let train_size = (records.len() as f64 * options.split_ratio) as usize;
    let (train_indices, heldout_indices) = indices.split_at(train_size.min(indices.len()));

    if train_indices.is_empty() {
        return Err(ClassifierError::Training(
            "training split is empty".to_string(),
        ));
    }

    let train_labels: Vec<Label> = train_indices.iter().map(|&i| records[i].label).collect();
    if train_labels.iter().all(|&l| l == train_labels[0]) {
        return Err(ClassifierError::Training(
            "training split contains a single class; need both spam and ham".to_string(),
        ));
    }

    let train_texts: Vec<String> = train_indices
        .iter()
        .map(|&i| build_text(&records[i].subject, &records[i].body))
        .collect();

    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&train_texts);

    let train_vectors: Vec<_> = train_texts
        .iter()
        .map(|text| vectorizer.transform(text))
        .collect();

    let classifier = MultinomialNb::fit(&train_vectors, &train_labels, vectorizer.vocabulary_size())?;

    let model = TrainedModel {
        vectorizer,
        classifier,
    };

    // Held-out accuracy
    let accuracy = if heldout_indices.is_empty() {
        None
    } else {
        let correct = heldout_indices
            .iter()
            .filter(|&&i| {
                let text = build_text(&records[i].subject, &records[i].body);
                let vector = model.vectorizer.transform(&text);
                model.classifier.predict(&vector).0 == records[i].label
            })
            .count();
        Some(correct as f64 / heldout_indices.len() as f64)
    };

    let spam_records = records.iter().filter(|r| r.label == Label::Spam).count();
    let report = TrainingReport {
        total_records: records.len(),
        training_records: train_indices.len(),
        heldout_records: heldout_indices.len(),
        spam_records,
        ham_records: records.len() - spam_records,
        accuracy,
        vocabulary_size: model.vocabulary_size(),
    };

    info!(
        total = report.total_records,
        training = report.training_records,
        heldout = report.heldout_records,
        accuracy = ?report.accuracy,
        "training complete"
    );

    Ok((model, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, subject: &str, body: &str, label: Label) -> Record {
        Record {
            record_id: id.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            label,
        }
    }

    fn sample_dataset(copies: usize) -> Vec<Record> {
        let mut records = Vec::new();
        for i in 0..copies {
            records.push(record(
                &format!("s{}", i),
                "Win money",
                "Click now",
                Label::Spam,
            ));
            records.push(record(
                &format!("h{}", i),
                "Meeting",
                "See you at 3pm",
                Label::Ham,
            ));
        }
        records
    }

    #[test]
    fn test_split_is_deterministic_for_fixed_seed() {
        let records = sample_dataset(25);
        let options = TrainingOptions::default();

        let (_, report_a) = train(&records, options).unwrap();
        let (_, report_b) = train(&records, options).unwrap();
        assert_eq!(report_a.accuracy, report_b.accuracy);
        assert_eq!(report_a.training_records, 40);
        assert_eq!(report_a.heldout_records, 10);
    }

    #[test]
    fn test_empty_dataset_fails() {
        let err = train(&[], TrainingOptions::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::Training(_)));
    }

    #[test]
    fn test_single_class_fails() {
        let records: Vec<Record> = (0..10)
            .map(|i| record(&i.to_string(), "Win money", "Click now", Label::Spam))
            .collect();
        let err = train(&records, TrainingOptions::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::Training(_)));
    }

    #[test]
    fn test_full_ratio_trains_without_heldout() {
        let records = sample_dataset(5);
        let options = TrainingOptions {
            split_ratio: 1.0,
            seed: 42,
        };
        let (_, report) = train(&records, options).unwrap();
        assert_eq!(report.heldout_records, 0);
        assert!(report.accuracy.is_none());
    }

    #[test]
    fn test_predict_empty_text_is_rejected() {
        let records = sample_dataset(10);
        let (model, _) = train(&records, TrainingOptions::default()).unwrap();
        let err = model.predict_text("   ").unwrap_err();
        assert!(matches!(err, ClassifierError::Prediction(_)));
    }
}
