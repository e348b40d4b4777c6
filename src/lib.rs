//! classifier-rs: spam classification service
//!
//! Loads a labeled email dataset, trains a TF-IDF + multinomial Naive Bayes
//! pipeline, reports held-out accuracy, and serves ad hoc classification over
//! a small REST API.
//!
//! # Pipeline
//!
//! Control flow is strictly linear: load, validate, featurize, split, train,
//! evaluate, predict, display. Models are rebuilt fresh on every training
//! run; nothing is persisted across runs.
//!
//! # Example
//!
//! ```no_run
//! use classifier_rs::dataset::{load_csv_path, MissingFieldPolicy};
//! use classifier_rs::model::{train, TrainingOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = load_csv_path("emails.csv", MissingFieldPolicy::TreatAsEmpty)?;
//!     let (model, report) = train(&records, TrainingOptions::default())?;
//!
//!     println!("accuracy: {:?}", report.accuracy);
//!     let (label, confidence) = model.predict_text("Win money Click now")?;
//!     println!("{} ({:.2}%)", label, confidence * 100.0);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`dataset`]: Loading, schema validation, feature building
//! - [`model`]: Vectorizer, classifier, training pipeline
//! - [`report`]: Prediction filtering
//! - [`notify`]: Result email delivery
//! - [`api`]: REST API surface

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod notify;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use dataset::{Label, PredictionResult, Record};
pub use error::{ClassifierError, Result};
pub use model::{TrainedModel, TrainingReport};
