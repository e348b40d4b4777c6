//! Classification model
//!
//! TF-IDF vectorization and multinomial Naive Bayes, wired together by a
//! linear training pipeline.

pub mod bayes;
pub mod pipeline;
pub mod vectorizer;

pub use bayes::MultinomialNb;
pub use pipeline::{train, TrainedModel, TrainingOptions, TrainingReport};
pub use vectorizer::{SparseVector, TfIdfVectorizer, Tokenizer};
