//! Dataset module
//!
//! Loading, schema validation, and feature building for labeled email records.

pub mod features;
pub mod loader;
pub mod types;

pub use loader::{load_csv_path, load_csv_reader, resolve_rows};
pub use types::*;
