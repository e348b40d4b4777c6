//! Dataset loading and schema validation
//!
//! Accepts tabular CSV input with a header row. Column order is immaterial;
//! `subject`, `body`, and `label` are required, `email_id` is optional.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::features::resolve_field;
use super::types::{Label, MissingFieldPolicy, RawRow, Record};
use crate::error::{ClassifierError, Result};

const REQUIRED_COLUMNS: [&str; 3] = ["subject", "body", "label"];

/// Validate that every required column is present in the header row.
/// Fails with a schema error before any row is processed.
fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(ClassifierError::Schema(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

/// Turn raw rows into records, applying the missing-field policy and
/// rejecting unknown label values. Row numbers are 1-based and used as the
/// record id when no email_id is given.
pub fn resolve_rows(rows: Vec<RawRow>, policy: MissingFieldPolicy) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        let row_num = i + 1;
        let label: Label = row.label.parse()?;
        let subject = resolve_field(row.subject, "subject", row_num, policy)?;
        let body = resolve_field(row.body, "body", row_num, policy)?;
        let record_id = row
            .email_id
            .unwrap_or_else(|| row_num.to_string());

        records.push(Record {
            record_id,
            subject,
            body,
            label,
        });
    }

    Ok(records)
}

/// Load a labeled dataset from any CSV source.
pub fn load_csv_reader<R: Read>(reader: R, policy: MissingFieldPolicy) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    validate_headers(csv_reader.headers()?)?;

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<RawRow>() {
        rows.push(row?);
    }

    debug!("loaded {} raw rows", rows.len());
    resolve_rows(rows, policy)
}

/// Load a labeled dataset from a CSV file on disk.
pub fn load_csv_path<P: AsRef<Path>>(path: P, policy: MissingFieldPolicy) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path)?;
    load_csv_reader(file, policy)
}
