//! Document listing loading.
//!
//! Listings are CSV with a header row:
//! `title,snippet,department,date,language,origin`. Origin accepts the
//! labels understood by [`DocumentOrigin`]'s parser, including the legacy
//! mailbox labels. Dates must be ISO calendar dates.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use dochub_model::{DocumentOrigin, DocumentRecord};

use crate::error::IngestError;

#[derive(Debug, Deserialize)]
struct ListingRow {
    title: String,
    snippet: String,
    department: String,
    date: String,
    language: String,
    origin: String,
}

/// Load a document listing from a CSV file.
pub fn load_documents(path: &Path) -> Result<Vec<DocumentRecord>, IngestError> {
    let file = std::fs::File::open(path).map_err(|error| IngestError::io(path, error))?;
    let records = read_documents(file)?;
    debug!(path = %path.display(), records = records.len(), "loaded document listing");
    Ok(records)
}

/// Read a document listing from any CSV reader.
pub fn read_documents<R: Read>(reader: R) -> Result<Vec<DocumentRecord>, IngestError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<ListingRow>().enumerate() {
        // 1-based data row number, header excluded.
        let row_number = index + 1;
        let row = row?;
        if NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").is_err() {
            return Err(IngestError::InvalidDate {
                row: row_number,
                value: row.date,
            });
        }
        let origin =
            DocumentOrigin::from_str(&row.origin).map_err(|message| IngestError::InvalidOrigin {
                row: row_number,
                message,
            })?;
        records.push(DocumentRecord {
            title: row.title,
            snippet: row.snippet,
            department: row.department,
            date: row.date,
            language: row.language,
            origin,
        });
    }
    Ok(records)
}
