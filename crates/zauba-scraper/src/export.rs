//! CSV output for scraped company records.

use std::fs::File;
use std::io;
use std::path::Path;

use zauba_core::CompanyRecord;

use crate::error::ExportError;

/// Writes `records` as CSV to `writer`, header row first.
///
/// Nothing is written when `records` is empty, not even the header.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if serialization or the underlying writer
/// fails.
pub fn write_records<W: io::Write>(writer: W, records: &[CompanyRecord]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes `records` to a CSV file at `path`, replacing any existing file.
///
/// Returns the number of rows written. When `records` is empty no file is
/// created and `Ok(0)` is returned.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created and
/// [`ExportError::Csv`] if writing a row fails.
pub fn write_csv(path: &Path, records: &[CompanyRecord]) -> Result<usize, ExportError> {
    if records.is_empty() {
        tracing::info!(path = %path.display(), "no records; skipping CSV output");
        return Ok(0);
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_records(file, records)?;

    tracing::info!(path = %path.display(), rows = records.len(), "wrote CSV");
    Ok(records.len())
}
