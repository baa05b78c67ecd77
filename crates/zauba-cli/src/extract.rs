//! Offline extraction from a saved detail page.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use zauba_core::CompanyRecord;

/// Run the detail extractor on `file` and print every field.
///
/// `url` is recorded as the record's source; it defaults to the file path.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub(crate) fn run_extract(file: &Path, url: Option<&str>) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let source = url.map_or_else(|| file.display().to_string(), str::to_owned);

    let record = zauba_scraper::extract_record(&html, &source);
    tracing::debug!(
        file = %file.display(),
        populated = record.populated_count(),
        "extracted record"
    );

    print!("{}", render_record(&record));
    Ok(())
}

/// One `Field: value` line per column, in column order.
pub(crate) fn render_record(record: &CompanyRecord) -> String {
    let mut out = String::new();
    for (field, value) in record.iter() {
        let _ = writeln!(out, "{field}: {value}");
    }
    out
}
