//! Scrape command handler for the CLI.
//!
//! Builds the HTTP client and politeness delay from config, runs the
//! pipeline, writes the CSV and prints a short sample of what was found.
//! Individual page failures never abort the run; only client construction
//! and CSV output errors are propagated.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use zauba_core::{AppConfig, CompanyRecord, Field};
use zauba_scraper::{PoliteDelay, ScrapeTarget, TracingObserver, ZaubaClient};

/// Rows shown in the post-run sample table.
const SAMPLE_ROWS: usize = 5;

/// Scrape the configured listing page and write the results to CSV.
///
/// `max_companies` and `output` override the values from config.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or the CSV
/// file cannot be written.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    max_companies: Option<usize>,
    output: Option<&Path>,
    dump_listing: Option<&Path>,
) -> anyhow::Result<()> {
    let client = ZaubaClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;
    let delay = PoliteDelay::from_millis(config.delay_min_ms, config.delay_max_ms);
    let target = ScrapeTarget {
        listing_url: config.listing_url.clone(),
        base_url: config.base_url.clone(),
        max_companies: max_companies.unwrap_or(config.max_companies),
        dump_listing_to: dump_listing.map(Path::to_path_buf),
    };
    let output = output.unwrap_or(config.output_path.as_path());

    tracing::info!(
        listing_url = %target.listing_url,
        max_companies = target.max_companies,
        "starting scrape"
    );

    let records =
        zauba_scraper::scrape_recent_companies(&client, &delay, &target, &mut TracingObserver)
            .await;

    zauba_scraper::write_csv(output, &records)
        .with_context(|| format!("failed to write {}", output.display()))?;

    print!("{}", render_summary(&records, output));
    Ok(())
}

/// Human-readable run summary: a sample table of the first rows plus totals.
pub(crate) fn render_summary(records: &[CompanyRecord], output: &Path) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("No companies were scraped successfully\n");
        return out;
    }

    let _ = writeln!(out, "Saved {} companies to {}", records.len(), output.display());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<40} {:<22} {:<32} INCORPORATED",
        "NAME", "CIN", "EMAIL"
    );
    for record in records.iter().take(SAMPLE_ROWS) {
        let _ = writeln!(
            out,
            "{:<40} {:<22} {:<32} {}",
            clip(record.get(Field::CompanyName), 40),
            dash_if_empty(record.get(Field::RegistrationId)),
            clip(dash_if_empty(record.get(Field::Email)), 32),
            dash_if_empty(record.get(Field::DateOfIncorporation)),
        );
    }
    if records.len() > SAMPLE_ROWS {
        let _ = writeln!(out, "... and {} more", records.len() - SAMPLE_ROWS);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total companies scraped: {}", records.len());
    out
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

/// At most `max` characters of `value`.
fn clip(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
