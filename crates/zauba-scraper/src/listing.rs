//! Candidate extraction from a company listing page.
//!
//! Two passes feed one ordered list: every anchor on the page, then the first
//! anchor of every table row. The table pass re-finds many anchors from the
//! first pass; duplicates are dropped by URL with the first sighting kept.

use std::collections::HashSet;
use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use zauba_core::CompanyCandidate;

use crate::error::ScraperError;
use crate::parse_helpers::{contains_any, resolve_href, trimmed_text};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));
static FIRST_ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));
static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));

/// Keywords that mark anchor text as a company name anywhere on the page.
const LINK_KEYWORDS: &[&str] = &["private", "limited", "ltd", "pvt", "company", "corp"];

/// Narrower keyword set for anchors found inside table rows.
const TABLE_KEYWORDS: &[&str] = &["private", "limited", "ltd", "pvt"];

/// Anchor text must be longer than this many characters (page-wide pass).
const MIN_LINK_TEXT_CHARS: usize = 5;

/// Anchor text must be longer than this many characters (table pass).
const MIN_TABLE_TEXT_CHARS: usize = 3;

/// Extracts deduplicated company candidates from listing-page HTML.
///
/// Relative links resolve against `base_url`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `base_url` cannot be parsed.
pub fn extract_candidates(
    html: &str,
    base_url: &str,
) -> Result<Vec<CompanyCandidate>, ScraperError> {
    let base = Url::parse(base_url).map_err(|e| ScraperError::InvalidUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    let document = Html::parse_document(html);

    if let Some(title) = document.select(&TITLE_SELECTOR).next() {
        tracing::debug!(title = %trimmed_text(title), "parsed listing page");
    }

    let mut found = link_candidates(&document, &base);
    found.extend(table_candidates(&document, &base));

    let candidates = dedup_by_url(found);
    tracing::debug!(unique = candidates.len(), "listing candidates extracted");
    Ok(candidates)
}

/// Page-wide pass over every anchor with an `href`.
fn link_candidates(document: &Html, base: &Url) -> Vec<CompanyCandidate> {
    let anchors: Vec<ElementRef<'_>> = document.select(&ANCHOR_SELECTOR).collect();
    tracing::debug!(count = anchors.len(), "scanning listing anchors");

    anchors
        .into_iter()
        .filter_map(|anchor| accept_anchor(anchor, base, MIN_LINK_TEXT_CHARS, LINK_KEYWORDS))
        .collect()
}

/// Table pass: the first anchor of every row of every table.
fn table_candidates(document: &Html, base: &Url) -> Vec<CompanyCandidate> {
    let mut out = Vec::new();
    let mut tables = 0usize;

    for table in document.select(&TABLE_SELECTOR) {
        tables += 1;
        for row in table.select(&ROW_SELECTOR) {
            let Some(anchor) = row.select(&FIRST_ANCHOR_SELECTOR).next() else {
                continue;
            };
            if let Some(candidate) =
                accept_anchor(anchor, base, MIN_TABLE_TEXT_CHARS, TABLE_KEYWORDS)
            {
                out.push(candidate);
            }
        }
    }

    tracing::debug!(tables, rows_matched = out.len(), "scanned listing tables");
    out
}

/// Turns `anchor` into a candidate if it has a non-empty `href` and its
/// trimmed text is longer than `min_chars` and mentions one of `keywords`.
fn accept_anchor(
    anchor: ElementRef<'_>,
    base: &Url,
    min_chars: usize,
    keywords: &[&str],
) -> Option<CompanyCandidate> {
    let href = anchor.value().attr("href").filter(|h| !h.is_empty())?;
    let name = trimmed_text(anchor);
    if name.chars().count() <= min_chars || !contains_any(&name, keywords) {
        return None;
    }
    let url = resolve_href(base, href)?;
    Some(CompanyCandidate { name, url })
}

/// Drops candidates whose URL has already been seen, keeping the first.
fn dedup_by_url(candidates: Vec<CompanyCandidate>) -> Vec<CompanyCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.url.clone()))
        .collect()
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
