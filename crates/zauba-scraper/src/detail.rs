//! Field extraction from a company detail page.
//!
//! Each column of [`CompanyRecord`] is filled by one independent rule. Rules
//! are plain functions from a parsed page to `Option<String>` and never fail;
//! a rule that does not match yields `None`, which becomes an empty column
//! when the record is assembled. Adding a field means adding one rule and
//! one entry in [`RULES`].
//!
//! Columns without a rule (`RegistrationNumber`, `PaidUpCapital`) are always
//! empty.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use zauba_core::{CompanyRecord, Field};

use crate::cfemail::decode_cfemail;
use crate::parse_helpers::{rendered_text, trimmed_text};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));
static CF_EMAIL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.__cf_email__").expect("valid selector"));

static CIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?i:cin)[:\s]*)?([A-Z]\d{5}[A-Z]{2}\d{4}[A-Z]{3}\d{6})").expect("valid regex")
});
static ACTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bactive\b").expect("valid regex"));
static INACTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\binactive\b").expect("valid regex"));
static INCORPORATION_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:incorporation|incorporated)[:\s]*(\d{4}-\d{2}-\d{2})").expect("valid regex")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+91[- ]?\d{10}|\b\d{10}\b").expect("valid regex"));
static ROC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ROC[:\s]*([^,\n]+)").expect("valid regex"));

/// Marker separating the company name from the site suffix in `<title>`.
const TITLE_SUFFIX_SEPARATOR: &str = " - ";

/// Attribute carrying the obfuscated address on `a.__cf_email__`.
const CF_EMAIL_ATTR: &str = "data-cfemail";

/// Label searched for in text nodes by the address rule.
const ADDRESS_LABEL: &str = "address";

/// Element type holding the address value next to its label.
const ADDRESS_VALUE_TAG: &str = "span";

/// A parsed detail page: the tag tree plus its rendered text.
pub(crate) struct DetailPage<'a> {
    source_url: &'a str,
    document: Html,
    text: String,
}

impl<'a> DetailPage<'a> {
    /// Parses `html` fetched from `source_url`.
    #[must_use]
    pub(crate) fn parse(html: &str, source_url: &'a str) -> Self {
        let document = Html::parse_document(html);
        let text = rendered_text(&document);
        Self {
            source_url,
            document,
            text,
        }
    }
}

/// Extraction rule for one field.
type FieldRule = fn(&DetailPage<'_>) -> Option<String>;

/// Every rule, in column order.
const RULES: &[(Field, FieldRule)] = &[
    (Field::Url, source_url),
    (Field::CompanyName, company_name),
    (Field::RegistrationId, registration_id),
    (Field::Status, status),
    (Field::DateOfIncorporation, date_of_incorporation),
    (Field::Email, email),
    (Field::Phone, phone),
    (Field::Address, address),
    (Field::RegistrarOffice, registrar_office),
];

/// Extracts a [`CompanyRecord`] from detail-page HTML.
///
/// Never fails: unmatched fields are left empty. The same input always
/// produces the same record.
#[must_use]
pub fn extract_record(html: &str, source_url: &str) -> CompanyRecord {
    let page = DetailPage::parse(html, source_url);
    extract_from_page(&page)
}

/// Applies every rule to an already-parsed page.
#[must_use]
pub(crate) fn extract_from_page(page: &DetailPage<'_>) -> CompanyRecord {
    CompanyRecord::assemble(RULES.iter().map(|&(field, rule)| {
        let value = rule(page);
        if value.is_none() {
            tracing::trace!(url = page.source_url, %field, "no match for field");
        }
        (field, value)
    }))
}

fn source_url(page: &DetailPage<'_>) -> Option<String> {
    Some(page.source_url.to_owned())
}

/// `<title>` text up to the first `" - "`.
fn company_name(page: &DetailPage<'_>) -> Option<String> {
    let title = page.document.select(&TITLE_SELECTOR).next()?;
    let raw: String = title.text().collect();
    let name = raw
        .split(TITLE_SUFFIX_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim();
    non_empty(name)
}

/// The 21-character corporate identity number, with any `CIN:` label dropped.
fn registration_id(page: &DetailPage<'_>) -> Option<String> {
    first_capture(&CIN_RE, &page.text)
}

/// `"Active"` wins over `"Inactive"` when both words appear.
fn status(page: &DetailPage<'_>) -> Option<String> {
    if ACTIVE_RE.is_match(&page.text) {
        Some("Active".to_owned())
    } else if INACTIVE_RE.is_match(&page.text) {
        Some("Inactive".to_owned())
    } else {
        None
    }
}

fn date_of_incorporation(page: &DetailPage<'_>) -> Option<String> {
    first_capture(&INCORPORATION_DATE_RE, &page.text)
}

/// The decoded Cloudflare-protected address when the page has one, else the
/// first plain address in the text.
///
/// A present-but-undecodable payload yields an empty string rather than
/// falling through to the text scan.
fn email(page: &DetailPage<'_>) -> Option<String> {
    let encoded = page
        .document
        .select(&CF_EMAIL_SELECTOR)
        .next()
        .and_then(|anchor| anchor.value().attr(CF_EMAIL_ATTR))
        .filter(|encoded| !encoded.is_empty());

    if let Some(encoded) = encoded {
        return Some(decode_cfemail(encoded));
    }

    EMAIL_RE.find(&page.text).map(|m| m.as_str().to_owned())
}

fn phone(page: &DetailPage<'_>) -> Option<String> {
    PHONE_RE.find(&page.text).map(|m| m.as_str().to_owned())
}

/// Text of the first `<span>` following the element that holds the first
/// text node mentioning "address".
fn address(page: &DetailPage<'_>) -> Option<String> {
    let label = page.document.root_element().descendants().find(|node| {
        node.value()
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(ADDRESS_LABEL))
    })?;
    let holder = label.parent()?;
    let value = holder
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == ADDRESS_VALUE_TAG)?;
    non_empty(&trimmed_text(value))
}

/// Registrar of Companies office, up to the next comma or line break.
fn registrar_office(page: &DetailPage<'_>) -> Option<String> {
    let caps = ROC_RE.captures(&page.text)?;
    non_empty(caps.get(1)?.as_str().trim())
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
