//! Internal DOM helpers shared by the listing and detail extractors.

use reqwest::Url;
use scraper::{ElementRef, Html};

/// Concatenates every text node under the document root, with no separators.
pub(crate) fn rendered_text(document: &Html) -> String {
    document.root_element().text().collect()
}

/// Concatenated text of `element`, trimmed.
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Resolves `href` against `base` the way a browser would.
///
/// Purely syntactic: fragments and `javascript:` links resolve like any
/// other reference. Returns `None` only when the joiner rejects the input.
pub(crate) fn resolve_href(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(error) => {
            tracing::debug!(href, %error, "skipping unresolvable href");
            None
        }
    }
}

/// `true` if the lowercased `text` contains any of `keywords`.
pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}
