//! Sequential scrape run: listing page → candidates → detail pages → records.
//!
//! Everything happens on the caller's task, one request at a time. Progress is
//! reported through a [`RunObserver`] so callers decide how to surface it;
//! [`TracingObserver`] logs each event.

use std::path::PathBuf;
use std::time::Duration;

use zauba_core::{CompanyCandidate, CompanyRecord, Field};

use crate::client::PageFetcher;
use crate::detail::extract_record;
use crate::listing::extract_candidates;
use crate::rate_limit::PoliteDelay;

/// What to scrape and how much of it.
#[derive(Debug, Clone)]
pub struct ScrapeTarget {
    /// Listing page holding the company links.
    pub listing_url: String,
    /// Site root that relative links resolve against.
    pub base_url: String,
    /// Upper bound on detail pages fetched.
    pub max_companies: usize,
    /// When set, the raw listing HTML is saved here before parsing.
    pub dump_listing_to: Option<PathBuf>,
}

/// Progress notifications emitted during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    ListingFetched {
        url: String,
        bytes: usize,
    },
    /// The listing page could not be fetched; the run ends with no records.
    ListingUnavailable {
        url: String,
        reason: String,
    },
    /// The listing page parsed to zero candidates; the run ends.
    NoCandidates {
        url: String,
    },
    CandidatesSelected {
        found: usize,
        selected: usize,
    },
    ProcessingCandidate {
        /// 1-based position within the selected candidates.
        index: usize,
        total: usize,
        candidate: CompanyCandidate,
    },
    RecordExtracted {
        record: CompanyRecord,
    },
    /// A detail page failed to fetch and was skipped.
    DetailSkipped {
        url: String,
        reason: String,
    },
    Pausing {
        delay: Duration,
    },
    Finished {
        records: usize,
    },
}

/// Receives [`RunEvent`]s as a run progresses.
pub trait RunObserver {
    fn on_event(&mut self, event: &RunEvent);
}

/// Logs every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_event(&mut self, event: &RunEvent) {
        match event {
            RunEvent::ListingFetched { url, bytes } => {
                tracing::info!(url = %url, bytes, "fetched listing page");
            }
            RunEvent::ListingUnavailable { url, reason } => {
                tracing::error!(url = %url, reason = %reason, "failed to get listing page");
            }
            RunEvent::NoCandidates { url } => {
                tracing::warn!(url = %url, "no companies found on listing page");
            }
            RunEvent::CandidatesSelected { found, selected } => {
                tracing::info!(found, selected, "processing companies");
            }
            RunEvent::ProcessingCandidate {
                index,
                total,
                candidate,
            } => {
                tracing::info!(
                    index,
                    total,
                    name = %truncate(&candidate.name, 50),
                    url = %candidate.url,
                    "processing company"
                );
            }
            RunEvent::RecordExtracted { record } => {
                tracing::info!(
                    name = %truncate(record.get(Field::CompanyName), 40),
                    cin = record.get(Field::RegistrationId),
                    email = record.get(Field::Email),
                    incorporated = record.get(Field::DateOfIncorporation),
                    populated = record.populated_count(),
                    "extracted company record"
                );
            }
            RunEvent::DetailSkipped { url, reason } => {
                tracing::warn!(url = %url, reason = %reason, "skipping company page");
            }
            RunEvent::Pausing { delay } => {
                tracing::debug!(?delay, "pausing before next request");
            }
            RunEvent::Finished { records } => {
                tracing::info!(records, "scrape run finished");
            }
        }
    }
}

/// Runs one full scrape and returns the records in candidate order.
///
/// Never fails: a listing that cannot be fetched or holds no candidates
/// yields an empty vector, and detail pages that fail to fetch are skipped.
/// Each successfully fetched detail page produces exactly one record.
pub async fn scrape_recent_companies<F, O>(
    fetcher: &F,
    delay: &PoliteDelay,
    target: &ScrapeTarget,
    observer: &mut O,
) -> Vec<CompanyRecord>
where
    F: PageFetcher,
    O: RunObserver + ?Sized,
{
    let candidates = match load_candidates(fetcher, target, observer).await {
        Some(candidates) => candidates,
        None => {
            observer.on_event(&RunEvent::Finished { records: 0 });
            return Vec::new();
        }
    };

    let total = candidates.len();
    let mut records = Vec::with_capacity(total);

    for (i, candidate) in candidates.into_iter().enumerate() {
        if i > 0 {
            let waited = delay.pause().await;
            if !waited.is_zero() {
                observer.on_event(&RunEvent::Pausing { delay: waited });
            }
        }

        let url = candidate.url.clone();
        observer.on_event(&RunEvent::ProcessingCandidate {
            index: i + 1,
            total,
            candidate,
        });

        match fetcher.fetch_page(&url).await {
            Ok(html) => {
                let record = extract_record(&html, &url);
                observer.on_event(&RunEvent::RecordExtracted {
                    record: record.clone(),
                });
                records.push(record);
            }
            Err(e) => {
                observer.on_event(&RunEvent::DetailSkipped {
                    url,
                    reason: e.to_string(),
                });
            }
        }
    }

    observer.on_event(&RunEvent::Finished {
        records: records.len(),
    });
    records
}

/// Fetches and parses the listing page, truncated to `max_companies`.
///
/// `None` means the run has nothing to process.
async fn load_candidates<F, O>(
    fetcher: &F,
    target: &ScrapeTarget,
    observer: &mut O,
) -> Option<Vec<CompanyCandidate>>
where
    F: PageFetcher,
    O: RunObserver + ?Sized,
{
    let html = match fetcher.fetch_page(&target.listing_url).await {
        Ok(html) => html,
        Err(e) => {
            observer.on_event(&RunEvent::ListingUnavailable {
                url: target.listing_url.clone(),
                reason: e.to_string(),
            });
            return None;
        }
    };
    observer.on_event(&RunEvent::ListingFetched {
        url: target.listing_url.clone(),
        bytes: html.len(),
    });

    if let Some(path) = &target.dump_listing_to {
        match tokio::fs::write(path, &html).await {
            Ok(()) => tracing::info!(path = %path.display(), "saved listing HTML"),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "could not save listing HTML");
            }
        }
    }

    let mut candidates = match extract_candidates(&html, &target.base_url) {
        Ok(candidates) => candidates,
        Err(e) => {
            observer.on_event(&RunEvent::ListingUnavailable {
                url: target.listing_url.clone(),
                reason: e.to_string(),
            });
            return None;
        }
    };

    if candidates.is_empty() {
        observer.on_event(&RunEvent::NoCandidates {
            url: target.listing_url.clone(),
        });
        return None;
    }

    let found = candidates.len();
    candidates.truncate(target.max_companies);
    observer.on_event(&RunEvent::CandidatesSelected {
        found,
        selected: candidates.len(),
    });
    Some(candidates)
}

/// First `max` characters of `s`, for log lines.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
