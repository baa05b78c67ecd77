pub mod cfemail;
pub mod client;
pub mod detail;
pub mod error;
pub mod export;
pub mod listing;
mod parse_helpers;
pub mod pipeline;
pub mod rate_limit;

pub use cfemail::{decode_cfemail, try_decode_cfemail};
pub use client::{PageFetcher, ZaubaClient};
pub use detail::extract_record;
pub use error::{DecodeError, ExportError, ScraperError};
pub use export::{write_csv, write_records};
pub use listing::extract_candidates;
pub use pipeline::{scrape_recent_companies, RunEvent, RunObserver, ScrapeTarget, TracingObserver};
pub use rate_limit::PoliteDelay;
