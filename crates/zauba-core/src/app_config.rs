use std::path::PathBuf;

/// Default site root that relative listing links are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://www.zaubacorp.com";

/// Default listing page of recently incorporated companies.
pub const DEFAULT_LISTING_URL: &str =
    "https://www.zaubacorp.com/companies-list/age-A-company.html";

/// Desktop browser `User-Agent` presented to the registry site.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub listing_url: String,
    pub max_companies: usize,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}
