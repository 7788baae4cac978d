use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// CSS selectors locating the structural markers on listing and detail pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Results container on a listing page
    #[serde(default = "default_container_selector")]
    pub container: String,

    /// Offer link inside each result item
    #[serde(default = "default_item_link_selector")]
    pub item_link: String,

    /// Pagination link to the next listing page
    #[serde(default = "default_next_page_selector")]
    pub next_page: String,

    /// Price text on a detail page
    #[serde(default = "default_price_selector")]
    pub price: String,

    /// Seller profile link on a detail page
    #[serde(default = "default_vendor_selector")]
    pub vendor: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: default_container_selector(),
            item_link: default_item_link_selector(),
            next_page: default_next_page_selector(),
            price: default_price_selector(),
            vendor: default_vendor_selector(),
        }
    }
}

/// What to do when a single detail page cannot be scraped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// First failure aborts the whole extraction
    #[default]
    Abort,
    /// Log the failure and drop the offer
    Skip,
}

/// Configuration for the offer scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Marketplace root the keyword slug is appended to
    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Regex patterns identifying sponsored links, matched anywhere in the
    /// link. Metacharacters such as `.` must be escaped to match literally.
    #[serde(default = "default_sponsor_patterns")]
    pub sponsor_patterns: Vec<String>,

    /// Substring where tracking parameters begin
    #[serde(default = "default_tracking_delimiter")]
    pub tracking_delimiter: String,

    /// Fail instead of keeping the link when the delimiter is missing
    #[serde(default)]
    pub strict_tracking: bool,

    /// Optional upper bound on listing pages visited (0, the default, means no bound)
    #[serde(default)]
    pub max_pages: usize,

    /// Number of detail pages fetched at once
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Request timeout in seconds (client default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            user_agent: default_user_agent(),
            selectors: SelectorConfig::default(),
            sponsor_patterns: default_sponsor_patterns(),
            tracking_delimiter: default_tracking_delimiter(),
            strict_tracking: false,
            max_pages: 0,
            detail_concurrency: default_detail_concurrency(),
            failure_policy: FailurePolicy::default(),
            timeout_secs: None,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_root_url() -> String {
    "https://listado.mercadolibre.com.ar/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:61.0) Gecko/20100101 Firefox/61.0".to_string()
}

fn default_container_selector() -> String {
    "ol.ui-search-layout.ui-search-layout--stack".to_string()
}

fn default_item_link_selector() -> String {
    "a.ui-search-item__group__element.ui-search-link".to_string()
}

fn default_next_page_selector() -> String {
    "a.andes-pagination__link.ui-search-link".to_string()
}

fn default_price_selector() -> String {
    "span.andes-money-amount__fraction".to_string()
}

fn default_vendor_selector() -> String {
    "a.ui-pdp-media__action".to_string()
}

pub(crate) fn default_sponsor_patterns() -> Vec<String> {
    vec!["https://click1".to_string()]
}

pub(crate) fn default_tracking_delimiter() -> String {
    "-_JM".to_string()
}

fn default_detail_concurrency() -> usize {
    1
}
