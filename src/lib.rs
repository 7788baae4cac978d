pub mod config;
pub mod crawlers;
pub mod error;
pub mod export;
pub mod filter;
pub mod parsers;
pub mod query;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{FailurePolicy, ScraperConfig};
pub use crawlers::{Fetcher, HttpFetcher};
pub use error::ScrapeError;
pub use export::{OutputFormat, export};
pub use query::SearchQuery;
pub use results::OfferRecord;

use filter::{LinkFilter, LinkFilterConfig};
use parsers::Selectors;

/// Runs a search: discovers offer links on the listing, then scrapes each offer
///
/// The two phases exchange plain values, so they can also be driven separately
/// through [`Collector::discover_links`] and [`Collector::extract_fields`].
pub struct Collector<F = HttpFetcher> {
    query: SearchQuery,
    config: ScraperConfig,
    fetcher: F,
    selectors: Selectors,
    filter: LinkFilter,
}

impl Collector<HttpFetcher> {
    /// Create a collector that fetches pages over HTTP
    pub fn new(query: SearchQuery, config: ScraperConfig) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(query, config, fetcher)
    }
}

impl<F: Fetcher> Collector<F> {
    /// Create a collector on top of any page source
    pub fn with_fetcher(
        query: SearchQuery,
        config: ScraperConfig,
        fetcher: F,
    ) -> Result<Self, ScrapeError> {
        let selectors = Selectors::new(&config.selectors)?;
        let filter = LinkFilter::new(LinkFilterConfig {
            skip_sponsored: query.skip_sponsored(),
            sponsor_patterns: config.sponsor_patterns.clone(),
            strip_tracking: query.strip_tracking(),
            tracking_delimiter: config.tracking_delimiter.clone(),
            strict_tracking: config.strict_tracking,
        })?;

        Ok(Self {
            query,
            config,
            fetcher,
            selectors,
            filter,
        })
    }

    /// Walk the listing pages and return at most `max_items` offer links
    pub async fn discover_links(&self) -> Result<Vec<String>, ScrapeError> {
        crawlers::discover_links(
            &self.fetcher,
            &self.query,
            &self.filter,
            &self.selectors,
            self.config.max_pages,
        )
        .await
    }

    /// Scrape price and vendor for each link, preserving order
    pub async fn extract_fields(&self, links: Vec<String>) -> Result<Vec<OfferRecord>, ScrapeError> {
        crawlers::extract_fields(
            &self.fetcher,
            links,
            &self.selectors,
            self.config.detail_concurrency,
            self.config.failure_policy,
        )
        .await
    }

    /// Run both phases
    pub async fn collect(&self) -> Result<Vec<OfferRecord>, ScrapeError> {
        ::log::info!(
            "Collecting up to {} offers for \"{}\" from {}",
            self.query.max_items(),
            self.query.keyword(),
            self.query.base_url()
        );

        let links = self.discover_links().await?;
        let records = self.extract_fields(links).await?;

        ::log::info!("Collected {} offers", records.len());
        Ok(records)
    }
}
