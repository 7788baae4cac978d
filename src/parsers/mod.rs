pub mod detail;
pub mod listing;

#[cfg(test)]
pub(crate) mod tests;

use crate::config::SelectorConfig;
use crate::error::ScrapeError;
use scraper::Selector;
use url::Url;

pub use detail::{DetailFields, parse_detail};
pub use listing::{ListingPage, parse_listing};

/// Compiled CSS selectors for every structural marker the scraper relies on
#[derive(Debug, Clone)]
pub struct Selectors {
    pub container: Selector,
    pub item_link: Selector,
    pub next_page: Selector,
    pub price: Selector,
    pub vendor: Selector,
    config: SelectorConfig,
}

impl Selectors {
    /// Compile all selectors, failing on the first invalid one
    pub fn new(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            container: compile(&config.container)?,
            item_link: compile(&config.item_link)?,
            next_page: compile(&config.next_page)?,
            price: compile(&config.price)?,
            vendor: compile(&config.vendor)?,
            config: config.clone(),
        })
    }

    /// Source text of the selectors, used when reporting missing markers
    pub fn source(&self) -> &SelectorConfig {
        &self.config
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new(&SelectorConfig::default()).expect("Default selectors should be valid")
    }
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| {
        ::log::debug!("Selector {} failed to parse: {:?}", selector, e);
        ScrapeError::InvalidSelector {
            selector: selector.to_string(),
        }
    })
}

/// Resolve an href found on `page_url` into an absolute URL
pub(crate) fn resolve(page_url: &Url, href: &str) -> Result<Url, ScrapeError> {
    Ok(page_url.join(href.trim())?)
}

/// Turn an offer href into a link, keeping absolute hrefs byte-for-byte
///
/// Only relative hrefs are joined onto `page_url`.
pub fn resolve_link(page_url: &Url, href: &str) -> Result<String, ScrapeError> {
    match Url::parse(href) {
        Ok(_) => Ok(href.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(resolve(page_url, href)?.into()),
        Err(e) => Err(e.into()),
    }
}
