use crate::error::ScrapeError;
use crate::parsers::{Selectors, resolve};
use crate::utils::vendor_from_url;
use scraper::Html;
use url::Url;

/// Fields scraped from an offer detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    /// Price as shown on the page, not parsed as a number
    pub price: String,
    pub vendor: String,
}

/// Parse price and vendor out of a detail page
pub fn parse_detail(
    html: &str,
    page_url: &Url,
    selectors: &Selectors,
) -> Result<DetailFields, ScrapeError> {
    let doc = Html::parse_document(html);
    let markers = selectors.source();

    let price = doc
        .select(&selectors.price)
        .next()
        .map(|el| {
            el.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .ok_or_else(|| ScrapeError::missing(&markers.price, page_url.as_str()))?;

    let vendor_href = doc
        .select(&selectors.vendor)
        .filter_map(|a| a.value().attr("href"))
        .next()
        .ok_or_else(|| ScrapeError::missing(&markers.vendor, page_url.as_str()))?;

    let vendor_url = resolve(page_url, vendor_href)?;
    let vendor = vendor_from_url(&vendor_url)
        .ok_or_else(|| ScrapeError::missing(&markers.vendor, page_url.as_str()))?;

    ::log::debug!("Detail {}: price={} vendor={}", page_url, price, vendor);

    Ok(DetailFields { price, vendor })
}
