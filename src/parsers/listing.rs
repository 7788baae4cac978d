use crate::error::ScrapeError;
use crate::parsers::{Selectors, resolve};
use scraper::{ElementRef, Html};
use url::Url;

/// One parsed page of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Raw href of each result item in document order (`None` when the item has no link marker)
    pub items: Vec<Option<String>>,

    /// Absolute URL of the next results page, if any
    pub next_page: Option<String>,
}

/// Parse a listing page into its result items and next-page link
///
/// Fails with `MissingMarker` when the results container is absent.
pub fn parse_listing(
    html: &str,
    page_url: &Url,
    selectors: &Selectors,
) -> Result<ListingPage, ScrapeError> {
    let doc = Html::parse_document(html);

    let container = doc
        .select(&selectors.container)
        .next()
        .ok_or_else(|| ScrapeError::missing(&selectors.source().container, page_url.as_str()))?;

    let items = container
        .children()
        .filter_map(ElementRef::wrap)
        .map(|item| {
            item.select(&selectors.item_link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(String::from)
        })
        .collect::<Vec<_>>();

    let next_page = doc
        .select(&selectors.next_page)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| !href.trim().is_empty())
        .map(|href| resolve(page_url, href).map(String::from))
        .transpose()?;

    ::log::debug!(
        "Listing {} has {} items, next page: {:?}",
        page_url,
        items.len(),
        next_page
    );

    Ok(ListingPage { items, next_page })
}
