use crate::crawlers::Fetcher;
use crate::error::ScrapeError;
use crate::filter::LinkFilter;
use crate::parsers::{ListingPage, Selectors, parse_listing, resolve_link};
use crate::query::SearchQuery;
use std::collections::HashSet;
use url::Url;

/// Outcome of scanning one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScan {
    /// Links kept from this page, in document order
    pub links: Vec<String>,

    /// Running item counter after this page
    pub counter: usize,

    /// Budget exhausted, no further pages should be visited
    pub stop: bool,
}

/// Scan the items of one listing page against the running item budget
///
/// Every visited item advances the counter, including sponsored items that
/// are skipped, so sponsors still consume the `max_items` budget. Hrefs are
/// only resolved once the budget reaches their item.
pub fn scan_page(
    page: &ListingPage,
    page_url: &Url,
    counter: usize,
    max_items: usize,
    filter: &LinkFilter,
    selectors: &Selectors,
) -> Result<PageScan, ScrapeError> {
    let mut counter = counter;
    let mut links = Vec::new();

    for item in &page.items {
        if counter >= max_items {
            ::log::debug!("Reached {} items, stopping discovery", max_items);
            return Ok(PageScan {
                links,
                counter,
                stop: true,
            });
        }
        counter += 1;

        let href = item.as_deref().ok_or_else(|| {
            ScrapeError::missing(&selectors.source().item_link, page_url.as_str())
        })?;
        let link = resolve_link(page_url, href)?;

        if filter.should_skip(&link) {
            ::log::debug!("Skipping sponsored link: {}", link);
            continue;
        }

        links.push(filter.normalize(&link)?);
    }

    Ok(PageScan {
        links,
        counter,
        stop: counter >= max_items,
    })
}

/// Walk the paginated listing for `query` and collect offer links
///
/// Pagination ends when the item budget is spent, when a page has no next
/// link, when a next link points at an already visited page or when
/// `max_pages` pages have been fetched (0 disables that bound).
pub async fn discover_links<F: Fetcher>(
    fetcher: &F,
    query: &SearchQuery,
    filter: &LinkFilter,
    selectors: &Selectors,
    max_pages: usize,
) -> Result<Vec<String>, ScrapeError> {
    let mut links = Vec::new();
    let mut counter = 0;
    let mut visited = HashSet::new();
    let mut next_url = Some(query.base_url().to_string());

    while let Some(url) = next_url.take() {
        if max_pages > 0 && visited.len() >= max_pages {
            ::log::warn!("Reached page limit ({}), stopping at {}", max_pages, url);
            break;
        }
        if !visited.insert(url.clone()) {
            ::log::warn!("Next page already visited, stopping: {}", url);
            break;
        }

        ::log::info!("Fetching listing page {}: {}", visited.len(), url);
        let html = fetcher.fetch(&url).await?;
        let page_url = Url::parse(&url)?;
        let page = parse_listing(&html, &page_url, selectors)?;

        let scan = scan_page(&page, &page_url, counter, query.max_items(), filter, selectors)?;
        ::log::info!(
            "Kept {} of {} items from {}",
            scan.links.len(),
            page.items.len(),
            url
        );

        counter = scan.counter;
        links.extend(scan.links);

        if scan.stop {
            break;
        }
        next_url = page.next_page;
    }

    ::log::info!(
        "Discovered {} links across {} pages",
        links.len(),
        visited.len()
    );
    Ok(links)
}
