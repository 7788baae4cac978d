use crate::config::FailurePolicy;
use crate::crawlers::Fetcher;
use crate::error::ScrapeError;
use crate::parsers::{Selectors, parse_detail};
use crate::results::OfferRecord;
use futures::stream::{self, StreamExt};
use std::pin::pin;
use url::Url;

/// Visit each link and extract its price and vendor
///
/// Output order matches input order. At most `concurrency` detail pages are
/// in flight at once; with the default of 1 every fetch completes before the
/// next one starts. Under `FailurePolicy::Abort` the first failure is
/// returned and no records survive.
pub async fn extract_fields<F: Fetcher>(
    fetcher: &F,
    links: Vec<String>,
    selectors: &Selectors,
    concurrency: usize,
    policy: FailurePolicy,
) -> Result<Vec<OfferRecord>, ScrapeError> {
    let total = links.len();
    let mut records = Vec::with_capacity(total);

    let mut results = pin!(
        stream::iter(links)
            .map(move |link| async move {
                let result = fetch_offer(fetcher, &link, selectors).await;
                (link, result)
            })
            .buffered(concurrency.max(1))
    );

    let mut position = 0;
    while let Some((link, result)) = results.next().await {
        position += 1;
        match result {
            Ok(record) => {
                ::log::info!("Scraped offer {}/{}: {}", position, total, link);
                records.push(record);
            }
            Err(e) if policy == FailurePolicy::Skip => {
                ::log::warn!("Skipping offer {}/{} ({}): {}", position, total, link, e);
            }
            Err(e) => {
                ::log::error!("Aborting extraction at offer {}/{}: {}", position, total, e);
                return Err(e);
            }
        }
    }

    Ok(records)
}

async fn fetch_offer<F: Fetcher>(
    fetcher: &F,
    link: &str,
    selectors: &Selectors,
) -> Result<OfferRecord, ScrapeError> {
    let html = fetcher.fetch(link).await?;
    let page_url = Url::parse(link)?;
    let fields = parse_detail(&html, &page_url, selectors)?;

    Ok(OfferRecord::new(link.to_string()).with_fields(fields.price, fields.vendor))
}
