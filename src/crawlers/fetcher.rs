use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use reqwest::StatusCode;

/// Source of page bodies for the crawlers
///
/// Implementations return the body text of a successful GET, `NotFound` for a
/// 404 and another fetch error for anything else.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client sending the configured User-Agent
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let start = std::time::Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            ::log::error!("Not found: {}", url);
            return Err(ScrapeError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}
