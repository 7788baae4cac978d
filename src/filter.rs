use crate::config::{default_sponsor_patterns, default_tracking_delimiter};
use crate::error::ScrapeError;
use regex::Regex;

/// Configuration for filtering and normalizing discovered offer links
#[derive(Debug, Clone)]
pub struct LinkFilterConfig {
    /// Drop links matching a sponsor pattern
    pub skip_sponsored: bool,

    /// Regex patterns identifying sponsored links (unanchored, so `.` needs escaping)
    pub sponsor_patterns: Vec<String>,

    /// Truncate links after the tracking delimiter
    pub strip_tracking: bool,

    /// Substring where tracking parameters begin
    pub tracking_delimiter: String,

    /// Treat a missing delimiter as an error instead of keeping the link
    pub strict_tracking: bool,
}

impl Default for LinkFilterConfig {
    fn default() -> Self {
        Self {
            skip_sponsored: false,
            sponsor_patterns: default_sponsor_patterns(),
            strip_tracking: false,
            tracking_delimiter: default_tracking_delimiter(),
            strict_tracking: false,
        }
    }
}

/// Decides which offer links are kept and how they are normalized
#[derive(Debug)]
pub struct LinkFilter {
    config: LinkFilterConfig,
    sponsor_regexes: Vec<Regex>,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self::new(LinkFilterConfig::default()).expect("Default sponsor patterns should be valid")
    }
}

impl LinkFilter {
    /// Create a new link filter from configuration
    pub fn new(config: LinkFilterConfig) -> Result<Self, ScrapeError> {
        let mut sponsor_regexes = Vec::with_capacity(config.sponsor_patterns.len());
        for pattern in &config.sponsor_patterns {
            sponsor_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            sponsor_regexes,
        })
    }

    /// Whether a link points at a sponsored result
    pub fn is_sponsored(&self, link: &str) -> bool {
        self.sponsor_regexes.iter().any(|re| re.is_match(link))
    }

    /// Whether a link should be dropped from the results
    pub fn should_skip(&self, link: &str) -> bool {
        self.config.skip_sponsored && self.is_sponsored(link)
    }

    /// Apply tracking removal when enabled, otherwise return the link unchanged
    pub fn normalize(&self, link: &str) -> Result<String, ScrapeError> {
        if !self.config.strip_tracking {
            return Ok(link.to_string());
        }

        match strip_tracking(link, &self.config.tracking_delimiter) {
            Some(stripped) => Ok(stripped.to_string()),
            None if self.config.strict_tracking => Err(ScrapeError::DelimiterNotFound {
                delimiter: self.config.tracking_delimiter.clone(),
                link: link.to_string(),
            }),
            None => {
                ::log::warn!(
                    "Tracking delimiter {} not found, keeping link as is: {}",
                    self.config.tracking_delimiter,
                    link
                );
                Ok(link.to_string())
            }
        }
    }
}

/// Truncate `link` right after the first occurrence of `delimiter`
pub fn strip_tracking<'a>(link: &'a str, delimiter: &str) -> Option<&'a str> {
    if delimiter.is_empty() {
        return None;
    }
    link.find(delimiter)
        .map(|start| &link[..start + delimiter.len()])
}
