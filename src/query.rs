use crate::utils::slugify;

/// A keyword search against the marketplace listing
///
/// The base URL is derived once from the keyword and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
    base_url: String,
    max_items: usize,
    skip_sponsored: bool,
    strip_tracking: bool,
}

impl SearchQuery {
    /// Create a query for `keyword` under the marketplace `root_url`
    pub fn new(keyword: &str, max_items: usize, root_url: &str) -> Self {
        let mut base_url = root_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        base_url.push_str(&slugify(keyword));

        Self {
            keyword: keyword.trim().to_string(),
            base_url,
            max_items,
            skip_sponsored: false,
            strip_tracking: false,
        }
    }

    /// Exclude sponsored results from the discovered links
    pub fn with_skip_sponsored(mut self, skip: bool) -> Self {
        self.skip_sponsored = skip;
        self
    }

    /// Truncate discovered links after the tracking delimiter
    pub fn with_strip_tracking(mut self, strip: bool) -> Self {
        self.strip_tracking = strip;
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn skip_sponsored(&self) -> bool {
        self.skip_sponsored
    }

    pub fn strip_tracking(&self) -> bool {
        self.strip_tracking
    }
}
