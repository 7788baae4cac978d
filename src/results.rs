use serde::{Deserialize, Serialize};

/// One offer: its detail-page link plus the fields scraped from that page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRecord {
    /// Link to the offer detail page
    pub link: String,

    /// Raw price text, absent until extraction
    pub price: Option<String>,

    /// Seller name, absent until extraction
    pub vendor: Option<String>,
}

impl OfferRecord {
    /// Create a record for a discovered link with no fields yet
    pub fn new(link: String) -> Self {
        Self {
            link,
            price: None,
            vendor: None,
        }
    }

    /// Fill in the fields extracted from the detail page
    pub fn with_fields(mut self, price: String, vendor: String) -> Self {
        self.price = Some(price);
        self.vendor = Some(vendor);
        self
    }
}
