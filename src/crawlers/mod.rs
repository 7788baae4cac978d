pub mod detail;
pub mod fetcher;
pub mod listing;

pub use detail::extract_fields;
pub use fetcher::{Fetcher, HttpFetcher};
pub use listing::{PageScan, discover_links, scan_page};
